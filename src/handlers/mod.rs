mod crud_handler;

pub use crud_handler::*;
