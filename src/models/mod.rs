mod domain;

pub use domain::*;
