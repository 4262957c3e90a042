mod connection;

pub use connection::DatabaseConnection;
