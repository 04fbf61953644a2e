//! Database layer backing the resort collection store

mod connection;
mod migrations;
mod repository;

pub use connection::Database;
pub use repository::{ResortRepository, SqliteResortRepository};
