//! resorts-api - HTTP service for the ski resort collection
//!
//! Serves the `/api/resorts` CRUD contract over a `SQLite` database.

pub mod config;
pub mod error;
pub mod routes;

pub use config::AppConfig;
pub use routes::{app_router, AppState};
