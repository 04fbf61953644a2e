//! resorts-core - Core library for ski resort management
//!
//! This crate contains the shared models, the REST client, the resort list
//! controller and the storage layer used by the API server and the CLI.

pub mod client;
pub mod config;
pub mod controller;
pub mod db;
pub mod error;
pub mod models;
pub mod util;

pub use client::{HttpResortStore, ResortStore};
pub use config::ClientConfig;
pub use controller::{ConfirmDelete, ResortListController};
pub use error::{Error, Result};
pub use models::{
    Difficulty, FormMode, FormState, Resort, ResortDraft, ResortFields, ResortId, ResortUpdate,
};
