//! Data models for ski resort management

mod draft;
mod resort;

pub use draft::{FormMode, FormState, ResortDraft};
pub use resort::{
    Difficulty, ParseDifficultyError, Resort, ResortFields, ResortId, ResortUpdate,
};
