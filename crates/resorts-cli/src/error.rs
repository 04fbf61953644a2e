use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Core(#[from] resorts_core::Error),
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
    #[error("Resort ID cannot be empty")]
    EmptyResortId,
    #[error("Resort not found for id/prefix: {0}")]
    ResortNotFound(String),
    #[error("{0}")]
    AmbiguousResortId(String),
    #[error("Could not {action}: {reason}")]
    RequestFailed {
        action: &'static str,
        reason: String,
    },
}
