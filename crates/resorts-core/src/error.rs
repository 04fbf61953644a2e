//! Error types for resorts-core

use thiserror::Error;

/// Result type alias using resorts-core's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in resorts-core operations
#[derive(Error, Debug)]
pub enum Error {
    /// Request could not be sent or the connection failed
    #[error("Transport error: {0}")]
    Transport(String),

    /// Store answered with a non-success status
    #[error("Request failed with HTTP {status}: {body}")]
    Status { status: u16, body: String },

    /// Response body was not the expected JSON
    #[error("Decode error: {0}")]
    Decode(String),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Form draft cannot be turned into a request body
    #[error("Invalid draft: {0}")]
    InvalidDraft(String),

    /// Resort not found
    #[error("Resort not found: {0}")]
    NotFound(String),

    /// `SQLite` error
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Whether this error came from talking to the collection store.
    pub const fn is_transport(&self) -> bool {
        matches!(
            self,
            Self::Transport(_) | Self::Status { .. } | Self::Decode(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transport_family_is_classified() {
        assert!(Error::Transport("refused".into()).is_transport());
        assert!(Error::Status {
            status: 500,
            body: String::new()
        }
        .is_transport());
        assert!(Error::Decode("bad json".into()).is_transport());
        assert!(!Error::InvalidDraft("slopes".into()).is_transport());
        assert!(!Error::NotFound("abc".into()).is_transport());
    }
}
