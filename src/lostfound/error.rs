use crate::model::RecordId;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LostFoundError {
    #[error("Item with ID {0} not found.")]
    NotFound(RecordId),

    #[error("Malformed input: {0}")]
    MalformedInput(String),

    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),
}

impl LostFoundError {
    /// Domain errors are reported to the user and the session continues.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            LostFoundError::NotFound(_)
                | LostFoundError::MalformedInput(_)
                | LostFoundError::PermissionDenied(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, LostFoundError>;
