//! Errors raised by the host-side layers (config files, session storage,
//! backend calls). The expression helpers and the battle engine never fail.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum QuestError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("backend request failed: {0}")]
    Http(String),

    #[error("could not determine home directory")]
    NoHomeDir,
}

impl From<ureq::Error> for QuestError {
    fn from(err: ureq::Error) -> Self {
        QuestError::Http(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, QuestError>;
