use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Browser launch failed: {0}")]
    LaunchError(String),

    #[error("Navigation failed: {0}")]
    NavigationError(String),

    #[error("Element not found: {0}")]
    ElementNotFound(String),

    #[error("Timeout waiting for: {0}")]
    Timeout(String),

    #[error("JavaScript error: {0}")]
    JsError(String),

    #[error("Unknown form type - could not detect form fields")]
    UnknownFormType,

    #[error("No values available in word list: {0}")]
    EmptyWordList(String),

    #[error("Failed to read word list {}: {source}", path.display())]
    WordList {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Manual mode requires --data argument with user data")]
    MissingManualData,

    #[error("Invalid user data: {0}")]
    InvalidUserData(String),

    #[error("Invalid user data payload: {0}")]
    InvalidPayload(#[from] serde_json::Error),

    #[error("CDP error: {0}")]
    CdpError(#[from] chromiumoxide::error::CdpError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
