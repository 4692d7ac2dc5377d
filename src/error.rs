//! Errors at the collaborator boundaries. The fusion engine itself never fails.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SentinelError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Unknown city: {0}")]
    UnknownCity(String),
    #[error("Month must be 1-12, got {0}")]
    InvalidMonth(u32),
}

pub type Result<T> = std::result::Result<T, SentinelError>;
