use thiserror::Error;

pub type Result<T> = std::result::Result<T, GpaintError>;

#[derive(Error, Debug)]
pub enum GpaintError {
    #[error("Day index {index} out of range for a {len}-day year")]
    Index { index: usize, len: usize },
    #[error("Validation error: {0}")]
    Validation(String),
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("State error: {0}")]
    State(String),
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),
    #[error("Store error: {0}")]
    Store(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Clipboard error: {0}")]
    Clipboard(String),
    #[error("Invalid date: {0}")]
    InvalidDate(String),
}
