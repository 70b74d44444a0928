use thiserror::Error;

pub type Result<T> = std::result::Result<T, CalendarError>;

#[derive(Error, Debug)]
pub enum CalendarError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid date: {0}")]
    InvalidDate(String),
    #[error("Invalid week start: {0} (expected 0 = Sunday through 6 = Saturday)")]
    InvalidWeekStart(u8),
    #[error("Other: {0}")]
    Other(String),
}
