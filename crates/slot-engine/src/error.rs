//! Error types for slot-engine operations.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SlotError {
    #[error("Invalid date format. Expected format is DD-MM-YYYY, got '{0}'")]
    InvalidDate(String),

    #[error("Invalid duration: {0} minutes (must be positive)")]
    InvalidDuration(i64),

    #[error("Invalid buffers: durationBefore={before}, durationAfter={after} (must not be negative)")]
    InvalidBuffers { before: i64, after: i64 },

    #[error("Calendar not found: {0}")]
    CalendarNotFound(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Calendar parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SlotError>;
