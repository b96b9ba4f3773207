use thiserror::Error;

#[derive(Error, Debug)]
pub enum SchedulingError {
    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("An appointment already exists on {date} at {time}")]
    DuplicateBooking { date: String, time: String },

    #[error("Unsupported schema version {found} for '{key}'")]
    UnsupportedSchema { key: String, found: u32 },

    #[error("Backup document is not in the expected format: {0}")]
    RestoreFormat(String),

    #[error("Store error: {0}")]
    Store(#[from] eyre::Report),
}

pub type SchedulingResult<T> = Result<T, SchedulingError>;
