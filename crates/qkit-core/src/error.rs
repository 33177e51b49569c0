//! Error types for qkit-core operations.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QkitError {
    #[error("Missing date: {0}")]
    MissingDate(String),

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Invalid timezone: {0}")]
    InvalidTimezone(String),

    #[error("Date out of range: {0}")]
    OutOfRange(String),
}

impl QkitError {
    /// Every failure is caused by caller input and can be fixed by re-prompting.
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            QkitError::MissingDate(_)
                | QkitError::InvalidDate(_)
                | QkitError::InvalidTimezone(_)
                | QkitError::OutOfRange(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, QkitError>;
