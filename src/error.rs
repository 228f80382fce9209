//! Error types shared across the crate.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenieError {
    #[error("Invalid password length: {0}")]
    InvalidLength(String),
    #[error("Password did not reach Very Strong after {rounds} improvement rounds")]
    ImprovementLimitExceeded { rounds: usize },
    #[error("Console interaction failed: {0}")]
    Console(String),
}

impl From<inquire::InquireError> for GenieError {
    fn from(err: inquire::InquireError) -> Self {
        GenieError::Console(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, GenieError>;
