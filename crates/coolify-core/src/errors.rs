use thiserror::Error;

/// Core domain errors - no I/O dependencies
#[derive(Error, Debug)]
pub enum CoolifyError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Conflicting selectors: {0}")]
    ConflictingSelectors(String),
}

pub type Result<T> = std::result::Result<T, CoolifyError>;
