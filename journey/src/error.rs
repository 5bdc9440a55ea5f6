//! Error types

use thiserror::Error;

/// Rejected birth-year submission
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("birth year must be a whole number, got {0:?}")]
    NotANumber(String),

    #[error("birth year {year} is outside {min}..={max}")]
    OutOfRange { year: i32, min: i32, max: i32 },
}

/// Failure fetching events from a data source
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("event source unavailable: {0}")]
    Unavailable(String),

    #[error("event source returned malformed data: {0}")]
    Malformed(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}
