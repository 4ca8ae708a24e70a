//! Error types for report generation

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Suite exited without an open suite: {0}")]
    UnbalancedSuite(String),

    #[error("Suite mismatch: expected exit of '{expected}', got '{found}'")]
    SuiteMismatch { expected: String, found: String },

    #[error("Run ended with {0} suite(s) still open")]
    UnclosedSuites(usize),

    #[error("Run already finalized, cannot accept {0}")]
    AlreadyFinalized(&'static str),

    #[error("Event stream ended before run end")]
    Truncated,

    #[error("Invalid event on line {line}: {reason}")]
    InvalidEvent { line: usize, reason: String },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
}

pub type ReportResult<T> = Result<T, ReportError>;
