//! Error types for pattern generation

use std::fmt;

/// Errors that can occur while configuring or generating a pattern
#[derive(Debug, Clone)]
pub enum PatternError {
    /// Configuration validation failed
    InvalidConfig(String),
    /// A distribution was named that this crate does not implement
    UnknownDistribution(String),
}

impl fmt::Display for PatternError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PatternError::InvalidConfig(msg) => write!(f, "invalid configuration: {}", msg),
            PatternError::UnknownDistribution(name) => {
                write!(f, "unknown distribution type: {}", name)
            }
        }
    }
}

impl std::error::Error for PatternError {}

/// Result type alias for pattern operations
pub type Result<T> = std::result::Result<T, PatternError>;
