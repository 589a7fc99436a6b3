//! Typed errors for the answer-structure library.
//!
//! Parsing itself is total and never returns an error: unrecognized input
//! degrades to a fallback result instead. Errors only exist at the edges
//! where callers hand us configuration.

use thiserror::Error;

/// Errors raised while building or validating parser configuration.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    /// Similarity threshold outside `0.0..=1.0` (or NaN)
    #[error("similarity threshold must be within 0.0..=1.0, got {value}")]
    InvalidThreshold { value: f64 },

    /// A count limit that must be at least one was zero
    #[error("limit `{name}` must be greater than zero")]
    InvalidLimit { name: &'static str },

    /// An environment override could not be parsed
    #[error("environment variable {var} has invalid value {value:?}")]
    InvalidEnv { var: &'static str, value: String },
}

/// Result type alias for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;
