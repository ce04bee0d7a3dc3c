//! Unified error types for the RED crates.
//!
//! This module provides a common error type [`RedError`] shared by the
//! dataset, model, and UI layers. Domain-specific failures convert to
//! `RedError` for uniform handling at API boundaries.
//!
//! # Example
//!
//! ```
//! use red_core::{RedError, RedResult};
//!
//! fn check_efficiency(eta: f64) -> RedResult<f64> {
//!     if !(0.0..=1.0).contains(&eta) {
//!         return Err(RedError::Validation(format!(
//!             "efficiency {eta} outside [0, 1]"
//!         )));
//!     }
//!     Ok(eta)
//! }
//!
//! assert!(check_efficiency(1.4).is_err());
//! ```

use thiserror::Error;

/// Unified error type for all RED operations.
#[derive(Error, Debug)]
pub enum RedError {
    /// I/O errors (config files, log directories)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Parsing/deserialization errors
    #[error("Parse error: {0}")]
    Parse(String),

    /// Physical parameter validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    /// Model/simulation errors (divergence, instability)
    #[error("Model error: {0}")]
    Model(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Generic errors (for wrapping external errors)
    #[error("{0}")]
    Other(String),
}

/// Convenience type alias for Results using RedError.
pub type RedResult<T> = Result<T, RedError>;

impl From<anyhow::Error> for RedError {
    fn from(err: anyhow::Error) -> Self {
        RedError::Other(err.to_string())
    }
}

impl From<String> for RedError {
    fn from(s: String) -> Self {
        RedError::Other(s)
    }
}

impl From<&str> for RedError {
    fn from(s: &str) -> Self {
        RedError::Other(s.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = RedError::Model("timestep unstable".into());
        assert!(err.to_string().contains("Model error"));
        assert!(err.to_string().contains("timestep unstable"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "config not found");
        let red_err: RedError = io_err.into();
        assert!(matches!(red_err, RedError::Io(_)));
    }

    #[test]
    fn test_question_mark_operator() {
        fn inner() -> RedResult<()> {
            Err(RedError::Validation("bad flow rate".into()))
        }

        fn outer() -> RedResult<()> {
            inner()?;
            Ok(())
        }

        assert!(outer().is_err());
    }
}
