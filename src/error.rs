//! Error types for the chronogram library.
//!
//! The analysis core (codec, matcher, extractor, summation, search and
//! generator) is total and never fails. Errors only arise at the edges:
//! input validation, mode parsing and configuration loading. All of them are
//! represented by the [`ChronogramError`] enum.
//!
//! # Examples
//!
//! ```
//! use chronogram::error::{ChronogramError, Result};
//!
//! fn check(year: i64) -> Result<i64> {
//!     if (1..=9999).contains(&year) {
//!         Ok(year)
//!     } else {
//!         Err(ChronogramError::InvalidYear(year))
//!     }
//! }
//!
//! assert!(check(2024).is_ok());
//! assert!(check(0).is_err());
//! ```

use std::io;

use thiserror::Error;

/// The main error type for chronogram operations.
#[derive(Error, Debug)]
pub enum ChronogramError {
    /// I/O errors (reading input text or configuration files)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Input text exceeds the configured character limit
    #[error("Input too long: {len} characters (maximum {max})")]
    InputTooLong { len: usize, max: usize },

    /// Year outside the supported 1..=9999 domain
    #[error("Invalid year: {0} (expected an integer between 1 and 9999)")]
    InvalidYear(i64),

    /// Unknown extraction, summation or matching mode
    #[error("Invalid mode: {0}")]
    InvalidMode(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with ChronogramError.
pub type Result<T> = std::result::Result<T, ChronogramError>;

impl ChronogramError {
    /// Create a new invalid mode error.
    pub fn invalid_mode<S: Into<String>>(msg: S) -> Self {
        ChronogramError::InvalidMode(msg.into())
    }

    /// Create a new configuration error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        ChronogramError::Config(msg.into())
    }

    /// Create a new input-too-long error.
    pub fn input_too_long(len: usize, max: usize) -> Self {
        ChronogramError::InputTooLong { len, max }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_construction() {
        let error = ChronogramError::invalid_mode("sideways");
        assert_eq!(error.to_string(), "Invalid mode: sideways");

        let error = ChronogramError::config("bad tag");
        assert_eq!(error.to_string(), "Configuration error: bad tag");

        let error = ChronogramError::input_too_long(12, 10);
        assert_eq!(
            error.to_string(),
            "Input too long: 12 characters (maximum 10)"
        );

        let error = ChronogramError::InvalidYear(0);
        assert!(error.to_string().contains("between 1 and 9999"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let error = ChronogramError::from(io_error);

        match error {
            ChronogramError::Io(_) => {} // Expected
            _ => panic!("Expected IO error variant"),
        }
    }
}
