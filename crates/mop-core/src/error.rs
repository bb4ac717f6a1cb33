//! Unified error types for the MOP ecosystem
//!
//! This module provides a common error type [`MopError`] that can represent
//! errors from any part of the system. Domain-specific error types can be
//! converted to `MopError` for uniform error handling at API boundaries.
//!
//! # Example
//!
//! ```ignore
//! use mop_core::{MopError, MopResult};
//!
//! fn plan_from_file(path: &str) -> MopResult<()> {
//!     let request = load_plan_request(path)?;
//!     solve_dispatch(&request)?;
//!     Ok(())
//! }
//! ```

use thiserror::Error;

/// Unified error type for all MOP operations.
///
/// This enum provides a common error representation for the MOP ecosystem,
/// allowing errors from I/O, parsing, solving, and validation to be handled
/// uniformly.
#[derive(Error, Debug)]
pub enum MopError {
    /// I/O errors (file access, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Parsing/deserialization errors
    #[error("Parse error: {0}")]
    Parse(String),

    /// Payload validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    /// Solver/algorithm errors
    #[error("Solver error: {0}")]
    Solver(String),

    /// Generic errors (for wrapping external errors)
    #[error("{0}")]
    Other(String),
}

/// Convenience type alias for Results using MopError.
pub type MopResult<T> = Result<T, MopError>;

// Conversion from string-like types for convenience
impl From<String> for MopError {
    fn from(s: String) -> Self {
        MopError::Other(s)
    }
}

impl From<&str> for MopError {
    fn from(s: &str) -> Self {
        MopError::Other(s.to_string())
    }
}
