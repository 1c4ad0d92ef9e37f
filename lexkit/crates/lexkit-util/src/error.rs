//! Error types for the lexkit-util crate.

use thiserror::Error;

/// Error type for span construction.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SpanError {
    /// The start offset lies after the end offset.
    #[error("Invalid span: start {start} > end {end}")]
    Inverted {
        /// Requested start offset
        start: usize,
        /// Requested end offset
        end: usize,
    },
}

/// Error type for diagnostic operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DiagnosticError {
    /// A diagnostic code string could not be parsed.
    #[error("Invalid diagnostic code: {0}")]
    InvalidCode(String),
}

/// Result type alias for span operations
pub type SpanResult<T> = std::result::Result<T, SpanError>;

/// Result type alias for diagnostic operations
pub type DiagnosticResult<T> = std::result::Result<T, DiagnosticError>;
