//! Error types for the lexkit CLI.
//!
//! Lexing problems inside an input are not errors here: they are reported as
//! diagnostics and counted. `CliError` covers what stops a command outright.

use lexkit_lex::LexError;
use thiserror::Error;

/// Everything that can abort a lexkit command.
#[derive(Error, Debug)]
pub enum CliError {
    /// Configuration file missing, unreadable or malformed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// An input or output file could not be used.
    #[error("File operation failed: {0}")]
    FileOperation(String),

    /// Arguments or on-disk state are unsuitable for the command.
    #[error("Validation error: {0}")]
    Validation(String),

    /// The lexer could not be set up.
    #[error("Lexer error: {0}")]
    Lex(#[from] LexError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias using CliError.
pub type Result<T> = std::result::Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let err = CliError::Config("missing field".to_string());
        assert_eq!(err.to_string(), "Configuration error: missing field");
    }

    #[test]
    fn test_file_operation_error_display() {
        let err = CliError::FileOperation("cannot read input.txt".to_string());
        assert_eq!(err.to_string(), "File operation failed: cannot read input.txt");
    }

    #[test]
    fn test_validation_error_display() {
        let err = CliError::Validation("lexkit.toml already exists".to_string());
        assert_eq!(err.to_string(), "Validation error: lexkit.toml already exists");
    }

    #[test]
    fn test_lex_error_conversion() {
        let err: CliError = LexError::MissingSource.into();
        assert!(matches!(err, CliError::Lex(_)));
        assert_eq!(err.to_string(), "Lexer error: lexer has no character source");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: CliError = io_err.into();
        assert!(matches!(err, CliError::Io(_)));
        assert!(err.to_string().contains("file not found"));
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("[1,").unwrap_err();
        let err: CliError = json_err.into();
        assert!(err.to_string().starts_with("JSON error:"));
    }
}
