//! Errors produced while tokenizing.
//!
//! The lexer returns these to its caller and never reports them itself.
//! [`LexError::to_diagnostic`] bridges them into the diagnostic machinery of
//! `lexkit-util` for tools that want rendered output.

use lexkit_util::{Diagnostic, DiagnosticBuilder, DiagnosticCode, Span};
use thiserror::Error;

use crate::token::Token;

/// Everything that can go wrong while building or driving a lexer.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum LexError {
    /// The lexer was built without a character source.
    #[error("lexer has no character source")]
    MissingSource,

    /// Input ran out while the lexer was configured to treat that as an
    /// error. Carries the EOF token that would otherwise have been returned.
    #[error("unexpected end of input at {}:{}", .token.line, .token.column)]
    EndOfInput {
        /// The end-of-input token, positioned where input ended
        token: Box<Token>,
    },

    /// A number literal is malformed, e.g. `0x` with no digits or an
    /// exponent marker with no digits after it.
    #[error("invalid number format `{literal}` at {line}:{column}")]
    InvalidNumberFormat {
        /// Text consumed before the problem was detected
        literal: String,
        /// Line of the literal start
        line: u32,
        /// Column of the literal start
        column: u32,
    },

    /// A number literal does not fit its target type.
    #[error("number `{literal}` out of range at {line}:{column}")]
    NumberOutOfRange {
        /// The full literal text
        literal: String,
        /// Line of the literal start
        line: u32,
        /// Column of the literal start
        column: u32,
    },
}

impl LexError {
    /// Stable diagnostic code for this error.
    pub const fn code(&self) -> DiagnosticCode {
        match self {
            LexError::MissingSource => DiagnosticCode::E1001,
            LexError::EndOfInput { .. } => DiagnosticCode::E1002,
            LexError::InvalidNumberFormat { .. } => DiagnosticCode::E1003,
            LexError::NumberOutOfRange { .. } => DiagnosticCode::E1004,
        }
    }

    /// Where the error happened, if it happened in the input.
    pub fn span(&self) -> Option<Span> {
        match self {
            LexError::MissingSource => None,
            LexError::EndOfInput { token } => Some(token.span()),
            LexError::InvalidNumberFormat { line, column, .. }
            | LexError::NumberOutOfRange { line, column, .. } => Some(Span::point(*line, *column)),
        }
    }

    /// The literal text involved, for number errors.
    pub fn literal(&self) -> Option<&str> {
        match self {
            LexError::InvalidNumberFormat { literal, .. }
            | LexError::NumberOutOfRange { literal, .. } => Some(literal),
            _ => None,
        }
    }

    /// Converts the error into a diagnostic with code and help text.
    pub fn to_diagnostic(&self) -> Diagnostic {
        let builder = DiagnosticBuilder::error(self.headline())
            .code(self.code())
            .span(self.span().unwrap_or(Span::DUMMY));

        match self {
            LexError::MissingSource => builder
                .help("give the lexer builder a source before calling `build`")
                .build(),
            LexError::EndOfInput { .. } => builder
                .note("the lexer is configured to treat end of input as an error")
                .build(),
            LexError::InvalidNumberFormat { literal, .. } => {
                let help = if literal.ends_with(['x', 'X']) {
                    "hexadecimal literals need at least one digit after `0x`"
                } else if literal.contains(['x', 'X']) && literal.contains('.') {
                    "hexadecimal literals cannot have a fractional part"
                } else {
                    "an exponent needs at least one digit after `e`, `+` or `-`"
                };
                builder.help(help).build()
            },
            LexError::NumberOutOfRange { .. } => builder
                .note("integers must fit in a signed 64-bit value and floats must be finite")
                .build(),
        }
    }

    fn headline(&self) -> String {
        match self {
            LexError::MissingSource => "lexer has no character source".to_string(),
            LexError::EndOfInput { .. } => "unexpected end of input".to_string(),
            LexError::InvalidNumberFormat { literal, .. } => {
                format!("invalid number format `{}`", literal)
            },
            LexError::NumberOutOfRange { literal, .. } => {
                format!("number literal `{}` out of range", literal)
            },
        }
    }
}

/// Result type for lexer operations.
pub type LexResult<T> = Result<T, LexError>;

#[cfg(test)]
mod tests {
    use super::*;
    use lexkit_util::Level;

    fn invalid(literal: &str) -> LexError {
        LexError::InvalidNumberFormat {
            literal: literal.to_string(),
            line: 3,
            column: 8,
        }
    }

    #[test]
    fn test_error_display() {
        assert_eq!(LexError::MissingSource.to_string(), "lexer has no character source");
        assert_eq!(invalid("0x").to_string(), "invalid number format `0x` at 3:8");

        let eof = LexError::EndOfInput {
            token: Box::new(Token::eof(5, 2)),
        };
        assert_eq!(eof.to_string(), "unexpected end of input at 5:2");
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(LexError::MissingSource.code(), DiagnosticCode::E1001);
        assert_eq!(invalid("1.e").code(), DiagnosticCode::E1003);
        let range = LexError::NumberOutOfRange {
            literal: "99999999999999999999".into(),
            line: 1,
            column: 0,
        };
        assert_eq!(range.code(), DiagnosticCode::E1004);
        assert_eq!(range.literal(), Some("99999999999999999999"));
    }

    #[test]
    fn test_to_diagnostic() {
        let diag = invalid("0x").to_diagnostic();
        assert_eq!(diag.level, Level::Error);
        assert_eq!(diag.code, Some(DiagnosticCode::E1003));
        assert_eq!(diag.span, Span::point(3, 8));
        assert_eq!(diag.message, "invalid number format `0x`");
        assert_eq!(
            diag.helps,
            vec!["hexadecimal literals need at least one digit after `0x`"]
        );
    }

    #[test]
    fn test_diagnostic_help_variants() {
        let frac = invalid("0x1.").to_diagnostic();
        assert_eq!(frac.helps, vec!["hexadecimal literals cannot have a fractional part"]);

        let exp = invalid("1.5e+").to_diagnostic();
        assert!(exp.helps[0].starts_with("an exponent"));
    }

    #[test]
    fn test_missing_source_has_no_span() {
        assert_eq!(LexError::MissingSource.span(), None);
        assert_eq!(LexError::MissingSource.to_diagnostic().span, Span::DUMMY);
    }
}
