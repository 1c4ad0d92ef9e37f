//! Token definitions.
//!
//! A [`Token`] records what was recognized ([`TokenKind`]), the exact text
//! that was accumulated for it, where it started, and an optional typed
//! [`NumberValue`] attached by number parsers.

use std::fmt;

use lexkit_util::Span;

/// Classification of a token.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum TokenKind {
    /// End of input
    Eof,
    /// Name-like run of characters
    Identifier,
    /// Numeric literal
    Number,
    /// Quoted text, without its delimiters
    String,
    /// A single character no parser claimed
    Unknown,
}

impl TokenKind {
    /// Upper-case name used in listings, e.g. `IDENTIFIER`.
    pub const fn as_str(&self) -> &'static str {
        match self {
            TokenKind::Eof => "EOF",
            TokenKind::Identifier => "IDENTIFIER",
            TokenKind::Number => "NUMBER",
            TokenKind::String => "STRING",
            TokenKind::Unknown => "UNKNOWN",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether a number literal holds an integer or a float.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum NumberType {
    /// Signed 64-bit integer
    Integer,
    /// 64-bit float
    Float,
}

/// Typed value of a number literal.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum NumberValue {
    /// Integer literal value
    Integer(i64),
    /// Float literal value
    Float(f64),
}

impl NumberValue {
    /// Which variant this is.
    pub const fn number_type(&self) -> NumberType {
        match self {
            NumberValue::Integer(_) => NumberType::Integer,
            NumberValue::Float(_) => NumberType::Float,
        }
    }

    /// The integer value, if this is an integer.
    pub const fn as_i64(&self) -> Option<i64> {
        match self {
            NumberValue::Integer(v) => Some(*v),
            NumberValue::Float(_) => None,
        }
    }

    /// The value as a float; integers are converted.
    pub fn as_f64(&self) -> f64 {
        match self {
            NumberValue::Integer(v) => *v as f64,
            NumberValue::Float(v) => *v,
        }
    }
}

impl fmt::Display for NumberValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumberValue::Integer(v) => write!(f, "{}", v),
            NumberValue::Float(v) => write!(f, "{:?}", v),
        }
    }
}

/// A recognized unit of input.
///
/// # Example
///
/// ```
/// use lexkit_lex::{Token, TokenKind};
///
/// let token = Token::new(TokenKind::Identifier, "foo", 1, 4);
/// assert_eq!(token.to_string(), "1:4 IDENTIFIER foo");
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Token {
    /// What kind of token this is.
    pub kind: TokenKind,
    /// Text accumulated for the token. Empty for EOF; string tokens omit
    /// their delimiters.
    pub literal: String,
    /// Line of the token start (1-based).
    pub line: u32,
    /// Byte column of the token start (0-based).
    pub column: u32,
    /// Typed value attached by a number parser.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub value: Option<NumberValue>,
}

impl Token {
    /// Creates a token without a value.
    pub fn new(kind: TokenKind, literal: impl Into<String>, line: u32, column: u32) -> Self {
        Self {
            kind,
            literal: literal.into(),
            line,
            column,
            value: None,
        }
    }

    /// Creates an end-of-input token at the given position.
    pub fn eof(line: u32, column: u32) -> Self {
        Self::new(TokenKind::Eof, String::new(), line, column)
    }

    /// Attaches a typed number value.
    pub fn with_value(mut self, value: NumberValue) -> Self {
        self.value = Some(value);
        self
    }

    /// Returns true for end-of-input tokens.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }

    /// Type of the attached number value, if any.
    pub fn number_type(&self) -> Option<NumberType> {
        self.value.map(|v| v.number_type())
    }

    /// A point span at the token start.
    pub fn span(&self) -> Span {
        Span::point(self.line, self.column)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{} {}", self.line, self.column, self.kind)?;
        if !self.literal.is_empty() {
            write!(f, " {}", self.literal.escape_debug())?;
        }
        if let Some(value) = &self.value {
            write!(f, " = {}", value)?;
        }
        Ok(())
    }
}
