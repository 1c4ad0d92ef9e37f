//! Stable codes for lexkit diagnostics.
//!
//! Codes render as `{prefix}{number:04}`, e.g. `E1003`. The `E1xxx` block
//! belongs to the lexer.

use std::fmt;
use std::str::FromStr;

use crate::error::DiagnosticError;

/// A unique code identifying a diagnostic message
///
/// # Examples
///
/// ```
/// use lexkit_util::DiagnosticCode;
///
/// let code: DiagnosticCode = "E1003".parse().unwrap();
/// assert_eq!(code, DiagnosticCode::E1003);
/// assert_eq!(code.to_string(), "E1003");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct DiagnosticCode {
    /// "E" for errors, "W" for warnings
    pub prefix: &'static str,
    /// The numeric identifier
    pub number: u32,
}

impl DiagnosticCode {
    /// Create a new diagnostic code.
    #[inline]
    pub const fn new(prefix: &'static str, number: u32) -> Self {
        Self { prefix, number }
    }

    /// The full code string, e.g. `"E1001"`.
    pub fn as_str(&self) -> String {
        format!("{}{:04}", self.prefix, self.number)
    }

    /// E1001: lexer constructed without a character source
    pub const E1001: Self = Self::new("E", 1001);
    /// E1002: unexpected end of input (strict mode)
    pub const E1002: Self = Self::new("E", 1002);
    /// E1003: malformed number literal
    pub const E1003: Self = Self::new("E", 1003);
    /// E1004: number literal out of range
    pub const E1004: Self = Self::new("E", 1004);
}

impl fmt::Display for DiagnosticCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{:04}", self.prefix, self.number)
    }
}

impl FromStr for DiagnosticCode {
    type Err = DiagnosticError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || DiagnosticError::InvalidCode(s.to_string());
        let prefix = match s.get(..1) {
            Some("E") => "E",
            Some("W") => "W",
            _ => return Err(invalid()),
        };
        let digits = &s[1..];
        if digits.len() != 4 || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        let number = digits.parse().map_err(|_| invalid())?;
        Ok(Self::new(prefix, number))
    }
}
