//! Identifier recognition.

use super::{ParseResult, TokenParser};
use crate::context::ScanContext;
use crate::token::TokenKind;
use crate::unicode;

/// Recognizes a start character followed by any number of continuation
/// characters. Both classes are configurable.
#[derive(Clone, Copy, Debug)]
pub struct IdentifierParser {
    is_start: fn(char) -> bool,
    is_continue: fn(char) -> bool,
}

impl IdentifierParser {
    /// Unicode letters and `_`, continuing with letters, digits and `_`.
    pub fn new() -> Self {
        Self::with_classes(unicode::is_ident_start, unicode::is_ident_continue)
    }

    /// ASCII-only identifiers.
    pub fn ascii() -> Self {
        Self::with_classes(unicode::is_ascii_ident_start, unicode::is_ascii_ident_continue)
    }

    /// Custom start and continuation classes.
    pub fn with_classes(is_start: fn(char) -> bool, is_continue: fn(char) -> bool) -> Self {
        Self {
            is_start,
            is_continue,
        }
    }
}

impl Default for IdentifierParser {
    fn default() -> Self {
        Self::new()
    }
}

impl TokenParser for IdentifierParser {
    fn parse(&self, ctx: &mut ScanContext<'_>) -> ParseResult {
        if ctx.is_eof() || !(self.is_start)(ctx.current()) {
            return Ok(None);
        }
        ctx.bump();
        ctx.bump_while(self.is_continue);
        Ok(Some(TokenKind::Identifier))
    }

    fn name(&self) -> &str {
        "identifier"
    }
}
