//! Quoted strings.

use super::{ParseResult, TokenParser};
use crate::context::ScanContext;
use crate::token::TokenKind;

/// Recognizes text between a quote mark and the next occurrence of the
/// same mark.
///
/// The literal excludes both delimiters. There are no escape sequences, so
/// the other quote marks are ordinary content. An unterminated string runs
/// to end of input and is still returned as a string token.
#[derive(Clone, Debug)]
pub struct QuotedStringParser {
    marks: Vec<char>,
}

impl QuotedStringParser {
    /// Accepts `"` and `'`.
    pub fn new() -> Self {
        Self::with_marks(['"', '\''])
    }

    /// Accepts the given quote marks.
    pub fn with_marks(marks: impl IntoIterator<Item = char>) -> Self {
        Self {
            marks: marks.into_iter().collect(),
        }
    }

    /// Configured quote marks.
    pub fn marks(&self) -> &[char] {
        &self.marks
    }
}

impl Default for QuotedStringParser {
    fn default() -> Self {
        Self::new()
    }
}

impl TokenParser for QuotedStringParser {
    fn parse(&self, ctx: &mut ScanContext<'_>) -> ParseResult {
        let open = ctx.current();
        if ctx.is_eof() || !self.marks.contains(&open) {
            return Ok(None);
        }
        ctx.advance();
        ctx.bump_while(|c| c != open);
        // Closing mark, or a no-op at end of input.
        ctx.advance();
        Ok(Some(TokenKind::String))
    }

    fn name(&self) -> &str {
        "string"
    }
}
