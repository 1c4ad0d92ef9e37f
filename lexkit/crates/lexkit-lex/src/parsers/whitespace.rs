//! The designated skipper run before every token.

use super::comment::skip_line;
use super::{ParseResult, TokenParser};
use crate::context::ScanContext;
use crate::unicode;

/// Skips whitespace and, if a marker is set, line comments.
///
/// Never produces a token. Comments handled here are transparent: the lexer
/// simply sees the next meaningful character.
#[derive(Clone, Copy, Debug)]
pub struct WhitespaceSkipper {
    is_whitespace: fn(char) -> bool,
    comment_marker: Option<char>,
}

impl WhitespaceSkipper {
    /// Skips Unicode whitespace and NUL.
    pub fn new() -> Self {
        Self {
            is_whitespace: unicode::is_whitespace,
            comment_marker: None,
        }
    }

    /// Also skips from `marker` to the end of the line.
    pub fn with_comments(marker: char) -> Self {
        Self::new().comment_marker(Some(marker))
    }

    /// Replaces the whitespace predicate. NUL stays skippable regardless.
    pub fn predicate(mut self, is_whitespace: fn(char) -> bool) -> Self {
        self.is_whitespace = is_whitespace;
        self
    }

    /// Sets or clears the line comment marker.
    pub fn comment_marker(mut self, marker: Option<char>) -> Self {
        self.comment_marker = marker;
        self
    }
}

impl Default for WhitespaceSkipper {
    fn default() -> Self {
        Self::new()
    }
}

impl TokenParser for WhitespaceSkipper {
    fn parse(&self, ctx: &mut ScanContext<'_>) -> ParseResult {
        let is_whitespace = self.is_whitespace;
        loop {
            ctx.skip_while(|c| c == '\0' || is_whitespace(c));
            match self.comment_marker {
                Some(marker) if !ctx.is_eof() && ctx.current() == marker => skip_line(ctx),
                _ => return Ok(None),
            }
        }
    }

    fn name(&self) -> &str {
        "whitespace"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Cursor, TokenBuffer};

    fn skip(skipper: WhitespaceSkipper, input: &str) -> (char, usize) {
        let mut cursor = Cursor::new(input.chars());
        let mut buffer = TokenBuffer::new();
        let mut ctx = ScanContext::new(&mut cursor, &mut buffer);
        assert_eq!(skipper.parse(&mut ctx), Ok(None));
        assert_eq!(ctx.text(), "");
        (ctx.current(), ctx.offset())
    }

    #[test]
    fn test_skips_whitespace_and_nul() {
        assert_eq!(skip(WhitespaceSkipper::new(), " \t\n\0\u{A0}x"), ('x', 6));
    }

    #[test]
    fn test_stops_at_comment_without_marker() {
        assert_eq!(skip(WhitespaceSkipper::new(), "  # c"), ('#', 2));
    }

    #[test]
    fn test_skips_comments_with_marker() {
        let (current, _) = skip(WhitespaceSkipper::with_comments('#'), " # one\n  # two\nnext");
        assert_eq!(current, 'n');
    }

    #[test]
    fn test_comment_at_end_of_input() {
        let (current, offset) = skip(WhitespaceSkipper::with_comments(';'), "; trailing");
        assert_eq!(current, '\0');
        assert_eq!(offset, 10);
    }

    #[test]
    fn test_custom_predicate_keeps_nul() {
        let spaces_only = WhitespaceSkipper::new().predicate(|c| c == ' ');
        assert_eq!(skip(spaces_only, " \0 \n"), ('\n', 3));
    }
}
