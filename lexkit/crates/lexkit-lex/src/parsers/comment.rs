//! Line comments as a chain member.

use super::{ParseResult, TokenParser};
use crate::context::ScanContext;

/// Consumes everything through the next newline (inclusive) or end of input.
pub(crate) fn skip_line(ctx: &mut ScanContext<'_>) {
    ctx.skip_while(|c| c != '\n');
    ctx.advance();
}

/// Consumes a line comment and reports no match.
///
/// Placed in the chain rather than the skipper, the comment is consumed
/// while scanning for a token, so what follows depends on the lexer's
/// [`SkipPolicy`](crate::SkipPolicy).
#[derive(Clone, Copy, Debug)]
pub struct CommentParser {
    marker: char,
}

impl CommentParser {
    /// Comments start at `marker`.
    pub fn new(marker: char) -> Self {
        Self { marker }
    }

    /// The comment marker.
    pub fn marker(&self) -> char {
        self.marker
    }
}

impl Default for CommentParser {
    fn default() -> Self {
        Self::new('#')
    }
}

impl TokenParser for CommentParser {
    fn parse(&self, ctx: &mut ScanContext<'_>) -> ParseResult {
        if !ctx.is_eof() && ctx.current() == self.marker {
            skip_line(ctx);
        }
        Ok(None)
    }

    fn name(&self) -> &str {
        "comment"
    }
}
