//! Plain digit runs.

use super::{ParseResult, TokenParser};
use crate::context::ScanContext;
use crate::token::TokenKind;

/// Recognizes a maximal run of ASCII digits. No value is attached; use
/// [`NumericLiteralParser`](super::NumericLiteralParser) for typed numbers.
#[derive(Clone, Copy, Debug, Default)]
pub struct NumberParser;

impl TokenParser for NumberParser {
    fn parse(&self, ctx: &mut ScanContext<'_>) -> ParseResult {
        if !ctx.current().is_ascii_digit() {
            return Ok(None);
        }
        ctx.bump_while(|c| c.is_ascii_digit());
        Ok(Some(TokenKind::Number))
    }

    fn name(&self) -> &str {
        "number"
    }
}
