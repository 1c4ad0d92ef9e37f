//! Token parsers and the chain that orders them.
//!
//! A token parser looks at the lookahead character and either recognizes a
//! token (returning its [`TokenKind`]), declines (`Ok(None)`), or fails with
//! a [`LexError`]. The lexer tries the parsers of a [`ParserChain`] in order
//! and the first match wins.
//!
//! Built-in parsers:
//! - [`WhitespaceSkipper`] - skips whitespace and, optionally, line comments
//! - [`IdentifierParser`] - letter/underscore runs
//! - [`NumberParser`] - plain digit runs
//! - [`NumericLiteralParser`] - C-style integers and floats with typed values
//! - [`QuotedStringParser`] - text between matching quote marks
//! - [`CommentParser`] - line comments inside the chain

mod chain;
mod comment;
mod identifier;
mod number;
mod numeric;
mod string;
mod whitespace;

pub use chain::ParserChain;
pub use comment::CommentParser;
pub use identifier::IdentifierParser;
pub use number::NumberParser;
pub use numeric::NumericLiteralParser;
pub use string::QuotedStringParser;
pub use whitespace::WhitespaceSkipper;

use crate::context::ScanContext;
use crate::error::LexError;
use crate::token::TokenKind;

/// What a parser reports for one attempt.
pub type ParseResult = Result<Option<TokenKind>, LexError>;

/// A pluggable recognizer for one family of tokens.
///
/// Returning `Ok(None)` after consuming input is allowed; that is how
/// comment parsers work. What the lexer does next is governed by
/// [`SkipPolicy`](crate::SkipPolicy).
pub trait TokenParser {
    /// Attempts to recognize a token at the lookahead.
    fn parse(&self, ctx: &mut ScanContext<'_>) -> ParseResult;

    /// Name used to find the parser in a chain.
    fn name(&self) -> &str;
}

/// A [`TokenParser`] built from a closure. See [`from_fn`].
pub struct FnParser<F> {
    name: String,
    f: F,
}

impl<F> TokenParser for FnParser<F>
where
    F: Fn(&mut ScanContext<'_>) -> ParseResult,
{
    fn parse(&self, ctx: &mut ScanContext<'_>) -> ParseResult {
        (self.f)(ctx)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Wraps a closure as a named token parser.
///
/// # Example
///
/// ```
/// use lexkit_lex::parsers::from_fn;
/// use lexkit_lex::{LexerBuilder, ParserChain, TokenKind};
///
/// let mut chain = ParserChain::default();
/// chain.insert(0, from_fn("arrow", |ctx| {
///     if ctx.current() != '→' {
///         return Ok(None);
///     }
///     ctx.bump();
///     Ok(Some(TokenKind::Unknown))
/// }));
///
/// let mut lexer = LexerBuilder::new().source("a → b".chars()).chain(chain).build().unwrap();
/// let literals: Vec<_> = lexer.by_ref().map(|t| t.unwrap().literal).collect();
/// assert_eq!(literals, ["a", "→", "b"]);
/// ```
pub fn from_fn<F>(name: impl Into<String>, f: F) -> FnParser<F>
where
    F: Fn(&mut ScanContext<'_>) -> ParseResult,
{
    FnParser {
        name: name.into(),
        f,
    }
}
