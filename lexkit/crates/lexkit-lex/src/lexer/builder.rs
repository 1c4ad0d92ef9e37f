//! Checked lexer construction.

use super::config::{EofPolicy, LexerConfig, SkipPolicy};
use super::core::Lexer;
use crate::error::{LexError, LexResult};
use crate::parsers::ParserChain;
use crate::source::CharSource;

/// Builds a [`Lexer`], failing if no source was given.
///
/// # Example
///
/// ```
/// use lexkit_lex::{LexError, LexerBuilder, ParserChain};
///
/// let lexer = LexerBuilder::new()
///     .source("x = 0x1F".chars())
///     .chain(ParserChain::c_like())
///     .build();
/// assert!(lexer.is_ok());
///
/// let missing = LexerBuilder::<std::str::Chars<'static>>::new().build();
/// assert_eq!(missing.err(), Some(LexError::MissingSource));
/// ```
pub struct LexerBuilder<S> {
    source: Option<S>,
    chain: Option<ParserChain>,
    config: LexerConfig,
}

impl<S: CharSource> LexerBuilder<S> {
    /// An empty builder with default configuration.
    pub fn new() -> Self {
        Self {
            source: None,
            chain: None,
            config: LexerConfig::default(),
        }
    }

    /// Sets the character source.
    pub fn source(mut self, source: S) -> Self {
        self.source = Some(source);
        self
    }

    /// Sets the parser chain; [`ParserChain::default`] otherwise.
    pub fn chain(mut self, chain: ParserChain) -> Self {
        self.chain = Some(chain);
        self
    }

    /// Replaces the whole configuration.
    pub fn config(mut self, config: LexerConfig) -> Self {
        self.config = config;
        self
    }

    /// Sets the end-of-input policy.
    pub fn eof_policy(mut self, eof: EofPolicy) -> Self {
        self.config.eof = eof;
        self
    }

    /// Sets the skip policy.
    pub fn skip_policy(mut self, skip: SkipPolicy) -> Self {
        self.config.skip = skip;
        self
    }

    /// Builds the lexer.
    ///
    /// # Errors
    ///
    /// [`LexError::MissingSource`] if no source was set.
    pub fn build(self) -> LexResult<Lexer<S>> {
        let source = self.source.ok_or(LexError::MissingSource)?;
        let chain = self.chain.unwrap_or_default();
        Ok(Lexer::from_parts(source, chain, self.config))
    }
}

impl<S: CharSource> Default for LexerBuilder<S> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::Chars;

    #[test]
    fn test_missing_source() {
        let result = LexerBuilder::<Chars<'_>>::new().chain(ParserChain::c_like()).build();
        assert!(matches!(result, Err(LexError::MissingSource)));
    }

    #[test]
    fn test_defaults_applied() {
        let lexer = LexerBuilder::new().source("a".chars()).build().unwrap();
        assert_eq!(lexer.config(), LexerConfig::default());
        assert_eq!(lexer.parser_chain().len(), ParserChain::default().len());
    }

    #[test]
    fn test_policies() {
        let lexer = LexerBuilder::new()
            .source("a".chars())
            .eof_policy(EofPolicy::Error)
            .skip_policy(SkipPolicy::FallThrough)
            .build()
            .unwrap();
        assert_eq!(lexer.config().eof, EofPolicy::Error);
        assert_eq!(lexer.config().skip, SkipPolicy::FallThrough);
    }
}
