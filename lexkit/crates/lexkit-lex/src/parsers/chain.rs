//! Ordered parser chains.

use std::fmt;

use super::{
    CommentParser, IdentifierParser, NumberParser, NumericLiteralParser, QuotedStringParser,
    TokenParser, WhitespaceSkipper,
};

/// A skipper plus an ordered list of token parsers.
///
/// The skipper runs before every token; the parsers are then tried in order
/// and the first one to report a kind wins. Order matters whenever two
/// parsers could claim the same character.
///
/// # Example
///
/// ```
/// use lexkit_lex::ParserChain;
///
/// let chain = ParserChain::default();
/// assert_eq!(chain.names(), ["identifier", "number", "string", "comment"]);
///
/// let c = ParserChain::c_like();
/// assert_eq!(c.names(), ["identifier", "numeric", "string"]);
/// ```
pub struct ParserChain {
    skipper: Box<dyn TokenParser>,
    parsers: Vec<Box<dyn TokenParser>>,
}

impl ParserChain {
    /// A chain with the given skipper and no token parsers.
    pub fn new(skipper: impl TokenParser + 'static) -> Self {
        Self {
            skipper: Box::new(skipper),
            parsers: Vec::new(),
        }
    }

    /// Whitespace skipper with `#` comments, identifiers, C-style numbers
    /// and quoted strings.
    pub fn c_like() -> Self {
        Self::new(WhitespaceSkipper::with_comments('#'))
            .with(IdentifierParser::new())
            .with(NumericLiteralParser)
            .with(QuotedStringParser::new())
    }

    /// Appends a parser, builder style.
    pub fn with(mut self, parser: impl TokenParser + 'static) -> Self {
        self.push(parser);
        self
    }

    /// Appends a parser at the end of the chain.
    pub fn push(&mut self, parser: impl TokenParser + 'static) {
        self.parsers.push(Box::new(parser));
    }

    /// Inserts a parser at `index`, clamped to the chain length.
    pub fn insert(&mut self, index: usize, parser: impl TokenParser + 'static) {
        let index = index.min(self.parsers.len());
        self.parsers.insert(index, Box::new(parser));
    }

    /// Removes and returns the parser at `index`.
    pub fn remove(&mut self, index: usize) -> Option<Box<dyn TokenParser>> {
        (index < self.parsers.len()).then(|| self.parsers.remove(index))
    }

    /// Removes the first parser named `name`.
    pub fn remove_named(&mut self, name: &str) -> Option<Box<dyn TokenParser>> {
        let index = self.position(name)?;
        self.remove(index)
    }

    /// Replaces the first parser named `name`, returning the old one.
    pub fn replace(
        &mut self,
        name: &str,
        parser: impl TokenParser + 'static,
    ) -> Option<Box<dyn TokenParser>> {
        let index = self.position(name)?;
        Some(std::mem::replace(&mut self.parsers[index], Box::new(parser)))
    }

    /// Index of the first parser named `name`.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.parsers.iter().position(|p| p.name() == name)
    }

    /// Replaces the skipper.
    pub fn set_skipper(&mut self, skipper: impl TokenParser + 'static) {
        self.skipper = Box::new(skipper);
    }

    /// The skipper run before every token.
    pub fn skipper(&self) -> &dyn TokenParser {
        self.skipper.as_ref()
    }

    /// The token parsers in order.
    pub fn parsers(&self) -> &[Box<dyn TokenParser>] {
        &self.parsers
    }

    /// Names of the token parsers in order.
    pub fn names(&self) -> Vec<&str> {
        self.parsers.iter().map(|p| p.name()).collect()
    }

    /// Number of token parsers.
    pub fn len(&self) -> usize {
        self.parsers.len()
    }

    /// Returns true if the chain has no token parsers.
    pub fn is_empty(&self) -> bool {
        self.parsers.is_empty()
    }
}

impl Default for ParserChain {
    /// Whitespace skipper, then identifiers, digit runs, quoted strings and
    /// `#` line comments.
    fn default() -> Self {
        Self::new(WhitespaceSkipper::new())
            .with(IdentifierParser::new())
            .with(NumberParser)
            .with(QuotedStringParser::new())
            .with(CommentParser::default())
    }
}

impl fmt::Debug for ParserChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ParserChain")
            .field("skipper", &self.skipper.name())
            .field("parsers", &self.names())
            .finish()
    }
}
