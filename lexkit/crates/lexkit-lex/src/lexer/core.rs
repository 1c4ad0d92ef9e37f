//! Core lexer implementation.
//!
//! This module contains the [`Lexer`] struct, the scan loop and the
//! putback stack.

use tracing::trace;

use super::builder::LexerBuilder;
use super::config::{EofPolicy, LexerConfig, SkipPolicy};
use crate::buffer::TokenBuffer;
use crate::context::ScanContext;
use crate::cursor::Cursor;
use crate::error::{LexError, LexResult};
use crate::parsers::ParserChain;
use crate::source::CharSource;
use crate::token::{NumberValue, Token, TokenKind};

/// Outcome of running the chain once.
enum Scan {
    Matched {
        kind: TokenKind,
        value: Option<NumberValue>,
        line: u32,
        column: u32,
    },
    Rescan,
    NoMatch,
}

/// Streaming tokenizer driven by a [`ParserChain`].
///
/// Every call to [`get_token`](Self::get_token) first replays put-back
/// tokens, then runs the chain's skipper, then tries the chain's parsers in
/// order. A character no parser claims becomes a single-character
/// [`TokenKind::Unknown`] token, so the lexer always makes progress.
///
/// # Example
///
/// ```
/// use lexkit_lex::{Lexer, TokenKind};
///
/// let mut lexer = Lexer::new("name 'quoted' 42".chars());
/// let first = lexer.get_token().unwrap();
/// assert_eq!(first.kind, TokenKind::Identifier);
///
/// lexer.put_back(first.clone());
/// assert_eq!(lexer.get_token().unwrap(), first);
///
/// let rest: Vec<_> = lexer.map(|t| t.unwrap().kind).collect();
/// assert_eq!(rest, [TokenKind::String, TokenKind::Number]);
/// ```
pub struct Lexer<S> {
    /// Character cursor over the source.
    cursor: Cursor<S>,

    /// Skipper and token parsers.
    chain: ParserChain,

    /// End-of-input and skip policies.
    config: LexerConfig,

    /// Text of the token being scanned.
    buffer: TokenBuffer,

    /// Put-back tokens, most recent last.
    putback: Vec<Token>,

    /// Most recently returned token.
    last_token: Option<Token>,

    /// Cursor offset of the last error the iterator yielded.
    stalled_at: Option<usize>,
}

impl<S: CharSource> Lexer<S> {
    /// Creates a lexer with the default chain and configuration.
    pub fn new(source: S) -> Self {
        Self::from_parts(source, ParserChain::default(), LexerConfig::default())
    }

    /// Creates a lexer with a custom chain.
    pub fn with_chain(source: S, chain: ParserChain) -> Self {
        Self::from_parts(source, chain, LexerConfig::default())
    }

    /// Starts a [`LexerBuilder`].
    pub fn builder() -> LexerBuilder<S> {
        LexerBuilder::new()
    }

    pub(crate) fn from_parts(source: S, chain: ParserChain, config: LexerConfig) -> Self {
        Self {
            cursor: Cursor::new(source),
            chain,
            config,
            buffer: TokenBuffer::new(),
            putback: Vec::new(),
            last_token: None,
            stalled_at: None,
        }
    }

    /// Returns the next token.
    ///
    /// # Errors
    ///
    /// Whatever a chain parser fails with, and
    /// [`LexError::EndOfInput`] at end of input under
    /// [`EofPolicy::Error`].
    pub fn get_token(&mut self) -> LexResult<Token> {
        if let Some(token) = self.putback.pop() {
            trace!(kind = %token.kind, line = token.line, column = token.column, "replay");
            self.last_token = Some(token.clone());
            return Ok(token);
        }

        let token = self.scan()?;
        self.last_token = Some(token.clone());
        Ok(token)
    }

    /// Pushes a token back; it is returned by the next
    /// [`get_token`](Self::get_token). Tokens come back in reverse order of
    /// being put back.
    pub fn put_back(&mut self, token: Token) {
        trace!(kind = %token.kind, depth = self.putback.len() + 1, "put back");
        self.putback.push(token);
    }

    /// Returns true when no put-back tokens remain and the source is
    /// drained.
    ///
    /// Trailing whitespace still counts as input, so `is_end` can be false
    /// while the next token is EOF.
    pub fn is_end(&self) -> bool {
        self.putback.is_empty() && self.cursor.is_at_end()
    }

    /// The token most recently returned by [`get_token`](Self::get_token),
    /// including the EOF token carried by an end-of-input error.
    pub fn last_token(&self) -> Option<&Token> {
        self.last_token.as_ref()
    }

    /// Current line (1-based).
    pub fn line(&self) -> u32 {
        self.cursor.line()
    }

    /// Current byte column (0-based).
    pub fn column(&self) -> u32 {
        self.cursor.column()
    }

    /// Active configuration.
    pub fn config(&self) -> LexerConfig {
        self.config
    }

    /// The parser chain.
    pub fn parser_chain(&self) -> &ParserChain {
        &self.chain
    }

    /// Mutable access to the chain; changes apply from the next token on.
    pub fn parser_chain_mut(&mut self) -> &mut ParserChain {
        &mut self.chain
    }

    fn scan(&mut self) -> LexResult<Token> {
        loop {
            self.skip()?;
            if self.cursor.is_at_end() {
                return self.end_of_input();
            }

            match self.run_chain()? {
                Scan::Matched {
                    kind,
                    value,
                    line,
                    column,
                } => {
                    let token = Token {
                        kind,
                        literal: self.buffer.text().to_string(),
                        line,
                        column,
                        value,
                    };
                    trace!(kind = %token.kind, line, column, literal = %token.literal, "token");
                    return Ok(token);
                },
                Scan::Rescan => {
                    trace!(
                        line = self.cursor.line(),
                        column = self.cursor.column(),
                        "input consumed without a match, rescanning"
                    );
                },
                Scan::NoMatch => {
                    if self.cursor.is_at_end() {
                        return self.end_of_input();
                    }
                    return Ok(self.unknown());
                },
            }
        }
    }

    fn skip(&mut self) -> LexResult<()> {
        let mut ctx = ScanContext::new(&mut self.cursor, &mut self.buffer);
        // The skipper never yields a token; only what it consumes matters.
        self.chain.skipper().parse(&mut ctx)?;
        Ok(())
    }

    fn run_chain(&mut self) -> LexResult<Scan> {
        let rescan = self.config.skip == SkipPolicy::Rescan;
        let mut ctx = ScanContext::new(&mut self.cursor, &mut self.buffer);

        for parser in self.chain.parsers() {
            ctx.restart();
            let before = ctx.offset();
            if let Some(kind) = parser.parse(&mut ctx)? {
                return Ok(Scan::Matched {
                    kind,
                    value: ctx.take_value(),
                    line: ctx.start_line(),
                    column: ctx.start_column(),
                });
            }
            if rescan && ctx.offset() != before {
                return Ok(Scan::Rescan);
            }
        }
        Ok(Scan::NoMatch)
    }

    /// Fallback for a character no parser claimed.
    fn unknown(&mut self) -> Token {
        let (line, column) = (self.cursor.line(), self.cursor.column());
        let c = self.cursor.current_char();
        self.cursor.advance();
        trace!(line, column, ch = ?c, "unknown character");
        Token::new(TokenKind::Unknown, c.to_string(), line, column)
    }

    fn end_of_input(&mut self) -> LexResult<Token> {
        let token = Token::eof(self.cursor.line(), self.cursor.column());
        trace!(line = token.line, column = token.column, "end of input");
        match self.config.eof {
            EofPolicy::Token => Ok(token),
            EofPolicy::Error => {
                self.last_token = Some(token.clone());
                Err(LexError::EndOfInput {
                    token: Box::new(token),
                })
            },
        }
    }
}

impl<S: CharSource> Iterator for Lexer<S> {
    type Item = LexResult<Token>;

    /// Yields tokens until end of input. Errors are yielded in place; if a
    /// parser keeps failing without consuming input the iterator stops.
    fn next(&mut self) -> Option<Self::Item> {
        match self.get_token() {
            Ok(token) if token.is_eof() => None,
            Ok(token) => {
                self.stalled_at = None;
                Some(Ok(token))
            },
            Err(LexError::EndOfInput { .. }) => None,
            Err(err) => {
                let offset = self.cursor.offset();
                if self.stalled_at == Some(offset) {
                    return None;
                }
                self.stalled_at = Some(offset);
                Some(Err(err))
            },
        }
    }
}
