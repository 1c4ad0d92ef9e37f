//! The view of lexer state handed to token parsers.

use crate::buffer::TokenBuffer;
use crate::cursor::Cursor;
use crate::error::LexError;
use crate::source::CharSource;
use crate::token::NumberValue;

/// Object-safe face of [`Cursor`], so parsers don't depend on the source
/// type.
pub(crate) trait CharCursor {
    fn current(&self) -> char;
    fn advance(&mut self) -> char;
    fn at_end(&self) -> bool;
    fn offset(&self) -> usize;
    fn position(&self) -> (u32, u32);
}

impl<S: CharSource> CharCursor for Cursor<S> {
    #[inline]
    fn current(&self) -> char {
        self.current_char()
    }

    #[inline]
    fn advance(&mut self) -> char {
        Cursor::advance(self)
    }

    #[inline]
    fn at_end(&self) -> bool {
        self.is_at_end()
    }

    #[inline]
    fn offset(&self) -> usize {
        Cursor::offset(self)
    }

    #[inline]
    fn position(&self) -> (u32, u32) {
        (self.line(), self.column())
    }
}

/// Cursor, token buffer and pending value for one scan attempt.
///
/// A parser reads the lookahead with [`current`](Self::current), consumes
/// with [`advance`](Self::advance), and records token text with
/// [`append`](Self::append) or [`bump`](Self::bump). Whatever is in the
/// buffer when a parser reports a match becomes the token literal.
///
/// # Example
///
/// ```
/// use lexkit_lex::{Cursor, ScanContext, TokenBuffer};
///
/// let mut cursor = Cursor::new("ab!".chars());
/// let mut buffer = TokenBuffer::new();
/// let mut ctx = ScanContext::new(&mut cursor, &mut buffer);
///
/// while ctx.current().is_alphabetic() {
///     ctx.bump();
/// }
/// assert_eq!(ctx.text(), "ab");
/// assert_eq!(ctx.current(), '!');
/// ```
pub struct ScanContext<'a> {
    cursor: &'a mut dyn CharCursor,
    buffer: &'a mut TokenBuffer,
    value: Option<NumberValue>,
    line: u32,
    column: u32,
}

impl<'a> ScanContext<'a> {
    /// Creates a context positioned at the cursor's lookahead.
    pub fn new<S: CharSource>(cursor: &'a mut Cursor<S>, buffer: &'a mut TokenBuffer) -> Self {
        let (line, column) = (cursor.line(), cursor.column());
        Self {
            cursor,
            buffer,
            value: None,
            line,
            column,
        }
    }

    /// The lookahead character; `'\0'` at end of input.
    #[inline]
    pub fn current(&self) -> char {
        self.cursor.current()
    }

    /// Consumes the lookahead and returns the next one.
    #[inline]
    pub fn advance(&mut self) -> char {
        self.cursor.advance()
    }

    /// Returns true once the input is exhausted.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.cursor.at_end()
    }

    /// Appends the lookahead to the token buffer without consuming it.
    /// Does nothing at end of input.
    #[inline]
    pub fn append(&mut self) {
        if !self.cursor.at_end() {
            self.buffer.append(self.cursor.current());
        }
    }

    /// Appends the lookahead and consumes it, returning the next one.
    #[inline]
    pub fn bump(&mut self) -> char {
        self.append();
        self.cursor.advance()
    }

    /// Consumes characters while `pred` holds, appending each one.
    pub fn bump_while(&mut self, mut pred: impl FnMut(char) -> bool) {
        while !self.cursor.at_end() && pred(self.cursor.current()) {
            self.bump();
        }
    }

    /// Consumes characters while `pred` holds, without recording them.
    pub fn skip_while(&mut self, mut pred: impl FnMut(char) -> bool) {
        while !self.cursor.at_end() && pred(self.cursor.current()) {
            self.cursor.advance();
        }
    }

    /// Text accumulated so far for this token.
    #[inline]
    pub fn text(&self) -> &str {
        self.buffer.text()
    }

    /// Attaches a typed value to the token being produced.
    #[inline]
    pub fn set_value(&mut self, value: NumberValue) {
        self.value = Some(value);
    }

    /// Line where this scan attempt started.
    #[inline]
    pub fn start_line(&self) -> u32 {
        self.line
    }

    /// Column where this scan attempt started.
    #[inline]
    pub fn start_column(&self) -> u32 {
        self.column
    }

    /// An [`LexError::InvalidNumberFormat`] for the text consumed so far.
    pub fn invalid_number(&self) -> LexError {
        LexError::InvalidNumberFormat {
            literal: self.text().to_string(),
            line: self.line,
            column: self.column,
        }
    }

    /// A [`LexError::NumberOutOfRange`] for the text consumed so far.
    pub fn number_out_of_range(&self) -> LexError {
        LexError::NumberOutOfRange {
            literal: self.text().to_string(),
            line: self.line,
            column: self.column,
        }
    }

    pub(crate) fn offset(&self) -> usize {
        self.cursor.offset()
    }

    pub(crate) fn take_value(&mut self) -> Option<NumberValue> {
        self.value.take()
    }

    /// Drops any text a declining parser left behind and moves the start
    /// to the lookahead.
    pub(crate) fn restart(&mut self) {
        self.buffer.reset();
        self.value = None;
        (self.line, self.column) = self.cursor.position();
    }
}
