//! Character cursor over a streaming source.
//!
//! The cursor holds exactly one character of lookahead. It is primed on
//! construction, so [`Cursor::current_char`] is valid immediately, and it
//! tracks the line/column of that character for token positions.

use crate::source::CharSource;

/// Character returned by [`Cursor::current_char`] once the source is drained.
pub const EOF_CHAR: char = '\0';

/// A cursor pulling characters from a [`CharSource`].
///
/// Lines are 1-based. Columns are 0-based byte offsets within the current
/// line: they advance by the UTF-8 width of each consumed character and
/// reset to 0 after a newline.
///
/// # Example
///
/// ```
/// use lexkit_lex::cursor::Cursor;
///
/// let mut cursor = Cursor::new("ab\nc".chars());
/// assert_eq!(cursor.current_char(), 'a');
/// cursor.advance();
/// cursor.advance();
/// cursor.advance();
/// assert_eq!(cursor.current_char(), 'c');
/// assert_eq!((cursor.line(), cursor.column()), (2, 0));
/// ```
pub struct Cursor<S> {
    /// Where characters come from.
    source: S,

    /// The lookahead character, or [`EOF_CHAR`] once drained.
    current: char,

    /// Set once the source has returned `None`.
    at_end: bool,

    /// Line of `current` (1-based).
    line: u32,

    /// Byte column of `current` within its line (0-based).
    column: u32,

    /// Total bytes consumed so far.
    offset: usize,
}

impl<S: CharSource> Cursor<S> {
    /// Creates a cursor and reads the first character.
    pub fn new(source: S) -> Self {
        let mut cursor = Self {
            source,
            current: EOF_CHAR,
            at_end: false,
            line: 1,
            column: 0,
            offset: 0,
        };
        cursor.fetch();
        cursor
    }

    fn fetch(&mut self) {
        match self.source.next_char() {
            Some(c) => self.current = c,
            None => {
                self.current = EOF_CHAR;
                self.at_end = true;
            },
        }
    }

    /// Returns the lookahead character, or [`EOF_CHAR`] at end of input.
    ///
    /// A literal NUL in the input is indistinguishable from the sentinel
    /// here; use [`Cursor::is_at_end`] to tell them apart.
    #[inline]
    pub fn current_char(&self) -> char {
        self.current
    }

    /// Consumes the lookahead character and returns the new one.
    ///
    /// Does nothing once the source is drained.
    pub fn advance(&mut self) -> char {
        if self.at_end {
            return EOF_CHAR;
        }

        let consumed = self.current;
        let width = consumed.len_utf8();
        if consumed == '\n' {
            self.line += 1;
            self.column = 0;
        } else {
            self.column += width as u32;
        }
        self.offset += width;

        self.fetch();
        self.current
    }

    /// Returns true once the source has been drained.
    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.at_end
    }

    /// Line of the lookahead character (1-based).
    #[inline]
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Byte column of the lookahead character (0-based).
    #[inline]
    pub fn column(&self) -> u32 {
        self.column
    }

    /// Total bytes consumed so far.
    #[inline]
    pub fn offset(&self) -> usize {
        self.offset
    }
}
