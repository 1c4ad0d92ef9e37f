//! Source location tracking.
//!
//! A [`Span`] pairs a byte range with the line and column where it starts.
//! Lines are 1-based. Columns are 0-based byte offsets inside the line, the
//! same convention the lexer cursor uses, so a span can be built straight
//! from a token position without conversion.

use std::fmt;

use crate::error::{SpanError, SpanResult};

/// Source location span
///
/// # Examples
///
/// ```
/// use lexkit_util::Span;
///
/// let span = Span::new(10, 14, 2, 3);
/// assert_eq!(span.len(), 4);
/// assert_eq!(span.to_string(), "2:3");
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Span {
    /// Start byte offset in the input
    pub start: usize,
    /// End byte offset in the input (exclusive)
    pub end: usize,
    /// Line number (1-based)
    pub line: u32,
    /// Column (0-based byte offset within the line)
    pub column: u32,
}

impl Span {
    /// Placeholder span for diagnostics with no meaningful location.
    pub const DUMMY: Span = Span {
        start: 0,
        end: 0,
        line: 0,
        column: 0,
    };

    /// Create a new span.
    ///
    /// `start` must not exceed `end`; use [`Span::try_new`] for untrusted
    /// offsets.
    #[inline]
    pub fn new(start: usize, end: usize, line: u32, column: u32) -> Self {
        debug_assert!(start <= end);
        Self {
            start,
            end,
            line,
            column,
        }
    }

    /// Create a span, rejecting an inverted range.
    ///
    /// # Examples
    ///
    /// ```
    /// use lexkit_util::{Span, SpanError};
    ///
    /// assert!(Span::try_new(0, 4, 1, 0).is_ok());
    /// assert_eq!(
    ///     Span::try_new(5, 4, 1, 0),
    ///     Err(SpanError::Inverted { start: 5, end: 4 })
    /// );
    /// ```
    pub fn try_new(start: usize, end: usize, line: u32, column: u32) -> SpanResult<Self> {
        if start > end {
            return Err(SpanError::Inverted { start, end });
        }
        Ok(Self::new(start, end, line, column))
    }

    /// Create a zero-width span that only carries a line and column.
    #[inline]
    pub fn point(line: u32, column: u32) -> Self {
        Self {
            start: 0,
            end: 0,
            line,
            column,
        }
    }

    /// Returns true if the span covers no bytes.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Length of the span in bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Check if this span contains a byte offset.
    #[inline]
    pub fn contains(&self, offset: usize) -> bool {
        self.start <= offset && offset < self.end
    }

    /// Merge two spans into one covering both.
    ///
    /// The line and column are taken from whichever span starts first.
    ///
    /// # Examples
    ///
    /// ```
    /// use lexkit_util::Span;
    ///
    /// let a = Span::new(4, 6, 1, 4);
    /// let b = Span::new(0, 2, 1, 0);
    /// let merged = a.merge(b);
    /// assert_eq!((merged.start, merged.end), (0, 6));
    /// assert_eq!(merged.column, 0);
    /// ```
    pub fn merge(self, other: Span) -> Span {
        let first = if other.start < self.start { other } else { self };
        Span {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
            line: first.line,
            column: first.column,
        }
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}
