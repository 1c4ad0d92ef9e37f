//! Behavior switches for the lexer.

/// What [`Lexer::get_token`](super::Lexer::get_token) does once input is
/// exhausted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum EofPolicy {
    /// Return an EOF token, as many times as asked.
    #[default]
    Token,
    /// Return [`LexError::EndOfInput`](crate::LexError::EndOfInput)
    /// carrying the EOF token.
    Error,
}

/// What happens when a chain parser consumes input but reports no match.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum SkipPolicy {
    /// Start over from the skipper, so a comment in the chain behaves like
    /// one handled by the skipper.
    #[default]
    Rescan,
    /// Keep going down the chain from the new position. The character after
    /// a comment (usually the newline) may then reach the unknown-character
    /// fallback.
    FallThrough,
}

/// Lexer configuration.
///
/// # Example
///
/// ```
/// use lexkit_lex::{EofPolicy, LexerConfig, SkipPolicy};
///
/// let config = LexerConfig::strict().with_skip(SkipPolicy::FallThrough);
/// assert_eq!(config.eof, EofPolicy::Error);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LexerConfig {
    /// End-of-input behavior
    pub eof: EofPolicy,
    /// Behavior after a consuming non-match
    pub skip: SkipPolicy,
}

impl LexerConfig {
    /// Default policies with end of input reported as an error.
    pub fn strict() -> Self {
        Self::default().with_eof(EofPolicy::Error)
    }

    /// Sets the end-of-input policy.
    pub fn with_eof(mut self, eof: EofPolicy) -> Self {
        self.eof = eof;
        self
    }

    /// Sets the skip policy.
    pub fn with_skip(mut self, skip: SkipPolicy) -> Self {
        self.skip = skip;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = LexerConfig::default();
        assert_eq!(config.eof, EofPolicy::Token);
        assert_eq!(config.skip, SkipPolicy::Rescan);
    }

    #[test]
    fn test_strict() {
        let config = LexerConfig::strict();
        assert_eq!(config.eof, EofPolicy::Error);
        assert_eq!(config.skip, SkipPolicy::Rescan);
    }
}
