//! Accumulator for the text of the token being scanned.

/// Growable text buffer reset at the start of every token.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TokenBuffer {
    text: String,
}

impl TokenBuffer {
    /// Creates an empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one character.
    #[inline]
    pub fn append(&mut self, c: char) {
        self.text.push(c);
    }

    /// Empties the buffer, keeping its allocation.
    #[inline]
    pub fn reset(&mut self) {
        self.text.clear();
    }

    /// The accumulated text.
    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Length in bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Returns true if nothing has been appended since the last reset.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_and_reset() {
        let mut buffer = TokenBuffer::new();
        assert!(buffer.is_empty());

        buffer.append('h');
        buffer.append('é');
        assert_eq!(buffer.text(), "hé");
        assert_eq!(buffer.len(), 3);

        buffer.reset();
        assert!(buffer.is_empty());
        assert_eq!(buffer.text(), "");
    }
}
