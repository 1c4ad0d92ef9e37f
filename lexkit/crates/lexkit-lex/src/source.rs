//! Character sources.
//!
//! The lexer never touches storage directly. It pulls one character at a
//! time from a [`CharSource`], and `None` means the input is exhausted.
//! Every `Iterator<Item = char>` already is a source, so `"text".chars()`
//! works out of the box; [`Utf8Reader`] covers byte streams such as files,
//! sockets and stdin.

use std::io::{self, BufReader, Read};

/// Anything that can yield characters one at a time.
pub trait CharSource {
    /// Returns the next character, or `None` once the input is exhausted.
    fn next_char(&mut self) -> Option<char>;
}

impl<I> CharSource for I
where
    I: Iterator<Item = char>,
{
    #[inline]
    fn next_char(&mut self) -> Option<char> {
        self.next()
    }
}

/// Incremental UTF-8 decoder over any [`Read`] implementation.
///
/// Malformed or truncated sequences decode to U+FFFD. An I/O error ends the
/// stream; the error is kept and can be retrieved with
/// [`Utf8Reader::take_error`] so callers can tell a clean end from a failed
/// read.
///
/// # Example
///
/// ```
/// use lexkit_lex::source::Utf8Reader;
///
/// let chars: String = Utf8Reader::new("héllo".as_bytes()).collect();
/// assert_eq!(chars, "héllo");
/// ```
pub struct Utf8Reader<R> {
    inner: BufReader<R>,
    pending: Option<u8>,
    error: Option<io::Error>,
}

impl<R: Read> Utf8Reader<R> {
    /// Wraps `reader` in a buffered UTF-8 decoder.
    pub fn new(reader: R) -> Self {
        Self {
            inner: BufReader::new(reader),
            pending: None,
            error: None,
        }
    }

    /// Takes the I/O error that ended the stream, if any.
    pub fn take_error(&mut self) -> Option<io::Error> {
        self.error.take()
    }

    fn read_byte(&mut self) -> Option<u8> {
        if self.error.is_some() {
            return None;
        }
        let mut byte = [0u8; 1];
        loop {
            match self.inner.read(&mut byte) {
                Ok(0) => return None,
                Ok(_) => return Some(byte[0]),
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => {
                    self.error = Some(e);
                    return None;
                }
            }
        }
    }
}

impl<R: Read> Iterator for Utf8Reader<R> {
    type Item = char;

    fn next(&mut self) -> Option<char> {
        let lead = match self.pending.take() {
            Some(byte) => byte,
            None => self.read_byte()?,
        };

        let width = sequence_width(lead);
        match width {
            0 => return Some(char::REPLACEMENT_CHARACTER),
            1 => return Some(lead as char),
            _ => {}
        }

        let mut bytes = [lead, 0, 0, 0];
        for slot in bytes.iter_mut().take(width).skip(1) {
            match self.read_byte() {
                Some(b) if b & 0xC0 == 0x80 => *slot = b,
                Some(b) => {
                    // Not a continuation byte: it starts the next character.
                    self.pending = Some(b);
                    return Some(char::REPLACEMENT_CHARACTER);
                }
                None => return Some(char::REPLACEMENT_CHARACTER),
            }
        }

        Some(
            std::str::from_utf8(&bytes[..width])
                .ok()
                .and_then(|s| s.chars().next())
                .unwrap_or(char::REPLACEMENT_CHARACTER),
        )
    }
}

/// Length of the UTF-8 sequence introduced by `lead`, or 0 if `lead` cannot
/// start one.
fn sequence_width(lead: u8) -> usize {
    match lead {
        0x00..=0x7F => 1,
        0xC2..=0xDF => 2,
        0xE0..=0xEF => 3,
        0xF0..=0xF4 => 4,
        _ => 0,
    }
}
