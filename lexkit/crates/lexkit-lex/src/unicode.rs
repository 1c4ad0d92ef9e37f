//! Character classes used by the default parsers.
//!
//! Each function is a plain `fn(char) -> bool`, so any of them can be handed
//! to a configurable parser in place of the default.

/// Whitespace as the default skipper sees it: Unicode whitespace plus NUL.
///
/// NUL counts so that a stray `'\0'` in the input is skipped rather than
/// producing an `UNKNOWN` token.
///
/// # Example
///
/// ```
/// use lexkit_lex::unicode::is_whitespace;
///
/// assert!(is_whitespace(' '));
/// assert!(is_whitespace('\u{3000}')); // ideographic space
/// assert!(is_whitespace('\0'));
/// assert!(!is_whitespace('a'));
/// ```
pub fn is_whitespace(c: char) -> bool {
    c == '\0' || c.is_whitespace()
}

/// Start of an identifier: `_` or any Unicode letter.
///
/// # Example
///
/// ```
/// use lexkit_lex::unicode::is_ident_start;
///
/// assert!(is_ident_start('_'));
/// assert!(is_ident_start('λ'));
/// assert!(!is_ident_start('1'));
/// ```
pub fn is_ident_start(c: char) -> bool {
    c == '_' || c.is_alphabetic()
}

/// Continuation of an identifier: a start character or any Unicode
/// alphanumeric.
pub fn is_ident_continue(c: char) -> bool {
    c == '_' || c.is_alphanumeric()
}

/// ASCII-only identifier start.
pub fn is_ascii_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

/// ASCII-only identifier continuation.
pub fn is_ascii_ident_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Checks if `c` is a digit in `base` (8, 10 or 16).
///
/// # Example
///
/// ```
/// use lexkit_lex::unicode::is_digit_in_base;
///
/// assert!(is_digit_in_base('7', 8));
/// assert!(!is_digit_in_base('8', 8));
/// assert!(is_digit_in_base('f', 16));
/// assert!(!is_digit_in_base('f', 10));
/// ```
pub fn is_digit_in_base(c: char, base: u32) -> bool {
    match base {
        8 => matches!(c, '0'..='7'),
        10 => c.is_ascii_digit(),
        16 => c.is_ascii_hexdigit(),
        _ => false,
    }
}
