//! C-style numeric literals with typed values.
//!
//! Accepted forms:
//!
//! | Form        | Example           | Value              |
//! |-------------|-------------------|--------------------|
//! | decimal     | `42`              | `Integer(42)`      |
//! | hexadecimal | `0x1F`, `0XaB`    | `Integer(31)`      |
//! | octal       | `0755`, `0`       | `Integer(493)`     |
//! | float       | `3.25`, `1.5e-3`  | `Float(..)`        |
//!
//! A literal becomes a float once a `.` follows the integer digits; an
//! exponent is only recognized after the fraction. The token literal is
//! always the full source text, prefix included.

use std::num::IntErrorKind;

use super::{ParseResult, TokenParser};
use crate::context::ScanContext;
use crate::error::LexError;
use crate::token::{NumberValue, TokenKind};
use crate::unicode::is_digit_in_base;

/// Parses C-style numbers and attaches a [`NumberValue`].
///
/// Fails with [`LexError::InvalidNumberFormat`] for `0x` without digits, an
/// exponent without digits, or a hexadecimal literal with a fraction, and
/// with [`LexError::NumberOutOfRange`] for integers beyond `i64` or floats
/// that overflow to infinity.
#[derive(Clone, Copy, Debug, Default)]
pub struct NumericLiteralParser;

impl TokenParser for NumericLiteralParser {
    fn parse(&self, ctx: &mut ScanContext<'_>) -> ParseResult {
        if !ctx.current().is_ascii_digit() {
            return Ok(None);
        }

        let radix = scan_integer_part(ctx)?;

        if ctx.current() != '.' {
            let value = integer_value(ctx.text(), radix).map_err(|kind| match kind {
                Overflow::Range => ctx.number_out_of_range(),
                Overflow::Format => ctx.invalid_number(),
            })?;
            ctx.set_value(NumberValue::Integer(value));
            return Ok(Some(TokenKind::Number));
        }

        ctx.bump();
        ctx.bump_while(|c| c.is_ascii_digit());
        if matches!(ctx.current(), 'e' | 'E') {
            ctx.bump();
            if matches!(ctx.current(), '+' | '-') {
                ctx.bump();
            }
            if !ctx.current().is_ascii_digit() {
                return Err(ctx.invalid_number());
            }
            ctx.bump_while(|c| c.is_ascii_digit());
        }

        if radix == 16 {
            return Err(ctx.invalid_number());
        }
        let value: f64 = ctx.text().parse().map_err(|_| ctx.invalid_number())?;
        if !value.is_finite() {
            return Err(ctx.number_out_of_range());
        }
        ctx.set_value(NumberValue::Float(value));
        Ok(Some(TokenKind::Number))
    }

    fn name(&self) -> &str {
        "numeric"
    }
}

enum Overflow {
    Range,
    Format,
}

/// Consumes the integer part and returns its radix.
fn scan_integer_part(ctx: &mut ScanContext<'_>) -> Result<u32, LexError> {
    if ctx.current() != '0' {
        ctx.bump_while(|c| c.is_ascii_digit());
        return Ok(10);
    }

    ctx.bump();
    if matches!(ctx.current(), 'x' | 'X') {
        ctx.bump();
        if !ctx.current().is_ascii_hexdigit() {
            return Err(ctx.invalid_number());
        }
        ctx.bump_while(|c| is_digit_in_base(c, 16));
        Ok(16)
    } else {
        ctx.bump_while(|c| is_digit_in_base(c, 8));
        Ok(8)
    }
}

fn integer_value(text: &str, radix: u32) -> Result<i64, Overflow> {
    let digits = match radix {
        16 => &text[2..],
        8 => &text[1..],
        _ => text,
    };
    if digits.is_empty() {
        // A lone `0`.
        return Ok(0);
    }
    i64::from_str_radix(digits, radix).map_err(|e| match e.kind() {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => Overflow::Range,
        _ => Overflow::Format,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Cursor, TokenBuffer};

    fn run(input: &str) -> (ParseResult, String, Option<NumberValue>, char) {
        let mut cursor = Cursor::new(input.chars());
        let mut buffer = TokenBuffer::new();
        let mut ctx = ScanContext::new(&mut cursor, &mut buffer);
        let result = NumericLiteralParser.parse(&mut ctx);
        let value = ctx.take_value();
        (result, ctx.text().to_string(), value, ctx.current())
    }

    fn value_of(input: &str) -> NumberValue {
        let (result, _, value, _) = run(input);
        assert_eq!(result, Ok(Some(TokenKind::Number)), "input {:?}", input);
        value.expect("number should carry a value")
    }

    #[test]
    fn test_decimal() {
        let (_, text, value, next) = run("1234;");
        assert_eq!(text, "1234");
        assert_eq!(value, Some(NumberValue::Integer(1234)));
        assert_eq!(next, ';');
    }

    #[test]
    fn test_hex_keeps_prefix() {
        let (_, text, value, _) = run("0x1F ");
        assert_eq!(text, "0x1F");
        assert_eq!(value, Some(NumberValue::Integer(31)));
        assert_eq!(value_of("0XaB"), NumberValue::Integer(171));
    }

    #[test]
    fn test_octal() {
        assert_eq!(value_of("0755"), NumberValue::Integer(493));
        assert_eq!(value_of("0"), NumberValue::Integer(0));
        assert_eq!(value_of("00"), NumberValue::Integer(0));
    }

    #[test]
    fn test_octal_stops_at_non_octal_digit() {
        let (_, text, value, next) = run("09");
        assert_eq!(text, "0");
        assert_eq!(value, Some(NumberValue::Integer(0)));
        assert_eq!(next, '9');
    }

    #[test]
    fn test_floats() {
        assert_eq!(value_of("3.25"), NumberValue::Float(3.25));
        assert_eq!(value_of("1.5e3"), NumberValue::Float(1500.0));
        assert_eq!(value_of("2.5E-1"), NumberValue::Float(0.25));
        assert_eq!(value_of("7.e+2"), NumberValue::Float(700.0));
        assert_eq!(value_of("1."), NumberValue::Float(1.0));
    }

    #[test]
    fn test_float_with_leading_zero_is_decimal() {
        assert_eq!(value_of("0755.5"), NumberValue::Float(755.5));
        assert_eq!(value_of("0.5"), NumberValue::Float(0.5));
    }

    #[test]
    fn test_exponent_needs_fraction() {
        let (_, text, value, next) = run("1e5");
        assert_eq!(text, "1");
        assert_eq!(value, Some(NumberValue::Integer(1)));
        assert_eq!(next, 'e');
    }

    #[test]
    fn test_dangling_hex_prefix() {
        let (result, _, _, _) = run("0x;");
        assert_eq!(
            result,
            Err(LexError::InvalidNumberFormat {
                literal: "0x".to_string(),
                line: 1,
                column: 0,
            })
        );
    }

    #[test]
    fn test_exponent_without_digits() {
        for input in ["1.5e", "1.5e+", "1.5E-x"] {
            let (result, _, _, _) = run(input);
            assert!(
                matches!(result, Err(LexError::InvalidNumberFormat { .. })),
                "{:?} should be invalid",
                input
            );
        }
    }

    #[test]
    fn test_hex_fraction_rejected() {
        let (result, _, _, _) = run("0x1.5");
        assert!(matches!(
            result,
            Err(LexError::InvalidNumberFormat { ref literal, .. }) if literal == "0x1.5"
        ));
    }

    #[test]
    fn test_integer_overflow() {
        assert_eq!(value_of("9223372036854775807"), NumberValue::Integer(i64::MAX));
        let (result, _, _, _) = run("9223372036854775808");
        assert!(matches!(result, Err(LexError::NumberOutOfRange { .. })));

        let (result, _, _, _) = run("0x8000000000000000");
        assert!(matches!(result, Err(LexError::NumberOutOfRange { .. })));
    }

    #[test]
    fn test_float_overflow() {
        let huge = format!("1{}.0", "0".repeat(400));
        let (result, _, _, _) = run(&huge);
        assert!(matches!(result, Err(LexError::NumberOutOfRange { .. })));

        let (result, _, _, _) = run("1.0e999");
        assert!(matches!(result, Err(LexError::NumberOutOfRange { .. })));
    }

    #[test]
    fn test_declines_non_digit() {
        let (result, text, _, _) = run(".5");
        assert_eq!(result, Ok(None));
        assert!(text.is_empty());
    }
}
