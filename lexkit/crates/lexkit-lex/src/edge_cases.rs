//! Edge case tests for lexkit-lex

#[cfg(test)]
mod tests {
    use crate::{
        LexError, Lexer, LexerBuilder, NumberValue, ParserChain, SkipPolicy, Token, TokenKind,
    };

    fn lex_all(source: &str) -> Vec<Token> {
        lex_with(source, ParserChain::default())
    }

    fn lex_with(source: &str, chain: ParserChain) -> Vec<Token> {
        Lexer::with_chain(source.chars(), chain)
            .map(|t| t.expect("no lex errors expected"))
            .collect()
    }

    fn first_error(source: &str) -> LexError {
        Lexer::with_chain(source.chars(), ParserChain::c_like())
            .find_map(Result::err)
            .expect("an error was expected")
    }

    // ==================== EDGE CASES ====================

    #[test]
    fn test_edge_empty_source() {
        assert!(lex_all("").is_empty());
    }

    #[test]
    fn test_edge_whitespace_only() {
        assert!(lex_all(" \t\r\n \n").is_empty());
    }

    #[test]
    fn test_edge_nul_is_skipped() {
        let t = lex_all("a\0\0b");
        assert_eq!(t.len(), 2);
        assert_eq!(t[1].literal, "b");
    }

    #[test]
    fn test_edge_single_char_ident() {
        let t = lex_all("x");
        assert_eq!(t, [Token::new(TokenKind::Identifier, "x", 1, 0)]);
    }

    #[test]
    fn test_edge_long_identifier() {
        let name = "a".repeat(10000);
        let t = lex_all(&format!("{} = 1", name));
        assert_eq!(t[0].literal, name);
        assert_eq!(t[1].column, 10001);
    }

    #[test]
    fn test_edge_ident_then_digits() {
        let t = lex_all("abc123 123abc");
        let literals: Vec<_> = t.iter().map(|t| t.literal.as_str()).collect();
        assert_eq!(literals, ["abc123", "123", "abc"]);
    }

    #[test]
    fn test_edge_crlf_lines() {
        let t = lex_all("a\r\nb");
        assert_eq!((t[1].line, t[1].column), (2, 0));
    }

    #[test]
    fn test_edge_unterminated_string() {
        let t = lex_all("say 'never closed");
        assert_eq!(t[1].kind, TokenKind::String);
        assert_eq!(t[1].literal, "never closed");
    }

    #[test]
    fn test_edge_string_spans_lines() {
        let t = lex_all("\"one\ntwo\" next");
        assert_eq!(t[0].literal, "one\ntwo");
        assert_eq!((t[1].line, t[1].column), (2, 5));
    }

    #[test]
    fn test_edge_unknown_multibyte() {
        let t = lex_all("→");
        assert_eq!(t, [Token::new(TokenKind::Unknown, "→", 1, 0)]);
    }

    #[test]
    fn test_edge_comment_without_newline() {
        let t = lex_all("x # tail");
        assert_eq!(t.len(), 1);
    }

    #[test]
    fn test_edge_fall_through_newline_after_comment() {
        let lexer = LexerBuilder::new()
            .source("x # note\ny".chars())
            .skip_policy(SkipPolicy::FallThrough)
            .build()
            .unwrap();
        let t: Vec<Token> = lexer.map(Result::unwrap).collect();
        // The comment parser is last in the default chain, so the fallback
        // gets the first character of the next line.
        assert_eq!(t[1], Token::new(TokenKind::Unknown, "y", 2, 0));
        assert_eq!(t.len(), 2);
    }

    #[test]
    fn test_edge_hex_bounds() {
        let t = lex_with("0x0 0xFF 0x7fffffffffffffff", ParserChain::c_like());
        assert_eq!(t[0].value, Some(NumberValue::Integer(0)));
        assert_eq!(t[1].value, Some(NumberValue::Integer(255)));
        assert_eq!(t[2].value, Some(NumberValue::Integer(i64::MAX)));
    }

    #[test]
    fn test_edge_octal_then_decimal_digit() {
        let t = lex_with("0789", ParserChain::c_like());
        assert_eq!(t[0].literal, "07");
        assert_eq!(t[0].value, Some(NumberValue::Integer(7)));
        assert_eq!(t[1].literal, "89");
    }

    #[test]
    fn test_edge_number_then_dot_ident() {
        let t = lex_with("3.x", ParserChain::c_like());
        assert_eq!(t[0].literal, "3.");
        assert_eq!(t[0].value, Some(NumberValue::Float(3.0)));
        assert_eq!(t[1].literal, "x");
    }

    #[test]
    fn test_edge_default_chain_splits_floats() {
        let t = lex_all("3.25");
        let literals: Vec<_> = t.iter().map(|t| t.literal.as_str()).collect();
        assert_eq!(literals, ["3", ".", "25"]);
        assert!(t.iter().all(|t| t.value.is_none()));
    }

    #[test]
    fn test_edge_adjacent_quoted_strings() {
        let t = lex_all("'it''s'");
        assert_eq!(t.len(), 2);
        assert_eq!(t[0].literal, "it");
        assert_eq!(t[1].literal, "s");
        assert!(t.iter().all(|t| t.kind == TokenKind::String));
    }

    #[test]
    fn test_edge_unknown_then_eof() {
        let mut lexer = Lexer::new("@".chars());
        assert_eq!(
            lexer.get_token().unwrap(),
            Token::new(TokenKind::Unknown, "@", 1, 0)
        );
        assert!(lexer.get_token().unwrap().is_eof());
    }

    #[test]
    fn test_edge_small_exponent() {
        let t = lex_with("3.14e-2", ParserChain::c_like());
        assert_eq!(t[0].value, Some(NumberValue::Float(0.0314)));
    }

    #[test]
    fn test_edge_independent_lexers_agree() {
        let source = "alpha 0x1A 'q' # c\n beta 2.5";
        let first: Vec<_> = Lexer::with_chain(source.chars(), ParserChain::c_like()).collect();
        let second: Vec<_> = Lexer::with_chain(source.chars(), ParserChain::c_like()).collect();
        assert_eq!(first, second);
        assert_eq!(
            first[1].as_ref().unwrap().value,
            Some(NumberValue::Integer(26))
        );
    }

    // ==================== ERROR CASES ====================

    #[test]
    fn test_error_thirty_nines() {
        let err = first_error(&"9".repeat(30));
        assert_eq!(err.literal(), Some("9".repeat(30).as_str()));
        assert!(matches!(err, LexError::NumberOutOfRange { line: 1, column: 0, .. }));
    }

    #[test]
    fn test_error_hex_without_digits() {
        let err = first_error("0xg");
        assert_eq!(
            err,
            LexError::InvalidNumberFormat {
                literal: "0x".into(),
                line: 1,
                column: 0,
            }
        );
    }

    #[test]
    fn test_error_position_on_later_line() {
        match first_error("ok\n  1.0e") {
            LexError::InvalidNumberFormat { line, column, .. } => {
                assert_eq!((line, column), (2, 2));
            },
            other => panic!("unexpected error {:?}", other),
        }
    }

    #[test]
    fn test_error_integer_overflow() {
        let err = first_error("18446744073709551616");
        assert!(matches!(err, LexError::NumberOutOfRange { .. }));
    }

    #[test]
    fn test_error_recovery_continues() {
        let items: Vec<_> = Lexer::with_chain("1.e+ x".chars(), ParserChain::c_like()).collect();
        assert!(items[0].is_err());
        assert_eq!(items[1].as_ref().unwrap().literal, "x");
    }
}
