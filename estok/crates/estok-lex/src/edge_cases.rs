//! Edge case tests for estok-lex

#[cfg(test)]
mod tests {
    use crate::{scan, LexError, TokenKind, Unterminated};
    use pretty_assertions::assert_eq;

    fn kinds(source: &str, edition: u32) -> Vec<TokenKind> {
        scan(source, edition)
            .unwrap()
            .into_iter()
            .map(|t| t.kind)
            .collect()
    }

    fn texts(source: &str, edition: u32) -> Vec<&str> {
        scan(source, edition)
            .unwrap()
            .into_iter()
            .map(|t| t.text)
            .collect()
    }

    fn unterminated(source: &str, edition: u32) -> Unterminated {
        match scan(source, edition) {
            Err(LexError::Unterminated { what, .. }) => what,
            other => panic!("expected an unterminated error, got {other:?}"),
        }
    }

    // ==================== WHITESPACE & LINES ====================

    #[test]
    fn test_edge_empty_source() {
        assert!(scan("", 5).unwrap().is_empty());
        assert!(scan("", 2016).unwrap().is_empty());
    }

    #[test]
    fn test_edge_whitespace_is_one_char_per_token() {
        assert_eq!(texts("  \t", 5), [" ", " ", "\t"]);
    }

    #[test]
    fn test_edge_vertical_tab_and_form_feed() {
        assert_eq!(
            kinds("\u{000B}\u{000C}", 5),
            [TokenKind::Whitespace, TokenKind::Whitespace]
        );
    }

    #[test]
    fn test_edge_crlf_is_one_line_end() {
        assert_eq!(texts("\r\n\n\r", 5), ["\r\n", "\n", "\r"]);
    }

    #[test]
    fn test_edge_no_break_space_is_unrecognized() {
        assert!(matches!(
            scan("a\u{00A0}b", 5),
            Err(LexError::Unrecognized { .. })
        ));
    }

    // ==================== NUMBERS ====================

    #[test]
    fn test_edge_number_forms() {
        assert_eq!(
            texts("0 42 3.14 .5 5. 1e10 2.5E-3 0xFF 0755", 5)
                .into_iter()
                .filter(|t| *t != " ")
                .collect::<Vec<_>>(),
            ["0", "42", "3.14", ".5", "5.", "1e10", "2.5E-3", "0xFF", "0755"]
        );
    }

    #[test]
    fn test_edge_method_call_on_integer() {
        assert_eq!(texts("1..toString", 5), ["1.", ".", "toString"]);
    }

    #[test]
    fn test_edge_two_decimal_points() {
        assert_eq!(texts("1.5.5", 5), ["1.5", ".5"]);
    }

    #[test]
    fn test_edge_identifier_after_fraction() {
        assert!(matches!(scan("1.a", 5), Err(LexError::MalformedNumber { .. })));
        assert!(matches!(scan("3in x", 5), Err(LexError::MalformedNumber { .. })));
    }

    #[test]
    fn test_edge_missing_hex_digits() {
        let err = scan("0x", 5).unwrap_err();
        assert_eq!(err.to_string(), "Missing hexadecimal digits after 0x (line 1, col 1)");
    }

    #[test]
    fn test_edge_missing_octal_digits_uppercase() {
        let err = scan("0O;", 6).unwrap_err();
        assert_eq!(err.to_string(), "Missing octal digits after 0O (line 1, col 1)");
    }

    #[test]
    fn test_edge_binary_prefix_is_not_special_in_es5() {
        let err = scan("0b", 5).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Identifier starts immediately after numeric literal (line 1, col 1)"
        );
    }

    // ==================== STRINGS ====================

    #[test]
    fn test_edge_string_escapes_kept_verbatim() {
        assert_eq!(texts(r#""a\"b""#, 5), [r#""a\"b""#]);
    }

    #[test]
    fn test_edge_string_line_continuation() {
        let tokens = scan("'a\\\nb' x", 5).unwrap();
        assert_eq!(tokens[0].text, "'a\\\nb'");
        assert_eq!((tokens[2].line(), tokens[2].col()), (2, 4));
    }

    #[test]
    fn test_edge_unterminated_strings() {
        assert_eq!(unterminated("'abc", 5), Unterminated::String);
        assert_eq!(unterminated("\"abc\ndef\"", 5), Unterminated::String);
    }

    // ==================== TEMPLATES ====================

    #[test]
    fn test_edge_template_is_es2015() {
        assert_eq!(kinds("`a`", 6), [TokenKind::Template]);
        assert!(matches!(scan("`a`", 5), Err(LexError::Unrecognized { .. })));
    }

    #[test]
    fn test_edge_multiline_template_moves_line() {
        let tokens = scan("`a\nbc` x", 6).unwrap();
        assert_eq!(tokens[0].kind, TokenKind::Template);
        assert_eq!((tokens[2].line(), tokens[2].col()), (2, 5));
    }

    #[test]
    fn test_edge_unterminated_templates() {
        assert_eq!(unterminated("`abc", 6), Unterminated::Template);
        assert_eq!(unterminated("`ab\ncd", 6), Unterminated::Template);
    }

    #[test]
    fn test_edge_unterminated_template_section() {
        assert_eq!(unterminated("`a${b}c", 6), Unterminated::TemplateSection);
    }

    // ==================== WORDS ====================

    #[test]
    fn test_edge_fixed_literals() {
        assert_eq!(
            kinds("true false null this", 5)
                .into_iter()
                .filter(|k| *k != TokenKind::Whitespace)
                .collect::<Vec<_>>(),
            [TokenKind::Literal; 4]
        );
    }

    #[test]
    fn test_edge_keyword_prefixes_are_identifiers() {
        assert_eq!(kinds("inner", 5), [TokenKind::Identifier]);
        assert_eq!(kinds("instanceof", 5), [TokenKind::Keyword]);
        assert_eq!(kinds("nullable", 5), [TokenKind::Identifier]);
    }

    #[test]
    fn test_edge_contextual_keywords_need_es2015() {
        for word in ["await", "let", "static", "yield"] {
            assert_eq!(kinds(word, 5), [TokenKind::Identifier], "{word}");
            assert_eq!(kinds(word, 6), [TokenKind::Keyword], "{word}");
        }
    }

    #[test]
    fn test_edge_period_suppression_survives_comments() {
        assert_eq!(
            kinds("a./* c */if", 5),
            [
                TokenKind::Identifier,
                TokenKind::Period,
                TokenKind::Comment,
                TokenKind::Identifier
            ]
        );
    }

    #[test]
    fn test_edge_escaped_identifier() {
        let source = format!("{}bc", "\\u0061");
        let tokens = scan(&source, 5).unwrap();
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].kind, TokenKind::Identifier);
        assert_eq!(tokens[0].text, source);
    }

    #[test]
    fn test_edge_long_identifier() {
        let name = "a".repeat(10000);
        let source = format!("var {name} = 1;");
        let tokens = scan(&source, 5).unwrap();
        assert_eq!(tokens[2].text, name);
    }

    // ==================== COMMENTS ====================

    #[test]
    fn test_edge_comments_are_tokens() {
        assert_eq!(texts("a // b\nc", 5), ["a", " ", "// b", "\n", "c"]);
        assert_eq!(texts("/* x */y", 5), ["/* x */", "y"]);
    }

    #[test]
    fn test_edge_unterminated_comment() {
        assert_eq!(unterminated("/* never", 5), Unterminated::Comment);
    }

    #[test]
    fn test_edge_html_close_comment_at_line_start() {
        assert_eq!(texts("--> note", 6), ["--> note"]);
        assert_eq!(texts("x\n  --> note", 6), ["x", "\n", " ", " ", "--> note"]);
        // Mid-line it is a decrement followed by a comparison.
        assert_eq!(texts("x-->y", 6), ["x", "--", ">", "y"]);
    }

    #[test]
    fn test_edge_html_open_comment() {
        assert_eq!(kinds("<!-- hi", 6), [TokenKind::Comment]);
        assert_eq!(texts("<!-- hi", 5)[0], "<");
    }

    // ==================== REGULAR EXPRESSIONS ====================

    #[test]
    fn test_edge_regex_at_start_of_input() {
        assert_eq!(kinds("/a/g", 5), [TokenKind::Literal]);
    }

    #[test]
    fn test_edge_regex_after_operator() {
        assert_eq!(texts("x=/[/]/", 5), ["x", "=", "/[/]/"]);
    }

    #[test]
    fn test_edge_compound_division() {
        assert_eq!(texts("a/=2", 5), ["a", "/=", "2"]);
    }

    #[test]
    fn test_edge_unterminated_regex() {
        assert_eq!(unterminated("x = /abc", 5), Unterminated::RegExp);
    }

    // ==================== OPERATORS ====================

    #[test]
    fn test_edge_longest_operator() {
        assert_eq!(texts("a>>>=b", 5), ["a", ">>>=", "b"]);
        assert_eq!(texts("a!==b", 5), ["a", "!==", "b"]);
    }

    #[test]
    fn test_edge_arrow_and_spread_need_es2015() {
        assert_eq!(texts("f(...a)=>a", 6), ["f", "(", "...", "a", ")", "=>", "a"]);
        assert_eq!(texts("a=>b", 5), ["a", "=", ">", "b"]);
    }

    #[test]
    fn test_edge_exponent_assignment() {
        assert_eq!(texts("x**=2", 7), ["x", "**=", "2"]);
        assert_eq!(texts("x**=2", 6), ["x", "*", "*=", "2"]);
    }

    #[test]
    fn test_edge_unrecognized_character() {
        let err = scan("a\n  #!", 5).unwrap_err();
        assert_eq!(err.to_string(), "Couldn't understand this code: #! (line 2, col 3)");
        assert_eq!(err.source_label(), "input:4-5");
    }
}
