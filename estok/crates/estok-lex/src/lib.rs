//! estok-lex - Edition-Aware ECMAScript Lexical Scanner
//!
//! This crate turns ECMAScript source text into a flat, ordered sequence of
//! classified tokens for a downstream parser. It does not build a syntax
//! tree and it does not decode anything: every token borrows the exact text
//! it was matched from.
//!
//! # Example Usage
//!
//! ```
//! use estok_lex::{scan, TokenKind};
//!
//! let tokens = scan("return /ab/g;", 5).unwrap();
//! let texts: Vec<_> = tokens.iter().map(|t| t.text).collect();
//! assert_eq!(texts, ["return", " ", "/ab/g", ";"]);
//! assert_eq!(tokens[2].kind, TokenKind::Literal);
//!
//! // Every byte of the input is covered, whitespace included.
//! assert_eq!(texts.concat(), "return /ab/g;");
//! ```
//!
//! # Module Structure
//!
//! - [`token`] - [`Token`] and the closed [`TokenKind`] set
//! - [`lexer`] - the [`Lexer`] and its ordered rule table
//! - [`cursor`] - byte offset and line/column bookkeeping
//! - [`context`] - expression flag and template brace stack
//! - [`edition`] - [`Edition`] profiles gating the rule table
//! - [`config`] - [`ScanConfig`], optionally loaded from TOML
//! - [`error`] - [`LexError`] and [`ConfigError`]
//! - [`chars`] - character classes shared by the matchers
//!
//! # Editions
//!
//! | edition | adds |
//! |---------|------|
//! | 5 | base grammar: decimal/hex/legacy-octal numbers, strings, regular expressions, keywords, operators |
//! | 6 / 2015 | `0b`/`0o` literals, template literals, `=>`, `...`, `await`/`let`/`static`/`yield`, HTML-like comments |
//! | 7 / 2016 | `**`, `**=` |
//!
//! # Context Sensitivity
//!
//! Two decisions depend on what came before:
//!
//! - A `/` starts a regular expression unless the previous significant token
//!   can end an expression (a literal, an identifier, or a closing bracket).
//! - A `}` resumes a template literal when it closes the `${` of an
//!   interpolation rather than a `{` opened inside it.
//!
//! ```
//! use estok_lex::{scan, TokenKind};
//!
//! let kinds: Vec<_> = scan("`a${ {b:1} }c`", 6)
//!     .unwrap()
//!     .into_iter()
//!     .filter(|t| !t.is_trivia())
//!     .map(|t| t.kind)
//!     .collect();
//! assert_eq!(kinds.first(), Some(&TokenKind::TemplateStart));
//! assert_eq!(kinds.last(), Some(&TokenKind::TemplateEnd));
//! ```
//!
//! # Errors
//!
//! Scanning fails fast. The first malformed literal, unterminated construct,
//! unmatched `}` or unrecognized character ends the scan with a [`LexError`]
//! carrying its [`Span`](estok_util::Span).

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod chars;
pub mod config;
pub mod context;
pub mod cursor;
pub mod edition;
pub mod error;
pub mod lexer;
pub mod token;

#[cfg(test)]
mod edge_cases;

// Re-export main types for convenience
pub use config::{ScanConfig, CONFIG_FILE_NAME, DEFAULT_ITERATION_LIMIT};
pub use context::{BraceStack, Context};
pub use cursor::Cursor;
pub use edition::Edition;
pub use error::{ConfigError, LexError, NumericProblem, Radix, Result, Unterminated};
pub use lexer::Lexer;
pub use token::{Token, TokenKind};

/// Scans `source` under `edition` with the default iteration cap.
///
/// # Example
///
/// ```
/// use estok_lex::{scan, LexError};
///
/// let err = scan("x = 0xFFg", 5).unwrap_err();
/// assert!(matches!(err, LexError::MalformedNumber { .. }));
/// assert_eq!(
///     err.to_string(),
///     "Identifier starts immediately after numeric literal (line 1, col 5)"
/// );
/// ```
pub fn scan(source: &str, edition: impl Into<Edition>) -> Result<Vec<Token<'_>>> {
    Lexer::with_edition(source, edition).tokenize()
}

/// Scans `source` with an explicit configuration.
pub fn scan_with<'a>(source: &'a str, config: &ScanConfig) -> Result<Vec<Token<'a>>> {
    Lexer::new(source, *config).tokenize()
}

#[cfg(test)]
mod tests {
    use super::*;
    use estok_util::Span;
    use pretty_assertions::assert_eq;

    /// Non-trivia tokens as `(kind, text)` pairs.
    fn significant(source: &str, edition: u32) -> Vec<(TokenKind, &str)> {
        scan(source, edition)
            .unwrap()
            .into_iter()
            .filter(|token| !token.is_trivia())
            .map(|token| (token.kind, token.text))
            .collect()
    }

    #[test]
    fn test_template_nesting() {
        use TokenKind::*;
        assert_eq!(
            significant("`a${ {b:1} }c`", 6),
            [
                (TemplateStart, "`a${"),
                (LeftBrace, "{"),
                (Identifier, "b"),
                (Operator, ":"),
                (Literal, "1"),
                (RightBrace, "}"),
                (TemplateEnd, "}c`"),
            ]
        );
    }

    #[test]
    fn test_template_middle_sections() {
        use TokenKind::*;
        assert_eq!(
            significant("`${a}-${b}`", 2015),
            [
                (TemplateStart, "`${"),
                (Identifier, "a"),
                (TemplateMiddle, "}-${"),
                (Identifier, "b"),
                (TemplateEnd, "}`"),
            ]
        );
    }

    #[test]
    fn test_nested_templates() {
        use TokenKind::*;
        assert_eq!(
            significant("`x${ `y${z}` }`", 6),
            [
                (TemplateStart, "`x${"),
                (TemplateStart, "`y${"),
                (Identifier, "z"),
                (TemplateEnd, "}`"),
                (TemplateEnd, "}`"),
            ]
        );
    }

    #[test]
    fn test_division_after_identifier() {
        use TokenKind::*;
        assert_eq!(
            significant("a / b", 5),
            [(Identifier, "a"), (Operator, "/"), (Identifier, "b")]
        );
    }

    #[test]
    fn test_regex_after_keyword() {
        use TokenKind::*;
        assert_eq!(
            significant("return /ab/", 5),
            [(Keyword, "return"), (Literal, "/ab/")]
        );
    }

    #[test]
    fn test_division_after_closing_brackets() {
        let kinds: Vec<_> = significant("(a) / [b] / 2", 5)
            .into_iter()
            .filter(|(_, text)| *text == "/")
            .map(|(kind, _)| kind)
            .collect();
        assert_eq!(kinds, [TokenKind::Operator, TokenKind::Operator]);
    }

    #[test]
    fn test_keyword_after_period_is_identifier() {
        use TokenKind::*;
        assert_eq!(
            significant("foo.let", 6),
            [(Identifier, "foo"), (Period, "."), (Identifier, "let")]
        );
        assert_eq!(
            significant("a.\n  return", 5),
            [(Identifier, "a"), (Period, "."), (Identifier, "return")]
        );
        assert_eq!(significant("let", 6), [(Keyword, "let")]);
        assert_eq!(significant("let", 5), [(Identifier, "let")]);
    }

    #[test]
    fn test_numeric_edge_errors() {
        let err = scan("0xFFg", 5).unwrap_err();
        assert!(matches!(
            err,
            LexError::MalformedNumber {
                problem: NumericProblem::IdentifierAfterNumber,
                ..
            }
        ));

        let err = scan("0b", 6).unwrap_err();
        assert_eq!(err.to_string(), "Missing binary digits after 0b (line 1, col 1)");

        let err = scan("1e", 5).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Missing exponent in scientific literal (line 1, col 1)"
        );

        let err = scan("0b12", 6).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Numeric literal starts immediately after numeric literal (line 1, col 1)"
        );
    }

    #[test]
    fn test_octal_gated_by_edition() {
        let tokens = scan("0o17", 6).unwrap();
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].kind, TokenKind::Literal);
        assert_eq!(tokens[0].text, "0o17");

        assert!(scan("0o17", 5).is_err());
    }

    #[test]
    fn test_exponent_operator_gated_by_edition() {
        use TokenKind::*;
        assert_eq!(significant("a ** b", 7), [(Identifier, "a"), (Operator, "**"), (Identifier, "b")]);
        assert_eq!(
            significant("a ** b", 6),
            [(Identifier, "a"), (Operator, "*"), (Operator, "*"), (Identifier, "b")]
        );
    }

    #[test]
    fn test_unmatched_right_brace() {
        let err = scan("}", 5).unwrap_err();
        assert_eq!(
            err,
            LexError::UnmatchedBrace {
                span: Span::new(0, 1, 1, 1)
            }
        );
        assert_eq!(err.to_string(), "Unmatched right-brace (line 1, col 1)");
    }

    #[test]
    fn test_balanced_braces() {
        assert!(scan("{ { } }", 5).is_ok());
        assert!(scan("{ } }", 5).is_err());
    }

    #[test]
    fn test_line_and_column_tracking() {
        let tokens = scan("a\r\nbb\rc\n  d", 5).unwrap();
        let positions: Vec<_> = tokens
            .iter()
            .filter(|t| t.kind == TokenKind::Identifier)
            .map(|t| (t.text, t.line(), t.col()))
            .collect();
        assert_eq!(positions, [("a", 1, 1), ("bb", 2, 1), ("c", 3, 1), ("d", 4, 3)]);
    }

    #[test]
    fn test_iteration_limit_through_config() {
        let config = ScanConfig::new().with_iteration_limit(3);
        let err = scan_with("a b c d", &config).unwrap_err();
        assert!(matches!(err, LexError::IterationLimit { limit: 3, .. }));
        assert!(!err.is_syntax_error());
    }

    #[test]
    fn test_scan_with_edition_from_toml() {
        let config = ScanConfig::from_toml_str("edition = 2015").unwrap();
        let tokens = scan_with("x => x", &config).unwrap();
        assert_eq!(tokens[2].text, "=>");
    }

    #[test]
    fn test_scan_with_tracing_enabled() {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::new("estok_lex=trace"))
            .with_test_writer()
            .try_init();
        assert_eq!(scan("a + b", 5).unwrap().len(), 5);
        assert!(scan("a + }", 5).is_err());
    }

    #[test]
    fn test_concurrent_scans_are_independent() {
        let source = "let total = `sum: ${ {a: 1}.a + b / 2 }`; // done\n";
        let expected = scan(source, 2016).unwrap();

        std::thread::scope(|scope| {
            let handles: Vec<_> = (0..4)
                .map(|_| scope.spawn(|| scan(source, 2016).unwrap()))
                .collect();
            for handle in handles {
                assert_eq!(handle.join().unwrap(), expected);
            }
        });
    }

    #[test]
    fn test_property_tokens_partition_input() {
        use proptest::prelude::*;

        proptest!(|(input in "\\PC{0,120}", edition in prop_oneof![Just(5u32), Just(6), Just(2016)])| {
            match scan(&input, edition) {
                Ok(tokens) => {
                    let rebuilt: String = tokens.iter().map(|t| t.text).collect();
                    prop_assert_eq!(&rebuilt, &input);
                    let mut at = 0;
                    for token in &tokens {
                        prop_assert_eq!(token.start(), at);
                        prop_assert!(token.end() > token.start());
                        at = token.end();
                    }
                }
                Err(err) => {
                    let span = err.span();
                    prop_assert!(span.start <= span.end);
                    prop_assert!(span.end <= input.len());
                }
            }
        });
    }

    #[test]
    fn test_property_safe_alphabet_always_scans() {
        use proptest::prelude::*;

        proptest!(|(input in "[a-z_$ \t\n;,.()\\[\\]{+*=<>!?:~%^&|-]{0,200}")| {
            for edition in [5u32, 6, 2016] {
                let tokens = scan(&input, edition);
                prop_assert!(tokens.is_ok(), "{:?} under {}: {:?}", input, edition, tokens);
            }
        });
    }

    #[test]
    fn test_property_scan_is_deterministic() {
        use proptest::prelude::*;

        proptest!(|(input in "[a-z0-9 '\"`${}/*.\n]{0,80}")| {
            prop_assert_eq!(scan(&input, 6), scan(&input, 6));
        });
    }
}
