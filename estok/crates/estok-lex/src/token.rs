//! Token definitions.
//!
//! The scanner produces a flat sequence of [`Token`]s. Every token borrows
//! the exact text it was matched from, so concatenating the `text` of every
//! token reproduces the input. Nothing is decoded: a string literal keeps its
//! quotes and escapes, a regular expression keeps its slashes and flags.

use std::fmt;

use estok_util::Span;
use serde::{Deserialize, Serialize};

/// Classification of a token.
///
/// The set is closed. [`TokenKind::as_str`] gives the stable names that
/// downstream consumers match on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TokenKind {
    /// One space, tab, vertical tab or form feed
    Whitespace,
    /// `\n`, `\r` or `\r\n`
    LineEnd,
    /// Numeric, string, regular expression, `true`/`false`/`null`/`this`
    Literal,
    /// A template literal with no interpolation
    Template,
    /// `` `...${ ``
    TemplateStart,
    /// `}...${`
    TemplateMiddle,
    /// `` }...` ``
    TemplateEnd,
    /// Reserved word
    Keyword,
    /// Identifier name
    Identifier,
    /// Line, block, or HTML-like comment
    Comment,
    /// Any operator, including `?` and `:`
    Operator,
    /// `.`
    Period,
    /// `,`
    Comma,
    /// `;`
    Semicolon,
    /// `(`
    LeftParen,
    /// `)`
    RightParen,
    /// `[`
    LeftBracket,
    /// `]`
    RightBracket,
    /// `{`
    LeftBrace,
    /// `}`
    RightBrace,
}

impl TokenKind {
    /// Every kind, in declaration order.
    pub const ALL: [TokenKind; 20] = [
        TokenKind::Whitespace,
        TokenKind::LineEnd,
        TokenKind::Literal,
        TokenKind::Template,
        TokenKind::TemplateStart,
        TokenKind::TemplateMiddle,
        TokenKind::TemplateEnd,
        TokenKind::Keyword,
        TokenKind::Identifier,
        TokenKind::Comment,
        TokenKind::Operator,
        TokenKind::Period,
        TokenKind::Comma,
        TokenKind::Semicolon,
        TokenKind::LeftParen,
        TokenKind::RightParen,
        TokenKind::LeftBracket,
        TokenKind::RightBracket,
        TokenKind::LeftBrace,
        TokenKind::RightBrace,
    ];

    /// The compatibility name of this kind.
    ///
    /// # Example
    ///
    /// ```
    /// use estok_lex::TokenKind;
    ///
    /// assert_eq!(TokenKind::LeftParen.as_str(), "left-paren");
    /// assert_eq!(TokenKind::LineEnd.as_str(), "line-end");
    /// ```
    pub const fn as_str(self) -> &'static str {
        match self {
            TokenKind::Whitespace => "whitespace",
            TokenKind::LineEnd => "line-end",
            TokenKind::Literal => "literal",
            TokenKind::Template => "template",
            TokenKind::TemplateStart => "template-start",
            TokenKind::TemplateMiddle => "template-middle",
            TokenKind::TemplateEnd => "template-end",
            TokenKind::Keyword => "keyword",
            TokenKind::Identifier => "identifier",
            TokenKind::Comment => "comment",
            TokenKind::Operator => "operator",
            TokenKind::Period => "period",
            TokenKind::Comma => "comma",
            TokenKind::Semicolon => "semicolon",
            TokenKind::LeftParen => "left-paren",
            TokenKind::RightParen => "right-paren",
            TokenKind::LeftBracket => "left-bracket",
            TokenKind::RightBracket => "right-bracket",
            TokenKind::LeftBrace => "left-brace",
            TokenKind::RightBrace => "right-brace",
        }
    }

    /// Whitespace, line ends and comments.
    ///
    /// These never affect the expression flag or the last significant token.
    pub const fn is_trivia(self) -> bool {
        matches!(
            self,
            TokenKind::Whitespace | TokenKind::LineEnd | TokenKind::Comment
        )
    }

    /// Whether a token of this kind can end an expression.
    ///
    /// After such a token a `/` is division; after anything else it starts
    /// a regular expression literal.
    pub const fn ends_expression(self) -> bool {
        matches!(
            self,
            TokenKind::Literal
                | TokenKind::Template
                | TokenKind::TemplateEnd
                | TokenKind::Identifier
                | TokenKind::RightParen
                | TokenKind::RightBracket
                | TokenKind::RightBrace
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A classified slice of the input.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Token<'a> {
    /// What the text was classified as.
    pub kind: TokenKind,
    /// The exact matched text.
    pub text: &'a str,
    /// Byte range and start line/column.
    pub span: Span,
}

impl<'a> Token<'a> {
    /// Creates a token.
    pub fn new(kind: TokenKind, text: &'a str, span: Span) -> Self {
        Self { kind, text, span }
    }

    /// Byte offset of the first character.
    #[inline]
    pub fn start(&self) -> usize {
        self.span.start
    }

    /// Byte offset one past the last character.
    #[inline]
    pub fn end(&self) -> usize {
        self.span.end
    }

    /// 1-based line of the first character.
    #[inline]
    pub fn line(&self) -> u32 {
        self.span.line
    }

    /// 1-based column of the first character.
    #[inline]
    pub fn col(&self) -> u32 {
        self.span.column
    }

    /// See [`TokenKind::is_trivia`].
    #[inline]
    pub fn is_trivia(&self) -> bool {
        self.kind.is_trivia()
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:?} {}", self.kind, self.text, self.span.location())
    }
}
