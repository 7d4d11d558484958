//! Core scanner implementation.
//!
//! This module contains the [`Lexer`] struct: the loop that asks the rule
//! table for a match, advances the cursor, and updates the context.

use std::iter::FusedIterator;

use estok_util::first_line;
use tracing::{debug, trace};

use super::rules::{self, Action, Diagnosis};
use crate::config::ScanConfig;
use crate::context::Context;
use crate::cursor::Cursor;
use crate::edition::Edition;
use crate::error::{LexError, Result};
use crate::token::Token;

/// Scanner for ECMAScript source text.
///
/// A lexer runs exactly one scan. Tokens come out in input order, either
/// one at a time through [`next_token`](Self::next_token) and the
/// [`Iterator`] impl, or all at once through [`tokenize`](Self::tokenize).
/// The first error ends the scan: afterwards the lexer only returns `None`.
///
/// # Example
///
/// ```
/// use estok_lex::{Lexer, TokenKind};
///
/// let kinds: Vec<_> = Lexer::with_edition("x = 1", 5)
///     .map(|token| token.unwrap().kind)
///     .collect();
/// assert_eq!(
///     kinds,
///     [
///         TokenKind::Identifier,
///         TokenKind::Whitespace,
///         TokenKind::Operator,
///         TokenKind::Whitespace,
///         TokenKind::Literal,
///     ]
/// );
/// ```
#[derive(Debug, Clone)]
pub struct Lexer<'a> {
    /// Position in the source.
    cursor: Cursor<'a>,

    /// Expression flag, brace stack and last significant token.
    context: Context,

    /// Edition and iteration cap for this scan.
    config: ScanConfig,

    /// Rule-table iterations so far.
    iterations: usize,

    /// Set once the input is exhausted or an error was returned.
    finished: bool,
}

impl<'a> Lexer<'a> {
    /// Creates a lexer over `source` with the given configuration.
    pub fn new(source: &'a str, config: ScanConfig) -> Self {
        Self {
            cursor: Cursor::new(source),
            context: Context::new(),
            config,
            iterations: 0,
            finished: false,
        }
    }

    /// Creates a lexer with the default configuration for `edition`.
    pub fn with_edition(source: &'a str, edition: impl Into<Edition>) -> Self {
        Self::new(source, ScanConfig::new().with_edition(edition))
    }

    /// The edition this scan runs under.
    pub fn edition(&self) -> Edition {
        self.config.edition
    }

    /// The current scan context.
    pub fn context(&self) -> &Context {
        &self.context
    }

    /// The cursor over the remaining input.
    pub fn cursor(&self) -> &Cursor<'a> {
        &self.cursor
    }

    /// Returns the next token, `None` at end of input, or the error that
    /// ends the scan.
    pub fn next_token(&mut self) -> Option<Result<Token<'a>>> {
        if self.finished {
            return None;
        }
        if self.cursor.is_at_end() {
            self.finished = true;
            return None;
        }

        let result = self.step();
        if result.is_err() {
            self.finished = true;
        }
        Some(result)
    }

    /// Scans the whole input.
    pub fn tokenize(self) -> Result<Vec<Token<'a>>> {
        let edition = self.config.edition;
        let len = self.cursor.source().len();
        debug!(%edition, len, "scanning");

        let result: Result<Vec<_>> = self.collect();
        match &result {
            Ok(tokens) => debug!(tokens = tokens.len(), "scan finished"),
            Err(err) => debug!(error = %err, "scan failed"),
        }
        result
    }

    /// One iteration of the rule table.
    fn step(&mut self) -> Result<Token<'a>> {
        let rest = self.cursor.remaining();

        if self.iterations >= self.config.iteration_limit {
            return Err(LexError::IterationLimit {
                limit: self.config.iteration_limit,
                span: self.cursor.span_ahead(rest.len()),
            });
        }
        self.iterations += 1;

        let Some((rule, len)) = rules::select(rest, self.config.edition, &self.context) else {
            let offending = rest.chars().next().map_or(1, char::len_utf8);
            return Err(LexError::Unrecognized {
                line: first_line(rest).to_string(),
                span: self.cursor.span_ahead(offending),
            });
        };

        match rule.action {
            Action::Emit(kind) => {
                let (text, span) = self.cursor.consume(len);
                self.context.observe(kind);
                trace!(rule = rule.name, %kind, start = span.start, end = span.end, "matched");
                Ok(Token::new(kind, text, span))
            }
            Action::Fail(diagnosis) => {
                trace!(rule = rule.name, at = self.cursor.position(), "diagnosed");
                Err(self.diagnose(diagnosis, len))
            }
        }
    }

    /// Builds the error for an error rule that matched `len` bytes.
    fn diagnose(&self, diagnosis: Diagnosis, len: usize) -> LexError {
        let span = self.cursor.span_ahead(len);
        match diagnosis {
            Diagnosis::Numeric(problem) => LexError::MalformedNumber {
                problem,
                text: self.cursor.remaining()[..len].to_string(),
                span,
            },
            Diagnosis::Unterminated(what) => LexError::Unterminated { what, span },
            Diagnosis::UnmatchedBrace => LexError::UnmatchedBrace { span },
        }
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Result<Token<'a>>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_token()
    }
}

impl FusedIterator for Lexer<'_> {}
