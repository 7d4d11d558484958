//! Scanner error types.
//!
//! Every lexical anomaly is fatal: the scan stops at the first one and the
//! caller receives a [`LexError`] instead of a token sequence. Each error
//! carries the [`Span`] of the offending text, starting exactly where the
//! rule that diagnosed it began matching.

use std::fmt;
use std::path::PathBuf;

use estok_util::{Location, Span};
use thiserror::Error;

/// What is wrong with a numeric literal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NumericProblem {
    /// `3in`, `0xFFg`, `1.a`
    IdentifierAfterNumber,
    /// `0b12`, `0o78`
    NumberAfterNumber,
    /// `0b`, `0o`, `0x` with nothing after the prefix
    MissingDigits {
        /// Digit class the prefix announced
        radix: Radix,
    },
    /// `1e`, `2.5E+`
    MissingExponent,
}

/// The digit class named by a radix prefix.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Radix {
    /// `0b`
    Binary,
    /// `0o`
    Octal,
    /// `0x`
    Hexadecimal,
}

impl Radix {
    /// Lowercase name used in diagnostics.
    pub const fn name(self) -> &'static str {
        match self {
            Radix::Binary => "binary",
            Radix::Octal => "octal",
            Radix::Hexadecimal => "hexadecimal",
        }
    }
}

/// Which construct ran off the end of its line or of the input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Unterminated {
    /// `'...` or `"...`
    String,
    /// `` `... ``
    Template,
    /// `}...` while an interpolation is open
    TemplateSection,
    /// `/* ...`
    Comment,
    /// `/...` in operand position
    RegExp,
}

impl fmt::Display for Unterminated {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Unterminated::String => "Unfinished string",
            Unterminated::Template => "Unfinished template literal",
            Unterminated::TemplateSection => "Unfinished template literal section",
            Unterminated::Comment => "Unfinished comment",
            Unterminated::RegExp => "Unfinished regular expression",
        })
    }
}

/// Error produced when the input cannot be tokenized.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    /// Malformed numeric literal
    #[error("{} {}", numeric_message(.problem, .text), .span.location())]
    MalformedNumber {
        /// What is wrong with it
        problem: NumericProblem,
        /// The matched text, including the offending character if any
        text: String,
        /// Where it starts
        span: Span,
    },

    /// A literal, comment or template section that never closes
    #[error("{what} {}", .span.location())]
    Unterminated {
        /// Which construct
        what: Unterminated,
        /// From the opening delimiter to the end of its line
        span: Span,
    },

    /// `}` with no open brace and no open template interpolation
    #[error("Unmatched right-brace {}", .span.location())]
    UnmatchedBrace {
        /// The brace
        span: Span,
    },

    /// No rule matches at this position
    #[error("Couldn't understand this code: {line} {}", .span.location())]
    Unrecognized {
        /// Unconsumed text up to the next line terminator
        line: String,
        /// The first unmatched character
        span: Span,
    },

    /// The iteration cap ran out before the input did
    #[error("Scanner exceeded its iteration limit of {limit} {}", .span.location())]
    IterationLimit {
        /// The configured cap
        limit: usize,
        /// The unconsumed remainder of the input
        span: Span,
    },
}

fn numeric_message(problem: &NumericProblem, text: &str) -> String {
    match problem {
        NumericProblem::IdentifierAfterNumber => {
            "Identifier starts immediately after numeric literal".to_string()
        }
        NumericProblem::NumberAfterNumber => {
            "Numeric literal starts immediately after numeric literal".to_string()
        }
        NumericProblem::MissingDigits { radix } => {
            format!("Missing {} digits after {}", radix.name(), text)
        }
        NumericProblem::MissingExponent => "Missing exponent in scientific literal".to_string(),
    }
}

impl LexError {
    /// The offending range.
    pub fn span(&self) -> Span {
        match self {
            LexError::MalformedNumber { span, .. }
            | LexError::Unterminated { span, .. }
            | LexError::UnmatchedBrace { span }
            | LexError::Unrecognized { span, .. }
            | LexError::IterationLimit { span, .. } => *span,
        }
    }

    /// Line and column where the offending text starts.
    pub fn location(&self) -> Location {
        self.span().location()
    }

    /// `"input:START-END"` label of the offending range.
    pub fn source_label(&self) -> String {
        self.span().label()
    }

    /// True for errors caused by the input rather than by the scanner.
    pub fn is_syntax_error(&self) -> bool {
        !matches!(self, LexError::IterationLimit { .. })
    }
}

/// Result type alias for scanning.
pub type Result<T> = std::result::Result<T, LexError>;

/// Error loading a [`ScanConfig`](crate::ScanConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Reading the configuration file failed
    #[error("Failed to read {path}: {source}")]
    Io {
        /// File that could not be read
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// The TOML could not be parsed into a configuration
    #[error("Invalid configuration: {0}")]
    Toml(#[from] toml::de::Error),

    /// The values parse but make no sense
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}
