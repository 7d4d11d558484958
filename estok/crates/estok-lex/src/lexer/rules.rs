//! The ordered rule table.
//!
//! Each [`Rule`] pairs an anchored matcher with the action to take when it
//! matches. A rule takes part in a scan only when the edition includes it
//! and its guard accepts the current [`Context`]. The scanner fires the
//! first rule that applies and matches, so order encodes precedence:
//!
//! - numbers come before operators, so a leading `.5` is a number and not
//!   a period;
//! - every error rule sits right after the rule it diagnoses, so malformed
//!   input gets a specific message instead of falling through;
//! - fixed literals and keywords come before identifiers;
//! - comments come before regular expressions, which come before `/`.

use estok_util::is_line_terminator;

use super::{comment, identifier, number, operator, regex, string};
use crate::chars::{char_at, is_whitespace};
use crate::context::Context;
use crate::edition::Edition;
use crate::error::{NumericProblem, Radix, Unterminated};
use crate::token::TokenKind;

/// An anchored pattern: the byte length matched at the start of the input.
pub(crate) type Matcher = fn(&str) -> Option<usize>;

/// A predicate over the scan context.
pub(crate) type Guard = fn(&Context) -> bool;

/// What a rule does when it fires.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Action {
    /// Emit a token of this kind
    Emit(TokenKind),
    /// Stop the scan with this diagnosis
    Fail(Diagnosis),
}

/// Why an error rule fired.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Diagnosis {
    Numeric(NumericProblem),
    Unterminated(Unterminated),
    UnmatchedBrace,
}

/// One entry of the rule table.
#[derive(Clone, Copy)]
pub(crate) struct Rule {
    /// Short name, used in trace output
    pub name: &'static str,
    /// Edition that introduced the rule
    pub since: Edition,
    pub guard: Guard,
    pub matcher: Matcher,
    pub action: Action,
}

impl Rule {
    const fn new(name: &'static str, matcher: Matcher, action: Action) -> Self {
        Self {
            name,
            since: Edition::ES5,
            guard: always,
            matcher,
            action,
        }
    }

    const fn since(mut self, edition: Edition) -> Self {
        self.since = edition;
        self
    }

    const fn when(mut self, guard: Guard) -> Self {
        self.guard = guard;
        self
    }

    /// Whether the rule takes part at this point of a scan.
    #[inline]
    pub(crate) fn applies(&self, edition: Edition, context: &Context) -> bool {
        edition.at_least(self.since) && (self.guard)(context)
    }
}

impl std::fmt::Debug for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rule")
            .field("name", &self.name)
            .field("since", &self.since)
            .field("action", &self.action)
            .finish_non_exhaustive()
    }
}

fn always(_: &Context) -> bool {
    true
}

fn not_after_period(context: &Context) -> bool {
    !context.after_period()
}

fn at_line_start(context: &Context) -> bool {
    context.at_line_start
}

fn operand_position(context: &Context) -> bool {
    !context.expression
}

fn at_interpolation_end(context: &Context) -> bool {
    context.braces.at_interpolation_end()
}

fn inside_braces(context: &Context) -> bool {
    context.braces.top() > 0
}

fn at_brace_floor(context: &Context) -> bool {
    context.braces.top() == 0
}

/// One whitespace character.
fn whitespace(text: &str) -> Option<usize> {
    char_at(text, 0).filter(|&c| is_whitespace(c)).map(char::len_utf8)
}

/// `\r\n`, `\n` or `\r`.
fn line_end(text: &str) -> Option<usize> {
    if text.starts_with("\r\n") {
        Some(2)
    } else {
        char_at(text, 0).filter(|&c| is_line_terminator(c)).map(|_| 1)
    }
}

const fn emit(kind: TokenKind) -> Action {
    Action::Emit(kind)
}

const fn numeric(problem: NumericProblem) -> Action {
    Action::Fail(Diagnosis::Numeric(problem))
}

const fn unterminated(what: Unterminated) -> Action {
    Action::Fail(Diagnosis::Unterminated(what))
}

const IDENT_AFTER: Action = numeric(NumericProblem::IdentifierAfterNumber);
const NUMBER_AFTER: Action = numeric(NumericProblem::NumberAfterNumber);
const LITERAL: Action = emit(TokenKind::Literal);
const KEYWORD: Action = emit(TokenKind::Keyword);
const COMMENT: Action = emit(TokenKind::Comment);
const OPERATOR: Action = emit(TokenKind::Operator);

/// Every rule, in priority order.
pub(crate) static RULES: &[Rule] = &[
    Rule::new("whitespace", whitespace, emit(TokenKind::Whitespace)),
    Rule::new("line-end", line_end, emit(TokenKind::LineEnd)),
    // Numbers
    Rule::new("binary", number::binary_literal, LITERAL).since(Edition::ES2015),
    Rule::new("octal", number::octal_literal, LITERAL).since(Edition::ES2015),
    Rule::new("legacy-octal", number::legacy_octal_literal, LITERAL),
    Rule::new("hex", number::hex_literal, LITERAL),
    Rule::new(
        "binary-octal-then-identifier",
        number::binary_or_octal_then_identifier,
        IDENT_AFTER,
    )
    .since(Edition::ES2015),
    Rule::new(
        "legacy-hex-then-identifier",
        number::legacy_or_hex_then_identifier,
        IDENT_AFTER,
    ),
    Rule::new(
        "binary-octal-then-digit",
        number::binary_or_octal_then_digit,
        NUMBER_AFTER,
    )
    .since(Edition::ES2015),
    Rule::new(
        "legacy-hex-then-digit",
        number::legacy_or_hex_then_digit,
        NUMBER_AFTER,
    ),
    Rule::new(
        "binary-prefix",
        number::binary_prefix,
        numeric(NumericProblem::MissingDigits {
            radix: Radix::Binary,
        }),
    )
    .since(Edition::ES2015),
    Rule::new(
        "octal-prefix",
        number::octal_prefix,
        numeric(NumericProblem::MissingDigits {
            radix: Radix::Octal,
        }),
    )
    .since(Edition::ES2015),
    Rule::new(
        "hex-prefix",
        number::hex_prefix,
        numeric(NumericProblem::MissingDigits {
            radix: Radix::Hexadecimal,
        }),
    ),
    Rule::new("scientific", number::scientific_literal, LITERAL),
    Rule::new(
        "scientific-then-identifier",
        number::scientific_then_identifier,
        IDENT_AFTER,
    ),
    Rule::new(
        "missing-exponent",
        number::missing_exponent,
        numeric(NumericProblem::MissingExponent),
    ),
    Rule::new("decimal", number::decimal_literal, LITERAL),
    Rule::new(
        "decimal-then-identifier",
        number::decimal_then_identifier,
        IDENT_AFTER,
    ),
    // Strings and templates
    Rule::new("string", string::string_literal, LITERAL),
    Rule::new(
        "unterminated-string",
        string::unterminated_string,
        unterminated(Unterminated::String),
    ),
    Rule::new("template", string::template_literal, emit(TokenKind::Template))
        .since(Edition::ES2015),
    Rule::new(
        "template-start",
        string::template_head,
        emit(TokenKind::TemplateStart),
    )
    .since(Edition::ES2015),
    Rule::new(
        "unterminated-template",
        string::unterminated_template,
        unterminated(Unterminated::Template),
    )
    .since(Edition::ES2015),
    Rule::new(
        "template-end",
        string::template_tail,
        emit(TokenKind::TemplateEnd),
    )
    .since(Edition::ES2015)
    .when(at_interpolation_end),
    Rule::new(
        "template-middle",
        string::template_middle,
        emit(TokenKind::TemplateMiddle),
    )
    .since(Edition::ES2015)
    .when(at_interpolation_end),
    Rule::new(
        "unterminated-template-section",
        string::unterminated_template_section,
        unterminated(Unterminated::TemplateSection),
    )
    .since(Edition::ES2015)
    .when(at_interpolation_end),
    // Words
    Rule::new("fixed-literal", identifier::fixed_literal, LITERAL),
    Rule::new("keyword", identifier::keyword, KEYWORD).when(not_after_period),
    Rule::new("contextual-keyword", identifier::contextual_keyword, KEYWORD)
        .since(Edition::ES2015)
        .when(not_after_period),
    Rule::new(
        "identifier",
        identifier::identifier,
        emit(TokenKind::Identifier),
    ),
    // Comments
    Rule::new("line-comment", comment::line_comment, COMMENT),
    Rule::new("block-comment", comment::block_comment, COMMENT),
    Rule::new(
        "unterminated-comment",
        comment::unterminated_block_comment,
        unterminated(Unterminated::Comment),
    ),
    Rule::new("html-close-comment", comment::html_close_comment, COMMENT)
        .since(Edition::ES2015)
        .when(at_line_start),
    Rule::new("html-open-comment", comment::html_open_comment, COMMENT)
        .since(Edition::ES2015),
    // Regular expressions
    Rule::new("regex", regex::regex_literal, LITERAL).when(operand_position),
    Rule::new(
        "unterminated-regex",
        regex::unterminated_regex,
        unterminated(Unterminated::RegExp),
    )
    .when(operand_position),
    // Operators
    Rule::new("arrow-spread", operator::arrow_or_spread, OPERATOR).since(Edition::ES2015),
    Rule::new("exponent", operator::exponent_operator, OPERATOR).since(Edition::ES2016),
    Rule::new("operator", operator::operator, OPERATOR),
    // Punctuation
    Rule::new("period", operator::period, emit(TokenKind::Period)),
    Rule::new("comma", operator::comma, emit(TokenKind::Comma)),
    Rule::new("semicolon", operator::semicolon, emit(TokenKind::Semicolon)),
    Rule::new("left-paren", operator::left_paren, emit(TokenKind::LeftParen)),
    Rule::new("right-paren", operator::right_paren, emit(TokenKind::RightParen)),
    Rule::new(
        "left-bracket",
        operator::left_bracket,
        emit(TokenKind::LeftBracket),
    ),
    Rule::new(
        "right-bracket",
        operator::right_bracket,
        emit(TokenKind::RightBracket),
    ),
    Rule::new("left-brace", operator::left_brace, emit(TokenKind::LeftBrace)),
    Rule::new("right-brace", operator::right_brace, emit(TokenKind::RightBrace))
        .when(inside_braces),
    Rule::new(
        "unmatched-right-brace",
        operator::right_brace,
        Action::Fail(Diagnosis::UnmatchedBrace),
    )
    .when(at_brace_floor),
];

/// The first rule that applies here and matches the input, with the
/// length it matched.
pub(crate) fn select(
    text: &str,
    edition: Edition,
    context: &Context,
) -> Option<(&'static Rule, usize)> {
    RULES
        .iter()
        .filter(|rule| rule.applies(edition, context))
        .find_map(|rule| (rule.matcher)(text).map(|len| (rule, len)))
}
