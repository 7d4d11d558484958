//! Character classes used by the rule matchers.
//!
//! Identifiers are restricted to ASCII plus a fixed `\u00XX` escape subset,
//! so everything here is a plain byte/char test.

/// Checks if a character may start an identifier: `[A-Za-z_$]`.
///
/// # Example
///
/// ```
/// use estok_lex::chars::is_ident_start;
///
/// assert!(is_ident_start('a'));
/// assert!(is_ident_start('$'));
/// assert!(!is_ident_start('1'));
/// assert!(!is_ident_start('α'));
/// ```
#[inline]
pub fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_' || c == '$'
}

/// Checks if a character may continue an identifier: `[A-Za-z0-9_$]`.
///
/// A numeric literal followed by one of these is malformed.
#[inline]
pub fn is_ident_part(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '$'
}

/// Checks if a character is a digit in the given base (2, 8, 10 or 16).
///
/// # Example
///
/// ```
/// use estok_lex::chars::is_digit_in_base;
///
/// assert!(is_digit_in_base('1', 2));
/// assert!(!is_digit_in_base('2', 2));
/// assert!(is_digit_in_base('f', 16));
/// assert!(is_digit_in_base('F', 16));
/// ```
#[inline]
pub fn is_digit_in_base(c: char, base: u32) -> bool {
    c.to_digit(base).is_some()
}

/// Whitespace that forms its own one-character token: space, tab, VT, FF.
#[inline]
pub fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\u{000B}' | '\u{000C}')
}

/// Length of the maximal prefix of `text` whose chars satisfy `pred`.
#[inline]
pub(crate) fn prefix_len(text: &str, pred: impl Fn(char) -> bool) -> usize {
    text.find(|c: char| !pred(c)).unwrap_or(text.len())
}

/// The char starting at byte offset `at`, if any.
#[inline]
pub(crate) fn char_at(text: &str, at: usize) -> Option<char> {
    text.get(at..).and_then(|rest| rest.chars().next())
}

/// True when the char at byte offset `at` exists and satisfies `pred`.
#[inline]
pub(crate) fn next_is(text: &str, at: usize, pred: impl Fn(char) -> bool) -> bool {
    char_at(text, at).is_some_and(pred)
}
