//! Operator and punctuation matchers.
//!
//! Handles the ES2015 `=>` and `...`, the ES2016 `**` and `**=`, the base
//! operator set, and the single-character structural tokens.

/// `=>` or `...`.
pub(super) fn arrow_or_spread(text: &str) -> Option<usize> {
    if text.starts_with("=>") {
        Some(2)
    } else if text.starts_with("...") {
        Some(3)
    } else {
        None
    }
}

/// `**=` or `**`.
pub(super) fn exponent_operator(text: &str) -> Option<usize> {
    if text.starts_with("**=") {
        Some(3)
    } else if text.starts_with("**") {
        Some(2)
    } else {
        None
    }
}

/// The base operator set, longest form first.
///
/// Handles: `&&`, `||`, `++`, `--`; then `!=`, `==`, `<<`, `>>>`, `>>` and
/// the single-character arithmetic, bitwise and relational operators, each
/// optionally followed by `=`; then `!`, `?`, `:`, `~`.
pub(super) fn operator(text: &str) -> Option<usize> {
    let bytes = text.as_bytes();
    let first = *bytes.first()?;
    let second = bytes.get(1).copied();

    if let (b'&', Some(b'&')) | (b'|', Some(b'|')) | (b'+', Some(b'+')) | (b'-', Some(b'-')) =
        (first, second)
    {
        return Some(2);
    }

    let base = match (first, second) {
        (b'!', Some(b'=')) | (b'=', Some(b'=')) | (b'<', Some(b'<')) => Some(2),
        (b'>', Some(b'>')) if bytes.get(2) == Some(&b'>') => Some(3),
        (b'>', Some(b'>')) => Some(2),
        (b'+' | b'-' | b'*' | b'/' | b'%' | b'&' | b'|' | b'^' | b'<' | b'=' | b'>', _) => Some(1),
        _ => None,
    };
    if let Some(len) = base {
        let assign = usize::from(bytes.get(len) == Some(&b'='));
        return Some(len + assign);
    }

    matches!(first, b'!' | b'?' | b':' | b'~').then_some(1)
}

macro_rules! punctuation {
    ($($(#[$meta:meta])* $name:ident => $c:literal),* $(,)?) => {
        $(
            $(#[$meta])*
            pub(super) fn $name(text: &str) -> Option<usize> {
                text.starts_with($c).then_some(1)
            }
        )*
    };
}

punctuation! {
    period => '.',
    comma => ',',
    semicolon => ';',
    left_paren => '(',
    right_paren => ')',
    left_bracket => '[',
    right_bracket => ']',
    left_brace => '{',
    right_brace => '}',
}
