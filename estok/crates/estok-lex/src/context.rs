//! Context tracking for the two context-sensitive ambiguities.
//!
//! - `/` is division after something that can end an expression and the
//!   start of a regular expression literal everywhere else. The
//!   [`Context::expression`] flag records which.
//! - `}` either closes a brace inside a template interpolation or resumes
//!   the template literal itself. The [`BraceStack`] keeps one counter per
//!   open interpolation (plus a base counter for top-level code) so that a
//!   `}` resumes the template only when the innermost counter is zero.

use crate::token::TokenKind;

/// Per-interpolation brace depth counters.
///
/// The base counter for top-level code can never be popped, so the stack
/// is never empty.
///
/// # Example
///
/// ```
/// use estok_lex::context::BraceStack;
///
/// let mut braces = BraceStack::new();
/// braces.open_brace();
/// assert_eq!(braces.top(), 1);
/// braces.push_interpolation();
/// assert_eq!(braces.top(), 0);
/// assert!(braces.in_interpolation());
/// braces.pop_interpolation();
/// assert_eq!(braces.top(), 1);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BraceStack {
    counters: Vec<u32>,
}

impl BraceStack {
    /// A stack holding only the base counter, set to zero.
    pub fn new() -> Self {
        Self { counters: vec![0] }
    }

    /// Depth of the innermost counter.
    #[inline]
    pub fn top(&self) -> u32 {
        self.counters.last().copied().unwrap_or(0)
    }

    /// Number of counters, including the base one.
    #[inline]
    pub fn len(&self) -> usize {
        self.counters.len()
    }

    /// Always false; present for API symmetry with [`len`](Self::len).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.counters.is_empty()
    }

    /// Whether at least one template interpolation is open.
    #[inline]
    pub fn in_interpolation(&self) -> bool {
        self.counters.len() > 1
    }

    /// Whether a `}` here resumes the enclosing template literal.
    #[inline]
    pub fn at_interpolation_end(&self) -> bool {
        self.in_interpolation() && self.top() == 0
    }

    /// Enters a `${ ... }` interpolation.
    pub fn push_interpolation(&mut self) {
        self.counters.push(0);
    }

    /// Leaves the innermost interpolation. The base counter stays put.
    pub fn pop_interpolation(&mut self) {
        if self.in_interpolation() {
            self.counters.pop();
        }
    }

    /// Records a `{`.
    pub fn open_brace(&mut self) {
        if let Some(top) = self.counters.last_mut() {
            *top += 1;
        }
    }

    /// Records a `}`. Returns false, changing nothing, if the innermost
    /// counter is already zero.
    pub fn close_brace(&mut self) -> bool {
        match self.counters.last_mut() {
            Some(top) if *top > 0 => {
                *top -= 1;
                true
            }
            _ => false,
        }
    }
}

impl Default for BraceStack {
    fn default() -> Self {
        Self::new()
    }
}

/// The mutable facts rule guards consult.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Context {
    /// True right after a token that can end an expression.
    pub expression: bool,

    /// Brace depth per open template interpolation.
    pub braces: BraceStack,

    /// Kind of the most recent non-trivia token, if any.
    pub last_significant: Option<TokenKind>,

    /// True at start of input and after a line end, until the next
    /// non-trivia token.
    pub at_line_start: bool,
}

impl Context {
    /// The state at the start of every scan.
    pub fn new() -> Self {
        Self {
            expression: false,
            braces: BraceStack::new(),
            last_significant: None,
            at_line_start: true,
        }
    }

    /// Whether the last significant token was a `.`.
    #[inline]
    pub fn after_period(&self) -> bool {
        self.last_significant == Some(TokenKind::Period)
    }

    /// Applies the side effects of emitting a token of `kind`.
    ///
    /// The rule table guarantees that a `right-brace` is only emitted while
    /// the innermost counter is positive.
    pub fn observe(&mut self, kind: TokenKind) {
        match kind {
            TokenKind::Whitespace | TokenKind::Comment => return,
            TokenKind::LineEnd => {
                self.at_line_start = true;
                return;
            }
            TokenKind::TemplateStart => self.braces.push_interpolation(),
            TokenKind::TemplateEnd => self.braces.pop_interpolation(),
            TokenKind::LeftBrace => self.braces.open_brace(),
            TokenKind::RightBrace => {
                let closed = self.braces.close_brace();
                debug_assert!(closed, "right-brace emitted at depth zero");
            }
            _ => {}
        }

        self.expression = kind.ends_expression();
        self.last_significant = Some(kind);
        self.at_line_start = false;
    }
}

impl Default for Context {
    fn default() -> Self {
        Self::new()
    }
}
