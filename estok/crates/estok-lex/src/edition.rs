//! Language edition profiles.
//!
//! An [`Edition`] is a single resolved number fixed for the duration of one
//! scan. Rules compare it numerically against the edition that introduced
//! them, so unknown values are accepted and simply land above or below the
//! relevant thresholds.
//!
//! | input | resolved | unlocks |
//! |-------|----------|---------|
//! | 5 | 5 | base grammar |
//! | 6, 2015 | unchanged | binary/octal literals, templates, `=>`, `...`, contextual keywords, HTML-like comments |
//! | 7, 2016 | 2016 | everything above plus `**` and `**=` |

use std::fmt;

use serde::{Deserialize, Serialize};

/// A resolved ECMAScript edition number.
///
/// # Example
///
/// ```
/// use estok_lex::Edition;
///
/// assert_eq!(Edition::new(7), Edition::ES2016);
/// assert!(Edition::new(2015).at_least(Edition::ES2015));
/// assert!(!Edition::new(2015).at_least(Edition::ES2016));
/// assert_eq!(Edition::default(), Edition::ES5);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "u32", into = "u32")]
pub struct Edition(u32);

impl Edition {
    /// ECMAScript 5, the oldest supported edition.
    pub const ES5: Edition = Edition(5);

    /// ECMAScript 2015. The threshold is 6 so that both `6` and `2015` pass.
    pub const ES2015: Edition = Edition(6);

    /// ECMAScript 2016.
    pub const ES2016: Edition = Edition(2016);

    /// Resolves a raw edition number, mapping `7` to `2016`.
    pub const fn new(raw: u32) -> Self {
        match raw {
            7 => Self::ES2016,
            other => Edition(other),
        }
    }

    /// The resolved number.
    pub const fn get(self) -> u32 {
        self.0
    }

    /// Whether this edition includes features introduced in `since`.
    #[inline]
    pub const fn at_least(self, since: Edition) -> bool {
        self.0 >= since.0
    }
}

impl Default for Edition {
    fn default() -> Self {
        Self::ES5
    }
}

impl From<u32> for Edition {
    fn from(raw: u32) -> Self {
        Self::new(raw)
    }
}

impl From<Edition> for u32 {
    fn from(edition: Edition) -> Self {
        edition.0
    }
}

impl fmt::Display for Edition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ES{}", self.0)
    }
}
