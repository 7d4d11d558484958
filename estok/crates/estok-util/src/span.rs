//! Span module - Source location tracking.
//!
//! A [`Span`] is a half-open byte range into the scanned text together with
//! the 1-based line and column of its first character. A [`Location`] is just
//! the line/column pair, and renders as the `"(line L, col C)"` suffix used
//! in every scanner error message.
//!
//! # Examples
//!
//! ```
//! use estok_util::span::Span;
//!
//! let span = Span::new(10, 20, 2, 3);
//! assert_eq!(span.label(), "input:10-20");
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

/// Line and column of a position in source text, both 1-based.
///
/// # Examples
///
/// ```
/// use estok_util::span::Location;
///
/// let loc = Location::new(3, 14);
/// assert_eq!(loc.to_string(), "(line 3, col 14)");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Location {
    /// Line number (1-based)
    pub line: u32,
    /// Column number (1-based, in characters)
    pub column: u32,
}

impl Location {
    /// The position of the first character of any input.
    pub const START: Location = Location { line: 1, column: 1 };

    /// Create a new location
    #[inline]
    pub const fn new(line: u32, column: u32) -> Self {
        Self { line, column }
    }
}

impl Default for Location {
    #[inline]
    fn default() -> Self {
        Self::START
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(line {}, col {})", self.line, self.column)
    }
}

/// Source location span
///
/// A `Span` represents a range in source code, identified by:
/// - Byte offsets (start inclusive, end exclusive)
/// - Line and column of `start` (for human-readable output)
///
/// # Examples
///
/// ```
/// use estok_util::span::Span;
///
/// let span = Span::new(10, 20, 1, 11);
/// assert_eq!(span.start, 10);
/// assert_eq!(span.end, 20);
/// assert!(span.contains(15));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Span {
    /// Start byte offset in source
    pub start: usize,
    /// End byte offset in source (exclusive)
    pub end: usize,
    /// Line number of `start` (1-based)
    pub line: u32,
    /// Column number of `start` (1-based)
    pub column: u32,
}

impl Span {
    /// Create a new span
    ///
    /// # Arguments
    ///
    /// * `start` - Start byte offset
    /// * `end` - End byte offset
    /// * `line` - Line number of `start` (1-based)
    /// * `column` - Column number of `start` (1-based)
    #[inline]
    pub fn new(start: usize, end: usize, line: u32, column: u32) -> Self {
        debug_assert!(start <= end, "span start {start} is past its end {end}");
        Self {
            start,
            end,
            line,
            column,
        }
    }

    /// Create a span starting at `location`
    #[inline]
    pub fn at(start: usize, end: usize, location: Location) -> Self {
        Self::new(start, end, location.line, location.column)
    }

    /// Returns true if this span is empty (start == end)
    ///
    /// # Examples
    ///
    /// ```
    /// use estok_util::span::Span;
    ///
    /// assert!(Span::new(10, 10, 1, 5).is_empty());
    /// assert!(!Span::new(10, 20, 1, 5).is_empty());
    /// ```
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Returns the length of the span in bytes
    #[inline]
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Check if this span contains a byte offset
    #[inline]
    pub fn contains(&self, offset: usize) -> bool {
        self.start <= offset && offset < self.end
    }

    /// Line and column of the first character
    #[inline]
    pub fn location(&self) -> Location {
        Location::new(self.line, self.column)
    }

    /// A short `"input:START-END"` label naming the byte range.
    ///
    /// Scanner errors carry this label so that callers that juggle several
    /// inputs can tell which range of which buffer failed.
    ///
    /// # Examples
    ///
    /// ```
    /// use estok_util::span::Span;
    ///
    /// assert_eq!(Span::new(0, 3, 1, 1).label(), "input:0-3");
    /// ```
    pub fn label(&self) -> String {
        format!("input:{}-{}", self.start, self.end)
    }
}
