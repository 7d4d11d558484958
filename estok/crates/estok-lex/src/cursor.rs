//! Position tracking over the input.
//!
//! The [`Cursor`] owns the view of the not-yet-scanned input together with
//! the absolute byte offset and the 1-based line/column of the next
//! character. Rules never move it themselves: they report how many bytes
//! they matched and the scanner calls [`Cursor::consume`], the only mutator.

use estok_util::{line_breaks, Location, Span};

/// A cursor over source text that advances one whole match at a time.
///
/// # Example
///
/// ```
/// use estok_lex::cursor::Cursor;
///
/// let mut cursor = Cursor::new("ab\ncd");
/// let (text, span) = cursor.consume(3);
/// assert_eq!(text, "ab\n");
/// assert_eq!((span.line, span.column), (1, 1));
/// assert_eq!((cursor.line(), cursor.column()), (2, 1));
/// assert_eq!(cursor.remaining(), "cd");
/// ```
#[derive(Clone, Debug)]
pub struct Cursor<'a> {
    /// The source text being traversed.
    source: &'a str,

    /// Current byte position in the source.
    position: usize,

    /// Current line number (1-based).
    line: u32,

    /// Current column number (1-based, in characters).
    column: u32,
}

impl<'a> Cursor<'a> {
    /// Creates a new cursor at the start of `source`.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            position: 0,
            line: 1,
            column: 1,
        }
    }

    /// Returns true if the cursor is at the end of the source.
    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.position >= self.source.len()
    }

    /// Returns the source text from the current position to the end.
    #[inline]
    pub fn remaining(&self) -> &'a str {
        &self.source[self.position..]
    }

    /// Returns the full source text.
    pub fn source(&self) -> &'a str {
        self.source
    }

    /// Returns the current byte position in the source.
    #[inline]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Returns the current line number (1-based).
    #[inline]
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Returns the current column number (1-based).
    #[inline]
    pub fn column(&self) -> u32 {
        self.column
    }

    /// Line and column of the next character.
    #[inline]
    pub fn location(&self) -> Location {
        Location::new(self.line, self.column)
    }

    /// A span of `len` bytes starting at the cursor, without consuming it.
    ///
    /// `len` is clamped to the remaining input.
    pub fn span_ahead(&self, len: usize) -> Span {
        let end = self.position.saturating_add(len).min(self.source.len());
        Span::at(self.position, end, self.location())
    }

    /// Consumes the next `len` bytes and returns them with their span.
    ///
    /// The span carries the line and column from *before* the text was
    /// consumed. Afterwards, every line terminator inside the text bumps the
    /// line, and the column either restarts after the last terminator or
    /// grows by the number of characters consumed.
    ///
    /// # Panics
    ///
    /// Panics if `len` runs past the end of the input or does not land on a
    /// char boundary. Rule matchers only ever return lengths of text they
    /// walked, so this is a scanner bug, never an input problem.
    pub fn consume(&mut self, len: usize) -> (&'a str, Span) {
        let start = self.position;
        let text = &self.source[start..start + len];
        let span = Span::at(start, start + len, self.location());

        let breaks = line_breaks(text);
        match breaks.tail {
            Some(tail) => {
                self.line += breaks.count;
                self.column = char_count(tail) + 1;
            }
            None => self.column += char_count(text),
        }
        self.position += len;

        (text, span)
    }
}

fn char_count(text: &str) -> u32 {
    u32::try_from(text.chars().count()).unwrap_or(u32::MAX)
}
