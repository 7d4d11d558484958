//! estok-util - Source Location Foundation Types
//!
//! This crate holds the small set of types that every other estok crate
//! needs in order to talk about *where* something happened in a piece of
//! ECMAScript source text.
//!
//! # Module Structure
//!
//! - [`span`] - [`Span`] (byte range + start line/column) and [`Location`]
//! - [`text`] - line terminator helpers shared by the cursor and the
//!   error reporter
//!
//! # Positions
//!
//! Offsets are byte offsets into the original `&str`, so a span can always
//! be used to slice the source it came from. Lines and columns are 1-based.
//! Columns count `char`s, not bytes.
//!
//! ```
//! use estok_util::{Location, Span};
//!
//! let span = Span::new(4, 7, 1, 5);
//! assert_eq!(span.len(), 3);
//! assert_eq!(span.location(), Location::new(1, 5));
//! assert_eq!(span.location().to_string(), "(line 1, col 5)");
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod span;
pub mod text;

pub use span::{Location, Span};
pub use text::{first_line, is_line_break, is_line_terminator, line_breaks, rest_of_line, LineBreaks};
