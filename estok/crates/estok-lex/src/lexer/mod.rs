//! Lexer module.
//!
//! This module organizes the scanner into smaller, focused components:
//! - `core` - the [`Lexer`] loop and error construction
//! - `rules` - the ordered rule table and its guards
//! - `number` - numeric literal matchers
//! - `string` - string and template literal matchers
//! - `identifier` - identifier, keyword and fixed literal matchers
//! - `comment` - comment matchers
//! - `regex` - regular expression literal matchers
//! - `operator` - operator and punctuation matchers

mod comment;
mod core;
mod identifier;
mod number;
mod operator;
mod regex;
mod rules;
mod string;

pub use self::core::Lexer;
