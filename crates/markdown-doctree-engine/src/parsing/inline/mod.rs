//! # Inline Tokenizer
//!
//! Turns one line of paragraph text into a flat sequence of [`Span`]s with a
//! single left-to-right cursor.
//!
//! ## Modules
//!
//! - **`kinds`**: delimiter and image-marker definitions
//! - **`boundary`**: the [`WordChars`] predicate and the underscore word-boundary rule
//! - **`cursor`**: byte cursor over the line
//! - **`parser`**: [`tokenize`] and its `try_parse_*` helpers
//!
//! ## Flat model
//!
//! Content captured between a pair of delimiters is stored verbatim. Markers
//! inside it are not tokenized again.
//!
//! [`Span`]: crate::models::Span

pub mod boundary;
pub mod cursor;
pub mod kinds;
pub mod parser;

pub use boundary::{AsciiAlphanumeric, UnicodeAlphanumeric, WordChars, is_valid_marker};
pub use parser::{next_marker_position, tokenize};
