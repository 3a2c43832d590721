//! # markdown-doctree-engine
//!
//! Parses a small, fixed subset of Markdown into a typed document tree.
//!
//! ```text
//! raw text --lines--> Block Scanner --line text--> Inline Tokenizer
//!                           |                            |
//!                           +---------> Document <-------+
//! ```
//!
//! Supported syntax: `#` headers, pipe tables, standalone `![alt](url)` images
//! and paragraphs holding `**bold**`, `__bold__`, `*italic*`, `_italic_`,
//! `~~strikethrough~~` and inline images. Parsing never fails; anything the
//! grammar does not recognise is kept as literal text.
//!
//! - [`parsing`]: [`parse`], [`tokenize_spans`] and the configurable [`Parser`]
//! - [`models`]: the document tree
//! - [`images`]: attaching decoded pixels through an [`ImageResolver`]
//! - [`snapshot`]: outline rendering and structural checks for tests and tooling

pub mod images;
pub mod models;
pub mod parsing;
pub mod snapshot;

// Re-export key types for easier usage
pub use images::{
    ImageResolver, ResolveError, ResolvedImages, resolve_images_with_report, with_resolved_images,
};
pub use models::{Alignment, Block, Document, ImageRef, Pixels, Span, TableRow};
pub use parsing::inline::{AsciiAlphanumeric, UnicodeAlphanumeric, WordChars};
pub use parsing::{Parser, parse, tokenize_spans};
