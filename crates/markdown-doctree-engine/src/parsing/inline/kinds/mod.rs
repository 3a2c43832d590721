//! # Inline Kinds
//!
//! Inline constructs that own their delimiters. The tokenizer reads marker
//! strings from here and never spells out `**` or `![` itself.
//!
//! - **`delimiter`**: paired emphasis markers (`**`, `__`, `*`, `_`, `~~`)
//! - **`image`**: the `![alt](url)` grammar, shared with the block scanner

pub mod delimiter;
pub mod image;

pub use delimiter::{Delimiter, Style};
pub use image::{ImageMarker, ImageMatch};
