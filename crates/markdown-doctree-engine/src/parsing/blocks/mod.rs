//! # Block Scanner
//!
//! Line-oriented block parsing in two phases.
//!
//! 1. **Line classification** (`classify`): each line is tagged with what it
//!    could open, from local facts only.
//! 2. **Block construction** (`builder`): a single forward pass turns the
//!    classified lines into [`Block`]s, scanning ahead only to measure a table
//!    region.
//!
//! ## Modules
//!
//! - **`kinds`**: block types that own their syntax (Heading, StandaloneImage,
//!   Table, Paragraph)
//! - **`classify`**: `MarkdownLineClassifier` produces a `LineClass` per line
//! - **`builder`**: `BlockBuilder` drives the pass and handles fallbacks
//!
//! ## Fallbacks
//!
//! A line that looks like an image or a table but does not hold up becomes a
//! paragraph, so every line with content yields exactly one block unless it
//! belongs to a table.
//!
//! [`Block`]: crate::models::Block

pub mod builder;
pub mod classify;
pub mod kinds;

pub use builder::BlockBuilder;
pub use classify::{LineClass, MarkdownLineClassifier};
