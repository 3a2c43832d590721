//! # Snapshot Support
//!
//! Utilities for looking at parsed documents in tests and on the command line.
//!
//! - **`outline`**: renders a [`Document`](crate::models::Document) as a stable,
//!   indented text outline, used by `insta` snapshots and the CLI
//! - **`invariants`**: structural checks every freshly parsed document must
//!   pass (table shape, no empty text, no pixels yet)

pub mod invariants;
pub mod outline;

pub use invariants::check as invariants;
pub use outline::outline;
