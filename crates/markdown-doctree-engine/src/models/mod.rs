pub mod document;
pub mod pixels;
pub mod span;
pub mod table;

pub use document::{Block, Document, ImageRef};
pub use pixels::Pixels;
pub use span::Span;
pub use table::{Alignment, TableRow};
