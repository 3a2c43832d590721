pub mod heading;
pub mod image;
pub mod paragraph;
pub mod table;

pub use heading::Heading;
pub use image::StandaloneImage;
pub use paragraph::Paragraph;
pub use table::Table;
