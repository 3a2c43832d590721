use serde::Serialize;

use super::{Pixels, Span, TableRow};

/// A document-level unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Block {
    /// `# text`; `level` is the number of leading `#` characters.
    Header { level: usize, text: String },
    /// A line of inline content.
    Paragraph { spans: Vec<Span> },
    /// A pipe table with at least a header, a divider and one data row.
    Table { rows: Vec<TableRow> },
    /// A line holding nothing but `![alt](url)`.
    Image {
        alt_text: String,
        url: String,
        pixels: Option<Pixels>,
    },
}

/// A borrowed view of one image reference, standalone or inline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageRef<'a> {
    pub alt_text: &'a str,
    pub url: &'a str,
    pub pixels: Option<&'a Pixels>,
    /// True for `Block::Image`, false for `Span::InlineImage`.
    pub standalone: bool,
}

/// The parsed document: blocks in source order.
///
/// Documents are never edited in place. New text means a fresh parse, and
/// attaching image data produces a new document (see [`crate::images`]).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Document {
    blocks: Vec<Block>,
}

impl Document {
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Block> {
        self.blocks.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn into_blocks(self) -> Vec<Block> {
        self.blocks
    }

    /// Every image reference in document order.
    pub fn images(&self) -> Vec<ImageRef<'_>> {
        let mut out = Vec::new();
        for block in &self.blocks {
            match block {
                Block::Image {
                    alt_text,
                    url,
                    pixels,
                } => out.push(ImageRef {
                    alt_text,
                    url,
                    pixels: pixels.as_ref(),
                    standalone: true,
                }),
                Block::Paragraph { spans } => {
                    out.extend(spans.iter().filter_map(|span| match span {
                        Span::InlineImage {
                            alt_text,
                            url,
                            pixels,
                        } => Some(ImageRef {
                            alt_text,
                            url,
                            pixels: pixels.as_ref(),
                            standalone: false,
                        }),
                        _ => None,
                    }));
                }
                Block::Header { .. } | Block::Table { .. } => {}
            }
        }
        out
    }
}

impl From<Vec<Block>> for Document {
    fn from(blocks: Vec<Block>) -> Self {
        Self { blocks }
    }
}

impl IntoIterator for Document {
    type Item = Block;
    type IntoIter = std::vec::IntoIter<Block>;

    fn into_iter(self) -> Self::IntoIter {
        self.blocks.into_iter()
    }
}

impl<'a> IntoIterator for &'a Document {
    type Item = &'a Block;
    type IntoIter = std::slice::Iter<'a, Block>;

    fn into_iter(self) -> Self::IntoIter {
        self.blocks.iter()
    }
}
