use crate::models::Block;
use crate::parsing::inline::{WordChars, tokenize};

/// Paragraph block type.
///
/// Paragraphs have no delimiters: they are what a line becomes when no other
/// block kind claims it. Each paragraph holds the inline spans of one line.
pub struct Paragraph;

impl Paragraph {
    pub fn parse_line<W: WordChars + ?Sized>(line: &str, word_chars: &W) -> Block {
        Block::Paragraph {
            spans: tokenize(line, word_chars),
        }
    }
}
