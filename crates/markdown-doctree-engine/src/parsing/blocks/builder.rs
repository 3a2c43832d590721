use crate::models::Block;
use crate::parsing::inline::WordChars;

use super::{
    classify::{LineClass, MarkdownLineClassifier},
    kinds::{Heading, Paragraph, StandaloneImage, Table},
};

/// Single forward pass over the lines of a document.
///
/// Each step consumes one line, except a confirmed table which consumes its
/// whole region. There is no backtracking across emitted blocks.
pub struct BlockBuilder<'a, W: WordChars + ?Sized> {
    lines: Vec<&'a str>,
    pos: usize,
    word_chars: &'a W,
    out: Vec<Block>,
}

impl<'a, W: WordChars + ?Sized> BlockBuilder<'a, W> {
    /// Splits `text` on `\n`. Nothing else is trimmed, so a `\r` before the
    /// newline stays part of the line.
    pub fn new(text: &'a str, word_chars: &'a W) -> Self {
        Self {
            lines: text.split('\n').collect(),
            pos: 0,
            word_chars,
            out: vec![],
        }
    }

    pub fn finish(mut self) -> Vec<Block> {
        let classifier = MarkdownLineClassifier;
        while self.pos < self.lines.len() {
            let line = self.lines[self.pos];
            let consumed = match classifier.classify(line) {
                LineClass::Blank => 1,
                LineClass::Heading => {
                    self.emit(Heading::parse_line(line));
                    1
                }
                LineClass::ImageCandidate => {
                    let block = StandaloneImage::parse_line(line)
                        .unwrap_or_else(|| Paragraph::parse_line(line, self.word_chars));
                    self.emit(block);
                    1
                }
                LineClass::TableCandidate { pipes } => self.table_or_paragraph(pipes),
                LineClass::Text => {
                    self.emit(Paragraph::parse_line(line, self.word_chars));
                    1
                }
            };
            self.pos += consumed;
        }
        self.out
    }

    /// Emits a table for the region opened at the cursor, or a paragraph for
    /// the opening line alone. Returns the number of lines consumed.
    fn table_or_paragraph(&mut self, pipes: usize) -> usize {
        let end = self.region_end(pipes);
        let count = end - self.pos;

        if count >= Table::MIN_LINES && Table::is_divider_line(self.lines[self.pos + 1]) {
            let block = Table::build(&self.lines[self.pos..end]);
            self.emit(block);
            return count;
        }

        log::debug!(
            "line {}: table candidate of {count} line(s) is not a table, keeping as paragraph",
            self.pos + 1
        );
        let line = self.lines[self.pos];
        self.emit(Paragraph::parse_line(line, self.word_chars));
        1
    }

    /// One past the last line, from the cursor on, whose pipe count is `pipes`.
    fn region_end(&self, pipes: usize) -> usize {
        self.lines[self.pos..]
            .iter()
            .position(|line| Table::count_pipes(line) != pipes)
            .map_or(self.lines.len(), |offset| self.pos + offset)
    }

    fn emit(&mut self, block: Block) {
        log::trace!("line {}: {:?}", self.pos + 1, block);
        self.out.push(block);
    }
}
