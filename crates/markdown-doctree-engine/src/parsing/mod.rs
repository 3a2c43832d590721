pub mod blocks;
pub mod inline;

use crate::models::{Document, Span};

use blocks::BlockBuilder;
use inline::{UnicodeAlphanumeric, WordChars};

/// Markdown parser with an injected word-boundary predicate.
///
/// Parsing is a pure function of the input text: a `Parser` holds no state
/// between calls and can be shared across threads when its predicate can.
#[derive(Debug, Clone, Default)]
pub struct Parser<W = UnicodeAlphanumeric> {
    word_chars: W,
}

impl Parser {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<W: WordChars> Parser<W> {
    /// Uses `word_chars` to decide which `_`/`__` markers sit inside a word.
    pub fn with_word_chars(word_chars: W) -> Self {
        Self { word_chars }
    }

    /// Parses a whole document. Never fails; unrecognised input becomes
    /// paragraphs.
    pub fn parse(&self, text: &str) -> Document {
        let blocks = BlockBuilder::new(text, &self.word_chars).finish();
        log::debug!(
            "parsed {} byte(s) into {} block(s)",
            text.len(),
            blocks.len()
        );
        Document::from(blocks)
    }

    /// Tokenizes a single line of inline content.
    pub fn tokenize_spans(&self, text: &str) -> Vec<Span> {
        inline::tokenize(text, &self.word_chars)
    }
}

/// Parses `text` with the default Unicode word-boundary predicate.
pub fn parse(text: &str) -> Document {
    Parser::new().parse(text)
}

/// Tokenizes one line of inline content with the default predicate.
pub fn tokenize_spans(text: &str) -> Vec<Span> {
    Parser::new().tokenize_spans(text)
}
