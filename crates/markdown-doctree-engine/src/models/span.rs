use serde::Serialize;

use super::Pixels;

/// Inline content of a paragraph.
///
/// Styled variants hold their content verbatim: markers inside a styled run
/// are not parsed again, so `**a *b* c**` is a single `Bold("a *b* c")`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Span {
    /// Literal text. Never empty.
    Text(String),
    /// `**bold**` or `__bold__`.
    Bold(String),
    /// `*italic*` or `_italic_`.
    Italic(String),
    /// `~~strikethrough~~`.
    Strikethrough(String),
    /// `![alt](url)` in the middle of other text.
    InlineImage {
        alt_text: String,
        url: String,
        pixels: Option<Pixels>,
    },
}

impl Span {
    /// The textual payload: the content for text-like spans, alt text for images.
    pub fn value(&self) -> &str {
        match self {
            Span::Text(v) | Span::Bold(v) | Span::Italic(v) | Span::Strikethrough(v) => v,
            Span::InlineImage { alt_text, .. } => alt_text,
        }
    }

    /// Short variant name, used by outlines and logs.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Span::Text(_) => "Text",
            Span::Bold(_) => "Bold",
            Span::Italic(_) => "Italic",
            Span::Strikethrough(_) => "Strikethrough",
            Span::InlineImage { .. } => "InlineImage",
        }
    }
}
