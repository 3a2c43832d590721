use super::kinds::{Heading, StandaloneImage, Table};

/// What a single line could open, judged from the line alone.
///
/// This is phase 1 of block parsing. Whether a candidate really becomes an
/// image or a table is settled by the builder, which may fall back to a
/// paragraph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineClass {
    /// Empty line; contributes no block.
    Blank,
    /// Starts with `#`.
    Heading,
    /// Starts with `![`.
    ImageCandidate,
    /// Starts with `|` and holds `pipes` pipe characters (more than one).
    TableCandidate { pipes: usize },
    /// Anything else.
    Text,
}

/// Classifies individual lines for the block parsing phase.
pub struct MarkdownLineClassifier;

impl MarkdownLineClassifier {
    /// Classifies a line. The checks run in priority order: header, image,
    /// table, then plain text.
    pub fn classify(&self, line: &str) -> LineClass {
        if line.is_empty() {
            LineClass::Blank
        } else if Heading::opens(line) {
            LineClass::Heading
        } else if StandaloneImage::opens(line) {
            LineClass::ImageCandidate
        } else if Table::opens(line) {
            LineClass::TableCandidate {
                pipes: Table::count_pipes(line),
            }
        } else {
            LineClass::Text
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("", LineClass::Blank)]
    #[case(" ", LineClass::Text)]
    #[case("# Title", LineClass::Heading)]
    #[case("#|a|b|", LineClass::Heading)]
    #[case("![d](u)", LineClass::ImageCandidate)]
    #[case("![d](u) text", LineClass::ImageCandidate)]
    #[case("| a | b |", LineClass::TableCandidate { pipes: 3 })]
    #[case("| lonely", LineClass::Text)]
    #[case("a | b |", LineClass::Text)]
    #[case("plain", LineClass::Text)]
    fn classify_lines(#[case] line: &str, #[case] expected: LineClass) {
        assert_eq!(MarkdownLineClassifier.classify(line), expected);
    }
}
