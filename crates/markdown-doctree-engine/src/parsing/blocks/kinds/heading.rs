use crate::models::Block;

/// ATX-style header with owned marker constants.
pub struct Heading;

impl Heading {
    /// The header marker character.
    pub const MARKER: char = '#';

    pub fn opens(line: &str) -> bool {
        line.starts_with(Self::MARKER)
    }

    /// Parses a line that starts with `#`.
    ///
    /// The level is the length of the leading `#` run. Spaces after the run
    /// are skipped and any trailing run of spaces and `#` is stripped, so
    /// `## Title ##` gives `Header { level: 2, text: "Title" }`.
    pub fn parse_line(line: &str) -> Block {
        let body = line.trim_start_matches(Self::MARKER);
        let level = line.len() - body.len();
        let text = body
            .trim_start_matches(' ')
            .trim_end_matches([' ', Self::MARKER]);

        Block::Header {
            level,
            text: text.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn header(level: usize, text: &str) -> Block {
        Block::Header {
            level,
            text: text.into(),
        }
    }

    #[rstest]
    #[case("# H", header(1, "H"))]
    #[case("## H", header(2, "H"))]
    #[case("# H #", header(1, "H"))]
    #[case("### Title ###   ", header(3, "Title"))]
    #[case("#######  deep", header(7, "deep"))]
    #[case("#tag", header(1, "tag"))]
    #[case("#", header(1, ""))]
    #[case("# ## #", header(1, ""))]
    #[case("# C# language", header(1, "C# language"))]
    #[case("# Ends in C#", header(1, "Ends in C"))]
    fn parse_heading_lines(#[case] line: &str, #[case] expected: Block) {
        assert_eq!(Heading::parse_line(line), expected);
    }

    #[test]
    fn tabs_after_marker_are_kept() {
        assert_eq!(Heading::parse_line("#\tx"), header(1, "\tx"));
    }
}
