use std::sync::OnceLock;

use regex::Regex;

use crate::models::{Alignment, Block, TableRow};

/// Pipe table block type with owned delimiter constants.
pub struct Table;

impl Table {
    /// Cell separator.
    pub const PIPE: char = '|';
    /// Alignment marker in the divider row.
    pub const COLON: char = ':';
    /// Header, divider and at least one data row.
    pub const MIN_LINES: usize = 3;

    /// Whether a line can open a table region: it starts with `|` and has
    /// at least one more `|`.
    pub fn opens(line: &str) -> bool {
        line.starts_with(Self::PIPE) && Self::count_pipes(line) > 1
    }

    pub fn count_pipes(line: &str) -> usize {
        line.matches(Self::PIPE).count()
    }

    /// Splits a row on `|`, drops the fields before the first and after the
    /// last pipe, and trims each remaining cell.
    pub fn split_cells(line: &str) -> Vec<&str> {
        let mut fields: Vec<&str> = line.split(Self::PIPE).collect();
        if fields.len() < 2 {
            return vec![];
        }
        fields.pop();
        fields.remove(0);
        fields.into_iter().map(str::trim).collect()
    }

    /// Whether a line is a divider row such as `|:---|:-:|--:|`.
    ///
    /// Each cell is optional whitespace, an optional `:`, one or more `-`, an
    /// optional `:` and optional whitespace, and every cell ends with a `|`.
    pub fn is_divider_line(line: &str) -> bool {
        static DIVIDER: OnceLock<Regex> = OnceLock::new();
        DIVIDER
            .get_or_init(|| {
                Regex::new(r"^\|?(\s*:?-+:?\s*\|)+\s*$").expect("Invalid divider regex")
            })
            .is_match(line)
    }

    /// Alignment for one trimmed divider cell.
    ///
    /// `:-:` is center, `:--` start, `--:` end; a bare `---` is center.
    pub fn alignment_of(cell: &str) -> Alignment {
        match (cell.starts_with(Self::COLON), cell.ends_with(Self::COLON)) {
            (true, true) => Alignment::Center,
            (true, false) => Alignment::Start,
            (false, true) => Alignment::End,
            (false, false) => Alignment::Center,
        }
    }

    /// Builds a table block from a region of at least [`Self::MIN_LINES`] lines
    /// whose second line is a divider.
    pub fn build(lines: &[&str]) -> Block {
        let mut rows = Vec::with_capacity(lines.len());

        if let [header, divider, body @ ..] = lines {
            rows.push(TableRow::Header(Self::owned_cells(header)));
            rows.push(TableRow::Divider(
                Self::split_cells(divider)
                    .into_iter()
                    .map(Self::alignment_of)
                    .collect(),
            ));
            rows.extend(body.iter().map(|line| TableRow::Row(Self::owned_cells(line))));
        }

        Block::Table { rows }
    }

    fn owned_cells(line: &str) -> Vec<String> {
        Self::split_cells(line)
            .into_iter()
            .map(str::to_string)
            .collect()
    }
}
