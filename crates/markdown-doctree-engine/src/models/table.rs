use serde::Serialize;

/// Column alignment taken from a table's divider row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    Start,
    Center,
    End,
}

/// One row of a table block.
///
/// A table always holds a `Header`, then a `Divider`, then one or more `Row`s,
/// all with the same number of columns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum TableRow {
    Header(Vec<String>),
    Divider(Vec<Alignment>),
    Row(Vec<String>),
}

impl TableRow {
    /// Cell strings of a header or data row; `None` for the divider.
    pub fn cells(&self) -> Option<&[String]> {
        match self {
            TableRow::Header(cells) | TableRow::Row(cells) => Some(cells),
            TableRow::Divider(_) => None,
        }
    }

    /// Number of columns in this row.
    #[must_use]
    pub fn column_count(&self) -> usize {
        match self {
            TableRow::Header(cells) | TableRow::Row(cells) => cells.len(),
            TableRow::Divider(alignments) => alignments.len(),
        }
    }
}
