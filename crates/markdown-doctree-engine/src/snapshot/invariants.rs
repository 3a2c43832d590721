use crate::models::{Block, Document, Span, TableRow};
use crate::parsing::blocks::kinds::Table;

/// Panics if `doc` breaks a structural guarantee of freshly parsed output.
pub fn check(doc: &Document) {
    for (index, block) in doc.iter().enumerate() {
        match block {
            Block::Header { level, .. } => {
                assert!(*level >= 1, "block {index}: header level is zero");
            }
            Block::Paragraph { spans } => {
                for span in spans {
                    check_span(index, span);
                }
            }
            Block::Table { rows } => check_table(index, rows),
            Block::Image { pixels, .. } => {
                assert!(pixels.is_none(), "block {index}: parser attached pixels");
            }
        }
    }
}

fn check_span(index: usize, span: &Span) {
    match span {
        Span::Text(value) => {
            assert!(!value.is_empty(), "block {index}: empty text span");
        }
        Span::InlineImage { pixels, .. } => {
            assert!(pixels.is_none(), "block {index}: parser attached pixels");
        }
        Span::Bold(_) | Span::Italic(_) | Span::Strikethrough(_) => {}
    }
}

fn check_table(index: usize, rows: &[TableRow]) {
    assert!(
        rows.len() >= Table::MIN_LINES,
        "block {index}: table has {} row(s)",
        rows.len()
    );
    assert!(
        matches!(rows[0], TableRow::Header(_)),
        "block {index}: first table row is not a header"
    );
    assert!(
        matches!(rows[1], TableRow::Divider(_)),
        "block {index}: second table row is not a divider"
    );

    let columns = rows[0].column_count();
    for (row_index, row) in rows.iter().enumerate().skip(2) {
        assert!(
            matches!(row, TableRow::Row(_)),
            "block {index}: table row {row_index} is not a data row"
        );
    }
    for row in rows {
        assert_eq!(
            row.column_count(),
            columns,
            "block {index}: ragged table row {row:?}"
        );
    }
}
