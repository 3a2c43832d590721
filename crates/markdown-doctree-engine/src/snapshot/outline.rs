use std::fmt::Write;

use crate::models::{Block, Document, Span, TableRow};

/// Renders a document as one line per block, with spans and table rows
/// indented below their block.
pub fn outline(doc: &Document) -> String {
    let mut out = String::new();
    for block in doc {
        write_block(&mut out, block);
    }
    out
}

fn write_block(out: &mut String, block: &Block) {
    match block {
        Block::Header { level, text } => {
            let _ = writeln!(out, "Header({level}) {text:?}");
        }
        Block::Paragraph { spans } => {
            out.push_str("Paragraph\n");
            for span in spans {
                write_span(out, span);
            }
        }
        Block::Table { rows } => {
            out.push_str("Table\n");
            for row in rows {
                let _ = match row {
                    TableRow::Header(cells) => writeln!(out, "  Header {cells:?}"),
                    TableRow::Divider(alignments) => writeln!(out, "  Divider {alignments:?}"),
                    TableRow::Row(cells) => writeln!(out, "  Row {cells:?}"),
                };
            }
        }
        Block::Image {
            alt_text,
            url,
            pixels,
        } => {
            let _ = writeln!(
                out,
                "Image {alt_text:?} -> {url:?}{}",
                if pixels.is_some() { " [pixels]" } else { "" }
            );
        }
    }
}

fn write_span(out: &mut String, span: &Span) {
    let _ = match span {
        Span::InlineImage {
            alt_text,
            url,
            pixels,
        } => writeln!(
            out,
            "  InlineImage {alt_text:?} -> {url:?}{}",
            if pixels.is_some() { " [pixels]" } else { "" }
        ),
        other => writeln!(out, "  {} {:?}", other.kind_name(), other.value()),
    };
}
