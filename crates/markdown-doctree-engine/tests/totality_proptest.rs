//! Property tests: parsing is total and its output keeps its structural
//! guarantees for any input.

use markdown_doctree_engine::{Block, Span, parse, snapshot, tokenize_spans};
use proptest::prelude::*;

/// Strings built mostly from marker characters, so the interesting paths
/// get exercised far more often than with uniform text.
fn markdownish() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            Just("#".to_string()),
            Just("*".to_string()),
            Just("_".to_string()),
            Just("~".to_string()),
            Just("!".to_string()),
            Just("[".to_string()),
            Just("]".to_string()),
            Just("(".to_string()),
            Just(")".to_string()),
            Just("|".to_string()),
            Just(":".to_string()),
            Just("-".to_string()),
            Just(" ".to_string()),
            Just("\n".to_string()),
            "[a-zé0-9]{1,3}",
        ],
        0..64,
    )
    .prop_map(|parts| parts.concat())
}

/// Concatenating the literal pieces of a paragraph never produces more
/// text than the line it came from.
fn span_text_len(spans: &[Span]) -> usize {
    spans.iter().map(|s| s.value().len()).sum()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(512))]

    #[test]
    fn parse_never_panics(input in any::<String>()) {
        let doc = parse(&input);
        snapshot::invariants(&doc);
    }

    #[test]
    fn parse_markdownish_keeps_invariants(input in markdownish()) {
        let doc = parse(&input);
        snapshot::invariants(&doc);
    }

    #[test]
    fn no_more_blocks_than_non_empty_lines(input in markdownish()) {
        let doc = parse(&input);
        let lines = input.split('\n').filter(|l| !l.is_empty()).count();
        prop_assert!(doc.len() <= lines);
    }

    #[test]
    fn plain_lines_are_single_text_paragraphs(line in "[a-z ]{1,40}") {
        let doc = parse(&line);
        prop_assert_eq!(
            doc.into_blocks(),
            vec![Block::Paragraph { spans: vec![Span::Text(line.clone())] }]
        );
    }

    #[test]
    fn spans_never_exceed_source(line in markdownish()) {
        let line = line.replace('\n', " ");
        let spans = tokenize_spans(&line);
        prop_assert!(span_text_len(&spans) <= line.len());
    }

    #[test]
    fn parsing_is_deterministic(input in markdownish()) {
        prop_assert_eq!(parse(&input), parse(&input));
    }
}
