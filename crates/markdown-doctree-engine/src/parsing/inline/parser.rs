use crate::models::Span;

use super::{
    boundary::{WordChars, is_valid_marker},
    cursor::Cursor,
    kinds::{Delimiter, ImageMarker},
};

/// Tokenizes one line of inline content into [`Span`]s.
///
/// At each position the delimiters are tried in [`Delimiter::ALL`] order,
/// then the image marker; the first one that applies wins. Anything else is
/// collected into a `Text` run up to the next position where a marker could
/// start.
///
/// Never fails: an opener without a closer is emitted as literal `Text`
/// holding just the marker, and scanning continues after it.
pub fn tokenize<W: WordChars + ?Sized>(text: &str, word_chars: &W) -> Vec<Span> {
    let mut cur = Cursor::new(text);
    let mut out = vec![];

    while !cur.eof() {
        if let Some(span) = try_parse_delimited(&mut cur, word_chars) {
            out.push(span);
            continue;
        }
        if let Some(span) = try_parse_image(&mut cur) {
            out.push(span);
            continue;
        }

        let start = cur.i;
        let mut next = next_marker_position(text, start, word_chars);
        if next == start {
            next = start + cur.rest().chars().next().map_or(1, char::len_utf8);
        }
        out.push(Span::Text(text[start..next].to_string()));
        cur.jump_to(next);
    }

    out
}

/// Tries each delimiter at the cursor.
///
/// Returns `None` when no delimiter opens here. When one opens but has no
/// valid closer, the marker itself comes back as `Text` and the cursor moves
/// past it.
fn try_parse_delimited<W: WordChars + ?Sized>(
    cur: &mut Cursor<'_>,
    word_chars: &W,
) -> Option<Span> {
    let delim = Delimiter::ALL.into_iter().find(|d| {
        cur.starts_with(d.marker)
            && (!d.word_bounded || is_valid_marker(cur.s, cur.i, d.marker_len(), word_chars))
    })?;

    let len = delim.marker_len();
    let content_start = cur.i + len;
    let mut close = cur.find_from(delim.marker, content_start);
    if delim.word_bounded {
        while let Some(at) = close {
            if is_valid_marker(cur.s, at, len, word_chars) {
                break;
            }
            close = cur.find_from(delim.marker, at + len);
        }
    }

    match close {
        Some(at) => {
            let span = delim.span(&cur.s[content_start..at]);
            cur.jump_to(at + len);
            Some(span)
        }
        None => {
            log::trace!("unclosed {:?} at byte {}", delim.marker, cur.i);
            cur.bump_n(len);
            Some(Span::Text(delim.marker.to_string()))
        }
    }
}

/// Tries an inline `![alt](url)` anchored at the cursor.
fn try_parse_image(cur: &mut Cursor<'_>) -> Option<Span> {
    if !cur.starts_with(ImageMarker::OPEN) {
        return None;
    }

    match ImageMarker::match_prefix(cur.rest()) {
        Some(m) => {
            let span = Span::InlineImage {
                alt_text: m.alt_text.to_string(),
                url: m.url.to_string(),
                pixels: None,
            };
            cur.bump_n(m.len);
            Some(span)
        }
        None => {
            cur.bump_n(ImageMarker::OPEN.len());
            Some(Span::Text(ImageMarker::OPEN.to_string()))
        }
    }
}

/// Byte index of the first position at or after `from` where a marker could
/// start, or `text.len()` if there is none.
///
/// Underscore markers only count where the word-boundary rule accepts them.
pub fn next_marker_position<W: WordChars + ?Sized>(
    text: &str,
    from: usize,
    word_chars: &W,
) -> usize {
    let Some(tail) = text.get(from..) else {
        return text.len();
    };

    for (offset, _) in tail.char_indices() {
        let at = from + offset;
        let rest = &text[at..];
        let delimiter_here = Delimiter::ALL.iter().any(|d| {
            rest.starts_with(d.marker)
                && (!d.word_bounded || is_valid_marker(text, at, d.marker_len(), word_chars))
        });
        if delimiter_here || rest.starts_with(ImageMarker::OPEN) {
            return at;
        }
    }
    text.len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::inline::boundary::{AsciiAlphanumeric, UnicodeAlphanumeric};
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn spans(text: &str) -> Vec<Span> {
        tokenize(text, &UnicodeAlphanumeric)
    }

    fn t(s: &str) -> Span {
        Span::Text(s.into())
    }

    fn img(alt: &str, url: &str) -> Span {
        Span::InlineImage {
            alt_text: alt.into(),
            url: url.into(),
            pixels: None,
        }
    }

    #[test]
    fn parse_simple_text() {
        assert_eq!(spans("hello world"), vec![t("hello world")]);
    }

    #[test]
    fn empty_input_has_no_spans() {
        assert_eq!(spans(""), vec![]);
    }

    #[rstest]
    #[case("**bold**", Span::Bold("bold".into()))]
    #[case("__bold__", Span::Bold("bold".into()))]
    #[case("*italic*", Span::Italic("italic".into()))]
    #[case("_italic_", Span::Italic("italic".into()))]
    #[case("~~gone~~", Span::Strikethrough("gone".into()))]
    fn single_styled_run(#[case] input: &str, #[case] expected: Span) {
        assert_eq!(spans(input), vec![expected]);
    }

    #[test]
    fn underscore_inside_word_stays_literal() {
        assert_eq!(spans("it_alic"), vec![t("it_alic")]);
        assert_eq!(spans("snake_case_name"), vec![t("snake_case_name")]);
    }

    #[test]
    fn styled_runs_between_text() {
        assert_eq!(
            spans("a **b** c *d* e"),
            vec![
                t("a "),
                Span::Bold("b".into()),
                t(" c "),
                Span::Italic("d".into()),
                t(" e"),
            ]
        );
    }

    #[rstest]
    #[case("**open", vec![t("**"), t("open")])]
    #[case("*open", vec![t("*"), t("open")])]
    #[case("~~open", vec![t("~~"), t("open")])]
    #[case("__open", vec![t("__"), t("open")])]
    #[case("_open", vec![t("_"), t("open")])]
    fn unclosed_marker_is_literal(#[case] input: &str, #[case] expected: Vec<Span>) {
        assert_eq!(spans(input), expected);
    }

    #[test]
    fn nested_markers_are_not_reparsed() {
        assert_eq!(
            spans("**a *b* c**"),
            vec![Span::Bold("a *b* c".into())]
        );
    }

    #[test]
    fn underscore_closer_skips_inner_word_underscores() {
        assert_eq!(
            spans("_snake_case_"),
            vec![Span::Italic("snake_case".into())]
        );
        assert_eq!(
            spans("__a__b__ "),
            vec![Span::Bold("a__b".into()), t(" ")]
        );
    }

    #[test]
    fn asterisks_ignore_word_boundaries() {
        assert_eq!(
            spans("in*sid*e"),
            vec![t("in"), Span::Italic("sid".into()), t("e")]
        );
    }

    #[test]
    fn empty_styled_run() {
        assert_eq!(spans("****"), vec![Span::Bold(String::new())]);
    }

    #[test]
    fn inline_image_between_text() {
        assert_eq!(
            spans("x ![d](u) y"),
            vec![t("x "), img("d", "u"), t(" y")]
        );
    }

    #[test]
    fn malformed_image_leaves_bang_bracket() {
        assert_eq!(spans("![no close"), vec![t("!["), t("no close")]);
    }

    #[test]
    fn image_after_malformed_image() {
        assert_eq!(
            spans("![a] ![b](c)"),
            vec![t("!["), t("a] "), img("b", "c")]
        );
    }

    #[test]
    fn alt_text_runs_to_first_closing_bracket() {
        assert_eq!(spans("![a ![b](c)"), vec![img("a ![b", "c")]);
    }

    #[test]
    fn lone_bang_is_text() {
        assert_eq!(spans("wow! [x]"), vec![t("wow! [x]")]);
    }

    #[test]
    fn multibyte_text_around_markers() {
        assert_eq!(
            spans("é **ü** ñ"),
            vec![t("é "), Span::Bold("ü".into()), t(" ñ")]
        );
    }

    #[test]
    fn word_chars_predicate_is_pluggable() {
        let text = "при_вет_мир";
        assert_eq!(spans(text), vec![t(text)]);
        assert_eq!(
            tokenize(text, &AsciiAlphanumeric),
            vec![t("при"), Span::Italic("вет".into()), t("мир")]
        );
    }

    #[test]
    fn next_marker_skips_word_underscores() {
        assert_eq!(next_marker_position("it_alic", 0, &UnicodeAlphanumeric), 7);
        assert_eq!(next_marker_position("ab *c", 0, &UnicodeAlphanumeric), 3);
        assert_eq!(next_marker_position("ab ![", 0, &UnicodeAlphanumeric), 3);
        assert_eq!(next_marker_position("ab", 5, &UnicodeAlphanumeric), 2);
    }
}
