use std::sync::OnceLock;

use regex::Regex;

/// A matched `![alt](url)` marker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageMatch<'a> {
    pub alt_text: &'a str,
    pub url: &'a str,
    /// Byte length of the whole marker.
    pub len: usize,
}

/// Image marker grammar: `![` alt `](` url `)`.
///
/// Alt text is a non-empty run without `]`; the URL is a non-empty run
/// without `)`.
pub struct ImageMarker;

impl ImageMarker {
    pub const OPEN: &'static str = "![";

    fn prefix_regex() -> &'static Regex {
        static PREFIX: OnceLock<Regex> = OnceLock::new();
        PREFIX.get_or_init(|| {
            Regex::new(r"^!\[([^\]]+)\]\(([^)]+)\)").expect("Invalid image marker regex")
        })
    }

    fn whole_regex() -> &'static Regex {
        static WHOLE: OnceLock<Regex> = OnceLock::new();
        WHOLE.get_or_init(|| {
            Regex::new(r"^!\[([^\]]+)\]\(([^)]+)\)$").expect("Invalid image marker regex")
        })
    }

    /// Matches a marker starting exactly at the beginning of `s`.
    pub fn match_prefix(s: &str) -> Option<ImageMatch<'_>> {
        Self::captures(Self::prefix_regex(), s)
    }

    /// Matches only when `s` is one marker and nothing else.
    pub fn match_whole(s: &str) -> Option<ImageMatch<'_>> {
        Self::captures(Self::whole_regex(), s)
    }

    fn captures<'a>(re: &Regex, s: &'a str) -> Option<ImageMatch<'a>> {
        let caps = re.captures(s)?;
        Some(ImageMatch {
            alt_text: caps.get(1)?.as_str(),
            url: caps.get(2)?.as_str(),
            len: caps.get(0)?.end(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefix_match_stops_at_marker_end() {
        let m = ImageMarker::match_prefix("![d](u) tail").unwrap();
        assert_eq!(m.alt_text, "d");
        assert_eq!(m.url, "u");
        assert_eq!(m.len, 7);
    }

    #[test]
    fn prefix_match_is_anchored() {
        assert_eq!(ImageMarker::match_prefix("x ![d](u)"), None);
        assert_eq!(ImageMarker::match_prefix("![broken] ![d](u)"), None);
    }

    #[test]
    fn whole_match_rejects_trailing_text() {
        assert!(ImageMarker::match_whole("![d](u)").is_some());
        assert_eq!(ImageMarker::match_whole("![d](u) and more"), None);
    }

    #[test]
    fn empty_parts_do_not_match() {
        assert_eq!(ImageMarker::match_prefix("![](u)"), None);
        assert_eq!(ImageMarker::match_prefix("![d]()"), None);
    }

    #[test]
    fn url_stops_at_first_paren() {
        let m = ImageMarker::match_prefix("![d](a(b)c)").unwrap();
        assert_eq!(m.url, "a(b");
        assert_eq!(m.len, "![d](a(b)".len());
    }
}
