use crate::models::Block;
use crate::parsing::inline::kinds::ImageMarker;

/// A line whose only content is one image marker.
pub struct StandaloneImage;

impl StandaloneImage {
    pub fn opens(line: &str) -> bool {
        line.starts_with(ImageMarker::OPEN)
    }

    /// Returns `(alt, url)` if the trimmed line is exactly one `![alt](url)`.
    pub fn match_line(line: &str) -> Option<(&str, &str)> {
        ImageMarker::match_whole(line.trim()).map(|m| (m.alt_text, m.url))
    }

    /// Builds the image block for a line, or `None` so the caller can fall
    /// back to inline tokenization.
    pub fn parse_line(line: &str) -> Option<Block> {
        let (alt, url) = Self::match_line(line)?;
        Some(Block::Image {
            alt_text: alt.to_string(),
            url: url.to_string(),
            pixels: None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standalone_image_line() {
        assert_eq!(
            StandaloneImage::match_line("![alt text](https://example.com/image.png)"),
            Some(("alt text", "https://example.com/image.png"))
        );
    }

    #[test]
    fn surrounding_whitespace_is_ignored() {
        assert_eq!(StandaloneImage::match_line("![d](u)   "), Some(("d", "u")));
    }

    #[test]
    fn image_inside_text_is_not_standalone() {
        assert_eq!(
            StandaloneImage::match_line(
                "это встроенная в текст картинка ![alt text](https://example.com/image.png)"
            ),
            None
        );
        assert_eq!(StandaloneImage::match_line("![d](u) trailing"), None);
    }

    #[test]
    fn two_images_are_not_standalone() {
        assert_eq!(StandaloneImage::parse_line("![a](b)![c](d)"), None);
    }
}
