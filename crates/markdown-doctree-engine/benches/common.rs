// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
#[allow(dead_code)]
pub fn generate_markdown_content(size: usize) -> String {
    let base = "# Title\n\n## Section ##\n\nParagraph with **bold**, *italic*, __strong__ and ~~old~~ text.\n\n![diagram](https://example.com/d.png)\n\n| Name | Qty | Price |\n|:-----|:---:|------:|\n| tea  | 2   | 3.50  |\n| milk | 1   | 0.99  |\n\nInline ![icon](i.png) next to snake_case_words and it_alic.\n\n";
    base.repeat(size)
}

#[allow(dead_code)]
pub fn generate_emphasis_heavy_line(repeats: usize) -> String {
    "plain *a* _b_ **c** __d__ ~~e~~ word_with_underscores ".repeat(repeats)
}

#[allow(dead_code)]
pub fn generate_unclosed_markers(repeats: usize) -> String {
    "**open *half _dangling ~~strike ![broken ".repeat(repeats)
}
