/// Decides which characters count as "inside a word" for underscore markers.
///
/// An `_` or `__` marker is rejected when both of its outer neighbours are
/// word characters, so `snake_case_name` stays literal text. Swap the
/// predicate to change what a word is without touching the tokenizer.
pub trait WordChars {
    fn is_word_char(&self, c: char) -> bool;
}

/// Letters and digits in any script (`char::is_alphanumeric`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UnicodeAlphanumeric;

impl WordChars for UnicodeAlphanumeric {
    fn is_word_char(&self, c: char) -> bool {
        c.is_alphanumeric()
    }
}

/// ASCII letters and digits only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AsciiAlphanumeric;

impl WordChars for AsciiAlphanumeric {
    fn is_word_char(&self, c: char) -> bool {
        c.is_ascii_alphanumeric()
    }
}

impl<F> WordChars for F
where
    F: Fn(char) -> bool,
{
    fn is_word_char(&self, c: char) -> bool {
        self(c)
    }
}

/// Whether a marker of `len` bytes at byte `index` of `text` may open or close.
///
/// Invalid only when the character before the marker and the character after
/// it are both word characters.
pub fn is_valid_marker<W: WordChars + ?Sized>(
    text: &str,
    index: usize,
    len: usize,
    word_chars: &W,
) -> bool {
    let before = text.get(..index).and_then(|head| head.chars().next_back());
    let after = text.get(index + len..).and_then(|rest| rest.chars().next());

    let inside_word = matches!(
        (before, after),
        (Some(b), Some(a)) if word_chars.is_word_char(b) && word_chars.is_word_char(a)
    );
    !inside_word
}
