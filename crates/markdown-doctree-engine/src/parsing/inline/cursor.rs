/// A cursor over a line of inline content.
///
/// Positions are byte offsets. Every marker the tokenizer looks for is ASCII,
/// so any offset the cursor stops at is a char boundary.
#[derive(Clone)]
pub struct Cursor<'a> {
    /// The string being tokenized.
    pub s: &'a str,
    /// Current byte index into `s`.
    pub i: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(s: &'a str) -> Self {
        Self { s, i: 0 }
    }

    /// Returns true if at end of string.
    pub fn eof(&self) -> bool {
        self.i >= self.s.len()
    }

    /// Remaining input from the cursor on.
    pub fn rest(&self) -> &'a str {
        self.s.get(self.i..).unwrap_or("")
    }

    /// Checks if the remaining input starts with `pat`.
    pub fn starts_with(&self, pat: &str) -> bool {
        self.rest().starts_with(pat)
    }

    /// Byte index of the first `pat` at or after `from`.
    pub fn find_from(&self, pat: &str, from: usize) -> Option<usize> {
        self.s.get(from..)?.find(pat).map(|at| from + at)
    }

    /// Advances by `n` bytes.
    pub fn bump_n(&mut self, n: usize) {
        self.i += n;
    }

    /// Moves to an absolute byte index.
    pub fn jump_to(&mut self, i: usize) {
        self.i = i;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cursor_basics() {
        let mut cur = Cursor::new("hello");
        assert!(!cur.eof());
        assert_eq!(cur.rest(), "hello");
        cur.bump_n(2);
        assert_eq!(cur.rest(), "llo");
    }

    #[test]
    fn cursor_starts_with() {
        let cur = Cursor::new("**bold**");
        assert!(cur.starts_with("**"));
        assert!(!cur.starts_with("__"));
    }

    #[test]
    fn empty_string_input() {
        let cur = Cursor::new("");
        assert!(cur.eof());
        assert_eq!(cur.rest(), "");
        assert!(cur.starts_with(""));
    }

    #[test]
    fn find_from_returns_absolute_index() {
        let cur = Cursor::new("**a** **b**");
        assert_eq!(cur.find_from("**", 2), Some(3));
        assert_eq!(cur.find_from("**", 5), Some(6));
        assert_eq!(cur.find_from("~~", 0), None);
    }

    #[test]
    fn find_from_past_end() {
        let cur = Cursor::new("ab");
        assert_eq!(cur.find_from("a", 10), None);
    }

    #[test]
    fn bump_n_to_exact_end() {
        let mut cur = Cursor::new("hello");
        cur.bump_n(5);
        assert!(cur.eof());
        assert_eq!(cur.rest(), "");
    }

    #[test]
    fn jump_to_moves_absolutely() {
        let mut cur = Cursor::new("hello");
        cur.bump_n(1);
        cur.jump_to(4);
        assert_eq!(cur.rest(), "o");
    }
}
