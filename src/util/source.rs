use std::fmt;
use std::iter::Peekable;
use std::str::Chars;

/// Create source from the specified text.
pub fn source_from_text(text: &str) -> Source<'_> {
    Source::new(text)
}

/// A cursor over some expression text. Characters are yielded one at a
/// time with a single character of lookahead. Other features:
///
/// - Treats an embedded NUL as the end of the text, so a C-style
///   terminated buffer can be passed in as-is.
/// - Tracks current line and column.
/// - Never moves backward.
pub struct Source<'a> {
    chars: Peekable<Chars<'a>>,
    pub line_no: usize,
    pub col: usize,
    pub current_char: Option<char>,
}

impl<'a> Source<'a> {
    pub fn new(text: &'a str) -> Self {
        Source { chars: text.chars().peekable(), line_no: 1, col: 0, current_char: None }
    }

    /// Peek at the next char. The end of the text and the NUL
    /// terminator both show up as `None`.
    pub fn peek(&mut self) -> Option<&char> {
        match self.chars.peek() {
            Some(&'\0') => None,
            other => other,
        }
    }

    /// Get the next char if it matches the specified condition.
    pub fn next_if(&mut self, func: impl FnOnce(&char) -> bool) -> Option<char> {
        if let Some(c) = self.peek() {
            if func(c) {
                return self.next();
            }
        }
        None
    }

    /// Location of the most recently consumed char.
    pub fn loc(&self) -> Location {
        Location::new(self.line_no, self.col)
    }

    /// Location the next char will have once it's consumed.
    pub fn next_loc(&self) -> Location {
        match self.current_char {
            Some('\n') => Location::new(self.line_no + 1, 1),
            _ => Location::new(self.line_no, self.col + 1),
        }
    }
}

impl<'a> Iterator for Source<'a> {
    type Item = char;

    fn next(&mut self) -> Option<Self::Item> {
        self.peek()?;
        let c = self.chars.next()?;
        let loc = self.next_loc();
        self.line_no = loc.line;
        self.col = loc.col;
        self.current_char = Some(c);
        Some(c)
    }
}

/// Represents a line and column in the source.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Location {
    pub line: usize,
    pub col: usize,
}

impl Location {
    pub fn new(line: usize, col: usize) -> Self {
        Self { line, col }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn track_columns() {
        let mut source = source_from_text("ab");
        assert_eq!(source.next_loc(), Location::new(1, 1));
        assert_eq!(source.next(), Some('a'));
        assert_eq!(source.loc(), Location::new(1, 1));
        assert_eq!(source.next(), Some('b'));
        assert_eq!(source.loc(), Location::new(1, 2));
        assert_eq!(source.next(), None);
        assert_eq!(source.next_loc(), Location::new(1, 3));
    }

    #[test]
    fn track_lines() {
        let mut source = source_from_text("a\nb");
        source.next();
        source.next();
        assert_eq!(source.loc(), Location::new(1, 2));
        assert_eq!(source.next(), Some('b'));
        assert_eq!(source.loc(), Location::new(2, 1));
    }

    #[test]
    fn stop_at_nul() {
        let mut source = source_from_text("1\02");
        assert_eq!(source.next(), Some('1'));
        assert_eq!(source.peek(), None);
        assert_eq!(source.next(), None);
        assert_eq!(source.next(), None);
        assert_eq!(source.loc(), Location::new(1, 1));
    }
}
