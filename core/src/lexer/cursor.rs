/// A point in the source: byte offset plus 1-based line and column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub offset: usize,
    pub line: usize,
    pub column: usize,
}

/// Character-level reader over the source string.
///
/// Line and column only move forward. `advance` bumps the column (by the
/// tab width for tabs); the owner calls `newline` after consuming a line break.
pub struct Cursor<'src> {
    source: &'src str,
    pos: usize,
    line: usize,
    column: usize,
    tab_width: usize,
}

impl<'src> Cursor<'src> {
    pub fn new(source: &'src str, tab_width: usize) -> Self {
        Self {
            source,
            pos: 0,
            line: 1,
            column: 1,
            tab_width: tab_width.max(1),
        }
    }

    /// Current byte position in the source.
    pub fn pos(&self) -> usize {
        self.pos
    }

    pub fn position(&self) -> Position {
        Position {
            offset: self.pos,
            line: self.line,
            column: self.column,
        }
    }

    fn rest(&self) -> &'src str {
        &self.source[self.pos..]
    }

    /// Peek at the current character without advancing.
    pub fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    /// Peek at the next character (one ahead of current).
    pub fn peek_next(&self) -> Option<char> {
        self.peek_nth(1)
    }

    /// Peek `n` characters ahead; `None` past the end of input.
    pub fn peek_nth(&self, n: usize) -> Option<char> {
        self.rest().chars().nth(n)
    }

    /// Advance one character and return it.
    pub fn advance(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.pos += ch.len_utf8();
        self.column += if ch == '\t' { self.tab_width } else { 1 };
        Some(ch)
    }

    /// Advance if the current character matches `expected`.
    pub fn match_char(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.advance();
            true
        } else {
            false
        }
    }

    pub fn eat_while(&mut self, mut pred: impl FnMut(char) -> bool) {
        while self.peek().is_some_and(&mut pred) {
            self.advance();
        }
    }

    /// Number of consecutive `ch` starting at the current position.
    pub fn run_length(&self, ch: char) -> usize {
        self.rest().chars().take_while(|&c| c == ch).count()
    }

    /// Record that a line break was just consumed.
    pub fn newline(&mut self) {
        self.line += 1;
        self.column = 1;
    }

    /// Return a slice of the source from `start` to the current position.
    pub fn slice_from(&self, start: usize) -> &'src str {
        &self.source[start..self.pos]
    }

    /// Whether the cursor has reached the end.
    pub fn is_at_end(&self) -> bool {
        self.pos >= self.source.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn peek_past_end_is_none() {
        let cursor = Cursor::new("ab", 4);
        assert_eq!(cursor.peek(), Some('a'));
        assert_eq!(cursor.peek_next(), Some('b'));
        assert_eq!(cursor.peek_nth(2), None);
    }

    #[test]
    fn tabs_advance_by_tab_width() {
        let mut cursor = Cursor::new("\tx", 8);
        cursor.advance();
        assert_eq!(cursor.position().column, 9);
        cursor.advance();
        assert_eq!(cursor.position().column, 10);
        assert!(cursor.is_at_end());
        assert_eq!(cursor.advance(), None);
    }

    #[test]
    fn multibyte_characters_count_one_column() {
        let mut cursor = Cursor::new("éa", 4);
        cursor.advance();
        let pos = cursor.position();
        assert_eq!(pos.offset, 2);
        assert_eq!(pos.column, 2);
        assert_eq!(cursor.slice_from(0), "é");
    }

    #[test]
    fn newline_resets_column() {
        let mut cursor = Cursor::new("a\nb", 4);
        cursor.advance();
        cursor.advance();
        cursor.newline();
        let pos = cursor.position();
        assert_eq!((pos.line, pos.column), (2, 1));
    }

    #[test]
    fn run_length_counts_without_consuming() {
        let cursor = Cursor::new("<<<<x", 4);
        assert_eq!(cursor.run_length('<'), 4);
        assert_eq!(cursor.pos(), 0);
    }
}
