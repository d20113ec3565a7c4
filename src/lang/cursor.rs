use super::{Column, Error};

pub fn is_basic_whitespace(c: char) -> bool {
    c == ' ' || c == '\t'
}

pub fn is_basic_digit(c: char) -> bool {
    c.is_ascii_digit()
}

pub fn is_basic_name(c: char) -> bool {
    c.is_ascii_uppercase()
}

/// Scan position over one program text. The driver owns a fresh `Cursor`
/// per parse; nothing is retained between parses.
pub struct Cursor<'a> {
    text: &'a str,
    pos: usize,
    line: usize,
    line_start: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(text: &'a str) -> Cursor<'a> {
        Cursor {
            text,
            pos: 0,
            line: 0,
            line_start: 0,
        }
    }

    pub fn is_at_end(&self) -> bool {
        self.pos >= self.text.len()
    }

    /// Physical lines consumed so far, counting skipped lines.
    pub fn line(&self) -> usize {
        self.line
    }

    pub fn column(&self) -> Column {
        debug_assert!(self.line_start <= self.pos);
        self.pos - self.line_start
    }

    /// Called by the driver exactly once per physical line.
    pub fn begin_line(&mut self) {
        self.line += 1;
    }

    pub fn peek_remainder(&self) -> &'a str {
        &self.text[self.pos..]
    }

    pub fn advance_by(&mut self, len: usize) {
        debug_assert!(self.pos + len <= self.text.len());
        self.pos += len;
    }

    /// Anchored literal match. Advances past the token or fails with the
    /// current column.
    pub fn consume_match(&mut self, token: &str) -> Result<&'a str, Error> {
        let rest = self.peek_remainder();
        if rest.starts_with(token) {
            self.pos += token.len();
            Ok(&rest[..token.len()])
        } else {
            Err(self.error(format!("EXPECTED {}", token)))
        }
    }

    /// A run of decimal digits, or `None` without moving. Absence of a
    /// line number is tolerated, so this is the non-fatal counterpart
    /// of `consume_match`.
    pub fn consume_digits(&mut self) -> Option<&'a str> {
        let rest = self.peek_remainder();
        let len = rest
            .find(|c: char| !is_basic_digit(c))
            .unwrap_or_else(|| rest.len());
        if len == 0 {
            return None;
        }
        self.pos += len;
        Some(&rest[..len])
    }

    /// Spaces and tabs only. Never crosses a newline; statements are
    /// one per physical line.
    pub fn skip_whitespace(&mut self) {
        let rest = self.peek_remainder();
        let len = rest
            .find(|c: char| !is_basic_whitespace(c))
            .unwrap_or_else(|| rest.len());
        self.pos += len;
    }

    pub fn skip_to_next_line(&mut self) {
        match self.peek_remainder().find('\n') {
            Some(i) => self.pos += i + 1,
            None => self.pos = self.text.len(),
        }
        self.line_start = self.pos;
    }

    /// Everything up to the next newline, exclusive and untrimmed, then
    /// the same advance as `skip_to_next_line`.
    pub fn consume_rest_of_line(&mut self) -> &'a str {
        let rest = self.peek_remainder();
        let end = rest.find('\n').unwrap_or_else(|| rest.len());
        self.skip_to_next_line();
        &rest[..end]
    }

    /// An error at the current column. The driver attaches the line number.
    pub fn error<S: Into<String>>(&self, message: S) -> Error {
        Error::new(message).in_column(self.column())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_resets_per_line() {
        let mut cursor = Cursor::new("10 REM\n20 END\n");
        cursor.advance_by(4);
        assert_eq!(cursor.column(), 4);
        cursor.skip_to_next_line();
        assert_eq!(cursor.column(), 0);
        cursor.advance_by(2);
        assert_eq!(cursor.column(), 2);
    }
}
