use super::cursor::{is_basic_digit, is_basic_name, Cursor};
use super::Error;

/// One tag per recognizable statement form. Statement forms sharing a
/// spelling (`DIM`, assignments) get a tag per disambiguated form.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Keyword {
    Rem,
    DimString,
    DimArray,
    DimNumeric,
    LetString,
    LetArray,
    LetNumeric,
    Def,
    Mat,
    Print,
    Image,
    Input,
    Goto,
    Gosub,
    Return,
    If,
    For,
    Next,
    End,
}

impl std::fmt::Display for Keyword {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Keyword::*;
        match self {
            Rem => write!(f, "REM"),
            DimString => write!(f, "DIM STRING"),
            DimArray => write!(f, "DIM ARRAY"),
            DimNumeric => write!(f, "DIM NUMERIC"),
            LetString => write!(f, "LET STRING"),
            LetArray => write!(f, "LET ARRAY"),
            LetNumeric => write!(f, "LET NUMERIC"),
            Def => write!(f, "DEF"),
            Mat => write!(f, "MAT"),
            Print => write!(f, "PRINT"),
            Image => write!(f, "IMAGE"),
            Input => write!(f, "INPUT"),
            Goto => write!(f, "GOTO"),
            Gosub => write!(f, "GOSUB"),
            Return => write!(f, "RETURN"),
            If => write!(f, "IF"),
            For => write!(f, "FOR"),
            Next => write!(f, "NEXT"),
            End => write!(f, "END"),
        }
    }
}

/// A literal keyword token plus a zero-width lookahead on what follows.
/// Assignment forms have an empty token and match on lookahead alone;
/// the statement parser is left to consume the variable name itself.
pub struct Recognizer {
    keyword: Keyword,
    token: &'static str,
    lookahead: fn(&str) -> bool,
}

impl Recognizer {
    const fn new(keyword: Keyword, token: &'static str, lookahead: fn(&str) -> bool) -> Recognizer {
        Recognizer {
            keyword,
            token,
            lookahead,
        }
    }

    pub fn keyword(&self) -> Keyword {
        self.keyword
    }

    /// Length of the consumed token when `rest` matches.
    pub fn matches(&self, rest: &str) -> Option<usize> {
        if rest.starts_with(self.token) && (self.lookahead)(&rest[self.token.len()..]) {
            Some(self.token.len())
        } else {
            None
        }
    }
}

/// Priority list for dispatch. Scanned strictly in order, first match
/// wins, so a form may appear here only if everything before it that
/// could match the same text is strictly more specific. The string and
/// array forms precede their numeric siblings and the numeric lookaheads
/// reject `$` and `[`, which keeps every entry mutually exclusive with
/// the rest of the table.
pub const TABLE: [Recognizer; 19] = [
    Recognizer::new(Keyword::Rem, "REM", any),
    Recognizer::new(Keyword::DimString, "DIM", dim_string),
    Recognizer::new(Keyword::DimArray, "DIM", dim_array),
    Recognizer::new(Keyword::DimNumeric, "DIM", dim_numeric),
    Recognizer::new(Keyword::LetString, "", name_string),
    Recognizer::new(Keyword::LetArray, "", name_array),
    Recognizer::new(Keyword::LetNumeric, "", name_numeric),
    Recognizer::new(Keyword::Def, "DEF", any),
    Recognizer::new(Keyword::Mat, "MAT", any),
    Recognizer::new(Keyword::Print, "PRINT", any),
    Recognizer::new(Keyword::Image, "IMAGE", any),
    Recognizer::new(Keyword::Input, "INPUT", any),
    Recognizer::new(Keyword::Goto, "GOTO", any),
    Recognizer::new(Keyword::Gosub, "GOSUB", any),
    Recognizer::new(Keyword::Return, "RETURN", any),
    Recognizer::new(Keyword::If, "IF", any),
    Recognizer::new(Keyword::For, "FOR", any),
    Recognizer::new(Keyword::Next, "NEXT", any),
    Recognizer::new(Keyword::End, "END", any),
];

/// Skips whitespace, then tries the table in order. The cursor is left
/// just past the matched token. No match is fatal; the line number was
/// already consumed, so this is a statement position.
pub fn dispatch(cursor: &mut Cursor) -> Result<Keyword, Error> {
    cursor.skip_whitespace();
    for recognizer in TABLE.iter() {
        if let Some(len) = recognizer.matches(cursor.peek_remainder()) {
            cursor.advance_by(len);
            return Ok(recognizer.keyword());
        }
    }
    Err(cursor.error("INVALID STATEMENT"))
}

fn any(_: &str) -> bool {
    true
}

// After `DIM`: one or more spaces, a name letter, then the character
// that classifies the form.
fn dim_name(s: &str) -> Option<char> {
    let mut chars = s.chars();
    match chars.next() {
        Some(' ') => {}
        _ => return None,
    }
    let mut c = chars.next()?;
    while c == ' ' {
        c = chars.next()?;
    }
    if !is_basic_name(c) {
        return None;
    }
    chars.next()
}

fn dim_string(s: &str) -> bool {
    dim_name(s) == Some('$')
}

fn dim_array(s: &str) -> bool {
    dim_name(s) == Some('[')
}

fn dim_numeric(s: &str) -> bool {
    match dim_name(s) {
        Some(c) => c != '$' && c != '[',
        None => false,
    }
}

fn name_string(s: &str) -> bool {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), Some('$')) => is_basic_name(c),
        _ => false,
    }
}

fn name_array(s: &str) -> bool {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), Some('[')) => is_basic_name(c),
        _ => false,
    }
}

// A name, an optional single digit, then `=`.
fn name_numeric(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if is_basic_name(c) => {}
        _ => return false,
    }
    match chars.next() {
        Some('=') => true,
        Some(c) if is_basic_digit(c) => chars.next() == Some('='),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recognizer_token() {
        assert_eq!(TABLE[0].keyword(), Keyword::Rem);
        assert_eq!(TABLE[0].matches("REM HELLO"), Some(3));
        assert_eq!(TABLE[0].matches("RAMPAGE"), None);
    }

    #[test]
    fn test_assignment_is_zero_width() {
        let recognizer = TABLE
            .iter()
            .find(|r| r.keyword() == Keyword::LetNumeric)
            .unwrap();
        assert_eq!(recognizer.matches("A=1"), Some(0));
        assert_eq!(recognizer.matches("A$=1"), None);
    }
}
