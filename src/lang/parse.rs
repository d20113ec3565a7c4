use super::ast::Statement;
use super::cursor::Cursor;
use super::keyword::{dispatch, Keyword};
use super::{Error, LineNumber};

type Result<T> = std::result::Result<T, Error>;

/// Begin a parse of `text`. The returned [`Parser`] yields one record per
/// numbered, implemented statement line; pull from it like any iterator.
pub fn parse(text: &str) -> Parser {
    Parser::new(text)
}

/// A recognized keyword whose statement parser is not written yet.
/// Reported beside the statement stream, never inside it.
#[derive(Debug, PartialEq, Clone)]
pub struct Diagnostic {
    pub line_nr: LineNumber,
    pub keyword: Keyword,
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{} {} NOT YET IMPLEMENTED", self.line_nr, self.keyword)
    }
}

/// Lazy, forward-only pass over one program text. Not restartable; call
/// [`parse`] again for a second pass. After yielding an `Err` the parser
/// is spent and yields `None`.
pub struct Parser<'a> {
    cursor: Cursor<'a>,
    diagnostics: Vec<Diagnostic>,
    failed: bool,
}

impl<'a> Parser<'a> {
    pub fn new(text: &'a str) -> Parser<'a> {
        Parser {
            cursor: Cursor::new(text),
            diagnostics: Vec::new(),
            failed: false,
        }
    }

    /// Physical lines consumed so far, whether skipped, errored, or parsed.
    pub fn line(&self) -> usize {
        self.cursor.line()
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn take_diagnostics(&mut self) -> Vec<Diagnostic> {
        std::mem::replace(&mut self.diagnostics, Vec::new())
    }

    /// `Ok(None)` is the tolerated no-line-number outcome; the whole
    /// physical line will be discarded without error.
    fn line_number(&mut self) -> Result<Option<LineNumber>> {
        self.cursor.skip_whitespace();
        let column = self.cursor.column();
        let digits = match self.cursor.consume_digits() {
            Some(digits) => digits,
            None => return Ok(None),
        };
        match digits.parse::<LineNumber>() {
            Ok(line_nr) => Ok(Some(line_nr)),
            Err(_) => Err(Error::new("INVALID LINE NUMBER").in_column(column)),
        }
    }
}

impl<'a> Iterator for Parser<'a> {
    type Item = Result<Statement>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        while !self.cursor.is_at_end() {
            self.cursor.begin_line();
            let line_nr = match self.line_number() {
                Ok(Some(line_nr)) => line_nr,
                Ok(None) => {
                    self.cursor.skip_to_next_line();
                    continue;
                }
                Err(error) => {
                    self.failed = true;
                    return Some(Err(error));
                }
            };
            let keyword = match dispatch(&mut self.cursor) {
                Ok(keyword) => keyword,
                Err(error) => {
                    self.failed = true;
                    return Some(Err(error.in_line_number(line_nr)));
                }
            };
            match Statement::for_keyword(&mut self.cursor, line_nr, keyword) {
                Some(Ok(statement)) => return Some(Ok(statement)),
                Some(Err(error)) => {
                    self.failed = true;
                    return Some(Err(error.in_line_number(line_nr)));
                }
                None => {
                    self.diagnostics.push(Diagnostic { line_nr, keyword });
                    self.cursor.skip_to_next_line();
                }
            }
        }
        None
    }
}

impl Statement {
    /// Routes a dispatched keyword to its statement parser. `None` marks
    /// the keywords still waiting on a parser; those lines are skipped
    /// behind a diagnostic. Each parser gets the cursor just past the
    /// keyword token and must leave it at the start of the next line.
    fn for_keyword(
        cursor: &mut Cursor,
        line_nr: LineNumber,
        keyword: Keyword,
    ) -> Option<Result<Statement>> {
        use Keyword::*;
        match keyword {
            Rem => Some(Self::rem(cursor, line_nr)),
            DimNumeric | DimString | DimArray | LetNumeric | LetString | LetArray | Def | Mat
            | Print | Image | Input | Goto | Gosub | Return | If | For | Next | End => None,
        }
    }

    fn rem(cursor: &mut Cursor, line_nr: LineNumber) -> Result<Statement> {
        let comment = cursor.consume_rest_of_line();
        Ok(Statement::Rem(line_nr, comment.to_string()))
    }
}
