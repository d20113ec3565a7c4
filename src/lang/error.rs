use super::{Column, LineNumber};

/// The only error type crossing the parse boundary. Escape of an `Error`
/// means the whole parse terminated; it is never a per-line event.
#[derive(PartialEq, Clone)]
pub struct Error {
    line_nr: Option<LineNumber>,
    column: Column,
    message: String,
}

impl Error {
    pub fn new<S: Into<String>>(message: S) -> Error {
        Error {
            line_nr: None,
            column: 0,
            message: message.into(),
        }
    }

    pub fn in_line_number(mut self, line_nr: LineNumber) -> Error {
        debug_assert!(self.line_nr.is_none());
        self.line_nr = Some(line_nr);
        self
    }

    pub fn in_column(mut self, column: Column) -> Error {
        debug_assert_eq!(self.column, 0);
        self.column = column;
        self
    }

    pub fn line_nr(&self) -> Option<LineNumber> {
        self.line_nr
    }

    pub fn column(&self) -> Column {
        self.column
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Debug for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error {{ {} }}", self.to_string())
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self.line_nr {
            Some(line_nr) => write!(f, "at {}:{} {}", line_nr, self.column, self.message),
            None => write!(f, "at ?:{} {}", self.column, self.message),
        }
    }
}

impl std::error::Error for Error {}
