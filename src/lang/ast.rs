use super::keyword::Keyword;
use super::LineNumber;

/// One parsed source line. Every variant carries its line number; only
/// `Rem` has a specified payload so far. The remaining variants are the
/// extension points for the statement parsers still to be written, and
/// their sub-grammars are deliberately left unspecified here.
#[derive(Debug, PartialEq, Clone)]
pub enum Statement {
    /// The raw text between `REM` and the newline, untrimmed.
    Rem(LineNumber, String),
    DimNumeric(LineNumber),
    DimString(LineNumber),
    DimArray(LineNumber),
    LetNumeric(LineNumber),
    LetString(LineNumber),
    LetArray(LineNumber),
    Def(LineNumber),
    Mat(LineNumber),
    Print(LineNumber),
    Image(LineNumber),
    Input(LineNumber),
    Goto(LineNumber),
    Gosub(LineNumber),
    Return(LineNumber),
    If(LineNumber),
    For(LineNumber),
    Next(LineNumber),
    End(LineNumber),
}

impl Statement {
    pub fn line_nr(&self) -> LineNumber {
        use Statement::*;
        match self {
            Rem(line_nr, _) => *line_nr,
            DimNumeric(line_nr) | DimString(line_nr) | DimArray(line_nr)
            | LetNumeric(line_nr) | LetString(line_nr) | LetArray(line_nr) | Def(line_nr)
            | Mat(line_nr) | Print(line_nr) | Image(line_nr) | Input(line_nr) | Goto(line_nr)
            | Gosub(line_nr) | Return(line_nr) | If(line_nr) | For(line_nr) | Next(line_nr)
            | End(line_nr) => *line_nr,
        }
    }

    pub fn keyword(&self) -> Keyword {
        use Statement::*;
        match self {
            Rem(..) => Keyword::Rem,
            DimNumeric(_) => Keyword::DimNumeric,
            DimString(_) => Keyword::DimString,
            DimArray(_) => Keyword::DimArray,
            LetNumeric(_) => Keyword::LetNumeric,
            LetString(_) => Keyword::LetString,
            LetArray(_) => Keyword::LetArray,
            Def(_) => Keyword::Def,
            Mat(_) => Keyword::Mat,
            Print(_) => Keyword::Print,
            Image(_) => Keyword::Image,
            Input(_) => Keyword::Input,
            Goto(_) => Keyword::Goto,
            Gosub(_) => Keyword::Gosub,
            Return(_) => Keyword::Return,
            If(_) => Keyword::If,
            For(_) => Keyword::For,
            Next(_) => Keyword::Next,
            End(_) => Keyword::End,
        }
    }
}

impl std::fmt::Display for Statement {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Statement::Rem(line_nr, comment) => write!(f, "{} REM{}", line_nr, comment),
            other => write!(f, "{} {}", other.line_nr(), other.keyword()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rem_display() {
        let rem = Statement::Rem(10, " HELLO WORLD".to_string());
        assert_eq!(rem.to_string(), "10 REM HELLO WORLD");
    }
}
