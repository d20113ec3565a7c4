use super::super::cursor::Cursor;
use super::super::keyword::{dispatch, Keyword, TABLE};

fn dispatch_str(s: &str) -> Option<Keyword> {
    let mut cursor = Cursor::new(s);
    dispatch(&mut cursor).ok()
}

// One canonical line per table entry.
const SAMPLES: [(&str, Keyword); 19] = [
    ("REM ANYTHING AT ALL", Keyword::Rem),
    ("DIM A$(20)", Keyword::DimString),
    ("DIM A[8]", Keyword::DimArray),
    ("DIM A(8,8)", Keyword::DimNumeric),
    ("A$=\"SULU\"", Keyword::LetString),
    ("A[4]=0", Keyword::LetArray),
    ("A1=A1-H/S", Keyword::LetNumeric),
    ("DEF FND(D)=SQR(D)", Keyword::Def),
    ("MAT Z=ZER", Keyword::Mat),
    ("PRINT \"COMBAT AREA\"", Keyword::Print),
    ("IMAGE 4X,A,3X", Keyword::Image),
    ("INPUT C1,W1", Keyword::Input),
    ("GOTO 1990", Keyword::Goto),
    ("GOSUB 1580", Keyword::Gosub),
    ("RETURN", Keyword::Return),
    ("IF S+E>10 THEN 1060", Keyword::If),
    ("FOR I=1 TO 9", Keyword::For),
    ("NEXT I", Keyword::Next),
    ("END", Keyword::End),
];

#[test]
fn test_every_sample_selects_its_own_tag() {
    for (sample, keyword) in SAMPLES.iter() {
        assert_eq!(dispatch_str(sample), Some(*keyword), "{}", sample);
    }
}

// The table contract: priority order may only matter when the earlier
// entry is strictly more specific. With the numeric lookaheads rejecting
// `$` and `[`, every canonical sample matches exactly one recognizer.
#[test]
fn test_table_entries_are_mutually_exclusive() {
    for (sample, keyword) in SAMPLES.iter() {
        let matching: Vec<Keyword> = TABLE
            .iter()
            .filter(|r| r.matches(sample).is_some())
            .map(|r| r.keyword())
            .collect();
        assert_eq!(matching, vec![*keyword], "{}", sample);
    }
}

#[test]
fn test_string_assignment_not_shadowed() {
    // the generic numeric form must not claim the string/array spellings
    assert_eq!(dispatch_str("A$=\"X\""), Some(Keyword::LetString));
    assert_eq!(dispatch_str("A[1]=2"), Some(Keyword::LetArray));
    assert_eq!(dispatch_str("A2=2"), Some(Keyword::LetNumeric));
}

#[test]
fn test_dim_array_not_numeric() {
    // `[^$]`-style lookahead would send DIM A[...] down the numeric path
    assert_eq!(dispatch_str("DIM A[8]"), Some(Keyword::DimArray));
}

#[test]
fn test_dispatch_skips_whitespace() {
    let mut cursor = Cursor::new("   PRINT X");
    assert_eq!(dispatch(&mut cursor).ok(), Some(Keyword::Print));
    assert_eq!(cursor.peek_remainder(), " X");
}

#[test]
fn test_invalid_statement() {
    let mut cursor = Cursor::new("  XYZZY");
    let error = dispatch(&mut cursor).unwrap_err();
    assert_eq!(error.column(), 2);
    assert_eq!(error.message(), "INVALID STATEMENT");
}

#[test]
fn test_lowercase_is_not_a_keyword() {
    assert_eq!(dispatch_str("rem lowercase"), None);
}
