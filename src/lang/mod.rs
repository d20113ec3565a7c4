/*!
# BASIC Language Module

This Rust module parses line-numbered BASIC source text into a stream
of statement records.

Feed the whole program to [`parse`] and pull statements one at a time:

```
use basic::lang::{parse, Statement};

let mut parser = parse("10 REM READY PHASERS\n");
let rem = parser.next().unwrap().unwrap();
assert_eq!(rem, Statement::Rem(10, " READY PHASERS".to_string()));
```

Lines with no leading line number are skipped. A recognized keyword with
no parser yet is reported on the [`Diagnostic`] side channel and skipped.
A numbered line with no recognizable keyword is a fatal [`Error`] that
ends the stream.
*/

mod ast;
mod cursor;
mod error;
mod keyword;
mod parse;

#[cfg(test)]
mod tests;

pub use ast::Statement;
pub use cursor::Cursor;
pub use error::Error;
pub use keyword::Keyword;
pub use parse::parse;
pub use parse::Diagnostic;
pub use parse::Parser;

/// The number a BASIC source line is labeled with.
pub type LineNumber = u16;

/// 0-based offset from the start of the current physical line.
pub type Column = usize;
