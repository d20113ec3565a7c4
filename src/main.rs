//! # BASIC Parse
//!
//! Thin shell over the `lang` parser. Reads a program from the path in
//! the first argument, or from stdin, prints one record per parsed
//! statement, and keeps diagnostics and errors on stderr.

use ansi_term::Style;
use basic::lang;
use std::io::Read;

fn main() {
    let source = match read_source() {
        Ok(source) => source,
        Err(error) => {
            eprintln!("{}", Style::new().bold().paint(error.to_string()));
            std::process::exit(1);
        }
    };
    let mut parser = lang::parse(&source);
    loop {
        let result = parser.next();
        for diagnostic in parser.take_diagnostics() {
            eprintln!("{}", diagnostic);
        }
        match result {
            None => break,
            Some(Ok(statement)) => println!("{}", statement),
            Some(Err(error)) => {
                eprintln!("{}", Style::new().bold().paint(error.to_string()));
                std::process::exit(1);
            }
        }
    }
}

fn read_source() -> std::io::Result<String> {
    match std::env::args().nth(1) {
        Some(path) => std::fs::read_to_string(path),
        None => {
            let mut source = String::new();
            std::io::stdin().read_to_string(&mut source)?;
            Ok(source)
        }
    }
}
