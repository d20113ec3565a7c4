use basic::lang::{parse, Diagnostic, Statement};

#[allow(dead_code)]
pub fn statements(source: &str) -> Vec<Statement> {
    parse(source)
        .collect::<Result<Vec<Statement>, _>>()
        .unwrap_or_else(|error| panic!("{}", error))
}

#[allow(dead_code)]
pub fn diagnostics(source: &str) -> Vec<Diagnostic> {
    let mut parser = parse(source);
    while let Some(result) = parser.next() {
        result.unwrap_or_else(|error| panic!("{}", error));
    }
    parser.take_diagnostics()
}
