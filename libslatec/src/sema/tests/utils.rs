// Copyright 2025 Neil Henderson, Blue Tarp Media.

use crate::lexer;
use crate::parser;
use crate::sema::{analyze, SemaError, SymbolTable};

/// Lexes, parses and analyzes the given source, asserting that analysis succeeds.
pub fn analyze_program(source: &str) -> SymbolTable {
    let program = parser::parse(lexer::lex(source)).expect("Source should parse");
    match analyze(&program) {
        Ok(symbols) => symbols,
        Err(err) => panic!("Expected '{source}' to pass analysis, but got: {err}"),
    }
}

/// Lexes, parses and analyzes the given source, asserting that analysis fails.
pub fn analyze_error(source: &str) -> SemaError {
    let program = parser::parse(lexer::lex(source)).expect("Source should parse");
    match analyze(&program) {
        Ok(_) => panic!("Expected '{source}' to fail analysis"),
        Err(err) => err,
    }
}
