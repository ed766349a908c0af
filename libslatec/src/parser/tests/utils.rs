// Copyright 2025 Neil Henderson, Blue Tarp Media.

use crate::lexer;
use crate::parser::{parse, ParseError, Program};

/// Lexes and parses the given source, asserting that parsing succeeds.
pub fn parse_program(source: &str) -> Program {
    match parse(lexer::lex(source)) {
        Ok(program) => program,
        Err(err) => panic!("Expected '{source}' to parse, but got: {err}"),
    }
}

/// Lexes and parses the given source, asserting that parsing fails.
pub fn parse_error(source: &str) -> ParseError {
    match parse(lexer::lex(source)) {
        Ok(_) => panic!("Expected '{source}' to fail to parse"),
        Err(err) => err,
    }
}
