// Copyright 2025 Neil Henderson, Blue Tarp Media.

use std::io::Cursor;

use crate::interpreter::{Interpreter, RuntimeError};
use crate::lexer;
use crate::parser;
use crate::sema;

/// Runs the given source through the interpreter and returns the captured program output.
pub fn run_program(source: &str) -> String {
    match try_run(source, "") {
        Ok(output) => output,
        Err(err) => panic!("Expected '{source}' to run, but got: {err}"),
    }
}

/// Runs the given source with the given standard input and returns the captured output.
pub fn run_with_input(source: &str, input: &str) -> String {
    match try_run(source, input) {
        Ok(output) => output,
        Err(err) => panic!("Expected '{source}' to run, but got: {err}"),
    }
}

/// Runs the given source, expecting a runtime error.
pub fn run_error(source: &str) -> RuntimeError {
    match try_run(source, "") {
        Ok(output) => panic!("Expected '{source}' to fail at runtime, but it printed: {output:?}"),
        Err(err) => err,
    }
}

fn try_run(source: &str, input: &str) -> Result<String, RuntimeError> {
    let program = parser::parse(lexer::lex(source)).expect("Source should parse");
    sema::analyze(&program).expect("Source should pass analysis");

    let mut output = Vec::new();
    Interpreter::new(&mut output, Cursor::new(input.as_bytes())).run(&program)?;
    Ok(String::from_utf8(output).expect("Program output should be UTF-8"))
}
