// Copyright 2025-2026 Neil Henderson

//! Integration tests that run source files through the tree-walking interpreter and verify
//! their standard output byte-for-byte.

use std::fs;
use std::io::Cursor;

use libslatec::interpreter::Interpreter;
use libslatec::{lexer, parser, sema};

// Include the generated test case functions.
include!(concat!(env!("OUT_DIR"), "/generated_valid_program_tests.rs"));

/// Runs the source file through the interpreter and compares the captured standard output with
/// the contents of the expected file.
fn run_source_file_and_compare_output(source_filename: &str, expected_filename: &str) {
    let source = fs::read_to_string(source_filename).expect("Failed to read test case source");
    let expected = fs::read_to_string(expected_filename).expect("Failed to read expected output");

    let program = parser::parse(lexer::lex(&source)).expect("Test case should parse");
    sema::analyze(&program).expect("Test case should pass analysis");

    let mut output = Vec::new();
    Interpreter::new(&mut output, Cursor::new(&b""[..])).run(&program).expect("Test case should run");

    let output = String::from_utf8(output).expect("Program output should be UTF-8");
    assert_eq!(output, expected, "Output mismatch for {source_filename}");
}
