// Copyright 2025 Neil Henderson, Blue Tarp Media.

use crate::codegen;
use crate::ir;
use crate::lexer;
use crate::parser;
use crate::sema;

/// Runs the whole pipeline (with optimization) and returns the generated C++ source.
pub fn generate_cpp(source: &str) -> String {
    let program = parser::parse(lexer::lex(source)).expect("Source should parse");
    sema::analyze(&program).expect("Source should pass analysis");
    let tac = ir::optimize(ir::generate(&program));
    codegen::generate(&tac, &program)
}

/// Runs the pipeline without the optimizer and returns the generated C++ source.
pub fn generate_cpp_unoptimized(source: &str) -> String {
    let program = parser::parse(lexer::lex(source)).expect("Source should parse");
    sema::analyze(&program).expect("Source should pass analysis");
    let tac = ir::generate(&program);
    codegen::generate(&tac, &program)
}

/// Asserts that `haystack` contains `needle`, with a readable failure message.
pub fn assert_contains(haystack: &str, needle: &str) {
    assert!(haystack.contains(needle), "Expected generated source to contain '{needle}'.\nGenerated:\n{haystack}");
}

/// Asserts that `haystack` does not contain `needle`.
pub fn assert_not_contains(haystack: &str, needle: &str) {
    assert!(!haystack.contains(needle), "Expected generated source to not contain '{needle}'.\nGenerated:\n{haystack}");
}
