// Copyright 2025 Neil Henderson, Blue Tarp Media.

use crate::ir::{generate, TacInstruction};
use crate::lexer;
use crate::parser;
use crate::sema;

/// Runs the front end over the given source and returns the raw (unoptimized) TAC.
pub fn tac_for(source: &str) -> Vec<TacInstruction> {
    let program = parser::parse(lexer::lex(source)).expect("Source should parse");
    sema::analyze(&program).expect("Source should pass analysis");
    generate(&program)
}

/// Renders each instruction with its Display impl, which is the dump format.
pub fn dump(code: &[TacInstruction]) -> Vec<String> {
    code.iter().map(ToString::to_string).collect()
}
