// Copyright 2025 Neil Henderson, Blue Tarp Media.
//
//! The `parser` module performs syntax analysis of the token stream produced by the lexer and
//! builds the abstract syntax tree (AST).

pub mod abstract_syntax_tree;
pub mod printer;

mod expr;
mod recursive_descent;
mod token_stream;

#[cfg(test)]
mod tests;

pub use abstract_syntax_tree::{
    BinaryOp, Block, Declaration, DeclaredType, Expression, FunctionDecl, Param, Program, Statement, UnaryOp, VarDecl,
};
pub use recursive_descent::Parser;

use thiserror::Error;

/// A fatal syntax error.
///
/// The parser performs no error recovery: the first syntax error ends the compilation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Parser error at line {line}: {message}")]
pub struct ParseError {
    pub message: String,
    pub line: usize,
}

impl ParseError {
    fn new(message: impl Into<String>, line: usize) -> Self {
        Self { message: message.into(), line }
    }
}

/// Parses the given token stream into a [Program].
pub fn parse(tokens: Vec<crate::lexer::Token>) -> Result<Program, ParseError> {
    Parser::new(tokens).parse_program()
}
