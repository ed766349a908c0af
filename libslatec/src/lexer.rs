// Copyright 2025 Neil Henderson, Blue Tarp Media.
//
//! The `lexer` module handles the lexical analysis of the source code and then
//! passes the results (a vector of tokens) to the parser.

mod scanner;
mod tokens;

#[cfg(test)]
mod tests;

pub use tokens::{Token, TokenType};

use scanner::Scanner;

/// Performs lexical analysis of the source text and generates a stream of tokens.
///
/// Lexical analysis never fails: characters which cannot begin any token are turned into
/// `TokenType::Unknown` tokens, which a later stage rejects. The returned stream always ends
/// with exactly one `TokenType::EndOfFile` token.
pub fn lex(source: &str) -> Vec<Token> {
    Scanner::new(source).tokenize()
}
