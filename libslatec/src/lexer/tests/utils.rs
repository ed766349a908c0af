// Copyright 2025 Neil Henderson, Blue Tarp Media.

use crate::lexer::*;

pub fn compare_token_types(actual: &[Token], expected: &[TokenType]) {
    let actual_types = actual.iter().map(|t| t.token_type).collect::<Vec<_>>();
    assert_eq!(actual_types, expected);
}

pub fn compare_lexemes(actual: &[Token], expected: &[&str]) {
    let actual_lexemes = actual.iter().map(|t| t.lexeme.as_str()).collect::<Vec<_>>();
    assert_eq!(actual_lexemes, expected);
}
