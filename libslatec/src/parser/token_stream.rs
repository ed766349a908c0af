// Copyright 2025 Neil Henderson, Blue Tarp Media.
//
//! The `token_stream` module provides a stateful [TokenStream] which allows the parent parser
//! module to consume and peek at tokens in the stream.

use crate::lexer::{Token, TokenType};

/// A token stream is a list of tokens produced by the lexer which can be iterated over.
///
/// The lexer guarantees the stream ends with an end-of-file token, so peeking never runs out of
/// tokens: once the cursor reaches the end-of-file token it stays there.
pub struct TokenStream {
    tokens: Vec<Token>,
    cursor: usize,
}

impl TokenStream {
    /// Creates a new token stream.
    pub fn new(tokens: Vec<Token>) -> Self {
        debug_assert!(matches!(tokens.last(), Some(t) if t.token_type == TokenType::EndOfFile));
        Self { tokens, cursor: 0 }
    }

    /// Returns the next token in the stream and advances past it.
    ///
    /// At the end of the stream this keeps returning the end-of-file token.
    pub fn take_token(&mut self) -> Token {
        let token = self.tokens[self.cursor].clone();
        if self.cursor + 1 < self.tokens.len() {
            self.cursor += 1;
        }
        token
    }

    /// Peeks at the next token in the stream and, if it has the expected type, returns the token
    /// and advances.
    pub fn take_token_if_expected(&mut self, expected_type: TokenType) -> Option<Token> {
        if self.next_token_has_type(expected_type) { Some(self.take_token()) } else { None }
    }

    /// Peeks at the next token in the stream without advancing past it.
    pub fn peek_next_token(&self) -> &Token {
        &self.tokens[self.cursor]
    }

    /// Peeks at the next token in the stream and returns whether its type matches the given type.
    pub fn next_token_has_type(&self, token_type: TokenType) -> bool {
        self.peek_next_token().token_type == token_type
    }

    /// Peeks at the token after the next token, without advancing.
    ///
    /// This second-token peek exists solely so the parser can disambiguate statements that begin
    /// with an identifier (assignment vs. call statement).
    pub fn peek_second_token(&self) -> &Token {
        if self.cursor + 1 < self.tokens.len() {
            &self.tokens[self.cursor + 1]
        } else {
            &self.tokens[self.tokens.len() - 1]
        }
    }

    /// Is end of stream? I.e. the next token is the end-of-file token.
    pub fn is_eof(&self) -> bool {
        self.next_token_has_type(TokenType::EndOfFile)
    }
}
