// Copyright 2025-2026 Neil Henderson
//
//! The `scanner` module defines the cursor-based [Scanner] which walks the source text and
//! produces tokens.

use super::tokens::{Token, TokenType};

/// The scanner walks the source text with one character of lookahead.
pub struct Scanner {
    chars: Vec<char>,
    pos: usize,
    line: usize,
    tokens: Vec<Token>,
}

impl Scanner {
    /// Creates a new scanner over the given source text.
    pub fn new(source: &str) -> Self {
        Self { chars: source.chars().collect(), pos: 0, line: 1, tokens: Vec::new() }
    }

    /// Consumes the scanner and produces the token stream, terminated by one end-of-file token.
    pub fn tokenize(mut self) -> Vec<Token> {
        while !self.is_at_end() {
            self.skip_whitespace();
            if self.is_at_end() {
                break;
            }

            let line = self.line;
            let c = self.advance();

            // Comments begin with '//' or '/*'; a lone '/' is the division operator.
            if c == '/' && (self.peek() == '/' || self.peek() == '*') {
                self.skip_comment();
                continue;
            }

            if c.is_ascii_alphabetic() || c == '_' {
                self.identifier(line);
                continue;
            }

            if c.is_ascii_digit() {
                self.number(line);
                continue;
            }

            if c == '"' {
                self.string_literal(line);
                continue;
            }

            self.operator(c, line);
        }

        self.tokens.push(Token::new(TokenType::EndOfFile, "EOF", self.line));
        self.tokens
    }

    fn skip_whitespace(&mut self) {
        while !self.is_at_end() {
            match self.peek() {
                ' ' | '\t' | '\r' => {
                    self.advance();
                }
                '\n' => {
                    self.line += 1;
                    self.advance();
                }
                _ => break,
            }
        }
    }

    /// Skips a comment. The leading '/' has been consumed and the next character is '/' or '*'.
    fn skip_comment(&mut self) {
        if self.matches('/') {
            while !self.is_at_end() && self.peek() != '\n' {
                self.advance();
            }
        } else if self.matches('*') {
            // Runs to the next '*/'. An unterminated block comment runs to end of file.
            while !self.is_at_end() {
                if self.peek() == '*' && self.peek_next() == '/' {
                    self.advance();
                    self.advance();
                    break;
                }
                if self.peek() == '\n' {
                    self.line += 1;
                }
                self.advance();
            }
        }
    }

    fn identifier(&mut self, line: usize) {
        let start = self.pos - 1;
        while self.peek().is_ascii_alphanumeric() || self.peek() == '_' {
            self.advance();
        }
        let text = self.lexeme_from(start);

        let token_type = match text.as_str() {
            "int" => TokenType::KwInt,
            "bool" => TokenType::KwBool,
            "string" => TokenType::KwString,
            "func" => TokenType::KwFunc,
            "for" => TokenType::KwFor,
            "to" => TokenType::KwTo,
            "while" => TokenType::KwWhile,
            "if" => TokenType::KwIf,
            "else" => TokenType::KwElse,
            "return" => TokenType::KwReturn,
            "print" => TokenType::KwPrint,
            "input" => TokenType::KwInput,
            "newline" => TokenType::KwNewline,
            "pattern" => TokenType::KwPattern,
            "true" | "false" => TokenType::BoolLiteral,
            _ => TokenType::Identifier,
        };

        self.add_token(token_type, text, line);
    }

    fn number(&mut self, line: usize) {
        let start = self.pos - 1;
        while self.peek().is_ascii_digit() {
            self.advance();
        }
        let text = self.lexeme_from(start);
        self.add_token(TokenType::IntLiteral, text, line);
    }

    /// Scans a string literal. The opening quote has been consumed.
    ///
    /// The stored lexeme is the body without the surrounding quotes. A backslash consumes the
    /// following character verbatim; no escape translation is performed. An unterminated string
    /// simply ends at end of file.
    fn string_literal(&mut self, line: usize) {
        let start = self.pos;
        while !self.is_at_end() && self.peek() != '"' {
            if self.peek() == '\\' {
                self.advance();
            }
            self.advance();
        }
        let text = self.lexeme_from(start);
        self.advance(); // Closing '"'
        self.add_token(TokenType::StringLiteral, text, line);
    }

    fn operator(&mut self, c: char, line: usize) {
        match c {
            '+' => self.add_token(TokenType::Plus, "+", line),
            '-' => self.add_token(TokenType::Minus, "-", line),
            '*' => self.add_token(TokenType::Multiply, "*", line),
            '/' => self.add_token(TokenType::Divide, "/", line),
            '%' => self.add_token(TokenType::Remainder, "%", line),

            '=' => {
                if self.matches('=') {
                    self.add_token(TokenType::EqualTo, "==", line);
                } else {
                    self.add_token(TokenType::Assignment, "=", line);
                }
            }

            '!' => {
                if self.matches('=') {
                    self.add_token(TokenType::NotEqualTo, "!=", line);
                } else {
                    self.add_token(TokenType::LogicalNot, "!", line);
                }
            }

            '<' => {
                if self.matches('=') {
                    self.add_token(TokenType::LessThanOrEqualTo, "<=", line);
                } else {
                    self.add_token(TokenType::LessThan, "<", line);
                }
            }

            '>' => {
                if self.matches('=') {
                    self.add_token(TokenType::GreaterThanOrEqualTo, ">=", line);
                } else {
                    self.add_token(TokenType::GreaterThan, ">", line);
                }
            }

            // A lone '&' or '|' is not an operator in Slate.
            '&' => {
                if self.matches('&') {
                    self.add_token(TokenType::LogicalAnd, "&&", line);
                } else {
                    self.add_token(TokenType::Unknown, "&", line);
                }
            }

            '|' => {
                if self.matches('|') {
                    self.add_token(TokenType::LogicalOr, "||", line);
                } else {
                    self.add_token(TokenType::Unknown, "|", line);
                }
            }

            '(' => self.add_token(TokenType::OpenParen, "(", line),
            ')' => self.add_token(TokenType::CloseParen, ")", line),
            '{' => self.add_token(TokenType::OpenBrace, "{", line),
            '}' => self.add_token(TokenType::CloseBrace, "}", line),
            ',' => self.add_token(TokenType::Comma, ",", line),
            ';' => self.add_token(TokenType::Semicolon, ";", line),

            other => self.add_token(TokenType::Unknown, other.to_string(), line),
        }
    }

    fn add_token(&mut self, token_type: TokenType, lexeme: impl Into<String>, line: usize) {
        self.tokens.push(Token::new(token_type, lexeme, line));
    }

    fn lexeme_from(&self, start: usize) -> String {
        self.chars[start..self.pos].iter().collect()
    }

    fn matches(&mut self, expected: char) -> bool {
        if self.is_at_end() || self.chars[self.pos] != expected {
            return false;
        }
        self.pos += 1;
        true
    }

    fn peek(&self) -> char {
        if self.is_at_end() { '\0' } else { self.chars[self.pos] }
    }

    fn peek_next(&self) -> char {
        if self.pos + 1 >= self.chars.len() { '\0' } else { self.chars[self.pos + 1] }
    }

    fn advance(&mut self) -> char {
        if self.is_at_end() {
            return '\0';
        }
        let c = self.chars[self.pos];
        self.pos += 1;
        c
    }

    fn is_at_end(&self) -> bool {
        self.pos >= self.chars.len()
    }
}
