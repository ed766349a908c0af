// Copyright 2025 Neil Henderson, Blue Tarp Media.
//
//! The tokens module defines the tokens that the lexer produces.

use std::fmt;

/// Types of tokens produced by lexical analysis.
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum TokenType {
    // Keywords
    KwInt,
    KwBool,
    KwString,
    KwFunc,
    KwFor,
    KwTo,
    KwWhile,
    KwIf,
    KwElse,
    KwReturn,
    KwPrint,
    KwInput,
    KwNewline,
    KwArray, // Reserved; the scanner never produces it.
    KwPattern,

    // Literals
    IntLiteral,
    BoolLiteral,
    StringLiteral,

    // Identifiers
    Identifier,

    // Operators
    Plus,
    Minus,
    Multiply,
    Divide,
    Remainder,
    Assignment,
    EqualTo,
    NotEqualTo,
    LessThan,
    GreaterThan,
    LessThanOrEqualTo,
    GreaterThanOrEqualTo,
    LogicalAnd,
    LogicalOr,
    LogicalNot,

    // Symbols
    OpenParen,
    CloseParen,
    OpenBrace,
    CloseBrace,
    Comma,
    Semicolon,

    EndOfFile,
    Unknown,
}

impl TokenType {
    /// Is the token type one of the three primitive type keywords?
    pub fn is_type_keyword(&self) -> bool {
        matches!(self, TokenType::KwInt | TokenType::KwBool | TokenType::KwString)
    }
}

impl fmt::Display for TokenType {
    #[rustfmt::skip]
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            TokenType::KwInt                => write!(f, "int"),
            TokenType::KwBool               => write!(f, "bool"),
            TokenType::KwString             => write!(f, "string"),
            TokenType::KwFunc               => write!(f, "func"),
            TokenType::KwFor                => write!(f, "for"),
            TokenType::KwTo                 => write!(f, "to"),
            TokenType::KwWhile              => write!(f, "while"),
            TokenType::KwIf                 => write!(f, "if"),
            TokenType::KwElse               => write!(f, "else"),
            TokenType::KwReturn             => write!(f, "return"),
            TokenType::KwPrint              => write!(f, "print"),
            TokenType::KwInput              => write!(f, "input"),
            TokenType::KwNewline            => write!(f, "newline"),
            TokenType::KwArray              => write!(f, "array"),
            TokenType::KwPattern            => write!(f, "pattern"),

            TokenType::IntLiteral           => write!(f, "integer literal"),
            TokenType::BoolLiteral          => write!(f, "boolean literal"),
            TokenType::StringLiteral        => write!(f, "string literal"),
            TokenType::Identifier           => write!(f, "identifier"),

            TokenType::Plus                 => write!(f, "+"),
            TokenType::Minus                => write!(f, "-"),
            TokenType::Multiply             => write!(f, "*"),
            TokenType::Divide               => write!(f, "/"),
            TokenType::Remainder            => write!(f, "%"),
            TokenType::Assignment           => write!(f, "="),
            TokenType::EqualTo              => write!(f, "=="),
            TokenType::NotEqualTo           => write!(f, "!="),
            TokenType::LessThan             => write!(f, "<"),
            TokenType::GreaterThan          => write!(f, ">"),
            TokenType::LessThanOrEqualTo    => write!(f, "<="),
            TokenType::GreaterThanOrEqualTo => write!(f, ">="),
            TokenType::LogicalAnd           => write!(f, "&&"),
            TokenType::LogicalOr            => write!(f, "||"),
            TokenType::LogicalNot           => write!(f, "!"),

            TokenType::OpenParen            => write!(f, "("),
            TokenType::CloseParen           => write!(f, ")"),
            TokenType::OpenBrace            => write!(f, "{{"),
            TokenType::CloseBrace           => write!(f, "}}"),
            TokenType::Comma                => write!(f, ","),
            TokenType::Semicolon            => write!(f, ";"),

            TokenType::EndOfFile            => write!(f, "end of file"),
            TokenType::Unknown              => write!(f, "unknown"),
        }
    }
}

/// A token produced by lexical analysis.
///
/// A token records its type, the original lexeme text, and the 1-based source line on which the
/// lexeme began. Tokens are immutable once created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub token_type: TokenType,
    pub lexeme: String,
    pub line: usize,
}

impl Token {
    /// Creates a new token.
    pub fn new(token_type: TokenType, lexeme: impl Into<String>, line: usize) -> Self {
        Self { token_type, lexeme: lexeme.into(), line }
    }

    /// Does the token have the given type?
    pub fn has_type(&self, expected_type: TokenType) -> bool {
        self.token_type == expected_type
    }

    /// Is the token an identifier?
    pub fn is_identifier(&self) -> bool {
        self.token_type == TokenType::Identifier
    }
}
