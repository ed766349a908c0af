// Copyright 2025 Neil Henderson, Blue Tarp Media.
//
//! The `recursive_descent` module implements the declaration and statement halves of the
//! recursive-descent parser. Expression parsing lives in the sibling `expr` module.

use crate::lexer::{Token, TokenType};
use crate::ICE;

use super::abstract_syntax_tree::{
    Block, Declaration, DeclaredType, FunctionDecl, Param, Program, Statement, VarDecl,
};
use super::token_stream::TokenStream;
use super::ParseError;

/// The recursive-descent parser.
///
/// One token of lookahead, plus a second-token peek used only to disambiguate statements that
/// begin with an identifier.
pub struct Parser {
    pub(super) stream: TokenStream,
}

impl Parser {
    /// Creates a new parser over the given token stream.
    pub fn new(tokens: Vec<Token>) -> Self {
        Self { stream: TokenStream::new(tokens) }
    }

    /// Parses the whole token stream into a [Program].
    pub fn parse_program(&mut self) -> Result<Program, ParseError> {
        let mut declarations = Vec::new();

        while !self.stream.is_eof() {
            declarations.push(self.declaration()?);
        }

        Ok(Program { declarations })
    }

    fn declaration(&mut self) -> Result<Declaration, ParseError> {
        if self.stream.take_token_if_expected(TokenType::KwFunc).is_some() {
            return Ok(Declaration::Function(self.function_declaration()?));
        }

        if self.stream.peek_next_token().token_type.is_type_keyword() {
            return Ok(Declaration::Variable(self.variable_declaration()?));
        }

        Ok(Declaration::Statement(self.statement()?))
    }

    /// Parses a function declaration. The `func` keyword has already been consumed.
    ///
    /// There is no return-type syntax; the return type is inferred later by the semantic
    /// analyzer.
    fn function_declaration(&mut self) -> Result<FunctionDecl, ParseError> {
        let name_token = self.expect(TokenType::Identifier, "Expected function name")?;
        self.expect(TokenType::OpenParen, "Expected '(' after function name")?;

        let mut params = Vec::new();
        if !self.stream.next_token_has_type(TokenType::CloseParen) {
            loop {
                let type_token = self.stream.take_token();
                if !type_token.token_type.is_type_keyword() {
                    return Err(ParseError::new("Expected parameter type", type_token.line));
                }

                let param_name = self.expect(TokenType::Identifier, "Expected parameter name")?;
                params.push(Param {
                    declared_type: declared_type_for_keyword(type_token.token_type),
                    name: param_name.lexeme,
                });

                if self.stream.take_token_if_expected(TokenType::Comma).is_none() {
                    break;
                }
            }
        }
        self.expect(TokenType::CloseParen, "Expected ')' after parameters")?;

        let body = self.block()?;

        Ok(FunctionDecl { name: name_token.lexeme, params, body, line: name_token.line })
    }

    /// Parses a variable declaration. The next token is one of the type keywords.
    fn variable_declaration(&mut self) -> Result<VarDecl, ParseError> {
        let type_token = self.stream.take_token();
        if !type_token.token_type.is_type_keyword() {
            ICE!("Variable declaration does not begin with a type keyword");
        }

        let name_token = self.expect(TokenType::Identifier, "Expected identifier in variable declaration")?;

        let initializer = if self.stream.take_token_if_expected(TokenType::Assignment).is_some() {
            Some(self.expression()?)
        } else {
            None
        };

        self.expect(TokenType::Semicolon, "Expected ';' after variable declaration")?;

        Ok(VarDecl {
            declared_type: declared_type_for_keyword(type_token.token_type),
            name: name_token.lexeme,
            initializer,
            line: type_token.line,
        })
    }

    pub(super) fn statement(&mut self) -> Result<Statement, ParseError> {
        if self.stream.peek_next_token().token_type.is_type_keyword() {
            return Ok(Statement::VarDecl(self.variable_declaration()?));
        }

        match self.stream.peek_next_token().token_type {
            TokenType::KwPrint => self.print_statement(),
            TokenType::KwReturn => self.return_statement(),
            TokenType::KwInput => self.input_statement(),
            TokenType::KwNewline => self.newline_statement(),
            TokenType::KwFor => self.for_statement(),
            TokenType::KwWhile => self.while_statement(),
            TokenType::KwIf => self.if_statement(),
            TokenType::OpenBrace => Ok(Statement::Block(self.block()?)),
            TokenType::Identifier => self.identifier_statement(),
            _ => {
                let next = self.stream.peek_next_token();
                Err(ParseError::new(format!("Unexpected token '{}'", next.lexeme), next.line))
            }
        }
    }

    fn block(&mut self) -> Result<Block, ParseError> {
        let open = self.expect(TokenType::OpenBrace, "Expected '{'")?;

        let mut statements = Vec::new();
        while !self.stream.next_token_has_type(TokenType::CloseBrace) && !self.stream.is_eof() {
            statements.push(self.statement()?);
        }

        self.expect(TokenType::CloseBrace, "Expected '}'")?;

        Ok(Block { statements, line: open.line })
    }

    /// Parses a statement that begins with an identifier.
    ///
    /// The token after the identifier decides the production: `=` begins an assignment and `(`
    /// begins a call statement. Anything else is a syntax error, because assignments and calls
    /// are the only statements headed by an identifier.
    fn identifier_statement(&mut self) -> Result<Statement, ParseError> {
        match self.stream.peek_second_token().token_type {
            TokenType::Assignment => self.assignment_statement(),
            TokenType::OpenParen => self.call_statement(),
            _ => {
                let next = self.stream.peek_next_token();
                Err(ParseError::new(format!("Expected '=' or '(' after '{}'", next.lexeme), next.line))
            }
        }
    }

    fn assignment_statement(&mut self) -> Result<Statement, ParseError> {
        let name_token = self.expect(TokenType::Identifier, "Expected variable name")?;
        self.expect(TokenType::Assignment, "Expected '='")?;
        let value = self.expression()?;
        self.expect(TokenType::Semicolon, "Expected ';'")?;

        Ok(Statement::Assign { name: name_token.lexeme, value, line: name_token.line })
    }

    fn call_statement(&mut self) -> Result<Statement, ParseError> {
        let name_token = self.expect(TokenType::Identifier, "Expected function name")?;
        self.expect(TokenType::OpenParen, "Expected '(' after function name")?;
        let args = self.argument_list()?;
        self.expect(TokenType::Semicolon, "Expected ';'")?;

        Ok(Statement::Call { name: name_token.lexeme, args, line: name_token.line })
    }

    fn print_statement(&mut self) -> Result<Statement, ParseError> {
        let keyword = self.stream.take_token();
        let expr = self.expression()?;
        self.expect(TokenType::Semicolon, "Expected ';'")?;

        Ok(Statement::Print { expr, line: keyword.line })
    }

    fn return_statement(&mut self) -> Result<Statement, ParseError> {
        let keyword = self.stream.take_token();

        let value = if self.stream.next_token_has_type(TokenType::Semicolon) {
            None
        } else {
            Some(self.expression()?)
        };
        self.expect(TokenType::Semicolon, "Expected ';'")?;

        Ok(Statement::Return { value, line: keyword.line })
    }

    fn input_statement(&mut self) -> Result<Statement, ParseError> {
        let keyword = self.stream.take_token();
        let name_token = self.expect(TokenType::Identifier, "Expected variable name after input")?;
        self.expect(TokenType::Semicolon, "Expected ';'")?;

        Ok(Statement::Input { name: name_token.lexeme, line: keyword.line })
    }

    fn newline_statement(&mut self) -> Result<Statement, ParseError> {
        let keyword = self.stream.take_token();
        self.expect(TokenType::Semicolon, "Expected ';'")?;

        Ok(Statement::Newline { line: keyword.line })
    }

    /// Parses `for NAME = EXPR to EXPR BLOCK`. The upper bound is inclusive.
    fn for_statement(&mut self) -> Result<Statement, ParseError> {
        let keyword = self.stream.take_token();
        let var_token = self.expect(TokenType::Identifier, "Expected loop variable")?;
        self.expect(TokenType::Assignment, "Expected '=' in for loop")?;
        let start = self.expression()?;
        self.expect(TokenType::KwTo, "Expected 'to' in for loop")?;
        let end = self.expression()?;
        let block = self.block()?;

        Ok(Statement::For { var: var_token.lexeme, start, end, block, line: keyword.line })
    }

    fn while_statement(&mut self) -> Result<Statement, ParseError> {
        let keyword = self.stream.take_token();
        self.expect(TokenType::OpenParen, "Expected '('")?;
        let condition = self.expression()?;
        self.expect(TokenType::CloseParen, "Expected ')'")?;
        let block = self.block()?;

        Ok(Statement::While { condition, block, line: keyword.line })
    }

    fn if_statement(&mut self) -> Result<Statement, ParseError> {
        let keyword = self.stream.take_token();
        self.expect(TokenType::OpenParen, "Expected '('")?;
        let condition = self.expression()?;
        self.expect(TokenType::CloseParen, "Expected ')'")?;
        let then_block = self.block()?;

        let else_block = if self.stream.take_token_if_expected(TokenType::KwElse).is_some() {
            Some(self.block()?)
        } else {
            None
        };

        Ok(Statement::If { condition, then_block, else_block, line: keyword.line })
    }

    /// Parses a parenthesized argument list. The '(' has already been consumed.
    pub(super) fn argument_list(&mut self) -> Result<Vec<crate::parser::Expression>, ParseError> {
        let mut args = Vec::new();

        if !self.stream.next_token_has_type(TokenType::CloseParen) {
            loop {
                args.push(self.expression()?);
                if self.stream.take_token_if_expected(TokenType::Comma).is_none() {
                    break;
                }
            }
        }
        self.expect(TokenType::CloseParen, "Expected ')' after arguments")?;

        Ok(args)
    }

    pub(super) fn expect(&mut self, expected_type: TokenType, message: &str) -> Result<Token, ParseError> {
        match self.stream.take_token_if_expected(expected_type) {
            Some(token) => Ok(token),
            None => Err(ParseError::new(message, self.stream.peek_next_token().line)),
        }
    }
}

fn declared_type_for_keyword(token_type: TokenType) -> DeclaredType {
    match token_type {
        TokenType::KwInt => DeclaredType::Int,
        TokenType::KwBool => DeclaredType::Bool,
        TokenType::KwString => DeclaredType::String,
        other => ICE!("Token type '{other}' is not a type keyword"),
    }
}
