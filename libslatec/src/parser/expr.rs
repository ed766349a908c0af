// Copyright 2025 Neil Henderson, Blue Tarp Media.
//
//! The `expr` module implements the expression half of the recursive-descent parser.
//!
//! The grammar, lowest to highest precedence, with every binary operator left-associative:
//!
//! ```text
//! logic_or   : logic_and (|| logic_and)*
//! logic_and  : equality (&& equality)*
//! equality   : rel ((== | !=) rel)*
//! rel        : add ((< | > | <= | >=) add)*
//! add        : mul ((+ | -) mul)*
//! mul        : unary ((* | / | %) unary)*
//! unary      : (! | -) unary | primary
//! primary    : INT | BOOL | STRING | '(' expr ')' | ID | ID '(' args ')'
//! ```

use crate::lexer::TokenType;

use super::abstract_syntax_tree::{BinaryOp, Expression, UnaryOp};
use super::recursive_descent::Parser;
use super::ParseError;

impl Parser {
    pub(super) fn expression(&mut self) -> Result<Expression, ParseError> {
        self.logic_or()
    }

    fn logic_or(&mut self) -> Result<Expression, ParseError> {
        let mut left = self.logic_and()?;
        while let Some(op_token) = self.stream.take_token_if_expected(TokenType::LogicalOr) {
            let right = self.logic_and()?;
            left = binary(BinaryOp::LogicalOr, left, right, op_token.line);
        }
        Ok(left)
    }

    fn logic_and(&mut self) -> Result<Expression, ParseError> {
        let mut left = self.equality()?;
        while let Some(op_token) = self.stream.take_token_if_expected(TokenType::LogicalAnd) {
            let right = self.equality()?;
            left = binary(BinaryOp::LogicalAnd, left, right, op_token.line);
        }
        Ok(left)
    }

    fn equality(&mut self) -> Result<Expression, ParseError> {
        let mut left = self.relational()?;
        loop {
            let op = match self.stream.peek_next_token().token_type {
                TokenType::EqualTo => BinaryOp::EqualTo,
                TokenType::NotEqualTo => BinaryOp::NotEqualTo,
                _ => break,
            };
            let op_token = self.stream.take_token();
            let right = self.relational()?;
            left = binary(op, left, right, op_token.line);
        }
        Ok(left)
    }

    fn relational(&mut self) -> Result<Expression, ParseError> {
        let mut left = self.additive()?;
        loop {
            let op = match self.stream.peek_next_token().token_type {
                TokenType::LessThan => BinaryOp::LessThan,
                TokenType::GreaterThan => BinaryOp::GreaterThan,
                TokenType::LessThanOrEqualTo => BinaryOp::LessThanOrEqualTo,
                TokenType::GreaterThanOrEqualTo => BinaryOp::GreaterThanOrEqualTo,
                _ => break,
            };
            let op_token = self.stream.take_token();
            let right = self.additive()?;
            left = binary(op, left, right, op_token.line);
        }
        Ok(left)
    }

    fn additive(&mut self) -> Result<Expression, ParseError> {
        let mut left = self.multiplicative()?;
        loop {
            let op = match self.stream.peek_next_token().token_type {
                TokenType::Plus => BinaryOp::Add,
                TokenType::Minus => BinaryOp::Subtract,
                _ => break,
            };
            let op_token = self.stream.take_token();
            let right = self.multiplicative()?;
            left = binary(op, left, right, op_token.line);
        }
        Ok(left)
    }

    fn multiplicative(&mut self) -> Result<Expression, ParseError> {
        let mut left = self.unary()?;
        loop {
            let op = match self.stream.peek_next_token().token_type {
                TokenType::Multiply => BinaryOp::Multiply,
                TokenType::Divide => BinaryOp::Divide,
                TokenType::Remainder => BinaryOp::Remainder,
                _ => break,
            };
            let op_token = self.stream.take_token();
            let right = self.unary()?;
            left = binary(op, left, right, op_token.line);
        }
        Ok(left)
    }

    fn unary(&mut self) -> Result<Expression, ParseError> {
        let op = match self.stream.peek_next_token().token_type {
            TokenType::LogicalNot => Some(UnaryOp::Not),
            TokenType::Minus => Some(UnaryOp::Negate),
            _ => None,
        };

        if let Some(op) = op {
            let op_token = self.stream.take_token();
            let operand = self.unary()?;
            return Ok(Expression::Unary { op, operand: Box::new(operand), line: op_token.line });
        }

        self.primary()
    }

    fn primary(&mut self) -> Result<Expression, ParseError> {
        if let Some(token) = self.stream.take_token_if_expected(TokenType::IntLiteral) {
            return Ok(Expression::IntLiteral { value: token.lexeme, line: token.line });
        }

        if let Some(token) = self.stream.take_token_if_expected(TokenType::BoolLiteral) {
            return Ok(Expression::BoolLiteral { value: token.lexeme == "true", line: token.line });
        }

        if let Some(token) = self.stream.take_token_if_expected(TokenType::StringLiteral) {
            return Ok(Expression::StringLiteral { value: token.lexeme, line: token.line });
        }

        if self.stream.take_token_if_expected(TokenType::OpenParen).is_some() {
            let expr = self.expression()?;
            self.expect(TokenType::CloseParen, "Expected ')'")?;
            return Ok(expr);
        }

        if let Some(id_token) = self.stream.take_token_if_expected(TokenType::Identifier) {
            // A '(' after the identifier makes this a function call.
            if self.stream.take_token_if_expected(TokenType::OpenParen).is_some() {
                let args = self.argument_list()?;
                return Ok(Expression::Call { name: id_token.lexeme, args, line: id_token.line });
            }

            return Ok(Expression::Variable { name: id_token.lexeme, line: id_token.line });
        }

        let next = self.stream.peek_next_token();
        Err(ParseError::new(format!("Unexpected token '{}'", next.lexeme), next.line))
    }
}

fn binary(op: BinaryOp, lhs: Expression, rhs: Expression, line: usize) -> Expression {
    Expression::Binary { op, lhs: Box::new(lhs), rhs: Box::new(rhs), line }
}
