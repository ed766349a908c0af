// Copyright 2025 Neil Henderson, Blue Tarp Media.
//
//! The `abstract_syntax_tree` module defines the AST node types built by the parser.
//!
//! Nodes are tagged enum variants owned by value; every node records the 1-based source line
//! where its first token appeared. The tree is acyclic and the [Program] owns all of its
//! top-level declarations.

use std::fmt;

/// The root of the AST: an ordered list of top-level declarations.
#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    pub declarations: Vec<Declaration>,
}

/// A top-level declaration.
#[derive(Debug, Clone, PartialEq)]
pub enum Declaration {
    Function(FunctionDecl),
    Variable(VarDecl),
    Statement(Statement),
}

/// A function declaration.
///
/// Slate has no return-type syntax; the return type is inferred by the semantic analyzer from
/// the function's return statements.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionDecl {
    pub name: String,
    pub params: Vec<Param>,
    pub body: Block,
    pub line: usize,
}

/// A function parameter.
#[derive(Debug, Clone, PartialEq)]
pub struct Param {
    pub declared_type: DeclaredType,
    pub name: String,
}

/// A variable declaration with an optional initializer.
#[derive(Debug, Clone, PartialEq)]
pub struct VarDecl {
    pub declared_type: DeclaredType,
    pub name: String,
    pub initializer: Option<Expression>,
    pub line: usize,
}

/// A brace-delimited list of statements.
#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    pub statements: Vec<Statement>,
    pub line: usize,
}

/// A statement.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    VarDecl(VarDecl),
    Assign { name: String, value: Expression, line: usize },
    Print { expr: Expression, line: usize },
    Input { name: String, line: usize },
    Newline { line: usize },
    Return { value: Option<Expression>, line: usize },
    If { condition: Expression, then_block: Block, else_block: Option<Block>, line: usize },
    While { condition: Expression, block: Block, line: usize },
    For { var: String, start: Expression, end: Expression, block: Block, line: usize },
    Block(Block),
    Call { name: String, args: Vec<Expression>, line: usize },
}

/// An expression.
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    IntLiteral { value: String, line: usize },
    BoolLiteral { value: bool, line: usize },
    StringLiteral { value: String, line: usize },
    Variable { name: String, line: usize },
    Unary { op: UnaryOp, operand: Box<Expression>, line: usize },
    Binary { op: BinaryOp, lhs: Box<Expression>, rhs: Box<Expression>, line: usize },
    Call { name: String, args: Vec<Expression>, line: usize },
}

impl Expression {
    /// The source line on which the expression begins.
    pub fn line(&self) -> usize {
        match self {
            Expression::IntLiteral { line, .. }
            | Expression::BoolLiteral { line, .. }
            | Expression::StringLiteral { line, .. }
            | Expression::Variable { line, .. }
            | Expression::Unary { line, .. }
            | Expression::Binary { line, .. }
            | Expression::Call { line, .. } => *line,
        }
    }
}

/// One of the three primitive type keywords usable in a declaration.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum DeclaredType {
    Int,
    Bool,
    String,
}

impl fmt::Display for DeclaredType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeclaredType::Int => write!(f, "int"),
            DeclaredType::Bool => write!(f, "bool"),
            DeclaredType::String => write!(f, "string"),
        }
    }
}

/// A unary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UnaryOp {
    Not,
    Negate,
}

impl fmt::Display for UnaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnaryOp::Not => write!(f, "!"),
            UnaryOp::Negate => write!(f, "-"),
        }
    }
}

/// A binary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOp {
    Add,
    Subtract,
    Multiply,
    Divide,
    Remainder,
    EqualTo,
    NotEqualTo,
    LessThan,
    GreaterThan,
    LessThanOrEqualTo,
    GreaterThanOrEqualTo,
    LogicalAnd,
    LogicalOr,
}

impl BinaryOp {
    /// Is the operator one of `+ - * / %`?
    pub fn is_arithmetic(&self) -> bool {
        matches!(
            self,
            BinaryOp::Add | BinaryOp::Subtract | BinaryOp::Multiply | BinaryOp::Divide | BinaryOp::Remainder
        )
    }

    /// Is the operator one of `< > <= >=`?
    pub fn is_relational(&self) -> bool {
        matches!(
            self,
            BinaryOp::LessThan | BinaryOp::GreaterThan | BinaryOp::LessThanOrEqualTo | BinaryOp::GreaterThanOrEqualTo
        )
    }

    /// Is the operator `==` or `!=`?
    pub fn is_equality(&self) -> bool {
        matches!(self, BinaryOp::EqualTo | BinaryOp::NotEqualTo)
    }

    /// Is the operator `&&` or `||`?
    pub fn is_logical(&self) -> bool {
        matches!(self, BinaryOp::LogicalAnd | BinaryOp::LogicalOr)
    }

    /// Does the operator produce a boolean result?
    pub fn produces_bool(&self) -> bool {
        self.is_relational() || self.is_equality() || self.is_logical()
    }
}

impl fmt::Display for BinaryOp {
    #[rustfmt::skip]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BinaryOp::Add                  => write!(f, "+"),
            BinaryOp::Subtract             => write!(f, "-"),
            BinaryOp::Multiply             => write!(f, "*"),
            BinaryOp::Divide               => write!(f, "/"),
            BinaryOp::Remainder            => write!(f, "%"),
            BinaryOp::EqualTo              => write!(f, "=="),
            BinaryOp::NotEqualTo           => write!(f, "!="),
            BinaryOp::LessThan             => write!(f, "<"),
            BinaryOp::GreaterThan          => write!(f, ">"),
            BinaryOp::LessThanOrEqualTo    => write!(f, "<="),
            BinaryOp::GreaterThanOrEqualTo => write!(f, ">="),
            BinaryOp::LogicalAnd           => write!(f, "&&"),
            BinaryOp::LogicalOr            => write!(f, "||"),
        }
    }
}
