// Copyright 2025 Neil Henderson, Blue Tarp Media.
//
//! The `ir` module defines the three-address code (TAC) intermediate representation, the
//! AST-to-TAC translator, and the TAC optimizer.
//!
//! Operands are plain strings following a fixed lexical convention: temporaries are spelled
//! `t<digits>`, integer literals are decimal digit strings optionally prefixed by `-`, boolean
//! literals are `true`/`false`, string literals keep their surrounding double quotes, and
//! anything else is a program identifier. Consumers of TAC operands rely on this convention.

pub mod optimize;

mod label_maker;
mod translator;


pub use optimize::optimize;
pub use translator::generate;

use std::fmt;

use crate::parser::{BinaryOp, UnaryOp};

/// A single three-address instruction.
///
/// Two distinguished label families bracket each function in the flat stream: `func_<name>`
/// marks the start and `endfunc_<name>` marks the end. The code generator requires both to
/// recover function boundaries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TacInstruction {
    /// A jump target. `name:` in the dump.
    Label { name: String },

    /// Copy / initialization. `dest = src`.
    Assign { dest: String, src: String },

    /// Binary arithmetic / comparison / logical operation. `dest = lhs op rhs`.
    Binary { op: BinaryOp, dest: String, lhs: String, rhs: String },

    /// Unary operation. `dest = op operand`.
    Unary { op: UnaryOp, dest: String, operand: String },

    /// Function call. A missing `dest` makes this a statement call.
    Call { dest: Option<String>, callee: String, args: Vec<String> },

    /// Return, with an optional value.
    Return { value: Option<String> },

    /// Unconditional jump.
    Goto { target: String },

    /// Conditional jump, taken when the condition is false.
    IfFalse { condition: String, target: String },

    /// Write the operand to standard out, without a trailing newline.
    Print { value: String },

    /// Write a newline to standard out.
    Newline,

    /// Read a line from standard in into the named variable.
    Input { name: String },
}

impl TacInstruction {
    /// Is the instruction a label?
    pub fn is_label(&self) -> bool {
        matches!(self, TacInstruction::Label { .. })
    }

    /// The label's name, if the instruction is a label.
    pub fn label_name(&self) -> Option<&str> {
        match self {
            TacInstruction::Label { name } => Some(name),
            _ => None,
        }
    }

    /// The name this instruction writes its result to, if any.
    pub fn dest(&self) -> Option<&str> {
        match self {
            TacInstruction::Assign { dest, .. }
            | TacInstruction::Binary { dest, .. }
            | TacInstruction::Unary { dest, .. } => Some(dest),
            TacInstruction::Call { dest, .. } => dest.as_deref(),
            _ => None,
        }
    }

    /// The operand values this instruction reads.
    pub fn operands(&self) -> Vec<&str> {
        match self {
            TacInstruction::Assign { src, .. } => vec![src],
            TacInstruction::Binary { lhs, rhs, .. } => vec![lhs, rhs],
            TacInstruction::Unary { operand, .. } => vec![operand],
            TacInstruction::Call { args, .. } => args.iter().map(String::as_str).collect(),
            TacInstruction::Return { value: Some(value) } => vec![value],
            TacInstruction::IfFalse { condition, .. } => vec![condition],
            TacInstruction::Print { value } => vec![value],
            _ => Vec::new(),
        }
    }
}

impl fmt::Display for TacInstruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TacInstruction::Label { name } => write!(f, "{name}:"),

            TacInstruction::Assign { dest, src } => write!(f, "{dest} = {src}"),

            TacInstruction::Binary { op, dest, lhs, rhs } => write!(f, "{dest} = {lhs} {op} {rhs}"),

            TacInstruction::Unary { op, dest, operand } => write!(f, "{dest} = {op} {operand}"),

            TacInstruction::Call { dest, callee, args } => {
                let dest = dest.as_deref().unwrap_or("");
                if args.is_empty() {
                    write!(f, "{dest} = call {callee}")
                } else {
                    write!(f, "{dest} = call {callee}, {}", args.join(", "))
                }
            }

            TacInstruction::Return { value: Some(value) } => write!(f, "return {value}"),
            TacInstruction::Return { value: None } => write!(f, "return"),

            TacInstruction::Goto { target } => write!(f, "goto {target}"),

            TacInstruction::IfFalse { condition, target } => write!(f, "ifFalse {condition} goto {target}"),

            TacInstruction::Print { value } => write!(f, "print {value}"),

            TacInstruction::Newline => write!(f, "newline"),

            TacInstruction::Input { name } => write!(f, "input {name}"),
        }
    }
}

/// Is the operand a compiler temporary (`t` followed by digits)?
pub fn is_temp(operand: &str) -> bool {
    let mut chars = operand.chars();
    chars.next() == Some('t') && {
        let rest = chars.as_str();
        !rest.is_empty() && rest.chars().all(|c| c.is_ascii_digit())
    }
}

/// Is the operand an integer literal (decimal digits, optionally prefixed by '-')?
pub fn is_int_literal(operand: &str) -> bool {
    let digits = operand.strip_prefix('-').unwrap_or(operand);
    !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit())
}

/// Is the operand a boolean literal?
pub fn is_bool_literal(operand: &str) -> bool {
    operand == "true" || operand == "false"
}

/// Is the operand a quoted string literal?
pub fn is_quoted_string(operand: &str) -> bool {
    operand.len() >= 2 && operand.starts_with('"') && operand.ends_with('"')
}
