// Copyright 2025 Neil Henderson, Blue Tarp Media.
//
//! The `interpreter` module is the alternative back end: it evaluates the AST directly instead
//! of lowering it to TAC.
//!
//! `print` writes its operand without a trailing newline and `newline` writes `\n`. The output
//! and input streams are injectable so callers (and tests) can capture program I/O.

mod environment;
mod value;


pub use value::Value;

use std::collections::HashMap;
use std::io::{self, BufRead, Write};

use thiserror::Error;

use crate::parser::{
    BinaryOp, Block, Declaration, Expression, FunctionDecl, Program, Statement, UnaryOp, VarDecl,
};

use environment::Environment;

/// A runtime error raised by the interpreter.
///
/// These should not occur for programs that passed semantic analysis, with the exception of
/// statement calls to names that only the code generator's builtin library provides.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Runtime error: {message}")]
pub struct RuntimeError {
    pub message: String,
}

impl RuntimeError {
    fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }
}

/// How a statement finished: normally, or by unwinding a `return`.
///
/// The return signal is distinct from the error channel so it can traverse nested blocks and
/// loops without being mistaken for a failure.
enum StmtFlow {
    Normal,
    Return(Value),
}

/// Runs the program with standard input and output.
pub fn run(program: &Program) -> Result<(), RuntimeError> {
    let stdout = io::stdout();
    let stdin = io::stdin();
    Interpreter::new(stdout.lock(), stdin.lock()).run(program)
}

/// The tree-walking interpreter.
pub struct Interpreter<'p, W, R> {
    functions: HashMap<&'p str, &'p FunctionDecl>,
    env: Environment,
    out: W,
    input: R,
}

impl<'p, W: Write, R: BufRead> Interpreter<'p, W, R> {
    /// Creates an interpreter writing program output to `out` and reading `input` statements
    /// from `input`.
    pub fn new(out: W, input: R) -> Self {
        Self { functions: HashMap::new(), env: Environment::new(), out, input }
    }

    /// Runs the program: registers functions, initializes globals, then executes the top-level
    /// statements in order.
    pub fn run(&mut self, program: &'p Program) -> Result<(), RuntimeError> {
        for decl in &program.declarations {
            match decl {
                Declaration::Function(func) => {
                    self.functions.insert(func.name.as_str(), func);
                }
                Declaration::Variable(var_decl) => {
                    let value = match &var_decl.initializer {
                        Some(init) => self.eval_expression(init)?,
                        None => Value::default_for(var_decl.declared_type),
                    };
                    self.env.define(var_decl.name.clone(), value);
                }
                Declaration::Statement(_) => {}
            }
        }

        for decl in &program.declarations {
            if let Declaration::Statement(stmt) = decl {
                self.execute_statement(stmt)?;
            }
        }

        Ok(())
    }

    fn execute_statement(&mut self, stmt: &Statement) -> Result<StmtFlow, RuntimeError> {
        match stmt {
            Statement::VarDecl(var_decl) => {
                self.execute_var_decl(var_decl)?;
                Ok(StmtFlow::Normal)
            }

            Statement::Assign { name, value, .. } => {
                let value = self.eval_expression(value)?;
                self.env.set(name, value);
                Ok(StmtFlow::Normal)
            }

            Statement::Print { expr, .. } => {
                let value = self.eval_expression(expr)?;
                let _ = write!(self.out, "{}", value.to_display_string());
                Ok(StmtFlow::Normal)
            }

            Statement::Newline { .. } => {
                let _ = writeln!(self.out);
                Ok(StmtFlow::Normal)
            }

            Statement::Input { name, .. } => {
                self.execute_input(name)?;
                Ok(StmtFlow::Normal)
            }

            Statement::Return { value, .. } => {
                let value = match value {
                    Some(value) => self.eval_expression(value)?,
                    None => Value::Int(0),
                };
                Ok(StmtFlow::Return(value))
            }

            Statement::If { condition, then_block, else_block, .. } => {
                if self.eval_expression(condition)?.as_bool()? {
                    self.execute_block(then_block)
                } else if let Some(else_block) = else_block {
                    self.execute_block(else_block)
                } else {
                    Ok(StmtFlow::Normal)
                }
            }

            Statement::While { condition, block, .. } => {
                while self.eval_expression(condition)?.as_bool()? {
                    if let StmtFlow::Return(value) = self.execute_block(block)? {
                        return Ok(StmtFlow::Return(value));
                    }
                }
                Ok(StmtFlow::Normal)
            }

            Statement::For { var, start, end, block, .. } => {
                // The bounds are evaluated once, and the upper bound is inclusive.
                let start = self.eval_expression(start)?.as_int()?;
                let end = self.eval_expression(end)?.as_int()?;

                for i in start..=end {
                    self.env.set(var, Value::Int(i));
                    if let StmtFlow::Return(value) = self.execute_block(block)? {
                        return Ok(StmtFlow::Return(value));
                    }
                }
                Ok(StmtFlow::Normal)
            }

            Statement::Block(block) => self.execute_block(block),

            Statement::Call { name, args, .. } => {
                let mut arg_values = Vec::with_capacity(args.len());
                for arg in args {
                    arg_values.push(self.eval_expression(arg)?);
                }
                self.call_function(name, arg_values)?;
                Ok(StmtFlow::Normal)
            }
        }
    }

    fn execute_var_decl(&mut self, var_decl: &VarDecl) -> Result<(), RuntimeError> {
        let value = match &var_decl.initializer {
            Some(init) => self.eval_expression(init)?,
            None => Value::default_for(var_decl.declared_type),
        };
        self.env.define(var_decl.name.clone(), value);
        Ok(())
    }

    fn execute_block(&mut self, block: &Block) -> Result<StmtFlow, RuntimeError> {
        self.env.push_scope();
        for stmt in &block.statements {
            match self.execute_statement(stmt)? {
                StmtFlow::Normal => {}
                StmtFlow::Return(value) => {
                    self.env.pop_scope();
                    return Ok(StmtFlow::Return(value));
                }
            }
        }
        self.env.pop_scope();
        Ok(StmtFlow::Normal)
    }

    fn execute_input(&mut self, name: &str) -> Result<(), RuntimeError> {
        let mut line = String::new();
        let _ = self.input.read_line(&mut line);
        let line = line.trim_end_matches(['\n', '\r']).to_string();

        // Coerce the input to the variable's current type; an unbound name becomes a string.
        let value = match self.env.get(name) {
            Some(Value::Int(_)) => Value::Int(line.parse::<i64>().unwrap_or(0)),
            Some(Value::Bool(_)) => Value::Bool(line == "true"),
            _ => Value::Str(line),
        };
        self.env.set(name, value);
        Ok(())
    }

    fn eval_expression(&mut self, expr: &Expression) -> Result<Value, RuntimeError> {
        match expr {
            Expression::IntLiteral { value, line } => match value.parse::<i64>() {
                Ok(parsed) => Ok(Value::Int(parsed)),
                Err(_) => Err(RuntimeError::new(format!("Invalid integer literal '{value}' at line {line}"))),
            },

            Expression::BoolLiteral { value, .. } => Ok(Value::Bool(*value)),

            Expression::StringLiteral { value, .. } => Ok(Value::Str(value.clone())),

            Expression::Variable { name, .. } => match self.env.get(name) {
                Some(value) => Ok(value.clone()),
                None => Err(RuntimeError::new(format!("Use of undeclared variable '{name}'"))),
            },

            Expression::Unary { op, operand, .. } => {
                let operand = self.eval_expression(operand)?;
                match op {
                    UnaryOp::Not => Ok(Value::Bool(!operand.as_bool()?)),
                    UnaryOp::Negate => Ok(Value::Int(-operand.as_int()?)),
                }
            }

            Expression::Binary { op, lhs, rhs, .. } => {
                let lhs = self.eval_expression(lhs)?;
                let rhs = self.eval_expression(rhs)?;
                self.eval_binary(*op, lhs, rhs)
            }

            Expression::Call { name, args, .. } => {
                let mut arg_values = Vec::with_capacity(args.len());
                for arg in args {
                    arg_values.push(self.eval_expression(arg)?);
                }
                self.call_function(name, arg_values)
            }
        }
    }

    fn eval_binary(&mut self, op: BinaryOp, lhs: Value, rhs: Value) -> Result<Value, RuntimeError> {
        match op {
            // '+' concatenates when either operand is a string; otherwise integer addition.
            BinaryOp::Add => {
                if lhs.is_string() || rhs.is_string() {
                    Ok(Value::Str(format!("{}{}", lhs.to_display_string(), rhs.to_display_string())))
                } else {
                    Ok(Value::Int(lhs.as_int()? + rhs.as_int()?))
                }
            }

            BinaryOp::Subtract => Ok(Value::Int(lhs.as_int()? - rhs.as_int()?)),
            BinaryOp::Multiply => Ok(Value::Int(lhs.as_int()? * rhs.as_int()?)),
            // Division by zero is not checked here.
            BinaryOp::Divide => Ok(Value::Int(lhs.as_int()? / rhs.as_int()?)),
            BinaryOp::Remainder => Ok(Value::Int(lhs.as_int()? % rhs.as_int()?)),

            BinaryOp::EqualTo => Ok(Value::Bool(lhs.to_display_string() == rhs.to_display_string())),
            BinaryOp::NotEqualTo => Ok(Value::Bool(lhs.to_display_string() != rhs.to_display_string())),

            BinaryOp::LessThan => Ok(Value::Bool(lhs.as_int()? < rhs.as_int()?)),
            BinaryOp::GreaterThan => Ok(Value::Bool(lhs.as_int()? > rhs.as_int()?)),
            BinaryOp::LessThanOrEqualTo => Ok(Value::Bool(lhs.as_int()? <= rhs.as_int()?)),
            BinaryOp::GreaterThanOrEqualTo => Ok(Value::Bool(lhs.as_int()? >= rhs.as_int()?)),

            BinaryOp::LogicalAnd => Ok(Value::Bool(lhs.as_bool()? && rhs.as_bool()?)),
            BinaryOp::LogicalOr => Ok(Value::Bool(lhs.as_bool()? || rhs.as_bool()?)),
        }
    }

    /// Calls a user-declared function: push a scope, bind the parameters, run the body, and
    /// catch the return signal. A body that finishes without returning produces 0.
    fn call_function(&mut self, name: &str, args: Vec<Value>) -> Result<Value, RuntimeError> {
        let Some(func) = self.functions.get(name).copied() else {
            return Err(RuntimeError::new(format!("Call to undeclared function '{name}'")));
        };

        self.env.push_scope();
        for (index, param) in func.params.iter().enumerate() {
            // A missing argument gets the parameter type's default value.
            let value = match args.get(index) {
                Some(value) => value.clone(),
                None => Value::default_for(param.declared_type),
            };
            self.env.define(param.name.clone(), value);
        }

        let mut result = Value::Int(0);
        for stmt in &func.body.statements {
            match self.execute_statement(stmt) {
                Ok(StmtFlow::Normal) => {}
                Ok(StmtFlow::Return(value)) => {
                    result = value;
                    break;
                }
                Err(err) => {
                    self.env.pop_scope();
                    return Err(err);
                }
            }
        }

        self.env.pop_scope();
        Ok(result)
    }
}
