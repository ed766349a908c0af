// Copyright 2025 Neil Henderson, Blue Tarp Media.
//
//! The `type_check` module implements the two-pass semantic analysis over the AST.
//!
//! Pass 1 registers every function signature and every top-level variable declaration in the
//! global scope. Pass 2 analyzes function bodies and top-level code against those symbols,
//! inferring each function's return type from its return statements.

use crate::parser::{Block, Declaration, Expression, FunctionDecl, Program, Statement, UnaryOp, VarDecl};

use super::symbol_table::{Symbol, SymbolTable};
use super::{SemaError, Type};

/// Analyzes the program and returns the populated symbol table.
///
/// Analysis stops at the first semantic error.
pub fn analyze(program: &Program) -> Result<SymbolTable, SemaError> {
    TypeChecker::new().check_program(program)
}

struct TypeChecker {
    symbols: SymbolTable,
    in_function: bool,

    // Return-type inference state for the function currently being analyzed. The observed type
    // is collected here and written back into the function's global symbol after the body walk.
    observed_return_type: Type,
}

impl TypeChecker {
    fn new() -> Self {
        Self { symbols: SymbolTable::new(), in_function: false, observed_return_type: Type::Unknown }
    }

    fn check_program(mut self, program: &Program) -> Result<SymbolTable, SemaError> {
        // Pass 1: register functions and global variables.
        for decl in &program.declarations {
            match decl {
                Declaration::Function(func) => {
                    let param_types = func.params.iter().map(|p| Type::from(p.declared_type)).collect();
                    let symbol = Symbol::Function {
                        name: func.name.clone(),
                        param_types,
                        return_type: Type::Unknown,
                    };
                    if !self.symbols.insert_global(symbol) {
                        return Err(SemaError::new(format!("Redefinition of function '{}'", func.name), func.line));
                    }
                }

                Declaration::Variable(var_decl) => {
                    let symbol = Symbol::Variable {
                        name: var_decl.name.clone(),
                        data_type: Type::from(var_decl.declared_type),
                    };
                    if !self.symbols.insert_global(symbol) {
                        return Err(SemaError::new(
                            format!("Redefinition of variable '{}'", var_decl.name),
                            var_decl.line,
                        ));
                    }
                }

                Declaration::Statement(_) => {} // Top-level statements are analyzed in pass 2.
            }
        }

        // Pass 2: analyze function bodies, initializers, and top-level statements.
        for decl in &program.declarations {
            match decl {
                Declaration::Function(func) => self.check_function(func)?,

                Declaration::Variable(var_decl) => {
                    if let Some(init) = &var_decl.initializer {
                        let init_type = self.check_expression(init)?;
                        let declared = Type::from(var_decl.declared_type);
                        if init_type != declared {
                            return Err(SemaError::new(
                                format!(
                                    "Type mismatch in initialization of '{}': expected {} but got {}",
                                    var_decl.name, declared, init_type
                                ),
                                init.line(),
                            ));
                        }
                    }
                }

                Declaration::Statement(stmt) => self.check_statement(stmt)?,
            }
        }

        Ok(self.symbols)
    }

    fn check_function(&mut self, func: &FunctionDecl) -> Result<(), SemaError> {
        self.in_function = true;
        self.observed_return_type = Type::Unknown;

        self.symbols.push_scope();
        for param in &func.params {
            let symbol = Symbol::Variable { name: param.name.clone(), data_type: Type::from(param.declared_type) };
            if !self.symbols.insert(symbol) {
                return Err(SemaError::new(format!("Parameter name '{}' duplicated", param.name), func.line));
            }
        }

        for stmt in &func.body.statements {
            self.check_statement(stmt)?;
        }

        self.symbols.pop_scope();

        // No observed return statement means the function returns void.
        let resolved = match self.observed_return_type {
            Type::Unknown => Type::Void,
            observed => observed,
        };
        self.symbols.set_function_return_type(&func.name, resolved);

        self.in_function = false;
        self.observed_return_type = Type::Unknown;
        Ok(())
    }

    fn check_block(&mut self, block: &Block) -> Result<(), SemaError> {
        self.symbols.push_scope();
        for stmt in &block.statements {
            self.check_statement(stmt)?;
        }
        self.symbols.pop_scope();
        Ok(())
    }

    fn check_statement(&mut self, stmt: &Statement) -> Result<(), SemaError> {
        match stmt {
            Statement::VarDecl(var_decl) => self.check_var_decl(var_decl),

            Statement::Assign { name, value, line } => {
                let Some(symbol) = self.symbols.lookup(name) else {
                    return Err(SemaError::new(format!("Assignment to undeclared variable '{name}'"), *line));
                };
                if symbol.is_function() {
                    return Err(SemaError::new(format!("Cannot assign to function '{name}'"), *line));
                }
                let Symbol::Variable { data_type, .. } = symbol else { unreachable!() };
                let target_type = *data_type;

                let value_type = self.check_expression(value)?;
                if value_type != target_type {
                    return Err(SemaError::new(
                        format!(
                            "Type mismatch in assignment to '{name}': expected {target_type} but got {value_type}"
                        ),
                        *line,
                    ));
                }
                Ok(())
            }

            Statement::Print { expr, .. } => {
                self.check_expression(expr)?;
                Ok(())
            }

            Statement::Input { name, line } => {
                if self.symbols.lookup(name).is_none() {
                    return Err(SemaError::new(format!("Input to undeclared variable '{name}'"), *line));
                }
                Ok(())
            }

            Statement::Newline { .. } => Ok(()),

            Statement::Return { value, line } => self.check_return(value.as_ref(), *line),

            Statement::If { condition, then_block, else_block, line } => {
                let cond_type = self.check_expression(condition)?;
                if cond_type != Type::Bool {
                    return Err(SemaError::new("If condition must be boolean", *line));
                }
                self.check_block(then_block)?;
                if let Some(else_block) = else_block {
                    self.check_block(else_block)?;
                }
                Ok(())
            }

            Statement::While { condition, block, line } => {
                let cond_type = self.check_expression(condition)?;
                if cond_type != Type::Bool {
                    return Err(SemaError::new("While condition must be boolean", *line));
                }
                self.check_block(block)
            }

            Statement::For { var, start, end, block, line } => {
                // The loop variable is either an existing int variable or a newly introduced one.
                if self.symbols.exists_in_current(var) {
                    let symbol = self.symbols.lookup(var).expect("Symbol exists in current scope");
                    if !matches!(symbol, Symbol::Variable { data_type: Type::Int, .. }) {
                        return Err(SemaError::new(format!("Loop variable '{var}' must be int"), *line));
                    }
                } else {
                    self.symbols.insert(Symbol::Variable { name: var.clone(), data_type: Type::Int });
                }

                let start_type = self.check_expression(start)?;
                let end_type = self.check_expression(end)?;
                if start_type != Type::Int || end_type != Type::Int {
                    return Err(SemaError::new("For loop bounds must be integers", *line));
                }

                self.check_block(block)
            }

            Statement::Block(block) => self.check_block(block),

            Statement::Call { name, args, line } => {
                // A statement call may target one of the precanned builtin routines, which are
                // not registered in the symbol table. Only calls to known symbols are checked;
                // the arguments are analyzed either way.
                if self.symbols.lookup(name).is_some() {
                    self.check_call(name, args, *line)?;
                } else {
                    for arg in args {
                        self.check_expression(arg)?;
                    }
                }
                Ok(())
            }
        }
    }

    fn check_var_decl(&mut self, var_decl: &VarDecl) -> Result<(), SemaError> {
        let declared = Type::from(var_decl.declared_type);

        if self.symbols.exists_in_current(&var_decl.name) {
            return Err(SemaError::new(format!("Redeclaration of variable '{}'", var_decl.name), var_decl.line));
        }
        self.symbols.insert(Symbol::Variable { name: var_decl.name.clone(), data_type: declared });

        if let Some(init) = &var_decl.initializer {
            let init_type = self.check_expression(init)?;
            if init_type != declared {
                return Err(SemaError::new(
                    format!(
                        "Type mismatch in initialization of '{}': expected {} but got {}",
                        var_decl.name, declared, init_type
                    ),
                    var_decl.line,
                ));
            }
        }
        Ok(())
    }

    fn check_return(&mut self, value: Option<&Expression>, line: usize) -> Result<(), SemaError> {
        if !self.in_function {
            return Err(SemaError::new("Return statement outside of function", line));
        }

        match value {
            Some(value) => {
                let value_type = self.check_expression(value)?;
                match self.observed_return_type {
                    Type::Unknown => self.observed_return_type = value_type,
                    observed if observed != value_type => {
                        return Err(SemaError::new(
                            format!("Inconsistent return types: expected {observed} but got {value_type}"),
                            line,
                        ));
                    }
                    _ => {}
                }
            }
            None => match self.observed_return_type {
                Type::Unknown => self.observed_return_type = Type::Void,
                Type::Void => {}
                observed => {
                    return Err(SemaError::new(
                        format!("Inconsistent return types: expected {observed} but got void"),
                        line,
                    ));
                }
            },
        }
        Ok(())
    }

    fn check_expression(&mut self, expr: &Expression) -> Result<Type, SemaError> {
        match expr {
            Expression::IntLiteral { .. } => Ok(Type::Int),
            Expression::BoolLiteral { .. } => Ok(Type::Bool),
            Expression::StringLiteral { .. } => Ok(Type::String),

            Expression::Variable { name, line } => match self.symbols.lookup(name) {
                None => Err(SemaError::new(format!("Use of undeclared variable '{name}'"), *line)),
                Some(Symbol::Function { .. }) => {
                    Err(SemaError::new(format!("'{name}' is a function, not a variable"), *line))
                }
                Some(Symbol::Variable { data_type, .. }) => Ok(*data_type),
            },

            Expression::Unary { op, operand, line } => {
                let operand_type = self.check_expression(operand)?;
                match op {
                    UnaryOp::Not => {
                        if operand_type != Type::Bool {
                            return Err(SemaError::new("Operator '!' requires bool operand", *line));
                        }
                        Ok(Type::Bool)
                    }
                    UnaryOp::Negate => {
                        if operand_type != Type::Int {
                            return Err(SemaError::new("Unary '-' requires int operand", *line));
                        }
                        Ok(Type::Int)
                    }
                }
            }

            Expression::Binary { op, lhs, rhs, line } => {
                let lhs_type = self.check_expression(lhs)?;
                let rhs_type = self.check_expression(rhs)?;

                if op.is_arithmetic() {
                    // No string concatenation here: '+' requires integers.
                    if lhs_type != Type::Int || rhs_type != Type::Int {
                        return Err(SemaError::new(
                            format!("Arithmetic operator '{op}' requires integer operands"),
                            *line,
                        ));
                    }
                    return Ok(Type::Int);
                }

                if op.is_equality() {
                    if lhs_type != rhs_type {
                        return Err(SemaError::new("Equality operator requires operands of same type", *line));
                    }
                    return Ok(Type::Bool);
                }

                if op.is_relational() {
                    if lhs_type != Type::Int || rhs_type != Type::Int {
                        return Err(SemaError::new(
                            format!("Relational operator '{op}' requires integer operands"),
                            *line,
                        ));
                    }
                    return Ok(Type::Bool);
                }

                // Logical && / ||
                if lhs_type != Type::Bool || rhs_type != Type::Bool {
                    return Err(SemaError::new(format!("Logical operator '{op}' requires boolean operands"), *line));
                }
                Ok(Type::Bool)
            }

            Expression::Call { name, args, line } => self.check_call(name, args, *line),
        }
    }

    /// Checks a function call and returns its result type.
    ///
    /// A call to a function whose return type is still unknown (e.g. a recursive call made while
    /// the callee's own body is being inferred) is treated as returning int at the use site.
    fn check_call(&mut self, name: &str, args: &[Expression], line: usize) -> Result<Type, SemaError> {
        let Some(symbol) = self.symbols.lookup(name) else {
            return Err(SemaError::new(format!("Call to undeclared function '{name}'"), line));
        };
        let Symbol::Function { param_types, return_type, .. } = symbol else {
            return Err(SemaError::new(format!("Call to undeclared function '{name}'"), line));
        };
        let param_types = param_types.clone();
        let return_type = *return_type;

        if param_types.len() != args.len() {
            return Err(SemaError::new(
                format!("Function '{name}' expects {} arguments but got {}", param_types.len(), args.len()),
                line,
            ));
        }

        for (index, (arg, param_type)) in args.iter().zip(param_types.iter()).enumerate() {
            let arg_type = self.check_expression(arg)?;
            if arg_type != *param_type {
                return Err(SemaError::new(
                    format!(
                        "Type mismatch in argument {} of function '{name}': expected {param_type} but got {arg_type}",
                        index + 1
                    ),
                    line,
                ));
            }
        }

        match return_type {
            Type::Unknown => Ok(Type::Int),
            resolved => Ok(resolved),
        }
    }
}
