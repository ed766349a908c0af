// Copyright 2025 Neil Henderson, Blue Tarp Media.
//
//! The `translator` module lowers the AST into a flat list of TAC instructions.
//!
//! Functions are lowered first so that their `func_*` labels appear at the front of the stream;
//! top-level variable declarations and statements follow in source order.

use crate::parser::{BinaryOp, Block, Declaration, DeclaredType, Expression, FunctionDecl, Program, Statement, VarDecl};

use super::label_maker::LabelMaker;
use super::TacInstruction;

/// Translates the program's AST into TAC.
pub fn generate(program: &Program) -> Vec<TacInstruction> {
    let mut translator = TacTranslator::new();

    for decl in &program.declarations {
        if let Declaration::Function(func) = decl {
            translator.translate_function(func);
        }
    }

    for decl in &program.declarations {
        match decl {
            Declaration::Function(_) => {}
            Declaration::Variable(var_decl) => translator.translate_var_decl(var_decl),
            Declaration::Statement(stmt) => translator.translate_statement(stmt),
        }
    }

    translator.code
}

struct TacTranslator {
    code: Vec<TacInstruction>,
    labels: LabelMaker,
}

impl TacTranslator {
    fn new() -> Self {
        Self { code: Vec::new(), labels: LabelMaker::new() }
    }

    fn emit(&mut self, instruction: TacInstruction) {
        self.code.push(instruction);
    }

    fn emit_assign(&mut self, dest: impl Into<String>, src: impl Into<String>) {
        self.emit(TacInstruction::Assign { dest: dest.into(), src: src.into() });
    }

    fn translate_function(&mut self, func: &FunctionDecl) {
        self.emit(TacInstruction::Label { name: format!("func_{}", func.name) });

        for stmt in &func.body.statements {
            self.translate_statement(stmt);
        }

        // Every function body ends with a return, whether or not the source had one. The
        // end-of-function label lets later stages separate the function body from the
        // surrounding flat stream.
        self.emit(TacInstruction::Return { value: None });
        self.emit(TacInstruction::Label { name: format!("endfunc_{}", func.name) });
    }

    fn translate_var_decl(&mut self, var_decl: &VarDecl) {
        match &var_decl.initializer {
            Some(init) => {
                let value = self.translate_expression(init);
                self.emit_assign(var_decl.name.clone(), value);
            }
            // Explicit default initialization, so the code generator can reliably declare the
            // variable from its first assignment.
            None => {
                let default = default_value_for(var_decl.declared_type);
                self.emit_assign(var_decl.name.clone(), default);
            }
        }
    }

    fn translate_block(&mut self, block: &Block) {
        for stmt in &block.statements {
            self.translate_statement(stmt);
        }
    }

    fn translate_statement(&mut self, stmt: &Statement) {
        match stmt {
            Statement::VarDecl(var_decl) => self.translate_var_decl(var_decl),

            Statement::Assign { name, value, .. } => {
                let value = self.translate_expression(value);
                self.emit_assign(name.clone(), value);
            }

            Statement::Print { expr, .. } => {
                let value = self.translate_expression(expr);
                self.emit(TacInstruction::Print { value });
            }

            Statement::Newline { .. } => self.emit(TacInstruction::Newline),

            Statement::Input { name, .. } => self.emit(TacInstruction::Input { name: name.clone() }),

            Statement::Return { value, .. } => {
                let value = value.as_ref().map(|expr| self.translate_expression(expr));
                self.emit(TacInstruction::Return { value });
            }

            Statement::If { condition, then_block, else_block, .. } => {
                let else_label = self.labels.make_label();
                let end_label = self.labels.make_label();

                let condition = self.translate_expression(condition);
                match else_block {
                    Some(else_block) => {
                        self.emit(TacInstruction::IfFalse { condition, target: else_label.clone() });
                        self.translate_block(then_block);
                        self.emit(TacInstruction::Goto { target: end_label.clone() });
                        self.emit(TacInstruction::Label { name: else_label });
                        self.translate_block(else_block);
                    }
                    None => {
                        self.emit(TacInstruction::IfFalse { condition, target: end_label.clone() });
                        self.translate_block(then_block);
                    }
                }
                self.emit(TacInstruction::Label { name: end_label });
            }

            Statement::While { condition, block, .. } => {
                let begin_label = self.labels.make_label();
                let end_label = self.labels.make_label();

                self.emit(TacInstruction::Label { name: begin_label.clone() });
                let condition = self.translate_expression(condition);
                self.emit(TacInstruction::IfFalse { condition, target: end_label.clone() });
                self.translate_block(block);
                self.emit(TacInstruction::Goto { target: begin_label });
                self.emit(TacInstruction::Label { name: end_label });
            }

            Statement::For { var, start, end, block, .. } => {
                // The upper bound is inclusive and is re-evaluated on every iteration.
                let start = self.translate_expression(start);
                self.emit_assign(var.clone(), start);

                let begin_label = self.labels.make_label();
                let end_label = self.labels.make_label();

                self.emit(TacInstruction::Label { name: begin_label.clone() });
                let end = self.translate_expression(end);
                let condition = self.labels.make_temp();
                self.emit(TacInstruction::Binary {
                    op: BinaryOp::LessThanOrEqualTo,
                    dest: condition.clone(),
                    lhs: var.clone(),
                    rhs: end,
                });
                self.emit(TacInstruction::IfFalse { condition, target: end_label.clone() });

                self.translate_block(block);

                let step = self.labels.make_temp();
                self.emit(TacInstruction::Binary {
                    op: BinaryOp::Add,
                    dest: step.clone(),
                    lhs: var.clone(),
                    rhs: "1".to_string(),
                });
                self.emit_assign(var.clone(), step);
                self.emit(TacInstruction::Goto { target: begin_label });
                self.emit(TacInstruction::Label { name: end_label });
            }

            Statement::Block(block) => self.translate_block(block),

            Statement::Call { name, args, .. } => {
                let args = args.iter().map(|arg| self.translate_expression(arg)).collect();
                self.emit(TacInstruction::Call { dest: None, callee: name.clone(), args });
            }
        }
    }

    /// Lowers an expression and returns the operand holding its value.
    ///
    /// Leaves (literals and variables) pass through by name; every non-leaf lands in a fresh
    /// temporary.
    fn translate_expression(&mut self, expr: &Expression) -> String {
        match expr {
            Expression::IntLiteral { value, .. } => value.clone(),

            Expression::BoolLiteral { value, .. } => value.to_string(),

            // String literals keep their surrounding quotes in operand position.
            Expression::StringLiteral { value, .. } => format!("\"{value}\""),

            Expression::Variable { name, .. } => name.clone(),

            Expression::Call { name, args, .. } => {
                let args = args.iter().map(|arg| self.translate_expression(arg)).collect();
                let dest = self.labels.make_temp();
                self.emit(TacInstruction::Call { dest: Some(dest.clone()), callee: name.clone(), args });
                dest
            }

            Expression::Unary { op, operand, .. } => {
                let operand = self.translate_expression(operand);
                let dest = self.labels.make_temp();
                self.emit(TacInstruction::Unary { op: *op, dest: dest.clone(), operand });
                dest
            }

            Expression::Binary { op, lhs, rhs, .. } => {
                let lhs = self.translate_expression(lhs);
                let rhs = self.translate_expression(rhs);
                let dest = self.labels.make_temp();
                self.emit(TacInstruction::Binary { op: *op, dest: dest.clone(), lhs, rhs });
                dest
            }
        }
    }
}

fn default_value_for(declared_type: DeclaredType) -> &'static str {
    match declared_type {
        DeclaredType::Int => "0",
        DeclaredType::Bool => "false",
        DeclaredType::String => "\"\"",
    }
}
