// Copyright 2025 Neil Henderson, Blue Tarp Media.
//
//! The `printer` module renders the AST as an indented tree for human inspection.

use std::io::{self, Write};

use super::abstract_syntax_tree::{Block, Declaration, Expression, Program, Statement, VarDecl};

/// Prints the program's AST to the given writer.
pub fn print_program(program: &Program, out: &mut dyn Write) -> io::Result<()> {
    writeln!(out, "Program")?;
    for decl in &program.declarations {
        match decl {
            Declaration::Function(func) => {
                let params = func
                    .params
                    .iter()
                    .map(|p| format!("{} {}", p.declared_type, p.name))
                    .collect::<Vec<_>>()
                    .join(", ");
                writeln!(out, "  FuncDecl {}({})", func.name, params)?;
                print_block(&func.body, out, 2)?;
            }
            Declaration::Variable(var_decl) => print_var_decl(var_decl, out, 1)?,
            Declaration::Statement(stmt) => print_statement(stmt, out, 1)?,
        }
    }
    Ok(())
}

fn print_var_decl(var_decl: &VarDecl, out: &mut dyn Write, depth: usize) -> io::Result<()> {
    match &var_decl.initializer {
        Some(init) => {
            writeln!(out, "{}VarDecl {} {} = {}", pad(depth), var_decl.declared_type, var_decl.name, render(init))
        }
        None => writeln!(out, "{}VarDecl {} {}", pad(depth), var_decl.declared_type, var_decl.name),
    }
}

fn print_block(block: &Block, out: &mut dyn Write, depth: usize) -> io::Result<()> {
    writeln!(out, "{}Block", pad(depth))?;
    for stmt in &block.statements {
        print_statement(stmt, out, depth + 1)?;
    }
    Ok(())
}

fn print_statement(stmt: &Statement, out: &mut dyn Write, depth: usize) -> io::Result<()> {
    match stmt {
        Statement::VarDecl(var_decl) => print_var_decl(var_decl, out, depth)?,

        Statement::Assign { name, value, .. } => {
            writeln!(out, "{}Assign {} = {}", pad(depth), name, render(value))?;
        }

        Statement::Print { expr, .. } => writeln!(out, "{}Print {}", pad(depth), render(expr))?,

        Statement::Input { name, .. } => writeln!(out, "{}Input {}", pad(depth), name)?,

        Statement::Newline { .. } => writeln!(out, "{}Newline", pad(depth))?,

        Statement::Return { value, .. } => match value {
            Some(value) => writeln!(out, "{}Return {}", pad(depth), render(value))?,
            None => writeln!(out, "{}Return", pad(depth))?,
        },

        Statement::If { condition, then_block, else_block, .. } => {
            writeln!(out, "{}If {}", pad(depth), render(condition))?;
            print_block(then_block, out, depth + 1)?;
            if let Some(else_block) = else_block {
                writeln!(out, "{}Else", pad(depth))?;
                print_block(else_block, out, depth + 1)?;
            }
        }

        Statement::While { condition, block, .. } => {
            writeln!(out, "{}While {}", pad(depth), render(condition))?;
            print_block(block, out, depth + 1)?;
        }

        Statement::For { var, start, end, block, .. } => {
            writeln!(out, "{}For {} = {} to {}", pad(depth), var, render(start), render(end))?;
            print_block(block, out, depth + 1)?;
        }

        Statement::Block(block) => print_block(block, out, depth)?,

        Statement::Call { name, args, .. } => {
            let args = args.iter().map(render).collect::<Vec<_>>().join(", ");
            writeln!(out, "{}Call {}({})", pad(depth), name, args)?;
        }
    }
    Ok(())
}

/// Renders an expression on one line, fully parenthesized so precedence is visible.
fn render(expr: &Expression) -> String {
    match expr {
        Expression::IntLiteral { value, .. } => value.clone(),
        Expression::BoolLiteral { value, .. } => value.to_string(),
        Expression::StringLiteral { value, .. } => format!("\"{value}\""),
        Expression::Variable { name, .. } => name.clone(),
        Expression::Unary { op, operand, .. } => format!("({}{})", op, render(operand)),
        Expression::Binary { op, lhs, rhs, .. } => format!("({} {} {})", render(lhs), op, render(rhs)),
        Expression::Call { name, args, .. } => {
            let args = args.iter().map(render).collect::<Vec<_>>().join(", ");
            format!("{name}({args})")
        }
    }
}

fn pad(depth: usize) -> String {
    "  ".repeat(depth)
}
