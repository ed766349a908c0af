// Copyright 2025-2026 Neil Henderson

use crate::parser::tests::utils::{parse_error, parse_program};
use crate::parser::{Declaration, Expression, Statement};

fn first_statement(source: &str) -> Statement {
    let program = parse_program(source);
    match program.declarations.into_iter().next() {
        Some(Declaration::Statement(stmt)) => stmt,
        other => panic!("Expected a top-level statement, got {other:?}"),
    }
}

#[test]
fn parse_identifier_followed_by_equals_is_assignment() {
    let stmt = first_statement("x = 1 + 2;");
    let Statement::Assign { name, value, .. } = stmt else {
        panic!("Expected an assignment");
    };
    assert_eq!(name, "x");
    assert!(matches!(value, Expression::Binary { .. }));
}

#[test]
fn parse_identifier_followed_by_paren_is_call_statement() {
    let stmt = first_statement("pyramid(5);");
    let Statement::Call { name, args, .. } = stmt else {
        panic!("Expected a call statement");
    };
    assert_eq!(name, "pyramid");
    assert_eq!(args.len(), 1);
}

#[test]
fn parse_identifier_followed_by_anything_else_is_an_error() {
    let err = parse_error("x + 1;");
    assert!(err.message.contains("Expected '=' or '(' after 'x'"));
}

#[test]
fn parse_print_statement() {
    let stmt = first_statement("print 1 + 2;");
    assert!(matches!(stmt, Statement::Print { .. }));
}

#[test]
fn parse_return_with_and_without_value() {
    let program = parse_program("func f() { return 1; }\nfunc g() { return; }");

    let Declaration::Function(f) = &program.declarations[0] else { panic!() };
    assert!(matches!(&f.body.statements[0], Statement::Return { value: Some(_), .. }));

    let Declaration::Function(g) = &program.declarations[1] else { panic!() };
    assert!(matches!(&g.body.statements[0], Statement::Return { value: None, .. }));
}

#[test]
fn parse_input_and_newline_statements() {
    let program = parse_program("input x; newline;");
    assert!(matches!(&program.declarations[0], Declaration::Statement(Statement::Input { name, .. }) if name == "x"));
    assert!(matches!(&program.declarations[1], Declaration::Statement(Statement::Newline { .. })));
}

#[test]
fn parse_for_statement() {
    let stmt = first_statement("for i = 1 to 5 { print i; }");
    let Statement::For { var, block, .. } = stmt else {
        panic!("Expected a for statement");
    };
    assert_eq!(var, "i");
    assert_eq!(block.statements.len(), 1);
}

#[test]
fn parse_while_statement() {
    let stmt = first_statement("while (x < 10) { x = x + 1; }");
    assert!(matches!(stmt, Statement::While { .. }));
}

#[test]
fn parse_if_statement_without_else() {
    let stmt = first_statement("if (x > 0) { print x; }");
    let Statement::If { else_block, .. } = stmt else {
        panic!("Expected an if statement");
    };
    assert!(else_block.is_none());
}

#[test]
fn parse_if_statement_with_else() {
    let stmt = first_statement("if (x > 0) { print x; } else { print 0; }");
    let Statement::If { else_block, .. } = stmt else {
        panic!("Expected an if statement");
    };
    assert!(else_block.is_some());
}

#[test]
fn parse_nested_block_statement() {
    let stmt = first_statement("{ int x = 1; print x; }");
    let Statement::Block(block) = stmt else {
        panic!("Expected a block statement");
    };
    assert_eq!(block.statements.len(), 2);
}

#[test]
fn parse_while_requires_parenthesized_condition() {
    let err = parse_error("while x < 10 { }");
    assert!(err.message.contains("Expected '('"));
}

#[test]
fn parse_unknown_token_is_rejected() {
    // A lone '&' lexes as an unknown token; the expression ends before it and the parser
    // rejects it where the ';' should be.
    let err = parse_error("x = a & b;");
    assert!(err.message.contains("Expected ';'"));

    // An unknown token in operand position is rejected directly.
    let err = parse_error("x = & b;");
    assert!(err.message.contains("Unexpected token '&'"));
}
