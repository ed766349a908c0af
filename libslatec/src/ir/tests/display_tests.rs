// Copyright 2025-2026 Neil Henderson

use crate::ir::{is_bool_literal, is_int_literal, is_quoted_string, is_temp, TacInstruction};
use crate::parser::{BinaryOp, UnaryOp};

#[test]
fn display_label() {
    let instr = TacInstruction::Label { name: "L1".to_string() };
    assert_eq!(instr.to_string(), "L1:");
}

#[test]
fn display_assign() {
    let instr = TacInstruction::Assign { dest: "x".to_string(), src: "14".to_string() };
    assert_eq!(instr.to_string(), "x = 14");
}

#[test]
fn display_binary() {
    let instr = TacInstruction::Binary {
        op: BinaryOp::Multiply,
        dest: "t1".to_string(),
        lhs: "3".to_string(),
        rhs: "4".to_string(),
    };
    assert_eq!(instr.to_string(), "t1 = 3 * 4");
}

#[test]
fn display_unary() {
    let instr = TacInstruction::Unary { op: UnaryOp::Not, dest: "t2".to_string(), operand: "flag".to_string() };
    assert_eq!(instr.to_string(), "t2 = ! flag");
}

#[test]
fn display_call_with_result_and_args() {
    let instr = TacInstruction::Call {
        dest: Some("t1".to_string()),
        callee: "max".to_string(),
        args: vec!["a".to_string(), "b".to_string()],
    };
    assert_eq!(instr.to_string(), "t1 = call max, a, b");
}

#[test]
fn display_statement_call_has_empty_result() {
    let instr = TacInstruction::Call { dest: None, callee: "pyramid".to_string(), args: vec!["5".to_string()] };
    assert_eq!(instr.to_string(), " = call pyramid, 5");
}

#[test]
fn display_jumps_and_io() {
    assert_eq!(TacInstruction::Goto { target: "L2".to_string() }.to_string(), "goto L2");
    assert_eq!(
        TacInstruction::IfFalse { condition: "t1".to_string(), target: "L2".to_string() }.to_string(),
        "ifFalse t1 goto L2"
    );
    assert_eq!(TacInstruction::Print { value: "x".to_string() }.to_string(), "print x");
    assert_eq!(TacInstruction::Newline.to_string(), "newline");
    assert_eq!(TacInstruction::Input { name: "x".to_string() }.to_string(), "input x");
    assert_eq!(TacInstruction::Return { value: None }.to_string(), "return");
    assert_eq!(TacInstruction::Return { value: Some("t1".to_string()) }.to_string(), "return t1");
}

#[test]
fn operand_predicates_follow_the_lexical_convention() {
    assert!(is_temp("t1"));
    assert!(is_temp("t42"));
    assert!(!is_temp("t"));
    assert!(!is_temp("total")); // Identifier, despite the leading 't'
    assert!(!is_temp("x1"));

    assert!(is_int_literal("0"));
    assert!(is_int_literal("-42"));
    assert!(!is_int_literal("-"));
    assert!(!is_int_literal("12a"));

    assert!(is_bool_literal("true"));
    assert!(is_bool_literal("false"));
    assert!(!is_bool_literal("True"));

    assert!(is_quoted_string("\"hi\""));
    assert!(is_quoted_string("\"\""));
    assert!(!is_quoted_string("hi"));
}
