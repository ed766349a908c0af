// Copyright 2025-2026 Neil Henderson

use crate::sema::symbol_table::{Symbol, SymbolTable};
use crate::sema::Type;

fn variable(name: &str, data_type: Type) -> Symbol {
    Symbol::Variable { name: name.to_string(), data_type }
}

#[test]
fn insert_rejects_duplicate_in_same_scope() {
    let mut table = SymbolTable::new();
    assert!(table.insert(variable("x", Type::Int)));
    assert!(!table.insert(variable("x", Type::Bool)));
}

#[test]
fn same_name_is_allowed_in_nested_scope() {
    let mut table = SymbolTable::new();
    assert!(table.insert(variable("x", Type::Int)));

    table.push_scope();
    assert!(table.insert(variable("x", Type::String)));
}

#[test]
fn lookup_is_innermost_first() {
    let mut table = SymbolTable::new();
    table.insert(variable("x", Type::Int));

    table.push_scope();
    table.insert(variable("x", Type::String));

    assert!(matches!(table.lookup("x"), Some(Symbol::Variable { data_type: Type::String, .. })));

    table.pop_scope();
    assert!(matches!(table.lookup("x"), Some(Symbol::Variable { data_type: Type::Int, .. })));
}

#[test]
fn lookup_falls_back_to_outer_scope() {
    let mut table = SymbolTable::new();
    table.insert(variable("global", Type::Bool));

    table.push_scope();
    table.push_scope();
    assert!(matches!(table.lookup("global"), Some(Symbol::Variable { data_type: Type::Bool, .. })));
    assert!(table.lookup("missing").is_none());
}

#[test]
fn exists_in_current_only_sees_innermost_scope() {
    let mut table = SymbolTable::new();
    table.insert(variable("x", Type::Int));

    table.push_scope();
    assert!(!table.exists_in_current("x"));
    assert!(table.lookup("x").is_some());
}

#[test]
fn insert_global_targets_the_bottom_scope() {
    let mut table = SymbolTable::new();
    table.push_scope();
    assert!(table.insert_global(variable("g", Type::Int)));

    table.pop_scope();
    assert!(table.exists_in_current("g"));
}

#[test]
fn set_function_return_type_updates_the_global_symbol() {
    let mut table = SymbolTable::new();
    table.insert_global(Symbol::Function {
        name: "f".to_string(),
        param_types: vec![Type::Int],
        return_type: Type::Unknown,
    });

    table.set_function_return_type("f", Type::Bool);

    assert!(matches!(table.lookup("f"), Some(Symbol::Function { return_type: Type::Bool, .. })));
}
