// Copyright 2025-2026 Neil Henderson
//
//! The `environment` module defines the interpreter's scope stack of name-to-value bindings.

use std::collections::HashMap;

use super::Value;

/// A stack of scopes mapping variable names to their current values.
///
/// The bottom scope is global and is never popped.
#[derive(Debug)]
pub struct Environment {
    scopes: Vec<HashMap<String, Value>>,
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}

impl Environment {
    /// Creates an environment containing only the global scope.
    pub fn new() -> Self {
        Self { scopes: vec![HashMap::new()] }
    }

    /// Pushes a new innermost scope.
    pub fn push_scope(&mut self) {
        self.scopes.push(HashMap::new());
    }

    /// Pops the innermost scope.
    pub fn pop_scope(&mut self) {
        if self.scopes.len() > 1 {
            self.scopes.pop();
        }
    }

    /// Binds a name in the current (innermost) scope, shadowing any outer binding.
    pub fn define(&mut self, name: impl Into<String>, value: Value) {
        self.scopes.last_mut().expect("Scope stack is never empty").insert(name.into(), value);
    }

    /// Assigns to the innermost scope that already binds the name, else creates the binding in
    /// the current scope.
    pub fn set(&mut self, name: &str, value: Value) {
        for scope in self.scopes.iter_mut().rev() {
            if let Some(slot) = scope.get_mut(name) {
                *slot = value;
                return;
            }
        }
        self.define(name, value);
    }

    /// Reads the value bound to a name, innermost scope first.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.scopes.iter().rev().find_map(|scope| scope.get(name))
    }

    /// Is the name bound in any scope?
    pub fn exists(&self, name: &str) -> bool {
        self.get(name).is_some()
    }
}
