// Copyright 2025 Neil Henderson, Blue Tarp Media.
//
//! The `symbol_kind` module defines the [SymbolKind] type.

use std::fmt;

/// The kind of a symbol recorded in the symbol table.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SymbolKind {
    Variable,
    Function,
}

impl fmt::Display for SymbolKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SymbolKind::Variable => write!(f, "variable"),
            SymbolKind::Function => write!(f, "function"),
        }
    }
}
