// Copyright 2025-2026 Neil Henderson
//
//! The `diagnostics` module defines the errors emitted by the compiler driver and their printer.

use std::io::Write;

use colored::Colorize;

/// A diagnostic emitted by the compiler.
#[derive(Debug, Clone)]
pub struct Diagnostic {
    message: String,
}

impl Diagnostic {
    /// Creates an error diagnostic with the given message.
    pub fn error(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }

    /// The diagnostic's message.
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Prints diagnostics to a buffer.
pub struct Printer<W: Write> {
    buffer: W,
    source_filename: String,
}

impl<W: Write> Printer<W> {
    /// Creates a printer for diagnostics from the given source file.
    pub fn with_source(buffer: W, source_filename: &str) -> Self {
        Self { buffer, source_filename: source_filename.to_string() }
    }

    /// Prints the diagnostics, one per line.
    pub fn print_diagnostics(&mut self, errors: &[Diagnostic]) {
        for error in errors {
            let prefix = "error:".red().bold();
            let _ = writeln!(self.buffer, "{}: {} {}", self.source_filename, prefix, error.message());
        }
    }
}
