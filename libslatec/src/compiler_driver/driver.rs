// Copyright 2025 Neil Henderson, Blue Tarp Media.
//
//! The `driver` module defines `Driver`, which is the slatec compiler driver type.

use std::fs;
use std::io::Write;

use crate::codegen;
use crate::interpreter;
use crate::ir;
use crate::lexer;
use crate::parser;
use crate::sema;

use super::diagnostics::{Diagnostic, Printer};
use super::{DriverError, DriverOptions};

/// The slatec compiler driver.
///
/// Stage errors are recorded on the driver as diagnostics and surfaced as
/// `DriverError::CompilerFailed`; the caller prints them at exit.
pub struct Driver {
    // The path to the source `.sl` file.
    pub source_filename: String,

    // Options that control the driver.
    options: DriverOptions,

    // Error diagnostics emitted by the compiler stages.
    errors: Vec<Diagnostic>,
}

impl Driver {
    /// Creates a new compiler driver configured to compile the given source file.
    pub fn new(source_filename: &str, options: DriverOptions) -> Self {
        Self { source_filename: source_filename.to_string(), options, errors: Vec::new() }
    }

    /// Creates a new compiler driver for unit tests, with default options and no source filename.
    #[cfg(test)]
    pub fn for_testing() -> Self {
        Self { source_filename: String::new(), options: DriverOptions::default(), errors: Vec::new() }
    }

    /// Runs the compiler pipeline over the driver's source file.
    pub fn run(&mut self) -> Result<(), DriverError> {
        let source = fs::read_to_string(&self.source_filename).map_err(|err| DriverError::SourceFileUnreadable {
            path: self.source_filename.clone(),
            message: err.to_string(),
        })?;

        self.compile(&source)
    }

    /// Runs the compilation pipeline over the given source text.
    pub fn compile(&mut self, source: &str) -> Result<(), DriverError> {
        let tokens = lexer::lex(source);

        if self.options.lex {
            for token in &tokens {
                println!("line {:<4} {:<20} '{}'", token.line, format!("{:?}", token.token_type), token.lexeme);
            }
            return Ok(());
        }

        let program = match parser::parse(tokens) {
            Ok(program) => program,
            Err(err) => {
                self.add_diagnostic(Diagnostic::error(err.to_string()));
                return Err(DriverError::CompilerFailed);
            }
        };
        println!("=== Parsing Completed Successfully ===");

        if self.options.parse {
            return Ok(());
        }

        if self.options.print_ast {
            let stdout = std::io::stdout();
            let _ = parser::printer::print_program(&program, &mut stdout.lock());
        }

        if let Err(err) = sema::analyze(&program) {
            self.add_diagnostic(Diagnostic::error(err.to_string()));
            return Err(DriverError::CompilerFailed);
        }
        println!("=== Semantic Analysis Completed Successfully ===");

        if self.options.validate {
            return Ok(());
        }

        // The interpreter back end consumes the AST directly; no TAC is involved.
        if self.options.interpret {
            if let Err(err) = interpreter::run(&program) {
                self.add_diagnostic(Diagnostic::error(err.to_string()));
                return Err(DriverError::CompilerFailed);
            }
            return Ok(());
        }

        let tac = ir::generate(&program);

        println!("\n=== RAW TAC (Before Optimization) ===");
        for instr in &tac {
            println!("{instr}");
        }

        let optimized = if self.options.no_optimize { tac } else { ir::optimize(tac) };

        println!("=== OPTIMIZED TAC ===");
        for instr in &optimized {
            println!("{instr}");
        }
        println!("=== END OPTIMIZED TAC ===\n");

        if self.options.print_ir {
            return Ok(());
        }

        let cpp_source = codegen::generate(&optimized, &program);
        let output_path = self.options.output_path();
        fs::write(output_path, cpp_source).map_err(|err| DriverError::OutputFileUnwritable {
            path: output_path.to_string(),
            message: err.to_string(),
        })?;
        println!("Generated {output_path} (compile with: g++ {output_path} -o out && ./out)");

        // The AST printout comes last, for human inspection.
        let stdout = std::io::stdout();
        let _ = parser::printer::print_program(&program, &mut stdout.lock());

        Ok(())
    }

    /// Adds an error diagnostic.
    pub fn add_diagnostic(&mut self, diagnostic: Diagnostic) {
        self.errors.push(diagnostic);
    }

    /// Are there any error diagnostics?
    pub fn has_error_diagnostics(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Prints all diagnostics to `stderr`.
    pub fn print_diagnostics(&self) {
        self.print_diagnostics_to_buffer(std::io::stderr());
    }

    /// Prints all diagnostics to the given `buffer`.
    ///
    /// You probably want `print_diagnostics` instead of this function, unless you deliberately
    /// want to print diagnostics into a buffer.
    pub fn print_diagnostics_to_buffer(&self, buffer: impl Write) {
        if self.errors.is_empty() {
            return;
        }

        let mut printer = Printer::with_source(buffer, &self.source_filename);
        printer.print_diagnostics(&self.errors);
    }
}
