// Copyright 2025-2026 Neil Henderson

//! main entry point for the compiler driver executable.

use std::process::ExitCode;

use libslatec::compiler_driver::args::{self, ParsedArgs};
use libslatec::compiler_driver::{Driver, DriverError};

fn main() -> ExitCode {
    let (source_file, options) = match args::parse_command_line_args(std::env::args().skip(1)) {
        ParsedArgs::Run { source_file, options } => (source_file, options),

        ParsedArgs::Help => {
            args::print_help();
            return ExitCode::SUCCESS;
        }

        ParsedArgs::Invalid(message) => {
            eprintln!("error: {message}");
            return ExitCode::FAILURE;
        }
    };

    // Run the compiler driver's pipeline for the source file.
    let mut driver = Driver::new(&source_file, options);

    match driver.run() {
        Ok(()) => {
            debug_assert!(!driver.has_error_diagnostics());
            ExitCode::SUCCESS
        }

        // Stage failures record their details as diagnostics; other driver errors carry their
        // own message.
        Err(DriverError::CompilerFailed) => {
            driver.print_diagnostics();
            ExitCode::FAILURE
        }
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
