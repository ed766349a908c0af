// Copyright 2025 Neil Henderson, Blue Tarp Media.

//! Integration tests that expect the compiler to generate error diagnostics when compiling
//! ill-formed source files.

use libslatec::compiler_driver::{Driver, DriverError, DriverOptions};

// Include the generated test case functions.
include!(concat!(env!("OUT_DIR"), "/generated_invalid_program_tests.rs"));

/// Compiles the given source file and verifies that there is one or more error diagnostics.
fn compile_source_file_and_expect_diagnostics(source_filename: &str) {
    // Only run up to semantic analysis; if the program does compile (unexpectedly) we don't
    // want a generated output file left over.
    let options = DriverOptions { validate: true, ..Default::default() };

    let mut driver = Driver::new(source_filename, options);
    let driver_result = driver.run();

    assert!(matches!(driver_result, Err(DriverError::CompilerFailed)));
    assert!(driver.has_error_diagnostics());
}
