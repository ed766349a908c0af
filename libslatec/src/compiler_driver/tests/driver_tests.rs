// Copyright 2025-2026 Neil Henderson

use crate::compiler_driver::diagnostics::Diagnostic;
use crate::compiler_driver::{Driver, DriverError};

#[test]
fn compile_records_a_diagnostic_for_a_parse_error() {
    let mut driver = Driver::for_testing();
    let result = driver.compile("int x = ;");

    assert!(matches!(result, Err(DriverError::CompilerFailed)));
    assert!(driver.has_error_diagnostics());

    let mut buffer = Vec::new();
    driver.print_diagnostics_to_buffer(&mut buffer);
    let printed = String::from_utf8(buffer).expect("Diagnostics should be UTF-8");
    assert!(printed.contains("Parser error at line 1"));
}

#[test]
fn compile_records_a_diagnostic_for_a_semantic_error() {
    let mut driver = Driver::for_testing();
    let result = driver.compile("int a = 1;\nbool b = a;");

    assert!(matches!(result, Err(DriverError::CompilerFailed)));

    let mut buffer = Vec::new();
    driver.print_diagnostics_to_buffer(&mut buffer);
    let printed = String::from_utf8(buffer).expect("Diagnostics should be UTF-8");
    assert!(printed.contains("Semantic error (line 2)"));
    assert!(printed.contains("Type mismatch in initialization of 'b'"));
}

#[test]
fn run_fails_for_a_missing_source_file() {
    let mut driver = Driver::new("does-not-exist.sl", Default::default());
    let result = driver.run();
    assert!(matches!(result, Err(DriverError::SourceFileUnreadable { .. })));
}

#[test]
fn diagnostics_print_nothing_when_empty() {
    let driver = Driver::for_testing();
    let mut buffer = Vec::new();
    driver.print_diagnostics_to_buffer(&mut buffer);
    assert!(buffer.is_empty());
}

#[test]
fn added_diagnostics_are_reported() {
    let mut driver = Driver::for_testing();
    assert!(!driver.has_error_diagnostics());

    driver.add_diagnostic(Diagnostic::error("boom"));
    assert!(driver.has_error_diagnostics());
}
