// Copyright 2025-2026 Neil Henderson

//! Cross-stage integration tests over the whole compilation pipeline.

use std::fs;

use libslatec::compiler_driver::{Driver, DriverOptions};
use libslatec::ir::TacInstruction;
use libslatec::{codegen, ir, lexer, parser, sema};

/// A small corpus of programs exercising every statement form.
const SAMPLE_PROGRAMS: [&str; 6] = [
    "int x = 2 + 3 * 4;\nprint x;\nnewline;",
    "for i = 1 to 5 { print i; newline; }",
    "func fact(int n) { if (n <= 1) { return 1; } return n * fact(n - 1); }\nprint fact(5); newline;",
    "int n = 9;\nif (n > 0) { if (n < 10) { print n; newline; } }",
    "int y = 7;\nint z = y * 2;\nprint z; newline;",
    "int n = 3;\nwhile (n > 0) { print n; n = n - 1; }\nnewline;",
];

fn front_end(source: &str) -> (parser::Program, Vec<TacInstruction>) {
    let program = parser::parse(lexer::lex(source)).expect("Sample should parse");
    sema::analyze(&program).expect("Sample should pass analysis");
    let tac = ir::generate(&program);
    (program, tac)
}

#[test]
fn optimizer_is_idempotent_across_sample_programs() {
    for source in SAMPLE_PROGRAMS {
        let (_, tac) = front_end(source);
        let optimized = ir::optimize(tac);
        let twice = ir::optimize(optimized.clone());
        assert_eq!(optimized, twice, "Optimizer not idempotent for: {source}");
    }
}

#[test]
fn optimizer_preserves_label_structure_across_sample_programs() {
    for source in SAMPLE_PROGRAMS {
        let (_, tac) = front_end(source);
        let raw_labels =
            tac.iter().filter_map(TacInstruction::label_name).map(str::to_string).collect::<Vec<_>>();
        let optimized = ir::optimize(tac);
        let optimized_labels =
            optimized.iter().filter_map(TacInstruction::label_name).map(str::to_string).collect::<Vec<_>>();
        assert_eq!(raw_labels, optimized_labels, "Labels changed for: {source}");
    }
}

#[test]
fn function_boundaries_are_recoverable_across_sample_programs() {
    for source in SAMPLE_PROGRAMS {
        let (_, tac) = front_end(source);
        let labels = tac.iter().filter_map(TacInstruction::label_name).collect::<Vec<_>>();

        for label in &labels {
            let Some(name) = label.strip_prefix("func_") else { continue };
            let start = labels.iter().position(|l| l == label).expect("Label exists");
            let end = labels
                .iter()
                .position(|l| *l == format!("endfunc_{name}"))
                .unwrap_or_else(|| panic!("Missing endfunc_{name} in: {source}"));
            assert!(end > start);

            // No other function begins inside this one.
            for inner in &labels[start + 1..end] {
                assert!(!inner.starts_with("func_"), "Nested func_ label inside {name} for: {source}");
            }
        }
    }
}

#[test]
fn codegen_from_raw_and_optimized_tac_declares_the_same_functions() {
    let source = SAMPLE_PROGRAMS[2]; // Recursive factorial
    let (program, tac) = front_end(source);

    let from_raw = codegen::generate(&tac, &program);
    let from_optimized = codegen::generate(&ir::optimize(tac), &program);

    assert!(from_raw.contains("int fact(int n);"));
    assert!(from_optimized.contains("int fact(int n);"));
    assert!(from_raw.contains("int main() {"));
    assert!(from_optimized.contains("int main() {"));
}

#[test]
fn driver_compiles_a_program_to_the_requested_output_file() {
    let temp_dir = std::env::temp_dir();
    let source_path = temp_dir.join(format!("slatec_it_{}.sl", std::process::id()));
    let output_path = temp_dir.join(format!("slatec_it_{}.cpp", std::process::id()));

    fs::write(&source_path, "int x = 2 + 3 * 4;\nprint x;\nnewline;\n").expect("Failed to write source");

    let options = DriverOptions {
        output_file: Some(output_path.to_string_lossy().to_string()),
        ..Default::default()
    };
    let mut driver = Driver::new(&source_path.to_string_lossy(), options);
    let result = driver.run();

    assert!(result.is_ok());
    assert!(!driver.has_error_diagnostics());

    let generated = fs::read_to_string(&output_path).expect("Generated file should exist");
    assert!(generated.contains("int main() {"));
    assert!(generated.contains("x = 14;"));

    let _ = fs::remove_file(&source_path);
    let _ = fs::remove_file(&output_path);
}
