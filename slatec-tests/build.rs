// Copyright 2025 Neil Henderson, Blue Tarp Media.

//! Build script to generate integration test cases based on files in the `tests/valid` and
//! `tests/invalid` directories.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use glob::glob;

const INVALID_TEST_CASES_FILENAME: &str = "generated_invalid_program_tests.rs";
const VALID_TEST_CASES_FILENAME: &str = "generated_valid_program_tests.rs";

fn main() {
    generate_invalid_program_tests();
    generate_valid_program_tests();

    // We want cargo to rerun our build.rs script if any of the integration test files change.
    println!("cargo:rerun-if-changed=tests");
}

/// Generate test functions for cases we expect to fail because the compiler emits a diagnostic
/// for a lexical, syntax, or semantic error.
fn generate_invalid_program_tests() {
    let out_dir = std::env::var("OUT_DIR").unwrap(); // Set by cargo when running `cargo test`
    let generated_rs_filename = Path::new(&out_dir).join(INVALID_TEST_CASES_FILENAME);
    let mut writer = BufWriter::new(File::create(generated_rs_filename).expect("Failed to create file"));

    let invalid_tests_dir_path = get_tests_directory_path("invalid");

    for entry in glob(&format!("{invalid_tests_dir_path}/**/*.sl")).expect("Failed to read glob pattern") {
        match entry {
            Ok(source_file_path) => {
                let test_case_name = make_test_case_name(&invalid_tests_dir_path, &source_file_path);
                let source_filename = source_file_path.into_os_string().into_string().expect("Invalid path");

                let test_case_code = &format!(
                    r#"
                        #[test]
                        #[allow(non_snake_case)]
                        fn {test_case_name}() {{
                            compile_source_file_and_expect_diagnostics("{source_filename}");
                        }}
                    "#
                );

                let res = writer.write_all(test_case_code.as_bytes());
                assert!(res.is_ok());
            }
            Err(e) => println!("{:?}", e),
        }
    }
}

/// Generate test functions for cases we expect to run successfully through the interpreter,
/// comparing the program's standard output with a sibling `.expected` file.
fn generate_valid_program_tests() {
    let out_dir = std::env::var("OUT_DIR").unwrap(); // Set by cargo when running `cargo test`
    let generated_rs_filename = Path::new(&out_dir).join(VALID_TEST_CASES_FILENAME);
    let mut writer = BufWriter::new(File::create(generated_rs_filename).expect("Failed to create file"));

    let valid_tests_dir_path = get_tests_directory_path("valid");

    for entry in glob(&format!("{valid_tests_dir_path}/**/*.sl")).expect("Failed to read glob pattern") {
        match entry {
            Ok(source_file_path) => {
                let test_case_name = make_test_case_name(&valid_tests_dir_path, &source_file_path);
                let expected_file_path = source_file_path.with_extension("expected");
                let source_filename = source_file_path.into_os_string().into_string().expect("Invalid path");
                let expected_filename = expected_file_path.into_os_string().into_string().expect("Invalid path");

                let test_case_code = &format!(
                    r#"
                        #[test]
                        #[allow(non_snake_case)]
                        fn {test_case_name}() {{
                            run_source_file_and_compare_output("{source_filename}", "{expected_filename}");
                        }}
                    "#
                );

                let res = writer.write_all(test_case_code.as_bytes());
                assert!(res.is_ok());
            }
            Err(e) => println!("{:?}", e),
        }
    }
}

fn get_tests_directory_path(kind: &str) -> String {
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").expect("CARGO_MANIFEST_DIR should be set");
    Path::new(&manifest_dir).join("tests").join(kind).to_string_lossy().to_string()
}

/// Makes a unique, valid Rust identifier for a test case from its path below the tests directory.
fn make_test_case_name(tests_dir: &str, source_file_path: &PathBuf) -> String {
    let relative = source_file_path
        .strip_prefix(tests_dir)
        .expect("Test case path should be below the tests directory")
        .with_extension("");

    let mut name = String::new();
    for ch in relative.to_string_lossy().chars() {
        if ch.is_ascii_alphanumeric() || ch == '_' {
            name.push(ch);
        } else {
            name.push('_');
        }
    }
    name
}
