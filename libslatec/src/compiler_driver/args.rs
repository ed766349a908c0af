// Copyright 2025-2026 Neil Henderson
//
//! The `args` module defines the command-line argument parser.
//! Although crates like `clap` are excellent, we have a design goal to minimize dependencies on
//! third-party crates for the driver surface, and so slatec uses a custom argument parser.

use super::DriverOptions;

/// The outcome of parsing the command line.
#[derive(Debug)]
pub enum ParsedArgs {
    /// Compile (or interpret) the given source file.
    Run { source_file: String, options: DriverOptions },

    /// Help was requested.
    Help,

    /// The command line is invalid.
    Invalid(String),
}

/// Parses the command-line arguments (without the program name).
pub fn parse_command_line_args(mut args: impl Iterator<Item = String>) -> ParsedArgs {
    let mut source_file: Option<String> = None;
    let mut options = DriverOptions::default();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => return ParsedArgs::Help,

            "--lex" => options.lex = true,
            "--parse" => options.parse = true,
            "--validate" => options.validate = true,
            "--print-ast" => options.print_ast = true,
            "--print-ir" => options.print_ir = true,
            "--no-optimize" => options.no_optimize = true,
            "--interpret" => options.interpret = true,

            "-o" => match args.next() {
                Some(path) => options.output_file = Some(path),
                None => return ParsedArgs::Invalid("Option '-o' requires a value".to_string()),
            },

            other if other.starts_with('-') => {
                return ParsedArgs::Invalid(format!("Unknown option '{other}'"));
            }

            _ => {
                if source_file.is_some() {
                    return ParsedArgs::Invalid("Multiple source files specified".to_string());
                }
                source_file = Some(arg);
            }
        }
    }

    match source_file {
        Some(source_file) => ParsedArgs::Run { source_file, options },
        None => ParsedArgs::Invalid("No source file specified. Usage: slatec <source-file> [options]".to_string()),
    }
}

/// Prints the help text.
pub fn print_help() {
    println!("Usage: slatec <source-file> [options]");
    println!();
    println!("Options:");
    println!("  --lex            Stop after lexical analysis and print the tokens");
    println!("  --parse          Stop after parsing");
    println!("  --validate       Stop after semantic analysis");
    println!("  --print-ast      Print the AST after parsing");
    println!("  --print-ir       Stop after printing the TAC dumps");
    println!("  --no-optimize    Generate code from the unoptimized TAC");
    println!("  --interpret      Run the program with the tree-walking interpreter");
    println!("  -o <path>        Write the generated C++ to <path> (default: output.cpp)");
    println!("  -h, --help       Print this help");
}
