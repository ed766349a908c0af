// Copyright 2025 Neil Henderson, Blue Tarp Media.
//
//! The `options` module defines [DriverOptions], which control the compiler driver.

/// Options that control the driver.
#[derive(Debug, Default, Clone)]
pub struct DriverOptions {
    /// Stop after lexical analysis and print the token stream.
    pub lex: bool,

    /// Stop after parsing.
    pub parse: bool,

    /// Stop after semantic analysis.
    pub validate: bool,

    /// Print the AST after parsing.
    pub print_ast: bool,

    /// Stop after printing the TAC dumps.
    pub print_ir: bool,

    /// Skip the optimizer and generate code from the raw TAC.
    pub no_optimize: bool,

    /// Run the program with the tree-walking interpreter instead of generating C++.
    pub interpret: bool,

    /// The path for the generated C++ source. Defaults to `output.cpp`.
    pub output_file: Option<String>,
}

impl DriverOptions {
    /// The path the generated target source is written to.
    pub fn output_path(&self) -> &str {
        self.output_file.as_deref().unwrap_or("output.cpp")
    }
}
