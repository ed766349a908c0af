// Copyright 2025 Neil Henderson, Blue Tarp Media.
//
//! The `compiler_driver` module wires the compilation stages together and owns the diagnostics
//! emitted along the way.

pub mod args;
pub mod diagnostics;

mod driver;
mod options;

#[cfg(test)]
mod tests;

pub use driver::Driver;
pub use options::DriverOptions;

use thiserror::Error;

/// Errors returned by the compiler driver.
#[derive(Debug, Error)]
pub enum DriverError {
    /// The source file could not be opened or read.
    #[error("Cannot open '{path}': {message}")]
    SourceFileUnreadable { path: String, message: String },

    /// A compilation stage failed. The details are recorded as diagnostics on the [Driver].
    #[error("Compilation failed")]
    CompilerFailed,

    /// The generated target source could not be written.
    #[error("Cannot write '{path}': {message}")]
    OutputFileUnwritable { path: String, message: String },
}
