// Copyright 2025-2026 Neil Henderson

//! Integration test harness for the Slate compiler.

mod invalid_programs;
mod pipeline;
mod valid_programs;
