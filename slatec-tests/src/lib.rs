// Copyright 2025-2026 Neil Henderson
//
//! The `slatec-tests` crate holds the integration test suite; see the `tests` directory.
