//! Integration tests for fwid
//!
//! Properties that only make sense over the whole builtin catalog, exercised
//! through the public APIs of `fwid-core`, `fwid-catalog` and `fwid-match`.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p fwid-tests
//! ```
//!
//! # Test Structure
//!
//! - `parser_test.rs` - Firmware string parser spot checks
//! - `catalog_test.rs` - Load-time invariants over the builtin catalog
//! - `fuzzy_match_test.rs` - Self-matching and the ambiguity audit

// This crate only contains tests, no library code
