//! Integration tests for arcstretch crates.
//!
//! These tests generate real `.cube` files in temporary directories and
//! check them as text, as parsed tables, and as byte hashes.
