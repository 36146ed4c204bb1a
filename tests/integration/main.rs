//! Integration tests for the Smaug Rust client.
//!
//! These tests drive the real HTTP client against a local wiremock server
//! that pages a fixed collection the way the service does (marker, limit,
//! sort key and direction), so every test is hermetic.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test --test integration
//!
//! # With client logs
//! RUST_LOG=smaug=debug cargo test --test integration -- --nocapture
//! ```

mod common;
mod error_tests;
mod paging_tests;
mod view_tests;
