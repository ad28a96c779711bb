//! Integration tests for the shopadmin SDK.
//!
//! These tests run the public API end to end against a local wiremock
//! server that stands in for the store API, seeded with small catalogs.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test --test integration
//!
//! # With SDK logs
//! RUST_LOG=shopadmin=debug cargo test --test integration -- --nocapture
//! ```

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

mod auth_tests;
mod common;
mod crud_tests;
mod listing_tests;
