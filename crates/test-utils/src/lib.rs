//! Shared test utilities for the wxchart workspace.
//!
//! This crate provides:
//! - Deterministic UTC instants
//! - Manifest filenames and `list.json` payloads shaped like the JMA feed
//! - Assertion macros for redirect responses
//!
//! # Usage
//!
//! Add to your crate's `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! test-utils = { path = "../../crates/test-utils" }
//! ```
//!
//! Then import in your tests:
//!
//! ```ignore
//! use test_utils::{assert_redirect, sample_manifest_json, utc};
//! ```

pub mod fixtures;

pub use fixtures::*;

/// Assert that an HTTP response is a 301 redirect to `$location`.
///
/// Works with any response type exposing `status()` and `headers()` in the
/// `http` crate style, e.g. axum or reqwest responses.
///
/// # Usage
///
/// ```ignore
/// use test_utils::assert_redirect;
///
/// assert_redirect!(response, "https://example.com/chart.png");
/// ```
#[macro_export]
macro_rules! assert_redirect {
    ($response:expr, $location:expr) => {{
        let response = &$response;
        assert_eq!(
            response.status().as_u16(),
            301,
            "expected a permanent redirect"
        );
        let location = response
            .headers()
            .get("location")
            .expect("redirect without a location header")
            .to_str()
            .expect("location header is not ASCII");
        assert_eq!(location, $location);
    }};
}
