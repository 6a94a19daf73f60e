//! Weather chart redirect service library.
//!
//! Maps chart requests (area, day or forecast horizon, format) to JMA
//! upstream image URLs, either from the published manifest or by probing
//! computed archive paths.

pub mod clock;
pub mod config;
pub mod error;
pub mod handlers;
pub mod metrics;
pub mod router;
pub mod search;
pub mod selector;
pub mod state;
pub mod upstream;
