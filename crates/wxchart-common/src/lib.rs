//! Common types and utilities for resolving JMA weather chart URLs.
//!
//! Everything in this crate is pure: formatting, slot snapping and path
//! building never touch the network. Fetching manifests and probing
//! candidate URLs lives in the redirect service.

pub mod chart;
pub mod error;
pub mod manifest;
pub mod path;
pub mod time;

pub use chart::{Area, ChartSpec, ColorMode, Extension, Horizon};
pub use error::{ChartError, ChartResult};
pub use manifest::{slot_from_filename, Manifest, ManifestGroup};
pub use path::{resolve_path, PathResolver};
pub use time::{full_timestamp, year_month, PublicationSlot};
