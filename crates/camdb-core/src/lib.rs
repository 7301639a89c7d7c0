// crates/camdb-core/src/lib.rs

//! # camdb-core
//!
//! Rebuilds the Dukes R8 camera database bundles from regional files.
//!
//! Every `Camera_Database_<REGION>.json` in a directory is read, the cameras
//! from `feeds[0].staticAlerts` are concatenated in filename order, and two
//! bundles are written next to them:
//!
//! - `Camera_Database_Bundle.json`: cameras in input order
//! - `Camera_Database_Bundle_Sorted.json`: cameras ordered by state, city and
//!   street, compared case-insensitively
//!
//! Regional files that cannot be parsed or lack the expected structure are
//! skipped with a diagnostic. See [`rebuild`] and [`rebuild_dir`].

pub mod builder;
pub mod common;
pub mod config;
pub mod error;
pub mod loader;
pub mod model;
pub mod sort;
pub mod traits;

// Re-exports
pub use crate::builder::{rebuild, rebuild_dir, render_bundle, write_bundle};
pub use crate::common::{BundleStats, RebuildReport, RegionOutcome};
pub use crate::config::RebuildConfig;
pub use crate::error::{BundleError, Result};
pub use crate::model::{Bundle, Camera, Feed, FeedMeta, SkipReason};
pub use crate::sort::sort_cameras;
pub use crate::traits::Workspace;
