// crates/camdb-core/src/model/mod.rs

//! # Data model
//!
//! Cameras are carried as loosely-typed JSON so regional files with extra or
//! unusual fields survive the rebuild untouched. Only the bundle envelope has
//! a fixed shape.

pub mod bundle;
pub mod camera;
pub mod regional;

pub use bundle::{Bundle, Feed, FeedMeta};
pub use camera::{Camera, SortKey};
pub use regional::{RegionalDataset, SkipReason};
