//! Workspace host crate. Re-exports [`camdb_core`] so the demos under
//! `demos/` can be run with `cargo run --example <name>` from the root.

pub use camdb_core::*;
