// crates/camdb-core/src/builder.rs

//! # Bundle builder
//!
//! The linear pipeline: discover, load, write the unsorted bundle, sort a
//! copy, write the sorted bundle. Progress goes through the `log` facade so
//! the caller decides where it ends up.

use crate::common::RebuildReport;
use crate::config::RebuildConfig;
use crate::error::Result;
use crate::loader::{collect_regions, discover_inputs, DirWorkspace};
use crate::model::Bundle;
use crate::sort::sort_cameras;
use crate::traits::Workspace;
use std::path::Path;

/// Rebuilds both bundles inside `workspace`.
///
/// Per-file problems are skipped and listed in the report. Failing to list
/// the inputs or to write either bundle aborts with an error; the unsorted
/// bundle may already have been written by then.
///
/// # Example
///
/// ```rust
/// use camdb_core::loader::MemoryWorkspace;
/// use camdb_core::{rebuild, RebuildConfig};
///
/// let mut ws = MemoryWorkspace::new().with_file(
///     "Camera_Database_TX.json",
///     r#"{"feeds":[{"staticAlerts":[{"state":"TX","city":"Austin","street":"Lamar"}]}]}"#,
/// );
///
/// let report = rebuild(&mut ws, &RebuildConfig::default()).unwrap();
/// assert_eq!(report.total_cameras, 1);
/// assert!(ws.get("Camera_Database_Bundle_Sorted.json").is_some());
/// ```
pub fn rebuild<W: Workspace + ?Sized>(
    workspace: &mut W,
    config: &RebuildConfig,
) -> Result<RebuildReport> {
    let names = discover_inputs(&*workspace, config)?;
    log::info!("📁 Found {} regional database files", names.len());

    let collected = collect_regions(&*workspace, config, &names);
    let report = RebuildReport {
        files_found: names.len(),
        outcomes: collected.outcomes,
        total_cameras: collected.cameras.len(),
        bundle_path: workspace.display_path(&config.bundle_filename),
        sorted_bundle_path: workspace.display_path(&config.sorted_bundle_filename),
    };
    let total = report.total_cameras;
    log::info!("\n📊 Total cameras collected: {total}");
    log::info!("📍 Regions processed: {}", report.regions_processed().join(", "));

    // 1. Unsorted, in file-then-record order
    log::info!("\n💾 Writing {}...", report.bundle_path);
    let bundle = Bundle::single(config.feed.clone(), collected.cameras);
    write_bundle(workspace, &config.bundle_filename, &bundle)?;
    log::info!("   ✅ Saved {total} cameras to bundle");

    // 2. Sorted copy
    log::info!("\n🔀 Sorting cameras...");
    let sorted = sort_cameras(&bundle.feeds[0].static_alerts);

    log::info!("💾 Writing {}...", report.sorted_bundle_path);
    let sorted_bundle = Bundle::single(config.feed.sorted(), sorted);
    write_bundle(workspace, &config.sorted_bundle_filename, &sorted_bundle)?;
    log::info!("   ✅ Saved {} sorted cameras to bundle", sorted_bundle.camera_count());

    log::info!("\n✅ Bundle rebuild complete!");
    Ok(report)
}

/// [`rebuild`] on a directory with the default configuration.
pub fn rebuild_dir(dir: impl AsRef<Path>) -> Result<RebuildReport> {
    let mut workspace = DirWorkspace::open(dir)?;
    rebuild(&mut workspace, &RebuildConfig::default())
}

/// Pretty-printed UTF-8 JSON, two-space indent, non-ASCII kept verbatim, no
/// trailing newline. Identical input always renders identical bytes.
pub fn render_bundle(bundle: &Bundle) -> Result<Vec<u8>> {
    Ok(serde_json::to_vec_pretty(bundle)?)
}

pub fn write_bundle<W: Workspace + ?Sized>(
    workspace: &mut W,
    name: &str,
    bundle: &Bundle,
) -> Result<()> {
    let bytes = render_bundle(bundle)?;
    workspace.write(name, &bytes)
}
