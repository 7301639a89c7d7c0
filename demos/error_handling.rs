//! Error handling example for camdb-rs
//!
//! Shows how broken regional files are skipped while the rest still make it
//! into the bundles, and what a fatal error looks like.

use camdb_rs::loader::MemoryWorkspace;
use camdb_rs::{rebuild, rebuild_dir, RebuildConfig, Result};

fn main() -> Result<()> {
    println!("=== camdb-rs Error Handling Example ===\n");

    println!("--- Example 1: Skipping broken regional files ---");
    let mut ws = MemoryWorkspace::new()
        .with_file(
            "Camera_Database_AZ.json",
            r#"{"feeds":[{"staticAlerts":[{"state":"AZ","city":"Tempe","street":"Mill Ave"}]}]}"#,
        )
        .with_file("Camera_Database_BAD.json", "{ this is not json")
        .with_file("Camera_Database_EMPTY.json", r#"{"feeds":[]}"#)
        .with_file("Camera_Database_NOALERTS.json", r#"{"feeds":[{"id":"x"}]}"#);

    let report = rebuild(&mut ws, &RebuildConfig::default())?;
    println!("  Loaded: {}", report.regions_processed().join(", "));
    for (region, reason) in report.skipped() {
        println!("  Skipped {region}: {reason}");
    }
    println!("  Cameras written: {}", report.total_cameras);
    println!();

    println!("--- Example 2: A fatal error ---");
    match rebuild_dir("/definitely/not/a/camera/dir") {
        Ok(_) => println!("  Unexpectedly succeeded"),
        Err(e) => println!("  ✗ Rebuild aborted: {e}"),
    }

    Ok(())
}
