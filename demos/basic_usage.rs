//! Basic usage example for camdb-rs
//!
//! Rebuilds both bundles from two in-memory regional files and prints the
//! resulting order.

use camdb_rs::loader::MemoryWorkspace;
use camdb_rs::{rebuild, Bundle, RebuildConfig, Result};

const TX: &str = r#"{"feeds":[{"id":"tx","staticAlerts":[
    {"state":"TX","city":"Houston","street":"Main St"},
    {"state":"TX","city":"Austin","street":"Lamar Blvd"}
]}]}"#;

const CA: &str = r#"{"feeds":[{"id":"ca","staticAlerts":[
    {"state":"CA","city":"Fresno","street":"Blackstone Ave"}
]}]}"#;

fn main() -> Result<()> {
    println!("=== camdb-rs Basic Usage Example ===\n");

    let mut ws = MemoryWorkspace::new()
        .with_file("Camera_Database_TX.json", TX)
        .with_file("Camera_Database_CA.json", CA);

    let config = RebuildConfig::default();
    let report = rebuild(&mut ws, &config)?;

    println!("Regions: {}", report.regions_processed().join(", "));
    println!("Cameras: {}\n", report.total_cameras);

    for name in [&config.bundle_filename, &config.sorted_bundle_filename] {
        let Some(bytes) = ws.get(name) else {
            continue;
        };
        let bundle: Bundle = serde_json::from_slice(bytes)?;
        println!("--- {name} ---");
        for cam in &bundle.feeds[0].static_alerts {
            println!("  {} / {} / {}", cam.state(), cam.city(), cam.street());
        }
    }

    Ok(())
}
