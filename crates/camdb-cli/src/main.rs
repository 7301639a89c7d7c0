//! camdb — rebuild the camera database bundles
//!
//! Reads every `Camera_Database_<REGION>.json` in a directory and writes
//! `Camera_Database_Bundle.json` (input order) and
//! `Camera_Database_Bundle_Sorted.json` (by state, city, street) beside them.
//!
//! Usage examples
//! --------------
//!
//! - Rebuild in the current directory
//!   $ camdb
//!
//! - Rebuild somewhere else, with discovery details
//!   $ camdb --dir data/cameras --log-level debug
//!
//! Regional files that fail to parse are reported and skipped. The process
//! exits with status 1 only when the run itself fails, e.g. when a bundle
//! cannot be written.
mod args;

use crate::args::CliArgs;
use anyhow::Context;
use clap::Parser;
use std::io::Write;

fn main() {
    let args = CliArgs::parse();
    setup_logging(&args.log_level);

    match run(&args) {
        Ok(count) => println!("\n🎉 Successfully rebuilt bundles with {count} cameras"),
        Err(e) => {
            println!("\n❌ Error rebuilding bundles: {e:#}");
            std::process::exit(1);
        }
    }
}

fn run(args: &CliArgs) -> anyhow::Result<usize> {
    let report = camdb_core::rebuild_dir(&args.dir)
        .with_context(|| format!("rebuild failed in {}", args.dir.display()))?;

    for (region, reason) in report.skipped() {
        log::debug!("Skipped {region}: {reason}");
    }
    Ok(report.total_cameras)
}

/// Progress is part of the tool's normal output, so messages go to stdout
/// as-is, without level or timestamp decoration.
fn setup_logging(level: &str) {
    let level = match level.to_lowercase().as_str() {
        "trace" => log::LevelFilter::Trace,
        "debug" => log::LevelFilter::Debug,
        "info" => log::LevelFilter::Info,
        "warn" => log::LevelFilter::Warn,
        "error" => log::LevelFilter::Error,
        _ => log::LevelFilter::Info,
    };

    env_logger::Builder::new()
        .filter_level(level)
        .target(env_logger::Target::Stdout)
        .format(|buf, record| writeln!(buf, "{}", record.args()))
        .init();
}
