use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for camdb. Every flag is optional; a bare `camdb` rebuilds
/// the bundles in the current directory.
#[derive(Debug, Parser)]
#[command(
    name = "camdb",
    version,
    about = "Rebuild the camera database bundles from the regional Camera_Database_*.json files"
)]
pub struct CliArgs {
    /// Directory holding the regional files; bundles are written here too
    #[arg(short = 'd', long = "dir", default_value = ".")]
    pub dir: PathBuf,

    /// Diagnostic verbosity: error, warn, info, debug or trace
    #[arg(short = 'l', long = "log-level", default_value = "info")]
    pub log_level: String,
}
