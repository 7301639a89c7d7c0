// crates/camdb-core/src/error.rs
use thiserror::Error;

/// Run-level failures. Anything surfacing as a `BundleError` aborts the
/// rebuild; per-file problems are reported as [`crate::SkipReason`] instead.
#[derive(Debug, Error)]
pub enum BundleError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Not found: {0}")]
    NotFound(String),
}

pub type Result<T> = std::result::Result<T, BundleError>;
