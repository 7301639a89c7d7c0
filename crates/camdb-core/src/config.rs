// crates/camdb-core/src/config.rs

//! # Rebuild configuration
//!
//! File naming rules and the fixed feed descriptor. [`RebuildConfig::default`]
//! reproduces the layout the Dukes R8 app expects; tests and demos override
//! individual fields.

use crate::model::FeedMeta;
use std::path::Path;

pub const INPUT_PREFIX: &str = "Camera_Database_";
pub const INPUT_SUFFIX: &str = ".json";
/// Any candidate whose name contains this marker is already an aggregate.
pub const BUNDLE_MARKER: &str = "Bundle";
pub const BUNDLE_FILENAME: &str = "Camera_Database_Bundle.json";
pub const SORTED_BUNDLE_FILENAME: &str = "Camera_Database_Bundle_Sorted.json";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RebuildConfig {
    pub input_prefix: String,
    pub input_suffix: String,
    pub exclude_marker: String,
    pub bundle_filename: String,
    pub sorted_bundle_filename: String,
    pub feed: FeedMeta,
}

impl Default for RebuildConfig {
    fn default() -> Self {
        Self {
            input_prefix: INPUT_PREFIX.to_string(),
            input_suffix: INPUT_SUFFIX.to_string(),
            exclude_marker: BUNDLE_MARKER.to_string(),
            bundle_filename: BUNDLE_FILENAME.to_string(),
            sorted_bundle_filename: SORTED_BUNDLE_FILENAME.to_string(),
            feed: FeedMeta::default(),
        }
    }
}

impl RebuildConfig {
    /// Matches `<prefix>*<suffix>` and rejects bundle outputs.
    ///
    /// The wildcard may be empty, so `Camera_Database_.json` is a candidate.
    pub fn is_regional_input(&self, file_name: &str) -> bool {
        file_name.len() >= self.input_prefix.len() + self.input_suffix.len()
            && file_name.starts_with(&self.input_prefix)
            && file_name.ends_with(&self.input_suffix)
            && !file_name.contains(&self.exclude_marker)
    }

    /// Region identifier: the file stem with every occurrence of the prefix
    /// removed (`Camera_Database_TX.json` -> `TX`).
    pub fn region_name(&self, file_name: &str) -> String {
        let stem = Path::new(file_name)
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        stem.replace(&self.input_prefix, "")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_regional_files_only() {
        let cfg = RebuildConfig::default();
        assert!(cfg.is_regional_input("Camera_Database_TX.json"));
        assert!(cfg.is_regional_input("Camera_Database_.json"));
        assert!(!cfg.is_regional_input("Camera_Database_Bundle.json"));
        assert!(!cfg.is_regional_input("Camera_Database_Bundle_Sorted.json"));
        assert!(!cfg.is_regional_input("Camera_Database_TX.json.bak"));
        assert!(!cfg.is_regional_input("camera_database_TX.json"));
        assert!(!cfg.is_regional_input("Camera_Database.json"));
    }

    #[test]
    fn region_name_strips_prefix_and_extension() {
        let cfg = RebuildConfig::default();
        assert_eq!(cfg.region_name("Camera_Database_TX.json"), "TX");
        assert_eq!(cfg.region_name("Camera_Database_New_York.json"), "New_York");
        assert_eq!(cfg.region_name("Camera_Database_.json"), "");
    }
}
