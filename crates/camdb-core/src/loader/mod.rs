// crates/camdb-core/src/loader/mod.rs

//! # Regional loader
//!
//! Discovers the regional camera files in a [`Workspace`] and pulls their
//! cameras into one ordered list. A file that cannot be read or lacks the
//! expected structure is logged and skipped; it never aborts the run.

use crate::common::RegionOutcome;
use crate::config::RebuildConfig;
use crate::error::Result;
use crate::model::{Camera, RegionalDataset, SkipReason};
use crate::traits::Workspace;

mod common_io;

pub use common_io::{DirWorkspace, MemoryWorkspace};

/// All cameras gathered from the regional files, in file-then-record order,
/// along with what happened to each file.
#[derive(Debug, Clone, Default)]
pub struct Collected {
    pub cameras: Vec<Camera>,
    pub outcomes: Vec<RegionOutcome>,
}

/// Regional input names in ascending byte order.
///
/// Listing failure is fatal; everything after this point is per-file.
pub fn discover_inputs<W: Workspace + ?Sized>(
    workspace: &W,
    config: &RebuildConfig,
) -> Result<Vec<String>> {
    let mut names: Vec<String> = workspace
        .list()?
        .into_iter()
        .filter(|name| config.is_regional_input(name))
        .collect();
    names.sort();
    log::debug!("Regional candidates: {names:?}");
    Ok(names)
}

/// Reads one regional file and extracts its cameras.
pub fn load_region<W: Workspace + ?Sized>(
    workspace: &W,
    name: &str,
) -> std::result::Result<Vec<Camera>, SkipReason> {
    let bytes = workspace
        .read(name)
        .map_err(|e| SkipReason::Unreadable(e.to_string()))?;
    RegionalDataset::from_slice(&bytes)?.into_cameras()
}

/// Loads every named file in order, appending cameras from the ones that
/// succeed.
pub fn collect_regions<W: Workspace + ?Sized>(
    workspace: &W,
    config: &RebuildConfig,
    names: &[String],
) -> Collected {
    let mut collected = Collected::default();

    for name in names {
        let region = config.region_name(name);
        log::info!("   Loading {region}...");

        match load_region(workspace, name) {
            Ok(cameras) => {
                log::info!("      ✅ Added {} cameras from {region}", cameras.len());
                collected.outcomes.push(RegionOutcome::Loaded {
                    region,
                    cameras: cameras.len(),
                });
                collected.cameras.extend(cameras);
            }
            Err(reason) => {
                match &reason {
                    SkipReason::NoFeeds => log::warn!("      ⚠️ No feeds in {region}"),
                    SkipReason::NoStaticAlerts => {
                        log::warn!("      ⚠️ No staticAlerts in {region}")
                    }
                    other => log::warn!("      ❌ Error loading {region}: {other}"),
                }
                collected
                    .outcomes
                    .push(RegionOutcome::Skipped { region, reason });
            }
        }
    }

    collected
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feed(cities: &[&str]) -> String {
        let alerts: Vec<String> = cities
            .iter()
            .map(|c| format!(r#"{{"city":"{c}"}}"#))
            .collect();
        format!(r#"{{"feeds":[{{"staticAlerts":[{}]}}]}}"#, alerts.join(","))
    }

    #[test]
    fn discovery_filters_and_sorts() {
        let ws = MemoryWorkspace::new()
            .with_file("Camera_Database_TX.json", feed(&["Austin"]))
            .with_file("Camera_Database_CA.json", feed(&["Fresno"]))
            .with_file("Camera_Database_Bundle.json", feed(&["dup"]))
            .with_file("Camera_Database_Bundle_Sorted.json", feed(&["dup"]))
            .with_file("notes.txt", "hello");

        let names = discover_inputs(&ws, &RebuildConfig::default()).unwrap();
        assert_eq!(names, vec!["Camera_Database_CA.json", "Camera_Database_TX.json"]);
    }

    #[test]
    fn collect_skips_bad_files_and_keeps_order() {
        let ws = MemoryWorkspace::new()
            .with_file("Camera_Database_A.json", feed(&["a1", "a2"]))
            .with_file("Camera_Database_B.json", "{ not json")
            .with_file("Camera_Database_C.json", r#"{"feeds":[]}"#)
            .with_file("Camera_Database_D.json", feed(&["d1"]));
        let cfg = RebuildConfig::default();
        let names = discover_inputs(&ws, &cfg).unwrap();

        let collected = collect_regions(&ws, &cfg, &names);
        let cities: Vec<&str> = collected.cameras.iter().map(Camera::city).collect();
        assert_eq!(cities, vec!["a1", "a2", "d1"]);

        assert_eq!(collected.outcomes.len(), 4);
        assert!(matches!(
            &collected.outcomes[1],
            RegionOutcome::Skipped { region, reason: SkipReason::Malformed(_) } if region == "B"
        ));
        assert!(matches!(
            &collected.outcomes[2],
            RegionOutcome::Skipped { reason: SkipReason::NoFeeds, .. }
        ));
    }

    #[test]
    fn unreadable_file_is_skipped() {
        let ws = MemoryWorkspace::new();
        let err = load_region(&ws, "Camera_Database_GONE.json").unwrap_err();
        assert!(matches!(err, SkipReason::Unreadable(_)));
    }
}
