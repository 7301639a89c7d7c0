// crates/camdb-core/src/common.rs
use crate::model::SkipReason;
use serde::{Deserialize, Serialize};

/// What happened to one regional file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegionOutcome {
    Loaded { region: String, cameras: usize },
    Skipped { region: String, reason: SkipReason },
}

impl RegionOutcome {
    pub fn region(&self) -> &str {
        match self {
            Self::Loaded { region, .. } | Self::Skipped { region, .. } => region,
        }
    }
}

/// Simple aggregate counts for a finished rebuild.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BundleStats {
    pub regions: usize,
    pub skipped: usize,
    pub cameras: usize,
}

/// Result of a successful rebuild.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RebuildReport {
    /// Regional files discovered, whether or not they loaded.
    pub files_found: usize,
    pub outcomes: Vec<RegionOutcome>,
    /// Cameras written to each bundle.
    pub total_cameras: usize,
    pub bundle_path: String,
    pub sorted_bundle_path: String,
}

impl RebuildReport {
    /// Regions that contributed cameras, in processing order.
    pub fn regions_processed(&self) -> Vec<&str> {
        self.outcomes
            .iter()
            .filter_map(|o| match o {
                RegionOutcome::Loaded { region, .. } => Some(region.as_str()),
                RegionOutcome::Skipped { .. } => None,
            })
            .collect()
    }

    pub fn skipped(&self) -> Vec<(&str, &SkipReason)> {
        self.outcomes
            .iter()
            .filter_map(|o| match o {
                RegionOutcome::Skipped { region, reason } => Some((region.as_str(), reason)),
                RegionOutcome::Loaded { .. } => None,
            })
            .collect()
    }

    pub fn stats(&self) -> BundleStats {
        let regions = self.regions_processed().len();
        BundleStats {
            regions,
            skipped: self.outcomes.len() - regions,
            cameras: self.total_cameras,
        }
    }
}
