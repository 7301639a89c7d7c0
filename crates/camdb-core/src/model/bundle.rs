// crates/camdb-core/src/model/bundle.rs
use super::camera::Camera;
use serde::{Deserialize, Serialize};

pub const FEED_ID: &str = "dukes-r8-camera-database";
pub const FEED_NAME: &str = "Dukes R8 Camera Database";
pub const FEED_DESCRIPTION: &str = "Community-sourced camera locations for Dukes R8 app";
pub const FEED_TYPE: &str = "camera";
pub const FEED_REFRESH_MINUTES: u32 = 1440;

/// Identifying metadata of the single feed inside a bundle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedMeta {
    pub id: String,
    pub name: String,
    pub description: String,
    pub kind: String,
    pub refresh_interval_minutes: u32,
}

impl Default for FeedMeta {
    fn default() -> Self {
        Self {
            id: FEED_ID.to_string(),
            name: FEED_NAME.to_string(),
            description: FEED_DESCRIPTION.to_string(),
            kind: FEED_TYPE.to_string(),
            refresh_interval_minutes: FEED_REFRESH_MINUTES,
        }
    }
}

impl FeedMeta {
    /// Same descriptor, with the description marked as sorted.
    pub fn sorted(&self) -> Self {
        Self {
            description: format!("{} (sorted)", self.description),
            ..self.clone()
        }
    }
}

/// One feed descriptor. Field order here is the order of keys in the
/// written file.
///
/// Metadata fields are listed here, not flattened from [`FeedMeta`]:
/// flattened numeric fields fail to deserialize under `arbitrary_precision`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feed {
    pub id: String,
    pub name: String,
    pub description: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(rename = "refreshIntervalMinutes")]
    pub refresh_interval_minutes: u32,
    #[serde(rename = "staticAlerts")]
    pub static_alerts: Vec<Camera>,
}

impl Feed {
    pub fn new(meta: FeedMeta, cameras: Vec<Camera>) -> Self {
        Self {
            id: meta.id,
            name: meta.name,
            description: meta.description,
            kind: meta.kind,
            refresh_interval_minutes: meta.refresh_interval_minutes,
            static_alerts: cameras,
        }
    }
}

/// The aggregated output document: `{ "feeds": [ <one feed> ] }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bundle {
    pub feeds: Vec<Feed>,
}

impl Bundle {
    pub fn single(meta: FeedMeta, cameras: Vec<Camera>) -> Self {
        Self {
            feeds: vec![Feed::new(meta, cameras)],
        }
    }

    /// Total cameras across all feeds.
    pub fn camera_count(&self) -> usize {
        self.feeds.iter().map(|f| f.static_alerts.len()).sum()
    }
}
