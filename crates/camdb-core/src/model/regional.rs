// crates/camdb-core/src/model/regional.rs
use super::camera::Camera;
use serde_json::Value;
use thiserror::Error;

/// Why a regional file contributed nothing to the bundle.
///
/// None of these abort the run; the file is skipped and the reason reported.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SkipReason {
    #[error("{0}")]
    Unreadable(String),

    #[error("{0}")]
    Malformed(String),

    #[error("no feeds")]
    NoFeeds,

    #[error("no staticAlerts")]
    NoStaticAlerts,

    #[error("staticAlerts is not an array")]
    NotAnArray,
}

/// A parsed regional file, `{ "feeds": [ { "staticAlerts": [...] } ] }`.
///
/// Kept as an untyped document: the only structure this crate relies on is
/// `feeds[0].staticAlerts`, checked in [`RegionalDataset::into_cameras`].
#[derive(Debug, Clone, PartialEq)]
pub struct RegionalDataset(Value);

impl RegionalDataset {
    pub fn from_slice(bytes: &[u8]) -> Result<Self, SkipReason> {
        serde_json::from_slice(bytes)
            .map(Self)
            .map_err(|e| SkipReason::Malformed(e.to_string()))
    }

    /// Takes the cameras out of the first feed, preserving their order.
    ///
    /// Feeds after the first are ignored.
    pub fn into_cameras(self) -> Result<Vec<Camera>, SkipReason> {
        let feed = match self.0 {
            Value::Object(mut doc) => match doc.remove("feeds") {
                Some(Value::Array(feeds)) => feeds.into_iter().next(),
                _ => None,
            },
            _ => None,
        }
        .ok_or(SkipReason::NoFeeds)?;

        let alerts = match feed {
            Value::Object(mut feed) => feed.remove("staticAlerts"),
            _ => None,
        }
        .ok_or(SkipReason::NoStaticAlerts)?;

        match alerts {
            Value::Array(items) => Ok(items.into_iter().map(Camera::from).collect()),
            _ => Err(SkipReason::NotAnArray),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cameras(text: &str) -> Result<Vec<Camera>, SkipReason> {
        RegionalDataset::from_slice(text.as_bytes())?.into_cameras()
    }

    #[test]
    fn extracts_static_alerts_from_first_feed() {
        let cams = cameras(
            r#"{"feeds":[{"id":"tx","staticAlerts":[{"city":"Austin"},{"city":"Dallas"}]},
                         {"staticAlerts":[{"city":"ignored"}]}]}"#,
        )
        .unwrap();
        assert_eq!(cams.len(), 2);
        assert_eq!(cams[0].city(), "Austin");
        assert_eq!(cams[1].city(), "Dallas");
    }

    #[test]
    fn empty_static_alerts_is_not_a_skip() {
        assert_eq!(cameras(r#"{"feeds":[{"staticAlerts":[]}]}"#).unwrap().len(), 0);
    }

    #[test]
    fn missing_structure_is_reported() {
        assert_eq!(cameras(r#"{}"#).unwrap_err(), SkipReason::NoFeeds);
        assert_eq!(cameras(r#"{"feeds":[]}"#).unwrap_err(), SkipReason::NoFeeds);
        assert_eq!(cameras(r#"{"feeds":{}}"#).unwrap_err(), SkipReason::NoFeeds);
        assert_eq!(cameras(r#"[1,2,3]"#).unwrap_err(), SkipReason::NoFeeds);
        assert_eq!(
            cameras(r#"{"feeds":[{"id":"x"}]}"#).unwrap_err(),
            SkipReason::NoStaticAlerts
        );
        assert_eq!(
            cameras(r#"{"feeds":["x"]}"#).unwrap_err(),
            SkipReason::NoStaticAlerts
        );
        assert_eq!(
            cameras(r#"{"feeds":[{"staticAlerts":{"a":1}}]}"#).unwrap_err(),
            SkipReason::NotAnArray
        );
    }

    #[test]
    fn malformed_json_is_reported() {
        assert!(matches!(
            cameras(r#"{"feeds": [ "#),
            Err(SkipReason::Malformed(_))
        ));
    }
}
