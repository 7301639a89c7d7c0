// crates/camdb-core/src/model/camera.rs
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Uppercased `(state, city, street)` triple used to order the sorted bundle.
pub type SortKey = (String, String, String);

/// One camera record, kept as the raw JSON value it was read from.
///
/// `state`, `city` and `street` are read for ordering only; every field is
/// written back out unchanged and in its original order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Camera(Value);

impl Camera {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    /// String value of `key`, or `""` when the key is absent, the value is
    /// not a string, or the record is not an object.
    #[inline]
    pub fn field(&self, key: &str) -> &str {
        self.0.get(key).and_then(Value::as_str).unwrap_or("")
    }

    pub fn state(&self) -> &str {
        self.field("state")
    }

    pub fn city(&self) -> &str {
        self.field("city")
    }

    pub fn street(&self) -> &str {
        self.field("street")
    }

    pub fn sort_key(&self) -> SortKey {
        (
            self.state().to_uppercase(),
            self.city().to_uppercase(),
            self.street().to_uppercase(),
        )
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }
}

impl From<Value> for Camera {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn missing_and_non_string_fields_read_as_empty() {
        let cam = Camera::new(json!({ "state": "TX", "city": null, "street": 12 }));
        assert_eq!(cam.state(), "TX");
        assert_eq!(cam.city(), "");
        assert_eq!(cam.street(), "");
        assert_eq!(Camera::new(json!("not an object")).state(), "");
    }

    #[test]
    fn sort_key_is_uppercased() {
        let cam = Camera::new(json!({ "state": "tx", "city": "Austin", "street": "Congress Ave" }));
        assert_eq!(
            cam.sort_key(),
            ("TX".to_string(), "AUSTIN".to_string(), "CONGRESS AVE".to_string())
        );

        let unicode = Camera::new(json!({ "state": "qc", "city": "montréal", "street": "straße" }));
        assert_eq!(unicode.sort_key().1, "MONTRÉAL");
        assert_eq!(unicode.sort_key().2, "STRASSE");
    }

    #[test]
    fn serializes_transparently() {
        let raw = json!({ "street": "Main St", "state": "CA", "lat": 34.05 });
        let cam = Camera::from(raw.clone());
        assert_eq!(serde_json::to_value(&cam).unwrap(), raw);
    }
}
