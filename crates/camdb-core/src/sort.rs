// crates/camdb-core/src/sort.rs
use crate::model::Camera;

/// Returns a copy of `cameras` ordered by uppercased `(state, city, street)`.
///
/// The sort is stable: cameras with equal keys keep their input order. Keys
/// are computed once per camera. Comparison is by Unicode code point after
/// uppercasing, with missing fields sorting as `""`.
pub fn sort_cameras(cameras: &[Camera]) -> Vec<Camera> {
    let mut sorted = cameras.to_vec();
    sorted.sort_by_cached_key(Camera::sort_key);
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn cam(state: &str, city: &str, street: &str, id: u32) -> Camera {
        Camera::new(json!({ "state": state, "city": city, "street": street, "id": id }))
    }

    fn ids(cams: &[Camera]) -> Vec<u64> {
        cams.iter()
            .map(|c| c.as_value()["id"].as_u64().unwrap())
            .collect()
    }

    #[test]
    fn orders_by_state_city_street_case_insensitively() {
        let input = vec![
            cam("TX", "Austin", "Lamar", 1),
            cam("ca", "fresno", "Main", 2),
            cam("CA", "Fresno", "blackstone", 3),
            cam("ca", "Anaheim", "Katella", 4),
        ];
        assert_eq!(ids(&sort_cameras(&input)), vec![4, 3, 2, 1]);
    }

    #[test]
    fn equal_keys_keep_input_order() {
        let input = vec![
            cam("TX", "Austin", "Lamar", 1),
            cam("tx", "AUSTIN", "lamar", 2),
            cam("CA", "LA", "Sunset", 3),
            cam("Tx", "austin", "LAMAR", 4),
        ];
        assert_eq!(ids(&sort_cameras(&input)), vec![3, 1, 2, 4]);
    }

    #[test]
    fn missing_fields_sort_first() {
        let input = vec![
            cam("AZ", "Phoenix", "Van Buren", 1),
            Camera::new(json!({ "id": 2, "city": "Nowhere" })),
            Camera::new(json!({ "id": 3 })),
        ];
        assert_eq!(ids(&sort_cameras(&input)), vec![3, 2, 1]);
    }

    #[test]
    fn input_is_left_untouched() {
        let input = vec![cam("TX", "a", "b", 1), cam("CA", "a", "b", 2)];
        let _ = sort_cameras(&input);
        assert_eq!(ids(&input), vec![1, 2]);
    }
}
