//! The earthquake event record and the JSON envelope it arrives in.

use serde::Deserialize;
use serde_json::{Map, Value};

/// A single earthquake event as reported by the API.
///
/// `time` and `mag` are required by the pipeline but modelled as `Option` so
/// that decoding never fails on a sparse record; their presence is validated
/// at the aggregation boundary, where a missing field becomes a
/// [`crate::SchemaError`]. Any additional fields the API sends (depth,
/// coordinates, place names, ...) are carried along untouched in `extra`.
#[derive(Debug, Clone, Deserialize)]
pub struct EarthquakeEvent {
    pub time: Option<String>,
    pub mag: Option<f64>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Response envelope: `{ "earthquakes": [...] }`.
///
/// A missing `earthquakes` key decodes as an empty list, which the pipeline
/// reports as "no data" rather than as an error.
#[derive(Debug, Deserialize)]
pub(crate) struct QuakeEnvelope {
    #[serde(default)]
    pub earthquakes: Vec<EarthquakeEvent>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decodes_full_record() {
        let event: EarthquakeEvent = serde_json::from_value(json!({
            "time": "2025-03-28T06:20:52.000Z",
            "mag": 7.7,
            "depth": 10.0,
            "place": "Sagaing, Myanmar"
        }))
        .unwrap();
        assert_eq!(event.time.as_deref(), Some("2025-03-28T06:20:52.000Z"));
        assert_eq!(event.mag, Some(7.7));
        assert_eq!(event.extra.get("place"), Some(&json!("Sagaing, Myanmar")));
    }

    #[test]
    fn missing_required_fields_decode_as_none() {
        let event: EarthquakeEvent =
            serde_json::from_value(json!({ "depth": 12.5 })).unwrap();
        assert!(event.time.is_none());
        assert!(event.mag.is_none());
        assert_eq!(event.extra.get("depth"), Some(&json!(12.5)));
    }

    #[test]
    fn envelope_without_earthquakes_key_is_empty() {
        let envelope: QuakeEnvelope = serde_json::from_value(json!({})).unwrap();
        assert!(envelope.earthquakes.is_empty());
    }

    #[test]
    fn envelope_with_events_decodes_all_of_them() {
        let envelope: QuakeEnvelope = serde_json::from_value(json!({
            "earthquakes": [
                { "time": "2025-03-28T06:20:52Z", "mag": 7.7 },
                { "time": "2025-03-28T06:32:04Z", "mag": 6.4 }
            ]
        }))
        .unwrap();
        assert_eq!(envelope.earthquakes.len(), 2);
    }
}
