//! Tolerant GeoJSON extraction.
//!
//! The input is untrusted: features are validated one by one and malformed
//! records are dropped rather than failing the whole load. Scores are
//! clamped, text fields truncated, and the record count capped.

use std::collections::HashSet;
use std::path::Path;

use geo_types::Point;
use serde::Deserialize;
use serde_json::Value;

use crate::bench::{Bench, BenchId, Scores, MAX_BENCHES, NAME_MAX_CHARS, NOTES_MAX_CHARS};
use crate::error::{Error, Result};

const DEFAULT_NAME: &str = "Unnamed bench";

/// Top-level envelope. Only `features` matters; a missing or non-array
/// `features` fails the load as a whole.
#[derive(Deserialize)]
struct RawCollection {
    features: Option<Vec<Value>>,
}

/// Read and parse a GeoJSON file.
pub fn load_benches(path: &Path) -> Result<Vec<Bench>> {
    let text = std::fs::read_to_string(path)?;
    parse_benches(&text)
}

/// Parse a GeoJSON document into validated bench records.
///
/// Accepts at most [`MAX_BENCHES`] records and errors with
/// [`Error::NoBenches`] when nothing valid is found, so callers can
/// substitute the fallback dataset.
pub fn parse_benches(text: &str) -> Result<Vec<Bench>> {
    let collection: RawCollection = serde_json::from_str(text)?;
    let features = collection
        .features
        .ok_or_else(|| Error::InvalidGeoJson("missing `features` array".to_string()))?;

    let mut benches = Vec::new();
    let mut seen_ids = HashSet::new();
    for feature in &features {
        if benches.len() >= MAX_BENCHES {
            break;
        }
        if let Some(bench) = extract_bench(feature, &mut seen_ids) {
            benches.push(bench);
        }
    }

    if benches.is_empty() {
        return Err(Error::NoBenches);
    }
    Ok(benches)
}

/// Extract one bench from a feature, or `None` if the feature is unusable.
fn extract_bench(feature: &Value, seen_ids: &mut HashSet<u64>) -> Option<Bench> {
    let geometry = feature.get("geometry")?;
    if geometry.get("type").and_then(Value::as_str) != Some("Point") {
        return None;
    }
    let coordinates = geometry.get("coordinates")?.as_array()?;
    let lng = to_finite(coordinates.first()?)?;
    let lat = to_finite(coordinates.get(1)?)?;
    if !(-90.0..=90.0).contains(&lat) || !(-180.0..=180.0).contains(&lng) {
        return None;
    }

    let properties = feature.get("properties").and_then(Value::as_object);
    let property = |key: &str| properties.and_then(|props| props.get(key));

    let id = unique_id(property("id"), seen_ids);
    let name = short_text(&text_or(property("name"), DEFAULT_NAME), NAME_MAX_CHARS);
    let notes = short_text(&text_or(property("notes"), ""), NOTES_MAX_CHARS);

    let scores = Scores {
        comfort: property("comfort").and_then(to_finite),
        availability: property("availability").and_then(to_finite),
        scenery: property("scenery").and_then(to_finite),
        solitude: property("solitude").and_then(to_finite),
        crow_density: property("crow_density").and_then(to_finite),
    };

    Some(Bench::new(
        BenchId(id),
        name,
        Point::new(lng, lat),
        scores,
        notes,
    ))
}

/// Coerce a JSON value to a finite number. Numeric strings are accepted,
/// anything else is absent.
fn to_finite(value: &Value) -> Option<f64> {
    let n = match value {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    n.is_finite().then_some(n)
}

/// Coerce a JSON value to display text. Numbers are stringified; other
/// types fall back to the default.
fn text_or(value: Option<&Value>, default: &str) -> String {
    match value {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        _ => default.to_string(),
    }
}

/// Truncate to at most `max` characters, appending `…` when cut.
fn short_text(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let mut out: String = text.chars().take(max).collect();
    out.push('…');
    out
}

/// Resolve a record id: the supplied numeric id when present, a generated
/// one otherwise. Ids are unique within a load; collisions are regenerated.
fn unique_id(value: Option<&Value>, seen_ids: &mut HashSet<u64>) -> u64 {
    let supplied = value.and_then(|v| match v {
        Value::Number(n) => n.as_u64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    });

    let mut id = supplied.unwrap_or_else(|| u64::from(rand::random::<u32>()));
    while !seen_ids.insert(id) {
        id = u64::from(rand::random::<u32>());
    }
    id
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use serde_json::json;

    fn feature(id: u64, lng: f64, lat: f64) -> Value {
        json!({
            "type": "Feature",
            "geometry": { "type": "Point", "coordinates": [lng, lat] },
            "properties": { "id": id, "name": format!("Bench {id}"), "comfort": 5 }
        })
    }

    fn doc(features: Vec<Value>) -> String {
        json!({ "type": "FeatureCollection", "features": features }).to_string()
    }

    #[test]
    fn parses_valid_features() {
        let text = doc(vec![feature(1, -93.265, 44.9778), feature(2, -93.268, 44.98)]);
        let benches = parse_benches(&text).unwrap();

        assert_eq!(benches.len(), 2);
        assert_eq!(benches[0].id, BenchId(1));
        assert_eq!(benches[0].name, "Bench 1");
        assert_relative_eq!(benches[0].lng(), -93.265, epsilon = 1e-10);
        assert_relative_eq!(benches[0].lat(), 44.9778, epsilon = 1e-10);
        assert_eq!(benches[0].scores.comfort, Some(5.0));
    }

    #[test]
    fn clamps_scores_on_extraction() {
        let text = doc(vec![json!({
            "geometry": { "type": "Point", "coordinates": [0.0, 0.0] },
            "properties": { "id": 1, "comfort": 15, "scenery": -2 }
        })]);
        let benches = parse_benches(&text).unwrap();

        assert_eq!(benches[0].scores.comfort, Some(10.0));
        assert_eq!(benches[0].scores.scenery, Some(0.0));
        assert_eq!(benches[0].scores.solitude, None);
    }

    #[test]
    fn drops_malformed_geometry() {
        let text = doc(vec![
            json!({ "properties": { "id": 1 } }),
            json!({ "geometry": { "type": "LineString", "coordinates": [[0, 0], [1, 1]] } }),
            json!({ "geometry": { "type": "Point" } }),
            json!({ "geometry": { "type": "Point", "coordinates": [0.0] } }),
            json!({ "geometry": { "type": "Point", "coordinates": [0.0, 91.0] } }),
            json!({ "geometry": { "type": "Point", "coordinates": [-200.0, 0.0] } }),
            json!({ "geometry": { "type": "Point", "coordinates": ["east", 0.0] } }),
            feature(9, 10.0, 50.0),
        ]);
        let benches = parse_benches(&text).unwrap();

        assert_eq!(benches.len(), 1);
        assert_eq!(benches[0].id, BenchId(9));
    }

    #[test]
    fn coerces_numeric_strings() {
        let text = doc(vec![json!({
            "geometry": { "type": "Point", "coordinates": ["-93.265", "44.9778"] },
            "properties": { "id": "42", "comfort": "7.5" }
        })]);
        let benches = parse_benches(&text).unwrap();

        assert_eq!(benches[0].id, BenchId(42));
        assert_relative_eq!(benches[0].lat(), 44.9778, epsilon = 1e-10);
        assert_eq!(benches[0].scores.comfort, Some(7.5));
    }

    #[test]
    fn non_numeric_scores_are_absent() {
        let text = doc(vec![json!({
            "geometry": { "type": "Point", "coordinates": [0.0, 0.0] },
            "properties": { "id": 1, "comfort": "lovely", "scenery": null, "solitude": 6 }
        })]);
        let benches = parse_benches(&text).unwrap();

        assert_eq!(benches[0].scores.comfort, None);
        assert_eq!(benches[0].scores.scenery, None);
        assert_eq!(benches[0].scores.solitude, Some(6.0));
        assert_relative_eq!(benches[0].average.unwrap(), 6.0, epsilon = 1e-10);
    }

    #[test]
    fn defaults_name_and_notes() {
        let text = doc(vec![json!({
            "geometry": { "type": "Point", "coordinates": [0.0, 0.0] },
            "properties": { "id": 1, "name": { "nested": true } }
        })]);
        let benches = parse_benches(&text).unwrap();

        assert_eq!(benches[0].name, DEFAULT_NAME);
        assert_eq!(benches[0].notes, "");
    }

    #[test]
    fn truncates_long_text() {
        let long_name = "x".repeat(150);
        let text = doc(vec![json!({
            "geometry": { "type": "Point", "coordinates": [0.0, 0.0] },
            "properties": { "id": 1, "name": long_name, "notes": "é".repeat(1200) }
        })]);
        let benches = parse_benches(&text).unwrap();

        assert_eq!(benches[0].name.chars().count(), NAME_MAX_CHARS + 1);
        assert!(benches[0].name.ends_with('…'));
        assert_eq!(benches[0].notes.chars().count(), NOTES_MAX_CHARS + 1);
    }

    #[test]
    fn short_text_leaves_exact_length_alone() {
        let s = "y".repeat(NAME_MAX_CHARS);
        assert_eq!(short_text(&s, NAME_MAX_CHARS), s);
    }

    #[test]
    fn regenerates_duplicate_ids() {
        let text = doc(vec![feature(7, 0.0, 0.0), feature(7, 1.0, 1.0)]);
        let benches = parse_benches(&text).unwrap();

        assert_eq!(benches.len(), 2);
        assert_eq!(benches[0].id, BenchId(7));
        assert_ne!(benches[1].id, benches[0].id);
    }

    #[test]
    fn caps_record_count() {
        let features: Vec<Value> = (0..(MAX_BENCHES as u64 + 50))
            .map(|i| feature(i, 0.0, 0.0))
            .collect();
        let benches = parse_benches(&doc(features)).unwrap();

        assert_eq!(benches.len(), MAX_BENCHES);
    }

    #[test]
    fn empty_features_is_an_error() {
        assert!(matches!(parse_benches(&doc(vec![])), Err(Error::NoBenches)));
    }

    #[test]
    fn only_invalid_features_is_an_error() {
        let text = doc(vec![json!({ "geometry": null })]);
        assert!(matches!(parse_benches(&text), Err(Error::NoBenches)));
    }

    #[test]
    fn missing_features_is_an_error() {
        let text = json!({ "type": "FeatureCollection" }).to_string();
        assert!(matches!(parse_benches(&text), Err(Error::InvalidGeoJson(_))));
    }

    #[test]
    fn garbage_input_is_an_error() {
        assert!(matches!(parse_benches("not json"), Err(Error::Json(_))));
    }

    #[test]
    fn missing_file_is_an_error() {
        let err = load_benches(Path::new("/nonexistent/benches.geojson")).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
