use std::collections::BTreeSet;

use serde::Serialize;
use serde_json::{Map, Value};

use crate::models::{root_type, FEATURE_COLLECTION};

/// Property inspected for distinct values unless told otherwise.
pub const DEFAULT_VALUE_KEY: &str = "essence";

/// Label used when a root or geometry `type` is missing.
pub const UNKNOWN_TYPE: &str = "unknown";

/// Statistics gathered from a feature collection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CollectionStats {
    pub feature_count: usize,
    /// Properties of the first feature; `None` for an empty collection
    pub first_properties: Option<Map<String, Value>>,
    /// Geometry types with their counts, in first-seen order
    pub geometry_types: Vec<(String, usize)>,
    /// Every property key found on any feature
    pub property_keys: BTreeSet<String>,
    /// First feature as a raw JSON value
    pub first_feature: Option<Value>,
    /// Property inspected for distinct values
    pub value_key: String,
    /// Distinct non-null values found under `value_key`
    pub distinct_values: BTreeSet<String>,
}

impl CollectionStats {
    /// Compute statistics over the raw `features` array of a document.
    ///
    /// Features are read member by member, so an entry with an odd `type`,
    /// a `null` geometry or no properties is still counted.
    pub fn compute(features: &[Value], value_key: &str) -> Self {
        let mut geometry_types: Vec<(String, usize)> = Vec::new();
        let mut property_keys = BTreeSet::new();
        let mut distinct_values = BTreeSet::new();

        for feature in features {
            let geometry = geometry_label(feature);
            match geometry_types.iter_mut().find(|(t, _)| *t == geometry) {
                Some((_, count)) => *count += 1,
                None => geometry_types.push((geometry, 1)),
            }

            let Some(properties) = feature_properties(feature) else {
                continue;
            };
            property_keys.extend(properties.keys().cloned());
            if let Some(value) = properties.get(value_key).and_then(display_value) {
                distinct_values.insert(value);
            }
        }

        let first = features.first();
        Self {
            feature_count: features.len(),
            first_properties: first.map(|f| feature_properties(f).cloned().unwrap_or_default()),
            geometry_types,
            property_keys,
            first_feature: first.cloned(),
            value_key: value_key.to_string(),
            distinct_values,
        }
    }
}

fn feature_properties(feature: &Value) -> Option<&Map<String, Value>> {
    feature.get("properties").and_then(Value::as_object)
}

/// Geometry `type` of a raw feature; non-string types are shown as JSON text.
fn geometry_label(feature: &Value) -> String {
    match feature.get("geometry").and_then(|g| g.get("type")) {
        None | Some(Value::Null) => UNKNOWN_TYPE.to_string(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

/// Render a property value for the distinct-value listing. Null, empty
/// strings, `false` and zero are skipped.
fn display_value(value: &Value) -> Option<String> {
    match value {
        Value::Null | Value::Bool(false) => None,
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s.clone()),
        Value::Number(n) if n.as_f64() == Some(0.0) => None,
        other => Some(other.to_string()),
    }
}

/// Structure of a GeoJSON document.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StructureReport {
    /// Root `type`, or `"unknown"` if missing
    pub root_type: String,
    /// Present only when the root is a feature collection
    pub collection: Option<CollectionStats>,
}

/// Inspect the structure of a GeoJSON document.
///
/// A document whose root is not a `FeatureCollection` only reports its root
/// type. A missing or non-array `features` member counts as no features.
pub fn inspect_structure(document: &Value, value_key: &str) -> StructureReport {
    let root = root_type(document).unwrap_or(UNKNOWN_TYPE).to_string();

    let collection = (root == FEATURE_COLLECTION).then(|| {
        let features: &[Value] = match document.get("features") {
            Some(Value::Array(features)) => features.as_slice(),
            Some(other) => {
                tracing::warn!(found = %other, "features member is not an array");
                &[]
            }
            None => &[],
        };
        CollectionStats::compute(features, value_key)
    });

    StructureReport {
        root_type: root,
        collection,
    }
}
