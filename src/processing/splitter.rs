use serde::Serialize;
use serde_json::Value;

use crate::models::{extract_genus_species, FeatureCollection, GENUS_KEY, SPECIES_KEY};

/// Default property holding the Latin name.
pub const DEFAULT_SOURCE_PROPERTY: &str = "nom_latin";

/// Counts gathered while splitting Latin names.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SplitReport {
    pub features: usize,
    /// Features that received a `genre`
    pub with_genus: usize,
    /// Features that received an `espece`
    pub with_species: usize,
}

impl SplitReport {
    /// Features whose source property yielded nothing.
    pub fn unparsed(&self) -> usize {
        self.features - self.with_genus
    }
}

/// Write `genre` and `espece` into every feature whose `source_property`
/// holds a parseable Latin name.
///
/// Existing `genre`/`espece` values are overwritten when a new value is
/// found and left untouched otherwise.
pub fn split_species_names(
    collection: &mut FeatureCollection,
    source_property: &str,
) -> SplitReport {
    let mut report = SplitReport::default();

    for feature in &mut collection.features {
        report.features += 1;

        let Some(properties) = feature.properties_mut() else {
            continue;
        };
        let Some(key) = properties.get(source_property).and_then(extract_genus_species) else {
            continue;
        };

        report.with_genus += 1;
        properties.insert(GENUS_KEY.to_string(), Value::String(key.genus));
        if !key.species.is_empty() {
            report.with_species += 1;
            properties.insert(SPECIES_KEY.to_string(), Value::String(key.species));
        }
    }

    tracing::info!(
        source_property,
        features = report.features,
        with_genus = report.with_genus,
        with_species = report.with_species,
        "split Latin names"
    );
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Feature;
    use serde_json::json;

    fn feature(properties: Value) -> Feature {
        serde_json::from_value(json!({
            "type": "Feature",
            "geometry": {"type": "Point", "coordinates": [3.87, 43.61]},
            "properties": properties,
        }))
        .unwrap()
    }

    fn collection(features: Vec<Feature>) -> FeatureCollection {
        FeatureCollection::new(features)
    }

    #[test]
    fn test_split_sets_genus_and_species() {
        let mut fc = collection(vec![feature(
            json!({"nom_latin": "Acer campestre (planté en 1980)", "hauteur": 12}),
        )]);
        let report = split_species_names(&mut fc, DEFAULT_SOURCE_PROPERTY);

        let f = &fc.features[0];
        assert_eq!(f.property_str("genre"), Some("Acer"));
        assert_eq!(f.property_str("espece"), Some("campestre"));
        assert_eq!(f.property("hauteur"), Some(&json!(12)));
        assert_eq!(report, SplitReport { features: 1, with_genus: 1, with_species: 1 });
    }

    #[test]
    fn test_split_genus_only_omits_species() {
        let mut fc = collection(vec![feature(json!({"nom_latin": "Quercus"}))]);
        split_species_names(&mut fc, DEFAULT_SOURCE_PROPERTY);
        assert_eq!(fc.features[0].property_str("genre"), Some("Quercus"));
        assert!(fc.features[0].property("espece").is_none());
    }

    #[test]
    fn test_split_missing_or_invalid_source_is_skipped() {
        let mut fc = collection(vec![
            feature(json!({"autre": "Acer campestre"})),
            feature(json!({"nom_latin": null})),
            feature(json!({"nom_latin": 42})),
            feature(json!({"nom_latin": "   "})),
            feature(Value::Null),
        ]);
        let report = split_species_names(&mut fc, DEFAULT_SOURCE_PROPERTY);

        assert_eq!(report.features, 5);
        assert_eq!(report.with_genus, 0);
        assert_eq!(report.unparsed(), 5);
        for f in &fc.features {
            assert!(f.property("genre").is_none());
        }
        assert!(fc.features[4].properties().is_none());
    }

    #[test]
    fn test_split_keeps_existing_keys_when_nothing_parsed() {
        let mut fc = collection(vec![feature(
            json!({"nom_latin": "", "genre": "Tilia", "espece": "cordata"}),
        )]);
        split_species_names(&mut fc, DEFAULT_SOURCE_PROPERTY);
        assert_eq!(fc.features[0].property_str("genre"), Some("Tilia"));
        assert_eq!(fc.features[0].property_str("espece"), Some("cordata"));
    }

    #[test]
    fn test_split_overwrites_existing_values() {
        let mut fc = collection(vec![feature(
            json!({"nom_latin": "Quercus ilex", "genre": "Tilia", "espece": "cordata"}),
        )]);
        split_species_names(&mut fc, DEFAULT_SOURCE_PROPERTY);
        assert_eq!(fc.features[0].property_str("genre"), Some("Quercus"));
        assert_eq!(fc.features[0].property_str("espece"), Some("ilex"));
    }

    #[test]
    fn test_split_genus_only_keeps_stale_species() {
        let mut fc = collection(vec![feature(
            json!({"nom_latin": "Quercus", "espece": "robur"}),
        )]);
        split_species_names(&mut fc, DEFAULT_SOURCE_PROPERTY);
        assert_eq!(fc.features[0].property_str("genre"), Some("Quercus"));
        assert_eq!(fc.features[0].property_str("espece"), Some("robur"));
    }

    #[test]
    fn test_split_custom_source_property() {
        let mut fc = collection(vec![feature(json!({"essence": "Platanus acerifolia"}))]);
        split_species_names(&mut fc, "essence");
        assert_eq!(fc.features[0].property_str("genre"), Some("Platanus"));
    }

    #[test]
    fn test_split_is_idempotent() {
        let mut fc = collection(vec![
            feature(json!({"nom_latin": "Acer campestre (planté en 1980)"})),
            feature(json!({"nom_latin": "Quercus"})),
            feature(json!({"nom_latin": 3})),
        ]);
        split_species_names(&mut fc, DEFAULT_SOURCE_PROPERTY);
        let once = fc.clone();
        split_species_names(&mut fc, DEFAULT_SOURCE_PROPERTY);
        assert_eq!(fc, once);
    }

    #[test]
    fn test_split_output_differs_from_input_only_by_new_keys() {
        let input = r#"{"type":"FeatureCollection","name":"arbres","features":[
            {"properties":{"nom_latin":"Acer campestre","hauteur":12},"type":"Feature","id":1,
             "geometry":{"type":"Point","coordinates":[3.87,43.61]}},
            {"type":"Feature","properties":{"nom_latin":"Quercus"}},
            {"type":"Feature","properties":null,"geometry":null}
        ]}"#;
        let mut fc: FeatureCollection = serde_json::from_str(input).unwrap();
        split_species_names(&mut fc, DEFAULT_SOURCE_PROPERTY);

        let mut expected: Value = serde_json::from_str(input).unwrap();
        let features = expected["features"].as_array_mut().unwrap();
        let first = features[0]["properties"].as_object_mut().unwrap();
        first.insert("genre".into(), json!("Acer"));
        first.insert("espece".into(), json!("campestre"));
        let second = features[1]["properties"].as_object_mut().unwrap();
        second.insert("genre".into(), json!("Quercus"));

        assert_eq!(
            serde_json::to_string(&fc).unwrap(),
            serde_json::to_string(&expected).unwrap()
        );
    }

    #[test]
    fn test_split_empty_collection() {
        let mut fc = FeatureCollection::default();
        let report = split_species_names(&mut fc, DEFAULT_SOURCE_PROPERTY);
        assert_eq!(report, SplitReport::default());
    }
}
