use serde::Serialize;
use serde_json::{Map, Value};

use crate::models::{
    Edibility, Feature, FeatureCollection, TranslationTable, GENUS_KEY, SPECIES_KEY,
};

/// Property key the French common name is written to.
pub const FRENCH_NAME_KEY: &str = "libellefrancais";

/// Marker appended to labels whose edibility is not recorded.
pub const UNRESOLVED_MARKER: &str = " !";

/// What happened to one feature during the join.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JoinOutcome {
    /// Edible species; carries the French name
    Kept(String),
    /// No translation for (genre, espece)
    Untranslated,
    /// Translation found but edibility unknown; carries the flagged label
    UnknownEdibility(String),
    NotEdible,
}

/// Decide the outcome for a (genus, species) pair.
pub fn classify(table: &TranslationTable, genus: &str, species: &str) -> JoinOutcome {
    let Some(entry) = table.lookup(genus, species) else {
        return JoinOutcome::Untranslated;
    };
    match entry.edibility {
        Edibility::Edible => JoinOutcome::Kept(entry.french_name.clone()),
        Edibility::NotEdible => JoinOutcome::NotEdible,
        Edibility::Unknown => {
            JoinOutcome::UnknownEdibility(format!("{}{UNRESOLVED_MARKER}", entry.french_name))
        }
    }
}

/// Counts gathered while joining a collection against the translation table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct JoinReport {
    pub input: usize,
    pub kept: usize,
    pub untranslated: usize,
    pub not_edible: usize,
    /// Flagged labels of translated species with unknown edibility, in input order
    pub unresolved: Vec<String>,
}

impl JoinReport {
    /// Number of features excluded from the output.
    pub fn dropped(&self) -> usize {
        self.untranslated + self.not_edible + self.unresolved.len()
    }
}

fn trimmed_property(feature: &Feature, key: &str) -> String {
    feature
        .property_str(key)
        .map(|s| s.trim().to_string())
        .unwrap_or_default()
}

/// Keep only edible, translated features.
///
/// Kept features have their properties replaced by exactly `genre`,
/// `espece` and `libellefrancais`. Root-level members of the collection are
/// carried over unchanged.
pub fn join_translations(
    mut collection: FeatureCollection,
    table: &TranslationTable,
) -> (FeatureCollection, JoinReport) {
    let features = std::mem::take(&mut collection.features);

    let mut report = JoinReport {
        input: features.len(),
        ..JoinReport::default()
    };
    let mut kept = Vec::new();

    for mut feature in features {
        let genus = trimmed_property(&feature, GENUS_KEY);
        let species = trimmed_property(&feature, SPECIES_KEY);

        match classify(table, &genus, &species) {
            JoinOutcome::Kept(french_name) => {
                let mut properties = Map::new();
                properties.insert(GENUS_KEY.to_string(), Value::String(genus));
                properties.insert(SPECIES_KEY.to_string(), Value::String(species));
                properties.insert(FRENCH_NAME_KEY.to_string(), Value::String(french_name));
                feature.set_properties(properties);
                kept.push(feature);
            }
            JoinOutcome::Untranslated => {
                tracing::debug!(%genus, %species, "no translation, dropping feature");
                report.untranslated += 1;
            }
            JoinOutcome::UnknownEdibility(label) => {
                tracing::debug!(%genus, %species, "edibility unknown, dropping feature");
                report.unresolved.push(label);
            }
            JoinOutcome::NotEdible => {
                report.not_edible += 1;
            }
        }
    }

    report.kept = kept.len();
    tracing::info!(
        input = report.input,
        kept = report.kept,
        untranslated = report.untranslated,
        not_edible = report.not_edible,
        unresolved = report.unresolved.len(),
        "joined translations"
    );

    collection.features = kept;
    (collection, report)
}
