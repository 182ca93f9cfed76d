use std::collections::HashMap;

use serde::{Serialize, Serializer};

use super::SpeciesKey;

/// Edibility of a species as recorded in the translation table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Edibility {
    Edible,
    NotEdible,
    /// Column empty or absent
    Unknown,
}

impl Edibility {
    /// Interpret a raw `Comestible` cell. Only the literal `false`
    /// (case-insensitive) means not edible; an empty cell is unknown and any
    /// other value counts as edible.
    pub fn from_cell(raw: Option<&str>) -> Self {
        let value = raw.map(|s| s.trim().to_lowercase()).unwrap_or_default();
        match value.as_str() {
            "" => Edibility::Unknown,
            "false" => Edibility::NotEdible,
            _ => Edibility::Edible,
        }
    }
}

/// Serialized as `true`, `false` or `null`.
impl Serialize for Edibility {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Edibility::Edible => serializer.serialize_bool(true),
            Edibility::NotEdible => serializer.serialize_bool(false),
            Edibility::Unknown => serializer.serialize_none(),
        }
    }
}

/// French common name and edibility for one (genus, species) pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TranslationEntry {
    pub french_name: String,
    pub edibility: Edibility,
}

/// Immutable lookup from species key to translation.
#[derive(Debug, Clone, Default)]
pub struct TranslationTable {
    entries: HashMap<SpeciesKey, TranslationEntry>,
}

impl TranslationTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an entry, returning the one it replaced.
    pub fn insert(
        &mut self,
        key: SpeciesKey,
        entry: TranslationEntry,
    ) -> Option<TranslationEntry> {
        self.entries.insert(key, entry)
    }

    pub fn get(&self, key: &SpeciesKey) -> Option<&TranslationEntry> {
        self.entries.get(key)
    }

    /// Look up by genus and species.
    pub fn lookup(&self, genus: &str, species: &str) -> Option<&TranslationEntry> {
        self.get(&SpeciesKey::new(genus, species))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of entries per edibility state.
    pub fn edibility_counts(&self) -> (usize, usize, usize) {
        self.entries
            .values()
            .fold((0, 0, 0), |(e, n, u), entry| match entry.edibility {
                Edibility::Edible => (e + 1, n, u),
                Edibility::NotEdible => (e, n + 1, u),
                Edibility::Unknown => (e, n, u + 1),
            })
    }
}

impl FromIterator<(SpeciesKey, TranslationEntry)> for TranslationTable {
    fn from_iter<I: IntoIterator<Item = (SpeciesKey, TranslationEntry)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
