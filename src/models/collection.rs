use serde::de::{Deserializer, Error as _};
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::InventoryError;

/// Literal value of the root `type` member of a feature collection.
pub const FEATURE_COLLECTION: &str = "FeatureCollection";

const FEATURES_KEY: &str = "features";
const PROPERTIES_KEY: &str = "properties";

/// A single GeoJSON feature.
///
/// The feature is held as its raw JSON object so that a rewrite keeps the
/// members in their original order, and absent members stay absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Feature {
    members: Map<String, Value>,
}

impl Feature {
    /// Create a feature with the given geometry and properties.
    pub fn new(geometry: Value, properties: Map<String, Value>) -> Self {
        let mut members = Map::new();
        members.insert("type".into(), Value::from("Feature"));
        members.insert("geometry".into(), geometry);
        members.insert(PROPERTIES_KEY.into(), Value::Object(properties));
        Self { members }
    }

    /// Any member of the feature object (`id`, `geometry`, ...).
    pub fn member(&self, key: &str) -> Option<&Value> {
        self.members.get(key)
    }

    /// Property mapping; `None` when the member is absent, `null` or not an object.
    pub fn properties(&self) -> Option<&Map<String, Value>> {
        self.members.get(PROPERTIES_KEY).and_then(Value::as_object)
    }

    pub fn properties_mut(&mut self) -> Option<&mut Map<String, Value>> {
        self.members
            .get_mut(PROPERTIES_KEY)
            .and_then(Value::as_object_mut)
    }

    /// Replace the whole property mapping, keeping the member in place.
    pub fn set_properties(&mut self, properties: Map<String, Value>) {
        self.members
            .insert(PROPERTIES_KEY.into(), Value::Object(properties));
    }

    /// Look up a property value.
    pub fn property(&self, key: &str) -> Option<&Value> {
        self.properties().and_then(|p| p.get(key))
    }

    /// Look up a property and return it only if it is a string.
    pub fn property_str(&self, key: &str) -> Option<&str> {
        self.property(key).and_then(Value::as_str)
    }
}

/// The root GeoJSON document holding an ordered list of features.
///
/// Root members other than `features` (`type`, `name`, `crs`, ...) are kept
/// verbatim. On output `features` is written back in its original slot.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureCollection {
    pub features: Vec<Feature>,
    members: Map<String, Value>,
}

impl Default for FeatureCollection {
    fn default() -> Self {
        let mut members = Map::new();
        members.insert("type".into(), Value::from(FEATURE_COLLECTION));
        members.insert(FEATURES_KEY.into(), Value::Null);
        Self {
            features: Vec::new(),
            members,
        }
    }
}

impl FeatureCollection {
    /// Create a collection from a list of features.
    pub fn new(features: Vec<Feature>) -> Self {
        Self {
            features,
            ..Self::default()
        }
    }

    /// Convert a parsed JSON document, rejecting anything whose root `type`
    /// is not `FeatureCollection`.
    pub fn from_value(document: Value) -> Result<Self, InventoryError> {
        match root_type(&document) {
            Some(FEATURE_COLLECTION) => Ok(serde_json::from_value(document)?),
            other => Err(InventoryError::NotFeatureCollection(
                other.unwrap_or("unknown").to_string(),
            )),
        }
    }

    /// Root-level member other than `features`.
    pub fn member(&self, key: &str) -> Option<&Value> {
        match key {
            FEATURES_KEY => None,
            _ => self.members.get(key),
        }
    }

    /// Number of features.
    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }
}

impl Serialize for FeatureCollection {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let has_slot = self.members.contains_key(FEATURES_KEY);
        let len = self.members.len() + usize::from(!has_slot && !self.features.is_empty());
        let mut map = serializer.serialize_map(Some(len))?;
        for (key, value) in &self.members {
            if key == FEATURES_KEY {
                map.serialize_entry(key, &self.features)?;
            } else {
                map.serialize_entry(key, value)?;
            }
        }
        if !has_slot && !self.features.is_empty() {
            map.serialize_entry(FEATURES_KEY, &self.features)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for FeatureCollection {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let mut members: Map<String, Value> = Map::deserialize(deserializer)?;
        // Leave a placeholder so the slot keeps its position
        let features = match members.get_mut(FEATURES_KEY) {
            Some(slot) => Vec::<Feature>::deserialize(slot.take()).map_err(D::Error::custom)?,
            None => Vec::new(),
        };
        Ok(Self { features, members })
    }
}

/// Root `type` member of a document, if it is a string.
pub fn root_type(document: &Value) -> Option<&str> {
    document.get("type").and_then(Value::as_str)
}
