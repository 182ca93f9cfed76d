use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::analysis::DEFAULT_VALUE_KEY;
use crate::error::InventoryError;
use crate::processing::DEFAULT_SOURCE_PROPERTY;

/// Settings shared by every tool, loaded from TOML and overridden from the
/// command line.
///
/// ```toml
/// city = "m"
/// source_property = "nom_latin"
/// translation_table = "traduction.csv"
/// inspect_key = "essence"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ToolConfig {
    /// Dataset identifier used to derive file names
    pub city: String,
    /// Property holding the Latin name
    pub source_property: String,
    /// Path to the translation CSV
    pub translation_table: PathBuf,
    /// Property listed by the inspector
    pub inspect_key: String,
}

impl Default for ToolConfig {
    fn default() -> Self {
        Self {
            city: "m".to_string(),
            source_property: DEFAULT_SOURCE_PROPERTY.to_string(),
            translation_table: PathBuf::from("traduction.csv"),
            inspect_key: DEFAULT_VALUE_KEY.to_string(),
        }
    }
}

impl ToolConfig {
    /// Parse a configuration from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, InventoryError> {
        Ok(toml::from_str(content)?)
    }

    /// Load a configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, InventoryError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content)?;
        tracing::debug!(path = %path.display(), city = %config.city, "loaded configuration");
        Ok(config)
    }

    /// Raw dataset for the configured city: `DATA_<city>.geojson`.
    pub fn raw_dataset(&self) -> PathBuf {
        PathBuf::from(format!("DATA_{}.geojson", self.city))
    }

    /// Translated output for the configured city: `<city>.geojson`.
    pub fn translated_dataset(&self) -> PathBuf {
        PathBuf::from(format!("{}.geojson", self.city))
    }
}
