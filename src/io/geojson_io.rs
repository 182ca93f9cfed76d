use std::path::Path;

use serde_json::Value;

use crate::error::InventoryError;
use crate::models::FeatureCollection;

/// Read any JSON document from a file.
pub fn read_document(path: impl AsRef<Path>) -> Result<Value, InventoryError> {
    let content = std::fs::read_to_string(path.as_ref())?;
    Ok(serde_json::from_str(&content)?)
}

/// Read a feature collection from a GeoJSON file.
///
/// Fails with [`InventoryError::NotFeatureCollection`] when the root `type`
/// is anything else.
pub fn read_geojson(path: impl AsRef<Path>) -> Result<FeatureCollection, InventoryError> {
    let path = path.as_ref();
    let collection = FeatureCollection::from_value(read_document(path)?)?;
    tracing::debug!(
        path = %path.display(),
        name = collection.member("name").and_then(serde_json::Value::as_str).unwrap_or_default(),
        features = collection.len(),
        "read feature collection"
    );
    Ok(collection)
}

/// Read a feature collection from GeoJSON bytes.
pub fn read_geojson_from_bytes(data: &[u8]) -> Result<FeatureCollection, InventoryError> {
    let content = std::str::from_utf8(data)
        .map_err(|e| InventoryError::ParseError(format!("Invalid UTF-8: {e}")))?;
    FeatureCollection::from_value(serde_json::from_str(content)?)
}

/// Write a feature collection as pretty-printed UTF-8 JSON. Non-ASCII
/// characters are written literally.
pub fn write_geojson(
    collection: &FeatureCollection,
    path: impl AsRef<Path>,
) -> Result<(), InventoryError> {
    let path = path.as_ref();
    let content = serde_json::to_string_pretty(collection)?;
    std::fs::write(path, content)?;
    tracing::debug!(
        path = %path.display(),
        features = collection.len(),
        "wrote feature collection"
    );
    Ok(())
}
