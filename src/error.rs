use thiserror::Error;

/// Errors that can occur while processing a tree inventory.
#[derive(Error, Debug)]
pub enum InventoryError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(#[from] toml::de::Error),

    #[error("Not a FeatureCollection (root type: {0})")]
    NotFeatureCollection(String),

    #[error("Parse error: {0}")]
    ParseError(String),
}
