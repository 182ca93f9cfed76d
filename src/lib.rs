pub mod analysis;
pub mod config;
pub mod error;
pub mod io;
pub mod models;
pub mod processing;
pub mod visualization;

pub use analysis::{inspect_structure, StructureReport};
pub use config::ToolConfig;
pub use error::InventoryError;
pub use models::{Edibility, Feature, FeatureCollection, SpeciesKey, TranslationTable};
pub use processing::{join_translations, split_species_names, JoinReport, SplitReport};
