mod collection;
mod species;
mod translation;

pub use collection::{root_type, Feature, FeatureCollection, FEATURE_COLLECTION};
pub use species::{extract_genus_species, SpeciesKey, GENUS_KEY, SPECIES_KEY};
pub use translation::{Edibility, TranslationEntry, TranslationTable};
