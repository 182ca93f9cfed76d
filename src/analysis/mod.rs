mod structure;

pub use structure::{
    inspect_structure, CollectionStats, StructureReport, DEFAULT_VALUE_KEY, UNKNOWN_TYPE,
};
