mod joiner;
mod splitter;

pub use joiner::{
    classify, join_translations, JoinOutcome, JoinReport, FRENCH_NAME_KEY, UNRESOLVED_MARKER,
};
pub use splitter::{split_species_names, SplitReport, DEFAULT_SOURCE_PROPERTY};
