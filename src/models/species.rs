use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Parenthesised annotation such as "(planté en 1980)". Non-greedy, so the
/// first `)` closes the match.
static ANNOTATION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\(.*?\)").expect("annotation pattern is valid")
});

/// Token separator: Unicode whitespace plus the ASCII information
/// separators `\x1c`..=`\x1f`.
fn is_separator(c: char) -> bool {
    c.is_whitespace() || ('\x1c'..='\x1f').contains(&c)
}

/// Property key the genus is written to.
pub const GENUS_KEY: &str = "genre";
/// Property key the species epithet is written to.
pub const SPECIES_KEY: &str = "espece";

/// Binomial key parsed from a free-text Latin name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SpeciesKey {
    /// Genus (e.g., "Acer")
    pub genus: String,
    /// Species epithet (e.g., "campestre"); empty when only the genus is known
    pub species: String,
}

impl SpeciesKey {
    pub fn new(genus: impl Into<String>, species: impl Into<String>) -> Self {
        Self {
            genus: genus.into(),
            species: species.into(),
        }
    }

    /// Parse a Latin name: strip parenthesised annotations, then take the
    /// first two separator-delimited tokens.
    ///
    /// # Examples
    ///
    /// ```
    /// use tree_inventory_tools::models::SpeciesKey;
    ///
    /// let key = SpeciesKey::parse("Acer campestre (planté en 1980)").unwrap();
    /// assert_eq!(key, SpeciesKey::new("Acer", "campestre"));
    /// assert_eq!(SpeciesKey::parse("Quercus").unwrap().species, "");
    /// assert!(SpeciesKey::parse("   ").is_none());
    /// ```
    pub fn parse(name: &str) -> Option<Self> {
        let stripped = ANNOTATION_RE.replace_all(name, "");
        let mut tokens = stripped.split(is_separator).filter(|t| !t.is_empty());
        let genus = tokens.next()?;
        let species = tokens.next().unwrap_or("");
        Some(Self::new(genus, species))
    }
}

impl std::fmt::Display for SpeciesKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.species.is_empty() {
            write!(f, "{}", self.genus)
        } else {
            write!(f, "{} {}", self.genus, self.species)
        }
    }
}

/// Extract a species key from an arbitrary property value. Anything that is
/// not a string yields `None`.
pub fn extract_genus_species(value: &Value) -> Option<SpeciesKey> {
    value.as_str().and_then(SpeciesKey::parse)
}
