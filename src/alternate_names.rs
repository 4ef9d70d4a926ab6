// src/alternate_names.rs
//
// Historical, colloquial and alternate spellings of country names, mapped to
// the name the reference dataset knows them by. The dataset only carries
// current official names while players often type a former one.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::error::Result;

/// Alias table shipped with the crate
static EMBEDDED_ALTERNATE_NAMES: &str = include_str!("../data/alternate_names.json");

/// One alternate spelling and the canonical name it stands for.
/// Both sides are stored in normalized form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AliasPair {
    pub real: String,
    pub alternative: String,
}

/// Ordered alias table. Read-only once loaded.
#[derive(Debug, Clone, Default)]
pub struct AliasTable {
    pairs: Vec<AliasPair>,
}

impl AliasTable {
    /// Build a table from pairs, keeping their order. When two pairs share an
    /// alternative the earlier one wins.
    pub fn from_pairs(pairs: Vec<AliasPair>) -> Self {
        Self { pairs }
    }

    /// Parse a JSON array of `{"real": ..., "alternative": ...}` objects
    pub fn from_json_str(json: &str) -> Result<Self> {
        let pairs: Vec<AliasPair> = serde_json::from_str(json)?;
        Ok(Self::from_pairs(pairs))
    }

    /// The table compiled into the crate
    pub fn embedded() -> Result<Self> {
        let table = Self::from_json_str(EMBEDDED_ALTERNATE_NAMES)?;
        log::info!("[ReferenceData] Loaded {} embedded alternate names", table.len());
        Ok(table)
    }

    pub fn load_from_path(path: &Path) -> Result<Self> {
        let data = fs::read_to_string(path)?;
        let table = Self::from_json_str(&data)?;
        log::info!("[ReferenceData] Loaded {} alternate names from {}", table.len(), path.display());
        Ok(table)
    }

    /// Substitute a normalized guess with its canonical name, if it is a known
    /// alternative. Anything else comes back unchanged.
    pub fn resolve<'a>(&'a self, normalized: &'a str) -> &'a str {
        self.pairs
            .iter()
            .find(|pair| pair.alternative == normalized)
            .map_or(normalized, |pair| pair.real.as_str())
    }

    /// Every alternative spelling, in table order
    pub fn alternatives(&self) -> impl Iterator<Item = &str> {
        self.pairs.iter().map(|pair| pair.alternative.as_str())
    }

    pub fn pairs(&self) -> &[AliasPair] {
        &self.pairs
    }

    /// Pairs that can never match because an earlier pair has the same alternative
    pub fn duplicate_alternatives(&self) -> Vec<&AliasPair> {
        let mut seen = HashSet::new();
        self.pairs
            .iter()
            .filter(|pair| !seen.insert(pair.alternative.as_str()))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair(alternative: &str, real: &str) -> AliasPair {
        AliasPair {
            real: real.to_string(),
            alternative: alternative.to_string(),
        }
    }

    #[test]
    fn test_known_alternative_is_substituted() {
        let table = AliasTable::embedded().unwrap();
        assert_eq!(table.resolve("burma"), "myanmar");
        assert_eq!(table.resolve("ivory coast"), "côte d'ivoire");
        assert_eq!(table.resolve("swaziland"), "eswatini");
    }

    #[test]
    fn test_unknown_input_is_unchanged() {
        let table = AliasTable::embedded().unwrap();
        assert_eq!(table.resolve("france"), "france");
        assert_eq!(table.resolve(""), "");
    }

    #[test]
    fn test_match_is_exact_on_normalized_text() {
        let table = AliasTable::embedded().unwrap();
        assert_eq!(table.resolve("Burma"), "Burma");
        assert_eq!(table.resolve("burma "), "burma ");
    }

    #[test]
    fn test_first_pair_wins_on_duplicate_alternative() {
        let table = AliasTable::from_pairs(vec![
            pair("holland", "netherlands"),
            pair("burma", "myanmar"),
            pair("holland", "hollandia"),
        ]);
        assert_eq!(table.resolve("holland"), "netherlands");

        let duplicates = table.duplicate_alternatives();
        assert_eq!(duplicates.len(), 1);
        assert_eq!(duplicates[0].real, "hollandia");
    }

    #[test]
    fn test_order_is_preserved() {
        let table = AliasTable::from_json_str(
            r#"[{"real": "b", "alternative": "z"}, {"real": "a", "alternative": "y"}]"#,
        )
        .unwrap();
        let alternatives: Vec<&str> = table.alternatives().collect();
        assert_eq!(alternatives, vec!["z", "y"]);
    }

    #[test]
    fn test_embedded_table_has_no_shadowed_entries() {
        let table = AliasTable::embedded().unwrap();
        assert!(!table.is_empty());
        assert!(table.duplicate_alternatives().is_empty());
    }
}
