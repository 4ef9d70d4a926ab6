// src/country.rs
//
// Reference country records and the loaders for the country dataset.
// The dataset is a GeoJSON-style FeatureCollection; only the name
// properties of each feature are kept.

use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::error::{ResolveError, Result};

/// Country dataset shipped with the crate
static EMBEDDED_COUNTRY_DATA: &str = include_str!("../data/country_data.json");

/// Prefix shared by every localized display-name property (`NAME_EN`, `NAME_FR`, ...)
const LOCALIZED_NAME_PREFIX: &str = "NAME_";

/// One country of the reference dataset. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "RawProperties")]
pub struct Country {
    name: String,
    name_long: String,
    abbrev: String,
    admin: String,
    brk_name: String,
    name_sort: String,
    /// Localized display names keyed by property key, e.g. `NAME_FR` -> "Allemagne"
    localized: HashMap<String, String>,
}

#[derive(Deserialize)]
struct RawProperties {
    #[serde(rename = "NAME")]
    name: String,
    #[serde(rename = "NAME_LONG")]
    name_long: String,
    #[serde(rename = "ABBREV")]
    abbrev: String,
    #[serde(rename = "ADMIN")]
    admin: String,
    #[serde(rename = "BRK_NAME")]
    brk_name: String,
    #[serde(rename = "NAME_SORT")]
    name_sort: String,
    #[serde(flatten)]
    other: HashMap<String, serde_json::Value>,
}

impl From<RawProperties> for Country {
    fn from(raw: RawProperties) -> Self {
        let localized = raw
            .other
            .into_iter()
            .filter(|(key, _)| key.starts_with(LOCALIZED_NAME_PREFIX))
            .filter_map(|(key, value)| match value {
                serde_json::Value::String(name) => Some((key, name)),
                _ => None,
            })
            .collect();

        Self {
            name: raw.name,
            name_long: raw.name_long,
            abbrev: raw.abbrev,
            admin: raw.admin,
            brk_name: raw.brk_name,
            name_sort: raw.name_sort,
            localized,
        }
    }
}

#[derive(Deserialize)]
struct FeatureCollection {
    features: Vec<Feature>,
}

#[derive(Deserialize)]
struct Feature {
    properties: Country,
}

impl Country {
    /// Build a country from its core name fields, without any localized names.
    pub fn new(
        name: &str,
        name_long: &str,
        abbrev: &str,
        admin: &str,
        brk_name: &str,
        name_sort: &str,
    ) -> Self {
        Self {
            name: name.to_string(),
            name_long: name_long.to_string(),
            abbrev: abbrev.to_string(),
            admin: admin.to_string(),
            brk_name: brk_name.to_string(),
            name_sort: name_sort.to_string(),
            localized: HashMap::new(),
        }
    }

    /// Add a localized display name under its property key (e.g. `NAME_FR`)
    pub fn with_localized_name(mut self, field: &str, name: &str) -> Self {
        self.localized.insert(field.to_string(), name.to_string());
        self
    }

    /// Short name, also the identity used when comparing against the answer
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn name_long(&self) -> &str {
        &self.name_long
    }

    pub fn abbrev(&self) -> &str {
        &self.abbrev
    }

    pub fn admin(&self) -> &str {
        &self.admin
    }

    /// Alternate ("broken") name
    pub fn brk_name(&self) -> &str {
        &self.brk_name
    }

    pub fn name_sort(&self) -> &str {
        &self.name_sort
    }

    /// Localized display name for a property key. `None` when this country
    /// carries no entry for it.
    pub fn localized_name(&self, field: &str) -> Option<&str> {
        self.localized.get(field).map(String::as_str)
    }

    fn validate(&self, index: usize) -> Result<()> {
        let core_fields = [
            ("NAME", &self.name),
            ("NAME_LONG", &self.name_long),
            ("ABBREV", &self.abbrev),
            ("ADMIN", &self.admin),
            ("BRK_NAME", &self.brk_name),
            ("NAME_SORT", &self.name_sort),
        ];
        for (field, value) in core_fields {
            if value.trim().is_empty() {
                return Err(ResolveError::InvalidCountry { index, field });
            }
        }
        Ok(())
    }
}

/// Parse a country FeatureCollection, keeping dataset order
pub fn countries_from_json_str(json: &str) -> Result<Vec<Country>> {
    let collection: FeatureCollection = serde_json::from_str(json)?;
    let countries: Vec<Country> = collection
        .features
        .into_iter()
        .map(|feature| feature.properties)
        .collect();

    for (index, country) in countries.iter().enumerate() {
        country.validate(index)?;
    }

    Ok(countries)
}

/// Load the dataset compiled into the crate
pub fn load_embedded_countries() -> Result<Vec<Country>> {
    let countries = countries_from_json_str(EMBEDDED_COUNTRY_DATA)?;
    log::info!("[ReferenceData] Loaded {} embedded countries", countries.len());
    Ok(countries)
}

/// Load a dataset from a FeatureCollection file
pub fn load_countries_from_path(path: &Path) -> Result<Vec<Country>> {
    let data = fs::read_to_string(path)?;
    let countries = countries_from_json_str(&data)?;
    log::info!("[ReferenceData] Loaded {} countries from {}", countries.len(), path.display());
    Ok(countries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_embedded_dataset_loads() {
        let countries = load_embedded_countries().unwrap();
        assert!(countries.len() > 40);

        let germany = countries.iter().find(|c| c.name() == "Germany").unwrap();
        assert_eq!(germany.abbrev(), "Ger.");
        assert_eq!(germany.localized_name("NAME_FR"), Some("Allemagne"));
        assert_eq!(germany.localized_name("NAME_DE"), Some("Deutschland"));
    }

    #[test]
    fn test_non_name_properties_are_ignored() {
        let countries = load_embedded_countries().unwrap();
        let france = &countries[0];
        assert_eq!(france.localized_name("ISO_A2"), None);
        assert_eq!(france.localized_name("LABELRANK"), None);
        // Core fields are not duplicated into the localized map
        assert_eq!(france.localized_name("NAME_LONG"), None);
    }

    #[test]
    fn test_empty_core_field_is_rejected() {
        let json = r#"{"features": [{"properties": {
            "NAME": "Atlantis", "NAME_LONG": "Atlantis", "ABBREV": "",
            "ADMIN": "Atlantis", "BRK_NAME": "Atlantis", "NAME_SORT": "Atlantis"
        }}]}"#;
        match countries_from_json_str(json) {
            Err(ResolveError::InvalidCountry { index, field }) => {
                assert_eq!(index, 0);
                assert_eq!(field, "ABBREV");
            }
            other => panic!("expected InvalidCountry, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_core_field_is_a_parse_error() {
        let json = r#"{"features": [{"properties": {"NAME": "Atlantis"}}]}"#;
        assert!(matches!(countries_from_json_str(json), Err(ResolveError::Json(_))));
    }

    #[test]
    fn test_load_from_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"type": "FeatureCollection", "features": [{{"type": "Feature", "geometry": null, "properties": {{
                "NAME": "Atlantis", "NAME_LONG": "Kingdom of Atlantis", "ABBREV": "Atl.",
                "ADMIN": "Atlantis", "BRK_NAME": "Atlantis", "NAME_SORT": "Atlantis",
                "NAME_FR": "Atlantide", "POP_EST": 12
            }}}}]}}"#
        )
        .unwrap();

        let countries = load_countries_from_path(file.path()).unwrap();
        assert_eq!(countries.len(), 1);
        assert_eq!(countries[0].name_long(), "Kingdom of Atlantis");
        assert_eq!(countries[0].localized_name("NAME_FR"), Some("Atlantide"));
        assert_eq!(countries[0].localized_name("POP_EST"), None);
    }
}
