// src/reference.rs
//
// The static reference data a resolver works against: the country dataset
// and the alternate names table. Loaded once at startup, never mutated.

use crate::alternate_names::AliasTable;
use crate::config::Settings;
use crate::country::{load_countries_from_path, load_embedded_countries, Country};
use crate::error::Result;
use crate::locale::{policy_for, supported_locales};

#[derive(Debug, Clone)]
pub struct ReferenceData {
    pub countries: Vec<Country>,
    pub aliases: AliasTable,
}

impl ReferenceData {
    /// Both datasets as compiled into the crate
    pub fn embedded() -> Result<Self> {
        Ok(Self {
            countries: load_embedded_countries()?,
            aliases: AliasTable::embedded()?,
        })
    }

    /// Datasets named by the settings, embedded ones for anything unset
    pub fn load(settings: &Settings) -> Result<Self> {
        let countries = match &settings.country_data_path {
            Some(path) => load_countries_from_path(path)?,
            None => load_embedded_countries()?,
        };
        let aliases = match &settings.alternate_names_path {
            Some(path) => AliasTable::load_from_path(path)?,
            None => AliasTable::embedded()?,
        };

        Ok(Self { countries, aliases })
    }

    /// Countries lacking a non-empty display name for a supported locale,
    /// as `(locale, short name)`. Such a country is never suggested in that locale.
    pub fn missing_display_names(&self) -> Result<Vec<(&'static str, &str)>> {
        let mut missing = Vec::new();
        for locale in supported_locales() {
            let policy = policy_for(locale)?;
            for country in &self.countries {
                match country.localized_name(policy.display_field) {
                    Some(name) if !name.is_empty() => {}
                    _ => missing.push((locale, country.name())),
                }
            }
        }
        Ok(missing)
    }

    #[cfg(test)]
    pub(crate) fn country_named(&self, name: &str) -> Option<&Country> {
        self.countries.iter().find(|country| country.name() == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_embedded() {
        let data = ReferenceData::embedded().unwrap();
        assert!(!data.countries.is_empty());
        assert!(!data.aliases.is_empty());
        assert!(data.country_named("Japan").is_some());
        assert!(data.country_named("japan").is_none());
    }

    #[test]
    fn test_settings_override_alias_table_only() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"[{{"real": "japan", "alternative": "nippon"}}]"#).unwrap();

        let settings = Settings {
            alternate_names_path: Some(file.path().to_path_buf()),
            ..Settings::default()
        };
        let data = ReferenceData::load(&settings).unwrap();

        assert_eq!(data.aliases.len(), 1);
        assert_eq!(data.aliases.resolve("nippon"), "japan");
        assert_eq!(data.countries.len(), ReferenceData::embedded().unwrap().countries.len());
    }

    #[test]
    fn test_embedded_countries_have_every_display_name() {
        let data = ReferenceData::embedded().unwrap();
        assert!(data.missing_display_names().unwrap().is_empty());
    }

    #[test]
    fn test_missing_display_names_are_reported() {
        let mut full = Country::new("Lemuria", "Lemuria", "Lem.", "Lemuria", "Lemuria", "Lemuria");
        for field in ["NAME_EN", "NAME_ES", "NAME_FR", "NAME_DE", "NAME_HU", "NAME_PL", "NAME_IT", "NAME_SV", "NAME_PT"] {
            full = full.with_localized_name(field, "Lemuria");
        }
        let partial = Country::new("Atlantis", "Atlantis", "Atl.", "Atlantis", "Atlantis", "Atlantis")
            .with_localized_name("NAME_EN", "Atlantis")
            .with_localized_name("NAME_FR", "");

        let data = ReferenceData {
            countries: vec![full, partial],
            aliases: AliasTable::default(),
        };
        let missing = data.missing_display_names().unwrap();

        assert_eq!(missing.len(), 8);
        assert!(missing.iter().all(|(_, name)| *name == "Atlantis"));
        assert!(missing.contains(&("fr-FR", "Atlantis")));
        assert!(!missing.iter().any(|(locale, _)| *locale == "en-CA"));
    }

    #[test]
    fn test_missing_override_file_fails() {
        let settings = Settings {
            country_data_path: Some("/nonexistent/countries.json".into()),
            ..Settings::default()
        };
        assert!(ReferenceData::load(&settings).is_err());
    }
}
