// src/locale.rs
//
// Per-locale name field policy: which localized property a locale reads and
// which name fields feed the suggestion universe for that locale.

use crate::error::{ResolveError, Result};

/// A name field of a country record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameField {
    Short,
    Long,
    Abbrev,
    Admin,
    /// Alternate ("broken") name
    Broken,
    Sort,
    /// The active locale's display name
    Localized,
}

/// Name fields offered as suggestions when a locale searches the full
/// English field bundle. Abbreviations are left out.
pub const ENGLISH_SUGGESTION_FIELDS: &[NameField] = &[
    NameField::Short,
    NameField::Long,
    NameField::Admin,
    NameField::Broken,
    NameField::Sort,
];

/// Only the locale's own display names are offered as suggestions
pub const LOCALIZED_SUGGESTION_FIELDS: &[NameField] = &[NameField::Localized];

/// How a locale participates in lookup and suggestion ranking
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalePolicy {
    pub locale: &'static str,
    /// Country property holding this locale's display name
    pub display_field: &'static str,
    pub suggestion_fields: &'static [NameField],
}

// Only en-CA ranks over the English field bundle; every other locale ranks
// over its display names alone.
static LOCALE_POLICIES: &[LocalePolicy] = &[
    LocalePolicy { locale: "en-CA", display_field: "NAME_EN", suggestion_fields: ENGLISH_SUGGESTION_FIELDS },
    LocalePolicy { locale: "es-MX", display_field: "NAME_ES", suggestion_fields: LOCALIZED_SUGGESTION_FIELDS },
    LocalePolicy { locale: "fr-FR", display_field: "NAME_FR", suggestion_fields: LOCALIZED_SUGGESTION_FIELDS },
    LocalePolicy { locale: "de-DE", display_field: "NAME_DE", suggestion_fields: LOCALIZED_SUGGESTION_FIELDS },
    LocalePolicy { locale: "hu-HU", display_field: "NAME_HU", suggestion_fields: LOCALIZED_SUGGESTION_FIELDS },
    LocalePolicy { locale: "pl-PL", display_field: "NAME_PL", suggestion_fields: LOCALIZED_SUGGESTION_FIELDS },
    LocalePolicy { locale: "it-IT", display_field: "NAME_IT", suggestion_fields: LOCALIZED_SUGGESTION_FIELDS },
    LocalePolicy { locale: "sv-SE", display_field: "NAME_SV", suggestion_fields: LOCALIZED_SUGGESTION_FIELDS },
    LocalePolicy { locale: "pt-BR", display_field: "NAME_PT", suggestion_fields: LOCALIZED_SUGGESTION_FIELDS },
];

/// Look up the policy for a locale identifier.
///
/// An identifier with no mapping is a setup defect and fails with
/// [`ResolveError::UnknownLocale`].
pub fn policy_for(locale: &str) -> Result<&'static LocalePolicy> {
    LOCALE_POLICIES
        .iter()
        .find(|policy| policy.locale == locale)
        .ok_or_else(|| ResolveError::UnknownLocale(locale.to_string()))
}

/// Every locale identifier with a defined policy
pub fn supported_locales() -> impl Iterator<Item = &'static str> {
    LOCALE_POLICIES.iter().map(|policy| policy.locale)
}
