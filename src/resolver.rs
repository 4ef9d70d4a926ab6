// src/resolver.rs
//
// Classifies a raw guess against the reference data:
//   normalize -> alias substitution -> exact lookup -> ranked suggestions

use crate::alternate_names::AliasTable;
use crate::country::Country;
use crate::country_index::find_country;
use crate::error::Result;
use crate::locale::{policy_for, LocalePolicy};
use crate::normalizer::normalize;
use crate::suggestions::suggest;

/// Maximum weighted distance for a name to be offered as a suggestion:
/// two full edits, or four accent-only ones
pub const DEFAULT_SUGGESTION_THRESHOLD: f32 = 2.0;

/// Outcome of resolving one guess
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution<'c> {
    /// The guess names a country the player has already guessed
    AlreadyGuessed,
    Resolved(&'c Country),
    NoMatchWithSuggestions(Vec<String>),
    NoMatchNoSuggestions,
}

/// Resolver bound to an alias table and an active locale.
///
/// Holds no mutable state; one instance can serve any number of sessions.
#[derive(Debug, Clone)]
pub struct Resolver<'a> {
    aliases: &'a AliasTable,
    policy: &'static LocalePolicy,
    threshold: f32,
}

impl<'a> Resolver<'a> {
    /// Fails with [`crate::ResolveError::UnknownLocale`] when the locale has
    /// no name field mapping.
    pub fn new(aliases: &'a AliasTable, locale: &str) -> Result<Self> {
        Ok(Self {
            aliases,
            policy: policy_for(locale)?,
            threshold: DEFAULT_SUGGESTION_THRESHOLD,
        })
    }

    pub fn with_threshold(mut self, threshold: f32) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn locale(&self) -> &'static str {
        self.policy.locale
    }

    pub fn threshold(&self) -> f32 {
        self.threshold
    }

    /// Classify `raw_input`. Guesses already in `already_guessed` are reported
    /// as such before the full dataset is consulted.
    pub fn resolve<'c>(
        &self,
        raw_input: &str,
        already_guessed: &[Country],
        all_countries: &'c [Country],
    ) -> Resolution<'c> {
        let normalized = normalize(raw_input);
        let canonical = self.aliases.resolve(&normalized);

        if find_country(canonical, already_guessed, self.policy).is_some() {
            log::debug!("[Resolver] '{}' was already guessed", canonical);
            return Resolution::AlreadyGuessed;
        }

        if let Some(country) = find_country(canonical, all_countries, self.policy) {
            log::debug!("[Resolver] '{}' resolved to {}", raw_input, country.name());
            return Resolution::Resolved(country);
        }

        let matches = suggest(canonical, all_countries, self.aliases, self.policy, self.threshold);
        if matches.is_empty() {
            log::debug!("[Resolver] '{}' matched nothing", canonical);
            Resolution::NoMatchNoSuggestions
        } else {
            log::debug!("[Resolver] '{}' has {} close matches", canonical, matches.len());
            Resolution::NoMatchWithSuggestions(matches)
        }
    }
}

/// One-shot resolution for an explicit locale, using the default threshold
pub fn resolve<'c>(
    raw_input: &str,
    already_guessed: &[Country],
    all_countries: &'c [Country],
    aliases: &AliasTable,
    locale: &str,
) -> Result<Resolution<'c>> {
    let resolver = Resolver::new(aliases, locale)?;
    Ok(resolver.resolve(raw_input, already_guessed, all_countries))
}
