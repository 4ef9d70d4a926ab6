// src/suggestions.rs
//
// "Did you mean ...?" ranking: every known name within a weighted edit
// distance threshold of the guess, closest first.

use std::collections::HashSet;

use crate::alternate_names::AliasTable;
use crate::country::Country;
use crate::locale::{LocalePolicy, NameField};
use crate::weighted_distance::distance;

/// A name within reach of the guess. Lives for a single ranking pass.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchCandidate<'a> {
    pub distance: f32,
    pub target: &'a str,
}

fn field_value<'c>(country: &'c Country, field: NameField, display_field: &str) -> Option<&'c str> {
    match field {
        NameField::Short => Some(country.name()),
        NameField::Long => Some(country.name_long()),
        NameField::Abbrev => Some(country.abbrev()),
        NameField::Admin => Some(country.admin()),
        NameField::Broken => Some(country.brk_name()),
        NameField::Sort => Some(country.name_sort()),
        NameField::Localized => country.localized_name(display_field),
    }
}

/// Every name a guess may be compared against under `policy`: all alias
/// alternatives first, then the policy's suggestion fields of each country.
fn target_universe<'a>(
    countries: &'a [Country],
    aliases: &'a AliasTable,
    policy: &LocalePolicy,
) -> Vec<&'a str> {
    let mut targets: Vec<&'a str> = aliases.alternatives().collect();

    for country in countries {
        for &field in policy.suggestion_fields {
            match field_value(country, field, policy.display_field) {
                Some(name) if !name.is_empty() => targets.push(name),
                _ => {}
            }
        }
    }

    targets
}

/// Rank the names within `threshold` of a normalized guess.
///
/// Results are ordered by non-decreasing distance, ties keeping discovery
/// order, and each surface string appears once. May be empty.
pub fn suggest(
    normalized_guess: &str,
    countries: &[Country],
    aliases: &AliasTable,
    policy: &LocalePolicy,
    threshold: f32,
) -> Vec<String> {
    let guess = normalized_guess.to_lowercase();
    let targets = target_universe(countries, aliases, policy);

    let mut matches: Vec<MatchCandidate> = targets
        .iter()
        .map(|&target| MatchCandidate {
            distance: distance(&guess, &target.to_lowercase()),
            target,
        })
        .filter(|candidate| candidate.distance <= threshold)
        .collect();

    // sort_by is stable
    matches.sort_by(|a, b| a.distance.total_cmp(&b.distance));

    let mut seen = HashSet::new();
    let suggestions: Vec<String> = matches
        .into_iter()
        .filter(|candidate| seen.insert(candidate.target))
        .map(|candidate| candidate.target.to_string())
        .collect();

    log::debug!(
        "[Suggestions] '{}' ({}): {} targets, {} within {:.1}",
        normalized_guess,
        policy.locale,
        targets.len(),
        suggestions.len(),
        threshold
    );

    suggestions
}
