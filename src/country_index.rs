// src/country_index.rs
//
// Exact, case-insensitive lookup of a guess across every name a country is
// known by.

use crate::country::Country;
use crate::locale::LocalePolicy;

/// Find the first country in `candidates` that any of its names identifies.
///
/// Checks short, long, administrative and abbreviated names (the latter with
/// and without periods), the short name with hyphens read as spaces, the
/// alternate and sort-key names, and the display name for the policy's
/// locale. A country with no display name for that locale is still matched on
/// its other fields.
pub fn find_country<'c>(
    guess: &str,
    candidates: &'c [Country],
    policy: &LocalePolicy,
) -> Option<&'c Country> {
    let guess = guess.to_lowercase();
    candidates
        .iter()
        .find(|country| names_country(&guess, country, policy.display_field))
}

fn names_country(guess: &str, country: &Country, display_field: &str) -> bool {
    let matches = |name: &str| name.to_lowercase() == guess;

    matches(country.name())
        || matches(country.name_long())
        || matches(country.admin())
        || matches(country.abbrev())
        || matches(&country.abbrev().replace('.', ""))
        || matches(&country.name().replace('-', " "))
        || matches(country.brk_name())
        || matches(country.name_sort())
        || country.localized_name(display_field).map_or(false, matches)
}
