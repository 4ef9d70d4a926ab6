// src/normalizer.rs
//
// Canonicalizes raw player input before any lookup happens

use once_cell::sync::Lazy;
use regex::Regex;
use unicode_normalization::UnicodeNormalization;

// "st lucia" and "st. lucia" should compare equal
static LEADING_SAINT_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^st\s").unwrap()
});

/// Normalize a raw guess into the form used for alias and country lookup.
///
/// Trims, lowercases, composes to NFC, spells out `&` as `and` and expands a
/// leading `st ` to `st. `. Total over any input, including the empty string.
pub fn normalize(raw: &str) -> String {
    let lowered: String = raw.trim().to_lowercase().nfc().collect();
    let spelled_out = lowered.replace('&', "and");

    LEADING_SAINT_PATTERN
        .replace(&spelled_out, "st. ")
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trim_and_lowercase() {
        assert_eq!(normalize("  FRANCE  "), "france");
        assert_eq!(normalize("\tCôte d'Ivoire\n"), "côte d'ivoire");
    }

    #[test]
    fn test_ampersand_is_spelled_out() {
        assert_eq!(normalize("Trinidad & Tobago"), "trinidad and tobago");
        assert_eq!(normalize("a&b&c"), "aandbandc");
    }

    #[test]
    fn test_leading_saint_gets_a_period() {
        assert_eq!(normalize("st lucia"), "st. lucia");
        assert_eq!(normalize("ST Kitts and Nevis"), "st. kitts and nevis");
        assert_eq!(normalize("st. lucia"), "st. lucia");

        // Only a leading "st" followed by whitespace is expanded
        assert_eq!(normalize("east timor"), "east timor");
        assert_eq!(normalize("stlucia"), "stlucia");
        assert_eq!(normalize("st"), "st");
    }

    #[test]
    fn test_decomposed_accents_are_composed() {
        assert_eq!(normalize("Cura\u{0063}\u{0327}ao"), "curaçao");
    }

    #[test]
    fn test_degenerate_inputs() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("   "), "");
        assert_eq!(normalize("!!!"), "!!!");
        assert_eq!(normalize("日本"), "日本");
    }

    #[test]
    fn test_idempotent() {
        let samples = [
            "", "  St Lucia ", "Trinidad & Tobago", "ST. KITTS", "&&", "st &",
            "Côte d'Ivoire", "Cura\u{0063}\u{0327}ao", "  GUINEA-BISSAU", "st  st lucia",
            "xxzzyy123", "日本",
        ];
        for sample in samples {
            let once = normalize(sample);
            assert_eq!(normalize(&once), once, "normalize is not idempotent for {:?}", sample);
        }
    }
}
