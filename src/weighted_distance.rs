// src/weighted_distance.rs
//
// Weighted Levenshtein distance where accent-only substitutions cost half

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

const INSERT_COST: f32 = 1.0;
const REMOVE_COST: f32 = 1.0;
const ACCENT_SUBSTITUTION_COST: f32 = 0.5;
const SUBSTITUTION_COST: f32 = 1.0;

/// Canonical decomposition of a character with its combining marks removed
fn strip_accents(ch: char) -> String {
    ch.to_string()
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect()
}

/// Cost of substituting `x` with `y`: nothing for identical characters, half
/// when they only differ by diacritics, full otherwise.
fn substitution(x: char, x_stripped: &str, y: char, y_stripped: &str) -> f32 {
    if x == y {
        0.0
    } else if x_stripped == y_stripped {
        ACCENT_SUBSTITUTION_COST
    } else {
        SUBSTITUTION_COST
    }
}

/// Minimal total cost of turning `a` into `b` by inserting, removing and
/// substituting characters. Both inputs are expected to be lowercased already.
/// They are composed to NFC first, so a decomposed accent counts as one
/// character.
pub fn distance(a: &str, b: &str) -> f32 {
    let a_chars: Vec<char> = a.nfc().collect();
    let b_chars: Vec<char> = b.nfc().collect();
    let a_len = a_chars.len();
    let b_len = b_chars.len();

    // Stripped forms are computed once per character instead of once per cell
    let a_stripped: Vec<String> = a_chars.iter().map(|&c| strip_accents(c)).collect();
    let b_stripped: Vec<String> = b_chars.iter().map(|&c| strip_accents(c)).collect();

    let mut matrix = vec![vec![0.0f32; b_len + 1]; a_len + 1];

    for i in 0..=a_len {
        matrix[i][0] = i as f32 * REMOVE_COST;
    }
    for j in 0..=b_len {
        matrix[0][j] = j as f32 * INSERT_COST;
    }

    for i in 1..=a_len {
        for j in 1..=b_len {
            let swap_cost = substitution(
                a_chars[i - 1],
                &a_stripped[i - 1],
                b_chars[j - 1],
                &b_stripped[j - 1],
            );

            matrix[i][j] = f32::min(
                f32::min(
                    matrix[i - 1][j] + REMOVE_COST,   // removal
                    matrix[i][j - 1] + INSERT_COST,   // insertion
                ),
                matrix[i - 1][j - 1] + swap_cost,    // substitution
            );
        }
    }

    matrix[a_len][b_len]
}
