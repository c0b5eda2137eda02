// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Text normalization shared by the index and the query planner.
//!
//! Both sides must normalize identically or exact matches stop scoring 0.

#[cfg(feature = "unicode-normalization")]
use unicode_normalization::UnicodeNormalization;

/// Lowercase and collapse whitespace, optionally folding diacritics.
///
/// Folding makes accented and ASCII spellings match exactly:
/// - "Café" → "cafe"
/// - "naïve" → "naive"
///
/// # Algorithm (folding, with unicode-normalization feature)
///
/// 1. NFD normalize (decompose characters into base + combining marks)
/// 2. Drop combining marks
/// 3. Lowercase
/// 4. Collapse whitespace
///
/// Without the feature the `fold_diacritics` flag is ignored; configuration
/// validation refuses to enable it in that build.
pub fn normalize(value: &str, fold_diacritics: bool) -> String {
    let lowered = if fold_diacritics {
        fold(value)
    } else {
        value.to_lowercase()
    };
    lowered.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(feature = "unicode-normalization")]
fn fold(value: &str) -> String {
    value
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .to_lowercase()
}

#[cfg(not(feature = "unicode-normalization"))]
fn fold(value: &str) -> String {
    value.to_lowercase()
}

/// Is this character a combining mark (diacritic)?
#[cfg(feature = "unicode-normalization")]
fn is_combining_mark(c: char) -> bool {
    matches!(c,
        '\u{0300}'..='\u{036F}' |  // Combining Diacritical Marks
        '\u{1AB0}'..='\u{1AFF}' |  // Combining Diacritical Marks Extended
        '\u{1DC0}'..='\u{1DFF}' |  // Combining Diacritical Marks Supplement
        '\u{20D0}'..='\u{20FF}' |  // Combining Diacritical Marks for Symbols
        '\u{FE20}'..='\u{FE2F}'    // Combining Half Marks
    )
}
