// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Windowed edit distance: how far is a word from its closest occurrence?
//!
//! Classic Levenshtein compares two whole strings. Here the pattern may land
//! anywhere inside the text, so the first DP row is all zeros (a match may
//! start at any offset) and the answer is the minimum of the last row (it may
//! end at any offset). This is the Sellers variant, the dynamic-programming
//! twin of Bitap.
//!
//! The key lower bound: a pattern longer than the text needs at least
//! `len(pattern) - len(text)` deletions, so those pairs are rejected before
//! allocating anything.

/// Minimum edit distance between `pattern` and any substring of `text`, if it
/// is at most `max`.
///
/// Returns `None` for an empty text. An empty pattern trivially matches with 0
/// errors, but callers never pass one.
///
/// Rows below the deepest cell still within `max` are not recomputed
/// (Ukkonen's cutoff), and the scan stops at the first exact occurrence.
pub fn substring_distance_within(pattern: &[char], text: &[char], max: usize) -> Option<usize> {
    if text.is_empty() {
        return None;
    }
    let m = pattern.len();
    if m == 0 {
        return Some(0);
    }

    // Early-exit: unmatched pattern characters must be deleted
    if m > text.len() + max {
        return None;
    }

    // col[i] = best distance of pattern[..i] ending at the current text offset.
    // col[0] stays 0: a match may start anywhere.
    let mut col: Vec<usize> = (0..=m).collect();
    let mut best = m;
    // Deepest row with col[i] <= max. Cells below it hold values > max.
    let mut last = max.min(m);

    for &tc in text {
        let mut diag = 0;
        let top = (last + 1).min(m);
        for i in 1..=top {
            let above = col[i];
            let cost = usize::from(pattern[i - 1] != tc);
            col[i] = (above + 1).min(col[i - 1] + 1).min(diag + cost);
            diag = above;
        }

        last = top;
        while col[last] > max {
            last -= 1;
        }

        if last == m && col[m] < best {
            best = col[m];
            if best == 0 {
                break;
            }
        }
    }

    (best <= max).then_some(best)
}
