// Copyright (c) 2025 Mauka MCP Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! String edit-distance metrics.
//!
//! Two dynamic-programming metrics over Unicode scalar values:
//!
//! - [`levenshtein`]: insertions, deletions and substitutions, each costing 1.
//! - [`damerau_levenshtein`]: the restricted (optimal string alignment) variant,
//!   which additionally counts a swap of two adjacent characters as a single
//!   edit. A substring that has been transposed is never edited again, so
//!   `damerau_levenshtein("ca", "abc")` is 3 rather than the unrestricted 2.
//!
//! Characters are compared exactly; callers that want case-insensitive
//! distances must normalize both inputs first.
//!
//! # Example
//!
//! ```
//! use mauka_spell_lib::distance::{damerau_levenshtein, levenshtein};
//!
//! assert_eq!(levenshtein("kitten", "sitting"), 3);
//! assert_eq!(levenshtein("ab", "ba"), 2);
//! assert_eq!(damerau_levenshtein("ab", "ba"), 1);
//! ```
//!
//! # Performance Characteristics
//!
//! Both metrics fill a full `(m + 1) x (n + 1)` table: O(m·n) time and space
//! for inputs of m and n characters.

use serde::{Deserialize, Serialize};

#[cfg(test)]
mod tests;

/// Selects which edit-distance metric to use.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DistanceMetric {
    /// Plain Levenshtein distance
    Levenshtein,
    /// Restricted Damerau-Levenshtein (optimal string alignment) distance
    #[default]
    DamerauLevenshtein,
}

impl DistanceMetric {
    /// Computes the distance between `a` and `b` with this metric.
    pub fn distance(self, a: &str, b: &str) -> usize {
        match self {
            Self::Levenshtein => levenshtein(a, b),
            Self::DamerauLevenshtein => damerau_levenshtein(a, b),
        }
    }
}

/// Minimum number of single-character insertions, deletions and substitutions
/// needed to turn `a` into `b`.
pub fn levenshtein(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    edit_table(&a, &b, false)
}

/// Like [`levenshtein`], but an adjacent transposition also costs one edit.
pub fn damerau_levenshtein(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    edit_table(&a, &b, true)
}

#[allow(clippy::needless_range_loop)]
fn edit_table(a: &[char], b: &[char], transpositions: bool) -> usize {
    let (m, n) = (a.len(), b.len());
    let mut table = vec![vec![0usize; n + 1]; m + 1];

    for i in 0..=m {
        table[i][0] = i;
    }
    for j in 0..=n {
        table[0][j] = j;
    }

    for i in 1..=m {
        for j in 1..=n {
            let cost = usize::from(a[i - 1] != b[j - 1]);

            table[i][j] = (table[i - 1][j] + 1) // deletion
                .min(table[i][j - 1] + 1) // insertion
                .min(table[i - 1][j - 1] + cost); // substitution

            if transpositions && i > 1 && j > 1 && a[i - 1] == b[j - 2] && a[i - 2] == b[j - 1] {
                table[i][j] = table[i][j].min(table[i - 2][j - 2] + cost);
            }
        }
    }

    table[m][n]
}
