//! Suggestion engine.
//!
//! Scores every dictionary word against a (possibly misspelled) input with an
//! edit-distance metric, keeps those within a distance threshold, and ranks
//! them closest first.

use serde::Serialize;
use tracing::debug;

use crate::data_structures::NiihauTrie;
use crate::distance::DistanceMetric;

/// A candidate correction together with its distance from the input.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Suggestion {
    /// The dictionary word
    pub word: String,
    /// Edit distance between the input and `word`
    pub distance: usize,
}

/// Options controlling which candidates are returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuggestOptions {
    /// Metric used to score candidates
    pub metric: DistanceMetric,
    /// Candidates farther than this are dropped
    pub max_distance: usize,
    /// Maximum number of suggestions (`None` keeps all that pass)
    pub max_results: Option<usize>,
}

impl Default for SuggestOptions {
    fn default() -> Self {
        Self {
            metric: DistanceMetric::default(),
            max_distance: 2,
            max_results: None,
        }
    }
}

impl SuggestOptions {
    /// Creates options with the default metric and a threshold of 2.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the distance metric.
    pub fn metric(mut self, metric: DistanceMetric) -> Self {
        self.metric = metric;
        self
    }

    /// Sets the distance threshold.
    pub fn max_distance(mut self, max_distance: usize) -> Self {
        self.max_distance = max_distance;
        self
    }

    /// Limits the number of suggestions.
    pub fn max_results(mut self, max_results: Option<usize>) -> Self {
        self.max_results = max_results;
        self
    }
}

/// Suggests dictionary words close to `input`.
///
/// Results are sorted by ascending distance, ties alphabetically. An empty
/// dictionary, or one with no word within `max_distance`, yields an empty list.
pub fn suggest(trie: &NiihauTrie, input: &str, options: &SuggestOptions) -> Vec<Suggestion> {
    let input_len = input.chars().count();

    let mut suggestions: Vec<Suggestion> = trie
        .words()
        .into_iter()
        // Distance is never smaller than the length difference.
        .filter(|word| word.chars().count().abs_diff(input_len) <= options.max_distance)
        .filter_map(|word| {
            let distance = options.metric.distance(input, &word);
            (distance <= options.max_distance).then_some(Suggestion { word, distance })
        })
        .collect();

    suggestions.sort_by(|a, b| a.distance.cmp(&b.distance).then_with(|| a.word.cmp(&b.word)));
    if let Some(limit) = options.max_results {
        suggestions.truncate(limit);
    }

    debug!(
        input,
        candidates = trie.len(),
        returned = suggestions.len(),
        max_distance = options.max_distance,
        "Computed suggestions"
    );
    suggestions
}
