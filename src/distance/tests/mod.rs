// Copyright (c) 2025 Mauka MCP Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Tests for the edit-distance metrics.


use super::*;
use test_case::test_case;

#[test_case("", "", 0 ; "both empty")]
#[test_case("", "abc", 3 ; "empty source")]
#[test_case("abc", "", 3 ; "empty target")]
#[test_case("kitten", "sitting", 3 ; "classic")]
#[test_case("flaw", "lawn", 2 ; "shifted")]
#[test_case("ab", "ba", 2 ; "swap costs two")]
#[test_case("ct", "cat", 1 ; "one insertion")]
#[test_case("ct", "dog", 3 ; "disjoint")]
#[test_case("café", "cafe", 1 ; "multibyte substitution")]
#[test_case("Word", "word", 1 ; "case is significant")]
fn test_levenshtein(a: &str, b: &str, expected: usize) {
    assert_eq!(levenshtein(a, b), expected);
}

#[test_case("", "", 0 ; "both empty")]
#[test_case("", "abc", 3 ; "empty source")]
#[test_case("ab", "ba", 1 ; "single transposition")]
#[test_case("teh", "the", 1 ; "typo transposition")]
#[test_case("abcd", "badc", 2 ; "two transpositions")]
#[test_case("ca", "abc", 3 ; "restricted variant limit")]
#[test_case("kitten", "sitting", 3 ; "no transpositions")]
#[test_case("aa", "aa", 0 ; "equal repeated chars")]
#[test_case("ct", "cats", 2 ; "two insertions")]
fn test_damerau_levenshtein(a: &str, b: &str, expected: usize) {
    assert_eq!(damerau_levenshtein(a, b), expected);
}

#[test]
fn test_metric_dispatch() {
    assert_eq!(DistanceMetric::Levenshtein.distance("ab", "ba"), 2);
    assert_eq!(DistanceMetric::DamerauLevenshtein.distance("ab", "ba"), 1);
    assert_eq!(DistanceMetric::default(), DistanceMetric::DamerauLevenshtein);
}

#[test]
fn test_metric_serde_names() {
    let json = serde_json::to_string(&DistanceMetric::DamerauLevenshtein).unwrap();
    assert_eq!(json, "\"damerau_levenshtein\"");

    let metric: DistanceMetric = serde_json::from_str("\"levenshtein\"").unwrap();
    assert_eq!(metric, DistanceMetric::Levenshtein);
}
