//! Tests for spell checker sessions.
//!
//! Covers dictionary properties under arbitrary word lists, persistence
//! round trips, recovery from damaged files, and concurrent access.

use proptest::prelude::*;
use std::collections::BTreeSet;
use std::sync::Arc;
use std::thread;

use crate::checker::{LoadOutcome, SpellChecker};
use crate::config::dictionary::DEPTH_CEILING;
use crate::config::{SpellConfig, Validate};
use crate::data_structures::NiihauTrie;
use crate::error::dictionary::{CorruptReason, LoadError};
use crate::persistence::{self, snapshot};
use crate::tests::{word_list_strategy, word_strategy, TestFixture};

proptest! {
    /// Every added word is found afterwards.
    #[test]
    fn prop_added_words_are_found(words in word_list_strategy()) {
        let checker = SpellChecker::new(SpellConfig::default());
        for word in &words {
            checker.add(word).unwrap();
        }
        for word in &words {
            prop_assert!(checker.contains(word).unwrap());
        }

        let distinct: BTreeSet<_> = words.iter().cloned().collect();
        prop_assert_eq!(checker.len(), distinct.len());
        prop_assert_eq!(checker.words(), distinct.into_iter().collect::<Vec<_>>());
    }

    /// A dictionary word is always suggested for itself at distance zero.
    #[test]
    fn prop_present_word_suggests_itself(words in word_list_strategy(), pick in any::<prop::sample::Index>()) {
        prop_assume!(!words.is_empty());
        let checker = SpellChecker::new(SpellConfig::default());
        for word in &words {
            checker.add(word).unwrap();
        }

        let word = pick.get(&words);
        let suggestions = checker.suggest(word, 0, None).unwrap();
        prop_assert_eq!(suggestions.len(), 1);
        prop_assert_eq!(&suggestions[0].word, word);
        prop_assert_eq!(suggestions[0].distance, 0);
    }

    /// Removal never grows the trie and never disturbs other words.
    #[test]
    fn prop_remove_prunes(words in word_list_strategy(), victim in word_strategy()) {
        let mut trie: NiihauTrie = words.iter().collect();
        let before = trie.node_count();

        trie.remove(&victim);
        prop_assert!(trie.node_count() <= before);
        prop_assert!(!trie.search(&victim));
        for word in words.iter().filter(|w| **w != victim) {
            prop_assert!(trie.search(word));
        }

        // pruning leaves exactly the nodes a fresh build would need
        let rebuilt: NiihauTrie = trie.words().into_iter().collect();
        prop_assert_eq!(trie.node_count(), rebuilt.node_count());
    }

    /// Suggestions are sorted by distance, then alphabetically, and respect the threshold.
    #[test]
    fn prop_suggestions_are_ranked(words in word_list_strategy(), input in word_strategy(), max in 0usize..4) {
        let checker = SpellChecker::new(SpellConfig::default());
        for word in &words {
            checker.add(word).unwrap();
        }

        let suggestions = checker.suggest(&input, max, None).unwrap();
        for pair in suggestions.windows(2) {
            prop_assert!((pair[0].distance, &pair[0].word) < (pair[1].distance, &pair[1].word));
        }
        prop_assert!(suggestions.iter().all(|s| s.distance <= max));
    }
}

#[test]
fn test_save_and_reload_session() {
    let fixture = TestFixture::new().unwrap();
    let checker = fixture.checker("english.bin", &["apple", "banana", "cherry"]);
    checker.remove("banana").unwrap();

    let (reopened, outcome) = SpellChecker::open(fixture.config("english.bin"));
    assert!(matches!(outcome, LoadOutcome::Loaded { words: 2 }));
    assert_eq!(reopened.words(), vec!["apple", "cherry"]);
}

#[test]
fn test_corrupt_file_is_replaced() {
    let fixture = TestFixture::new().unwrap();
    let path = fixture
        .create_file("english.bin", b"definitely not a snapshot")
        .unwrap();

    let (checker, outcome) = SpellChecker::open(fixture.config("english.bin"));
    match outcome {
        LoadOutcome::Recovered {
            cause:
                LoadError::Corrupt {
                    reason: CorruptReason::BadMagic,
                    ..
                },
            persisted: true,
        } => {}
        other => panic!("unexpected outcome {other:?}"),
    }
    assert!(checker.is_empty());

    // the damaged file was overwritten with a valid empty snapshot
    let trie = persistence::load_dictionary(&path, 64).unwrap();
    assert!(trie.is_empty());
}

#[test]
fn test_tampered_file_is_detected() {
    let fixture = TestFixture::new().unwrap();
    let trie: NiihauTrie = ["alpha", "beta"].into_iter().collect();
    let mut bytes = snapshot::encode_to_vec(&trie).unwrap();
    let middle = bytes.len() / 2;
    bytes[middle] ^= 0x01;
    fixture.create_file("english.bin", &bytes).unwrap();

    let (_, outcome) = SpellChecker::open(fixture.config("english.bin"));
    assert!(matches!(
        outcome,
        LoadOutcome::Recovered {
            cause: LoadError::Corrupt {
                reason: CorruptReason::ChecksumMismatch { .. },
                ..
            },
            ..
        }
    ));
}

#[cfg(unix)]
#[test]
fn test_permission_denied_keeps_dictionary_on_disk() {
    use std::os::unix::fs::PermissionsExt;

    let fixture = TestFixture::new().unwrap();
    let path = fixture.dictionary_path("english.bin");
    let trie: NiihauTrie = ["apple", "banana"].into_iter().collect();
    persistence::save_dictionary(&trie, &path).unwrap();
    let original = std::fs::read(&path).unwrap();

    std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o000)).unwrap();
    if std::fs::read(&path).is_ok() {
        // permission bits are not enforced for this user (root)
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o644)).unwrap();
        return;
    }

    let (checker, outcome) = SpellChecker::open(fixture.config("english.bin"));
    assert!(matches!(
        outcome,
        LoadOutcome::Recovered {
            cause: LoadError::Io { .. },
            persisted: false,
        }
    ));
    checker.add("cherry").unwrap();

    std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o644)).unwrap();
    assert_eq!(std::fs::read(&path).unwrap(), original);
    let on_disk = persistence::load_dictionary(&path, 64).unwrap();
    assert_eq!(on_disk.words(), vec!["apple", "banana"]);
}

#[test]
fn test_longest_accepted_word_round_trips() {
    let fixture = TestFixture::new().unwrap();
    let mut config = fixture.config("long.bin");
    config.dictionary.max_word_length = DEPTH_CEILING;
    config.dictionary.max_snapshot_depth = DEPTH_CEILING;
    config.validate().unwrap();

    let longest = "a".repeat(DEPTH_CEILING);
    let (checker, _) = SpellChecker::open(config.clone());
    assert!(checker.add(&longest).unwrap());
    assert!(checker.add(&longest[..DEPTH_CEILING / 2]).unwrap());
    assert_eq!(checker.words().len(), 2);
    assert_eq!(checker.suggest(&longest, 0, None).unwrap().len(), 1);

    let (reopened, outcome) = SpellChecker::open(config);
    assert!(matches!(outcome, LoadOutcome::Loaded { words: 2 }));
    assert!(reopened.contains(&longest).unwrap());

    assert!(checker.remove(&longest).unwrap());
    assert_eq!(checker.len(), 1);
    assert!(matches!(
        checker.add(&"a".repeat(DEPTH_CEILING + 1)),
        Err(crate::error::SpellError::InvalidInput(_))
    ));
}

#[test]
fn test_switching_dictionaries() {
    let fixture = TestFixture::new().unwrap();
    let english = fixture.checker("english.bin", &["hello"]);
    drop(english);

    let checker = fixture.checker("french.bin", &["bonjour"]);
    let english_path = fixture.dictionary_path("english.bin");
    assert!(matches!(
        checker.load(&english_path, "english"),
        LoadOutcome::Loaded { words: 1 }
    ));
    assert_eq!(checker.language(), "english");
    assert!(checker.contains("hello").unwrap());
    assert!(!checker.contains("bonjour").unwrap());

    // mutations now land in the english file
    checker.add("world").unwrap();
    let trie = persistence::load_dictionary(&english_path, 64).unwrap();
    assert!(trie.search("world"));
}

#[test]
fn test_concurrent_readers_and_writers() {
    let fixture = TestFixture::new().unwrap();
    let checker = Arc::new(fixture.checker("shared.bin", &["seed"]));

    let writers: Vec<_> = (0..4)
        .map(|t| {
            let checker = Arc::clone(&checker);
            thread::spawn(move || {
                for i in 0..10 {
                    let word: String = std::iter::repeat('a')
                        .take(t + 1)
                        .chain(std::iter::repeat('b').take(i + 1))
                        .collect();
                    checker.add(&word).unwrap();
                }
            })
        })
        .collect();

    let readers: Vec<_> = (0..4)
        .map(|_| {
            let checker = Arc::clone(&checker);
            thread::spawn(move || {
                for _ in 0..20 {
                    assert!(checker.contains("seed").unwrap());
                    let suggestions = checker.suggest("sed", 1, None).unwrap();
                    assert_eq!(suggestions[0].word, "seed");
                }
            })
        })
        .collect();

    for handle in writers.into_iter().chain(readers) {
        handle.join().unwrap();
    }

    assert_eq!(checker.len(), 41);

    // the last autosave holds every word
    let (reopened, _) = SpellChecker::open(fixture.config("shared.bin"));
    assert_eq!(reopened.words(), checker.words());
}
