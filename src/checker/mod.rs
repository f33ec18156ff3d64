//! Spell checker session.
//!
//! [`SpellChecker`] owns one dictionary trie, the language label of the
//! session, and the path the dictionary is bound to. It is the API the outer
//! layers (command line, games) call into.
//!
//! # Concurrency
//!
//! All state sits behind a single `parking_lot::RwLock`. Lookups and
//! suggestions take shared locks. `add` and `remove` take the write lock and,
//! when autosave is on, downgrade it to an upgradable read for the save, so
//! writers and saves are serialized while readers keep going.
//!
//! # Example
//!
//! ```
//! use mauka_spell_lib::checker::SpellChecker;
//! use mauka_spell_lib::config::SpellConfig;
//!
//! let checker = SpellChecker::new(SpellConfig::default());
//! checker.add("cat").unwrap();
//! checker.add("dog").unwrap();
//!
//! assert!(checker.contains("cat").unwrap());
//! let suggestions = checker.suggest("ct", 1, None).unwrap();
//! assert_eq!(suggestions[0].word, "cat");
//! ```

use std::borrow::Cow;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use parking_lot::{RwLock, RwLockUpgradableReadGuard, RwLockWriteGuard};
use tracing::{debug, info, warn};

use crate::config::dictionary::DictionaryConfig;
use crate::config::suggest::SuggestConfig;
use crate::config::SpellConfig;
use crate::data_structures::NiihauTrie;
use crate::error::dictionary::LoadError;
use crate::error::input::InvalidInputError;
use crate::error::{ErrorContext, ErrorReporter, SpellError, SpellResult};
use crate::persistence;
use crate::suggest::{self, SuggestOptions, Suggestion};

const COMPONENT: &str = "spell_checker";

/// Result of [`SpellChecker::load`].
#[derive(Debug, Clone)]
pub enum LoadOutcome {
    /// The snapshot was read successfully.
    Loaded {
        /// Number of words loaded
        words: usize,
    },
    /// The snapshot was missing or unreadable; the session now holds an empty dictionary.
    Recovered {
        /// Why the snapshot could not be used
        cause: LoadError,
        /// Whether the empty dictionary was written back to the path
        persisted: bool,
    },
}

impl LoadOutcome {
    /// Whether the load fell back to an empty dictionary.
    pub fn is_recovered(&self) -> bool {
        matches!(self, Self::Recovered { .. })
    }
}

/// Result of [`SpellChecker::check`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckOutcome {
    /// The word is in the dictionary.
    Correct,
    /// The word is not in the dictionary.
    Misspelled {
        /// Closest dictionary words, best first (possibly empty)
        suggestions: Vec<Suggestion>,
    },
}

#[derive(Debug)]
struct Session {
    trie: NiihauTrie,
    language: String,
    path: Option<PathBuf>,
}

/// A spell checking session over one dictionary.
#[derive(Debug)]
pub struct SpellChecker {
    session: RwLock<Session>,
    dictionary: DictionaryConfig,
    suggest: SuggestConfig,
    reporter: Option<Arc<dyn ErrorReporter>>,
}

impl SpellChecker {
    /// Creates a session with an empty in-memory dictionary.
    ///
    /// The session is not bound to a file until [`SpellChecker::load`] is called,
    /// so mutations are not persisted before that.
    pub fn new(config: SpellConfig) -> Self {
        let session = Session {
            trie: NiihauTrie::new(),
            language: config.dictionary.language.clone(),
            path: None,
        };
        Self {
            session: RwLock::new(session),
            dictionary: config.dictionary,
            suggest: config.suggest,
            reporter: None,
        }
    }

    /// Creates a session and loads the configured dictionary file.
    pub fn open(config: SpellConfig) -> (Self, LoadOutcome) {
        let path = config.dictionary.path.clone();
        let language = config.dictionary.language.clone();
        let checker = Self::new(config);
        let outcome = checker.load(path, language);
        (checker, outcome)
    }

    /// Sets the reporter told about recovered load failures and failed saves.
    pub fn with_reporter(mut self, reporter: Arc<dyn ErrorReporter>) -> Self {
        self.reporter = Some(reporter);
        self
    }

    /// Loads the dictionary at `path` and binds the session to it.
    ///
    /// Never fails. When the file is missing or corrupt, the session falls
    /// back to an empty dictionary and immediately writes it to `path`, so the
    /// next load succeeds. When the file exists but cannot be read, the
    /// session falls back to an empty dictionary that is not bound to any
    /// path, leaving the file untouched.
    pub fn load<P: AsRef<Path>, L: Into<String>>(&self, path: P, language: L) -> LoadOutcome {
        let path = path.as_ref().to_path_buf();
        let language = language.into();

        match persistence::load_dictionary(&path, self.dictionary.max_snapshot_depth) {
            Ok(trie) => {
                let words = trie.len();
                info!(language = %language, path = %path.display(), words, "Dictionary loaded");
                *self.session.write() = Session {
                    trie,
                    language,
                    path: Some(path),
                };
                LoadOutcome::Loaded { words }
            }
            Err(cause @ LoadError::Io { .. }) => {
                warn!(
                    language = %language,
                    path = %path.display(),
                    error = %cause,
                    "Dictionary file is unreadable, using an unsaved empty dictionary"
                );
                self.report(
                    SpellError::Load(cause.clone()),
                    "recovered with an empty dictionary; the file was left untouched",
                );

                *self.session.write() = Session {
                    trie: NiihauTrie::new(),
                    language,
                    path: None,
                };
                LoadOutcome::Recovered {
                    cause,
                    persisted: false,
                }
            }
            Err(cause) => {
                match &cause {
                    LoadError::NotFound(_) => warn!(
                        language = %language,
                        path = %path.display(),
                        "Dictionary file not found, creating a new one"
                    ),
                    _ => warn!(
                        language = %language,
                        path = %path.display(),
                        error = %cause,
                        "Error loading dictionary, creating a new one"
                    ),
                }
                self.report(
                    SpellError::Load(cause.clone()),
                    "recovered with an empty dictionary",
                );

                let session = Session {
                    trie: NiihauTrie::new(),
                    language,
                    path: Some(path.clone()),
                };
                let mut guard = self.session.write();
                *guard = session;
                let guard = RwLockWriteGuard::downgrade_to_upgradable(guard);
                let persisted = self.persist(&guard.trie, &path).is_ok();

                LoadOutcome::Recovered { cause, persisted }
            }
        }
    }

    /// Saves the dictionary to `path`.
    ///
    /// Failures are returned (and reported) so the caller can warn that
    /// changes were not stored; the in-memory dictionary is unaffected.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> SpellResult<()> {
        let session = self.session.upgradable_read();
        self.persist(&session.trie, path.as_ref())
    }

    /// Checks whether `word` is in the dictionary.
    pub fn contains(&self, word: &str) -> SpellResult<bool> {
        let word = self.prepare(word)?;
        Ok(self.session.read().trie.search(&*word))
    }

    /// Adds `word` to the dictionary.
    ///
    /// # Returns
    ///
    /// * `Ok(true)` - The word was newly added
    /// * `Ok(false)` - The word was already present
    /// * `Err(SpellError::InvalidInput)` - The word was rejected
    /// * `Err(SpellError::Persist)` - The word was added in memory but autosave failed
    pub fn add(&self, word: &str) -> SpellResult<bool> {
        let word = self.prepare(word)?;
        let mut session = self.session.write();
        let added = session.trie.insert(&*word);
        debug!(word = %word, added, "Add word");

        if added {
            self.save_bound(RwLockWriteGuard::downgrade_to_upgradable(session))?;
        }
        Ok(added)
    }

    /// Removes `word` from the dictionary.
    ///
    /// # Returns
    ///
    /// * `Ok(true)` - The word was removed
    /// * `Ok(false)` - The word was not present
    /// * `Err(SpellError::InvalidInput)` - The word was rejected
    /// * `Err(SpellError::Persist)` - The word was removed in memory but autosave failed
    pub fn remove(&self, word: &str) -> SpellResult<bool> {
        let word = self.prepare(word)?;
        let mut session = self.session.write();
        let removed = session.trie.remove(&*word);
        debug!(word = %word, removed, "Remove word");

        if removed {
            self.save_bound(RwLockWriteGuard::downgrade_to_upgradable(session))?;
        }
        Ok(removed)
    }

    /// Suggests corrections for `word`.
    ///
    /// Uses the configured metric; `max_distance` and `max_results` override
    /// the configured limits for this call.
    pub fn suggest(
        &self,
        word: &str,
        max_distance: usize,
        max_results: Option<usize>,
    ) -> SpellResult<Vec<Suggestion>> {
        let word = self.prepare(word)?;
        let options = SuggestOptions::from(&self.suggest)
            .max_distance(max_distance)
            .max_results(max_results);
        Ok(suggest::suggest(&self.session.read().trie, &word, &options))
    }

    /// Checks the spelling of `word`, suggesting corrections with the
    /// configured defaults when it is not in the dictionary.
    pub fn check(&self, word: &str) -> SpellResult<CheckOutcome> {
        let word = self.prepare(word)?;
        let session = self.session.read();
        if session.trie.search(&*word) {
            return Ok(CheckOutcome::Correct);
        }

        let options = SuggestOptions::from(&self.suggest);
        Ok(CheckOutcome::Misspelled {
            suggestions: suggest::suggest(&session.trie, &word, &options),
        })
    }

    /// Changes the language label of the session.
    ///
    /// The label is metadata only; the loaded dictionary is kept.
    pub fn change_language<L: Into<String>>(&self, language: L) {
        let language = language.into();
        info!(language = %language, "Language changed");
        self.session.write().language = language;
    }

    /// The language label of the session.
    pub fn language(&self) -> String {
        self.session.read().language.clone()
    }

    /// The dictionary file the session is bound to, if any.
    pub fn dictionary_path(&self) -> Option<PathBuf> {
        self.session.read().path.clone()
    }

    /// Every word in the dictionary, alphabetically.
    pub fn words(&self) -> Vec<String> {
        self.session.read().trie.words()
    }

    /// Suggestion defaults used by [`SpellChecker::check`].
    pub fn suggest_config(&self) -> &SuggestConfig {
        &self.suggest
    }

    /// Whether mutations are written to the bound dictionary file.
    pub fn autosave(&self) -> bool {
        self.dictionary.autosave
    }

    /// Number of words in the dictionary.
    pub fn len(&self) -> usize {
        self.session.read().trie.len()
    }

    /// Whether the dictionary holds no words.
    pub fn is_empty(&self) -> bool {
        self.session.read().trie.is_empty()
    }

    /// Checks that `word` is acceptable dictionary input: non-empty, purely
    /// alphabetic, and no longer than the configured maximum.
    pub fn validate_word(&self, word: &str) -> Result<(), InvalidInputError> {
        if word.is_empty() {
            return Err(InvalidInputError::Empty);
        }

        if let Some(ch) = word.chars().find(|c| !c.is_alphabetic()) {
            return Err(InvalidInputError::NonAlphabetic {
                word: word.to_string(),
                ch,
            });
        }

        if word.chars().count() > self.dictionary.max_word_length {
            return Err(InvalidInputError::TooLong {
                word: word.to_string(),
                max_length: self.dictionary.max_word_length,
            });
        }

        Ok(())
    }

    fn prepare<'a>(&self, word: &'a str) -> SpellResult<Cow<'a, str>> {
        self.validate_word(word)?;
        if self.dictionary.case_sensitive {
            Ok(Cow::Borrowed(word))
        } else {
            Ok(Cow::Owned(word.to_lowercase()))
        }
    }

    fn save_bound(&self, session: RwLockUpgradableReadGuard<'_, Session>) -> SpellResult<()> {
        if !self.dictionary.autosave {
            return Ok(());
        }
        match &session.path {
            Some(path) => self.persist(&session.trie, path),
            None => Ok(()),
        }
    }

    fn persist(&self, trie: &NiihauTrie, path: &Path) -> SpellResult<()> {
        match persistence::save_dictionary(trie, path) {
            Ok(()) => {
                info!(path = %path.display(), words = trie.len(), "Dictionary saved");
                Ok(())
            }
            Err(source) => {
                warn!(path = %path.display(), error = %source, "Failed to save dictionary");
                self.report(
                    SpellError::Persist {
                        path: path.to_path_buf(),
                        source: std::io::Error::new(source.kind(), source.to_string()),
                    },
                    "changes were kept in memory only",
                );
                Err(SpellError::Persist {
                    path: path.to_path_buf(),
                    source,
                })
            }
        }
    }

    fn report(&self, error: SpellError, details: &str) {
        if let Some(reporter) = &self.reporter {
            reporter.report(ErrorContext::new(error, COMPONENT).with_details(details));
        }
    }
}
