//! Insertion-ordered word catalog mapping each word to the grammatical
//! categories it satisfies.
//!
//! Iteration order is insertion order, not alphabetical, and downstream
//! enumeration order depends on it. Any reordering here silently changes
//! which candidate is produced at which step.

use std::collections::HashMap;

use crate::charset::CharClasses;
use crate::engine::ClassSource;
use crate::error::{EngineError, Result};

/// The grammatical category vocabulary a dictionary entry may carry.
pub const GRAMMAR_CATEGORIES: [&str; 8] = [
    "noun",
    "verb",
    "adverb",
    "adjective",
    "pronoun",
    "conjunction",
    "preposition",
    "interjection",
];

/// Categories reported by [`Lexicon::category_counts`], in display order.
const COUNTED_CATEGORIES: [&str; 14] = [
    "noun",
    "verb",
    "adverb",
    "adjective",
    "pronoun",
    "conjunction",
    "preposition",
    "interjection",
    "anyc",
    "punc",
    "digit",
    "lower",
    "upper",
    "letter",
];

#[derive(Debug, Clone)]
struct Entry {
    word: String,
    categories: Vec<String>,
}

#[derive(Debug, Default, Clone)]
pub struct Lexicon {
    entries: Vec<Entry>,
    index: HashMap<String, usize>,
    version: u64,
}

impl Lexicon {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.index.contains_key(word)
    }

    /// Generation counter. Committing mutations bump it; cached member
    /// lists from an older generation must be discarded.
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Adds or overwrites an entry. An overwrite keeps the word's original
    /// position. Duplicate categories collapse to their first occurrence.
    ///
    /// Inserting does not bump the catalog version: member lists cached
    /// before the insert stay live until the next committing mutation.
    pub fn insert<I, C>(&mut self, word: &str, categories: I)
    where
        I: IntoIterator<Item = C>,
        C: Into<String>,
    {
        let mut deduped: Vec<String> = Vec::new();
        for category in categories {
            let category = category.into();
            if !deduped.contains(&category) {
                deduped.push(category);
            }
        }

        match self.index.get(word) {
            Some(&at) => self.entries[at].categories = deduped,
            None => {
                self.index.insert(word.to_owned(), self.entries.len());
                self.entries.push(Entry {
                    word: word.to_owned(),
                    categories: deduped,
                });
            }
        }
    }

    /// Categories of a known word.
    pub fn categories_of(&self, word: &str) -> Result<&[String]> {
        self.index
            .get(word)
            .map(|&at| self.entries[at].categories.as_slice())
            .ok_or_else(|| EngineError::UnknownEntry(word.to_owned()))
    }

    /// Every word satisfying `token`, in catalog order. `"any"` matches
    /// regardless of category.
    pub fn members_of(&self, token: &str) -> Vec<String> {
        self.entries
            .iter()
            .filter(|entry| token == "any" || entry.categories.iter().any(|c| c == token))
            .map(|entry| entry.word.clone())
            .collect()
    }

    /// Non-committing filter: the subset of entries whose word satisfies
    /// `predicate`, as a detached catalog. The receiver is untouched.
    pub fn filter<F>(&self, predicate: F) -> Lexicon
    where
        F: Fn(&str) -> bool,
    {
        let mut filtered = Lexicon::new();
        for entry in &self.entries {
            if predicate(&entry.word) {
                filtered.insert(&entry.word, entry.categories.iter().cloned());
            }
        }
        filtered
    }

    /// Committing filter: drops every entry whose word fails `predicate`
    /// and bumps the catalog version so stale member lists are discarded.
    pub fn retain<F>(&mut self, predicate: F)
    where
        F: Fn(&str) -> bool,
    {
        self.entries.retain(|entry| predicate(&entry.word));
        self.index = self
            .entries
            .iter()
            .enumerate()
            .map(|(at, entry)| (entry.word.clone(), at))
            .collect();
        self.version += 1;
    }

    /// Entry count per recognized category, plus a synthetic `"any"` equal
    /// to the catalog size.
    pub fn category_counts(&self) -> Vec<(&'static str, usize)> {
        let mut counts: Vec<(&'static str, usize)> = COUNTED_CATEGORIES
            .iter()
            .map(|&category| {
                let count = self
                    .entries
                    .iter()
                    .filter(|entry| entry.categories.iter().any(|c| c == category))
                    .count();
                (category, count)
            })
            .collect();
        counts.push(("any", self.len()));
        counts
    }

    /// Incorporates every base character class as single-character entries,
    /// tagged with the originating class plus `anyc`, and `letter` for the
    /// two cased classes. Seeding is a bulk mutation and bumps the version.
    pub fn seed_char_classes(&mut self, classes: &CharClasses) {
        for (name, members) in classes.base_classes() {
            for unit in members {
                let mut categories = vec![name, "anyc"];
                if name == "lower" || name == "upper" {
                    categories.push("letter");
                }
                self.insert(unit, categories);
            }
        }
        self.version += 1;
    }
}

impl ClassSource for Lexicon {
    fn members_of(&self, token: &str) -> Vec<String> {
        Lexicon::members_of(self, token)
    }

    fn version(&self) -> u64 {
        Lexicon::version(self)
    }
}

/// Named word filters addressable from the command line.
pub const FILTER_NAMES: [&str; 5] = [
    "shorter_than_10",
    "shorter_than_8",
    "longer_than_3",
    "alpha_only",
    "ascii_only",
];

pub fn builtin_filter(name: &str) -> Option<fn(&str) -> bool> {
    match name {
        "shorter_than_10" => Some(|word| word.chars().count() < 10),
        "shorter_than_8" => Some(|word| word.chars().count() < 8),
        "longer_than_3" => Some(|word| word.chars().count() > 3),
        "alpha_only" => Some(|word| !word.is_empty() && word.chars().all(char::is_alphabetic)),
        "ascii_only" => Some(|word| word.is_ascii()),
        _ => None,
    }
}
