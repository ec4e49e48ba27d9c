//! Noun dictionary and phrase matching
//!
//! The [`FeatureDict`] maps a canonical feature name ("bedroom", "garden")
//! to the surface noun phrases that should match it in text. The
//! [`PhraseMatcher`] finds every occurrence of those phrases in a document,
//! matching on lowercased lemmas so "bathrooms" still hits "bathroom".

use crate::doc::Doc;
use crate::error::{Error, Result};
use ahash::AHashMap;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// Mapping from feature name to its surface noun phrases.
///
/// Immutable after load. Phrases are expected in lemma form ("bedroom", not
/// "bedrooms"); multi-word phrases are whitespace separated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FeatureDict(BTreeMap<String, Vec<String>>);

impl FeatureDict {
    /// Validate and wrap a name-to-phrases mapping.
    ///
    /// Every name must carry at least one phrase with at least one word.
    pub fn new(map: BTreeMap<String, Vec<String>>) -> Result<Self> {
        for (name, phrases) in &map {
            let usable = phrases.iter().any(|p| !p.trim().is_empty());
            if !usable {
                return Err(Error::EmptyDictEntry(name.clone()));
            }
        }
        Ok(Self(map))
    }

    /// Load the dictionary from a JSON file (an object of name -> [phrase]).
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        let map: BTreeMap<String, Vec<String>> = serde_json::from_str(&raw)?;
        Self::new(map)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Vec<String>)> {
        self.0.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// A dictionary phrase matched over a document's token sequence.
///
/// `[start, end)` spans token indices; the right-most token anchors feature
/// extraction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Match {
    pub name: String,
    pub start: usize,
    pub end: usize,
}

#[derive(Debug, Clone)]
struct Pattern {
    name: String,
    words: Vec<String>,
}

/// Finds all dictionary phrases in a document by lemma.
#[derive(Debug, Clone)]
pub struct PhraseMatcher {
    patterns: Vec<Pattern>,
    /// First phrase word -> indices into `patterns`, to skip most tokens.
    by_first_word: AHashMap<String, Vec<usize>>,
}

impl PhraseMatcher {
    pub fn new(dict: &FeatureDict) -> Self {
        let mut patterns = Vec::new();
        let mut by_first_word: AHashMap<String, Vec<usize>> = AHashMap::new();
        for (name, phrases) in dict.iter() {
            for phrase in phrases {
                let words: Vec<String> = phrase
                    .split_whitespace()
                    .map(|w| w.to_lowercase())
                    .collect();
                if words.is_empty() {
                    continue;
                }
                by_first_word
                    .entry(words[0].clone())
                    .or_default()
                    .push(patterns.len());
                patterns.push(Pattern {
                    name: name.clone(),
                    words,
                });
            }
        }
        Self {
            patterns,
            by_first_word,
        }
    }

    /// All matches over `doc`, sorted by `(start, end)`.
    ///
    /// Overlapping and duplicate matches are all reported; downstream
    /// consumers rely on the full set.
    pub fn find(&self, doc: &Doc) -> Vec<Match> {
        let lemmas: Vec<String> = doc
            .tokens()
            .iter()
            .map(|t| t.lemma.to_lowercase())
            .collect();

        let mut matches = Vec::new();
        for start in 0..lemmas.len() {
            let Some(candidates) = self.by_first_word.get(&lemmas[start]) else {
                continue;
            };
            for &p in candidates {
                let pattern = &self.patterns[p];
                let end = start + pattern.words.len();
                if end > lemmas.len() {
                    continue;
                }
                if lemmas[start..end] == pattern.words[..] {
                    matches.push(Match {
                        name: pattern.name.clone(),
                        start,
                        end,
                    });
                }
            }
        }
        matches.sort_by(|a, b| (a.start, a.end).cmp(&(b.start, b.end)));
        matches
    }
}
