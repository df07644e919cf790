//! Validated sets of dictionary words.

use crate::alphabet::Alphabet;
use crate::error::Result;
use std::collections::{BTreeMap, HashSet};

/// A duplicate-free set of words, every one drawn from `alphabet`.
///
/// Membership is a hash lookup, which keeps graph construction linear
/// in the number of candidates. Words of different lengths may coexist;
/// they simply never become neighbors.
#[derive(Debug, Clone, Default)]
pub struct WordSet {
    alphabet: Alphabet,
    words: HashSet<String>,
    /// Number of words per length.
    lengths: BTreeMap<usize, usize>,
}

impl WordSet {
    /// Creates an empty set over the given alphabet.
    pub fn new(alphabet: Alphabet) -> Self {
        Self {
            alphabet,
            words: HashSet::new(),
            lengths: BTreeMap::new(),
        }
    }

    /// Builds a set from an iterator of words, rejecting the first invalid one.
    pub fn from_words<I, S>(alphabet: &Alphabet, words: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut set = Self::new(alphabet.clone());
        for word in words {
            set.insert(word)?;
        }
        Ok(set)
    }

    /// Inserts a word after checking it against the alphabet.
    ///
    /// Returns `Ok(false)` if the word was already present.
    pub fn insert(&mut self, word: impl Into<String>) -> Result<bool> {
        let word = word.into();
        self.alphabet.validate(&word)?;

        let length = word.chars().count();
        if self.words.insert(word) {
            *self.lengths.entry(length).or_default() += 1;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// The alphabet every word was validated against.
    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// Iterates over the words in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    /// Returns the words in ascending lexicographic order.
    pub fn sorted(&self) -> Vec<&str> {
        let mut words: Vec<&str> = self.iter().collect();
        words.sort_unstable();
        words
    }

    /// Word lengths present in the set, with the number of words of each.
    pub fn lengths(&self) -> &BTreeMap<usize, usize> {
        &self.lengths
    }

    /// True when every word has the same length (or the set is empty).
    pub fn is_uniform(&self) -> bool {
        self.lengths.len() <= 1
    }
}
