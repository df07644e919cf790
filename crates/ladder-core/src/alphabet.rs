//! Ordered alphabets and their rank tables.
//!
//! The rank of a letter decides which substitutions the enumerator
//! produces, so the table is built once and borrowed by every
//! enumeration of a build.

use crate::error::{LadderError, Result};
use crate::variants::UpwardVariants;
use std::collections::HashMap;

/// The lowercase ASCII letters, in alphabetical order.
pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";

/// An ordered set of letters with a precomputed `char -> rank` table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    /// Letters in rank order.
    letters: Vec<char>,
    /// Maps each letter to its index in `letters`.
    ranks: HashMap<char, usize>,
}

impl Default for Alphabet {
    fn default() -> Self {
        Self::lowercase()
    }
}

impl Alphabet {
    /// Creates an alphabet from its letters, in rank order.
    ///
    /// # Errors
    ///
    /// Fails on an empty letter list or a letter that appears twice.
    pub fn new(letters: &str) -> Result<Self> {
        let letters: Vec<char> = letters.chars().collect();
        if letters.is_empty() {
            return Err(LadderError::EmptyAlphabet);
        }

        let mut ranks = HashMap::with_capacity(letters.len());
        for (rank, &letter) in letters.iter().enumerate() {
            if ranks.insert(letter, rank).is_some() {
                return Err(LadderError::DuplicateLetter(letter));
            }
        }

        Ok(Self { letters, ranks })
    }

    /// The 26 lowercase ASCII letters.
    pub fn lowercase() -> Self {
        let letters: Vec<char> = LOWERCASE.chars().collect();
        let ranks = letters.iter().enumerate().map(|(i, &c)| (c, i)).collect();
        Self { letters, ranks }
    }

    /// Number of letters.
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// Rank of a letter, or `None` if it is not part of the alphabet.
    pub fn rank(&self, ch: char) -> Option<usize> {
        self.ranks.get(&ch).copied()
    }

    /// Letter at a given rank.
    pub fn letter(&self, rank: usize) -> Option<char> {
        self.letters.get(rank).copied()
    }

    pub fn contains(&self, ch: char) -> bool {
        self.ranks.contains_key(&ch)
    }

    /// Ranks every character of `word`, failing on the first foreign one.
    pub fn ranks_of(&self, word: &str) -> Result<Vec<usize>> {
        word.chars()
            .enumerate()
            .map(|(position, ch)| {
                self.rank(ch).ok_or_else(|| LadderError::InvalidCharacter {
                    word: word.to_string(),
                    ch,
                    position,
                })
            })
            .collect()
    }

    /// Checks that every character of `word` belongs to the alphabet.
    pub fn validate(&self, word: &str) -> Result<()> {
        match word.chars().enumerate().find(|(_, ch)| !self.contains(*ch)) {
            Some((position, ch)) => Err(LadderError::InvalidCharacter {
                word: word.to_string(),
                ch,
                position,
            }),
            None => Ok(()),
        }
    }

    /// Lazily enumerates every upward one-letter variant of `word`.
    ///
    /// See [`UpwardVariants`] for the exact order.
    pub fn upward_variants<'a>(&'a self, word: &str) -> Result<UpwardVariants<'a>> {
        UpwardVariants::new(self, word)
    }
}
