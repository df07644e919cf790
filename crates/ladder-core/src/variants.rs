//! Upward one-letter variants of a word.
//!
//! Edge detection is symmetric, so each word only proposes substitutions
//! to letters ranked strictly after its own letter at that position. A
//! true edge {A, B} is then found exactly once: from whichever endpoint
//! holds the lower-ranked letter where the two words differ.

use crate::alphabet::Alphabet;
use crate::error::Result;
use std::iter::FusedIterator;

/// Lazy iterator over the upward variants of one word.
///
/// Positions are visited left to right; at each position the replacement
/// letters come in ascending rank order. The iterator never consults a
/// dictionary and never yields the word itself. Clone it to restart.
#[derive(Debug, Clone)]
pub struct UpwardVariants<'a> {
    alphabet: &'a Alphabet,
    chars: Vec<char>,
    ranks: Vec<usize>,
    /// Byte length of the source word, used to size each candidate.
    byte_len: usize,
    position: usize,
    next_rank: usize,
    remaining: usize,
}

impl<'a> UpwardVariants<'a> {
    /// Prepares the enumeration for `word`.
    ///
    /// Fails with `InvalidCharacter` if any character cannot be ranked.
    pub fn new(alphabet: &'a Alphabet, word: &str) -> Result<Self> {
        let ranks = alphabet.ranks_of(word)?;
        let top = alphabet.len();
        let remaining = ranks.iter().map(|&rank| top - 1 - rank).sum();
        let next_rank = ranks.first().map_or(top, |&rank| rank + 1);

        Ok(Self {
            alphabet,
            chars: word.chars().collect(),
            ranks,
            byte_len: word.len(),
            position: 0,
            next_rank,
            remaining,
        })
    }

    fn candidate(&self, letter: char) -> String {
        let mut out = String::with_capacity(self.byte_len + letter.len_utf8());
        for (i, &ch) in self.chars.iter().enumerate() {
            out.push(if i == self.position { letter } else { ch });
        }
        out
    }
}

impl Iterator for UpwardVariants<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        while self.position < self.chars.len() {
            if let Some(letter) = self.alphabet.letter(self.next_rank) {
                let candidate = self.candidate(letter);
                self.next_rank += 1;
                self.remaining -= 1;
                return Some(candidate);
            }

            self.position += 1;
            self.next_rank = self
                .ranks
                .get(self.position)
                .map_or(self.alphabet.len(), |&rank| rank + 1);
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for UpwardVariants<'_> {}

impl FusedIterator for UpwardVariants<'_> {}
