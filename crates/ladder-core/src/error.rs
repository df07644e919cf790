//! Error types for word validation and dictionary loading.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised while validating words or reading a dictionary.
#[derive(Error, Debug)]
pub enum LadderError {
    /// A word contains a character that is not part of the alphabet.
    #[error("invalid character {ch:?} at position {position} in word {word:?}")]
    InvalidCharacter {
        word: String,
        ch: char,
        position: usize,
    },

    #[error("alphabet must contain at least one letter")]
    EmptyAlphabet,

    #[error("letter {0:?} appears more than once in the alphabet")]
    DuplicateLetter(char),

    #[error("word length must be at least 1")]
    ZeroWordLength,

    #[error("failed to read dictionary {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Read failure on a stream with no known path.
    #[error("failed to read dictionary: {0}")]
    Read(#[from] std::io::Error),

    /// A dictionary line produced a word the alphabet rejects.
    #[error("dictionary line {line}: {source}")]
    InvalidEntry {
        line: usize,
        #[source]
        source: Box<LadderError>,
    },
}

impl LadderError {
    pub fn io(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    pub(crate) fn at_line(line: usize, source: LadderError) -> Self {
        Self::InvalidEntry {
            line,
            source: Box::new(source),
        }
    }
}

pub type Result<T> = std::result::Result<T, LadderError>;
