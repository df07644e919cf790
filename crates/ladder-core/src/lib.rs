//! Ladder Core - Words, alphabets and neighbor enumeration
//!
//! This crate holds everything the word graph needs that is not the graph
//! itself: the ordered alphabet and its rank table, validated word sets,
//! and the upward-variant enumerator that drives edge discovery.
//!
//! # Example
//!
//! ```
//! use ladder_core::{Alphabet, WordSet};
//!
//! let alphabet = Alphabet::lowercase();
//! let words = WordSet::from_words(&alphabet, ["cold", "cord", "card"]).unwrap();
//!
//! let hits: Vec<String> = alphabet
//!     .upward_variants("cold")
//!     .unwrap()
//!     .filter(|candidate| words.contains(candidate))
//!     .collect();
//! assert_eq!(hits, vec!["cord".to_string()]);
//! ```

mod alphabet;
pub mod dictionary;
mod error;
mod variants;
mod word_set;

pub use alphabet::{Alphabet, LOWERCASE};
pub use dictionary::{load_dictionary, parse_dictionary, DictionaryConfig, LoadReport};
pub use error::{LadderError, Result};
pub use variants::UpwardVariants;
pub use word_set::WordSet;
