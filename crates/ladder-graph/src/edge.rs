//! Edge types for the word graph.
//!
//! Every edge joins two words that differ at exactly one position. The
//! edge remembers that position so ladders can be rendered with the
//! changed letter highlighted.

use serde::{Deserialize, Serialize};

/// Weight stored on each graph edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge {
    /// Character index where the two words differ.
    pub position: usize,
}

impl Edge {
    pub fn new(position: usize) -> Self {
        Self { position }
    }
}

/// An edge with its endpoints, for export.
///
/// `source` is always the lexicographically smaller word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordEdge {
    pub source: String,
    pub target: String,
    pub position: usize,
}

/// Returns the single position where `a` and `b` differ.
///
/// `None` if the words have different lengths or do not differ in
/// exactly one position.
pub fn differing_position(a: &str, b: &str) -> Option<usize> {
    let mut a_chars = a.chars();
    let mut b_chars = b.chars();
    let mut found = None;
    let mut position = 0;

    loop {
        match (a_chars.next(), b_chars.next()) {
            (Some(x), Some(y)) => {
                if x != y {
                    if found.is_some() {
                        return None;
                    }
                    found = Some(position);
                }
            }
            (None, None) => return found,
            _ => return None,
        }
        position += 1;
    }
}
