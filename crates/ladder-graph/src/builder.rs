//! Graph builder for constructing the word graph from a dictionary.
//!
//! The builder works in two passes:
//! 1. Add every word as a node, so isolated words are still represented
//! 2. Enumerate each word's upward variants and keep the ones that are
//!    dictionary words as edges
//!
//! Words are processed in ascending order, which makes node indexes and
//! edge order reproducible across runs and input permutations.

use crate::edge::{differing_position, Edge};
use crate::graph::WordGraph;
use ladder_core::WordSet;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::time::Instant;
use tracing::{debug, info, warn};

/// Knobs for a single build.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildOptions {
    /// Discover edges on the rayon thread pool.
    pub parallel: bool,
}

/// Builds a WordGraph from a WordSet.
#[derive(Debug, Clone, Default)]
pub struct GraphBuilder {
    options: BuildOptions,
}

impl GraphBuilder {
    /// Creates a sequential builder.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: BuildOptions) -> Self {
        Self { options }
    }

    /// Enables or disables parallel edge discovery.
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.options.parallel = parallel;
        self
    }

    /// Builds the graph.
    ///
    /// Mixed word lengths are accepted; words of different lengths can
    /// never be one substitution apart, so no edge joins them.
    pub fn build(&self, words: &WordSet) -> WordGraph {
        let start = Instant::now();

        if !words.is_uniform() {
            warn!(
                "Word set mixes lengths {:?}; words of different lengths stay unconnected",
                words.lengths().keys().collect::<Vec<_>>()
            );
        }

        let sorted = words.sorted();
        let mut graph = WordGraph::with_capacity(sorted.len(), sorted.len() * 2);

        // Pass 1: nodes
        for word in &sorted {
            graph.add_word(word);
        }

        // Pass 2: edges, in sorted word order either way
        let discovered: Vec<(&str, Vec<String>)> = if self.options.parallel {
            debug!(
                "Discovering edges for {} words on {} threads",
                sorted.len(),
                rayon::current_num_threads()
            );
            sorted
                .par_iter()
                .map(|&word| (word, dictionary_variants(words, word)))
                .collect()
        } else {
            sorted
                .iter()
                .map(|&word| (word, dictionary_variants(words, word)))
                .collect()
        };

        for (word, candidates) in discovered {
            let Some(from) = graph.get_index(word) else {
                continue;
            };
            for candidate in candidates {
                let (Some(to), Some(position)) = (
                    graph.get_index(&candidate),
                    differing_position(word, &candidate),
                ) else {
                    continue;
                };
                graph.add_edge(from, to, Edge::new(position));
            }
        }

        info!(
            "Built word graph: {} nodes, {} edges in {}ms",
            graph.node_count(),
            graph.edge_count(),
            start.elapsed().as_millis()
        );

        graph
    }
}

/// Upward variants of `word` that are themselves in the dictionary.
fn dictionary_variants(words: &WordSet, word: &str) -> Vec<String> {
    match words.alphabet().upward_variants(word) {
        Ok(variants) => variants
            .filter(|candidate| words.contains(candidate))
            .collect(),
        Err(e) => {
            warn!("Skipping {:?}: {}", word, e);
            Vec::new()
        }
    }
}
