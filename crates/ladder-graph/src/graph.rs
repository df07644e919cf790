//! Core graph data structure.
//!
//! WordGraph wraps an undirected petgraph graph and adds a word index
//! for constant-time lookups. It is built once by the GraphBuilder and
//! only read afterwards.

use crate::builder::GraphBuilder;
use crate::edge::{Edge, WordEdge};
use ladder_core::{Alphabet, Result, WordSet};
use petgraph::graph::{NodeIndex, UnGraph};
use petgraph::visit::EdgeRef;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

/// Unique identifier for a word in the graph.
pub type NodeId = NodeIndex;

/// The one-letter-substitution graph over a dictionary.
///
/// Nodes are words, edges join words at Hamming distance one. There are
/// no self-loops and no parallel edges.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WordGraph {
    /// The underlying petgraph graph.
    pub(crate) graph: UnGraph<String, Edge>,

    /// Maps words to graph node indexes.
    index: HashMap<String, NodeId>,
}

impl WordGraph {
    pub(crate) fn with_capacity(nodes: usize, edges: usize) -> Self {
        Self {
            graph: UnGraph::with_capacity(nodes, edges),
            index: HashMap::with_capacity(nodes),
        }
    }

    /// Builds a graph over lowercase ASCII words.
    ///
    /// Fails with `InvalidCharacter` on the first word outside `a..=z`.
    pub fn from_words<I, S>(words: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let words = WordSet::from_words(&Alphabet::lowercase(), words)?;
        Ok(GraphBuilder::new().build(&words))
    }

    /// Adds a word, returning its existing index if already present.
    pub(crate) fn add_word(&mut self, word: &str) -> NodeId {
        if let Some(&index) = self.index.get(word) {
            return index;
        }
        let index = self.graph.add_node(word.to_string());
        self.index.insert(word.to_string(), index);
        index
    }

    pub(crate) fn add_edge(&mut self, from: NodeId, to: NodeId, edge: Edge) {
        debug_assert_ne!(from, to, "self-loop on {}", self.graph[from]);
        debug_assert!(
            self.graph.find_edge(from, to).is_none(),
            "duplicate edge {} - {}",
            self.graph[from],
            self.graph[to]
        );
        self.graph.add_edge(from, to, edge);
    }

    /// Gets the node index for a word.
    pub fn get_index(&self, word: &str) -> Option<NodeId> {
        self.index.get(word).copied()
    }

    /// Gets the word stored at a node index.
    pub fn word(&self, index: NodeId) -> Option<&str> {
        self.graph.node_weight(index).map(String::as_str)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.index.contains_key(word)
    }

    /// Returns the one-letter neighbors of a word, sorted.
    ///
    /// `None` means the word is not in the graph; an isolated word
    /// gives `Some` of an empty list.
    pub fn neighbors(&self, word: &str) -> Option<Vec<&str>> {
        let index = self.get_index(word)?;
        let mut neighbors: Vec<&str> = self
            .graph
            .neighbors(index)
            .map(|n| self.graph[n].as_str())
            .collect();
        neighbors.sort_unstable();
        Some(neighbors)
    }

    /// Number of neighbors of a word, or `None` if it is not a node.
    pub fn degree(&self, word: &str) -> Option<usize> {
        let index = self.get_index(word)?;
        Some(self.graph.neighbors(index).count())
    }

    /// Returns the number of words.
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Returns the number of edges.
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Iterates over all words in insertion (sorted) order.
    pub fn nodes(&self) -> impl Iterator<Item = &str> {
        self.graph.node_weights().map(String::as_str)
    }

    /// Iterates over all edges, each reported once, smaller word first.
    pub fn edges(&self) -> impl Iterator<Item = (&str, &str)> {
        self.graph.edge_references().map(|edge_ref| {
            let a = self.graph[edge_ref.source()].as_str();
            let b = self.graph[edge_ref.target()].as_str();
            if a <= b {
                (a, b)
            } else {
                (b, a)
            }
        })
    }

    /// Returns all edges with their endpoints for export.
    pub fn export_edges(&self) -> Vec<WordEdge> {
        self.graph
            .edge_references()
            .map(|edge_ref| {
                let (source, target) = {
                    let a = &self.graph[edge_ref.source()];
                    let b = &self.graph[edge_ref.target()];
                    if a <= b {
                        (a.clone(), b.clone())
                    } else {
                        (b.clone(), a.clone())
                    }
                };
                WordEdge {
                    source,
                    target,
                    position: edge_ref.weight().position,
                }
            })
            .collect()
    }

    /// Iterates over all node indexes.
    pub fn node_indexes(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.graph.node_indices()
    }
}

/// Summary figures for a word graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphStats {
    pub node_count: usize,
    pub edge_count: usize,
    pub components: usize,
    /// Words with no neighbors.
    pub isolated: usize,
    pub max_degree: usize,
    /// Number of words per word length.
    pub lengths: BTreeMap<usize, usize>,
}

impl WordGraph {
    /// Returns graph statistics.
    pub fn stats(&self) -> GraphStats {
        let mut isolated = 0;
        let mut max_degree = 0;
        let mut lengths = BTreeMap::new();

        for index in self.graph.node_indices() {
            let degree = self.graph.neighbors(index).count();
            if degree == 0 {
                isolated += 1;
            }
            max_degree = max_degree.max(degree);
            *lengths.entry(self.graph[index].chars().count()).or_default() += 1;
        }

        GraphStats {
            node_count: self.node_count(),
            edge_count: self.edge_count(),
            components: self.connected_component_count(),
            isolated,
            max_degree,
            lengths,
        }
    }
}
