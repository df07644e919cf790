//! Ladder Graph - One-letter-substitution word graphs
//!
//! This crate turns a validated word set into an undirected graph in
//! which two words are adjacent when they differ at exactly one position,
//! and answers ladder queries over it.
//!
//! # Architecture
//!
//! The graph uses petgraph internally with a word index on top. Edges are
//! discovered by enumerating each word's upward variants and keeping the
//! ones present in the dictionary, so every edge is found exactly once.
//!
//! # Example
//!
//! ```
//! use ladder_graph::{PathError, WordGraph};
//!
//! let graph = WordGraph::from_words(["cat", "cot", "cog", "dog", "abc"]).unwrap();
//! assert_eq!(graph.edge_count(), 3);
//!
//! assert_eq!(graph.shortest_path("cat", "cog").unwrap(), vec!["cat", "cot", "cog"]);
//! assert!(matches!(graph.shortest_path("cat", "abc"), Err(PathError::NoPath { .. })));
//! ```

mod builder;
mod components;
mod edge;
mod graph;
mod path;

pub use builder::{BuildOptions, GraphBuilder};
pub use edge::{differing_position, Edge, WordEdge};
pub use graph::{GraphStats, NodeId, WordGraph};
pub use path::PathError;
