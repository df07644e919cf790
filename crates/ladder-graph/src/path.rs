//! Word ladders: shortest paths over the word graph.
//!
//! Edges are unweighted, so a breadth-first search finds a shortest
//! ladder. Neighbors are expanded in alphabetical order, which makes the
//! chosen ladder stable when several shortest ones exist.

use crate::graph::{NodeId, WordGraph};
use std::collections::{HashMap, VecDeque};
use thiserror::Error;

/// Why a ladder query produced no ladder.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PathError {
    /// The word is not a node of the graph.
    #[error("word {0:?} not found in graph")]
    WordNotFound(String),

    /// Both words exist but lie in different connected components.
    #[error("no path between {from:?} and {to:?}")]
    NoPath { from: String, to: String },
}

impl WordGraph {
    /// Finds a shortest ladder from `source` to `target`, both inclusive.
    ///
    /// A word is a zero-step ladder to itself.
    pub fn shortest_path(&self, source: &str, target: &str) -> Result<Vec<&str>, PathError> {
        let from = self.require(source)?;
        let to = self.require(target)?;

        if from == to {
            return Ok(vec![self.graph[from].as_str()]);
        }

        let mut parents: HashMap<NodeId, NodeId> = HashMap::new();
        let mut queue = VecDeque::from([from]);
        parents.insert(from, from);

        while let Some(current) = queue.pop_front() {
            for neighbor in self.sorted_neighbors(current) {
                if parents.contains_key(&neighbor) {
                    continue;
                }
                parents.insert(neighbor, current);

                if neighbor == to {
                    return Ok(self.unwind(&parents, from, to));
                }
                queue.push_back(neighbor);
            }
        }

        Err(PathError::NoPath {
            from: source.to_string(),
            to: target.to_string(),
        })
    }

    /// Hop distance from `source` to every word reachable from it.
    pub fn distances_from(&self, source: &str) -> Result<HashMap<&str, usize>, PathError> {
        let from = self.require(source)?;

        let mut distances: HashMap<NodeId, usize> = HashMap::new();
        let mut queue = VecDeque::from([from]);
        distances.insert(from, 0);

        while let Some(current) = queue.pop_front() {
            let depth = distances[&current];
            for neighbor in self.graph.neighbors(current) {
                if !distances.contains_key(&neighbor) {
                    distances.insert(neighbor, depth + 1);
                    queue.push_back(neighbor);
                }
            }
        }

        Ok(distances
            .into_iter()
            .map(|(index, depth)| (self.graph[index].as_str(), depth))
            .collect())
    }

    /// The word farthest from `source`, with its distance.
    ///
    /// Ties go to the alphabetically smallest word.
    pub fn farthest_from(&self, source: &str) -> Result<(&str, usize), PathError> {
        let distances = self.distances_from(source)?;
        let farthest = distances
            .into_iter()
            .max_by(|(a_word, a_depth), (b_word, b_depth)| {
                a_depth.cmp(b_depth).then_with(|| b_word.cmp(a_word))
            })
            .ok_or_else(|| PathError::WordNotFound(source.to_string()))?;
        Ok(farthest)
    }

    fn require(&self, word: &str) -> Result<NodeId, PathError> {
        self.get_index(word)
            .ok_or_else(|| PathError::WordNotFound(word.to_string()))
    }

    fn sorted_neighbors(&self, index: NodeId) -> Vec<NodeId> {
        let mut neighbors: Vec<NodeId> = self.graph.neighbors(index).collect();
        neighbors.sort_unstable_by(|a, b| self.graph[*a].cmp(&self.graph[*b]));
        neighbors
    }

    fn unwind(&self, parents: &HashMap<NodeId, NodeId>, from: NodeId, to: NodeId) -> Vec<&str> {
        let mut path = vec![self.graph[to].as_str()];
        let mut current = to;
        while current != from {
            current = parents[&current];
            path.push(self.graph[current].as_str());
        }
        path.reverse();
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scenario() -> WordGraph {
        WordGraph::from_words(["cat", "cot", "cog", "dog", "abc"]).unwrap()
    }

    #[test]
    fn test_shortest_path() {
        let graph = scenario();
        assert_eq!(
            graph.shortest_path("cat", "cog").unwrap(),
            vec!["cat", "cot", "cog"]
        );
        assert_eq!(
            graph.shortest_path("dog", "cat").unwrap(),
            vec!["dog", "cog", "cot", "cat"]
        );
    }

    #[test]
    fn test_trivial_path() {
        let graph = scenario();
        assert_eq!(graph.shortest_path("abc", "abc").unwrap(), vec!["abc"]);
    }

    #[test]
    fn test_disconnected_words() {
        let graph = scenario();
        assert_eq!(
            graph.shortest_path("cat", "abc"),
            Err(PathError::NoPath {
                from: "cat".to_string(),
                to: "abc".to_string(),
            })
        );
    }

    #[test]
    fn test_unknown_words() {
        let graph = scenario();
        assert_eq!(
            graph.shortest_path("cat", "zzz"),
            Err(PathError::WordNotFound("zzz".to_string()))
        );
        assert_eq!(
            graph.shortest_path("zzz", "yyy"),
            Err(PathError::WordNotFound("zzz".to_string()))
        );
    }

    #[test]
    fn test_ties_break_alphabetically() {
        // aa -> bb has two ladders: aa-ab-bb and aa-ba-bb.
        let graph = WordGraph::from_words(["aa", "ab", "ba", "bb"]).unwrap();
        assert_eq!(graph.shortest_path("aa", "bb").unwrap(), vec!["aa", "ab", "bb"]);
    }

    #[test]
    fn test_distances() {
        let graph = scenario();
        let distances = graph.distances_from("cat").unwrap();
        assert_eq!(distances.len(), 4);
        assert_eq!(distances["cat"], 0);
        assert_eq!(distances["dog"], 3);
        assert!(!distances.contains_key("abc"));

        assert_eq!(graph.farthest_from("cat").unwrap(), ("dog", 3));
        assert_eq!(graph.farthest_from("abc").unwrap(), ("abc", 0));
        assert!(graph.distances_from("zzz").is_err());
    }
}
