//! Connected components of the word graph.
//!
//! Two words share a component when some ladder joins them.

use crate::graph::{NodeId, WordGraph};
use petgraph::algo::connected_components;
use petgraph::visit::Bfs;
use std::collections::HashSet;

impl WordGraph {
    /// Number of connected components, counting isolated words.
    pub fn connected_component_count(&self) -> usize {
        connected_components(&self.graph)
    }

    /// All components as sorted word lists.
    ///
    /// Largest first; equal sizes are ordered by their first word.
    pub fn components(&self) -> Vec<Vec<&str>> {
        let mut seen: HashSet<NodeId> = HashSet::with_capacity(self.node_count());
        let mut components = Vec::new();

        for start in self.node_indexes() {
            if seen.contains(&start) {
                continue;
            }
            let component = self.collect_component(start);
            seen.extend(component.iter().filter_map(|word| self.get_index(word)));
            components.push(component);
        }

        components.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.first().cmp(&b.first())));
        components
    }

    /// The sorted component containing `word`, or `None` if it is not a node.
    pub fn component_of(&self, word: &str) -> Option<Vec<&str>> {
        let start = self.get_index(word)?;
        Some(self.collect_component(start))
    }

    fn collect_component(&self, start: NodeId) -> Vec<&str> {
        let mut bfs = Bfs::new(&self.graph, start);
        let mut words = Vec::new();
        while let Some(index) = bfs.next(&self.graph) {
            words.push(self.graph[index].as_str());
        }
        words.sort_unstable();
        words
    }
}
