//! StoryGraph — a petgraph DiGraph derived from a story snapshot, for cycle
//! detection and topological leveling.
//!
//! The graph is always rebuilt from the current stories, never mutated in
//! place. An edge runs from a dependency to its dependent: `(from, to)`
//! means `from` must be complete before `to`. A dependency id with no
//! matching story produces no edge (dead-end), so malformed snapshots
//! degrade instead of failing.

use std::collections::HashMap;

use petgraph::Direction;
use petgraph::algo::is_cyclic_directed;
use petgraph::graph::{DiGraph, NodeIndex};

use crate::story::Story;

pub struct StoryGraph {
    /// Node weight is the story id. Node insertion order follows the story
    /// collection, which keeps every derived iteration deterministic.
    digraph: DiGraph<String, ()>,
    /// Maps story id → petgraph NodeIndex.
    node_index: HashMap<String, NodeIndex>,
}

impl StoryGraph {
    /// Build the graph for the given story snapshot.
    ///
    /// Duplicate story ids are a caller contract violation; the first
    /// occurrence wins. Dangling dependency ids are skipped.
    pub fn from_stories(stories: &[Story]) -> Self {
        let mut digraph: DiGraph<String, ()> = DiGraph::new();
        let mut node_index: HashMap<String, NodeIndex> = HashMap::new();

        for story in stories {
            if !node_index.contains_key(&story.id) {
                let idx = digraph.add_node(story.id.clone());
                node_index.insert(story.id.clone(), idx);
            }
        }

        for story in stories {
            let Some(&to_idx) = node_index.get(&story.id) else {
                continue;
            };
            for dep_id in &story.dependencies {
                if let Some(&from_idx) = node_index.get(dep_id) {
                    digraph.add_edge(from_idx, to_idx, ());
                }
            }
        }

        Self {
            digraph,
            node_index,
        }
    }

    pub fn node_count(&self) -> usize {
        self.digraph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.digraph.edge_count()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.node_index.contains_key(id)
    }

    /// Number of resolvable dependencies of `id` (0 for unknown ids).
    pub fn in_degree(&self, id: &str) -> usize {
        match self.node_index.get(id) {
            None => 0,
            Some(&idx) => self
                .digraph
                .edges_directed(idx, Direction::Incoming)
                .count(),
        }
    }

    /// Number of resolvable dependents of `id` (0 for unknown ids).
    pub fn out_degree(&self, id: &str) -> usize {
        match self.node_index.get(id) {
            None => 0,
            Some(&idx) => self
                .digraph
                .edges_directed(idx, Direction::Outgoing)
                .count(),
        }
    }

    /// All `(from, to)` edge id pairs in insertion order: stories in
    /// collection order, then each story's dependency list in list order.
    pub fn edges(&self) -> Vec<(String, String)> {
        self.digraph
            .edge_indices()
            .map(|eidx| {
                let (from_idx, to_idx) = self.digraph.edge_endpoints(eidx).unwrap();
                (self.digraph[from_idx].clone(), self.digraph[to_idx].clone())
            })
            .collect()
    }

    /// True iff the dependency graph contains at least one cycle. Runs in
    /// O(V+E); self-loops and indirect cycles both count.
    pub fn has_cycle(&self) -> bool {
        is_cyclic_directed(&self.digraph)
    }

    /// Kahn frontier leveling.
    ///
    /// Level 0 holds the stories with no resolvable dependencies. Removing a
    /// frontier decrements the remaining in-degree of its dependents; the
    /// ones that reach zero form the next level. Stories on or behind a
    /// cycle never reach in-degree zero and are silently excluded — callers
    /// enforce acyclicity at edge-creation time.
    pub fn topological_levels(&self) -> Vec<Vec<String>> {
        let mut in_deg: HashMap<NodeIndex, usize> = self
            .digraph
            .node_indices()
            .map(|idx| {
                (
                    idx,
                    self.digraph.edges_directed(idx, Direction::Incoming).count(),
                )
            })
            .collect();

        let mut frontier: Vec<NodeIndex> = self
            .digraph
            .node_indices()
            .filter(|idx| in_deg[idx] == 0)
            .collect();

        let mut levels: Vec<Vec<String>> = Vec::new();
        while !frontier.is_empty() {
            levels.push(
                frontier
                    .iter()
                    .map(|&idx| self.digraph[idx].clone())
                    .collect(),
            );

            let mut next: Vec<NodeIndex> = Vec::new();
            for &idx in &frontier {
                for succ in self.digraph.neighbors_directed(idx, Direction::Outgoing) {
                    if let Some(deg) = in_deg.get_mut(&succ) {
                        *deg -= 1;
                        if *deg == 0 {
                            next.push(succ);
                        }
                    }
                }
            }
            frontier = next;
        }

        levels
    }

    /// True if adding "dependent depends on depends_on" keeps the graph
    /// acyclic. A self-edge is always a cycle; ids not present in the
    /// snapshot cannot close one.
    pub fn is_acyclic_after_adding(&self, dependent_id: &str, depends_on_id: &str) -> bool {
        if dependent_id == depends_on_id {
            return false;
        }
        let (Some(&from_idx), Some(&to_idx)) = (
            self.node_index.get(depends_on_id),
            self.node_index.get(dependent_id),
        ) else {
            return true;
        };

        let mut candidate = self.digraph.clone();
        candidate.add_edge(from_idx, to_idx, ());
        !is_cyclic_directed(&candidate)
    }
}

/// Every `(dependency_id, story_id)` pair listed in the snapshot, in story
/// order then dependency-list order.
///
/// Unlike [`StoryGraph::edges`], pairs whose dependency id has no matching
/// story are included; the arrow renderer filters those itself.
pub fn dependency_edges(stories: &[Story]) -> Vec<(String, String)> {
    let mut edges = Vec::new();
    for story in stories {
        for dep_id in &story.dependencies {
            edges.push((dep_id.clone(), story.id.clone()));
        }
    }
    edges
}

#[cfg(test)]
#[path = "../../tests/unit/test_graph_model.rs"]
mod tests;
