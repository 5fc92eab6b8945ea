//! Tree-like coordinate assignment over topological levels.
//!
//! Depth axis is vertical: level index strictly determines the row, so a
//! dependency always sits above its dependents. Cross-axis policy is
//! recursive parent-centering: root-level stories spread evenly across a
//! nominal canvas width, and each story's not-yet-placed dependents are
//! centered under it, spaced by `card_width + node_separation`, depth-first.
//! A story reachable from several parents keeps the position written by the
//! first parent that reaches it (no averaging).

use std::collections::{HashMap, HashSet};

use crate::config::LayoutConfig;
use crate::geometry::Point;
use crate::graph::StoryGraph;
use crate::story::Story;

pub struct LayoutEngine {
    config: LayoutConfig,
}

impl LayoutEngine {
    pub fn new(config: LayoutConfig) -> Self {
        Self { config }
    }

    pub fn with_defaults() -> Self {
        Self::new(LayoutConfig::default())
    }

    /// Row coordinate for a dependency level.
    fn depth_coordinate(&self, level: usize) -> f64 {
        self.config.margin
            + level as f64 * (self.config.card_height + self.config.rank_separation)
    }

    /// Compute positions (top-left corners, world coordinates) for every
    /// leveled story. Pure and deterministic: identical snapshots yield
    /// identical positions, independent of the stories' current positions.
    pub fn compute(&self, stories: &[Story]) -> HashMap<String, Point> {
        let graph = StoryGraph::from_stories(stories);
        let levels = graph.topological_levels();
        let mut positions: HashMap<String, Point> = HashMap::new();
        if levels.is_empty() {
            return positions;
        }

        // Level index per story id; cycle members are absent.
        let mut level_of: HashMap<&str, usize> = HashMap::new();
        for (depth, level) in levels.iter().enumerate() {
            for id in level {
                level_of.insert(id.as_str(), depth);
            }
        }

        // Dependents per story id, in collection order.
        let mut dependents: HashMap<&str, Vec<&str>> = HashMap::new();
        for story in stories {
            for dep_id in &story.dependencies {
                dependents
                    .entry(dep_id.as_str())
                    .or_default()
                    .push(story.id.as_str());
            }
        }

        // Roots spread evenly across the nominal canvas width.
        let roots = &levels[0];
        let slot = self.config.canvas_width / roots.len() as f64;
        for (i, id) in roots.iter().enumerate() {
            let x = self.config.margin + (i as f64 + 0.5) * slot - self.config.card_width / 2.0;
            positions.insert(id.clone(), Point::new(x, self.depth_coordinate(0)));
        }

        // Depth-first expansion from each root. `expanded` guards against
        // re-walking shared subtrees (the leveled subgraph is acyclic, so
        // this terminates).
        let mut expanded: HashSet<&str> = HashSet::new();
        let mut stack: Vec<&str> = roots.iter().rev().map(String::as_str).collect();
        while let Some(parent_id) = stack.pop() {
            if !expanded.insert(parent_id) {
                continue;
            }
            let Some(children) = dependents.get(parent_id) else {
                continue;
            };
            let Some(parent_pos) = positions.get(parent_id).copied() else {
                continue;
            };
            let parent_center = parent_pos.x + self.config.card_width / 2.0;

            let unplaced: Vec<&str> = children
                .iter()
                .copied()
                .filter(|c| !positions.contains_key(*c) && level_of.contains_key(*c))
                .collect();
            if !unplaced.is_empty() {
                let step = self.config.card_width + self.config.node_separation;
                let row_width =
                    self.config.card_width + step * (unplaced.len() - 1) as f64;
                let mut x = parent_center - row_width / 2.0;
                for child in &unplaced {
                    let depth = level_of[*child];
                    positions.insert((*child).to_string(), Point::new(x, self.depth_coordinate(depth)));
                    x += step;
                }
            }

            for &child in children.iter().rev() {
                if positions.contains_key(child) {
                    stack.push(child);
                }
            }
        }

        positions
    }
}

#[cfg(test)]
#[path = "../../tests/unit/test_layout_engine.rs"]
mod tests;
