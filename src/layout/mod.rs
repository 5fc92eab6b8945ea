//! Hierarchical layout — maps each story id to a deterministic 2D position
//! consistent with dependency order.

pub mod engine;

pub use engine::LayoutEngine;

use std::collections::HashMap;

use crate::config::LayoutConfig;
use crate::geometry::Point;
use crate::story::Story;

/// Compute the hierarchical layout for a story snapshot.
///
/// Returns a mapping from story id to the card's top-left world position.
/// Stories excluded from the leveling (cycle members) have no entry; the
/// caller keeps their previous position.
pub fn compute_layout(stories: &[Story], config: &LayoutConfig) -> HashMap<String, Point> {
    LayoutEngine::new(config.clone()).compute(stories)
}
