//! storymap — dependency graph model and hierarchical layout engine for a
//! story-mapping canvas.
//!
//! Stories are cards connected by dependency edges. This crate derives the
//! edge set from a story snapshot, detects cycles, levels the graph, assigns
//! tree-like coordinates, interpolates positions over time, and runs the
//! drag gesture that creates new edges. Rendering, pan/zoom, and the UI
//! shell are external collaborators.

pub mod animate;
pub mod config;
pub mod drag;
pub mod geometry;
pub mod graph;
pub mod layout;
pub mod store;
pub mod story;

#[cfg(feature = "wasm")]
pub mod wasm;

use std::collections::HashMap;

pub use animate::PositionAnimator;
pub use config::LayoutConfig;
pub use drag::{DragGesture, DropOutcome, EdgeRejection};
pub use geometry::{Point, Rect, StageTransform};
pub use graph::{StoryGraph, dependency_edges};
pub use store::StoryStore;
pub use story::{DragState, Status, Story};

/// Compute the hierarchical layout for a story snapshot.
///
/// See [`layout::compute_layout`].
pub fn compute_layout(stories: &[Story], config: &LayoutConfig) -> HashMap<String, Point> {
    layout::compute_layout(stories, config)
}

/// True if adding "dependent depends on depends_on" keeps the dependency
/// graph acyclic.
pub fn is_acyclic_after_adding(stories: &[Story], dependent_id: &str, depends_on_id: &str) -> bool {
    StoryGraph::from_stories(stories).is_acyclic_after_adding(dependent_id, depends_on_id)
}
