//! Graph model — derives the dependency edge set, adjacency, and leveling
//! from an immutable snapshot of stories.

pub mod model;

pub use model::{StoryGraph, dependency_edges};
