//! Story data model: the card payload and per-gesture drag state.
//!
//! Stories are owned by the `StoryStore`; everything here is plain data.
//! The display fields (title, status, assignee, points) are opaque payload
//! as far as the graph and layout code is concerned.

use serde::{Deserialize, Serialize};

use crate::geometry::Point;

// ─── Status ──────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Status {
    #[default]
    Todo,
    InProgress,
    Done,
}

// ─── Story ───────────────────────────────────────────────────────────────────

/// A visual card representing a unit of work; the graph's node type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Story {
    /// Opaque unique identifier.
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub status: Status,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assignee: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub points: Option<u32>,
    /// Top-left corner of the card in world coordinates.
    #[serde(default)]
    pub position: Point,
    /// Ids of the stories this story depends on (is blocked by).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub dependencies: Vec<String>,
}

impl Story {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: None,
            status: Status::Todo,
            assignee: None,
            points: None,
            position: Point::default(),
            dependencies: Vec::new(),
        }
    }

    pub fn with_dependencies<I, S>(mut self, deps: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.dependencies = deps.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_position(mut self, x: f64, y: f64) -> Self {
        self.position = Point::new(x, y);
        self
    }

    /// True if `id` appears in this story's dependency list.
    pub fn depends_on(&self, id: &str) -> bool {
        self.dependencies.iter().any(|d| d == id)
    }
}

// ─── DragState ───────────────────────────────────────────────────────────────

/// Per-gesture drag bookkeeping mirrored into the store so the renderer can
/// highlight the dragged and hovered cards. Reset on every drop.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DragState {
    pub dragged_id: Option<String>,
    pub hovered_id: Option<String>,
}

#[cfg(test)]
#[path = "../tests/unit/test_story.rs"]
mod tests;
