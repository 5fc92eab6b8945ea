//! Edge-creation drag gesture: Idle ⇄ Dragging(dragged, hovered), with live
//! hover detection during pointer moves and a commit decision on drop.
//!
//! The gesture is a pure state machine. It never mutates stories; dropping
//! returns a [`DropOutcome`] that the store applies. Cancellation is an
//! ordinary drag-end with no hovered target, i.e. a plain position update.

use std::fmt;

use crate::config::LayoutConfig;
use crate::geometry::{Point, Rect, point_in_rect};
use crate::graph::StoryGraph;
use crate::story::Story;

// ─── Rejection reasons ───────────────────────────────────────────────────────

/// Why a dropped edge was not committed. Diagnostic, never fatal: the
/// gesture still completes as a plain move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeRejection {
    SelfDependency,
    DuplicateEdge,
    WouldCreateCycle,
}

impl fmt::Display for EdgeRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SelfDependency => write!(f, "a story cannot depend on itself"),
            Self::DuplicateEdge => write!(f, "dependency already exists"),
            Self::WouldCreateCycle => write!(f, "dependency would create a cycle"),
        }
    }
}

/// Checks the self/duplicate/cycle rules for a hypothetical
/// "dependent depends on depends_on" edge. Returns the first failing rule,
/// or None when the edge is admissible.
pub fn validate_new_edge(
    stories: &[Story],
    dependent_id: &str,
    depends_on_id: &str,
) -> Option<EdgeRejection> {
    if dependent_id == depends_on_id {
        return Some(EdgeRejection::SelfDependency);
    }
    if stories
        .iter()
        .any(|s| s.id == dependent_id && s.depends_on(depends_on_id))
    {
        return Some(EdgeRejection::DuplicateEdge);
    }
    if !StoryGraph::from_stories(stories).is_acyclic_after_adding(dependent_id, depends_on_id) {
        return Some(EdgeRejection::WouldCreateCycle);
    }
    None
}

// ─── Drop outcome ────────────────────────────────────────────────────────────

/// What the store should apply when a drag ends.
#[derive(Debug, Clone, PartialEq)]
pub enum DropOutcome {
    /// Plain position update for the dragged card. Carries the rejection
    /// reason when an edge drop fell back to a move.
    Move {
        id: String,
        position: Point,
        rejection: Option<EdgeRejection>,
    },
    /// Commit `dependent` depends-on `depends_on` as a new edge.
    Link {
        dependent: String,
        depends_on: String,
    },
}

// ─── Gesture state machine ───────────────────────────────────────────────────

/// Bounding rectangle of a story card in world coordinates.
pub fn card_rect(story: &Story, config: &LayoutConfig) -> Rect {
    Rect::new(
        story.position.x,
        story.position.y,
        config.card_width,
        config.card_height,
    )
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DragGesture {
    dragged_id: Option<String>,
    hovered_id: Option<String>,
}

impl DragGesture {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_dragging(&self) -> bool {
        self.dragged_id.is_some()
    }

    pub fn dragged_id(&self) -> Option<&str> {
        self.dragged_id.as_deref()
    }

    pub fn hovered_id(&self) -> Option<&str> {
        self.hovered_id.as_deref()
    }

    /// Idle → Dragging(id, none).
    pub fn begin(&mut self, id: impl Into<String>) {
        self.dragged_id = Some(id.into());
        self.hovered_id = None;
    }

    /// Recompute the hovered card from the pointer's world position. The
    /// first matching card in collection order wins; the dragged card is
    /// never a candidate, so at most one card is hovered. No-op while idle.
    pub fn update_hover(
        &mut self,
        stories: &[Story],
        pointer_world: Point,
        config: &LayoutConfig,
    ) -> Option<&str> {
        self.hovered_id = match self.dragged_id.as_deref() {
            Some(dragged) => stories
                .iter()
                .filter(|s| s.id != dragged)
                .find(|s| point_in_rect(pointer_world.x, pointer_world.y, &card_rect(s, config)))
                .map(|s| s.id.clone()),
            None => None,
        };
        self.hovered_id.as_deref()
    }

    /// Dragging → Idle. Decides between committing a dependency edge and a
    /// plain move; the gesture is cleared regardless of the outcome.
    /// Returns None when no drag was active.
    pub fn end(&mut self, stories: &[Story], drop_position: Point) -> Option<DropOutcome> {
        let dragged = self.dragged_id.take()?;
        let hovered = self.hovered_id.take();

        let Some(target) = hovered else {
            return Some(DropOutcome::Move {
                id: dragged,
                position: drop_position,
                rejection: None,
            });
        };

        match validate_new_edge(stories, &dragged, &target) {
            None => Some(DropOutcome::Link {
                dependent: dragged,
                depends_on: target,
            }),
            Some(rejection) => Some(DropOutcome::Move {
                id: dragged,
                position: drop_position,
                rejection: Some(rejection),
            }),
        }
    }
}

#[cfg(test)]
#[path = "../tests/unit/test_drag.rs"]
mod tests;
