//! StoryStore — the canonical story collection with named update operations
//! and observer notification.
//!
//! The computational core never touches this state directly: it reads
//! immutable snapshots and proposes values (positions, edge additions) that
//! the store applies atomically. Listeners run after every committed
//! mutation; the core itself stays push-agnostic.

use std::collections::HashMap;
use std::mem;

use crate::animate::PositionAnimator;
use crate::config::LayoutConfig;
use crate::drag::{DragGesture, DropOutcome, EdgeRejection, validate_new_edge};
use crate::geometry::Point;
use crate::layout;
use crate::story::{DragState, Status, Story};

type Listener = Box<dyn FnMut(&StoryStore)>;

pub struct StoryStore {
    stories: Vec<Story>,
    selected_id: Option<String>,
    drag: DragGesture,
    /// Set on every mutation that changes the dependency graph; consumed by
    /// the next render/update cycle instead of an ad hoc delay timer.
    layout_dirty: bool,
    next_id: u64,
    config: LayoutConfig,
    listeners: Vec<Listener>,
}

impl Default for StoryStore {
    fn default() -> Self {
        Self::new(LayoutConfig::default())
    }
}

impl StoryStore {
    pub fn new(config: LayoutConfig) -> Self {
        Self {
            stories: Vec::new(),
            selected_id: None,
            drag: DragGesture::new(),
            layout_dirty: false,
            next_id: 0,
            config,
            listeners: Vec::new(),
        }
    }

    // ─── Snapshot reads ──────────────────────────────────────────────────

    pub fn stories(&self) -> &[Story] {
        &self.stories
    }

    pub fn story(&self, id: &str) -> Option<&Story> {
        self.stories.iter().find(|s| s.id == id)
    }

    pub fn selected_id(&self) -> Option<&str> {
        self.selected_id.as_deref()
    }

    pub fn drag_state(&self) -> DragState {
        DragState {
            dragged_id: self.drag.dragged_id().map(str::to_owned),
            hovered_id: self.drag.hovered_id().map(str::to_owned),
        }
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    // ─── Observers ───────────────────────────────────────────────────────

    /// Register a listener invoked after every committed mutation.
    /// Listeners must not call back into the store.
    pub fn subscribe(&mut self, listener: impl FnMut(&StoryStore) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    fn notify(&mut self) {
        let mut listeners = mem::take(&mut self.listeners);
        for listener in listeners.iter_mut() {
            listener(self);
        }
        // A listener registered during notification lands behind the rest.
        listeners.append(&mut self.listeners);
        self.listeners = listeners;
    }

    // ─── Story mutations ─────────────────────────────────────────────────

    /// Add a story, assigning it a fresh id. Returns the id.
    pub fn add_story(&mut self, mut story: Story) -> String {
        self.next_id += 1;
        let id = format!("story-{}", self.next_id);
        story.id = id.clone();
        self.stories.push(story);
        self.notify();
        id
    }

    /// Remove a story and strip its id from every dependency list, so the
    /// store never leaves dangling references behind. Unknown ids no-op.
    pub fn delete_story(&mut self, id: &str) {
        let before = self.stories.len();
        self.stories.retain(|s| s.id != id);
        if self.stories.len() == before {
            return;
        }
        let mut edges_removed = false;
        for story in &mut self.stories {
            let deps_before = story.dependencies.len();
            story.dependencies.retain(|d| d != id);
            edges_removed |= story.dependencies.len() != deps_before;
        }
        if edges_removed {
            // Removing edges can free cycle members for re-leveling.
            self.layout_dirty = true;
        }
        if self.selected_id.as_deref() == Some(id) {
            self.selected_id = None;
        }
        self.notify();
    }

    pub fn select_story(&mut self, id: Option<&str>) {
        self.selected_id = id.map(str::to_owned);
        self.notify();
    }

    pub fn set_title(&mut self, id: &str, title: impl Into<String>) {
        if let Some(story) = self.stories.iter_mut().find(|s| s.id == id) {
            story.title = title.into();
            self.notify();
        }
    }

    pub fn set_status(&mut self, id: &str, status: Status) {
        if let Some(story) = self.stories.iter_mut().find(|s| s.id == id) {
            story.status = status;
            self.notify();
        }
    }

    /// Write a card position. Unknown ids no-op (a stale animation tick for
    /// a deleted story must stay harmless).
    pub fn set_position(&mut self, id: &str, position: Point) {
        if let Some(story) = self.stories.iter_mut().find(|s| s.id == id) {
            story.position = position;
            self.notify();
        }
    }

    /// Add "dependent depends on depends_on", applying the self/duplicate/
    /// cycle rules before mutating. On rejection the graph is unchanged and
    /// the reason is returned. Unknown ids no-op (never manufacture a
    /// dangling reference).
    pub fn add_dependency(
        &mut self,
        dependent_id: &str,
        depends_on_id: &str,
    ) -> Result<(), EdgeRejection> {
        if let Some(rejection) = validate_new_edge(&self.stories, dependent_id, depends_on_id) {
            return Err(rejection);
        }
        if !self.stories.iter().any(|s| s.id == depends_on_id) {
            return Ok(());
        }
        let Some(story) = self.stories.iter_mut().find(|s| s.id == dependent_id) else {
            return Ok(());
        };
        story.dependencies.push(depends_on_id.to_owned());
        self.layout_dirty = true;
        self.notify();
        Ok(())
    }

    // ─── Drag gesture entry points ───────────────────────────────────────

    pub fn begin_drag(&mut self, id: &str) {
        self.drag.begin(id);
        self.notify();
    }

    /// Re-run hover detection for the current pointer position (already in
    /// world space; the caller applies the stage transform).
    pub fn update_drag_hover(&mut self, pointer_world: Point) {
        self.drag
            .update_hover(&self.stories, pointer_world, &self.config);
        self.notify();
    }

    /// Finish the drag: commit the proposed edge when admissible, otherwise
    /// commit the drop position as a plain move. Returns the applied
    /// outcome (None when no drag was active).
    pub fn end_drag(&mut self, drop_position: Point) -> Option<DropOutcome> {
        let outcome = self.drag.end(&self.stories, drop_position)?;
        match &outcome {
            DropOutcome::Move { id, position, .. } => {
                if let Some(story) = self.stories.iter_mut().find(|s| s.id == *id) {
                    story.position = *position;
                }
            }
            DropOutcome::Link {
                dependent,
                depends_on,
            } => {
                if let Some(story) = self.stories.iter_mut().find(|s| s.id == *dependent) {
                    story.dependencies.push(depends_on.clone());
                    self.layout_dirty = true;
                }
            }
        }
        self.notify();
        Some(outcome)
    }

    // ─── Layout ──────────────────────────────────────────────────────────

    /// True once per graph mutation that requires a re-layout.
    pub fn take_layout_dirty(&mut self) -> bool {
        mem::replace(&mut self.layout_dirty, false)
    }

    /// Target positions for the current snapshot (pure; does not mutate).
    pub fn compute_layout(&self) -> HashMap<String, Point> {
        layout::compute_layout(&self.stories, &self.config)
    }

    /// Snap every leveled story to its computed position, without
    /// animation. Cycle members keep their previous position.
    pub fn apply_layout(&mut self) {
        let targets = self.compute_layout();
        for story in &mut self.stories {
            if let Some(target) = targets.get(&story.id) {
                story.position = *target;
            }
        }
        self.notify();
    }

    /// Start an animation toward the computed layout. The host drives the
    /// ticks and writes frames back through [`StoryStore::set_position`].
    pub fn animate_layout(&self) -> PositionAnimator {
        PositionAnimator::new(
            &self.stories,
            &self.compute_layout(),
            self.config.animation_duration_ms,
        )
    }
}

#[cfg(test)]
#[path = "../tests/unit/test_store.rs"]
mod tests;
