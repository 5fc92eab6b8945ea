//! Position animator — time-driven interpolation from a captured start
//! snapshot toward target positions.
//!
//! The animator owns no clock and schedules nothing: the host feeds elapsed
//! milliseconds on every frame, and a test harness can feed synthetic time.
//! An animator created mid-flight re-captures whatever positions the stories
//! hold at that moment, so a retarget stays smooth without integrating
//! velocities. Stale ticks from a superseded animator are harmless
//! overwrites; both converge toward positions derived from the same graph.

use std::collections::HashMap;

use crate::geometry::Point;
use crate::story::Story;

pub const DEFAULT_DURATION_MS: f64 = 800.0;

/// Smoothstep ease-in-out curve `t²(3 − 2t)`, with `t` clamped to [0, 1].
pub fn smoothstep(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

/// Linear interpolation between two points.
pub fn lerp(start: Point, end: Point, t: f64) -> Point {
    Point::new(
        start.x + (end.x - start.x) * t,
        start.y + (end.y - start.y) * t,
    )
}

pub struct PositionAnimator {
    /// (id, start, target) per story with a target entry, in collection
    /// order. Stories without a target are never touched.
    tracks: Vec<(String, Point, Point)>,
    duration_ms: f64,
}

impl PositionAnimator {
    /// Captures the current position of every story that has a target.
    /// Non-positive durations fall back to [`DEFAULT_DURATION_MS`].
    pub fn new(stories: &[Story], targets: &HashMap<String, Point>, duration_ms: f64) -> Self {
        let tracks = stories
            .iter()
            .filter_map(|s| targets.get(&s.id).map(|t| (s.id.clone(), s.position, *t)))
            .collect();
        Self {
            tracks,
            duration_ms: if duration_ms > 0.0 {
                duration_ms
            } else {
                DEFAULT_DURATION_MS
            },
        }
    }

    pub fn track_count(&self) -> usize {
        self.tracks.len()
    }

    /// Progress in [0, 1] for the given elapsed time.
    pub fn progress(&self, elapsed_ms: f64) -> f64 {
        (elapsed_ms / self.duration_ms).clamp(0.0, 1.0)
    }

    pub fn is_finished(&self, elapsed_ms: f64) -> bool {
        self.progress(elapsed_ms) >= 1.0
    }

    /// Sample every track at the given elapsed time.
    pub fn sample(&self, elapsed_ms: f64) -> Vec<(String, Point)> {
        let eased = smoothstep(self.progress(elapsed_ms));
        self.tracks
            .iter()
            .map(|(id, start, target)| (id.clone(), lerp(*start, *target, eased)))
            .collect()
    }

    /// Apply one frame through the caller's position writer. Returns false
    /// once progress reaches 1, telling the host to stop scheduling ticks.
    /// The animator never loops and never restarts.
    pub fn tick(&self, elapsed_ms: f64, apply: &mut dyn FnMut(&str, Point)) -> bool {
        let eased = smoothstep(self.progress(elapsed_ms));
        for (id, start, target) in &self.tracks {
            apply(id, lerp(*start, *target, eased));
        }
        !self.is_finished(elapsed_ms)
    }
}

#[cfg(test)]
#[path = "../tests/unit/test_animate.rs"]
mod tests;
