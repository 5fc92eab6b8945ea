//! Geometry utilities: containment tests and stage/world conversions.
//!
//! Pure functions and plain value types, no state.

use serde::{Deserialize, Serialize};

// ─── Point ───────────────────────────────────────────────────────────────────

/// A point in world coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

// ─── Rect ────────────────────────────────────────────────────────────────────

/// An axis-aligned rectangle with a top-left origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }
}

/// Inclusive-boundary containment test: points on the rectangle edge count
/// as inside.
pub fn point_in_rect(px: f64, py: f64, rect: &Rect) -> bool {
    px >= rect.x && px <= rect.right() && py >= rect.y && py <= rect.bottom()
}

// ─── StageTransform ──────────────────────────────────────────────────────────

/// Pan + uniform zoom applied by the rendering stage.
///
/// `scale` must be non-zero; a zero scale is a caller contract violation,
/// not a runtime case.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StageTransform {
    pub translation: Point,
    pub scale: f64,
}

impl Default for StageTransform {
    fn default() -> Self {
        Self {
            translation: Point::new(0.0, 0.0),
            scale: 1.0,
        }
    }
}

impl StageTransform {
    pub fn new(translation: Point, scale: f64) -> Self {
        Self { translation, scale }
    }

    /// Converts a point in the stage's screen space to world space:
    /// `world = (screen − translation) / scale`.
    pub fn to_world(&self, p: Point) -> Point {
        Point::new(
            (p.x - self.translation.x) / self.scale,
            (p.y - self.translation.y) / self.scale,
        )
    }
}

#[cfg(test)]
#[path = "../tests/unit/test_geometry.rs"]
mod tests;
