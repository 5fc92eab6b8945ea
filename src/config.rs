/// Configuration for the layout and animation pipeline.
///
/// Card dimensions and spacing are in world units and match the canvas card
/// component. The depth step between level rows is
/// `card_height + rank_separation`, so the visible gap between rows equals
/// `rank_separation`.

#[derive(Debug, Clone)]
pub struct LayoutConfig {
    /// Card width in world units.
    pub card_width: f64,
    /// Card height in world units.
    pub card_height: f64,
    /// Vertical gap between consecutive dependency levels.
    pub rank_separation: f64,
    /// Horizontal gap between sibling cards placed under the same parent.
    pub node_separation: f64,
    /// Offset from the world origin to the first level row.
    pub margin: f64,
    /// Nominal canvas width used to spread root-level cards.
    pub canvas_width: f64,
    /// Duration of a position animation in milliseconds.
    pub animation_duration_ms: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            card_width: 200.0,
            card_height: 120.0,
            rank_separation: 150.0,
            node_separation: 50.0,
            margin: 50.0,
            canvas_width: 1200.0,
            animation_duration_ms: 800.0,
        }
    }
}

impl LayoutConfig {
    pub fn new() -> Self {
        Self::default()
    }
}
