//! WASM bindings for storymap.
//!
//! Exposes the pure computations to JavaScript via wasm-bindgen; stories
//! cross the boundary as JSON.

use wasm_bindgen::prelude::*;

use crate::config::LayoutConfig;
use crate::graph::StoryGraph;
use crate::story::Story;

fn parse_stories(json: &str) -> Result<Vec<Story>, JsError> {
    serde_json::from_str(json).map_err(|e| JsError::new(&e.to_string()))
}

/// Compute the hierarchical layout; returns `{id: {x, y}}` as JSON.
/// Stories on a cycle have no entry and keep their current position.
#[wasm_bindgen(js_name = "computeLayout")]
pub fn compute_layout(stories_json: &str) -> Result<String, JsError> {
    let stories = parse_stories(stories_json)?;
    let positions = crate::compute_layout(&stories, &LayoutConfig::default());
    serde_json::to_string(&positions).map_err(|e| JsError::new(&e.to_string()))
}

/// True if the dependency graph contains a cycle.
#[wasm_bindgen(js_name = "hasCycle")]
pub fn has_cycle(stories_json: &str) -> Result<bool, JsError> {
    let stories = parse_stories(stories_json)?;
    Ok(StoryGraph::from_stories(&stories).has_cycle())
}

/// True if adding "dependent depends on depends_on" keeps the graph acyclic.
#[wasm_bindgen(js_name = "isAcyclicAfterAdding")]
pub fn is_acyclic_after_adding(
    stories_json: &str,
    dependent_id: &str,
    depends_on_id: &str,
) -> Result<bool, JsError> {
    let stories = parse_stories(stories_json)?;
    Ok(crate::is_acyclic_after_adding(
        &stories,
        dependent_id,
        depends_on_id,
    ))
}
