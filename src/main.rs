//! storymap CLI entry point.
//!
//! Reads a JSON array of stories, recomputes the hierarchical layout, and
//! prints the updated stories (or the leveling / cycle status / animation
//! frames, depending on flags).

use std::fs;
use std::io::{self, Read, Write};
use std::process;

use clap::Parser;

use storymap::{LayoutConfig, PositionAnimator, Story, StoryGraph};

/// Hierarchical layout for story dependency graphs.
#[derive(Parser, Debug)]
#[command(
    name = "storymap",
    version = env!("STORYMAP_VERSION"),
    about = "Hierarchical layout for story dependency graphs"
)]
struct Cli {
    /// Input file with a JSON array of stories (reads from stdin if not provided)
    input: Option<String>,

    /// Print the topological levels instead of the layout
    #[arg(short = 'l', long = "levels")]
    levels: bool,

    /// Report whether the dependency graph contains a cycle
    #[arg(short = 'c', long = "check")]
    check: bool,

    /// Print N interpolated frames between current and laid-out positions
    #[arg(short = 'f', long = "frames")]
    frames: Option<u32>,

    /// Write output to this file instead of stdout
    #[arg(short = 'o', long = "output")]
    output: Option<String>,
}

fn main() {
    let cli = Cli::parse();

    // Read input from file or stdin
    let text = if let Some(ref path) = cli.input {
        match fs::read_to_string(path) {
            Ok(s) => s,
            Err(e) => {
                eprintln!("error: cannot read '{}': {}", path, e);
                process::exit(1);
            }
        }
    } else {
        let mut buf = String::new();
        if let Err(e) = io::stdin().read_to_string(&mut buf) {
            eprintln!("error: cannot read stdin: {}", e);
            process::exit(1);
        }
        buf
    };

    let stories: Vec<Story> = match serde_json::from_str(&text) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("error: invalid stories JSON: {}", e);
            process::exit(1);
        }
    };

    let config = LayoutConfig::default();
    let rendered = if cli.check {
        render_check(&stories)
    } else if cli.levels {
        render_levels(&stories)
    } else if let Some(frames) = cli.frames {
        render_frames(&stories, &config, frames)
    } else {
        match render_layout(stories, &config) {
            Ok(s) => s,
            Err(e) => {
                eprintln!("error: {}", e);
                process::exit(1);
            }
        }
    };

    // Write output to file or stdout
    if let Some(ref path) = cli.output {
        if let Err(e) = fs::write(path, rendered) {
            eprintln!("error: cannot write '{}': {}", path, e);
            process::exit(1);
        }
    } else {
        print!("{}", rendered);
        if let Err(e) = io::stdout().flush() {
            eprintln!("error: cannot flush stdout: {}", e);
            process::exit(1);
        }
    }
}

fn render_check(stories: &[Story]) -> String {
    if StoryGraph::from_stories(stories).has_cycle() {
        "cycle detected\n".to_string()
    } else {
        "acyclic\n".to_string()
    }
}

fn render_levels(stories: &[Story]) -> String {
    let levels = StoryGraph::from_stories(stories).topological_levels();
    let mut out = String::new();
    for (depth, level) in levels.iter().enumerate() {
        out.push_str(&format!("level {}: {}\n", depth, level.join(", ")));
    }
    out
}

/// Apply the computed layout and serialize the updated stories. Stories
/// without a computed position (cycle members) keep their input position.
fn render_layout(mut stories: Vec<Story>, config: &LayoutConfig) -> Result<String, String> {
    let targets = storymap::compute_layout(&stories, config);
    for story in &mut stories {
        if let Some(target) = targets.get(&story.id) {
            story.position = *target;
        }
    }
    serde_json::to_string_pretty(&stories)
        .map(|s| s + "\n")
        .map_err(|e| e.to_string())
}

/// One JSON object per line: `{"elapsed": …, "positions": {id: {x, y}}}`.
fn render_frames(stories: &[Story], config: &LayoutConfig, frames: u32) -> String {
    let frames = frames.max(1);
    let targets = storymap::compute_layout(stories, config);
    let animator = PositionAnimator::new(stories, &targets, config.animation_duration_ms);

    let mut out = String::new();
    for i in 0..=frames {
        let elapsed = config.animation_duration_ms * f64::from(i) / f64::from(frames);
        let mut positions = serde_json::Map::new();
        for (id, pos) in animator.sample(elapsed) {
            positions.insert(id, serde_json::json!({ "x": pos.x, "y": pos.y }));
        }
        let frame = serde_json::json!({ "elapsed": elapsed, "positions": positions });
        out.push_str(&frame.to_string());
        out.push('\n');
    }
    out
}
