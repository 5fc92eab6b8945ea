//! Integration tests for the storymap binary.
//!
//! These tests run the compiled binary against JSON story snapshots piped
//! through stdin and verify the layout, leveling, cycle-check, and frame
//! output modes.

use std::fs;
use std::path::PathBuf;
use std::process::Command;

use serde_json::Value;

/// Get the path to the compiled binary (debug build, built by `cargo test`).
fn binary_path() -> PathBuf {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("target");
    path.push("debug");
    path.push("storymap");
    path
}

/// Run the binary with the given stdin input and extra CLI args. Returns stdout.
fn run_binary(input: &str, extra_args: &[&str]) -> String {
    let bin = binary_path();
    assert!(
        bin.exists(),
        "Binary not found at {:?}. Run `cargo build` first.",
        bin
    );

    let output = Command::new(&bin)
        .args(extra_args)
        .stdin(std::process::Stdio::piped())
        .stdout(std::process::Stdio::piped())
        .stderr(std::process::Stdio::piped())
        .spawn()
        .and_then(|mut child| {
            use std::io::Write;
            if let Some(ref mut stdin) = child.stdin {
                stdin.write_all(input.as_bytes()).ok();
            }
            child.wait_with_output()
        })
        .expect("Failed to run binary");

    assert!(
        output.status.success(),
        "Binary exited with {:?}:\nstderr: {}",
        output.status.code(),
        String::from_utf8_lossy(&output.stderr)
    );

    String::from_utf8(output.stdout).expect("Non-UTF8 output")
}

const CHAIN: &str = r#"[
    {"id": "1", "title": "Set up project"},
    {"id": "2", "title": "Build backend", "dependencies": ["1"]},
    {"id": "3", "title": "Ship", "dependencies": ["1", "2"]}
]"#;

const CYCLE: &str = r#"[
    {"id": "a", "title": "A", "position": {"x": 10.0, "y": 20.0}, "dependencies": ["b"]},
    {"id": "b", "title": "B", "position": {"x": 30.0, "y": 40.0}, "dependencies": ["a"]}
]"#;

fn position_of<'a>(stories: &'a Value, id: &str) -> &'a Value {
    stories
        .as_array()
        .unwrap()
        .iter()
        .find(|s| s["id"] == id)
        .unwrap_or_else(|| panic!("story {} missing from output", id))
        .get("position")
        .unwrap()
}

// ─── Layout output ──────────────────────────────────────────────────────────

#[test]
fn test_layout_orders_levels_top_to_bottom() {
    let output = run_binary(CHAIN, &[]);
    let stories: Value = serde_json::from_str(&output).expect("Output must be valid JSON");

    let y1 = position_of(&stories, "1")["y"].as_f64().unwrap();
    let y2 = position_of(&stories, "2")["y"].as_f64().unwrap();
    let y3 = position_of(&stories, "3")["y"].as_f64().unwrap();
    assert!(y1 < y2, "dependency must sit above its dependent");
    assert!(y2 < y3, "each level gets its own row");
}

#[test]
fn test_layout_preserves_story_fields() {
    let output = run_binary(CHAIN, &[]);
    let stories: Value = serde_json::from_str(&output).unwrap();
    let ship = stories
        .as_array()
        .unwrap()
        .iter()
        .find(|s| s["id"] == "3")
        .unwrap();
    assert_eq!(ship["title"], "Ship");
    assert_eq!(ship["dependencies"], serde_json::json!(["1", "2"]));
}

#[test]
fn test_cycle_members_keep_their_input_position() {
    let output = run_binary(CYCLE, &[]);
    let stories: Value = serde_json::from_str(&output).unwrap();
    assert_eq!(position_of(&stories, "a")["x"].as_f64().unwrap(), 10.0);
    assert_eq!(position_of(&stories, "b")["y"].as_f64().unwrap(), 40.0);
}

// ─── Flag tests ─────────────────────────────────────────────────────────────

#[test]
fn test_levels_flag() {
    let output = run_binary(CHAIN, &["--levels"]);
    assert_eq!(output, "level 0: 1\nlevel 1: 2\nlevel 2: 3\n");
}

#[test]
fn test_check_flag_acyclic() {
    let output = run_binary(CHAIN, &["--check"]);
    assert_eq!(output, "acyclic\n");
}

#[test]
fn test_check_flag_cycle() {
    let output = run_binary(CYCLE, &["--check"]);
    assert_eq!(output, "cycle detected\n");
}

#[test]
fn test_frames_flag_interpolates_between_endpoints() {
    let input = r#"[{"id": "1", "title": "Only", "position": {"x": 0.0, "y": 0.0}}]"#;
    let output = run_binary(input, &["--frames", "4"]);
    let frames: Vec<Value> = output
        .lines()
        .map(|l| serde_json::from_str(l).expect("each frame must be a JSON object"))
        .collect();
    assert_eq!(frames.len(), 5, "N frames means N+1 samples, endpoints included");

    let first = &frames[0]["positions"]["1"];
    assert_eq!(first["x"].as_f64().unwrap(), 0.0);
    assert_eq!(first["y"].as_f64().unwrap(), 0.0);

    // A lone story lands centered on the first row.
    let last = &frames[4]["positions"]["1"];
    assert_eq!(last["x"].as_f64().unwrap(), 550.0);
    assert_eq!(last["y"].as_f64().unwrap(), 50.0);

    assert_eq!(frames[0]["elapsed"].as_f64().unwrap(), 0.0);
    assert_eq!(frames[4]["elapsed"].as_f64().unwrap(), 800.0);
}

#[test]
fn test_reads_from_file() {
    let dir = std::env::temp_dir().join("storymap_test_read");
    fs::create_dir_all(&dir).ok();
    let input_file = dir.join("stories.json");
    fs::write(&input_file, CHAIN).unwrap();

    let bin = binary_path();
    let output = Command::new(&bin)
        .args(["--check", input_file.to_str().unwrap()])
        .stdout(std::process::Stdio::piped())
        .stderr(std::process::Stdio::piped())
        .output()
        .expect("Failed to run binary");

    assert!(output.status.success());
    assert_eq!(String::from_utf8(output.stdout).unwrap(), "acyclic\n");

    fs::remove_file(&input_file).ok();
    fs::remove_dir(&dir).ok();
}

#[test]
fn test_output_to_file() {
    let dir = std::env::temp_dir().join("storymap_test_write");
    fs::create_dir_all(&dir).ok();
    let out_file = dir.join("out.json");

    run_binary(CHAIN, &["--output", out_file.to_str().unwrap()]);

    assert!(out_file.exists(), "Output file should exist");
    let stories: Value = serde_json::from_str(&fs::read_to_string(&out_file).unwrap()).unwrap();
    assert_eq!(stories.as_array().unwrap().len(), 3);

    fs::remove_file(&out_file).ok();
    fs::remove_dir(&dir).ok();
}

#[test]
fn test_invalid_json_fails_with_an_error() {
    let bin = binary_path();
    let output = Command::new(&bin)
        .stdin(std::process::Stdio::piped())
        .stdout(std::process::Stdio::piped())
        .stderr(std::process::Stdio::piped())
        .spawn()
        .and_then(|mut child| {
            use std::io::Write;
            if let Some(ref mut stdin) = child.stdin {
                stdin.write_all(b"not json").ok();
            }
            child.wait_with_output()
        })
        .expect("Failed to run binary");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("invalid stories JSON"), "stderr: {}", stderr);
}
