//! Integration tests for the drillcraft CLI

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use tempfile::TempDir;

use crate::helpers::fixtures_dir;

/// drillcraft with an isolated, empty config.
fn drillcraft(config_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("drillcraft").expect("binary builds");
    cmd.env("DRILLCRAFT_CONFIG", config_dir.path().join("config.toml"))
        .env_remove("RUST_LOG");
    cmd
}

fn stdout_json(output: &std::process::Output) -> Value {
    serde_json::from_slice(&output.stdout).expect("stdout is JSON")
}

// ============================================================================
// Help Output Tests
// ============================================================================

#[test]
fn help_lists_subcommands() {
    let dir = TempDir::new().unwrap();
    drillcraft(&dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("extract"))
        .stdout(predicate::str::contains("normalize"))
        .stdout(predicate::str::contains("sanitize"));
}

#[test]
fn unknown_subcommand_exits_2() {
    let dir = TempDir::new().unwrap();
    drillcraft(&dir).arg("draw").assert().code(2);
}

// ============================================================================
// Extract
// ============================================================================

#[test]
fn extract_from_stdin() {
    let dir = TempDir::new().unwrap();
    let input = "Go:\n```drill\n{\"name\":\"Rondo\",\"pitch\":{},\"players\":[{\"team\":\"grey\"}],\"sequence\":[{}]}\n```";

    let output = drillcraft(&dir)
        .args(["extract", "--compact"])
        .write_stdin(input)
        .output()
        .unwrap();

    assert!(output.status.success());
    let json = stdout_json(&output);
    assert_eq!(json["cleanContent"], "Go:");
    assert_eq!(json["drill"]["name"], "Rondo");
    assert_eq!(json["drill"]["players"][0]["team"], "black");
    assert_eq!(json["drills"].as_array().unwrap().len(), 1);
}

#[test]
fn extract_plain_text_returns_null_drill() {
    let dir = TempDir::new().unwrap();
    let output = drillcraft(&dir)
        .arg("extract")
        .write_stdin("Just stretch today.")
        .output()
        .unwrap();

    let json = stdout_json(&output);
    assert_eq!(json["cleanContent"], "Just stretch today.");
    assert!(json["drill"].is_null());
    assert_eq!(json["drills"], Value::Array(vec![]));
}

#[test]
fn extract_multiple_files_keeps_argument_order() {
    let dir = TempDir::new().unwrap();
    let fixtures = fixtures_dir();

    let output = drillcraft(&dir)
        .arg("extract")
        .arg(fixtures.join("untagged_drill.md"))
        .arg(fixtures.join("broken_blocks.md"))
        .arg(fixtures.join("session_plan.md"))
        .arg("--drills-only")
        .output()
        .unwrap();

    assert!(output.status.success());
    let json = stdout_json(&output);
    let counts: Vec<_> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|drills| drills.as_array().unwrap().len())
        .collect();
    assert_eq!(counts, [1, 0, 2]);
}

#[test]
fn extract_missing_file_fails() {
    let dir = TempDir::new().unwrap();
    drillcraft(&dir)
        .args(["extract", "does-not-exist.md"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read does-not-exist.md"));
}

#[test]
fn extract_respects_config_file() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("strict.toml");
    std::fs::write(&config, "[extraction]\nany_fence_fallback = false\n").unwrap();

    let output = drillcraft(&dir)
        .arg("--config")
        .arg(&config)
        .arg("extract")
        .arg(fixtures_dir().join("untagged_drill.md"))
        .output()
        .unwrap();

    assert!(output.status.success());
    assert!(stdout_json(&output)["drill"].is_null());
}

// ============================================================================
// Normalize / Sanitize
// ============================================================================

#[test]
fn normalize_prints_repaired_drill() {
    let dir = TempDir::new().unwrap();
    let input = r#"{"name":"Box","pitch":{"width":"40"},"players":[{}],"sequence":[{}],}"#;

    let output = drillcraft(&dir)
        .arg("normalize")
        .write_stdin(input)
        .output()
        .unwrap();

    assert!(output.status.success());
    let json = stdout_json(&output);
    assert_eq!(json["pitch"]["width"], 40.0);
    assert_eq!(json["players"][0]["id"], "p1");
    assert_eq!(json["sequence"][0]["duration"], 1500.0);
    assert_eq!(json["type"], "drill");
    assert_eq!(json["sport"], "football");
}

#[test]
fn normalize_nulls_out_of_range_numbers() {
    let dir = TempDir::new().unwrap();
    let input = r#"{"name":"Box","pitch":{"width":1e999},"players":[{"x":-1e400}],"sequence":[{}]}"#;

    let output = drillcraft(&dir)
        .arg("normalize")
        .write_stdin(input)
        .output()
        .unwrap();

    assert!(output.status.success());
    let json = stdout_json(&output);
    assert_eq!(json["pitch"]["width"], 30.0);
    assert_eq!(json["players"][0]["x"], 50.0);
}

#[test]
fn normalize_reports_gate_failure() {
    let dir = TempDir::new().unwrap();
    drillcraft(&dir)
        .arg("normalize")
        .write_stdin(r#"{"name":"Empty","pitch":{},"players":[],"sequence":[{}]}"#)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Not a drill: `players` is empty"));
}

#[test]
fn sanitize_strips_comments_and_trailing_commas() {
    let dir = TempDir::new().unwrap();
    drillcraft(&dir)
        .arg("sanitize")
        .write_stdin("{\"a\": 1, // one\n}")
        .assert()
        .success()
        .stdout("{\"a\": 1 \n}");
}

// ============================================================================
// Config
// ============================================================================

#[test]
fn config_show_prints_defaults() {
    let dir = TempDir::new().unwrap();
    drillcraft(&dir)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[extraction]"))
        .stdout(predicate::str::contains("json_fallback = true"))
        .stdout(predicate::str::contains("pretty = true"));
}

#[test]
fn completions_generate_for_bash() {
    let dir = TempDir::new().unwrap();
    drillcraft(&dir)
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("drillcraft"));
}
