//! Command-line tests: run the built binary against a temporary content
//! directory.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

const CONFIG: &str = r##"
[gallery]
title = "Our Moments"
images = ["images/01.jpg", "images/02.jpg", "images/03.jpg"]

[couple.groom]
name = "Minho"

[couple.bride]
name = "Seoyeon"

[venue]
name = "Riverside Hall"
address = "12 River Rd"

[gesture]
commit_threshold_px = 50.0
"##;

fn run(source: &Path, output: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_simple-invite"))
        .args(args)
        .arg("--source")
        .arg(source)
        .arg("--output")
        .arg(output)
        .output()
        .expect("failed to run simple-invite")
}

fn content_dir(config: &str) -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("config.toml"), config).unwrap();
    dir
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn build_writes_index_html() {
    let source = content_dir(CONFIG);
    let out = TempDir::new().unwrap();
    let output = run(source.path(), out.path(), &["build"]);
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));

    let html = fs::read_to_string(out.path().join("index.html")).unwrap();
    assert!(html.contains("Our Moments"));
    assert!(html.contains("images/03.jpg"));
    assert!(html.contains("<title>Minho &amp; Seoyeon</title>"));
    assert!(html.contains("Riverside Hall"));
    assert!(stdout(&output).contains("Build complete"));
}

#[test]
fn check_reports_gesture_settings() {
    let source = content_dir(CONFIG);
    let out = TempDir::new().unwrap();
    let output = run(source.path(), out.path(), &["check"]);
    assert!(output.status.success());

    let text = stdout(&output);
    assert!(text.contains("Gallery \"Our Moments\" (3 photos)"));
    assert!(text.contains("drag 20px, commit 50px, tap < 200ms"));
    assert!(text.contains("hero, greeting, gallery, venue"));
    assert!(!out.path().join("index.html").exists());
}

#[test]
fn check_rejects_inverted_thresholds() {
    let source = content_dir("[gesture]\ndrag_threshold_px = 60.0\ncommit_threshold_px = 40.0\n");
    let out = TempDir::new().unwrap();
    let output = run(source.path(), out.path(), &["check"]);
    assert!(!output.status.success());
}

#[test]
fn replay_prints_final_state_as_json() {
    let source = content_dir(CONFIG);
    let out = TempDir::new().unwrap();
    let trace = source.path().join("trace.json");
    fs::write(
        &trace,
        r#"[
            { "type": "touch_start", "touches": [{ "x": 200, "y": 10 }], "time": 0 },
            { "type": "touch_move", "touches": [{ "x": 140, "y": 12 }], "time": 20 },
            { "type": "touch_end", "time": 50 }
        ]"#,
    )
    .unwrap();

    let output = run(
        source.path(),
        out.path(),
        &["replay", trace.to_str().unwrap(), "--start", "1", "--json"],
    );
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));

    let state: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(state["current_index"], 2);
    assert_eq!(state["viewer_open"], false);
    assert_eq!(state["has_next"], false);
}

#[test]
fn gen_config_prints_documented_defaults() {
    let source = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    let output = run(source.path(), out.path(), &["gen-config"]);
    assert!(output.status.success());

    let text = stdout(&output);
    assert!(text.contains("[gallery]"));
    assert!(text.contains("[gesture]"));
    assert!(text.contains("[theme]"));
    assert!(text.contains("[couple.groom]"));
    assert!(text.contains("[venue]"));
    assert!(text.contains("[accounts]"));
}
