#![allow(deprecated)] // cargo_bin deprecation - still works fine

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const MOUNT_IDS: [&str; 6] = [
    "chart-category-bar",
    "chart-value-line",
    "chart-category-pie",
    "chart-location-doughnut",
    "chart-location-polar",
    "chart-value-radar",
];

// Nothing listens on the discard port, so fetches fail fast.
const UNREACHABLE_API: &str = "http://127.0.0.1:9";

const PAYLOAD: &str = r#"{
    "categories": [{"id": 1, "name": "A"}, {"id": 2, "name": "B"}],
    "records": [
        {"categoryId": 1, "numericValue": 10, "location": "X"},
        {"categoryId": 1, "numericValue": 20, "location": "X"},
        {"categoryId": 2, "numericValue": 5, "location": "Y"},
        {"categoryId": 99, "numericValue": 1, "location": "Z"}
    ]
}"#;

fn cmd() -> Command {
    let mut cmd = Command::cargo_bin("chartboard").expect("binary should exist");
    cmd.env_remove("CHARTBOARD_API_URL").env_remove("RUST_LOG");
    cmd
}

fn write_payload(dir: &Path, content: &str) -> std::path::PathBuf {
    let path = dir.join("payload.json");
    fs::write(&path, content).unwrap();
    path
}

// ============================================================================
// Summary
// ============================================================================

#[test]
fn summary_json_from_input_file() {
    let temp_dir = TempDir::new().unwrap();
    let payload = write_payload(temp_dir.path(), PAYLOAD);

    let output = cmd()
        .args(["summary", "--json", "--input"])
        .arg(&payload)
        .output()
        .unwrap();
    assert!(output.status.success());

    let summary: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let items = summary.as_array().unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["label"], "A");
    assert_eq!(items[0]["count"], 2);
    assert_eq!(items[0]["averageValue"], 15.0);
    assert_eq!(items[0]["topLocationName"], "X");
    assert_eq!(items[1]["minValue"], 5.0);
}

#[test]
fn summary_table_from_input_file() {
    let temp_dir = TempDir::new().unwrap();
    let payload = write_payload(temp_dir.path(), PAYLOAD);

    cmd()
        .args(["summary", "--input"])
        .arg(&payload)
        .assert()
        .success()
        .stdout(predicate::str::contains("Category Summary"))
        .stdout(predicate::str::contains("X (2)"))
        .stdout(predicate::str::contains("3 of 4 records matched"));
}

#[test]
fn summary_fails_when_api_is_unreachable() {
    cmd()
        .args(["summary", "--api-url", UNREACHABLE_API])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load chart data"));
}

// ============================================================================
// Render
// ============================================================================

#[test]
fn render_svg_writes_one_file_per_mount() {
    let temp_dir = TempDir::new().unwrap();
    let payload = write_payload(temp_dir.path(), PAYLOAD);
    let out = temp_dir.path().join("out");

    cmd()
        .args(["render", "--api-url", UNREACHABLE_API, "--input"])
        .arg(&payload)
        .arg("--output")
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote 6 file(s)"));

    for id in MOUNT_IDS {
        let svg = fs::read_to_string(out.join(format!("{id}.svg"))).unwrap();
        assert!(svg.starts_with("<svg"), "{id} is not an SVG");
        assert!(svg.contains("Category: A"), "{id} is missing tooltip text");
    }

    let bar = fs::read_to_string(out.join("chart-category-bar.svg")).unwrap();
    assert!(bar.contains("<animate"));
}

#[test]
fn render_empty_payload_writes_placeholders() {
    let temp_dir = TempDir::new().unwrap();
    let payload = write_payload(temp_dir.path(), r#"{"categories": "none"}"#);
    let out = temp_dir.path().join("out");

    cmd()
        .args(["render", "--api-url", UNREACHABLE_API, "--input"])
        .arg(&payload)
        .arg("--output")
        .arg(&out)
        .assert()
        .success();

    for id in MOUNT_IDS {
        let svg = fs::read_to_string(out.join(format!("{id}.svg"))).unwrap();
        assert!(svg.contains("No category data."));
    }
}

#[test]
fn render_html_page() {
    let temp_dir = TempDir::new().unwrap();
    let payload = write_payload(temp_dir.path(), PAYLOAD);
    let out = temp_dir.path().join("out");

    cmd()
        .args(["render", "--format", "html", "--api-url", UNREACHABLE_API, "--input"])
        .arg(&payload)
        .arg("--output")
        .arg(&out)
        .assert()
        .success();

    let html = fs::read_to_string(out.join("dashboard.html")).unwrap();
    for id in MOUNT_IDS {
        assert!(html.contains(&format!(r#"id="{id}""#)));
    }
    assert!(html.contains(r#"id="chart-tooltip""#));
}

#[test]
fn render_respects_layout_file() {
    let temp_dir = TempDir::new().unwrap();
    let payload = write_payload(temp_dir.path(), PAYLOAD);
    let layout = temp_dir.path().join("layout.toml");
    fs::write(&layout, "[[mounts]]\nid = \"chart-category-bar\"\nwidth = 640\nheight = 360\n").unwrap();
    let out = temp_dir.path().join("out");

    cmd()
        .args(["render", "--api-url", UNREACHABLE_API, "--input"])
        .arg(&payload)
        .arg("--layout")
        .arg(&layout)
        .arg("--output")
        .arg(&out)
        .assert()
        .success();

    let bar = fs::read_to_string(out.join("chart-category-bar.svg")).unwrap();
    assert!(bar.contains(r#"viewBox="0 0 640 360""#));
    assert!(!out.join("chart-value-line.svg").exists());
}

#[test]
fn render_failed_fetch_leaves_output_untouched() {
    let temp_dir = TempDir::new().unwrap();
    let out = temp_dir.path().join("out");
    fs::create_dir_all(&out).unwrap();
    fs::write(out.join("chart-category-bar.svg"), "previous").unwrap();

    cmd()
        .args(["render", "--api-url", UNREACHABLE_API, "--output"])
        .arg(&out)
        .assert()
        .failure()
        .stderr(predicate::str::contains("could not be loaded"));

    assert_eq!(fs::read_to_string(out.join("chart-category-bar.svg")).unwrap(), "previous");
    assert!(!out.join("chart-value-line.svg").exists());
}

#[test]
fn render_payload_from_stdin_after_failed_fetch() {
    let temp_dir = TempDir::new().unwrap();
    let out = temp_dir.path().join("out");

    cmd()
        .args(["render", "--api-url", UNREACHABLE_API, "--stdin", "--output"])
        .arg(&out)
        .write_stdin(PAYLOAD)
        .assert()
        .success();

    let radar = fs::read_to_string(out.join("chart-value-radar.svg")).unwrap();
    assert!(radar.contains("Category: A"));
}

#[test]
fn no_subcommand_shows_help() {
    cmd()
        .assert()
        .success()
        .stdout(predicate::str::contains("render"))
        .stdout(predicate::str::contains("summary"));
}
