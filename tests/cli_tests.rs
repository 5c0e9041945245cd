use serde_json::Value as JsonValue;
use std::fs;
use std::process::{Command, Output};
use tempfile::TempDir;

const RGB_DOCUMENT: &str = r#"{
    "schema": {"count": 3, "kind": "integer", "allowed_keys": ["red", "green", "blue"]},
    "rows": [
        {"name": "m1", "values": {"red": 2, "green": 1, "blue": 4}},
        {"name": "m2", "values": {"red": 2, "green": 3, "blue": 4}}
    ],
    "coefficients": {"red": 0.5, "green": 0.5, "blue": 1.0}
}"#;

fn rustmatrix(args: &[&str], cell_width: Option<&str>) -> Output {
    let mut command = Command::new(env!("CARGO_BIN_EXE_rustmatrix"));
    command.args(args).env_remove("RUSTMATRIX_CELL_WIDTH");
    if let Some(width) = cell_width {
        command.env("RUSTMATRIX_CELL_WIDTH", width);
    }
    command.output().unwrap()
}

#[test]
fn test_demo_scores() {
    let output = rustmatrix(&["demo"], None);
    assert!(output.status.success());
    assert_eq!(String::from_utf8(output.stdout).unwrap(), "student1: 2\nstudent2: 2\n");
}

#[test]
fn test_potential_json_output() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("rgb.json");
    fs::write(&path, RGB_DOCUMENT).unwrap();

    let output = rustmatrix(&["potential", "--input", path.to_str().unwrap(), "--json"], None);
    assert!(output.status.success());

    let scores: JsonValue = serde_json::from_slice(&output.stdout).unwrap();
    let m1 = scores["m1"].as_f64().unwrap();
    assert!((m1 - (0.5 + 0.5 / 3.0 + 1.0)).abs() < 1e-9);
    assert_eq!(scores["m2"].as_f64(), Some(2.0));
    assert_eq!(scores.as_object().unwrap().len(), 2);
}

#[test]
fn test_potential_text_output() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("rgb.json");
    fs::write(&path, RGB_DOCUMENT).unwrap();

    let output = rustmatrix(&["potential", "--input", path.to_str().unwrap()], None);
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("m1: 1.66"));
    assert_eq!(lines[1], "m2: 2");
}

#[test]
fn test_help_ignores_invalid_environment() {
    let output = rustmatrix(&["--help"], Some("wide"));
    assert!(output.status.success());

    let output = rustmatrix(&["demo"], Some("wide"));
    assert!(!output.status.success());
}
