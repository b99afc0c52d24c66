//! End-to-end tests of the `roof` binary.

#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Run from an empty directory so no stray roof.toml is picked up.
fn roof(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("roof").expect("roof binary");
    cmd.current_dir(dir.path()).env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_estimate_text_report() {
    let temp = tempfile::tempdir().expect("tempdir");

    roof(&temp)
        .args(["estimate", "--pitch", "25"])
        .assert()
        .success()
        .stdout(predicate::str::contains("External roof width:      4890 mm"))
        .stdout(predicate::str::contains("Number of trusses:        4"));
}

#[test]
fn test_invalid_target_falls_back_to_explicit_pitch() {
    let temp = tempfile::tempdir().expect("tempdir");

    roof(&temp)
        .args(["estimate", "--target-height", "-1", "--pitch", "30", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"resolved_pitch_degrees\": 30.0"))
        .stdout(predicate::str::contains("\"pitch_source\": \"explicit\""));
}

#[test]
fn test_valid_target_is_solved() {
    let temp = tempfile::tempdir().expect("tempdir");

    roof(&temp)
        .args(["estimate", "--target-height", "2400", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"pitch_source\": \"solved_from_height\""));
}

#[test]
fn test_zero_width_exits_with_error_json() {
    let temp = tempfile::tempdir().expect("tempdir");

    roof(&temp)
        .args(["estimate", "--width", "0", "--json"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("\"code\": \"INVALID_GEOMETRY\""))
        .stdout(predicate::str::contains("internal_width_mm"));
}

#[test]
fn test_zero_spacing_exits_with_error() {
    let temp = tempfile::tempdir().expect("tempdir");

    roof(&temp)
        .args(["estimate", "--rafter-spacing", "0"])
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_solve_pitch() {
    let temp = tempfile::tempdir().expect("tempdir");

    // finished height of the default roof at 25°
    roof(&temp)
        .args(["solve-pitch", "--height", "1546.1222"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Solved roof pitch:      25.0000°"));
}

#[test]
fn test_solve_pitch_rejects_negative_height() {
    let temp = tempfile::tempdir().expect("tempdir");

    roof(&temp)
        .args(["solve-pitch", "--height", "-5"])
        .assert()
        .code(1);
}

#[test]
fn test_config_file_then_flag_precedence() {
    let temp = tempfile::tempdir().expect("tempdir");
    fs::write(
        temp.path().join("roof.toml"),
        "[roof]\ninternal_width_mm = 3000.0\n\n[output]\njson = true\n",
    )
    .unwrap();

    // 3000 + 2 × 70 + 2 × 150
    roof(&temp)
        .arg("estimate")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"external_width_mm\": 3440.0"));

    roof(&temp)
        .args(["estimate", "--width", "3500"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"external_width_mm\": 3940.0"));
}

#[test]
fn test_explicit_config_path() {
    let temp = tempfile::tempdir().expect("tempdir");
    let path = temp.path().join("custom.toml");
    fs::write(&path, "[roof]\nsoffit_depth_mm = 100.0\n").unwrap();

    // 4450 + 2 × 70 + 2 × 100
    roof(&temp)
        .args(["estimate", "--json", "--config"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"external_width_mm\": 4790.0"));
}

#[test]
fn test_defaults_prints_parseable_toml() {
    let temp = tempfile::tempdir().expect("tempdir");

    roof(&temp)
        .arg("defaults")
        .assert()
        .success()
        .stdout(predicate::str::contains("internal_width_mm = 4450.0"))
        .stdout(predicate::str::contains("mode = \"explicit\""));
}
