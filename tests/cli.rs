//! CLI integration tests

use assert_cmd::Command;
use predicates::prelude::*;

fn plaintab() -> Command {
    Command::cargo_bin("plaintab").unwrap()
}

fn write_sample(dir: &std::path::Path) -> std::path::PathBuf {
    let path = dir.join("students.txt");
    std::fs::write(
        &path,
        "# Name  Age  University\nAnkit  23  BHU\nShaurya  22  DU\n",
    )
    .unwrap();
    path
}

#[test]
fn view_renders_aligned_text() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_sample(dir.path());

    plaintab()
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::starts_with("# Name"))
        .stdout(predicate::str::contains("Shaurya"));
}

#[test]
fn view_renders_json_with_inferred_types() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_sample(dir.path());

    plaintab()
        .arg(&path)
        .args(["--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"type\": \"int\""))
        .stdout(predicate::str::contains("\"Ankit\""));
}

#[test]
fn convert_csv_and_check_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let csv_path = dir.path().join("data.csv");
    std::fs::write(&csv_path, "Name,Age\nAnkit,23\nShaurya,22\n").unwrap();
    let out_path = dir.path().join("data.txt");

    plaintab()
        .arg(&csv_path)
        .args(["-o", out_path.to_str().unwrap()])
        .assert()
        .success();

    let content = std::fs::read_to_string(&out_path).unwrap();
    assert!(content.starts_with("# Name"));

    plaintab()
        .arg(&out_path)
        .arg("--check")
        .assert()
        .success()
        .stdout(predicate::str::contains("ok:"));
}

#[test]
fn column_projection_in_given_order() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_sample(dir.path());

    plaintab()
        .arg(&path)
        .args(["--columns", "Age,Name"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("# Age"));
}

#[test]
fn missing_column_exits_with_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_sample(dir.path());

    plaintab()
        .arg(&path)
        .args(["--columns", "Nonexistent"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("column(s) not found: Nonexistent"));
}

#[test]
fn unreadable_input_exits_with_error() {
    plaintab()
        .arg("no-such-file.txt")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Failed to parse input file"));
}
