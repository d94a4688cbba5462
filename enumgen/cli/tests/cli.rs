use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

const GENDER: &str = "package enum\n\n// @enumGenerated\ntype gender string\n\nconst (\n\tmale   gender = \"male\"\n\tfemale gender = \"female\"\n)\n";

#[allow(deprecated)] // cargo_bin is the simplest way to reach the built binary
fn enumgen_cmd() -> Command {
    Command::cargo_bin("enumgen").unwrap()
}

fn write_source(dir: &TempDir, contents: &str) -> PathBuf {
    let path = dir.path().join("enum.go");
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn test_help_flag() {
    enumgen_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("@enumGenerated"))
        .stdout(predicate::str::contains("--check"));
}

#[test]
fn test_version_flag() {
    enumgen_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("enumgen"));
}

#[test]
fn test_missing_file_argument_fails() {
    enumgen_cmd().assert().failure();
}

#[test]
fn test_rewrites_file_and_reports_types() {
    let dir = TempDir::new().unwrap();
    let path = write_source(&dir, GENDER);

    enumgen_cmd()
        .arg("--plain")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "gender: Values inserted, String inserted (2 values)",
        ))
        .stdout(predicate::str::contains("Generated 1 enum type(s)"));

    let rewritten = fs::read_to_string(&path).unwrap();
    assert!(rewritten.contains("func (g gender) Values() []gender {"));
    assert!(rewritten.contains("func (g gender) String() string {"));
}

#[test]
fn test_second_run_replaces_methods() {
    let dir = TempDir::new().unwrap();
    let path = write_source(&dir, GENDER);

    enumgen_cmd().arg(&path).assert().success();
    let first = fs::read_to_string(&path).unwrap();

    enumgen_cmd()
        .arg("--plain")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Values replaced, String replaced"));

    assert_eq!(fs::read_to_string(&path).unwrap(), first);
}

#[test]
fn test_unmarked_file_reports_nothing() {
    let dir = TempDir::new().unwrap();
    let path = write_source(&dir, "package enum\n\ntype plain int\n");

    enumgen_cmd()
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("No @enumGenerated types found"));
}

// ============================================================================
// --check and --stdout never touch the file
// ============================================================================

#[test]
fn test_check_flags_stale_file() {
    let dir = TempDir::new().unwrap();
    let path = write_source(&dir, GENDER);

    enumgen_cmd()
        .args(["--check", "--plain"])
        .arg(&path)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("is out of date"));

    assert_eq!(fs::read_to_string(&path).unwrap(), GENDER);
}

#[test]
fn test_check_passes_after_generation() {
    let dir = TempDir::new().unwrap();
    let path = write_source(&dir, GENDER);

    enumgen_cmd().arg(&path).assert().success();

    enumgen_cmd()
        .arg("--check")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("is up to date"));
}

#[test]
fn test_stdout_prints_generated_source() {
    let dir = TempDir::new().unwrap();
    let path = write_source(&dir, GENDER);

    enumgen_cmd()
        .arg("--stdout")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::starts_with("package enum\n"))
        .stdout(predicate::str::contains("\treturn []gender{\n\t\tmale,\n\t\tfemale,\n\t}\n"));

    assert_eq!(fs::read_to_string(&path).unwrap(), GENDER);
}

#[test]
fn test_check_conflicts_with_stdout() {
    let dir = TempDir::new().unwrap();
    let path = write_source(&dir, GENDER);

    enumgen_cmd()
        .args(["--check", "--stdout"])
        .arg(&path)
        .assert()
        .failure();
}

// ============================================================================
// Failures
// ============================================================================

#[test]
fn test_invalid_source_fails_without_writing() {
    let dir = TempDir::new().unwrap();
    let broken = "package enum\n\nfunc broken( {\n";
    let path = write_source(&dir, broken);

    enumgen_cmd()
        .arg("--plain")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse"));

    assert_eq!(fs::read_to_string(&path).unwrap(), broken);
}

#[test]
fn test_missing_file_fails() {
    let dir = TempDir::new().unwrap();

    enumgen_cmd()
        .arg(dir.path().join("absent.go"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read"));
}
