//! CLI integration tests for the phyloverify binary.

mod common;

use assert_cmd::Command;
use common::{mixed_fixture, FixtureBuilder, PhylorefSpec, PUBLISHED_SINCE_2020};
use predicates::prelude::*;
use serde_json::Value;
use std::path::Path;

// ============================================================
// Helper functions
// ============================================================

/// Build an `assert_cmd::Command` pointing at the `phyloverify` binary,
/// with its working directory set to `dir` and no ambient configuration.
fn phyloverify_cmd(dir: &Path) -> Command {
    let mut cmd = assert_cmd::cargo_bin_cmd!("phyloverify");
    cmd.current_dir(dir)
        .env_remove("RUST_LOG")
        .env_remove("PHYLOVERIFY_LOGGING__LEVEL");
    cmd
}

fn passing_fixture() -> FixtureBuilder {
    FixtureBuilder::new().phyloref(
        PhylorefSpec::new("#D1")
            .label("Published clade")
            .status(PUBLISHED_SINCE_2020)
            .resolves_to(&["#n1"])
            .expects(&["#n1"]),
    )
}

// ============================================================
// test command
// ============================================================

#[test]
fn test_all_passing_exits_zero() {
    let (dir, path) = passing_fixture().write();

    phyloverify_cmd(dir.path())
        .args(["test", path.to_str().unwrap()])
        .assert()
        .code(0)
        .stdout(predicate::str::starts_with("1..1\n"))
        .stdout(predicate::str::contains("ok 1 Phyloreference 'Published clade'"))
        .stderr(predicate::str::contains("Input: "))
        .stderr(predicate::str::contains(
            "Testing complete: 1 successes, 0 failures, 0 failures marked TODO, 0 skipped.",
        ));
}

#[test]
fn test_exit_status_counts_hard_failures() {
    let (dir, path) = mixed_fixture().write();

    phyloverify_cmd(dir.path())
        .args(["test", path.to_str().unwrap()])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("not ok 2 Phyloreference 'Draft clade' # TODO"))
        .stdout(predicate::str::contains("not ok 3 Phyloreference 'Broken clade'"));
}

#[test]
fn test_no_successes_exits_with_sentinel() {
    let (dir, path) = FixtureBuilder::new().write();

    // -1 as a process exit status
    phyloverify_cmd(dir.path())
        .args(["test", path.to_str().unwrap()])
        .assert()
        .code(255)
        .stdout(predicate::str::starts_with("1..0\n"));
}

#[test]
fn test_reads_fixture_from_stdin() {
    let fixture = passing_fixture();
    let dir = tempfile::tempdir().unwrap();

    phyloverify_cmd(dir.path())
        .args(["test", "-"])
        .write_stdin(serde_json::to_string(&fixture.to_json()).unwrap())
        .assert()
        .code(0)
        .stdout(predicate::str::contains("# From file: <stdin>"));
}

#[test]
fn test_yaml_fixture() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("phylorefs.yaml");
    let yaml = serde_yaml::to_string(&passing_fixture().to_json()).unwrap();
    std::fs::write(&path, yaml).unwrap();

    phyloverify_cmd(dir.path())
        .args(["test", path.to_str().unwrap()])
        .assert()
        .code(0);
}

#[test]
fn test_missing_input_is_an_input_error() {
    let dir = tempfile::tempdir().unwrap();

    phyloverify_cmd(dir.path())
        .args(["test", "no-such-file.json"])
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("no-such-file.json"));
}

#[test]
fn test_malformed_status_writes_no_report() {
    let fixture = mixed_fixture().phyloref(
        PhylorefSpec::new("#bad")
            .resolves_to(&["#n1"])
            .expects(&["#n1"])
            .raw_status(serde_json::json!({"status": "pso:published", "since": "2020"})),
    );
    let (dir, path) = fixture.write();

    phyloverify_cmd(dir.path())
        .args(["test", path.to_str().unwrap()])
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Configuration inconsistency"));
}

#[test]
fn test_config_file_strips_prefixes() {
    let fixture = FixtureBuilder::new().phyloref(
        PhylorefSpec::new("#D1")
            .resolves_to(&["http://example.org/tree#n1"])
            .expects(&["http://example.org/tree#n2"]),
    );
    let (dir, path) = fixture.write();
    let config = dir.path().join("phyloverify.yaml");
    std::fs::write(
        &config,
        "report:\n  strip_uri_prefixes:\n    - http://example.org/tree\n",
    )
    .unwrap();

    phyloverify_cmd(dir.path())
        .args(["--config", config.to_str().unwrap(), "test", path.to_str().unwrap()])
        .assert()
        .stdout(predicate::str::contains("# Resolved nodes: [#n1]"));
}

#[test]
fn test_invalid_config_is_rejected() {
    let (dir, path) = passing_fixture().write();
    let config = dir.path().join("phyloverify.yaml");
    std::fs::write(&config, "report:\n  concurrency: 0\n").unwrap();

    phyloverify_cmd(dir.path())
        .args(["--config", config.to_str().unwrap(), "test", path.to_str().unwrap()])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("concurrency"));
}

// ============================================================
// resolve command
// ============================================================

#[test]
fn test_resolve_prints_json() {
    let (dir, path) = mixed_fixture().write();

    let output = phyloverify_cmd(dir.path())
        .args(["resolve", path.to_str().unwrap()])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let json: Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(json["phylorefs"]["#D1"], serde_json::json!(["#n1"]));
    assert_eq!(json["phylorefs"]["#D4"], serde_json::json!(["#n3"]));
}

#[test]
fn test_resolve_table() {
    let (dir, path) = mixed_fixture().write();

    phyloverify_cmd(dir.path())
        .args(["resolve", "--table", path.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Phyloreference"))
        .stdout(predicate::str::contains("#D3"));
}

#[test]
fn test_resolve_errors_as_json() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("empty.json");
    std::fs::write(&path, r#"{"classes": [], "individuals": []}"#).unwrap();

    let output = phyloverify_cmd(dir.path())
        .args(["resolve", "--errors-as-json", path.to_str().unwrap()])
        .assert()
        .code(0)
        .get_output()
        .stdout
        .clone();

    let json: Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(json["error"], "No phyloreferences were present");
    assert!(json["detail"].as_str().unwrap().contains("Phyloreference"));
}

#[test]
fn test_resolve_error_without_json_flag() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.json");
    std::fs::write(&path, "{not json").unwrap();

    phyloverify_cmd(dir.path())
        .args(["resolve", path.to_str().unwrap()])
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Could not parse fixture"));
}
