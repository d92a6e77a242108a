use assert_cmd::prelude::*;
use std::fs;
use std::process::Command;

const BASIC: &str = "3\n1 2 5\n2 3 2\n";

fn write_network(dir: &tempfile::TempDir, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join("network.txt");
    fs::write(&path, contents).expect("write network");
    path
}

#[test]
fn span_reports_the_basic_network() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let path = write_network(&tmp, BASIC);

    let exe = assert_cmd::cargo_bin!("narwhal-cli");
    let assert = Command::new(exe)
        .arg(path.to_string_lossy().as_ref())
        .assert()
        .success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).expect("utf8");
    assert_eq!(stdout, "1 2 5\n2 3 2\ntotal 7\n");
}

#[test]
fn span_reads_stdin_when_asked() {
    let exe = assert_cmd::cargo_bin!("narwhal-cli");
    let assert = assert_cmd::Command::new(exe)
        .arg("-")
        .write_stdin(BASIC)
        .assert()
        .success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).expect("utf8");
    assert!(stdout.ends_with("total 7\n"));
}

#[test]
fn json_report_covers_every_vertex() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let path = write_network(&tmp, BASIC);

    let exe = assert_cmd::cargo_bin!("narwhal-cli");
    let assert = Command::new(exe)
        .args(["span", "--json", path.to_string_lossy().as_ref()])
        .assert()
        .success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).expect("utf8");
    let value: serde_json::Value = serde_json::from_str(&stdout).expect("valid json");

    assert_eq!(value["root"], 1);
    assert_eq!(value["total_weight"], 7);
    let vertices = value["vertices"].as_array().expect("vertices array");
    assert_eq!(vertices.len(), 4);
    // Vertex "0" exists by convention but is unreachable.
    assert_eq!(vertices[0]["weight"], serde_json::Value::Null);
    assert_eq!(vertices[2]["predecessor"], 1);
    assert_eq!(vertices[2]["weight"], 5);
}

#[test]
fn span_writes_the_report_to_a_file() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let path = write_network(&tmp, BASIC);
    let out = tmp.path().join("report.txt");

    let exe = assert_cmd::cargo_bin!("narwhal-cli");
    Command::new(exe)
        .args([
            "span",
            "--out",
            out.to_string_lossy().as_ref(),
            path.to_string_lossy().as_ref(),
        ])
        .assert()
        .success();

    let report = fs::read_to_string(&out).expect("read report");
    assert!(report.ends_with("total 7\n"));
}

#[test]
fn graph_prints_the_adjacency_listing() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let path = write_network(&tmp, BASIC);

    let exe = assert_cmd::cargo_bin!("narwhal-cli");
    let assert = Command::new(exe)
        .args(["graph", path.to_string_lossy().as_ref()])
        .assert()
        .success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).expect("utf8");
    assert!(stdout.contains("1 1\n"));
    assert!(stdout.contains("  -> 2 5\n"));
    assert!(stdout.contains("  -> 3 2\n"));
}

#[test]
fn missing_file_fails_without_a_report() {
    let exe = assert_cmd::cargo_bin!("narwhal-cli");
    let assert = Command::new(exe)
        .arg("definitely-not-here.txt")
        .assert()
        .failure();

    let out = assert.get_output();
    assert!(out.stdout.is_empty());
    let stderr = String::from_utf8(out.stderr.clone()).expect("utf8");
    assert!(stderr.contains("I/O error"));
}

#[test]
fn malformed_weight_names_the_line() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let path = write_network(&tmp, "2\n1 2 x\n");

    let exe = assert_cmd::cargo_bin!("narwhal-cli");
    let assert = Command::new(exe)
        .arg(path.to_string_lossy().as_ref())
        .assert()
        .failure();

    let stderr = String::from_utf8(assert.get_output().stderr.clone()).expect("utf8");
    assert!(stderr.contains("line 2"));
}

#[test]
fn zero_weight_edge_is_rejected() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let path = write_network(&tmp, "2\n1 2 0\n");

    let exe = assert_cmd::cargo_bin!("narwhal-cli");
    let assert = Command::new(exe)
        .arg(path.to_string_lossy().as_ref())
        .assert()
        .failure();

    let stderr = String::from_utf8(assert.get_output().stderr.clone()).expect("utf8");
    assert!(stderr.contains("weight"));
}

#[test]
fn unknown_root_exits_with_its_own_code() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let path = write_network(&tmp, BASIC);

    let exe = assert_cmd::cargo_bin!("narwhal-cli");
    Command::new(exe)
        .args(["span", "--root", "nope", path.to_string_lossy().as_ref()])
        .assert()
        .code(3);
}

#[test]
fn unknown_flag_prints_usage() {
    let exe = assert_cmd::cargo_bin!("narwhal-cli");
    let assert = Command::new(exe).arg("--frobnicate").assert().code(2);

    let stderr = String::from_utf8(assert.get_output().stderr.clone()).expect("utf8");
    assert!(stderr.contains("USAGE"));
}
