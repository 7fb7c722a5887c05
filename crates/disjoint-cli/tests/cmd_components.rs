//! Integration tests for `disjoint components`.
#![allow(clippy::expect_used)]

use std::io::Write as _;
use std::path::PathBuf;
use std::process::{Command, Stdio};

/// Path to the compiled `disjoint` binary.
fn disjoint_bin() -> PathBuf {
    let mut path = std::env::current_exe().expect("current exe");
    path.pop();
    if path.ends_with("deps") {
        path.pop();
    }
    path.push("disjoint");
    path
}

/// Path to a fixture file.
fn fixture(name: &str) -> PathBuf {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("tests/fixtures");
    path.push(name);
    path
}

// ---------------------------------------------------------------------------
// components: human mode
// ---------------------------------------------------------------------------

#[test]
fn components_letters_human() {
    let out = Command::new(disjoint_bin())
        .args(["components", fixture("letters.csv").to_str().expect("path")])
        .output()
        .expect("run disjoint components");
    assert!(out.status.success(), "exit code: {:?}", out.status.code());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert_eq!(stdout, "D: A, B, C, D\nE: E\nF: F\nG: G\nH: H\n");
}

#[test]
fn components_same_classes_under_halving() {
    let out = Command::new(disjoint_bin())
        .args([
            "components",
            fixture("letters.csv").to_str().expect("path"),
            "--strategy",
            "halving",
        ])
        .output()
        .expect("run disjoint components");
    assert!(out.status.success(), "exit code: {:?}", out.status.code());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.starts_with("D: A, B, C, D\n"), "stdout: {stdout}");
}

// ---------------------------------------------------------------------------
// components: json mode
// ---------------------------------------------------------------------------

#[test]
fn components_letters_json() {
    let out = Command::new(disjoint_bin())
        .args([
            "components",
            "-f",
            "json",
            fixture("letters.csv").to_str().expect("path"),
        ])
        .output()
        .expect("run disjoint components");
    assert!(out.status.success(), "exit code: {:?}", out.status.code());
    let value: serde_json::Value = serde_json::from_slice(&out.stdout).expect("valid JSON");
    assert_eq!(value["element_count"], 8);
    assert_eq!(value["set_count"], 5);
    assert_eq!(value["strategy"], "full");
    assert_eq!(
        value["components"][0]["members"],
        serde_json::json!(["A", "B", "C", "D"])
    );
}

// ---------------------------------------------------------------------------
// components: stdin and failures
// ---------------------------------------------------------------------------

#[test]
fn components_reads_stdin() {
    let mut child = Command::new(disjoint_bin())
        .args(["components", "-"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .expect("spawn disjoint components");
    child
        .stdin
        .take()
        .expect("stdin piped")
        .write_all(b"x,y\nz\n")
        .expect("write stdin");
    let out = child.wait_with_output().expect("wait");
    assert!(out.status.success(), "exit code: {:?}", out.status.code());
    assert_eq!(String::from_utf8_lossy(&out.stdout), "y: x, y\nz: z\n");
}

#[test]
fn components_empty_element_exits_2() {
    let out = Command::new(disjoint_bin())
        .args(["components", fixture("empty-element.csv").to_str().expect("path")])
        .output()
        .expect("run disjoint components");
    assert_eq!(out.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("line 2"), "stderr: {stderr}");
    assert!(out.stdout.is_empty());
}

#[test]
fn components_missing_file_exits_2() {
    let out = Command::new(disjoint_bin())
        .args(["components", "/no/such/file.csv"])
        .output()
        .expect("run disjoint components");
    assert_eq!(out.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("file not found"), "stderr: {stderr}");
}

#[test]
fn components_over_size_limit_exits_2() {
    let out = Command::new(disjoint_bin())
        .args([
            "components",
            fixture("letters.csv").to_str().expect("path"),
            "--max-file-size",
            "8",
        ])
        .output()
        .expect("run disjoint components");
    assert_eq!(out.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("too large"), "stderr: {stderr}");
}

#[test]
fn components_size_limit_from_env() {
    let out = Command::new(disjoint_bin())
        .args(["components", fixture("letters.csv").to_str().expect("path")])
        .env("DISJOINT_MAX_FILE_SIZE", "8")
        .output()
        .expect("run disjoint components");
    assert_eq!(out.status.code(), Some(2));
}

#[test]
fn components_malformed_record_exits_2() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("bad.csv");
    std::fs::write(&path, "A,B\nA,B,7,8\n").expect("write");
    let out = Command::new(disjoint_bin())
        .args(["components", path.to_str().expect("path")])
        .output()
        .expect("run disjoint components");
    assert_eq!(out.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("line 2"), "stderr: {stderr}");
}

#[test]
fn verbose_logs_to_stderr() {
    let out = Command::new(disjoint_bin())
        .args(["components", fixture("letters.csv").to_str().expect("path"), "-v"])
        .env_remove("DISJOINT_LOG")
        .env("DISJOINT_LOG_STYLE", "never")
        .output()
        .expect("run disjoint components");
    assert!(out.status.success(), "exit code: {:?}", out.status.code());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("DEBUG"), "stderr: {stderr}");
    assert!(stderr.contains("loaded 8 elements"), "stderr: {stderr}");
}
