//! End-to-end tests for the `plumco` binary.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn plumco(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("plumco").expect("binary built");
    cmd.current_dir(dir.path());
    cmd
}

#[test]
fn build_uses_defaults() {
    let temp = TempDir::new().expect("temp dir");

    plumco(&temp)
        .arg("build")
        .assert()
        .success()
        .stdout(predicate::str::contains("index.html"));

    let html = std::fs::read_to_string(temp.path().join("dist/index.html")).expect("output");
    assert!(html.contains(r#"<div id="root">"#));
    assert!(html.contains("Our Services"));
    assert!(html.contains(r#"data-filter-mode="interactive""#));
}

#[test]
fn build_reads_config_file_from_working_dir() {
    let temp = TempDir::new().expect("temp dir");
    std::fs::write(
        temp.path().join("plumco.toml"),
        "mount_id = \"plumco-app\"\nout_dir = \"public\"\nproject_filter = \"decorative\"\n",
    )
    .expect("write config");

    plumco(&temp).arg("build").assert().success();

    let html = std::fs::read_to_string(temp.path().join("public/index.html")).expect("output");
    assert!(html.contains(r#"<div id="plumco-app">"#));
    assert!(html.contains(r#"data-filter-mode="decorative""#));
}

#[test]
fn flags_override_config_file() {
    let temp = TempDir::new().expect("temp dir");
    std::fs::write(temp.path().join("plumco.toml"), "mount_id = \"from-file\"\n")
        .expect("write config");

    plumco(&temp)
        .args(["build", "--mount-id", "from-flag", "--out", "out"])
        .assert()
        .success();

    let html = std::fs::read_to_string(temp.path().join("out/index.html")).expect("output");
    assert!(html.contains(r#"<div id="from-flag">"#));
}

#[test]
fn content_dump_round_trips_through_build() {
    let temp = TempDir::new().expect("temp dir");

    let output = plumco(&temp)
        .args(["content", "--format", "toml"])
        .output()
        .expect("run content");
    assert!(output.status.success());

    let edited = String::from_utf8(output.stdout)
        .expect("utf8")
        .replace("Drain Cleaning", "Drain Jetting");
    std::fs::write(temp.path().join("content.toml"), edited).expect("write content");

    plumco(&temp)
        .args(["build", "--content", "content.toml"])
        .assert()
        .success();

    let html = std::fs::read_to_string(temp.path().join("dist/index.html")).expect("output");
    assert!(html.contains("Drain Jetting"));
    assert!(!html.contains("Drain Cleaning"));
}

#[test]
fn invalid_content_fails_with_message() {
    let temp = TempDir::new().expect("temp dir");
    std::fs::write(
        temp.path().join("bad.json"),
        r#"{"testimonials": [{"id": 1, "name": "A", "title": "B", "text": "C", "rating": 7}]}"#,
    )
    .expect("write content");

    plumco(&temp)
        .args(["build", "--content", "bad.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("rating 7"));
}

#[test]
fn missing_explicit_config_fails() {
    let temp = TempDir::new().expect("temp dir");

    plumco(&temp)
        .args(["build", "--config", "missing.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}
