use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Fake converter helpers shared by the CLI tests
#[cfg(unix)]
mod fake_tools {
    use std::path::{Path, PathBuf};

    pub fn install(dir: &Path, name: &str, body: &str) -> PathBuf {
        use std::os::unix::fs::PermissionsExt;

        let path = dir.join(name);
        std::fs::write(&path, format!("#!/bin/sh\n{body}\n")).unwrap();
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
        path
    }
}

fn iconport() -> Command {
    let mut cmd = Command::cargo_bin("iconport").unwrap();
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn tools_reports_missing_converters() {
    let empty_path = TempDir::new().unwrap();

    iconport()
        .env("PATH", empty_path.path())
        .arg("tools")
        .assert()
        .failure()
        .stdout(predicate::str::contains("hvif2svg"))
        .stdout(predicate::str::contains("not found"));
}

#[cfg(unix)]
#[test]
fn tools_json_lists_resolved_paths() {
    let tools = TempDir::new().unwrap();
    for name in ["hvif2svg", "svg2hvif", "icon2icon"] {
        fake_tools::install(tools.path(), name, "exit 0");
    }

    let assert = iconport()
        .env("PATH", tools.path())
        .args(["tools", "--json"])
        .assert()
        .success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let report: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    let names: Vec<_> = report
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["name"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(names, ["hvif2svg", "svg2hvif", "icon2icon"]);
    assert!(report[0]["path"].is_string());
}

#[test]
fn detect_identifies_hvif_by_magic() {
    let dir = TempDir::new().unwrap();
    let icon = dir.path().join("icon.dat");
    std::fs::write(&icon, b"ncif\x02\x01\x01").unwrap();

    iconport()
        .args(["detect", "--input", icon.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("HVIF"));
}

#[test]
fn detect_rejects_unknown_data() {
    let dir = TempDir::new().unwrap();
    let blob = dir.path().join("blob.bin");
    std::fs::write(&blob, b"\x00\x01\x02\x03garbage").unwrap();

    iconport()
        .args(["detect", "--input", blob.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unrecognized icon format"));
}

#[cfg(unix)]
#[test]
fn import_auto_detects_and_writes_output_file() {
    let tools = TempDir::new().unwrap();
    fake_tools::install(
        tools.path(),
        "hvif2svg",
        r#"printf '<svg xmlns="http://www.w3.org/2000/svg"/>' > "$2""#,
    );

    let dir = TempDir::new().unwrap();
    let input = dir.path().join("icon.hvif");
    let output = dir.path().join("icon.svg");
    std::fs::write(&input, b"ncif\x02\x01\x01payload").unwrap();

    iconport()
        .env("PATH", tools.path())
        .args([
            "import",
            "--input",
            input.to_str().unwrap(),
            "--output",
            output.to_str().unwrap(),
        ])
        .assert()
        .success();

    let svg = std::fs::read_to_string(&output).unwrap();
    assert!(svg.starts_with("<svg"));
}

#[cfg(unix)]
#[test]
fn export_from_stdin_to_stdout() {
    let tools = TempDir::new().unwrap();
    fake_tools::install(tools.path(), "icon2icon", r#"printf 'IMSG' > "$2""#);

    iconport()
        .env("PATH", tools.path())
        .args(["export", "--input", "-", "--format", "iom"])
        .write_stdin("<svg xmlns=\"http://www.w3.org/2000/svg\"/>")
        .assert()
        .success()
        .stdout(predicate::str::contains("IMSG"));
}

#[cfg(unix)]
#[test]
fn failed_conversion_surfaces_tool_stderr() {
    let tools = TempDir::new().unwrap();
    fake_tools::install(
        tools.path(),
        "hvif2svg",
        r#"echo 'File is not a valid HVIF file' >&2
exit 1"#,
    );

    let dir = TempDir::new().unwrap();
    let input = dir.path().join("bad.hvif");
    std::fs::write(&input, b"ncif-but-truncated").unwrap();

    iconport()
        .env("PATH", tools.path())
        .args(["import", "--input", input.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("File is not a valid HVIF file"));
}

#[test]
fn import_of_missing_file_fails_with_context() {
    iconport()
        .args(["import", "--input", "/nonexistent/icon.hvif"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read input file"));
}

#[test]
fn export_requires_a_format() {
    iconport()
        .args(["export", "--input", "drawing.svg"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--format"));
}

#[test]
fn undetectable_import_asks_for_explicit_format() {
    let dir = TempDir::new().unwrap();
    let blob = dir.path().join("blob.bin");
    std::fs::write(&blob, b"\x00\x01\x02\x03").unwrap();

    iconport()
        .args(["import", "--input", blob.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--format"));
}
