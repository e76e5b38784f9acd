/// CLI integration tests for scaffold-ml.
///
/// These tests invoke the compiled binary end to end inside a temp
/// working directory, so relative paths in the commands resolve there
/// and nothing leaks between tests. Logs go to stderr; assertions on
/// stdout see only the command's own output.
use std::fs;
use std::path::Path;
use std::process::Command;

use tempfile::tempdir;

const CONFIG_YAML: &str = "\
model:
  name: \"advertising_model\"
  version: 1
artifacts:
  directories:
    - artifacts/data
    - artifacts/model
";

fn write_config(dir: &Path) {
    fs::write(dir.join("config.yaml"), CONFIG_YAML).expect("write config fixture");
}

#[test]
fn init_creates_tree_and_manifest() {
    let bin = env!("CARGO_BIN_EXE_scaffold-ml");
    let tmp = tempdir().expect("tempdir");
    write_config(tmp.path());

    let status = Command::new(bin)
        .current_dir(tmp.path())
        .args(["init", "--manifest", "scaffold.json"])
        .status()
        .expect("failed to spawn scaffold-ml binary");

    assert!(status.success(), "init command failed");
    assert!(tmp.path().join("artifacts/data").is_dir());
    assert!(tmp.path().join("artifacts/model").is_dir());

    let manifest = fs::read_to_string(tmp.path().join("scaffold.json")).expect("read manifest");
    assert!(
        manifest.contains("\n    \"directories\""),
        "expected 4-space indented manifest, got: {manifest}"
    );
    let parsed: serde_json::Value = serde_json::from_str(&manifest).expect("parse manifest");
    assert_eq!(parsed["directories"].as_array().map(Vec::len), Some(2));
}

#[test]
fn init_dry_run_touches_nothing() {
    let bin = env!("CARGO_BIN_EXE_scaffold-ml");
    let tmp = tempdir().expect("tempdir");
    write_config(tmp.path());

    let status = Command::new(bin)
        .current_dir(tmp.path())
        .args(["init", "--manifest", "scaffold.json", "--dry-run"])
        .status()
        .expect("failed to spawn scaffold-ml binary");

    assert!(status.success(), "dry-run init failed");
    assert!(
        !tmp.path().join("artifacts").exists(),
        "dry-run must not create directories"
    );
    assert!(
        !tmp.path().join("scaffold.json").exists(),
        "dry-run must not write the manifest"
    );
}

#[test]
fn init_missing_config_exits_nonzero() {
    let bin = env!("CARGO_BIN_EXE_scaffold-ml");
    let tmp = tempdir().expect("tempdir");

    let status = Command::new(bin)
        .current_dir(tmp.path())
        .args(["init"])
        .status()
        .expect("failed to spawn scaffold-ml binary");

    assert!(
        !status.success(),
        "expected non-zero exit for missing config"
    );
}

#[test]
fn init_missing_directories_key_exits_nonzero() {
    let bin = env!("CARGO_BIN_EXE_scaffold-ml");
    let tmp = tempdir().expect("tempdir");
    fs::write(
        tmp.path().join("config.yaml"),
        "model:\n  name: \"advertising_model\"\n",
    )
    .expect("write config fixture");

    let status = Command::new(bin)
        .current_dir(tmp.path())
        .args(["init"])
        .status()
        .expect("failed to spawn scaffold-ml binary");

    assert!(
        !status.success(),
        "expected non-zero exit when directories key is absent"
    );
}

#[test]
fn requirements_lists_installable_lines() {
    let bin = env!("CARGO_BIN_EXE_scaffold-ml");
    let tmp = tempdir().expect("tempdir");
    fs::write(tmp.path().join("requirements.txt"), "pandas\nnumpy\n-e .\n")
        .expect("write requirements fixture");

    let output = Command::new(bin)
        .current_dir(tmp.path())
        .args(["requirements"])
        .output()
        .expect("failed to spawn scaffold-ml binary");

    assert!(output.status.success(), "requirements command failed");
    let stdout = String::from_utf8(output.stdout).expect("utf8 stdout");
    assert_eq!(stdout, "pandas\nnumpy\n");
}

#[test]
fn requirements_json_renders_array() {
    let bin = env!("CARGO_BIN_EXE_scaffold-ml");
    let tmp = tempdir().expect("tempdir");
    fs::write(tmp.path().join("requirements.txt"), "pandas\nnumpy\n-e .\n")
        .expect("write requirements fixture");

    let output = Command::new(bin)
        .current_dir(tmp.path())
        .args(["requirements", "--json"])
        .output()
        .expect("failed to spawn scaffold-ml binary");

    assert!(output.status.success(), "requirements --json failed");
    let stdout = String::from_utf8(output.stdout).expect("utf8 stdout");
    let reqs: Vec<String> = serde_json::from_str(&stdout).expect("parse stdout as JSON");
    assert_eq!(reqs, vec!["pandas", "numpy"]);
}

#[test]
fn get_prints_scalar_value() {
    let bin = env!("CARGO_BIN_EXE_scaffold-ml");
    let tmp = tempdir().expect("tempdir");
    write_config(tmp.path());

    let output = Command::new(bin)
        .current_dir(tmp.path())
        .args(["get", "model.name"])
        .output()
        .expect("failed to spawn scaffold-ml binary");

    assert!(output.status.success(), "get command failed");
    let stdout = String::from_utf8(output.stdout).expect("utf8 stdout");
    assert_eq!(stdout.trim_end(), "advertising_model");
}

#[test]
fn get_missing_key_exits_nonzero() {
    let bin = env!("CARGO_BIN_EXE_scaffold-ml");
    let tmp = tempdir().expect("tempdir");
    write_config(tmp.path());

    let output = Command::new(bin)
        .current_dir(tmp.path())
        .args(["get", "training.rate"])
        .output()
        .expect("failed to spawn scaffold-ml binary");

    assert!(
        !output.status.success(),
        "expected non-zero exit for missing key"
    );
    let stderr = String::from_utf8(output.stderr).expect("utf8 stderr");
    assert!(
        stderr.contains("training.rate"),
        "error should name the key, got: {stderr}"
    );
}
