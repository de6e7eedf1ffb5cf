//! End-to-end tests of the `sfe` binary.

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

// Binary with a clean environment and default colour handling.
fn sfe_default(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("sfe").expect("sfe binary");
    cmd.current_dir(dir)
        .env_remove("NODE_ENV")
        .env_remove("SFE_MODE_ENV")
        .env_remove("SFE_MODE_POLICY")
        .env_remove("SFE_ROOT")
        .env_remove("SFE_FORMAT")
        .env_remove("SFE_OUTPUT_FILE")
        .env_remove("NO_COLOR")
        .env_remove("FORCE_COLOR")
        .env_remove("RUST_LOG");
    cmd
}

fn sfe(dir: &TempDir) -> Command {
    let mut cmd = sfe_default(dir.path());
    cmd.env("NO_COLOR", "1");
    cmd
}

fn scaffold(root: &Path) {
    fs::create_dir_all(root.join("src")).unwrap();
    fs::create_dir_all(root.join("demo")).unwrap();
    fs::write(root.join("src/index.js"), "").unwrap();
}

fn print_json(cmd: &mut Command) -> Value {
    let output = cmd.args(["print", "--format", "json"]).output().unwrap();
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).unwrap()
}

#[test]
fn runs_with_default_colour_handling() {
    let dir = TempDir::new().unwrap();
    sfe_default(dir.path())
        .arg("print")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("const webpack = require('webpack');"));
}

#[test]
fn runs_with_forced_colour_and_verbose_logging() {
    let dir = TempDir::new().unwrap();
    sfe_default(dir.path())
        .args(["--verbose", "print"])
        .env("FORCE_COLOR", "1")
        .assert()
        .success()
        .stdout(predicate::str::contains("module.exports"));
}

#[test]
fn rendered_paths_are_absolute() {
    let dir = TempDir::new().unwrap();
    let value = print_json(&mut sfe_default(dir.path()));

    let output_path = value["output"]["path"].as_str().unwrap();
    assert!(Path::new(output_path).is_absolute(), "{output_path}");
    assert!(output_path.ends_with("build"));

    let include = value["module"]["rules"][0]["include"].as_array().unwrap();
    assert_eq!(include.len(), 2);
    for include_dir in include {
        assert!(Path::new(include_dir.as_str().unwrap()).is_absolute(), "{include_dir}");
    }

    let entry = value["entry"]["index"][0].as_str().unwrap();
    assert!(Path::new(entry).is_absolute(), "{entry}");
}

#[test]
fn check_with_root_flag_from_another_directory() {
    let project = TempDir::new().unwrap();
    let elsewhere = TempDir::new().unwrap();
    scaffold(project.path());

    sfe_default(elsewhere.path())
        .args(["-C", project.path().to_str().unwrap(), "check", "--all-modes"])
        .assert()
        .success()
        .stderr(predicate::str::contains("production configuration is valid"));
}

#[test]
fn print_with_root_flag_anchors_paths_at_project() {
    let project = TempDir::new().unwrap();
    let elsewhere = TempDir::new().unwrap();

    let root = project.path().to_str().unwrap();
    let value = print_json(sfe_default(elsewhere.path()).args(["-C", root]));
    let output_path = PathBuf::from(value["output"]["path"].as_str().unwrap());
    assert_eq!(output_path, project.path().join("build"));
}

#[test]
fn print_reads_node_env() {
    let dir = TempDir::new().unwrap();
    let output = sfe(&dir)
        .args(["print", "--format", "json"])
        .env("NODE_ENV", "production")
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["mode"], "production");
    assert_eq!(value["devtool"], "source-map");
    assert_eq!(value["plugins"].as_array().unwrap().len(), 2);
}

#[test]
fn print_without_node_env_is_development() {
    let dir = TempDir::new().unwrap();
    sfe(&dir)
        .arg("print")
        .assert()
        .success()
        .stdout(predicate::str::contains("new webpack.HotModuleReplacementPlugin()"))
        .stdout(predicate::str::contains(r#""devtool": "inline-source-map""#));
}

#[test]
fn mode_flag_overrides_node_env() {
    let dir = TempDir::new().unwrap();
    sfe(&dir)
        .args(["print", "--mode", "production"])
        .env("NODE_ENV", "development")
        .assert()
        .success()
        .stdout(predicate::str::contains("HotModuleReplacementPlugin").not());
}

#[test]
fn strict_rejects_unknown_mode() {
    let dir = TempDir::new().unwrap();
    sfe(&dir)
        .args(["print", "--strict"])
        .env("NODE_ENV", "staging")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown build mode 'staging'"));
}

#[test]
fn write_then_refuse_overwrite() {
    let dir = TempDir::new().unwrap();
    sfe(&dir).arg("write").assert().success();
    assert!(fs::read_to_string(dir.path().join("webpack.config.js"))
        .unwrap()
        .starts_with("const webpack = require('webpack');"));

    sfe(&dir)
        .arg("write")
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));

    sfe(&dir).args(["write", "--force"]).assert().success();
}

#[test]
fn check_reports_missing_entry() {
    let dir = TempDir::new().unwrap();
    sfe(&dir)
        .arg("check")
        .assert()
        .failure()
        .stderr(predicate::str::contains("entry module not found"));
}
