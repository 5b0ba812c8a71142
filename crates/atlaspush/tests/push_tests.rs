//! Integration tests for `atlaspush push`
//!
//! The uploader is replaced by a shell stub that prints one argument per
//! line, so a successful push shows up as the stub's stdout.

#![allow(deprecated)] // cargo_bin is deprecated in newer assert_cmd releases

use assert_cmd::assert::OutputAssertExt;
use assert_cmd::cargo::CommandCargoExt;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use atlaspush_testkit::{temp_dir_in_workspace, write_executable};

const ECHO_ARGS: &str = "#!/bin/sh\nfor arg in \"$@\"; do printf '%s\\n' \"$arg\"; done\n";

/// Helper: write atlaspush.toml
fn create_test_project(root: &Path, extra: &str) {
    fs::write(
        root.join("atlaspush.toml"),
        format!("app = \"hashicorp/example\"\n{}", extra),
    )
    .expect("Failed to write config");
}

/// Command with an isolated environment: no token, no installer, empty PATH
fn atlaspush(cwd: &Path, path_dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("atlaspush").unwrap();
    cmd.current_dir(cwd)
        .env_remove("ATLAS_TOKEN")
        .env_remove("ATLASPUSH_INSTALLER_EMBEDDED_DIR")
        .env_remove("RUST_LOG")
        .env("PATH", path_dir);
    cmd
}

fn stdout_lines(output: &std::process::Output) -> Vec<String> {
    String::from_utf8_lossy(&output.stdout)
        .lines()
        .map(str::to_string)
        .collect()
}

fn real_root(root: &Path) -> String {
    root.canonicalize().unwrap().display().to_string()
}

fn stub_uploader(dir: &Path) -> PathBuf {
    let path = dir.join("stub-upload");
    write_executable(&path, ECHO_ARGS);
    path
}

#[test]
#[cfg(unix)]
fn test_push_execs_uploader_with_flags() {
    let temp = temp_dir_in_workspace();
    let root = temp.path();
    let uploader = stub_uploader(root);
    create_test_project(
        root,
        &format!(
            "includes = [\"foo\", \"bar\"]\ntoken = \"atlas_token\"\nuploader_path = \"{}\"\n",
            uploader.display()
        ),
    );

    let output = atlaspush(root, root).arg("push").output().unwrap();

    assert!(output.status.success(), "{:?}", output);
    assert_eq!(
        stdout_lines(&output),
        vec![
            "-vcs".to_string(),
            "-include".to_string(),
            "foo".to_string(),
            "-include".to_string(),
            "bar".to_string(),
            "-token".to_string(),
            "atlas_token".to_string(),
            "hashicorp/example".to_string(),
            real_root(root),
        ]
    );
}

#[test]
#[cfg(unix)]
fn test_push_uses_token_from_environment() {
    let temp = temp_dir_in_workspace();
    let root = temp.path();
    let uploader = stub_uploader(root);
    create_test_project(root, "vcs = false\n");

    let output = atlaspush(root, root)
        .env("ATLAS_TOKEN", "env_token")
        .arg("push")
        .arg("--uploader-path")
        .arg(&uploader)
        .output()
        .unwrap();

    assert!(output.status.success(), "{:?}", output);
    assert_eq!(
        stdout_lines(&output),
        vec![
            "-token".to_string(),
            "env_token".to_string(),
            "hashicorp/example".to_string(),
            real_root(root),
        ]
    );
}

#[test]
#[cfg(unix)]
fn test_push_keeps_environment_for_uploader() {
    let temp = temp_dir_in_workspace();
    let root = temp.path();
    let uploader = root.join("env-upload");
    write_executable(
        &uploader,
        "#!/bin/sh\nprintf '%s\\n' \"$ATLASPUSH_TEST_MARKER\"\n",
    );
    create_test_project(root, "token = \"t\"\n");

    let output = atlaspush(root, root)
        .env("ATLASPUSH_TEST_MARKER", "inherited-value")
        .arg("push")
        .arg("--uploader-path")
        .arg(&uploader)
        .output()
        .unwrap();

    assert!(output.status.success(), "{:?}", output);
    assert_eq!(stdout_lines(&output), vec!["inherited-value".to_string()]);
}

#[test]
#[cfg(unix)]
fn test_push_propagates_uploader_exit_code() {
    let temp = temp_dir_in_workspace();
    let root = temp.path();
    let uploader = root.join("failing-upload");
    write_executable(&uploader, "#!/bin/sh\nexit 7\n");
    create_test_project(root, "token = \"t\"\n");

    atlaspush(root, root)
        .arg("push")
        .arg("--uploader-path")
        .arg(&uploader)
        .assert()
        .code(7);
}

#[test]
#[cfg(unix)]
fn test_push_finds_uploader_in_installer_dir() {
    let temp = temp_dir_in_workspace();
    let root = temp.path();
    let embedded = root.join("embedded");
    write_executable(&embedded.join("bin").join("atlas-upload"), ECHO_ARGS);
    create_test_project(root, "token = \"t\"\n");

    atlaspush(root, root)
        .env("ATLASPUSH_INSTALLER_EMBEDDED_DIR", &embedded)
        .arg("push")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("-vcs\n-token\nt\nhashicorp/example\n"));
}

#[test]
#[cfg(unix)]
fn test_push_finds_uploader_on_path() {
    let temp = temp_dir_in_workspace();
    let root = temp.path();
    let bin_dir = root.join("path-bin");
    write_executable(&bin_dir.join("atlas-upload"), ECHO_ARGS);
    create_test_project(root, "token = \"t\"\n");

    atlaspush(root, &bin_dir)
        .arg("push")
        .arg("--exclude")
        .arg("*.log")
        .assert()
        .success()
        .stdout(predicate::str::contains("-exclude\n*.log\n"));
}

#[test]
fn test_push_uploader_not_found() {
    let temp = temp_dir_in_workspace();
    let root = temp.path();
    let empty_path = root.join("empty-path");
    fs::create_dir_all(&empty_path).unwrap();
    create_test_project(root, "token = \"t\"\n");

    atlaspush(root, &empty_path)
        .arg("push")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("UPLOADER_NOT_FOUND"));
}

#[test]
#[cfg(unix)]
fn test_push_launch_failure_is_reported() {
    let temp = temp_dir_in_workspace();
    let root = temp.path();
    // Exists but is not executable
    let uploader = root.join("not-executable");
    fs::write(&uploader, "data").unwrap();
    create_test_project(root, "token = \"t\"\n");

    atlaspush(root, root)
        .arg("push")
        .arg("--uploader-path")
        .arg(&uploader)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Error:"))
        .stderr(predicate::str::contains("UPLOADER_NOT_FOUND").not());
}

#[test]
fn test_push_requires_token() {
    let temp = temp_dir_in_workspace();
    let root = temp.path();
    create_test_project(root, "");

    atlaspush(root, root)
        .arg("push")
        .arg("--uploader-path")
        .arg("/bin/true")
        .assert()
        .failure()
        .stderr(predicate::str::contains("CONFIG_INVALID"))
        .stderr(predicate::str::contains("ATLAS_TOKEN"));
}

#[test]
fn test_push_requires_app() {
    let temp = temp_dir_in_workspace();
    let root = temp.path();

    atlaspush(root, root)
        .arg("push")
        .arg("--token")
        .arg("t")
        .assert()
        .failure()
        .stderr(predicate::str::contains("app is required"));
}

#[test]
fn test_dry_run_prints_redacted_argv() {
    let temp = temp_dir_in_workspace();
    let root = temp.path();
    create_test_project(root, "token = \"secret\"\naddress = \"https://atlas.example\"\n");

    let output = atlaspush(root, root)
        .arg("push")
        .arg("--dry-run")
        .arg("--uploader-path")
        .arg("foo")
        .output()
        .unwrap();

    assert!(output.status.success(), "{:?}", output);
    assert_eq!(
        stdout_lines(&output),
        vec![
            "foo".to_string(),
            "-vcs".to_string(),
            "-address".to_string(),
            "https://atlas.example".to_string(),
            "-token".to_string(),
            "<redacted>".to_string(),
            "hashicorp/example".to_string(),
            real_root(root),
        ]
    );
}

#[test]
fn test_dry_run_json() {
    let temp = temp_dir_in_workspace();
    let root = temp.path();
    create_test_project(root, "token = \"t\"\n");

    let output = atlaspush(root, root)
        .args(["push", "--dry-run", "--json", "--no-vcs", "--uploader-path", "foo"])
        .output()
        .unwrap();

    assert!(output.status.success(), "{:?}", output);
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["program"], "foo");
    assert_eq!(value["source"], "configured uploader_path");
    assert_eq!(value["argv"][1], "-token");
    assert_eq!(value["argv"][3], "hashicorp/example");
}

#[test]
fn test_push_finds_project_root_from_subdir() {
    let temp = temp_dir_in_workspace();
    let root = temp.path();
    create_test_project(root, "token = \"t\"\n");
    let subdir = root.join("app").join("lib");
    fs::create_dir_all(&subdir).unwrap();

    let output = atlaspush(&subdir, root)
        .args(["push", "--dry-run", "--uploader-path", "foo"])
        .output()
        .unwrap();

    assert!(output.status.success(), "{:?}", output);
    assert_eq!(stdout_lines(&output).last(), Some(&real_root(root)));
}
