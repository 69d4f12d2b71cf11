//! CLI end-to-end tests that invoke the compiled `xdep` binary.

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use xdep_test_utils::{TestArtifacts, descriptor};

fn xdep() -> Command {
    let mut cmd = Command::cargo_bin("xdep").unwrap();
    cmd.env_remove("XDEP_CONFIG").env("NO_COLOR", "1");
    cmd
}

#[test]
fn test_help_exits_zero() {
    xdep()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("inspect"))
        .stdout(predicate::str::contains("resolve"));
}

#[test]
fn test_inspect_jar_extension() {
    let fs = TestArtifacts::new();
    let content = descriptor(Some("g:a-deployment:1.0"), Some("g:b:1.0"), Some("g:d"));
    let jar = fs.jar("a-1.0.jar", Some(&content));

    xdep()
        .args(["inspect", jar.to_str().unwrap(), "--coords", "g:a:1.0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("g:a:1.0"))
        .stdout(predicate::str::contains("deployment:  g:a-deployment:1.0"))
        .stdout(predicate::str::contains("condition:   g:d"));
}

#[test]
fn test_inspect_plain_directory_json_is_null() {
    let fs = TestArtifacts::new();
    let dir = fs.directory("classes", None);

    xdep()
        .args(["inspect", dir.to_str().unwrap(), "--json"])
        .assert()
        .success()
        .stdout(predicate::str::diff("null\n"));
}

#[test]
fn test_inspect_malformed_descriptor_fails() {
    let fs = TestArtifacts::new();
    let content = descriptor(Some("not-a-coordinate"), None, None);
    let jar = fs.jar("a-1.0.jar", Some(&content));

    xdep()
        .args(["inspect", jar.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("deployment-artifact"));
}

#[test]
fn test_resolve_json_report() {
    let fs = TestArtifacts::new();
    let ext = descriptor(
        Some("g:a-deployment:1.0"),
        Some("g:b:1.0 g:c:1.0"),
        Some("g:d"),
    );
    fs.jar("libs/a-1.0.jar", Some(&ext));
    fs.jar("libs/d-2.0.jar", None);
    fs.jar("libs/c-0.9.jar", None);
    let list = fs.file(
        "runtime.toml",
        br#"
[[artifacts]]
coords = "g:a:1.0"
path = "libs/a-1.0.jar"

[[artifacts]]
coords = "g:d:2.0"
path = "libs/d-2.0.jar"

[[artifacts]]
coords = "g:c:0.9"
path = "libs/c-0.9.jar"
"#,
    );

    let output = xdep()
        .args(["resolve", "--artifacts", list.to_str().unwrap(), "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["extensions"].as_array().unwrap().len(), 1);
    assert_eq!(report["extensions"][0]["deployment"], "g:a-deployment:1.0");
    let activated = &report["activation"]["activated"][0];
    assert_eq!(activated["extension"], "g:a:1.0");
    assert_eq!(activated["dependencies"].as_array().unwrap().len(), 1);
    assert_eq!(activated["dependencies"][0]["artifact"], "b");
}

#[test]
fn test_resolve_reports_failures_with_nonzero_exit() {
    let fs = TestArtifacts::new();
    fs.file("libs/broken-1.0.jar", b"not a zip");
    let list = fs.file(
        "runtime.json",
        br#"{"artifacts": [{"coords": "g:broken:1.0", "path": "libs/broken-1.0.jar"}]}"#,
    );

    xdep()
        .args(["resolve", "-a", list.to_str().unwrap()])
        .assert()
        .failure()
        .stdout(predicate::str::contains("failed g:broken:1.0"))
        .stderr(predicate::str::contains("1 artifact(s) failed to resolve"));
}

#[test]
fn test_config_file_changes_descriptor_path() {
    let fs = TestArtifacts::new();
    let jar = fs.archive(
        "a-1.0.jar",
        &[("ext.properties", b"deployment-artifact=g:a-deployment:1.0\n".as_slice())],
    );
    let config = fs.root().join("xdep.toml");
    fs::write(&config, "descriptor_path = \"ext.properties\"\n").unwrap();

    xdep()
        .args(["inspect", jar.to_str().unwrap(), "--config", config.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("g:a-deployment:1.0"));
}
