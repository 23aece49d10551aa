//! End-to-end CLI tests using the fixture host roots in `tests/fixtures/`.
//!
//! Each fixture is a synthetic `/etc` tree. Command probes are pinned by
//! pointing `PATH` at a stub bin directory: `systemctl` reports every unit
//! active, `lsblk` reports one crypt device, `clamscan` exists. No package
//! manager is stubbed, so the OS updates check always lands on WARN —
//! which doubles as coverage for "WARN never changes the exit code".

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Helper to get a Command for the compguard binary.
#[allow(deprecated)]
fn compguard_cmd() -> Command {
    Command::cargo_bin("compguard").expect("compguard binary not found - run `cargo build` first")
}

/// Get the path to the repo-level test fixtures directory.
fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .expect("compguard-cli crate should have a parent directory")
        .parent()
        .expect("crates directory should have a parent (repo root)")
        .join("tests")
        .join("fixtures")
}

fn write_stub(dir: &Path, name: &str, body: &str) {
    let path = dir.join(name);
    std::fs::write(&path, body).expect("write stub");
    let mut perms = std::fs::metadata(&path).expect("stat stub").permissions();
    perms.set_mode(0o755);
    std::fs::set_permissions(&path, perms).expect("chmod stub");
}

/// Stub inspection tools so service, encryption, and scanner probes are
/// deterministic regardless of the build machine.
fn stub_bin(temp: &TempDir) -> PathBuf {
    let bin = temp.path().join("bin");
    std::fs::create_dir_all(&bin).expect("create stub bin");
    write_stub(&bin, "systemctl", "#!/bin/sh\necho active\nexit 0\n");
    write_stub(&bin, "lsblk", "#!/bin/sh\necho crypt\necho disk\nexit 0\n");
    write_stub(&bin, "clamscan", "#!/bin/sh\nexit 0\n");
    bin
}

struct CheckRun {
    exit_code: i32,
    report: Value,
    csv: String,
    log: String,
}

fn run_check(fixture_name: &str) -> CheckRun {
    let temp = TempDir::new().expect("create temp dir");
    let bin = stub_bin(&temp);
    let fixture = fixtures_dir().join(fixture_name);
    let json_path = temp.path().join("report.json");
    let csv_path = temp.path().join("results.csv");
    let log_path = temp.path().join("compguard.log");

    let output = compguard_cmd()
        .env("PATH", &bin)
        .arg("--host-root")
        .arg(&fixture)
        .arg("check")
        .args(["--report", "json", "--report", "csv"])
        .arg("--json-out")
        .arg(&json_path)
        .arg("--csv-out")
        .arg(&csv_path)
        .arg("--log-file")
        .arg(&log_path)
        .output()
        .expect("run compguard");

    let report_text = std::fs::read_to_string(&json_path).expect("read json report");
    CheckRun {
        exit_code: output.status.code().unwrap_or(-1),
        report: serde_json::from_str(&report_text).expect("parse json report"),
        csv: std::fs::read_to_string(&csv_path).expect("read csv export"),
        log: std::fs::read_to_string(&log_path).expect("read audit log"),
    }
}

#[test]
fn compliant_fixture_exits_zero_despite_warns() {
    let run = run_check("compliant");
    assert_eq!(run.exit_code, 0, "report: {}", run.report);

    assert_eq!(run.report["schema"], "compguard.report.v1");
    assert_eq!(run.report["status"], "clean");
    assert_eq!(run.report["host"]["hostname"], "fixture-host");
    assert_eq!(run.report["score"]["failed"], 0);
    // No package manager on the stub PATH: os_updates is a WARN, and a WARN
    // must never push the exit code away from 0.
    assert!(run.report["score"]["warned"].as_u64().unwrap() >= 1);
}

#[test]
fn degraded_fixture_exits_one() {
    let run = run_check("degraded");
    assert_eq!(run.exit_code, 1, "report: {}", run.report);

    assert_eq!(run.report["status"], "degraded");
    assert_eq!(run.report["score"]["critical_failures"], 0);
    assert!(run.report["score"]["failed"].as_u64().unwrap() >= 1);
}

#[test]
fn critical_fixture_exits_two_despite_high_score() {
    let run = run_check("critical");
    assert_eq!(run.exit_code, 2, "report: {}", run.report);

    assert_eq!(run.report["status"], "critical");
    assert!(run.report["score"]["critical_failures"].as_u64().unwrap() >= 1);
    // 8/10 sub-results pass: the nominal score clears 75%, the critical
    // failure still decides the exit code.
    assert!(run.report["score"]["score_percent"].as_u64().unwrap() >= 75);

    let critical = run.report["results"]
        .as_array()
        .unwrap()
        .iter()
        .find(|r| r["outcome"] == "fail" && r["critical"] == true)
        .expect("a critical failure result");
    assert_eq!(critical["check_id"], "host.remote_access");
}

#[test]
fn csv_export_honors_the_contract() {
    let run = run_check("compliant");
    let lines: Vec<&str> = run.csv.lines().collect();

    assert_eq!(lines[0], "Check,Result,Details");
    let total = run.report["score"]["total"].as_u64().unwrap() as usize;
    assert_eq!(lines.len(), total + 1);

    // Execution order is preserved: password policy sub-results come first.
    assert!(lines[1].starts_with("Password max age,"));

    // WARN rows are exported, not filtered.
    assert!(lines.iter().any(|l| l.contains(",WARN,")));
}

#[test]
fn audit_log_records_lifecycle_and_outcomes() {
    let run = run_check("degraded");

    assert!(run.log.contains("compliance run started"));
    assert!(run.log.contains("compliance run finished"));
    assert!(run.log.contains("artifact written:"));
    assert!(run.log.contains("check host.firewall: PASS"));
    assert!(run.log.contains("[ERROR] check host.password_policy: FAIL"));

    // Every line carries the `YYYY-MM-DD HH:MM:SS` stamp.
    for line in run.log.lines() {
        assert!(line.len() > 20, "short log line: {line}");
        assert_eq!(line.as_bytes()[4], b'-');
        assert_eq!(line.as_bytes()[10], b' ');
        assert_eq!(line.as_bytes()[13], b':');
    }
}

#[test]
fn default_artifacts_are_timestamped_into_out_dir() {
    let temp = TempDir::new().expect("create temp dir");
    let bin = stub_bin(&temp);
    let out_dir = temp.path().join("reports");

    compguard_cmd()
        .env("PATH", &bin)
        .arg("--host-root")
        .arg(fixtures_dir().join("compliant"))
        .arg("check")
        .arg("--out-dir")
        .arg(&out_dir)
        .arg("--log-file")
        .arg(temp.path().join("compguard.log"))
        .assert()
        .success();

    let names: Vec<String> = std::fs::read_dir(&out_dir)
        .expect("read out dir")
        .map(|e| e.expect("dir entry").file_name().to_string_lossy().into_owned())
        .collect();

    assert_eq!(names.len(), 2, "default formats are text + csv: {names:?}");
    assert!(names.iter().any(|n| n.starts_with("compguard-") && n.ends_with(".txt")));
    assert!(names.iter().any(|n| n.starts_with("compguard-") && n.ends_with(".csv")));
}

#[test]
fn unknown_profile_is_a_configuration_error() {
    let temp = TempDir::new().expect("create temp dir");

    compguard_cmd()
        .env("PATH", stub_bin(&temp))
        .arg("--host-root")
        .arg(fixtures_dir().join("compliant"))
        .arg("--profile")
        .arg("paranoid")
        .arg("check")
        .arg("--log-file")
        .arg(temp.path().join("compguard.log"))
        .assert()
        .code(64)
        .stderr(predicate::str::contains("configuration error"));
}

#[test]
fn all_checks_disabled_is_a_fatal_runtime_error() {
    let temp = TempDir::new().expect("create temp dir");
    let config = temp.path().join("compguard.toml");
    let disabled: String = [
        "host.password_policy",
        "host.remote_access",
        "host.firewall",
        "host.audit_daemon",
        "host.disk_encryption",
        "host.antivirus",
        "host.os_updates",
        "host.nfs_exports",
    ]
    .iter()
    .map(|id| format!("[checks.\"{id}\"]\nenabled = false\n"))
    .collect();
    std::fs::write(&config, disabled).expect("write config");

    compguard_cmd()
        .env("PATH", stub_bin(&temp))
        .arg("--host-root")
        .arg(fixtures_dir().join("compliant"))
        .arg("--config")
        .arg(&config)
        .arg("check")
        .arg("--log-file")
        .arg(temp.path().join("compguard.log"))
        .assert()
        .code(70)
        .stderr(predicate::str::contains("no check results"));
}

#[test]
fn progress_lines_are_printed_as_checks_complete() {
    let temp = TempDir::new().expect("create temp dir");

    compguard_cmd()
        .env("PATH", stub_bin(&temp))
        .arg("--host-root")
        .arg(fixtures_dir().join("compliant"))
        .arg("check")
        .arg("--out-dir")
        .arg(temp.path().join("reports"))
        .arg("--log-file")
        .arg(temp.path().join("compguard.log"))
        .assert()
        .success()
        .stdout(predicate::str::contains("[PASS] Firewall"))
        .stdout(predicate::str::contains("[WARN] OS updates"));
}
