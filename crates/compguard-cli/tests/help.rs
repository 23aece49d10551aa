use assert_cmd::Command;

/// Helper to get a Command for the compguard binary.
#[allow(deprecated)]
fn compguard_cmd() -> Command {
    Command::cargo_bin("compguard").unwrap()
}

#[test]
fn help_works() {
    compguard_cmd().arg("--help").assert().success();
}

#[test]
fn version_works() {
    compguard_cmd().arg("--version").assert().success();
}

#[test]
fn unknown_flag_is_a_usage_error() {
    compguard_cmd().arg("--bogus").assert().code(64);
}

#[test]
fn unknown_report_format_is_a_usage_error() {
    compguard_cmd()
        .args(["check", "--report", "yaml"])
        .assert()
        .code(64);
}

#[test]
fn missing_subcommand_is_a_usage_error() {
    compguard_cmd().assert().code(64);
}
