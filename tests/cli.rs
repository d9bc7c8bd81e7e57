use assert_cmd::prelude::*;
use predicates::prelude::*;

#[test]
fn test_cli_help() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = assert_cmd::cargo_bin_cmd!("clanboard");
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Usage"));
    Ok(())
}

#[test]
fn value_command_normalizes_suffixed_input() {
    let mut cmd = assert_cmd::cargo_bin_cmd!("clanboard");
    cmd.args(["value", "2.5m"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("2500000 (2.5m)"));
}

#[test]
fn value_command_caps_oversized_submissions() {
    let mut cmd = assert_cmd::cargo_bin_cmd!("clanboard");
    cmd.args(["value", "2b"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("200000000 (200m)"));
}

#[test]
fn value_command_rejects_malformed_input() {
    let mut cmd = assert_cmd::cargo_bin_cmd!("clanboard");
    cmd.args(["value", "1.2.3"]);
    cmd.assert()
        .stderr(predicate::str::contains("Invalid value format"));
}
