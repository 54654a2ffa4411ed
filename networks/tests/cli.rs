//! End-to-end tests for the `polar-networks` binary.

use std::fs;

use assert_cmd::Command;
use polar_networks::config::DEFAULT_CONFIG;
use predicates::prelude::*;

fn polar() -> Command {
    let mut cmd = Command::cargo_bin("polar-networks").unwrap();
    cmd.env_remove("CONFIG").env_remove("RUST_LOG");
    cmd
}

#[test]
fn check_accepts_bundled_config() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("polar.toml"), DEFAULT_CONFIG).unwrap();

    polar()
        .current_dir(dir.path())
        .arg("check")
        .assert()
        .success()
        .stdout(predicate::str::contains("3 network(s) valid, default 'development'"));
}

#[test]
fn failures_exit_with_status_one() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("polar.toml"), DEFAULT_CONFIG).unwrap();

    polar()
        .current_dir(dir.path())
        .args(["show", "mainnet"])
        .assert()
        .code(1)
        .stderr(predicate::str::starts_with("Error: "))
        .stderr(predicate::str::contains("unknown network 'mainnet'"));

    polar()
        .current_dir(dir.path())
        .args(["--config", "absent.toml", "check"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("absent.toml"));
}

#[test]
fn dotenv_config_path_is_honoured() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("staging.toml"), DEFAULT_CONFIG).unwrap();
    fs::write(dir.path().join(".env"), "CONFIG=staging.toml\n").unwrap();

    polar()
        .current_dir(dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("* development"));
}

#[test]
fn account_prints_mnemonic_only_when_revealed() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("polar.toml"), DEFAULT_CONFIG).unwrap();

    polar()
        .current_dir(dir.path())
        .args(["account", "default", "b"])
        .assert()
        .success()
        .stdout(predicate::str::contains("secret1y98fdsl6vv3qdrwqfc74p45su5y8m4vqqgdfkw"))
        .stdout(predicate::str::contains("mnemonic").not());

    polar()
        .current_dir(dir.path())
        .args(["account", "default", "b", "--reveal"])
        .assert()
        .success()
        .stdout(predicate::str::contains("mnemonic: yellow inflict"));
}
