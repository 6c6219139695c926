//! CLI smoke tests.

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn help_describes_the_binary() {
    Command::cargo_bin("emitab")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "A terminal-based emissions data table",
        ))
        .stdout(predicate::str::contains("--log"))
        .stdout(predicate::str::contains("--light"));
}

#[test]
fn unknown_flags_are_rejected() {
    Command::cargo_bin("emitab")
        .unwrap()
        .arg("--no-such-flag")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unexpected argument"));
}
