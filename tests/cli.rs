//! CLI argument handling tests
//!
//! Every case here must fail before any resolver work starts, so no network
//! access happens during the test run.

use assert_cmd::Command;
use predicates::prelude::*;

fn subforge() -> Command {
    Command::cargo_bin("subforge").unwrap()
}

#[test]
fn test_no_args_prints_usage() {
    subforge()
        .assert()
        .code(2)
        .stdout(predicate::str::contains("usage: subforge"));
}

#[test]
fn test_verbose_without_domain_prints_usage() {
    subforge()
        .arg("--verbose")
        .assert()
        .code(2)
        .stdout(predicate::str::contains("usage: subforge"));
}

#[test]
fn test_two_positionals_print_usage() {
    subforge()
        .args(["example.com", "other.com"])
        .assert()
        .code(2)
        .stdout(predicate::str::contains("usage: subforge"));
}

#[test]
fn test_unknown_flag_prints_usage() {
    subforge()
        .args(["--fast", "example.com"])
        .assert()
        .code(2)
        .stdout(predicate::str::contains("usage: subforge"));
}

#[test]
fn test_oversized_domain_prints_usage() {
    let domain = format!("{}.com", "a".repeat(130));
    subforge()
        .arg(domain)
        .assert()
        .code(2)
        .stdout(predicate::str::contains("usage: subforge"));
}

#[test]
fn test_empty_domain_prints_usage() {
    subforge()
        .arg("  ")
        .assert()
        .code(2)
        .stdout(predicate::str::contains("usage: subforge"));
}

#[test]
fn test_max_length_requires_value() {
    subforge()
        .args(["example.com", "--max-length"])
        .assert()
        .code(2)
        .stdout(predicate::str::contains("usage: subforge"));
}

#[test]
fn test_max_length_rejects_zero() {
    subforge()
        .args(["--max-length", "0", "example.com"])
        .assert()
        .code(2)
        .stdout(predicate::str::contains("usage: subforge"));
}
