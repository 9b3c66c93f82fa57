//! Basic CLI surface tests: help, version and completions.

mod common;

use common::TestEnv;
use predicates::prelude::*;

#[test]
fn test_help_lists_commands() {
    let env = TestEnv::new();

    let assert = env.command_bare().arg("--help").assert().success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    for command in ["init", "book", "list", "show", "edit", "cancel", "seed", "completions"] {
        assert!(stdout.contains(command), "help is missing {command}");
    }
}

#[test]
fn test_version() {
    let env = TestEnv::new();

    env.command_bare()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("skybook"));
}

#[test]
fn test_no_subcommand_fails() {
    let env = TestEnv::new();

    env.command_bare().assert().failure();
}

#[test]
fn test_completions_bash() {
    let env = TestEnv::new();

    env.command_bare()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("_skybook"));
}

#[test]
fn test_completions_unknown_shell() {
    let env = TestEnv::new();

    env.command_bare()
        .args(["completions", "tcsh"])
        .assert()
        .failure();
}
