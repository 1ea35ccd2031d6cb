//! Aggregate exit-code policy specs.
//!
//! The policy is deliberately "last non-zero wins": the exit code of the
//! most recently executed failing invocation is the process exit code,
//! zero never overwrites an earlier failure, and a launch failure forces
//! exit 1. These specs pin the observed behavior in both group orders so
//! it cannot silently drift to first-failure-wins or max-wins.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![cfg(unix)]

use crate::prelude::*;

fn two_failing_groups() -> Sandbox {
    let sandbox = Sandbox::new();
    sandbox.fake_tool("ruff", "exit 2");
    sandbox.fake_tool("rustfmt", "exit 3");
    sandbox.file("main.py", "print('ok')\n");
    sandbox.file("main.rs", "fn main() {}\n");
    sandbox
}

#[test]
fn last_non_zero_wins_py_then_rs() {
    two_failing_groups()
        .cmd()
        .args(["lint", "main.py", "main.rs"])
        .assert()
        .code(3);
}

#[test]
fn last_non_zero_wins_rs_then_py() {
    two_failing_groups()
        .cmd()
        .args(["lint", "main.rs", "main.py"])
        .assert()
        .code(2);
}

#[test]
fn zero_never_overwrites_an_earlier_failure() {
    let sandbox = Sandbox::new();
    sandbox.fake_tool("ruff", "exit 2");
    sandbox.fake_tool("rustfmt", "exit 0");
    sandbox.file("main.py", "print('ok')\n");
    sandbox.file("main.rs", "fn main() {}\n");

    sandbox
        .cmd()
        .args(["lint", "main.py", "main.rs"])
        .assert()
        .code(2);
}

#[test]
fn all_groups_run_even_after_a_failure() {
    two_failing_groups()
        .cmd()
        .args(["lint", "main.py", "main.rs"])
        .assert()
        .code(3)
        .stdout(predicates::str::contains("Running: ruff check main.py"))
        .stdout(predicates::str::contains("Running: rustfmt --check main.rs"));
}

#[test]
fn full_success_exits_zero() {
    let sandbox = Sandbox::new();
    sandbox.fake_tool("gofmt", "exit 0");
    sandbox.file("x.go", "package main\n");

    sandbox.cmd().args(["format", "x.go"]).assert().code(0);
}

/// A tool that passes the probe but cannot be launched is an operational
/// error: stderr line plus forced exit 1.
#[test]
fn launch_failure_forces_exit_one() {
    let sandbox = Sandbox::new();
    sandbox.broken_tool("ruff");
    sandbox.file("main.py", "print('ok')\n");

    sandbox
        .cmd()
        .args(["lint", "main.py"])
        .assert()
        .code(1)
        .stderr(predicates::str::contains("Error executing ruff:"));
}

/// Tool stdout streams through to the parent's stdout.
#[test]
fn tool_output_passes_through() {
    let sandbox = Sandbox::new();
    sandbox.fake_tool("ruff", "echo 'main.py:1:1: E999 oops'\nexit 1");
    sandbox.file("main.py", "print(\n");

    sandbox
        .cmd()
        .args(["lint", "main.py"])
        .assert()
        .code(1)
        .stdout(predicates::str::contains("main.py:1:1: E999 oops"));
}
