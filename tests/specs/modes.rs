//! Tool selection and mode composition specs.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![cfg(unix)]

use crate::prelude::*;

/// Only ruff available, lint mode picks the chain head.
#[test]
fn lint_python_with_ruff_available() {
    let sandbox = Sandbox::new();
    sandbox.fake_tool("ruff", "exit 0");
    sandbox.file("main.py", "print('ok')\n");

    sandbox
        .cmd()
        .args(["lint", "main.py"])
        .assert()
        .success()
        .stdout(predicates::str::contains("Running: ruff check main.py"));
}

/// Every preferred tool absent, the chain falls through to
/// the bare python syntax check.
#[test]
fn lint_python_falls_back_to_py_compile() {
    let sandbox = Sandbox::new();
    sandbox.fake_tool("python", "exit 0");
    sandbox.file("main.py", "print('ok')\n");

    sandbox
        .cmd()
        .args(["lint", "main.py"])
        .assert()
        .success()
        .stdout(predicates::str::contains(
            "Running: python -m py_compile main.py",
        ));
}

/// A mid-chain tool wins when everything before it is absent.
#[test]
fn lint_python_picks_first_available_not_a_later_one() {
    let sandbox = Sandbox::new();
    sandbox.fake_tool("black", "exit 0");
    sandbox.fake_tool("python", "exit 0");
    sandbox.file("main.py", "print('ok')\n");

    sandbox
        .cmd()
        .args(["lint", "main.py"])
        .assert()
        .success()
        .stdout(predicates::str::contains(
            "Running: black --check --diff main.py",
        ))
        .stdout(predicates::str::contains("py_compile").not());
}

/// One invocation per group, all files in a single command.
#[test]
fn format_go_passes_whole_group_to_one_invocation() {
    let sandbox = Sandbox::new();
    sandbox.fake_tool("gofmt", "exit 0");
    sandbox.file("x.go", "package main\n");
    sandbox.file("y.go", "package main\n");

    sandbox
        .cmd()
        .args(["format", "x.go", "y.go"])
        .assert()
        .success()
        .stdout(predicates::str::contains("Running: gofmt -w x.go y.go"))
        .stdout(predicates::str::contains("Running:").count(1));
}

/// Default mode is Both: lint chain first, then format chain.
#[test]
fn default_mode_lints_then_formats() {
    let sandbox = Sandbox::new();
    sandbox.fake_tool("ruff", "exit 0");
    sandbox.file("main.py", "print('ok')\n");

    let assert = sandbox.cmd().arg("main.py").assert().success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let check = stdout.find("Running: ruff check main.py");
    let format = stdout.find("Running: ruff format main.py");
    assert!(check.is_some(), "missing lint invocation in: {stdout}");
    assert!(format.is_some(), "missing format invocation in: {stdout}");
    assert!(check < format, "lint must run before format");
}

/// Format-on-clean-files is repeatable: a second run reports the same
/// success as the first.
#[test]
fn format_rerun_is_idempotent() {
    let sandbox = Sandbox::new();
    sandbox.fake_tool("gofmt", "exit 0");
    sandbox.file("x.go", "package main\n");

    for _ in 0..2 {
        sandbox
            .cmd()
            .args(["format", "x.go"])
            .assert()
            .success()
            .stdout(predicates::str::contains("Running: gofmt -w x.go").count(1));
    }
}
