// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! External tool execution.
//!
//! Runs the resolved tool synchronously with the child inheriting the
//! parent's stdout and stderr, so tool output streams through unbuffered.
//! A spawn error is a different animal from a non-zero exit: the former is
//! an operational failure, the latter is the tool's verdict on the files.

use std::path::PathBuf;
use std::process::Command;

use crate::registry::ToolCandidate;

/// Outcome of one tool invocation.
#[derive(Debug)]
pub enum Outcome {
    /// The child ran to completion with this exit code.
    Exited(i32),
    /// The child could not be started despite passing the availability
    /// probe (probe/launch race or a non-executable hit).
    LaunchFailed(std::io::Error),
}

/// Run `candidate` against `files`, blocking until the child exits.
///
/// There is no timeout: a hung tool hangs the run, matching the strictly
/// sequential execution model.
pub fn run(candidate: &ToolCandidate, files: &[PathBuf]) -> Outcome {
    let status = Command::new(candidate.bin)
        .args(candidate.argv(files))
        .status();

    match status {
        // Killed by signal leaves no code; report as failure.
        Ok(status) => Outcome::Exited(status.code().unwrap_or(1)),
        Err(err) => Outcome::LaunchFailed(err),
    }
}

#[cfg(test)]
#[path = "exec_tests.rs"]
mod tests;
