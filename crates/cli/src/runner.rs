// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Sequential run engine: chain resolution, phase control, and result
//! aggregation.
//!
//! Every file group and every requested phase is attempted before the
//! process exits, so one failing group never hides another's output.

use std::path::PathBuf;

use crate::classify::{self, FileGroup};
use crate::config;
use crate::exec::{self, Outcome};
use crate::probe;
use crate::registry::{self, Mode, ToolCandidate};
use crate::walker;

/// An availability predicate over executable names. Production code passes
/// [`probe::is_available`]; tests inject forced answers.
pub type Probe<'a> = &'a dyn Fn(&str) -> bool;

/// First candidate in `chain` whose probe succeeds.
///
/// Policy, intentionally: fail fast on launch, no fallback on non-zero
/// exit. Only *absence* gates selection: once a candidate is chosen, a
/// later failure of any kind never falls through to the next candidate.
pub fn resolve<'a>(chain: &'a [ToolCandidate], probe: Probe) -> Option<&'a ToolCandidate> {
    chain.iter().find(|candidate| probe(candidate.bin))
}

/// Run `mode` over `paths` and return the aggregate process exit code.
pub fn run(paths: &[PathBuf], mode: Mode) -> i32 {
    run_with_probe(paths, mode, &probe::is_available)
}

/// Exit-code fold, preserved exactly as the original behaves: the most
/// recently executed non-zero invocation wins, zero never overwrites an
/// earlier failure, and a launch failure forces 1.
fn apply_outcome(exit_code: &mut i32, bin: &str, outcome: Outcome) {
    match outcome {
        Outcome::Exited(0) => {}
        Outcome::Exited(code) => *exit_code = code,
        Outcome::LaunchFailed(err) => {
            eprintln!("Error executing {bin}: {err}");
            *exit_code = 1;
        }
    }
}

/// Run all phases of `mode` against one file group.
fn run_group(group: &FileGroup, mode: Mode, probe: Probe, exit_code: &mut i32) {
    for phase in mode.phases() {
        // Absent chain: unsupported for this phase, which in Both mode is
        // ordinary (e.g. lint-only extensions) and stays silent.
        let Some(chain) = registry::chain_for(&group.extension, *phase) else {
            continue;
        };

        let Some(candidate) = resolve(chain, probe) else {
            println!(
                "Warning: No available {} found for {} files",
                phase.noun(),
                group.extension
            );
            continue;
        };

        let argv = candidate.argv(&group.files);
        println!("Running: {} {}", candidate.bin, argv.join(" "));

        let outcome = exec::run(candidate, &group.files);
        tracing::debug!(tool = candidate.bin, ?outcome, "invocation finished");
        apply_outcome(exit_code, candidate.bin, outcome);
    }
}

/// Expand directory inputs to their supported files; everything else
/// passes through untouched (missing paths are the classifier's concern).
fn expand_inputs(paths: &[PathBuf], mode: Mode) -> Vec<PathBuf> {
    // Config only matters for directory expansion; file-only runs never
    // touch it.
    let mut ignores: Option<Vec<String>> = None;

    let mut expanded = Vec::new();
    for path in paths {
        if !path.is_dir() {
            expanded.push(path.clone());
            continue;
        }

        let ignores = ignores.get_or_insert_with(config::ignore_patterns);
        match walker::discover(path, mode, ignores) {
            Ok(files) if files.is_empty() => {
                println!(
                    "Warning: No supported files found in directory {}",
                    path.display()
                );
            }
            Ok(files) => {
                tracing::debug!(
                    dir = %path.display(),
                    count = files.len(),
                    "discovered supported files"
                );
                expanded.extend(files);
            }
            Err(err) => {
                println!("Warning: {err}");
            }
        }
    }
    expanded
}

/// Full pipeline with an injected availability probe.
pub fn run_with_probe(paths: &[PathBuf], mode: Mode, probe: Probe) -> i32 {
    let inputs = expand_inputs(paths, mode);
    let classified = classify::classify(&inputs, mode);

    for warning in &classified.warnings {
        println!("Warning: {warning}");
    }

    if classified.groups.is_empty() {
        // Normal terminal case, not a failure.
        println!("No supported files provided, no files were linted");
        return 0;
    }

    let mut exit_code = 0;
    for group in &classified.groups {
        run_group(group, mode, probe, &mut exit_code);
    }
    exit_code
}

#[cfg(test)]
#[path = "runner_tests.rs"]
mod tests;
