// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI argument parsing with clap derive.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::registry::Mode;

/// Smart lint/format dispatcher that picks the best available tool per file type
#[derive(Parser)]
#[command(name = "spruce")]
#[command(version, about, long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
pub struct Cli {
    /// Files or directories to lint and format
    #[arg(value_name = "PATH")]
    pub paths: Vec<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Lint files only (no formatting)
    Lint(RunArgs),
    /// Format files only (no linting)
    Format(RunArgs),
}

#[derive(clap::Args)]
pub struct RunArgs {
    /// Files or directories to process
    #[arg(value_name = "PATH", required = true)]
    pub paths: Vec<PathBuf>,
}

impl Cli {
    /// Mode selected by the subcommand; bare paths mean lint then format.
    pub fn mode(&self) -> Mode {
        match &self.command {
            Some(Command::Lint(_)) => Mode::Lint,
            Some(Command::Format(_)) => Mode::Format,
            None => Mode::Both,
        }
    }

    pub fn input_paths(&self) -> &[PathBuf] {
        match &self.command {
            Some(Command::Lint(args)) | Some(Command::Format(args)) => &args.paths,
            None => &self.paths,
        }
    }
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
