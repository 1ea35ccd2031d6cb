// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Spruce CLI entry point.

use clap::{CommandFactory, Parser};
use tracing_subscriber::{EnvFilter, fmt};

use spruce::cli::Cli;
use spruce::runner;

fn init_logging() {
    let filter = EnvFilter::try_from_env("SPRUCE_LOG").unwrap_or_else(|_| EnvFilter::new("off"));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    init_logging();

    let exit_code = match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("spruce: {}", e);
            1
        }
    };

    std::process::exit(exit_code);
}

fn run() -> anyhow::Result<i32> {
    let cli = Cli::parse();

    if cli.command.is_none() && cli.paths.is_empty() {
        // Show help for bare invocation
        Cli::command().print_help()?;
        println!();
        return Ok(0);
    }

    Ok(runner::run(cli.input_paths(), cli.mode()))
}
