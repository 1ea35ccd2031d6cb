// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Tool chain registry.
//!
//! Maps `(extension, phase)` to an ordered chain of tool candidates.
//! Order encodes priority: the first candidate present on the host wins,
//! and there is no scoring or retry. The tables are the single source of
//! truth for command templates; adding a language means adding one entry
//! here, not changing control flow anywhere else.

use std::path::PathBuf;

/// Which class of chain to resolve: lint or format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Lint,
    Format,
}

impl Phase {
    /// Human name used in "No available ... found" warnings.
    pub fn noun(self) -> &'static str {
        match self {
            Phase::Lint => "linter",
            Phase::Format => "formatter",
        }
    }
}

/// What to run against each file group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Lint,
    Format,
    /// Lint then format, sequentially per group. The default.
    Both,
}

impl Mode {
    /// The phases this mode executes, in order.
    pub fn phases(self) -> &'static [Phase] {
        match self {
            Mode::Lint => &[Phase::Lint],
            Mode::Format => &[Phase::Format],
            Mode::Both => &[Phase::Lint, Phase::Format],
        }
    }
}

/// A single external tool plus its fixed argument prefix.
///
/// Candidates are plain data rather than closures so the tables below are
/// const-constructible and testable without a live host environment.
/// Availability is checked separately via [`crate::probe::is_available`]
/// against `bin`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToolCandidate {
    /// Executable name looked up on the search path.
    pub bin: &'static str,
    /// Fixed flags inserted before the file arguments.
    pub args: &'static [&'static str],
}

impl ToolCandidate {
    pub const fn new(bin: &'static str, args: &'static [&'static str]) -> Self {
        Self { bin, args }
    }

    /// Full argument vector for one invocation: fixed flags, then the
    /// group's files in first-seen order.
    pub fn argv(&self, files: &[PathBuf]) -> Vec<String> {
        self.args
            .iter()
            .map(|a| (*a).to_string())
            .chain(files.iter().map(|f| f.display().to_string()))
            .collect()
    }
}

const fn tool(bin: &'static str, args: &'static [&'static str]) -> ToolCandidate {
    ToolCandidate::new(bin, args)
}

/// Lint chains, highest priority first.
static LINT_CHAINS: &[(&str, &[ToolCandidate])] = &[
    (
        ".py",
        &[
            tool("ruff", &["check"]),
            tool("uvx", &["ruff", "check"]),
            tool("black", &["--check", "--diff"]),
            tool("flake8", &[]),
            tool("pylint", &[]),
            // Bare syntax check as the final fallback.
            tool("python", &["-m", "py_compile"]),
        ],
    ),
    (
        ".js",
        &[
            tool("eslint", &[]),
            tool("prettier", &["--check"]),
            tool("node", &["--check"]),
        ],
    ),
    (".jsx", &[tool("eslint", &[]), tool("prettier", &["--check"])]),
    (
        ".ts",
        &[
            tool("eslint", &[]),
            tool("tsc", &["--noEmit"]),
            tool("prettier", &["--check"]),
        ],
    ),
    (
        ".tsx",
        &[
            tool("eslint", &[]),
            tool("tsc", &["--noEmit"]),
            tool("prettier", &["--check"]),
        ],
    ),
    (".json", &[tool("prettier", &["--check"])]),
    (".css", &[tool("prettier", &["--check"])]),
    (".scss", &[tool("prettier", &["--check"])]),
    (".html", &[tool("prettier", &["--check"])]),
    (".md", &[tool("prettier", &["--check"])]),
    (".go", &[tool("gofmt", &["-l"])]),
    (".rs", &[tool("rustfmt", &["--check"])]),
    (".rb", &[tool("rubocop", &[])]),
    (".php", &[tool("php-cs-fixer", &["fix", "--dry-run"])]),
    (
        ".sh",
        &[tool("shellcheck", &[]), tool("beautysh", &["--check"])],
    ),
    (
        ".bash",
        &[tool("shellcheck", &[]), tool("beautysh", &["--check"])],
    ),
    (
        ".zsh",
        &[tool("shellcheck", &[]), tool("beautysh", &["--check"])],
    ),
    (
        ".yaml",
        &[tool("yamllint", &[]), tool("prettier", &["--check"])],
    ),
    (
        ".yml",
        &[tool("yamllint", &[]), tool("prettier", &["--check"])],
    ),
    (".toml", &[tool("taplo", &["check"])]),
    (
        ".tf",
        &[tool("terraform", &["validate"]), tool("tflint", &[])],
    ),
    (
        ".tfvars",
        &[tool("terraform", &["validate"]), tool("tflint", &[])],
    ),
    (".dockerfile", &[tool("hadolint", &[])]),
    (
        ".github-workflow",
        &[
            tool("actionlint", &[]),
            tool("yamllint", &[]),
            tool("prettier", &["--check"]),
        ],
    ),
];

/// Format chains, highest priority first.
static FORMAT_CHAINS: &[(&str, &[ToolCandidate])] = &[
    (
        ".py",
        &[
            tool("ruff", &["format"]),
            tool("uvx", &["ruff", "format"]),
            tool("black", &[]),
        ],
    ),
    (".js", &[tool("prettier", &["--write"])]),
    (".jsx", &[tool("prettier", &["--write"])]),
    (".ts", &[tool("prettier", &["--write"])]),
    (".tsx", &[tool("prettier", &["--write"])]),
    (".json", &[tool("prettier", &["--write"])]),
    (".css", &[tool("prettier", &["--write"])]),
    (".scss", &[tool("prettier", &["--write"])]),
    (".html", &[tool("prettier", &["--write"])]),
    (".md", &[tool("prettier", &["--write"])]),
    (".go", &[tool("gofmt", &["-w"])]),
    (".rs", &[tool("rustfmt", &[])]),
    (".rb", &[tool("rubocop", &["-a"])]),
    (".php", &[tool("php-cs-fixer", &["fix"])]),
    (".sh", &[tool("shfmt", &["-w"]), tool("beautysh", &[])]),
    (".bash", &[tool("shfmt", &["-w"]), tool("beautysh", &[])]),
    (".zsh", &[tool("shfmt", &["-w"]), tool("beautysh", &[])]),
    (".yaml", &[tool("prettier", &["--write"])]),
    (".yml", &[tool("prettier", &["--write"])]),
    (".toml", &[tool("taplo", &["format"])]),
    (".tf", &[tool("terraform", &["fmt"])]),
    (".tfvars", &[tool("terraform", &["fmt"])]),
    (".github-workflow", &[tool("prettier", &["--write"])]),
];

fn table(phase: Phase) -> &'static [(&'static str, &'static [ToolCandidate])] {
    match phase {
        Phase::Lint => LINT_CHAINS,
        Phase::Format => FORMAT_CHAINS,
    }
}

/// The chain for an extension in one phase, or `None` when the extension
/// is unsupported for that phase (distinct from "supported but no tool
/// installed", which the resolver reports).
pub fn chain_for(ext: &str, phase: Phase) -> Option<&'static [ToolCandidate]> {
    table(phase)
        .iter()
        .find(|(e, _)| *e == ext)
        .map(|(_, chain)| *chain)
}

/// Whether any phase of `mode` has a chain for `ext`.
pub fn supports(ext: &str, mode: Mode) -> bool {
    mode.phases()
        .iter()
        .any(|phase| chain_for(ext, *phase).is_some())
}

/// Extensions supported in at least one phase of `mode`, used by directory
/// expansion to decide which files to collect.
pub fn supported_extensions(mode: Mode) -> Vec<&'static str> {
    let mut exts: Vec<&'static str> = Vec::new();
    for phase in mode.phases() {
        for (ext, _) in table(*phase) {
            if !exts.contains(ext) {
                exts.push(*ext);
            }
        }
    }
    exts
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod tests;
