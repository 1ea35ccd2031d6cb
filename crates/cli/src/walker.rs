// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Directory expansion.
//!
//! Recursively collects the supported files under a directory input,
//! skipping well-known build/VCS directories and any config ignore
//! patterns. Output is sorted so repeated runs process files in a stable
//! order.

use std::path::{Path, PathBuf};

use globset::{Glob, GlobSet, GlobSetBuilder};
use ignore::WalkBuilder;

use crate::classify;
use crate::error::{Error, Result};
use crate::registry::{self, Mode};

/// Directories to skip entirely during walking. Filtered during
/// traversal, not after, so their subtrees see no I/O at all.
pub(crate) const SKIP_DIRECTORIES: &[&str] = &[
    ".git",
    "node_modules",
    "__pycache__",
    ".pytest_cache",
    "dist",
    "build",
    ".venv",
    "venv",
    ".mypy_cache",
    ".ruff_cache",
    "target",
];

fn build_ignore_set(patterns: &[String]) -> Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        let glob = Glob::new(pattern).map_err(|e| Error::Walk {
            message: format!("invalid ignore pattern {pattern:?}: {e}"),
        })?;
        builder.add(glob);
    }
    builder.build().map_err(|e| Error::Walk {
        message: format!("invalid ignore patterns: {e}"),
    })
}

/// A pattern matches the full path or any single component, so a bare
/// directory name like `vendor` excludes the whole subtree.
fn is_ignored(path: &Path, set: &GlobSet) -> bool {
    if set.is_empty() {
        return false;
    }
    if set.is_match(path) {
        return true;
    }
    path.components()
        .any(|c| set.is_match(Path::new(c.as_os_str())))
}

/// Collect every file under `dir` that is supported in the active `mode`.
pub fn discover(dir: &Path, mode: Mode, ignore_patterns: &[String]) -> Result<Vec<PathBuf>> {
    let ignore_set = build_ignore_set(ignore_patterns)?;

    let mut walk = WalkBuilder::new(dir);
    walk.standard_filters(false)
        .filter_entry(|entry| {
            let is_dir = entry.file_type().is_some_and(|t| t.is_dir());
            let name = entry.file_name().to_string_lossy();
            !(is_dir && SKIP_DIRECTORIES.contains(&name.as_ref()))
        });

    let mut files = Vec::new();
    for result in walk.build() {
        let entry = match result {
            Ok(entry) => entry,
            Err(err) => {
                tracing::debug!(%err, "skipping unreadable entry");
                continue;
            }
        };

        if !entry.file_type().is_some_and(|t| t.is_file()) {
            continue;
        }

        let path = entry.into_path();
        if is_ignored(&path, &ignore_set) {
            continue;
        }

        let key = classify::registry_key(&path);
        if registry::supports(&key, mode) {
            files.push(path);
        }
    }

    files.sort();
    Ok(files)
}

#[cfg(test)]
#[path = "walker_tests.rs"]
mod tests;
