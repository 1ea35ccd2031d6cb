// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Extension classification.
//!
//! Groups input paths by lowercase file extension, dropping nonexistent
//! files and files with no chain in any active phase. Both drops are
//! non-fatal: they surface as warnings and never affect the exit code.

use std::path::{Path, PathBuf};

use crate::registry::{self, Mode};

/// Files sharing one extension, processed together in one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileGroup {
    /// Registry key, e.g. `.py` (includes the leading dot).
    pub extension: String,
    /// First-seen input order is preserved.
    pub files: Vec<PathBuf>,
}

/// Classification result: groups plus the warnings to print.
#[derive(Debug, Default)]
pub struct Classified {
    /// Groups in first-seen extension order.
    pub groups: Vec<FileGroup>,
    pub warnings: Vec<String>,
}

impl Classified {
    fn push(&mut self, extension: &str, file: PathBuf) {
        match self.groups.iter_mut().find(|g| g.extension == extension) {
            Some(group) => group.files.push(file),
            None => self.groups.push(FileGroup {
                extension: extension.to_string(),
                files: vec![file],
            }),
        }
    }
}

/// Lowercase extension with leading dot, empty string when there is none.
fn raw_extension(path: &Path) -> String {
    match path.extension() {
        Some(ext) => format!(".{}", ext.to_string_lossy().to_lowercase()),
        None => String::new(),
    }
}

/// True when the path sits under a `.github/workflows` directory.
fn in_workflows_dir(path: &Path) -> bool {
    let parts: Vec<_> = path
        .components()
        .map(|c| c.as_os_str().to_string_lossy().to_lowercase())
        .collect();
    parts
        .windows(2)
        .any(|pair| pair[0] == ".github" && pair[1] == "workflows")
}

/// Registry key for a path. Two special cases beyond the plain extension:
/// `Dockerfile` (no extension) maps to `.dockerfile`, and workflow YAML
/// files map to `.github-workflow` so they get the actionlint chain.
pub(crate) fn registry_key(path: &Path) -> String {
    let ext = raw_extension(path);

    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_lowercase())
        .unwrap_or_default();
    if name == "dockerfile" {
        return ".dockerfile".to_string();
    }

    if (ext == ".yml" || ext == ".yaml") && in_workflows_dir(path) {
        return ".github-workflow".to_string();
    }

    ext
}

/// Group `paths` by extension for the active `mode`.
///
/// Warnings keep the original tool's wording so downstream scripts that
/// grep the output keep working.
pub fn classify(paths: &[PathBuf], mode: Mode) -> Classified {
    let mut out = Classified::default();

    for path in paths {
        if !path.exists() {
            out.warnings
                .push(format!("File {} does not exist, skipping", path.display()));
            continue;
        }

        let key = registry_key(path);
        if registry::supports(&key, mode) {
            out.push(&key, path.clone());
        } else {
            out.warnings.push(format!(
                "No linter configured for file {} (extension: {})",
                path.display(),
                raw_extension(path)
            ));
        }
    }

    out
}

#[cfg(test)]
#[path = "classify_tests.rs"]
mod tests;
