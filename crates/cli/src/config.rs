//! Configuration parsing and discovery.
//!
//! Handles spruce.toml: an optional `ignore` list of glob patterns applied
//! during directory expansion. The file is discovered by walking parent
//! directories upward from the working directory; the nearest one wins.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{Error, Result};

pub const CONFIG_FILE_NAME: &str = "spruce.toml";

/// Full configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Glob patterns excluded from directory expansion.
    #[serde(default)]
    pub ignore: Vec<String>,
}

/// Find spruce.toml starting from `start_dir` and walking up to the
/// filesystem root.
pub fn find_config(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }

        match current.parent() {
            Some(parent) => current = parent.to_path_buf(),
            None => return None,
        }
    }
}

/// Parse a config file.
pub fn load(path: &Path) -> Result<Config> {
    let contents = std::fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;

    toml::from_str(&contents).map_err(|e| Error::Config {
        message: e.to_string(),
        path: Some(path.to_path_buf()),
    })
}

/// Ignore patterns for the current working directory's config, if any.
/// A malformed config is non-fatal: warn and fall back to defaults.
pub fn ignore_patterns() -> Vec<String> {
    let cwd = match std::env::current_dir() {
        Ok(cwd) => cwd,
        Err(_) => return Vec::new(),
    };

    let Some(path) = find_config(&cwd) else {
        return Vec::new();
    };

    match load(&path) {
        Ok(config) => config.ignore,
        Err(err) => {
            println!("Warning: Failed to parse {}: {err}", path.display());
            Vec::new()
        }
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
