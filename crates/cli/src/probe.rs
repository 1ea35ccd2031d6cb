// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Executable availability probing.
//!
//! A pure predicate over the search path: no side effects beyond a
//! read-only lookup. Results are memoized per binary name for the process
//! lifetime, since chains re-probe the same tools across file groups.

use std::collections::HashMap;
use std::sync::{Mutex, OnceLock};

static CACHE: OnceLock<Mutex<HashMap<String, bool>>> = OnceLock::new();

/// True iff `bin` resolves to an executable on the current search path.
/// Lookup failure of any kind is treated as "not available".
pub fn is_available(bin: &str) -> bool {
    let cache = CACHE.get_or_init(|| Mutex::new(HashMap::new()));

    // A poisoned lock only means another thread panicked mid-insert;
    // the map contents are still valid booleans.
    let mut cache = match cache.lock() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    };

    if let Some(known) = cache.get(bin) {
        return *known;
    }

    let found = which::which(bin).is_ok();
    cache.insert(bin.to_string(), found);
    found
}

#[cfg(test)]
#[path = "probe_tests.rs"]
mod tests;
