// envctx: Environment Context Toolkit
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Executable lookup along the search path.
//!
//! ```text
//! PATH="/usr/local/bin:/stale:/usr/bin"
//!   split on pathsep() -> [/usr/local/bin, /stale, /usr/bin]
//!   for dir in order:
//!     not a directory      -> skip (stale entries are common)
//!     child name == exe    -> return dir/exe
//!   none matched          -> ""  (empty path)
//! ```
//!
//! The scan is linear and uncached: every call lists the directories again.
//! Callers resolving the same names at high frequency should cache the
//! results themselves.
//!
//! Matching is exact and case-sensitive; no `PATHEXT` suffixes are tried and
//! the execute bit is not checked.


use std::path::PathBuf;

use tracing::{debug, trace, warn};

use crate::core::env::backend::EnvironmentBackend;
use crate::core::env::{EnvironmentContext, pathsep};

/// Name of the search-path variable.
pub const PATH_VAR: &str = "PATH";

/// Splits a search-path value into directories, keeping their order.
///
/// Empty segments come back as empty paths; they never name a directory
/// and are skipped by [`EnvironmentContext::which`].
#[must_use]
pub fn split_search_path(value: &str) -> Vec<PathBuf> {
    value.split(pathsep()).map(PathBuf::from).collect()
}

impl<B: EnvironmentBackend> EnvironmentContext<B> {
    /// Returns the directories listed in `PATH`, or `None` if it is unset.
    #[must_use]
    pub fn search_path(&self) -> Option<Vec<PathBuf>> {
        self.get(PATH_VAR).map(|value| split_search_path(&value))
    }

    /// Finds `executable` in the first `PATH` directory that contains it.
    ///
    /// Returns an empty path if `PATH` is unset or no directory has an entry
    /// with exactly that name.
    #[must_use]
    pub fn which(&self, executable: &str) -> PathBuf {
        let Some(dirs) = self.search_path() else {
            debug!(executable, "PATH is not set");
            return PathBuf::new();
        };

        for dir in dirs {
            if !dir.is_dir() {
                trace!(dir = %dir.display(), "skipping search path entry");
                continue;
            }

            let entries = match std::fs::read_dir(&dir) {
                Ok(entries) => entries,
                Err(e) => {
                    warn!(dir = %dir.display(), error = %e, "cannot list search path entry");
                    continue;
                }
            };

            for entry in entries.flatten() {
                if entry.file_name() == executable {
                    let found = entry.path();
                    debug!(executable, path = %found.display(), "resolved executable");
                    return found;
                }
            }
        }

        debug!(executable, "executable not found on PATH");
        PathBuf::new()
    }
}
