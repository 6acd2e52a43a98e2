// envctx: Environment Context Toolkit
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Process environment access.
//!
//! # Architecture
//!
//! ```text
//! EnvironmentContext<B: EnvironmentBackend = NativeBackend>
//!   get / set / unset       -> B (single variable)
//!   copy                    -> B (whole environment -> Snapshot)
//!   platform                -> B
//!   which / search_path     -> core::path  (reads PATH through get)
//!   home_directory          -> B (platform fallback chain)
//!   expand_user/shrink_user -> core::home
//! ```
//!
//! - **Process-wide**: every context forwards to the one process
//!   environment; `set` on one is visible through all of them and to every
//!   thread. No locking happens here.
//! - **Uncached**: every call goes to the OS.
//! - **UTF-8 API**: names and values are converted lossily at the boundary.

pub mod backend;
pub(crate) mod buffer;
pub mod snapshot;

#[cfg(test)]
mod tests;

use std::path::PathBuf;

use tracing::debug;

use crate::error::EnvResult;
use backend::{EnvironmentBackend, NativeBackend};
use snapshot::Snapshot;

/// Separator between entries of a search-path variable.
#[cfg(windows)]
pub const PATHSEP: &str = ";";

/// Separator between entries of a search-path variable.
#[cfg(not(windows))]
pub const PATHSEP: &str = ":";

/// Returns the search-path separator for this platform.
#[must_use]
pub const fn pathsep() -> &'static str {
    PATHSEP
}

/// Serializes unit tests that read or write the real process environment.
#[cfg(test)]
pub(crate) fn lock_env() -> std::sync::MutexGuard<'static, ()> {
    static ENV_LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());
    ENV_LOCK
        .lock()
        .unwrap_or_else(std::sync::PoisonError::into_inner)
}

/// Returns the context bound to the current process environment.
#[must_use]
pub const fn native() -> EnvironmentContext {
    EnvironmentContext::native()
}

/// A handle on a process environment.
///
/// The handle owns no variables itself; cloning or creating several of them
/// gives several views of the same shared state.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvironmentContext<B = NativeBackend> {
    backend: B,
}

impl EnvironmentContext<NativeBackend> {
    #[must_use]
    pub const fn native() -> Self {
        Self {
            backend: NativeBackend::new(),
        }
    }
}

impl<B: EnvironmentBackend> EnvironmentContext<B> {
    /// Creates a context on top of a specific backend.
    #[must_use]
    pub const fn with_backend(backend: B) -> Self {
        Self { backend }
    }

    #[must_use]
    pub const fn backend(&self) -> &B {
        &self.backend
    }

    /// Returns the value of `key`, or `None` if it is not set.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<String> {
        let value = self.backend.get(key);
        debug!(key, found = value.is_some(), "env lookup");
        value
    }

    /// Sets `key` to `value`, overwriting any existing value.
    ///
    /// Returns `false` if the OS rejected the change; the failure has
    /// already been logged.
    #[must_use = "a rejected set is only reported through the return value"]
    pub fn set(&self, key: &str, value: &str) -> bool {
        self.backend.set(key, value)
    }

    /// Removes `key` if present. Failures are logged and otherwise ignored.
    pub fn unset(&self, key: &str) {
        self.backend.unset(key);
    }

    /// Copies the whole environment into a fresh [`Snapshot`].
    ///
    /// # Errors
    ///
    /// Returns an error if the environment block cannot be obtained at all.
    /// An empty environment is a valid, empty snapshot.
    pub fn copy(&self) -> EnvResult<Snapshot> {
        self.backend.copy()
    }

    /// Returns the OS family name (`"win32"` on Windows, the `uname`
    /// system name elsewhere).
    ///
    /// # Errors
    ///
    /// Returns an error if the system identification call fails.
    pub fn platform(&self) -> EnvResult<String> {
        self.backend.platform()
    }

    /// Resolves the current user's home directory.
    ///
    /// # Errors
    ///
    /// Returns an error if neither the primary variable nor its fallback
    /// yields a non-empty value.
    pub fn home_directory(&self) -> EnvResult<PathBuf> {
        self.backend.home_directory()
    }
}
