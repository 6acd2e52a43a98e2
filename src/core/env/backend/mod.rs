// envctx: Environment Context Toolkit
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! OS-specific environment backends.
//!
//! ```text
//! EnvironmentBackend
//!   |
//!   +-- PosixBackend    (unix)    getenv/setenv/unsetenv, environ[],
//!   |                             uname(), HOME -> getpwuid_r()
//!   +-- WindowsBackend  (windows) Get/SetEnvironmentVariableW,
//!   |                             GetEnvironmentStringsW, "win32",
//!   |                             USERPROFILE -> HOMEDRIVE+HOMEPATH
//!   +-- MemoryBackend   (tests)   BTreeMap, no process state
//!
//! NativeBackend = the variant for the build target
//! ```

#[cfg(test)]
pub(crate) mod memory;
#[cfg(unix)]
pub mod posix;
#[cfg(windows)]
pub mod windows;

use std::path::PathBuf;

use super::snapshot::Snapshot;
use crate::error::EnvResult;

/// The backend for the build target.
#[cfg(unix)]
pub type NativeBackend = posix::PosixBackend;

/// The backend for the build target.
#[cfg(windows)]
pub type NativeBackend = windows::WindowsBackend;

/// Whether `key` can name an environment variable at all.
///
/// Empty names and names containing `=` or NUL cannot be stored in a
/// `NAME=VALUE` entry; a lookup with `=` in the name would match part of
/// another variable instead.
#[must_use]
pub fn is_valid_name(key: &str) -> bool {
    !key.is_empty() && !key.contains(['=', '\0'])
}

/// Access to a process environment.
///
/// Soft failures (missing variables, rejected `set`/`unset` calls) are
/// logged by the implementation and surface as `None`/`false`/`()`. Only
/// the operations returning [`EnvResult`] can fail hard.
pub trait EnvironmentBackend {
    /// Returns the value of `key`, or `None` if it is not set.
    fn get(&self, key: &str) -> Option<String>;

    /// Sets `key` to `value`, overwriting any previous value.
    ///
    /// Returns `false` if the OS rejected the call.
    fn set(&self, key: &str, value: &str) -> bool;

    /// Removes `key`. Failures are logged, never returned.
    fn unset(&self, key: &str);

    /// Copies the entire environment.
    ///
    /// # Errors
    ///
    /// Returns [`EnvError::EnvironmentBlock`](crate::error::EnvError::EnvironmentBlock)
    /// if the environment cannot be read at all.
    fn copy(&self) -> EnvResult<Snapshot>;

    /// Returns the OS family name.
    ///
    /// # Errors
    ///
    /// Returns [`EnvError::Platform`](crate::error::EnvError::Platform) if
    /// the system identification call fails.
    fn platform(&self) -> EnvResult<String>;

    /// Resolves the current user's home directory.
    ///
    /// # Errors
    ///
    /// Returns [`EnvError::HomeNotFound`](crate::error::EnvError::HomeNotFound)
    /// if every source for the home directory is empty.
    fn home_directory(&self) -> EnvResult<PathBuf>;
}
