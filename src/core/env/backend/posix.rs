// envctx: Environment Context Toolkit
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! POSIX environment backend.
//!
//! ```text
//! get      std::env::var_os     -> lossy UTF-8
//! set      std::env::set_var    -> false + warn on names/values it rejects
//! unset    std::env::remove_var -> warn on names it rejects
//! copy     std::env::vars_os    -> one consistent pass over environ[]
//! platform uname()              -> sysname
//! home     $HOME                -> getpwuid_r(getuid()).pw_dir
//! ```
//!
//! Variable access goes through the standard library so it shares std's
//! environment lock with every other `std::env` caller in the process.
//! Code that reads `environ` or calls `getenv` directly through FFI on
//! another thread is still unsynchronized with `set`/`unset`.

use std::ffi::CStr;
use std::path::PathBuf;

use libc::c_char;
use tracing::{debug, trace, warn};

use super::{EnvironmentBackend, is_valid_name};
use crate::core::env::snapshot::Snapshot;
use crate::core::home::resolve_posix_home;
use crate::error::{EnvError, EnvResult};

/// Starting size for the `getpwuid_r` scratch buffer when `sysconf` has no
/// opinion.
const PASSWD_BUFFER: usize = 1024;

/// Upper bound for the `getpwuid_r` scratch buffer.
const PASSWD_BUFFER_MAX: usize = 1024 * 1024;

/// Environment backend for Unix-like systems.
#[derive(Debug, Clone, Copy, Default)]
pub struct PosixBackend;

impl PosixBackend {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl EnvironmentBackend for PosixBackend {
    fn get(&self, key: &str) -> Option<String> {
        if !is_valid_name(key) {
            return None;
        }
        std::env::var_os(key).map(|value| value.to_string_lossy().into_owned())
    }

    fn set(&self, key: &str, value: &str) -> bool {
        if !is_valid_name(key) || value.contains('\0') {
            warn!(key, "could not set environment variable: invalid name or value");
            return false;
        }

        // SAFETY: name and value were checked above, so set_var cannot
        // panic on them. The write holds std's environment lock, which every
        // `std::env` reader in the process also takes.
        unsafe { std::env::set_var(key, value) };
        true
    }

    fn unset(&self, key: &str) {
        if !is_valid_name(key) {
            warn!(key, "could not unset environment variable: invalid name");
            return;
        }

        // SAFETY: as in `set`; the name was checked above.
        unsafe { std::env::remove_var(key) };
    }

    fn copy(&self) -> EnvResult<Snapshot> {
        let mut snapshot = Snapshot::default();

        for (key, value) in std::env::vars_os() {
            let key = key.to_string_lossy();
            trace!(key = %key, "captured env var");
            snapshot.insert(key, value.to_string_lossy());
        }

        debug!(count = snapshot.len(), "copied process environment");
        Ok(snapshot)
    }

    fn platform(&self) -> EnvResult<String> {
        // SAFETY: utsname is plain old data; all-zero is a valid value.
        let mut info: libc::utsname = unsafe { std::mem::zeroed() };

        // SAFETY: `info` is a valid, writable utsname.
        if unsafe { libc::uname(&raw mut info) } == -1 {
            return Err(EnvError::Platform {
                source: std::io::Error::last_os_error(),
            });
        }

        // SAFETY: uname NUL-terminates every field it fills in.
        let sysname = unsafe { CStr::from_ptr(info.sysname.as_ptr()) };
        Ok(sysname.to_string_lossy().into_owned())
    }

    fn home_directory(&self) -> EnvResult<PathBuf> {
        resolve_posix_home(|key| self.get(key), passwd_home)
    }
}

/// Looks up the home directory of the current user in the password database.
fn passwd_home() -> Option<String> {
    // SAFETY: sysconf has no preconditions.
    let suggested = unsafe { libc::sysconf(libc::_SC_GETPW_R_SIZE_MAX) };
    let mut buf_len = usize::try_from(suggested)
        .ok()
        .filter(|&n| n > 0)
        .unwrap_or(PASSWD_BUFFER);

    loop {
        let mut buf: Vec<c_char> = vec![0; buf_len];
        // SAFETY: passwd is plain old data; all-zero is a valid value.
        let mut pwd: libc::passwd = unsafe { std::mem::zeroed() };
        let mut result: *mut libc::passwd = std::ptr::null_mut();

        // SAFETY: every pointer refers to live, writable storage of the
        // advertised size.
        let rc = unsafe {
            libc::getpwuid_r(
                libc::getuid(),
                &raw mut pwd,
                buf.as_mut_ptr(),
                buf.len(),
                &raw mut result,
            )
        };

        if rc == libc::ERANGE && buf_len < PASSWD_BUFFER_MAX {
            buf_len *= 2;
            continue;
        }

        if rc != 0 {
            let err = std::io::Error::from_raw_os_error(rc);
            warn!(error = %err, "could not read passwd entry for current user");
            return None;
        }

        if result.is_null() || pwd.pw_dir.is_null() {
            debug!("no passwd entry for current user");
            return None;
        }

        // SAFETY: pw_dir points into `buf`, which is still alive.
        let dir = unsafe { CStr::from_ptr(pwd.pw_dir) };
        return Some(dir.to_string_lossy().into_owned());
    }
}
