// envctx: Environment Context Toolkit
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Windows environment backend.
//!
//! ```text
//! get      GetEnvironmentVariableW  -> buffer::read_bounded (1024, one resize)
//! set      SetEnvironmentVariableW  -> false + warn on failure
//! unset    SetEnvironmentVariableW(name, NULL)
//! copy     GetEnvironmentStringsW   -> snapshot::parse_block -> Free..W on drop
//! platform "win32"
//! home     USERPROFILE -> HOMEDRIVE + HOMEPATH
//! ```
//!
//! Windows variables cannot be empty, only missing, so a zero-length read
//! is never a legitimate value.

use std::ffi::OsStr;
use std::os::windows::ffi::OsStrExt;
use std::path::PathBuf;

use tracing::{debug, error, warn};
use windows::Win32::Foundation::{GetLastError, SetLastError, WIN32_ERROR};
use windows::Win32::System::Environment::{
    FreeEnvironmentStringsW, GetEnvironmentStringsW, GetEnvironmentVariableW,
    SetEnvironmentVariableW,
};
use windows::core::{PCWSTR, PWSTR};

use super::{EnvironmentBackend, is_valid_name};
use crate::core::env::buffer::{BoundedRead, read_bounded};
use crate::core::env::snapshot::{Snapshot, parse_block};
use crate::core::home::resolve_windows_home;
use crate::error::{EnvError, EnvResult};

/// Platform identifier reported on Windows.
const PLATFORM: &str = "win32";

/// Environment backend for Windows.
#[derive(Debug, Clone, Copy, Default)]
pub struct WindowsBackend;

impl WindowsBackend {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

/// Encodes `s` as a NUL-terminated UTF-16 string.
///
/// Returns `None` if `s` contains a NUL, which would silently truncate it.
fn to_wide(s: &str) -> Option<Vec<u16>> {
    if s.contains('\0') {
        return None;
    }
    Some(OsStr::new(s).encode_wide().chain(Some(0)).collect())
}

impl EnvironmentBackend for WindowsBackend {
    fn get(&self, key: &str) -> Option<String> {
        if !is_valid_name(key) {
            return None;
        }
        let name = to_wide(key)?;

        let read = read_bounded(
            |buf: &mut [u16]| {
                // SAFETY: `name` is NUL-terminated and outlives the call;
                // `buf` is a valid writable slice.
                unsafe {
                    SetLastError(WIN32_ERROR(0));
                    GetEnvironmentVariableW(PCWSTR(name.as_ptr()), Some(buf))
                }
            },
            // SAFETY: GetLastError has no preconditions.
            || unsafe { GetLastError().0 },
        );

        match read {
            BoundedRead::Value(units) => Some(String::from_utf16_lossy(&units)),
            BoundedRead::Missing => None,
            BoundedRead::Failed(code) => {
                error!(key, code, "could not get environment variable");
                None
            }
            BoundedRead::Grew { required } => {
                warn!(
                    key,
                    required, "environment variable changed size while being read"
                );
                None
            }
        }
    }

    fn set(&self, key: &str, value: &str) -> bool {
        let name = to_wide(key).filter(|_| is_valid_name(key));
        let (Some(name), Some(wide_value)) = (name, to_wide(value)) else {
            warn!(key, "could not set environment variable: invalid name or value");
            return false;
        };

        // SAFETY: both strings are NUL-terminated and outlive the call.
        let result = unsafe {
            SetEnvironmentVariableW(PCWSTR(name.as_ptr()), PCWSTR(wide_value.as_ptr()))
        };

        match result {
            Ok(()) => true,
            Err(e) => {
                warn!(key, code = e.code().0, "could not set environment variable");
                false
            }
        }
    }

    fn unset(&self, key: &str) {
        let Some(name) = to_wide(key).filter(|_| is_valid_name(key)) else {
            warn!(key, "could not unset environment variable: invalid name");
            return;
        };

        // SAFETY: `name` is NUL-terminated; a null value deletes the variable.
        let result = unsafe { SetEnvironmentVariableW(PCWSTR(name.as_ptr()), PCWSTR::null()) };
        if let Err(e) = result {
            warn!(key, code = e.code().0, "could not unset environment variable");
        }
    }

    fn copy(&self) -> EnvResult<Snapshot> {
        let block = EnvironmentStrings::acquire()?;
        let snapshot = parse_block(block.as_slice());
        debug!(count = snapshot.len(), "copied process environment");
        Ok(snapshot)
    }

    fn platform(&self) -> EnvResult<String> {
        Ok(PLATFORM.to_string())
    }

    fn home_directory(&self) -> EnvResult<PathBuf> {
        resolve_windows_home(|key| self.get(key))
    }
}

/// Owned environment block from `GetEnvironmentStringsW`.
///
/// Freed on drop, so every exit path after acquisition releases it.
struct EnvironmentStrings(PWSTR);

impl EnvironmentStrings {
    fn acquire() -> EnvResult<Self> {
        // SAFETY: GetEnvironmentStringsW has no preconditions.
        let block = unsafe { GetEnvironmentStringsW() };
        if block.is_null() {
            return Err(EnvError::EnvironmentBlock {
                source: std::io::Error::last_os_error(),
            });
        }
        Ok(Self(block))
    }

    /// Returns the block up to and including the closing empty string.
    fn as_slice(&self) -> &[u16] {
        let base = self.0.0;
        let mut len = 0usize;

        // SAFETY: the block is a sequence of NUL-terminated strings closed by
        // an empty one, so every read below stays inside it.
        unsafe {
            while *base.add(len) != 0 {
                while *base.add(len) != 0 {
                    len += 1;
                }
                len += 1;
            }
            std::slice::from_raw_parts(base, len + 1)
        }
    }
}

impl Drop for EnvironmentStrings {
    fn drop(&mut self) {
        // SAFETY: the pointer came from GetEnvironmentStringsW and is freed
        // exactly once.
        if let Err(e) = unsafe { FreeEnvironmentStringsW(PCWSTR(self.0.0.cast_const())) } {
            warn!(code = e.code().0, "could not free environment block");
        }
    }
}
