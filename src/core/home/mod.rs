// envctx: Environment Context Toolkit
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Home directory resolution and `~` expansion.
//!
//! ```text
//! POSIX    $HOME        --empty--> passwd pw_dir      --empty--> HomeNotFound
//! Windows  %USERPROFILE% --empty--> %HOMEDRIVE%%HOMEPATH% --empty--> HomeNotFound
//!
//! expand_user("~/docs")      -> "/home/me/docs"
//! shrink_user("/home/me/x")  -> "~/x"
//! ```
//!
//! Only a bare leading `~` is understood; `~user` is not looked up. Both
//! directions are plain prefix replacements with no separator or symlink
//! normalization.

#[cfg(test)]
mod tests;

use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::core::env::EnvironmentContext;
use crate::core::env::backend::EnvironmentBackend;
use crate::error::{EnvError, EnvResult};

/// Resolves the POSIX home directory: `HOME`, then the passwd entry.
pub(crate) fn resolve_posix_home<G, P>(get: G, passwd: P) -> EnvResult<PathBuf>
where
    G: Fn(&str) -> Option<String>,
    P: FnOnce() -> Option<String>,
{
    let home = get("HOME")
        .filter(|home| !home.is_empty())
        .or_else(|| {
            debug!("HOME is not set, falling back to the passwd entry");
            passwd()
        })
        .filter(|home| !home.is_empty())
        .ok_or_else(|| EnvError::HomeNotFound {
            checked: "HOME and the passwd entry".to_string(),
        })?;

    Ok(PathBuf::from(home))
}

/// Resolves the Windows home directory: `USERPROFILE`, then
/// `HOMEDRIVE` + `HOMEPATH`.
#[cfg_attr(not(windows), allow(dead_code))]
pub(crate) fn resolve_windows_home<G>(get: G) -> EnvResult<PathBuf>
where
    G: Fn(&str) -> Option<String>,
{
    if let Some(profile) = get("USERPROFILE").filter(|p| !p.is_empty()) {
        return Ok(PathBuf::from(profile));
    }

    debug!("USERPROFILE is not set, falling back to HOMEDRIVE and HOMEPATH");
    let mut home = get("HOMEDRIVE").unwrap_or_default();
    home.push_str(&get("HOMEPATH").unwrap_or_default());

    if home.is_empty() {
        return Err(EnvError::HomeNotFound {
            checked: "USERPROFILE, HOMEDRIVE and HOMEPATH".to_string(),
        });
    }
    Ok(PathBuf::from(home))
}

impl<B: EnvironmentBackend> EnvironmentContext<B> {
    /// Replaces a leading `~` with the home directory.
    ///
    /// Paths not starting with `~` come back unchanged, without resolving the
    /// home directory at all.
    ///
    /// # Errors
    ///
    /// Returns an error if the path needs expanding and the home directory
    /// cannot be resolved.
    pub fn expand_user(&self, path: &Path) -> EnvResult<PathBuf> {
        let raw = path.as_os_str().as_encoded_bytes();
        let Some(rest) = raw.strip_prefix(b"~") else {
            return Ok(path.to_path_buf());
        };

        let mut expanded: OsString = self.home_directory()?.into_os_string();
        // SAFETY: `rest` starts right after an ASCII byte of a valid OsStr, so
        // it is itself a valid encoded OsStr.
        expanded.push(unsafe { OsStr::from_encoded_bytes_unchecked(rest) });
        Ok(PathBuf::from(expanded))
    }

    /// Replaces a leading home directory prefix with `~`.
    ///
    /// This is a string prefix match: with a home of `/home/me`,
    /// `/home/meg` becomes `~g`.
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be resolved.
    pub fn shrink_user(&self, path: &Path) -> EnvResult<PathBuf> {
        let home = self.home_directory()?;
        let raw = path.as_os_str().as_encoded_bytes();
        let Some(rest) = raw.strip_prefix(home.as_os_str().as_encoded_bytes()) else {
            return Ok(path.to_path_buf());
        };

        let mut shrunk = OsString::from("~");
        // SAFETY: `rest` follows a complete OsStr (the home directory), so
        // it starts on a valid boundary.
        shrunk.push(unsafe { OsStr::from_encoded_bytes_unchecked(rest) });
        Ok(PathBuf::from(shrunk))
    }
}
