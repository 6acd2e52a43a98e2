// envctx: Environment Context Toolkit
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Path commands: `which`, `home`, `expand`, `shrink`.

use std::io::Write;

use serde_json::json;

use super::write_result;
use crate::cli::path::{UserPathArgs, WhichArgs};
use crate::config::types::OutputFormat;
use crate::core::env::EnvironmentContext;
use crate::core::env::backend::EnvironmentBackend;
use crate::error::{EnvError, EnvctxError, Result};

/// Prints where `args.name` resolves on PATH.
///
/// # Errors
///
/// Returns [`EnvError::ExecutableNotFound`] if nothing on PATH matches.
pub fn run_which_command<B: EnvironmentBackend>(
    args: &WhichArgs,
    env: &EnvironmentContext<B>,
    format: OutputFormat,
    out: &mut impl Write,
) -> Result<()> {
    let found = env.which(&args.name);
    if found.as_os_str().is_empty() {
        return Err(EnvctxError::from(EnvError::ExecutableNotFound {
            name: args.name.clone(),
        })
        .into());
    }

    let found = found.display().to_string();
    write_result(
        out,
        format,
        &found,
        &json!({ "name": args.name, "path": found }),
    )
}

/// Prints the home directory.
///
/// # Errors
///
/// Returns an error if the home directory cannot be resolved.
pub fn run_home_command<B: EnvironmentBackend>(
    env: &EnvironmentContext<B>,
    format: OutputFormat,
    out: &mut impl Write,
) -> Result<()> {
    let home = env.home_directory().map_err(EnvctxError::from)?;
    let home = home.display().to_string();
    write_result(out, format, &home, &json!({ "home": home }))
}

/// Prints `args.path` with a leading `~` expanded.
///
/// # Errors
///
/// Returns an error if expansion needs the home directory and it cannot be
/// resolved.
pub fn run_expand_command<B: EnvironmentBackend>(
    args: &UserPathArgs,
    env: &EnvironmentContext<B>,
    format: OutputFormat,
    out: &mut impl Write,
) -> Result<()> {
    let expanded = env.expand_user(&args.path).map_err(EnvctxError::from)?;
    let expanded = expanded.display().to_string();
    write_result(out, format, &expanded, &json!({ "path": expanded }))
}

/// Prints `args.path` with a leading home directory replaced by `~`.
///
/// # Errors
///
/// Returns an error if the home directory cannot be resolved.
pub fn run_shrink_command<B: EnvironmentBackend>(
    args: &UserPathArgs,
    env: &EnvironmentContext<B>,
    format: OutputFormat,
    out: &mut impl Write,
) -> Result<()> {
    let shrunk = env.shrink_user(&args.path).map_err(EnvctxError::from)?;
    let shrunk = shrunk.display().to_string();
    write_result(out, format, &shrunk, &json!({ "path": shrunk }))
}
