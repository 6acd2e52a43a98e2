// envctx: Environment Context Toolkit
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Environment commands: `get`, `vars`, `platform`, `pathsep`.

use std::io::Write;

use serde_json::json;
use tracing::info;

use super::write_result;
use crate::cli::env::{GetArgs, VarsArgs};
use crate::config::types::OutputFormat;
use crate::core::env::backend::EnvironmentBackend;
use crate::core::env::{EnvironmentContext, pathsep};
use crate::error::{EnvError, EnvctxError, Result, bail_out};

/// Prints the value of one variable.
///
/// # Errors
///
/// Returns [`EnvError::NotFound`] if the variable is not set.
pub fn run_get_command<B: EnvironmentBackend>(
    args: &GetArgs,
    env: &EnvironmentContext<B>,
    format: OutputFormat,
    out: &mut impl Write,
) -> Result<()> {
    let Some(value) = env.get(&args.key) else {
        return Err(EnvctxError::from(EnvError::NotFound {
            key: args.key.clone(),
        })
        .into());
    };

    write_result(
        out,
        format,
        &value,
        &json!({ "key": args.key, "value": value }),
    )
}

/// Applies `--unset`/`--set` to the process, then prints the environment.
///
/// Unsets run before sets, so `--unset A --set A=1` leaves `A=1`.
///
/// # Errors
///
/// Returns an error if a `--set` is rejected by the OS or the environment
/// cannot be copied.
pub fn run_vars_command<B: EnvironmentBackend>(
    args: &VarsArgs,
    env: &EnvironmentContext<B>,
    format: OutputFormat,
    out: &mut impl Write,
) -> Result<()> {
    for key in &args.unset {
        env.unset(key);
    }

    for (key, value) in &args.set {
        if !env.set(key, value) {
            return Err(bail_out(format!("could not set environment variable '{key}'")).into());
        }
    }

    if !args.set.is_empty() || !args.unset.is_empty() {
        info!(
            set = args.set.len(),
            unset = args.unset.len(),
            "applied environment changes"
        );
    }

    let snapshot = env.copy().map_err(EnvctxError::from)?;

    match format {
        OutputFormat::Plain => {
            for (key, value) in snapshot.iter() {
                writeln!(out, "{key}={value}")?;
            }
        }
        OutputFormat::Json => {
            writeln!(out, "{}", serde_json::to_string(&snapshot)?)?;
        }
    }
    Ok(())
}

/// Prints the platform name.
///
/// # Errors
///
/// Returns an error if the platform cannot be determined.
pub fn run_platform_command<B: EnvironmentBackend>(
    env: &EnvironmentContext<B>,
    format: OutputFormat,
    out: &mut impl Write,
) -> Result<()> {
    let platform = env.platform().map_err(EnvctxError::from)?;
    write_result(out, format, &platform, &json!({ "platform": platform }))
}

/// Prints the search path separator.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn run_pathsep_command(format: OutputFormat, out: &mut impl Write) -> Result<()> {
    write_result(out, format, pathsep(), &json!({ "pathsep": pathsep() }))
}
