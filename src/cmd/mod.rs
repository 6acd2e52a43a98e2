// envctx: Environment Context Toolkit
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Command implementations.
//!
//! ```text
//! CLI args --> cmd::run_* handlers --> EnvironmentContext
//!   env     get, vars, platform, pathsep
//!   path    which, home, expand, shrink
//!   config  options, configs
//! ```
//!
//! Handlers write to the given writer in the configured [`OutputFormat`].

pub mod config;
pub mod env;
pub mod path;


use std::fmt::Display;
use std::io::Write;

use crate::config::types::OutputFormat;
use crate::error::Result;

/// Writes a single result either as a plain line or as a JSON document.
pub(crate) fn write_result(
    out: &mut impl Write,
    format: OutputFormat,
    plain: impl Display,
    json: &serde_json::Value,
) -> Result<()> {
    match format {
        OutputFormat::Plain => writeln!(out, "{plain}")?,
        OutputFormat::Json => writeln!(out, "{json}")?,
    }
    Ok(())
}
