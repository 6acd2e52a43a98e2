// envctx: Environment Context Toolkit
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI arguments for the environment commands.
//!
//! ```text
//! envctx get KEY
//! envctx vars [--set KEY=VALUE]... [--unset KEY]...
//! ```

use clap::Args;

use crate::error::ConfigError;

/// Arguments for the `get` command.
#[derive(Debug, Clone, Args)]
pub struct GetArgs {
    /// Variable name.
    pub key: String,
}

/// Arguments for the `vars` command.
#[derive(Debug, Clone, Default, Args)]
pub struct VarsArgs {
    /// Sets a variable before printing. Can be specified multiple times.
    #[arg(short = 's', long = "set", value_name = "KEY=VALUE", value_parser = parse_assignment, action = clap::ArgAction::Append)]
    pub set: Vec<(String, String)>,

    /// Removes a variable before printing. Can be specified multiple times.
    #[arg(short = 'u', long = "unset", value_name = "KEY", action = clap::ArgAction::Append)]
    pub unset: Vec<String>,
}

/// Parses a `KEY=VALUE` assignment, splitting on the first `=`.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidOverride`] if there is no `=` or the key is
/// empty.
pub fn parse_assignment(s: &str) -> Result<(String, String), ConfigError> {
    match s.split_once('=') {
        Some((key, value)) if !key.is_empty() => Ok((key.to_string(), value.to_string())),
        _ => Err(ConfigError::InvalidOverride(s.to_string())),
    }
}
