// envctx: Environment Context Toolkit
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI module for envctx using clap derive.
//!
//! # Command Structure
//!
//! ```text
//! envctx [global options] <command>
//! get KEY
//! vars [--set K=V] [--unset K]
//! which NAME
//! platform | home | pathsep
//! expand PATH | shrink PATH
//! options | configs | version
//! ```

pub mod env;
pub mod global;
pub mod path;


use crate::cli::env::{GetArgs, VarsArgs};
use crate::cli::global::GlobalOptions;
use crate::cli::path::{UserPathArgs, WhichArgs};
use clap::{Parser, Subcommand};

/// Environment Context Toolkit
///
/// Queries and edits the process environment, resolves executables and
/// home-relative paths the same way on every platform.
#[derive(Debug, Parser)]
#[command(
    name = "envctx",
    author,
    version,
    about = "Environment Context Toolkit",
    long_about = "envctx Copyright (C) 2026 Romeo Ahmed\n\
                  This program comes with ABSOLUTELY NO WARRANTY\n\
                  This is free software, and you are welcome to redistribute it\n\
                  under certain conditions; see LICENSE for details.\n\n\
                  Queries the process environment, resolves executables on PATH\n\
                  and expands or contracts `~` in paths. See\n\
                  `envctx <command> --help` for more information about a command.",
    after_help = "CONFIG FILES:\n\n\
                  envctx reads `envctx.toml` from the current directory if it\n\
                  exists, then every file given with --config, in order. Later\n\
                  files override earlier ones. ENVCTX_SECTION__KEY variables and\n\
                  command-line flags override all files. Use --no-default-config\n\
                  to skip `envctx.toml`."
)]
pub struct Cli {
    /// Global options shared by all commands
    #[command(flatten)]
    pub global: GlobalOptions,

    /// Command to execute
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Shows the version.
    #[command(visible_alias = "-v")]
    Version,

    /// Lists all options and their values from the config files.
    Options,

    /// Lists the config files used by envctx.
    Configs,

    /// Prints the value of an environment variable.
    Get(GetArgs),

    /// Prints every environment variable.
    Vars(VarsArgs),

    /// Finds an executable on PATH.
    Which(WhichArgs),

    /// Prints the platform name.
    Platform,

    /// Prints the home directory.
    Home,

    /// Prints the search path separator.
    Pathsep,

    /// Replaces a leading `~` with the home directory.
    Expand(UserPathArgs),

    /// Replaces a leading home directory with `~`.
    Shrink(UserPathArgs),
}

/// Parses command-line arguments.
#[must_use]
pub fn parse() -> Cli {
    Cli::parse()
}

/// Parses command-line arguments from an iterator.
pub fn parse_from<I, T>(iter: I) -> Cli
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::parse_from(iter)
}

/// Tries to parse command-line arguments, returning an error on failure.
///
/// # Errors
///
/// Returns a `clap::Error` if the arguments are invalid or if help/version information
/// was requested.
pub fn try_parse() -> Result<Cli, clap::Error> {
    Cli::try_parse()
}
