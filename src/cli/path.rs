// envctx: Environment Context Toolkit
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI arguments for the path commands.
//!
//! ```text
//! envctx which NAME
//! envctx expand PATH   ~/x       → /home/me/x
//! envctx shrink PATH   /home/me/x → ~/x
//! ```

use clap::Args;
use std::path::PathBuf;

/// Arguments for the `which` command.
#[derive(Debug, Clone, Args)]
pub struct WhichArgs {
    /// Exact file name to look for.
    pub name: String,
}

/// Arguments for the `expand` and `shrink` commands.
#[derive(Debug, Clone, Args)]
pub struct UserPathArgs {
    /// Path to rewrite.
    pub path: PathBuf,
}
