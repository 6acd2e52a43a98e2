// envctx: Environment Context Toolkit
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Library root.
//!
//! # Crate Architecture
//!
//! ```text
//!                        main.rs
//!                           |
//!                +----------+----------+
//!                v                     v
//!             cli (clap)          cmd (handlers)
//!                |           get / vars / which / home
//!                +----------+----------+
//!                           v
//!              ,---------------------------,
//!              |          config           |
//!              |   TOML, layered settings  |
//!              '-------------+-------------'
//!                            v
//!   +-----------------------------------------------+
//!   |  core   env (context, backends, snapshot)     |
//!   |         path (which)   home (~ expansion)     |
//!   +-----------------------------------------------+
//!   |  foundation   error, logging                  |
//!   +-----------------------------------------------+
//! ```
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//!
//! let env = envctx::core::env::native();
//!
//! if env.set("EDITOR", "vi") {
//!     assert_eq!(env.get("EDITOR").as_deref(), Some("vi"));
//! }
//! let git = env.which("git");
//! let config = env.expand_user(Path::new("~/.config"))?;
//! # Ok::<(), envctx::error::EnvError>(())
//! ```

pub mod cli;
pub mod cmd;
pub mod config;
pub mod core;
pub mod error;
pub mod logging;
