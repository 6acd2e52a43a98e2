// envctx: Environment Context Toolkit
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Error handling module.
//!
//! ```text
//!          EnvctxError (~24 bytes)
//!                 |
//!        +--------+--------+
//!        |        |        |
//!        v        v        v
//!      Bail      Env     Config
//!    Box<str>    Box      Box
//!
//! Sub-errors (unboxed internally):
//!   Env     EnvironmentBlock, Platform, HomeNotFound,
//!           NotFound, ExecutableNotFound
//!   Config  InvalidValue, InvalidOverride
//! ```
//!
//! Only hard failures become errors. Missing variables, failed `set`/`unset`
//! calls and stale search-path entries are logged and surface as
//! `None`/`false` instead.

use thiserror::Error;

/// Convenience alias for `anyhow::Result`.
pub type Result<T> = anyhow::Result<T>;

/// Result type using [`EnvctxError`].
pub type EnvctxResult<T> = std::result::Result<T, EnvctxError>;

/// Result type for environment backend operations.
pub type EnvResult<T> = std::result::Result<T, EnvError>;

/// Top-level application error type.
///
/// All sub-errors are boxed to keep this enum at ~24 bytes on the stack.
#[derive(Debug, Error)]
pub enum EnvctxError {
    /// Fatal error that should terminate the application.
    #[error("fatal error: {0}")]
    Bailed(Box<str>),

    /// Environment access failed.
    #[error("environment error: {0}")]
    Env(#[from] Box<EnvError>),

    /// Configuration error.
    #[error("config error: {0}")]
    Config(#[from] Box<ConfigError>),
}

/// Create a fatal [`EnvctxError::Bailed`] that terminates the application.
pub fn bail_out(message: impl Into<String>) -> EnvctxError {
    EnvctxError::Bailed(message.into().into_boxed_str())
}

// --- From implementations for boxing ---

/// Macro to generate `From` implementations that box the source error.
macro_rules! impl_from_boxed {
    ($($error:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<$error> for EnvctxError {
                fn from(err: $error) -> Self {
                    EnvctxError::$variant(Box::new(err))
                }
            }
        )+
    };
}

impl_from_boxed! {
    EnvError => Env,
    ConfigError => Config,
}

// --- Environment Errors ---

/// Unrecoverable environment errors.
///
/// These indicate a host environment the rest of the application cannot
/// reasonably work with.
#[derive(Debug, Error)]
pub enum EnvError {
    /// The OS refused to hand out the environment block.
    #[error("cannot read the process environment block: {source}")]
    EnvironmentBlock {
        #[source]
        source: std::io::Error,
    },

    /// The OS system identification call failed.
    #[error("cannot determine platform: {source}")]
    Platform {
        #[source]
        source: std::io::Error,
    },

    /// Every home directory source came back empty.
    #[error("cannot determine home directory (checked {checked})")]
    HomeNotFound { checked: String },

    /// A variable the caller required is not set.
    #[error("environment variable not set: {key}")]
    NotFound { key: String },

    /// Executable not found in PATH.
    #[error("executable not found: '{name}' (not in PATH)")]
    ExecutableNotFound { name: String },
}

// --- Config Errors ---

/// Configuration-related errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Invalid configuration value.
    #[error("invalid value for '{key}' in section '[{section}]': {message}")]
    InvalidValue {
        section: String,
        key: String,
        message: String,
    },

    /// A `KEY=VALUE` override could not be split.
    #[error("invalid override '{0}': expected KEY=VALUE")]
    InvalidOverride(String),
}
