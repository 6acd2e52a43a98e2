// envctx: Environment Context Toolkit
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Core modules for environment and path context.
//!
//! ```text
//!                core
//!                 |
//!        +--------+--------+
//!        |        |        |
//!        v        v        v
//!       env      path     home
//!        |        |        |
//!   Context    which()   expand_user
//!   Backend    PATH      shrink_user
//!   Snapshot   split     fallback chains
//! ```

pub mod env;
pub mod home;
pub mod path;
