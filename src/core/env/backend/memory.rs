// envctx: Environment Context Toolkit
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! In-memory backend for exercising resolver logic without touching the
//! process environment.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::path::PathBuf;

use super::{EnvironmentBackend, is_valid_name};
use crate::core::env::snapshot::Snapshot;
use crate::core::home::resolve_posix_home;
use crate::error::EnvResult;

#[derive(Debug, Default)]
pub(crate) struct MemoryBackend {
    vars: RefCell<BTreeMap<String, String>>,
    passwd_home: Option<String>,
}

impl MemoryBackend {
    pub(crate) fn with_vars<'a>(vars: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        Self {
            vars: RefCell::new(
                vars.into_iter()
                    .map(|(k, v)| (k.to_string(), v.to_string()))
                    .collect(),
            ),
            passwd_home: None,
        }
    }

    pub(crate) fn with_passwd_home(mut self, home: &str) -> Self {
        self.passwd_home = Some(home.to_string());
        self
    }
}

impl EnvironmentBackend for MemoryBackend {
    fn get(&self, key: &str) -> Option<String> {
        if !is_valid_name(key) {
            return None;
        }
        self.vars.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> bool {
        if !is_valid_name(key) || value.contains('\0') {
            return false;
        }
        self.vars
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        true
    }

    fn unset(&self, key: &str) {
        self.vars.borrow_mut().remove(key);
    }

    fn copy(&self) -> EnvResult<Snapshot> {
        Ok(Snapshot::from_map(self.vars.borrow().clone()))
    }

    fn platform(&self) -> EnvResult<String> {
        Ok("Memory".to_string())
    }

    fn home_directory(&self) -> EnvResult<PathBuf> {
        resolve_posix_home(|key| self.get(key), || self.passwd_home.clone())
    }
}
