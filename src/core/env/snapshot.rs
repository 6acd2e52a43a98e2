// envctx: Environment Context Toolkit
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Point-in-time copies of the process environment.
//!
//! ```text
//! POSIX    environ[] = ["A=1", "B=x=y", NULL]   (via std::env::vars_os)
//!            -> {A: "1", B: "x=y"}
//! Windows  "Path=C:\\\0=C:=C:\\src\0\0"  (UTF-16)
//!            -> {PATH: "C:\\"}          (keys upper-cased, "" skipped)
//! ```

use serde::Serialize;
use std::collections::BTreeMap;
use std::collections::btree_map;

/// A snapshot of every environment variable at the time it was taken.
///
/// Not a live view: later `set`/`unset` calls do not show up here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Snapshot {
    vars: BTreeMap<String, String>,
}

impl Snapshot {
    /// Creates a snapshot from an existing map.
    #[must_use]
    pub const fn from_map(vars: BTreeMap<String, String>) -> Self {
        Self { vars }
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars.get(key).map(String::as_str)
    }

    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.vars.contains_key(key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.vars.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    /// Iterates over `(name, value)` pairs ordered by name.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.vars.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    #[must_use]
    pub fn into_map(self) -> BTreeMap<String, String> {
        self.vars
    }

    /// Inserts an entry, replacing any earlier value under the same name.
    pub(crate) fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.vars.insert(key.into(), value.into());
    }
}

impl FromIterator<(String, String)> for Snapshot {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            vars: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for Snapshot {
    type Item = (String, String);
    type IntoIter = btree_map::IntoIter<String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.vars.into_iter()
    }
}

/// Splits a `NAME=VALUE` entry on the first `=`.
///
/// An entry without `=` is all name with an empty value; one malformed entry
/// must not sink a whole snapshot.
#[must_use]
pub fn split_entry(entry: &str) -> (&str, &str) {
    entry.split_once('=').unwrap_or((entry, ""))
}

/// Parses a Windows environment block.
///
/// The block is a run of NUL-terminated UTF-16 strings closed by an empty
/// string. Names are upper-cased because Windows treats them
/// case-insensitively but reports them in whatever case they were created
/// with. Entries whose name is empty (the hidden `=C:` drive variables)
/// are dropped.
#[cfg_attr(not(windows), allow(dead_code))]
pub(crate) fn parse_block(block: &[u16]) -> Snapshot {
    let mut snapshot = Snapshot::default();

    for raw in block.split(|&unit| unit == 0) {
        if raw.is_empty() {
            break;
        }

        let entry = String::from_utf16_lossy(raw);
        let (key, value) = split_entry(&entry);
        let key = key.to_uppercase();
        if key.is_empty() {
            continue;
        }
        snapshot.insert(key, value);
    }

    snapshot
}
