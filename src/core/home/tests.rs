// envctx: Environment Context Toolkit
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use super::{resolve_posix_home, resolve_windows_home};
use crate::core::env::EnvironmentContext;
use crate::core::env::backend::memory::MemoryBackend;
use crate::error::EnvError;

fn lookup<'a>(vars: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<String> + 'a {
    let map: BTreeMap<&str, &str> = vars.iter().copied().collect();
    move |key| map.get(key).map(|v| (*v).to_string())
}

fn context_with_home(home: &str) -> EnvironmentContext<MemoryBackend> {
    EnvironmentContext::with_backend(MemoryBackend::with_vars([("HOME", home)]))
}

// =============================================================================
// Fallback chains
// =============================================================================

#[test]
fn test_posix_home_prefers_home_variable() {
    let home = resolve_posix_home(lookup(&[("HOME", "/home/me")]), || {
        panic!("passwd must not be consulted when HOME is set")
    });
    assert_eq!(home.unwrap(), PathBuf::from("/home/me"));
}

#[test]
fn test_posix_home_falls_back_to_passwd() {
    let unset = resolve_posix_home(lookup(&[]), || Some("/var/lib/me".to_string()));
    let empty = resolve_posix_home(lookup(&[("HOME", "")]), || Some("/var/lib/me".to_string()));

    assert_eq!(unset.unwrap(), PathBuf::from("/var/lib/me"));
    assert_eq!(empty.unwrap(), PathBuf::from("/var/lib/me"));
}

#[test]
fn test_posix_home_fails_when_everything_is_empty() {
    let missing = resolve_posix_home(lookup(&[]), || None);
    let empty = resolve_posix_home(lookup(&[("HOME", "")]), || Some(String::new()));

    assert!(matches!(missing, Err(EnvError::HomeNotFound { .. })));
    assert!(matches!(empty, Err(EnvError::HomeNotFound { .. })));
}

#[test]
fn test_windows_home_prefers_userprofile() {
    let home = resolve_windows_home(lookup(&[
        ("USERPROFILE", "C:\\Users\\me"),
        ("HOMEDRIVE", "D:"),
        ("HOMEPATH", "\\other"),
    ]));
    assert_eq!(home.unwrap(), PathBuf::from("C:\\Users\\me"));
}

#[test]
fn test_windows_home_concatenates_drive_and_path() {
    let home = resolve_windows_home(lookup(&[("HOMEDRIVE", "D:"), ("HOMEPATH", "\\Users\\me")]));
    assert_eq!(home.unwrap(), PathBuf::from("D:\\Users\\me"));
}

#[test]
fn test_windows_home_partial_fallback() {
    let home = resolve_windows_home(lookup(&[("HOMEPATH", "\\Users\\me")]));
    assert_eq!(home.unwrap(), PathBuf::from("\\Users\\me"));
}

#[test]
fn test_windows_home_fails_when_everything_is_empty() {
    let err = resolve_windows_home(lookup(&[("USERPROFILE", "")])).unwrap_err();
    insta::assert_snapshot!(
        err.to_string(),
        @"cannot determine home directory (checked USERPROFILE, HOMEDRIVE and HOMEPATH)"
    );
}

// =============================================================================
// expand_user / shrink_user
// =============================================================================

#[test]
fn test_expand_user() {
    let env = context_with_home("/home/me");

    let cases: Vec<_> = ["~/docs", "~", "~other", "/etc/~", "docs", ""]
        .into_iter()
        .map(|p| format!("{p:?} -> {:?}", env.expand_user(Path::new(p)).unwrap()))
        .collect();

    insta::assert_snapshot!(cases.join("\n"), @r#"
    "~/docs" -> "/home/me/docs"
    "~" -> "/home/me"
    "~other" -> "/home/meother"
    "/etc/~" -> "/etc/~"
    "docs" -> "docs"
    "" -> ""
    "#);
}

#[test]
fn test_expand_user_without_tilde_skips_home_lookup() {
    let env = EnvironmentContext::with_backend(MemoryBackend::default());
    assert_eq!(
        env.expand_user(Path::new("/tmp/x")).unwrap(),
        PathBuf::from("/tmp/x")
    );
    assert!(env.expand_user(Path::new("~/x")).is_err());
}

#[test]
fn test_shrink_user() {
    let env = context_with_home("/home/me");

    let cases: Vec<_> = ["/home/me/docs", "/home/me", "/home/meg", "/tmp/home/me", "~/x"]
        .into_iter()
        .map(|p| format!("{p:?} -> {:?}", env.shrink_user(Path::new(p)).unwrap()))
        .collect();

    insta::assert_snapshot!(cases.join("\n"), @r#"
    "/home/me/docs" -> "~/docs"
    "/home/me" -> "~"
    "/home/meg" -> "~g"
    "/tmp/home/me" -> "/tmp/home/me"
    "~/x" -> "~/x"
    "#);
}

#[test]
fn test_expand_then_shrink_round_trips() {
    let env = context_with_home("/home/me");

    let expanded = env.expand_user(Path::new("~/docs")).unwrap();
    let shrunk = env.shrink_user(&expanded).unwrap();

    assert_eq!(shrunk, PathBuf::from("~/docs"));
}

#[test]
fn test_home_from_passwd_backend() {
    let env =
        EnvironmentContext::with_backend(MemoryBackend::default().with_passwd_home("/srv/me"));
    assert_eq!(env.home_directory().unwrap(), PathBuf::from("/srv/me"));
    assert_eq!(
        env.expand_user(Path::new("~/.config")).unwrap(),
        PathBuf::from("/srv/me/.config")
    );
}

#[test]
fn test_native_home_round_trip() {
    let _guard = crate::core::env::lock_env();
    let env = crate::core::env::native();
    let Ok(home) = env.home_directory() else {
        return;
    };
    assert!(!home.as_os_str().is_empty());

    let expanded = env.expand_user(Path::new("~/docs")).unwrap();
    assert!(expanded.starts_with(&home));
    assert_eq!(
        env.shrink_user(&expanded).unwrap(),
        PathBuf::from("~/docs")
    );
}
