// envctx: Environment Context Toolkit
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Tests for the environment module.

use std::cell::{Cell, RefCell};

use super::backend::is_valid_name;
use super::buffer::{BoundedRead, ERROR_ENVVAR_NOT_FOUND, INITIAL_CAPACITY, read_bounded};
use super::snapshot::{Snapshot, parse_block, split_entry};
use super::{EnvironmentContext, lock_env, native, pathsep};

fn utf16_block(entries: &[&str]) -> Vec<u16> {
    let mut block = Vec::new();
    for entry in entries {
        block.extend(entry.encode_utf16());
        block.push(0);
    }
    block.push(0);
    block
}

/// Mimics `GetEnvironmentVariable` for a variable holding `value`.
fn fill_with<'a>(
    value: &'a [u8],
    calls: &'a Cell<usize>,
    sizes: &'a RefCell<Vec<usize>>,
) -> impl FnMut(&mut [u8]) -> u32 + 'a {
    move |buf: &mut [u8]| {
        calls.set(calls.get() + 1);
        sizes.borrow_mut().push(buf.len());
        if value.len() < buf.len() {
            buf[..value.len()].copy_from_slice(value);
            u32::try_from(value.len()).unwrap()
        } else {
            u32::try_from(value.len() + 1).unwrap()
        }
    }
}

// =============================================================================
// Process environment
// =============================================================================

#[test]
fn test_set_then_get_round_trips() {
    let _guard = lock_env();
    let env = native();

    assert!(env.set("ENVCTXTEST_ROUND_TRIP", "some value"));
    assert_eq!(env.get("ENVCTXTEST_ROUND_TRIP").as_deref(), Some("some value"));

    env.unset("ENVCTXTEST_ROUND_TRIP");
}

#[test]
fn test_set_overwrites_existing_value() {
    let _guard = lock_env();
    let env = native();

    assert!(env.set("ENVCTXTEST_OVERWRITE", "first"));
    assert!(env.set("ENVCTXTEST_OVERWRITE", "second"));
    assert_eq!(env.get("ENVCTXTEST_OVERWRITE").as_deref(), Some("second"));

    env.unset("ENVCTXTEST_OVERWRITE");
}

#[test]
fn test_value_containing_equals_sign() {
    let _guard = lock_env();
    let env = native();

    assert!(env.set("ENVCTXTEST_EQUALS", "a=b=c"));
    assert_eq!(env.get("ENVCTXTEST_EQUALS").as_deref(), Some("a=b=c"));

    let snapshot = env.copy().unwrap();
    assert_eq!(snapshot.get("ENVCTXTEST_EQUALS"), Some("a=b=c"));

    env.unset("ENVCTXTEST_EQUALS");
}

#[test]
fn test_long_value_round_trips() {
    let _guard = lock_env();
    let env = native();
    let long = "x".repeat(INITIAL_CAPACITY * 3);

    assert!(env.set("ENVCTXTEST_LONG", &long));
    assert_eq!(env.get("ENVCTXTEST_LONG"), Some(long));

    env.unset("ENVCTXTEST_LONG");
}

#[test]
fn test_unset_removes_variable() {
    let _guard = lock_env();
    let env = native();

    assert!(env.set("ENVCTXTEST_UNSET", "gone soon"));
    env.unset("ENVCTXTEST_UNSET");
    assert_eq!(env.get("ENVCTXTEST_UNSET"), None);

    // Unsetting again is a no-op.
    env.unset("ENVCTXTEST_UNSET");
    assert_eq!(env.get("ENVCTXTEST_UNSET"), None);
}

#[test]
fn test_get_missing_variable() {
    let _guard = lock_env();
    let env = native();
    assert_eq!(env.get("ENVCTXTEST_DEFINITELY_NOT_SET_4F1C"), None);
}

#[test]
fn test_set_rejects_embedded_nul() {
    let _guard = lock_env();
    let env = native();

    assert!(!env.set("ENVCTXTEST_NUL", "bad\0value"));
    assert!(!env.set("ENVCTX\0TEST", "value"));
    assert_eq!(env.get("ENVCTXTEST_NUL"), None);
}

#[test]
fn test_set_rejects_invalid_names() {
    let _guard = lock_env();
    let env = native();

    assert!(!env.set("", "value"));
    assert!(!env.set("ENVCTX=TEST", "value"));
}

#[test]
fn test_get_rejects_names_with_equals_sign() {
    let _guard = lock_env();
    let env = native();

    // A name with `=` must not match the tail of another entry.
    assert!(env.set("ENVCTXTEST_PREFIX", "bar=baz"));
    assert_eq!(env.get("ENVCTXTEST_PREFIX=bar"), None);
    assert_eq!(env.get("="), None);
    assert_eq!(env.get(""), None);
    assert_eq!(env.get("ENVCTXTEST\0PREFIX"), None);

    env.unset("ENVCTXTEST_PREFIX=bar");
    assert_eq!(env.get("ENVCTXTEST_PREFIX").as_deref(), Some("bar=baz"));

    env.unset("ENVCTXTEST_PREFIX");
}

#[test]
fn test_is_valid_name() {
    assert!(is_valid_name("PATH"));
    assert!(is_valid_name("lower_case"));
    assert!(!is_valid_name(""));
    assert!(!is_valid_name("A=B"));
    assert!(!is_valid_name("=C:"));
    assert!(!is_valid_name("A\0B"));
}

#[test]
fn test_copy_contains_fresh_variable() {
    let _guard = lock_env();
    let env = native();

    assert!(env.set("ENVCTXTEST_Copy", "bar"));
    let snapshot = env.copy().unwrap();

    #[cfg(windows)]
    assert_eq!(snapshot.get("ENVCTXTEST_COPY"), Some("bar"));
    #[cfg(not(windows))]
    {
        assert_eq!(snapshot.get("ENVCTXTEST_Copy"), Some("bar"));
        assert!(!snapshot.contains_key("ENVCTXTEST_COPY"));
    }

    env.unset("ENVCTXTEST_Copy");
}

#[test]
fn test_copy_is_not_a_live_view() {
    let _guard = lock_env();
    let env = native();

    let before = env.copy().unwrap();
    assert!(env.set("ENVCTXTEST_LATE", "1"));

    assert!(!before.contains_key("ENVCTXTEST_LATE"));
    assert!(env.copy().unwrap().contains_key("ENVCTXTEST_LATE"));

    env.unset("ENVCTXTEST_LATE");
}

#[test]
fn test_copy_includes_path() {
    let _guard = lock_env();
    let snapshot = native().copy().unwrap();
    assert!(snapshot.contains_key("PATH"), "PATH should be in the snapshot");
}

#[test]
fn test_contexts_share_process_state() {
    let _guard = lock_env();
    let first = native();
    let second = EnvironmentContext::native();

    assert!(first.set("ENVCTXTEST_SHARED", "seen"));
    assert_eq!(second.get("ENVCTXTEST_SHARED").as_deref(), Some("seen"));

    second.unset("ENVCTXTEST_SHARED");
}

#[test]
fn test_platform() {
    let _guard = lock_env();
    let platform = native().platform().unwrap();
    assert!(!platform.is_empty());

    #[cfg(windows)]
    assert_eq!(platform, "win32");
    #[cfg(target_os = "linux")]
    assert_eq!(platform, "Linux");
    #[cfg(target_os = "macos")]
    assert_eq!(platform, "Darwin");
}

#[test]
fn test_pathsep() {
    let sep = pathsep();
    assert_eq!(sep.chars().count(), 1);
    assert_eq!(sep, pathsep());

    #[cfg(windows)]
    assert_eq!(sep, ";");
    #[cfg(not(windows))]
    assert_eq!(sep, ":");
}

// =============================================================================
// Entry and block parsing
// =============================================================================

#[test]
fn test_split_entry() {
    let cases: Vec<_> = ["A=1", "B=x=y", "EMPTY=", "BROKEN", "=hidden"]
        .into_iter()
        .map(|entry| format!("{entry:?} -> {:?}", split_entry(entry)))
        .collect();

    insta::assert_snapshot!(cases.join("\n"), @r#"
    "A=1" -> ("A", "1")
    "B=x=y" -> ("B", "x=y")
    "EMPTY=" -> ("EMPTY", "")
    "BROKEN" -> ("BROKEN", "")
    "=hidden" -> ("", "hidden")
    "#);
}

#[test]
fn test_parse_block_uppercases_and_skips_hidden() {
    let block = utf16_block(&[
        "Path=C:\\Windows",
        "=C:=C:\\src",
        "=ExitCode=00000000",
        "windir=C:\\Windows",
        "Value=a=b",
    ]);

    let snapshot = parse_block(&block);
    let lines: Vec<_> = snapshot.iter().map(|(k, v)| format!("{k}={v}")).collect();

    insta::assert_snapshot!(lines.join("\n"), @r"
    PATH=C:\Windows
    VALUE=a=b
    WINDIR=C:\Windows
    ");
}

#[test]
fn test_parse_block_empty_environment() {
    assert!(parse_block(&[0]).is_empty());
    assert!(parse_block(&[0, 0]).is_empty());
    assert!(parse_block(&[]).is_empty());
}

#[test]
fn test_parse_block_stops_at_terminator() {
    let mut block = utf16_block(&["A=1"]);
    block.extend("B=2".encode_utf16());
    block.push(0);

    let snapshot = parse_block(&block);
    assert_eq!(snapshot.len(), 1);
    assert_eq!(snapshot.get("A"), Some("1"));
}

#[test]
fn test_snapshot_serializes_as_object() {
    let snapshot: Snapshot = [
        ("B".to_string(), "2".to_string()),
        ("A".to_string(), "1".to_string()),
    ]
    .into_iter()
    .collect();

    insta::assert_snapshot!(serde_json::to_string(&snapshot).unwrap(), @r#"{"A":"1","B":"2"}"#);
}

#[test]
fn test_snapshot_into_map_keeps_every_entry() {
    let snapshot: Snapshot = [
        ("HOME".to_string(), "/home/me".to_string()),
        ("EMPTY".to_string(), String::new()),
    ]
    .into_iter()
    .collect();

    let map = snapshot.clone().into_map();
    assert_eq!(map.len(), snapshot.len());
    assert_eq!(map.get("HOME").map(String::as_str), Some("/home/me"));
    assert_eq!(map.get("EMPTY").map(String::as_str), Some(""));
    assert_eq!(Snapshot::from_map(map), snapshot);
}

// =============================================================================
// Bounded-buffer reads
// =============================================================================

#[test]
fn test_read_bounded_fits_initial_buffer() {
    let calls = Cell::new(0);
    let sizes = RefCell::new(Vec::new());
    let read = read_bounded(fill_with(b"hello", &calls, &sizes), || 0);

    assert_eq!(read, BoundedRead::Value(b"hello".to_vec()));
    assert_eq!(calls.get(), 1);
}

#[test]
fn test_read_bounded_largest_value_without_resize() {
    let value = vec![b'v'; INITIAL_CAPACITY - 1];
    let calls = Cell::new(0);
    let sizes = RefCell::new(Vec::new());
    let read = read_bounded(fill_with(&value, &calls, &sizes), || 0);

    assert_eq!(read, BoundedRead::Value(value));
    assert_eq!(calls.get(), 1);
}

#[test]
fn test_read_bounded_resizes_exactly_once() {
    let value = vec![b'v'; INITIAL_CAPACITY * 2];
    let calls = Cell::new(0);
    let sizes = RefCell::new(Vec::new());
    let read = read_bounded(fill_with(&value, &calls, &sizes), || 0);

    assert_eq!(read, BoundedRead::Value(value));
    assert_eq!(calls.get(), 2);
    assert_eq!(*sizes.borrow(), vec![INITIAL_CAPACITY, INITIAL_CAPACITY * 2 + 1]);
}

#[test]
fn test_read_bounded_value_of_initial_capacity_resizes() {
    let value = vec![b'v'; INITIAL_CAPACITY];
    let calls = Cell::new(0);
    let sizes = RefCell::new(Vec::new());
    let read = read_bounded(fill_with(&value, &calls, &sizes), || 0);

    assert_eq!(read, BoundedRead::Value(value));
    assert_eq!(calls.get(), 2);
}

#[test]
fn test_read_bounded_missing_variable() {
    let read: BoundedRead<u16> = read_bounded(|_| 0, || ERROR_ENVVAR_NOT_FOUND);
    assert_eq!(read, BoundedRead::Missing);
}

#[test]
fn test_read_bounded_empty_value_is_missing() {
    let read: BoundedRead<u16> = read_bounded(|_| 0, || 0);
    assert_eq!(read, BoundedRead::Missing);
}

#[test]
fn test_read_bounded_reports_other_errors() {
    // ERROR_ACCESS_DENIED
    let read: BoundedRead<u16> = read_bounded(|_| 0, || 5);
    assert_eq!(read, BoundedRead::Failed(5));
}

#[test]
fn test_read_bounded_gives_up_after_one_resize() {
    let calls = Cell::new(0);
    let read: BoundedRead<u16> = read_bounded(
        |buf| {
            calls.set(calls.get() + 1);
            u32::try_from(buf.len() + 10).unwrap()
        },
        || 0,
    );

    assert_eq!(
        read,
        BoundedRead::Grew {
            required: INITIAL_CAPACITY + 20
        }
    );
    assert_eq!(calls.get(), 2);
}

#[test]
fn test_read_bounded_error_after_resize() {
    let calls = Cell::new(0);
    let read: BoundedRead<u16> = read_bounded(
        |_| {
            calls.set(calls.get() + 1);
            if calls.get() == 1 { 4096 } else { 0 }
        },
        || ERROR_ENVVAR_NOT_FOUND,
    );

    assert_eq!(read, BoundedRead::Missing);
    assert_eq!(calls.get(), 2);
}
