// envctx: Environment Context Toolkit
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Bounded-buffer reads for `GetEnvironmentVariableW`-style APIs.
//!
//! ```text
//! fill(buf[1024]) -> 0          --> last_error: NOT_FOUND/0 -> Missing
//!                                               other       -> Failed(code)
//!                 -> n < 1024   --> Value(buf[..n])
//!                 -> n >= 1024  --> fill(buf[n]) once more
//!                                     -> n' < n   -> Value
//!                                     -> n' >= n  -> Grew (no third call)
//! ```
//!
//! The second call can still come back short if another thread enlarged the
//! variable in between. That race is reported as [`BoundedRead::Grew`] rather
//! than chased with more reallocations.

/// Initial buffer length in code units; large enough that the resize path
/// stays rare.
pub(crate) const INITIAL_CAPACITY: usize = 1024;

/// `ERROR_ENVVAR_NOT_FOUND` from `winerror.h`.
pub(crate) const ERROR_ENVVAR_NOT_FOUND: u32 = 203;

/// `ERROR_SUCCESS`. The last-error slot is cleared before each call, so an
/// untouched slot means the variable exists but is empty, which Windows
/// treats the same as missing.
const ERROR_SUCCESS: u32 = 0;

/// Outcome of a bounded-buffer read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum BoundedRead<T> {
    /// The value, without its terminator.
    Value(Vec<T>),
    /// The variable is not set.
    Missing,
    /// The call failed with the given OS error code.
    Failed(u32),
    /// The value outgrew the resized buffer between the two calls.
    Grew { required: usize },
}

/// Reads a value through `fill`, resizing at most once.
///
/// `fill` receives the buffer and returns what the OS call returned: the
/// value length without terminator on success, the required length with
/// terminator when the buffer is too small, and `0` on failure. `last_error`
/// is consulted only when `fill` returns `0`.
#[cfg_attr(not(windows), allow(dead_code))]
pub(crate) fn read_bounded<T, F, E>(mut fill: F, last_error: E) -> BoundedRead<T>
where
    T: Copy + Default,
    F: FnMut(&mut [T]) -> u32,
    E: Fn() -> u32,
{
    let mut buf = vec![T::default(); INITIAL_CAPACITY];
    let mut resized = false;

    loop {
        let size = usize::try_from(fill(&mut buf)).unwrap_or(usize::MAX);

        if size == 0 {
            return match last_error() {
                ERROR_SUCCESS | ERROR_ENVVAR_NOT_FOUND => BoundedRead::Missing,
                code => BoundedRead::Failed(code),
            };
        }

        if size < buf.len() {
            buf.truncate(size);
            return BoundedRead::Value(buf);
        }

        if resized {
            return BoundedRead::Grew { required: size };
        }

        resized = true;
        buf = vec![T::default(); size];
    }
}
