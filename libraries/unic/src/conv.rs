// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2024.

//! Numeric conversion.

use core::ffi::c_long;

/// Parses a decimal integer with an optional leading `-`.
///
/// Parsing stops at the first byte that is not an ASCII digit, so `"42abc"`
/// yields 42 and `""` or `"abc"` yield 0. There is no error reporting and no
/// overflow detection: out-of-range input wraps.
///
/// # Safety
///
/// `s` must be terminated.
#[cfg_attr(target_os = "none", no_mangle)]
pub unsafe extern "C" fn atol(s: *const u8) -> c_long {
    let mut p = s;
    let mut val: c_long = 0;

    let neg = unsafe { *p } == b'-';
    if neg {
        p = unsafe { p.add(1) };
    }

    loop {
        let b = unsafe { *p };
        if !b.is_ascii_digit() {
            break;
        }
        val = val.wrapping_mul(10).wrapping_add(c_long::from(b - b'0'));
        p = unsafe { p.add(1) };
    }

    if neg {
        val.wrapping_neg()
    } else {
        val
    }
}
