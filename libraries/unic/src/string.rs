// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2024.

//! Raw primitives over null-terminated byte strings.
//!
//! Bytes are compared as unsigned values, so the terminator sorts below
//! every other byte.

use core::ffi::c_int;
use core::ptr;

use crate::mem::{memcpy, memset};

/// Copies `src`, including its terminator, to `dest` and returns `dest`.
///
/// # Safety
///
/// `src` must be terminated, `dest` must have room for `strlen(src) + 1`
/// bytes, and the two must not overlap. Capacity is never checked.
#[cfg_attr(target_os = "none", no_mangle)]
pub unsafe extern "C" fn strcpy(dest: *mut u8, src: *const u8) -> *mut u8 {
    let mut i = 0;
    loop {
        let b = unsafe { *src.add(i) };
        unsafe { *dest.add(i) = b };
        if b == 0 {
            return dest;
        }
        i += 1;
    }
}

/// Copies at most `n` bytes of `src` into `dest`, then zero-fills `dest` up
/// to `n` bytes, and returns `dest`.
///
/// The length of `src` is measured first. If it is `n` or more, exactly `n`
/// bytes are copied and **`dest` is left without a terminator**. Callers
/// that need a terminated result must check for this themselves; do not
/// "fix" it here, boot code relies on the fixed-width behavior.
///
/// # Safety
///
/// `src` must be terminated, `dest` must be valid for `n` bytes, and the two
/// must not overlap.
#[cfg_attr(target_os = "none", no_mangle)]
pub unsafe extern "C" fn strncpy(dest: *mut u8, src: *const u8, n: usize) -> *mut u8 {
    let len = unsafe { strlen(src) }.min(n);

    unsafe {
        memcpy(dest, src, len);
        memset(dest.add(len), 0, n - len);
    }

    dest
}

/// Appends `src` to the end of `dest` and returns `dest`.
///
/// # Safety
///
/// Both must be terminated, must not overlap, and `dest` must have room for
/// `strlen(dest) + strlen(src) + 1` bytes.
#[cfg_attr(target_os = "none", no_mangle)]
pub unsafe extern "C" fn strcat(dest: *mut u8, src: *const u8) -> *mut u8 {
    unsafe { strcpy(dest.add(strlen(dest)), src) };
    dest
}

/// Compares two strings byte by byte.
///
/// Returns 0 if equal, otherwise the unsigned difference of the first
/// differing bytes.
///
/// # Safety
///
/// Both strings must be terminated.
#[cfg_attr(target_os = "none", no_mangle)]
pub unsafe extern "C" fn strcmp(s1: *const u8, s2: *const u8) -> c_int {
    let mut i = 0;
    loop {
        let (a, b) = unsafe { (*s1.add(i), *s2.add(i)) };
        if a == 0 || a != b {
            return c_int::from(a) - c_int::from(b);
        }
        i += 1;
    }
}

/// Like [`strcmp`], but looks at no more than `n` bytes.
///
/// # Safety
///
/// Each string must be terminated or valid for `n` bytes.
#[cfg_attr(target_os = "none", no_mangle)]
pub unsafe extern "C" fn strncmp(s1: *const u8, s2: *const u8, n: usize) -> c_int {
    for i in 0..n {
        let (a, b) = unsafe { (*s1.add(i), *s2.add(i)) };
        if a == 0 || a != b {
            return c_int::from(a) - c_int::from(b);
        }
    }

    0
}

/// Returns the number of bytes before the terminator.
///
/// # Safety
///
/// `s` must be terminated within addressable memory.
#[cfg_attr(target_os = "none", no_mangle)]
pub unsafe extern "C" fn strlen(s: *const u8) -> usize {
    let mut len = 0;
    while unsafe { *s.add(len) } != 0 {
        len += 1;
    }
    len
}

/// Returns the number of bytes before the terminator, or `n` if none of the
/// first `n` bytes is zero. Never reads past `s + n`.
///
/// # Safety
///
/// `s` must be terminated or valid for `n` bytes.
#[cfg_attr(target_os = "none", no_mangle)]
pub unsafe extern "C" fn strnlen(s: *const u8, n: usize) -> usize {
    let mut len = 0;
    while len < n && unsafe { *s.add(len) } != 0 {
        len += 1;
    }
    len
}

/// Returns a pointer to the first byte of `s` equal to the low 8 bits of
/// `c`, or null. The terminator itself can be found by passing 0.
///
/// # Safety
///
/// `s` must be terminated.
#[cfg_attr(target_os = "none", no_mangle)]
pub unsafe extern "C" fn strchr(s: *const u8, c: c_int) -> *mut u8 {
    let needle = c as u8;
    let mut p = s;
    loop {
        let b = unsafe { *p };
        if b == needle {
            return p.cast_mut();
        }
        if b == 0 {
            return ptr::null_mut();
        }
        p = unsafe { p.add(1) };
    }
}

/// Returns a pointer to the last byte of `s` equal to the low 8 bits of
/// `c`, or null. The terminator itself can be found by passing 0.
///
/// # Safety
///
/// `s` must be terminated.
#[cfg_attr(target_os = "none", no_mangle)]
pub unsafe extern "C" fn strrchr(s: *const u8, c: c_int) -> *mut u8 {
    let needle = c as u8;
    // Scan backward starting at the terminator.
    let mut i = unsafe { strlen(s) } + 1;
    while i > 0 {
        i -= 1;
        let p = unsafe { s.add(i) };
        if unsafe { *p } == needle {
            return p.cast_mut();
        }
    }

    ptr::null_mut()
}
