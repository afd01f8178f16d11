// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2024.

//! Bounds-checked wrappers over the raw primitives.
//!
//! Each function validates the raw primitive's preconditions against the
//! slices it is given, then calls it. The results for valid input are
//! exactly the raw results; invalid input is rejected with an [`ErrorCode`]
//! instead of reading or writing out of bounds.
//!
//! Strings are byte slices holding a null-terminated sequence somewhere
//! inside them. Bytes after the terminator are ignored.

use core::ffi::{c_int, c_long};

use crate::conv;
use crate::mem;
use crate::string;
use crate::ErrorCode;

/// Length of the terminated sequence in `s`, or `INVAL` if `s` holds no
/// terminator.
fn terminated_len(s: &[u8]) -> Result<usize, ErrorCode> {
    let len = unsafe { string::strnlen(s.as_ptr(), s.len()) };
    if len == s.len() {
        Err(ErrorCode::INVAL)
    } else {
        Ok(len)
    }
}

fn index_of(base: *const u8, found: *const u8) -> Option<usize> {
    if found.is_null() {
        None
    } else {
        Some(found as usize - base as usize)
    }
}

/// Copies all of `src` to the front of `dst`.
pub fn copy(dst: &mut [u8], src: &[u8]) -> Result<(), ErrorCode> {
    if dst.len() < src.len() {
        return Err(ErrorCode::SIZE);
    }
    unsafe { mem::memcpy(dst.as_mut_ptr(), src.as_ptr(), src.len()) };
    Ok(())
}

/// Moves `len` bytes inside `buf` from `src_start` to `dst_start`. The two
/// ranges may overlap.
pub fn copy_within(
    buf: &mut [u8],
    src_start: usize,
    dst_start: usize,
    len: usize,
) -> Result<(), ErrorCode> {
    let buf_len = buf.len();
    let fits = |start: usize| start.checked_add(len).is_some_and(|end| end <= buf_len);
    if !fits(src_start) || !fits(dst_start) {
        return Err(ErrorCode::SIZE);
    }

    let base = buf.as_mut_ptr();
    unsafe { mem::memmove(base.add(dst_start), base.add(src_start), len) };
    Ok(())
}

/// Sets every byte of `dst` to `value`.
pub fn fill(dst: &mut [u8], value: u8) {
    unsafe { mem::memset(dst.as_mut_ptr(), c_int::from(value), dst.len()) };
}

/// Compares the first `n` bytes of `a` and `b`.
pub fn compare(a: &[u8], b: &[u8], n: usize) -> Result<c_int, ErrorCode> {
    if n > a.len() || n > b.len() {
        return Err(ErrorCode::SIZE);
    }
    Ok(unsafe { mem::memcmp(a.as_ptr(), b.as_ptr(), n) })
}

/// Index of the first `byte` in `haystack`.
pub fn find_byte(haystack: &[u8], byte: u8) -> Option<usize> {
    let found =
        unsafe { mem::memchr(haystack.as_ptr(), c_int::from(byte), haystack.len()) };
    index_of(haystack.as_ptr(), found)
}

/// Length of the string in `s`.
pub fn str_len(s: &[u8]) -> Result<usize, ErrorCode> {
    terminated_len(s)
}

/// Copies the string in `src`, terminator included, into `dst`. Returns the
/// length copied, not counting the terminator.
pub fn str_copy(dst: &mut [u8], src: &[u8]) -> Result<usize, ErrorCode> {
    let len = terminated_len(src)?;
    if dst.len() <= len {
        return Err(ErrorCode::SIZE);
    }
    unsafe { string::strcpy(dst.as_mut_ptr(), src.as_ptr()) };
    Ok(len)
}

/// Fixed-width copy of the first `n` bytes of `dst`, with the raw
/// [`strncpy`](string::strncpy) semantics: when the string in `src` is `n`
/// bytes or longer, `dst` is *not* terminated.
pub fn str_copy_bounded(dst: &mut [u8], src: &[u8], n: usize) -> Result<(), ErrorCode> {
    if n > dst.len() {
        return Err(ErrorCode::SIZE);
    }
    terminated_len(src)?;
    unsafe { string::strncpy(dst.as_mut_ptr(), src.as_ptr(), n) };
    Ok(())
}

/// Appends the string in `src` to the string in `dst`. Returns the new
/// length of `dst`, not counting the terminator.
pub fn str_concat(dst: &mut [u8], src: &[u8]) -> Result<usize, ErrorCode> {
    let dst_len = terminated_len(dst)?;
    let src_len = terminated_len(src)?;
    let total = dst_len + src_len;
    if dst.len() <= total {
        return Err(ErrorCode::SIZE);
    }
    unsafe { string::strcat(dst.as_mut_ptr(), src.as_ptr()) };
    Ok(total)
}

/// Compares the strings in `a` and `b`.
pub fn str_compare(a: &[u8], b: &[u8]) -> Result<c_int, ErrorCode> {
    terminated_len(a)?;
    terminated_len(b)?;
    Ok(unsafe { string::strcmp(a.as_ptr(), b.as_ptr()) })
}

/// Compares at most `n` bytes of the strings in `a` and `b`. Each slice must
/// either hold a terminator or be at least `n` bytes long.
pub fn str_compare_bounded(a: &[u8], b: &[u8], n: usize) -> Result<c_int, ErrorCode> {
    for s in [a, b] {
        if s.len() < n {
            terminated_len(s)?;
        }
    }
    Ok(unsafe { string::strncmp(a.as_ptr(), b.as_ptr(), n) })
}

/// Index of the first `c` in the string in `s`. Searching for 0 finds the
/// terminator.
pub fn str_find(s: &[u8], c: u8) -> Result<Option<usize>, ErrorCode> {
    terminated_len(s)?;
    let found = unsafe { string::strchr(s.as_ptr(), c_int::from(c)) };
    Ok(index_of(s.as_ptr(), found))
}

/// Index of the last `c` in the string in `s`. Searching for 0 finds the
/// terminator.
pub fn str_find_last(s: &[u8], c: u8) -> Result<Option<usize>, ErrorCode> {
    terminated_len(s)?;
    let found = unsafe { string::strrchr(s.as_ptr(), c_int::from(c)) };
    Ok(index_of(s.as_ptr(), found))
}

/// Parses the string in `s` with [`atol`](conv::atol) semantics.
pub fn parse_long(s: &[u8]) -> Result<c_long, ErrorCode> {
    terminated_len(s)?;
    Ok(unsafe { conv::atol(s.as_ptr()) })
}
