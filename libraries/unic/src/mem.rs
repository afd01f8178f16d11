// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2024.

//! Raw memory primitives: copy, move, fill, compare and search.
//!
//! All functions take and return raw pointers and follow the C library
//! contracts. Nothing here checks bounds.

use core::ffi::c_int;
use core::mem::size_of;
use core::ptr;

const WORD_SIZE: usize = size_of::<usize>();
const WORD_MASK: usize = WORD_SIZE - 1;

/// Every byte lane of a word set to `0x01`.
const LANES: usize = usize::MAX / 0xff;

#[inline(always)]
fn unaligned(p: *const u8) -> bool {
    (p as usize) & WORD_MASK != 0
}

/// Copies `n` bytes from `src` to `dest` in ascending order and returns
/// `dest`.
///
/// # Safety
///
/// Both ranges must be valid for `n` bytes and must not overlap. Overlap is
/// not detected in release builds; use [`memmove`] when it can happen.
#[cfg_attr(target_os = "none", no_mangle)]
pub unsafe extern "C" fn memcpy(dest: *mut u8, src: *const u8, n: usize) -> *mut u8 {
    debug_assert!(
        n == 0
            || (dest as usize) >= (src as usize).saturating_add(n)
            || (src as usize) >= (dest as usize).saturating_add(n),
        "memcpy: overlapping ranges"
    );

    for i in 0..n {
        unsafe { *dest.add(i) = *src.add(i) };
    }

    dest
}

/// Copies `n` bytes from `src` to `dest`, correct even when the ranges
/// overlap, and returns `dest`.
///
/// Copies ascending when `dest <= src` and descending from the end
/// otherwise, so a source byte is always read before it is overwritten.
///
/// # Safety
///
/// Both ranges must be valid for `n` bytes.
#[cfg_attr(target_os = "none", no_mangle)]
pub unsafe extern "C" fn memmove(dest: *mut u8, src: *const u8, n: usize) -> *mut u8 {
    if (dest as usize) <= (src as usize) {
        for i in 0..n {
            unsafe { *dest.add(i) = *src.add(i) };
        }
    } else {
        let mut i = n;
        while i > 0 {
            i -= 1;
            unsafe { *dest.add(i) = *src.add(i) };
        }
    }

    dest
}

/// Sets `n` bytes starting at `s` to the low 8 bits of `c` and returns `s`.
///
/// Leading bytes are stored one at a time until `s` reaches a word boundary.
/// The aligned middle is then stored a word at a time, four words per
/// iteration while enough remain, and the tail is finished bytewise.
///
/// # Safety
///
/// The range must be valid for writes of `n` bytes.
#[cfg_attr(target_os = "none", no_mangle)]
pub unsafe extern "C" fn memset(s: *mut u8, c: c_int, n: usize) -> *mut u8 {
    let byte = (c & 0xff) as u8;
    let mut p = s;
    let mut n = n;

    while unaligned(p) {
        if n == 0 {
            return s;
        }
        unsafe {
            *p = byte;
            p = p.add(1);
        }
        n -= 1;
    }

    if n >= WORD_SIZE {
        let word = LANES * usize::from(byte);
        let mut aligned = p.cast::<usize>();

        while n >= 4 * WORD_SIZE {
            unsafe {
                aligned.write(word);
                aligned.add(1).write(word);
                aligned.add(2).write(word);
                aligned.add(3).write(word);
                aligned = aligned.add(4);
            }
            n -= 4 * WORD_SIZE;
        }

        while n >= WORD_SIZE {
            unsafe {
                aligned.write(word);
                aligned = aligned.add(1);
            }
            n -= WORD_SIZE;
        }

        p = aligned.cast::<u8>();
    }

    while n > 0 {
        unsafe {
            *p = byte;
            p = p.add(1);
        }
        n -= 1;
    }

    s
}

/// Compares `n` bytes of `s1` and `s2`.
///
/// Returns 0 if they are equal, otherwise the difference of the first
/// differing pair, `s1[k] - s2[k]`, with both bytes taken as unsigned.
///
/// # Safety
///
/// Both ranges must be valid for reads of `n` bytes.
#[cfg_attr(target_os = "none", no_mangle)]
pub unsafe extern "C" fn memcmp(s1: *const u8, s2: *const u8, n: usize) -> c_int {
    for i in 0..n {
        let (a, b) = unsafe { (*s1.add(i), *s2.add(i)) };
        if a != b {
            return c_int::from(a) - c_int::from(b);
        }
    }

    0
}

/// Returns a pointer to the first byte equal to the low 8 bits of `c` within
/// the first `n` bytes of `s`, or null if there is none.
///
/// # Safety
///
/// The range must be valid for reads of `n` bytes.
#[cfg_attr(target_os = "none", no_mangle)]
pub unsafe extern "C" fn memchr(s: *const u8, c: c_int, n: usize) -> *mut u8 {
    let needle = c as u8;

    for i in 0..n {
        let p = unsafe { s.add(i) };
        if unsafe { *p } == needle {
            return p.cast_mut();
        }
    }

    ptr::null_mut()
}

#[cfg(test)]
mod test {
    use super::{memchr, memcmp, memcpy, memmove, memset, WORD_SIZE};
    use core::ptr;

    #[repr(C, align(16))]
    struct Aligned([u8; 96]);

    #[test]
    fn memcpy_disjoint() {
        let src = *b"bootloader";
        let mut dst = [0u8; 10];

        let ret = unsafe { memcpy(dst.as_mut_ptr(), src.as_ptr(), src.len()) };

        assert_eq!(ret, dst.as_mut_ptr());
        assert_eq!(&dst, b"bootloader");
    }

    #[test]
    fn memcpy_zero_length() {
        let src = [1u8; 4];
        let mut dst = [9u8; 4];
        unsafe { memcpy(dst.as_mut_ptr(), src.as_ptr(), 0) };
        assert_eq!(dst, [9; 4]);
    }

    #[test]
    fn memmove_overlap_forward() {
        let mut buf = *b"0123456789";
        let base = buf.as_mut_ptr();

        // dest after src: must copy from the end
        unsafe { memmove(base.add(2), base, 6) };

        assert_eq!(&buf, b"0101234589");
    }

    #[test]
    fn memmove_overlap_backward() {
        let mut buf = *b"0123456789";
        let base = buf.as_mut_ptr();

        unsafe { memmove(base, base.add(3), 7) };

        assert_eq!(&buf, b"3456789789");
    }

    #[test]
    fn memmove_matches_temporary_copy() {
        for src_off in 0..8 {
            for dst_off in 0..8 {
                let mut buf = [0u8; 24];
                for (i, b) in buf.iter_mut().enumerate() {
                    *b = i as u8;
                }

                let mut expected = buf;
                let mut tmp = [0u8; 16];
                tmp.copy_from_slice(&expected[src_off..src_off + 16]);
                expected[dst_off..dst_off + 16].copy_from_slice(&tmp);

                let base = buf.as_mut_ptr();
                unsafe { memmove(base.add(dst_off), base.add(src_off), 16) };

                assert_eq!(buf, expected, "src {} dst {}", src_off, dst_off);
            }
        }
    }

    #[test]
    fn memmove_same_address() {
        let mut buf = *b"abcd";
        let base = buf.as_mut_ptr();
        unsafe { memmove(base, base, 4) };
        assert_eq!(&buf, b"abcd");
    }

    #[test]
    fn memset_every_alignment_and_length() {
        for offset in 0..WORD_SIZE {
            for len in 0..=(8 * WORD_SIZE + 3) {
                let mut buf = Aligned([0x5a; 96]);
                let start = unsafe { buf.0.as_mut_ptr().add(offset) };

                let ret = unsafe { memset(start, 0xa5, len) };
                assert_eq!(ret, start);

                for (i, b) in buf.0.iter().enumerate() {
                    let inside = i >= offset && i < offset + len;
                    let want = if inside { 0xa5 } else { 0x5a };
                    assert_eq!(*b, want, "offset {} len {} index {}", offset, len, i);
                }
            }
        }
    }

    #[test]
    fn memset_uses_low_byte_only() {
        let mut buf = Aligned([0; 96]);
        unsafe { memset(buf.0.as_mut_ptr(), 0x1234, 40) };
        assert!(buf.0[..40].iter().all(|b| *b == 0x34));
        assert!(buf.0[40..].iter().all(|b| *b == 0));

        unsafe { memset(buf.0.as_mut_ptr(), -1, 3) };
        assert_eq!(&buf.0[..4], &[0xff, 0xff, 0xff, 0x34]);
    }

    #[test]
    fn memcmp_equal_and_sign() {
        let a = *b"abcdef";
        let mut b = a;

        assert_eq!(unsafe { memcmp(a.as_ptr(), a.as_ptr(), a.len()) }, 0);
        assert_eq!(unsafe { memcmp(a.as_ptr(), b.as_ptr(), 0) }, 0);

        b[3] = b'z';
        assert!(unsafe { memcmp(a.as_ptr(), b.as_ptr(), 6) } < 0);
        assert!(unsafe { memcmp(b.as_ptr(), a.as_ptr(), 6) } > 0);
        // Mismatch past n is ignored.
        assert_eq!(unsafe { memcmp(a.as_ptr(), b.as_ptr(), 3) }, 0);
    }

    #[test]
    fn memcmp_is_unsigned() {
        let a = [0x80u8];
        let b = [0x01u8];
        assert_eq!(unsafe { memcmp(a.as_ptr(), b.as_ptr(), 1) }, 0x7f);
        assert_eq!(unsafe { memcmp(b.as_ptr(), a.as_ptr(), 1) }, -0x7f);
    }

    #[test]
    fn memchr_first_match() {
        let hay = *b"abcabc";

        let p = unsafe { memchr(hay.as_ptr(), c_int_of(b'c'), hay.len()) };
        assert_eq!(p.cast_const(), unsafe { hay.as_ptr().add(2) });

        let p = unsafe { memchr(hay.as_ptr(), c_int_of(b'c'), 2) };
        assert!(p.is_null());

        let p = unsafe { memchr(hay.as_ptr(), c_int_of(b'x'), hay.len()) };
        assert_eq!(p, ptr::null_mut());
    }

    fn c_int_of(b: u8) -> core::ffi::c_int {
        core::ffi::c_int::from(b)
    }
}
