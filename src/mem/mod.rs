//! Raw `memcpy` etc.
//!
//! These functions have the semantics of their C counterparts and operate on
//! raw pointers. The caller is responsible for upholding the usual C
//! contracts: every pointer must be valid for reads (and writes, where
//! written) of `n` bytes, and regions which the C function forbids from
//! overlapping must not overlap.
//!
//! The `optimize_for_size` feature decides whether the word-at-a-time or the
//! byte-at-a-time implementation backs them.

use core::ffi::c_int;
use core::ptr::{null, null_mut};

#[cfg(not(feature = "optimize_for_size"))]
#[path = "fast.rs"]
mod imp;
#[cfg(feature = "optimize_for_size")]
#[path = "small.rs"]
mod imp;

/// Copy `n` bytes from `src` to `dst`, returning `dst`.
///
/// # Safety
///
/// `src` must be valid for reads and `dst` for writes of `n` bytes, and the
/// two regions must not overlap.
#[inline]
pub unsafe fn memcpy(dst: *mut u8, src: *const u8, n: usize) -> *mut u8 {
    unsafe { imp::copy_forward(dst, src, n) };
    dst
}

/// Copy `n` bytes from `src` to `dst`, returning `dst`. The regions may
/// overlap.
///
/// # Safety
///
/// `src` must be valid for reads and `dst` for writes of `n` bytes.
#[inline]
pub unsafe fn memmove(dst: *mut u8, src: *const u8, n: usize) -> *mut u8 {
    let delta = dst.addr().wrapping_sub(src.addr());
    if delta >= n {
        // We can copy forwards because either dst is far enough ahead of src,
        // or src is ahead of dst (and delta overflowed).
        unsafe { imp::copy_forward(dst, src, n) };
    } else {
        unsafe { imp::copy_backward(dst, src, n) };
    }
    dst
}

/// Fill `n` bytes at `dst` with `fill`, returning `dst`.
///
/// # Safety
///
/// `dst` must be valid for writes of `n` bytes.
#[inline]
pub unsafe fn memset(dst: *mut u8, fill: u8, n: usize) -> *mut u8 {
    unsafe { imp::set_bytes(dst, fill, n) };
    dst
}

/// Compare `n` bytes at `a` and `b`.
///
/// Returns the difference between the first pair of bytes that differ,
/// compared as `unsigned char`, or 0.
///
/// # Safety
///
/// `a` and `b` must be valid for reads of `n` bytes.
#[inline]
pub unsafe fn memcmp(a: *const u8, b: *const u8, n: usize) -> c_int {
    unsafe { imp::compare_bytes(a, b, n) }
}

/// Find the first `c` in the `n` bytes at `s`, or null.
///
/// # Safety
///
/// `s` must be valid for reads of `n` bytes.
#[inline]
pub unsafe fn memchr(s: *const u8, c: u8, n: usize) -> *const u8 {
    match unsafe { imp::find_byte(s, c, n) } {
        Some(i) => unsafe { s.add(i) },
        None => null(),
    }
}

/// Find the last `c` in the `n` bytes at `s`, or null.
///
/// # Safety
///
/// `s` must be valid for reads of `n` bytes.
#[inline]
pub unsafe fn memrchr(s: *const u8, c: u8, n: usize) -> *const u8 {
    match unsafe { imp::find_byte_rev(s, c, n) } {
        Some(i) => unsafe { s.add(i) },
        None => null(),
    }
}

/// Copy bytes from `src` to `dst`, stopping after the first `c` or after `n`
/// bytes, whichever comes first.
///
/// Returns a pointer to the byte in `dst` just past the copy of `c`, or null
/// if `c` wasn't found in the first `n` bytes of `src`.
///
/// # Safety
///
/// `src` must be valid for reads and `dst` for writes of `n` bytes, and the
/// two regions must not overlap.
#[inline]
pub unsafe fn memccpy(dst: *mut u8, src: *const u8, c: u8, n: usize) -> *mut u8 {
    match unsafe { imp::find_byte(src, c, n) } {
        Some(i) => unsafe {
            imp::copy_forward(dst, src, i + 1);
            dst.add(i + 1)
        },
        None => {
            unsafe { imp::copy_forward(dst, src, n) };
            null_mut()
        }
    }
}

/// Find the first occurrence of the `needle_len` bytes at `needle` within
/// the `haystack_len` bytes at `haystack`, or null.
///
/// An empty needle is found at the start of the haystack.
///
/// # Safety
///
/// `haystack` must be valid for reads of `haystack_len` bytes and `needle`
/// for reads of `needle_len` bytes.
pub unsafe fn memmem(
    haystack: *const u8,
    haystack_len: usize,
    needle: *const u8,
    needle_len: usize,
) -> *const u8 {
    if needle_len == 0 {
        return haystack;
    }
    if needle_len > haystack_len {
        return null();
    }

    let first = unsafe { *needle };
    let last_start = haystack_len - needle_len;
    let mut i = 0;
    while i <= last_start {
        // Skip ahead to the next candidate position for the first byte.
        match unsafe { imp::find_byte(haystack.add(i), first, last_start - i + 1) } {
            None => break,
            Some(skip) => i += skip,
        }
        let rest = unsafe { imp::compare_bytes(haystack.add(i + 1), needle.add(1), needle_len - 1) };
        if rest == 0 {
            return unsafe { haystack.add(i) };
        }
        i += 1;
    }
    null()
}

/// Exchange the `n` bytes at `a` with the `n` bytes at `b`.
///
/// # Safety
///
/// `a` and `b` must be valid for reads and writes of `n` bytes, and the two
/// regions must not overlap.
#[inline]
pub unsafe fn memswap(a: *mut u8, b: *mut u8, n: usize) {
    unsafe { imp::swap_bytes(a, b, n) }
}
