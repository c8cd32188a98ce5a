//! C ABI definitions of the `mem` functions.

use core::ffi::{c_int, c_void};

use crate::mem;

#[unsafe(no_mangle)]
unsafe extern "C" fn memcpy(dst: *mut c_void, src: *const c_void, n: usize) -> *mut c_void {
    unsafe { mem::memcpy(dst.cast(), src.cast(), n).cast() }
}

#[unsafe(no_mangle)]
unsafe extern "C" fn memmove(dst: *mut c_void, src: *const c_void, n: usize) -> *mut c_void {
    unsafe { mem::memmove(dst.cast(), src.cast(), n).cast() }
}

#[unsafe(no_mangle)]
unsafe extern "C" fn memset(dst: *mut c_void, c: c_int, n: usize) -> *mut c_void {
    unsafe { mem::memset(dst.cast(), c as u8, n).cast() }
}

#[unsafe(no_mangle)]
unsafe extern "C" fn memcmp(s1: *const c_void, s2: *const c_void, n: usize) -> c_int {
    unsafe { mem::memcmp(s1.cast(), s2.cast(), n) }
}

#[unsafe(no_mangle)]
unsafe extern "C" fn memchr(s: *const c_void, c: c_int, n: usize) -> *mut c_void {
    unsafe { mem::memchr(s.cast(), c as u8, n).cast_mut().cast() }
}

// GNU extension
#[unsafe(no_mangle)]
unsafe extern "C" fn memrchr(s: *const c_void, c: c_int, n: usize) -> *mut c_void {
    unsafe { mem::memrchr(s.cast(), c as u8, n).cast_mut().cast() }
}

#[unsafe(no_mangle)]
unsafe extern "C" fn memccpy(dst: *mut c_void, src: *const c_void, c: c_int, n: usize) -> *mut c_void {
    unsafe { mem::memccpy(dst.cast(), src.cast(), c as u8, n).cast() }
}

// GNU extension
#[unsafe(no_mangle)]
unsafe extern "C" fn memmem(
    haystack: *const c_void,
    n: usize,
    needle: *const c_void,
    m: usize,
) -> *mut c_void {
    unsafe { mem::memmem(haystack.cast(), n, needle.cast(), m).cast_mut().cast() }
}

// Not in any standard; klibc and a few hobby kernels provide it.
#[unsafe(no_mangle)]
unsafe extern "C" fn memswap(m1: *mut c_void, m2: *mut c_void, n: usize) {
    unsafe { mem::memswap(m1.cast(), m2.cast(), n) }
}
