//! Call the C ABI definitions through their unmangled symbols.

#![cfg(feature = "export-symbols")]

use core::ffi::{c_int, c_void};
use core::ptr::null_mut;

// Link the definitions; nothing else here names the crate.
use rawmem as _;

unsafe extern "C" {
    fn memset(dst: *mut c_void, c: c_int, n: usize) -> *mut c_void;
    fn memchr(s: *const c_void, c: c_int, n: usize) -> *mut c_void;
    fn memrchr(s: *const c_void, c: c_int, n: usize) -> *mut c_void;
    fn memccpy(dst: *mut c_void, src: *const c_void, c: c_int, n: usize) -> *mut c_void;
    fn memmem(haystack: *const c_void, n: usize, needle: *const c_void, m: usize) -> *mut c_void;
    fn memswap(m1: *mut c_void, m2: *mut c_void, n: usize);
    fn memcmp(s1: *const c_void, s2: *const c_void, n: usize) -> c_int;
}

#[test]
fn byte_arguments_are_truncated_to_unsigned_char() {
    let buf = *b"a\x62b\x62c";
    let s = buf.as_ptr().cast::<c_void>();
    unsafe {
        assert_eq!(memchr(s, 0x162, buf.len()), s.add(1).cast_mut());
        assert_eq!(memrchr(s, 0x162, buf.len()), s.add(3).cast_mut());
        assert_eq!(memrchr(s, -0x9e, buf.len()), s.add(3).cast_mut());
        assert_eq!(memchr(s, 0x100, buf.len()), null_mut());
    }

    let mut dst = [0u8; 8];
    let r = unsafe { memset(dst.as_mut_ptr().cast(), 0x1ff, 5) };
    assert_eq!(r, dst.as_mut_ptr().cast());
    assert_eq!(dst, [0xff, 0xff, 0xff, 0xff, 0xff, 0, 0, 0]);
}

#[test]
fn memccpy_stops_after_the_byte() {
    let src = *b"key=value";
    let mut dst = [b'.'; 9];
    let r = unsafe { memccpy(dst.as_mut_ptr().cast(), src.as_ptr().cast(), c_int::from(b'=') + 0x300, 9) };
    assert_eq!(r, unsafe { dst.as_mut_ptr().add(4) }.cast());
    assert_eq!(&dst, b"key=.....");

    let r = unsafe { memccpy(dst.as_mut_ptr().cast(), src.as_ptr().cast(), c_int::from(b'#'), 9) };
    assert_eq!(r, null_mut());
    assert_eq!(dst, src);
}

#[test]
fn memmem_and_memcmp() {
    let hay = b"abcabd";
    unsafe {
        let h = hay.as_ptr().cast::<c_void>();
        assert_eq!(memmem(h, 6, b"abd".as_ptr().cast(), 3), h.add(3).cast_mut());
        assert_eq!(memmem(h, 6, b"abe".as_ptr().cast(), 3), null_mut());
        assert_eq!(memmem(h, 6, b"".as_ptr().cast(), 0), h.cast_mut());
        assert!(memcmp(h, b"abcabc".as_ptr().cast(), 6) > 0);
        assert_eq!(memcmp(h, b"abcabd".as_ptr().cast(), 6), 0);
    }
}

#[test]
fn memswap_exchanges_regions() {
    let mut a: Vec<u8> = (0..40).collect();
    let mut b: Vec<u8> = (100..140).collect();
    unsafe { memswap(a.as_mut_ptr().add(3).cast(), b.as_mut_ptr().add(3).cast(), 30) };
    assert_eq!(&a[..3], &[0, 1, 2]);
    assert_eq!(&a[3..33], &(103..133).collect::<Vec<u8>>()[..]);
    assert_eq!(&b[3..33], &(3..33).collect::<Vec<u8>>()[..]);
    assert_eq!(&b[33..], &(133..140).collect::<Vec<u8>>()[..]);
}
