//! Safe slice versions of the [`mem`](crate::mem) functions.
//!
//! Each function takes the C byte count `n` but never reads or writes past
//! the end of a slice: the count is clamped to the lengths involved. Where
//! the C function returns a pointer, these return an index or a count.

use core::cmp::Ordering;

use crate::mem;

/// Copy `min(n, dst.len(), src.len())` bytes from `src` to `dst`, returning
/// the number of bytes copied.
pub fn memcpy(dst: &mut [u8], src: &[u8], n: usize) -> usize {
    let count = n.min(dst.len()).min(src.len());
    // SAFETY: both slices are valid for `count` bytes, and a `&mut` can't
    // overlap a `&`.
    unsafe { mem::memcpy(dst.as_mut_ptr(), src.as_ptr(), count) };
    count
}

/// Copy up to `n` bytes within `buf` from offset `src` to offset `dst`, like
/// [`slice::copy_within`]. The ranges may overlap.
///
/// Returns the number of bytes copied, which is `n` clamped so that neither
/// range runs past the end of `buf`.
pub fn memmove(buf: &mut [u8], src: usize, dst: usize, n: usize) -> usize {
    let len = buf.len();
    let count = n
        .min(len.saturating_sub(src))
        .min(len.saturating_sub(dst));
    if count == 0 {
        return 0;
    }
    let base = buf.as_mut_ptr();
    // SAFETY: `src + count` and `dst + count` are both at most `len`.
    unsafe { mem::memmove(base.add(dst), base.add(src), count) };
    count
}

/// Fill `min(n, dst.len())` bytes of `dst` with `fill`, returning the number
/// of bytes set.
pub fn memset(dst: &mut [u8], fill: u8, n: usize) -> usize {
    let count = n.min(dst.len());
    // SAFETY: `dst` is valid for `count` bytes.
    unsafe { mem::memset(dst.as_mut_ptr(), fill, count) };
    count
}

/// Compare the first `min(n, a.len(), b.len())` bytes of `a` and `b`.
pub fn memcmp(a: &[u8], b: &[u8], n: usize) -> Ordering {
    let count = n.min(a.len()).min(b.len());
    // SAFETY: both slices are valid for `count` bytes.
    let r = unsafe { mem::memcmp(a.as_ptr(), b.as_ptr(), count) };
    r.cmp(&0)
}

/// Find the index of the first `c` in the first `n` bytes of `s`.
pub fn memchr(s: &[u8], c: u8, n: usize) -> Option<usize> {
    let count = n.min(s.len());
    // SAFETY: `s` is valid for `count` bytes.
    let p = unsafe { mem::memchr(s.as_ptr(), c, count) };
    offset_of(s.as_ptr(), p)
}

/// Find the index of the last `c` in the first `n` bytes of `s`.
pub fn memrchr(s: &[u8], c: u8, n: usize) -> Option<usize> {
    let count = n.min(s.len());
    // SAFETY: `s` is valid for `count` bytes.
    let p = unsafe { mem::memrchr(s.as_ptr(), c, count) };
    offset_of(s.as_ptr(), p)
}

/// Copy bytes from `src` to `dst` up to and including the first `c`, looking
/// at no more than `min(n, dst.len(), src.len())` bytes.
///
/// Returns the index in `dst` just past the copied `c`, or `None` if `c`
/// wasn't found (in which case every byte looked at was copied).
pub fn memccpy(dst: &mut [u8], src: &[u8], c: u8, n: usize) -> Option<usize> {
    let count = n.min(dst.len()).min(src.len());
    // SAFETY: both slices are valid for `count` bytes and can't overlap.
    let p = unsafe { mem::memccpy(dst.as_mut_ptr(), src.as_ptr(), c, count) };
    offset_of(dst.as_ptr(), p.cast_const())
}

/// Find the index of the first occurrence of `needle` within `haystack`.
///
/// An empty needle is found at index 0.
pub fn memmem(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    // SAFETY: both slices are valid for their lengths.
    let p = unsafe {
        mem::memmem(
            haystack.as_ptr(),
            haystack.len(),
            needle.as_ptr(),
            needle.len(),
        )
    };
    offset_of(haystack.as_ptr(), p)
}

/// Exchange the first `min(n, a.len(), b.len())` bytes of `a` and `b`,
/// returning the number of bytes exchanged.
pub fn memswap(a: &mut [u8], b: &mut [u8], n: usize) -> usize {
    let count = n.min(a.len()).min(b.len());
    // SAFETY: both slices are valid for `count` bytes, and two `&mut`s can't
    // overlap.
    unsafe { mem::memswap(a.as_mut_ptr(), b.as_mut_ptr(), count) };
    count
}

#[inline]
fn offset_of(base: *const u8, p: *const u8) -> Option<usize> {
    if p.is_null() {
        None
    } else {
        Some(p.addr() - base.addr())
    }
}
