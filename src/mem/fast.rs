//! `memcpy` etc. implementations with performance optimizations.
//!
//! The copy and fill routines follow the structure of src/mem/impls.rs in
//! Rust's [compiler_builtins library]: handle the unaligned head a byte at a
//! time, move the bulk a word at a time with `dst` aligned, then finish the
//! tail a byte at a time. The scans use the classic "does this word contain
//! a zero byte" test on `word ^ repeated(c)`.
//!
//! Nothing here may use `core::ptr::copy`, `copy_nonoverlapping`, or
//! `write_bytes`, since those can lower to calls to the very functions this
//! implements.
//!
//! [compiler_builtins library]: https://github.com/rust-lang/compiler-builtins

use core::ffi::c_int;
use core::mem::size_of;

const WORD_SIZE: usize = size_of::<usize>();
const WORD_MASK: usize = WORD_SIZE - 1;

// If the number of bytes involved exceed this threshold we will opt in
// word-wise copy. The value here selected is max(2 * WORD_SIZE, 16):
// * We need at least 2 * WORD_SIZE bytes to guarantee that at least 1 word
//   will be copied through word-wise copy.
// * The word-wise copy logic has some fixed overhead, so on 32-bit platforms
//   require at least 16 bytes before taking that path.
const WORD_COPY_THRESHOLD: usize = if 2 * WORD_SIZE > 16 {
    2 * WORD_SIZE
} else {
    16
};

const LO: usize = usize::from_ne_bytes([0x01; WORD_SIZE]);
const HI: usize = usize::from_ne_bytes([0x80; WORD_SIZE]);

#[inline(always)]
const fn repeat_byte(b: u8) -> usize {
    usize::from_ne_bytes([b; WORD_SIZE])
}

#[inline(always)]
const fn contains_zero_byte(x: usize) -> bool {
    x.wrapping_sub(LO) & !x & HI != 0
}

#[inline(always)]
unsafe fn copy_forward_bytes(mut dst: *mut u8, mut src: *const u8, n: usize) {
    unsafe {
        let dst_end = dst.add(n);
        while dst < dst_end {
            *dst = *src;
            dst = dst.add(1);
            src = src.add(1);
        }
    }
}

/// `dst` is word-aligned; `src` may not be.
#[inline(always)]
unsafe fn copy_forward_words(dst: *mut u8, src: *const u8, n: usize) {
    unsafe {
        let mut dst_usize = dst.cast::<usize>();
        let mut src_usize = src.cast::<usize>();
        let dst_end = dst.add(n).cast::<usize>();

        if src.addr() & WORD_MASK == 0 {
            while dst_usize < dst_end {
                *dst_usize = *src_usize;
                dst_usize = dst_usize.add(1);
                src_usize = src_usize.add(1);
            }
        } else {
            while dst_usize < dst_end {
                *dst_usize = src_usize.read_unaligned();
                dst_usize = dst_usize.add(1);
                src_usize = src_usize.add(1);
            }
        }
    }
}

pub(super) unsafe fn copy_forward(mut dst: *mut u8, mut src: *const u8, mut n: usize) {
    unsafe {
        if n >= WORD_COPY_THRESHOLD {
            // Align dst.
            // Because of n >= 2 * WORD_SIZE, dst_misalignment < n
            let dst_misalignment = dst.addr().wrapping_neg() & WORD_MASK;
            copy_forward_bytes(dst, src, dst_misalignment);
            dst = dst.add(dst_misalignment);
            src = src.add(dst_misalignment);
            n -= dst_misalignment;

            let n_words = n & !WORD_MASK;
            copy_forward_words(dst, src, n_words);
            dst = dst.add(n_words);
            src = src.add(n_words);
            n -= n_words;
        }
        copy_forward_bytes(dst, src, n);
    }
}

/// `dst` and `src` point just past the end of the regions.
#[inline(always)]
unsafe fn copy_backward_bytes(mut dst: *mut u8, mut src: *const u8, n: usize) {
    unsafe {
        let dst_start = dst.sub(n);
        while dst_start < dst {
            dst = dst.sub(1);
            src = src.sub(1);
            *dst = *src;
        }
    }
}

/// `dst` (the end) is word-aligned; `src` may not be.
#[inline(always)]
unsafe fn copy_backward_words(dst: *mut u8, src: *const u8, n: usize) {
    unsafe {
        let mut dst_usize = dst.cast::<usize>();
        let mut src_usize = src.cast::<usize>();
        let dst_start = dst.sub(n).cast::<usize>();

        if src.addr() & WORD_MASK == 0 {
            while dst_start < dst_usize {
                dst_usize = dst_usize.sub(1);
                src_usize = src_usize.sub(1);
                *dst_usize = *src_usize;
            }
        } else {
            while dst_start < dst_usize {
                dst_usize = dst_usize.sub(1);
                src_usize = src_usize.sub(1);
                *dst_usize = src_usize.read_unaligned();
            }
        }
    }
}

pub(super) unsafe fn copy_backward(dst: *mut u8, src: *const u8, mut n: usize) {
    unsafe {
        // The following backward copy helper functions use the pointers past
        // the end as their inputs instead of pointers to the start!
        let mut dst = dst.add(n);
        let mut src = src.add(n);

        if n >= WORD_COPY_THRESHOLD {
            // Align dst.
            // Because of n >= 2 * WORD_SIZE, dst_misalignment < n
            let dst_misalignment = dst.addr() & WORD_MASK;
            copy_backward_bytes(dst, src, dst_misalignment);
            dst = dst.sub(dst_misalignment);
            src = src.sub(dst_misalignment);
            n -= dst_misalignment;

            let n_words = n & !WORD_MASK;
            copy_backward_words(dst, src, n_words);
            dst = dst.sub(n_words);
            src = src.sub(n_words);
            n -= n_words;
        }
        copy_backward_bytes(dst, src, n);
    }
}

#[inline(always)]
unsafe fn set_bytes_bytes(mut s: *mut u8, c: u8, n: usize) {
    unsafe {
        let end = s.add(n);
        while s < end {
            *s = c;
            s = s.add(1);
        }
    }
}

/// `s` is word-aligned and `n` is a multiple of the word size.
#[inline(always)]
unsafe fn set_bytes_words(s: *mut u8, c: u8, n: usize) {
    unsafe {
        let broadcast = repeat_byte(c);
        let mut s_usize = s.cast::<usize>();
        let end = s.add(n).cast::<usize>();
        while s_usize < end {
            *s_usize = broadcast;
            s_usize = s_usize.add(1);
        }
    }
}

pub(super) unsafe fn set_bytes(mut s: *mut u8, c: u8, mut n: usize) {
    unsafe {
        if n >= WORD_COPY_THRESHOLD {
            // Align s.
            // Because of n >= 2 * WORD_SIZE, misalignment < n
            let misalignment = s.addr().wrapping_neg() & WORD_MASK;
            set_bytes_bytes(s, c, misalignment);
            s = s.add(misalignment);
            n -= misalignment;

            let n_words = n & !WORD_MASK;
            set_bytes_words(s, c, n_words);
            s = s.add(n_words);
            n -= n_words;
        }
        set_bytes_bytes(s, c, n);
    }
}

pub(super) unsafe fn compare_bytes(a: *const u8, b: *const u8, n: usize) -> c_int {
    unsafe {
        let mut i = 0;
        // Skip over equal words; the byte loop below pins down the first
        // differing byte within the word that stopped us.
        while i + WORD_SIZE <= n {
            let wa = a.add(i).cast::<usize>().read_unaligned();
            let wb = b.add(i).cast::<usize>().read_unaligned();
            if wa != wb {
                break;
            }
            i += WORD_SIZE;
        }
        while i < n {
            let x = *a.add(i);
            let y = *b.add(i);
            if x != y {
                return c_int::from(x) - c_int::from(y);
            }
            i += 1;
        }
        0
    }
}

pub(super) unsafe fn find_byte(s: *const u8, c: u8, n: usize) -> Option<usize> {
    unsafe {
        let broadcast = repeat_byte(c);
        let mut i = 0;
        while i + WORD_SIZE <= n {
            let word = s.add(i).cast::<usize>().read_unaligned();
            if contains_zero_byte(word ^ broadcast) {
                break;
            }
            i += WORD_SIZE;
        }
        while i < n {
            if *s.add(i) == c {
                return Some(i);
            }
            i += 1;
        }
        None
    }
}

pub(super) unsafe fn find_byte_rev(s: *const u8, c: u8, n: usize) -> Option<usize> {
    unsafe {
        let broadcast = repeat_byte(c);
        let mut i = n;
        while i >= WORD_SIZE {
            let word = s.add(i - WORD_SIZE).cast::<usize>().read_unaligned();
            if contains_zero_byte(word ^ broadcast) {
                break;
            }
            i -= WORD_SIZE;
        }
        while i > 0 {
            i -= 1;
            if *s.add(i) == c {
                return Some(i);
            }
        }
        None
    }
}

pub(super) unsafe fn swap_bytes(a: *mut u8, b: *mut u8, n: usize) {
    unsafe {
        let mut i = 0;
        while i + WORD_SIZE <= n {
            let pa = a.add(i).cast::<usize>();
            let pb = b.add(i).cast::<usize>();
            let tmp = pa.read_unaligned();
            pa.write_unaligned(pb.read_unaligned());
            pb.write_unaligned(tmp);
            i += WORD_SIZE;
        }
        while i < n {
            let tmp = *a.add(i);
            *a.add(i) = *b.add(i);
            *b.add(i) = tmp;
            i += 1;
        }
    }
}
