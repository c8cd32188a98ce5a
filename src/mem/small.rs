//! `memcpy` etc. implementations with small code size.
//!
//! This code uses `core::arch::asm!("")` to try to discourage optimizers from
//! vectorizing or pattern-matching these loops.

use core::ffi::c_int;

pub(super) unsafe fn copy_forward(dst: *mut u8, src: *const u8, n: usize) {
    unsafe {
        let mut dst = dst;
        let mut src = src;
        let dst_end = dst.add(n);
        while dst < dst_end {
            *dst = *src;
            dst = dst.add(1);
            src = src.add(1);
            core::arch::asm!("");
        }
    }
}

pub(super) unsafe fn copy_backward(dst: *mut u8, src: *const u8, n: usize) {
    unsafe {
        let dst_start = dst;
        let mut dst = dst.add(n);
        let mut src = src.add(n);
        while dst > dst_start {
            dst = dst.sub(1);
            src = src.sub(1);
            *dst = *src;
            core::arch::asm!("");
        }
    }
}

pub(super) unsafe fn set_bytes(s: *mut u8, c: u8, n: usize) {
    unsafe {
        let mut s = s;
        let end = s.add(n);
        while s < end {
            *s = c;
            s = s.add(1);
            core::arch::asm!("");
        }
    }
}

pub(super) unsafe fn compare_bytes(a: *const u8, b: *const u8, n: usize) -> c_int {
    unsafe {
        let mut i = 0;
        while i < n {
            let x = *a.add(i);
            let y = *b.add(i);
            if x != y {
                return c_int::from(x) - c_int::from(y);
            }
            i += 1;
            core::arch::asm!("");
        }
        0
    }
}

pub(super) unsafe fn find_byte(s: *const u8, c: u8, n: usize) -> Option<usize> {
    unsafe {
        let mut i = 0;
        while i < n {
            if *s.add(i) == c {
                return Some(i);
            }
            i += 1;
            core::arch::asm!("");
        }
        None
    }
}

pub(super) unsafe fn find_byte_rev(s: *const u8, c: u8, n: usize) -> Option<usize> {
    unsafe {
        let mut i = n;
        while i > 0 {
            i -= 1;
            if *s.add(i) == c {
                return Some(i);
            }
            core::arch::asm!("");
        }
        None
    }
}

pub(super) unsafe fn swap_bytes(a: *mut u8, b: *mut u8, n: usize) {
    unsafe {
        let mut i = 0;
        while i < n {
            let tmp = *a.add(i);
            *a.add(i) = *b.add(i);
            *b.add(i) = tmp;
            i += 1;
            core::arch::asm!("");
        }
    }
}
