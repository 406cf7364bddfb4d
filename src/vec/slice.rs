// This file is part of raw-vector.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::vec::Vector;

impl<T, S> Vector<T, S> {
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: by invariant `[0, len)` is live and lies inside the buffer;
        // the pointer is non-null and aligned even when nothing is allocated.
        unsafe { core::slice::from_raw_parts(self.buf.as_ptr(), self.len) }
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        // SAFETY: as for `as_slice`; `&mut self` makes the borrow exclusive.
        unsafe { core::slice::from_raw_parts_mut(self.buf.as_mut_ptr(), self.len) }
    }

    /// Returns a raw pointer to the first slot.
    ///
    /// Only the first `len` slots hold live values. The pointer is dangling
    /// (but non-null and aligned) while nothing is allocated, and it is
    /// invalidated by any reallocation.
    #[inline]
    pub const fn as_ptr(&self) -> *const T {
        self.buf.as_ptr()
    }

    /// Returns a mutable raw pointer to the first slot.
    ///
    /// Writing past `len` does not change the logical contents.
    #[inline]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.buf.as_mut_ptr()
    }
}
