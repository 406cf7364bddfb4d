// This file is part of raw-vector.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{
    buffer::RawBuffer,
    slots::{destroy, fill_with},
    transfer::Transfer,
    vec::Vector,
};

impl<T, S> Vector<T, S> {
    /// Drops `[new_len, len)`; no-op if `new_len >= len`. Capacity is kept.
    pub fn truncate(&mut self, new_len: usize) {
        if new_len >= self.len {
            return;
        }
        let tail = self.len - new_len;
        // `len` is updated before any destructor runs.
        self.len = new_len;
        // SAFETY: `[new_len, old_len)` was live and is now outside the live
        // range.
        unsafe { destroy(self.buf.as_mut_ptr().add(new_len), tail) }
    }

    /// Drops every element. Capacity is kept.
    #[inline]
    pub fn clear(&mut self) {
        self.truncate(0);
    }
}

impl<T, S: Transfer<T>> Vector<T, S> {
    /// Resizes to `new_len`, default-constructing new elements.
    ///
    /// See [`resize_with`](Self::resize_with).
    #[track_caller]
    pub fn resize(&mut self, new_len: usize)
    where
        T: Default,
    {
        self.resize_with(new_len, T::default);
    }

    /// Resizes to `new_len`, building new elements with `f`.
    ///
    /// - Shrinking drops `[new_len, len)`.
    /// - Growing within capacity constructs the tail in place.
    /// - Growing past capacity allocates exactly `new_len` slots, builds the
    ///   tail there first and then transfers the existing elements.
    ///
    /// If `f` panics, the values it already produced are dropped and the
    /// existing elements are left as they were.
    #[track_caller]
    pub fn resize_with<F: FnMut() -> T>(&mut self, new_len: usize, f: F) {
        let len = self.len;
        if new_len <= len {
            self.truncate(new_len);
            return;
        }

        if new_len <= self.capacity() {
            // SAFETY: `[len, new_len)` is spare capacity.
            let built = unsafe { fill_with(self.buf.as_mut_ptr(), len, new_len, f) };
            built.disarm();
            self.len = new_len;
            return;
        }

        let mut fresh: RawBuffer<T> = RawBuffer::with_capacity(new_len);
        let dst = fresh.as_mut_ptr();
        // SAFETY: `fresh` has `new_len` uninitialized slots; the tail is built
        // into `[len, new_len)` and the transfer fills `[0, len)`.
        unsafe {
            let tail = fill_with(dst, len, new_len, f);
            S::transfer(self.buf.as_ptr(), dst, len);
            tail.disarm();
            self.replace_buffer(fresh, new_len);
        }
    }
}
