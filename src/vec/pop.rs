// This file is part of raw-vector.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::vec::Vector;

impl<T, S> Vector<T, S> {
    /// Removes the last element and returns it, or `None` if empty.
    #[inline]
    pub fn pop(&mut self) -> Option<T> {
        if self.len == 0 {
            None
        } else {
            self.len -= 1;
            // SAFETY: before the decrement `[0, old_len)` was live, so the old
            // last slot holds a value; it is now outside the live range and
            // its ownership moves to the caller.
            Some(unsafe { self.buf.as_ptr().add(self.len).read() })
        }
    }

    /// Drops the last element. No-op when empty.
    #[inline]
    pub fn pop_back(&mut self) {
        drop(self.pop());
    }
}
