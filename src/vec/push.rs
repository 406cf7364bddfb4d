// This file is part of raw-vector.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{error::Error, slots::construct, transfer::Transfer, vec::Vector};

impl<T, S: Transfer<T>> Vector<T, S> {
    /// Appends `value`, doubling the capacity (`max(1, 2 * len)`) when full.
    ///
    /// # Panics
    ///
    /// Panics on capacity overflow.
    #[inline]
    #[track_caller]
    pub fn push(&mut self, value: T) {
        self.emplace_back(move || value);
    }

    /// Appends `value`; reports capacity overflow or allocation failure
    /// instead of panicking. On error `value` is dropped and the vector is
    /// unchanged.
    #[inline]
    pub fn try_push(&mut self, value: T) -> Result<(), Error> {
        let len = self.len;
        self.try_emplace_at(len, move || value)
    }

    /// Appends the value produced by `f` and returns a reference to it.
    ///
    /// When the vector is full, `f` runs after the new buffer is allocated
    /// and before any element is transferred; a panic in `f` leaves the
    /// vector unchanged.
    #[track_caller]
    pub fn emplace_back<F: FnOnce() -> T>(&mut self, f: F) -> &mut T {
        let len = self.len;
        self.try_emplace_at(len, f).unwrap_or_else(|e| e.raise());
        // SAFETY: the slot at `len` was just constructed and `len < capacity`.
        unsafe { self.buf.element_at_mut(len) }
    }
}

impl<T, S> Vector<T, S> {
    /// Appends `value` without checking capacity.
    ///
    /// # Safety
    ///
    /// `len < capacity` must hold.
    #[inline]
    pub(crate) unsafe fn push_unchecked(&mut self, value: T) {
        // SAFETY: the caller guarantees a spare slot at `len`.
        unsafe { construct(self.buf.address_at_mut(self.len), value) };
        self.len += 1;
    }
}
