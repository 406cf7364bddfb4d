// This file is part of raw-vector.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{
    error::Error,
    transfer::{Moving, Transfer},
    vec::Vector,
};

impl<T, S: Transfer<T>> Vector<T, S> {
    /// Removes the element at `index`, shifting `(index, len)` one slot left.
    ///
    /// Returns `index`, which now addresses the element that followed the
    /// removed one (or equals `len` if the last element was removed).
    /// Capacity is unchanged.
    ///
    /// With [`Cloning`](crate::Cloning) the shift clone-assigns each element
    /// into its left neighbour; such clones must not panic. If one does, the
    /// length is unchanged and some elements may be duplicates; nothing is
    /// leaked or dropped twice.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len`.
    #[track_caller]
    pub fn erase(&mut self, index: usize) -> usize {
        let len = self.len;
        assert!(index < len, "erase index (is {index}) should be < len (is {len})");
        self.erase_unchecked(index);
        index
    }

    /// Fallible form of [`erase`](Self::erase): [`Error::OutOfBounds`] if
    /// `index >= len`.
    pub fn try_erase(&mut self, index: usize) -> Result<usize, Error> {
        if index >= self.len {
            return Err(Error::OutOfBounds);
        }
        self.erase_unchecked(index);
        Ok(index)
    }

    fn erase_unchecked(&mut self, index: usize) {
        let len = self.len;
        // SAFETY: `index < len` was checked by the caller and `[0, len)` is
        // live.
        let vacated = unsafe { S::close_gap(self.buf.as_mut_ptr(), index, len) };
        self.len = len - 1;
        drop(vacated);
    }
}

impl<T> Vector<T, Moving> {
    /// Removes and returns the element at `index`, shifting the tail left.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len`.
    #[track_caller]
    pub fn remove(&mut self, index: usize) -> T {
        let len = self.len;
        assert!(index < len, "removal index (is {index}) should be < len (is {len})");
        // SAFETY: `index < len` and `[0, len)` is live.
        let out = unsafe { <Moving as Transfer<T>>::close_gap(self.buf.as_mut_ptr(), index, len) };
        self.len = len - 1;
        out
    }
}
