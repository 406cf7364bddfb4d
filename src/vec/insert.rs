// This file is part of raw-vector.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{
    buffer::RawBuffer,
    error::Error,
    slots::{DropRange, construct},
    transfer::Transfer,
    vec::Vector,
};

impl<T, S: Transfer<T>> Vector<T, S> {
    /// Inserts `value` at `index`, shifting `[index, len)` one slot right.
    /// Returns `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index > len`, or on capacity overflow.
    #[inline]
    #[track_caller]
    pub fn insert(&mut self, index: usize, value: T) -> usize {
        self.emplace(index, move || value)
    }

    /// Inserts the value produced by `f` at `index` and returns `index`.
    ///
    /// The value is built before any existing element moves, so a panic in
    /// `f` leaves the vector unchanged.
    ///
    /// # Panics
    ///
    /// Panics if `index > len`, or on capacity overflow.
    #[track_caller]
    pub fn emplace<F: FnOnce() -> T>(&mut self, index: usize, f: F) -> usize {
        let len = self.len;
        assert!(
            index <= len,
            "insertion index (is {index}) should be <= len (is {len})"
        );
        self.try_emplace_at(index, f).unwrap_or_else(|e| e.raise());
        index
    }

    /// Fallible form of [`insert`](Self::insert).
    ///
    /// Returns [`Error::OutOfBounds`] if `index > len` and reports capacity
    /// and allocation errors; on error the vector is unchanged and `value` is
    /// dropped.
    pub fn try_insert(&mut self, index: usize, value: T) -> Result<usize, Error> {
        if index > self.len {
            return Err(Error::OutOfBounds);
        }
        self.try_emplace_at(index, move || value)?;
        Ok(index)
    }

    /// Places the value from `f` at `index <= len`, growing if full.
    pub(crate) fn try_emplace_at<F: FnOnce() -> T>(
        &mut self,
        index: usize,
        f: F,
    ) -> Result<(), Error> {
        debug_assert!(index <= self.len);
        if self.len < self.capacity() {
            let value = f();
            let len = self.len;
            let base = self.buf.as_mut_ptr();
            // SAFETY: `len < capacity`, so slot `len` is spare; `[0, len)` is
            // live and `index <= len`.
            unsafe {
                if index == len {
                    construct(base.add(len), value);
                } else {
                    S::open_gap(base, index, len, value);
                }
            }
            self.len = len + 1;
            return Ok(());
        }
        self.try_grow_emplace(index, f)
    }

    /// Reallocating path: the new element is built in the fresh buffer first,
    /// the old elements are transferred around it afterwards.
    #[cold]
    fn try_grow_emplace<F: FnOnce() -> T>(&mut self, index: usize, f: F) -> Result<(), Error> {
        let new_capacity = self.grown_capacity(1)?;
        let mut fresh: RawBuffer<T> = RawBuffer::try_with_capacity(new_capacity)?;
        let dst = fresh.as_mut_ptr();

        let value = f();
        // SAFETY: `index <= len < new_capacity`; every slot of `fresh` is
        // uninitialized and the prefix/suffix destinations skip `index`.
        unsafe {
            construct(dst.add(index), value);
            let placed = DropRange::covering(dst, index, index + 1);
            self.transfer_around(dst, index, 1);
            placed.disarm();
            self.replace_buffer(fresh, self.len + 1);
        }
        Ok(())
    }
}
