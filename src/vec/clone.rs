// This file is part of raw-vector.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::vec::Vector;

impl<T: Clone, S> Clone for Vector<T, S> {
    /// Allocates exactly `len` slots and clones each element in order.
    ///
    /// If a clone panics, the clones already made are dropped.
    fn clone(&self) -> Self {
        let mut out = Self::with_capacity(self.len);
        for item in self.iter() {
            // SAFETY: `out` has exactly `self.len` slots and receives at most
            // `self.len` elements.
            unsafe { out.push_unchecked(item.clone()) };
        }
        out
    }

    /// Copy-assigns `source` into `self`.
    ///
    /// If `source` does not fit in the current capacity, a full clone is
    /// built and swapped in, so `self` is unchanged if a clone panics.
    /// Otherwise the shared prefix is clone-assigned in place, then the
    /// remaining source elements are cloned in or the excess old elements
    /// are dropped.
    fn clone_from(&mut self, source: &Self) {
        if source.len > self.capacity() {
            let mut fresh = source.clone();
            self.swap(&mut fresh);
            return;
        }

        let shared = self.len.min(source.len);
        for (dst, src) in self.as_mut_slice()[..shared]
            .iter_mut()
            .zip(&source.as_slice()[..shared])
        {
            dst.clone_from(src);
        }
        if source.len < self.len {
            self.truncate(source.len);
        } else {
            for item in &source.as_slice()[shared..] {
                // SAFETY: `source.len <= capacity`, so every remaining source
                // element has a spare slot.
                unsafe { self.push_unchecked(item.clone()) };
            }
        }
    }
}
