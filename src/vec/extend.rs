// This file is part of raw-vector.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{transfer::Transfer, vec::Vector};

impl<T, S: Transfer<T>> Extend<T> for Vector<T, S> {
    /// Appends every item, reserving the iterator's lower size bound up
    /// front; the rest grows by doubling.
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        let (lower, _) = iter.size_hint();
        if lower > self.spare_capacity() {
            self.reserve(self.len.saturating_add(lower));
        }
        for item in iter {
            self.push(item);
        }
    }
}

impl<'a, T: Copy + 'a, S: Transfer<T>> Extend<&'a T> for Vector<T, S> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied());
    }
}

impl<T: Clone, S: Transfer<T>> Vector<T, S> {
    /// Clones and appends every element of `src`, growing at most once.
    #[track_caller]
    pub fn extend_from_slice(&mut self, src: &[T]) {
        let needed = self.len.saturating_add(src.len());
        if needed > self.capacity() {
            let target = self
                .grown_capacity(src.len())
                .unwrap_or_else(|e| e.raise());
            self.reserve(target);
        }
        for item in src {
            // SAFETY: capacity was raised to at least `len + src.len()`.
            unsafe { self.push_unchecked(item.clone()) };
        }
    }
}

impl<T: Clone, S: Transfer<T>> From<&[T]> for Vector<T, S> {
    /// Clones `src` into a vector with capacity exactly `src.len()`.
    fn from(src: &[T]) -> Self {
        let mut v = Self::with_capacity(src.len());
        v.extend_from_slice(src);
        v
    }
}

impl<T, S, const N: usize> From<[T; N]> for Vector<T, S> {
    /// Moves the array into a vector with capacity exactly `N`.
    fn from(src: [T; N]) -> Self {
        let mut v = Self::with_capacity(N);
        for item in src {
            // SAFETY: `v` has exactly `N` slots and receives `N` elements.
            unsafe { v.push_unchecked(item) };
        }
        v
    }
}
