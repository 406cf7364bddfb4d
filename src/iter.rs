// This file is part of raw-vector.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Iterator support for [`Vector`](crate::Vector).
//!
//! - `IntoIter<T>` yields by value and supports `DoubleEndedIterator`,
//!   `ExactSizeIterator`, and `FusedIterator`. It owns the buffer; elements
//!   not yielded are dropped with it.
//! - `&Vector` and `&mut Vector` iterate as slices.

// Crate imports
use crate::{buffer::RawBuffer, slots::destroy, transfer::Transfer, vec::Vector};

// Core imports
use core::{fmt, iter::FusedIterator, mem::ManuallyDrop};

/// Owned iterator returned by `Vector::into_iter()`.
///
/// Slots `[front, back)` of the buffer are still live; everything outside
/// that window has been yielded or dropped.
pub struct IntoIter<T> {
    buf: RawBuffer<T>,
    front: usize,
    back: usize, // exclusive
}

impl<T> IntoIter<T> {
    /// The elements not yet yielded.
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: `[front, back)` is live and inside the buffer.
        unsafe { core::slice::from_raw_parts(self.buf.as_ptr().add(self.front), self.len()) }
    }

    /// Moves the value out of slot `i`.
    ///
    /// # Safety
    ///
    /// Slot `i` must be live and the caller must already have excluded it
    /// from `[front, back)`.
    #[inline]
    unsafe fn take_slot(&self, i: usize) -> T {
        // SAFETY: forwarded from the caller.
        unsafe { self.buf.as_ptr().add(i).read() }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;
    fn next(&mut self) -> Option<T> {
        if self.front < self.back {
            let i = self.front;
            self.front += 1;
            // SAFETY: `i` was the first live slot and is now excluded.
            Some(unsafe { self.take_slot(i) })
        } else {
            None
        }
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        let rem = self.back - self.front;
        (rem, Some(rem))
    }
    fn nth(&mut self, n: usize) -> Option<T> {
        let rem = self.back - self.front;
        let skip = n.min(rem);
        let start = self.front;
        self.front += skip;
        // SAFETY: `[start, start + skip)` was live and is now excluded.
        unsafe { destroy(self.buf.as_mut_ptr().add(start), skip) };
        self.next()
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<T> {
        if self.front < self.back {
            self.back -= 1;
            // SAFETY: `back` was the last live slot and is now excluded.
            Some(unsafe { self.take_slot(self.back) })
        } else {
            None
        }
    }
    fn nth_back(&mut self, n: usize) -> Option<T> {
        let rem = self.back - self.front;
        let skip = n.min(rem);
        self.back -= skip;
        // SAFETY: `[back, back + skip)` was live and is now excluded.
        unsafe { destroy(self.buf.as_mut_ptr().add(self.back), skip) };
        self.next_back()
    }
}
impl<T> FusedIterator for IntoIter<T> {}
impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T: fmt::Debug> fmt::Debug for IntoIter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoIter").field(&self.as_slice()).finish()
    }
}

impl<T> Drop for IntoIter<T> {
    fn drop(&mut self) {
        let rem = self.back - self.front;
        // SAFETY: the remaining window is live; the buffer frees the storage
        // afterwards.
        unsafe { destroy(self.buf.as_mut_ptr().add(self.front), rem) }
    }
}

impl<'a, T, S> IntoIterator for &'a Vector<T, S> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}
impl<'a, T, S> IntoIterator for &'a mut Vector<T, S> {
    type Item = &'a mut T;
    type IntoIter = core::slice::IterMut<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.as_mut_slice().iter_mut()
    }
}
impl<T, S> IntoIterator for Vector<T, S> {
    type Item = T;
    type IntoIter = IntoIter<T>;
    fn into_iter(self) -> Self::IntoIter {
        let mut this = ManuallyDrop::new(self);
        IntoIter {
            front: 0,
            back: this.len,
            buf: this.buf.take(),
        }
    }
}

impl<T, S: Transfer<T>> FromIterator<T> for Vector<T, S> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut v = Self::new();
        v.extend(iter);
        v
    }
}
