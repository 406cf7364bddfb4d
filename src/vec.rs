// This file is part of raw-vector.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The `Vector` type and its inherent API.
//!
//! `Vector<T, S>` owns one [`RawBuffer<T>`] and a logical length. Slots
//! `[0, len)` hold live elements; slots `[len, capacity)` are uninitialized.
//! Growth replaces the buffer as a whole; every other mutation works in place.

mod clone;
mod erase;
mod extend;
mod insert;
mod new;
mod pop;
mod push;
mod reserve;
mod resize;
mod slice;

// Crate imports
use crate::{
    buffer::RawBuffer,
    slots::destroy,
    transfer::{Moving, Transfer, TransferKind},
};

// Core imports
use core::{
    borrow::{Borrow, BorrowMut},
    fmt,
    hash::{Hash, Hasher},
    marker::PhantomData,
    mem,
    ops::{Deref, DerefMut},
};

/// A growable, contiguous vector built on raw, uninitialized memory.
///
/// `Vector<T, S>` stores its elements in a heap [`RawBuffer<T>`] and tracks a
/// logical length `len <= capacity`:
///
/// - elements live in slots `[0, len)`; the rest of the buffer is
///   uninitialized;
/// - appending grows the buffer by doubling (`max(1, 2 * len)`), while
///   [`reserve`](Vector::reserve), [`resize`](Vector::resize) and
///   [`with_len`](Vector::with_len) allocate exactly what they are asked for;
/// - positions are slot indices in `0..=len`.
///
/// # Transfer strategy
///
/// The second parameter selects how elements are relocated when the buffer
/// is replaced and how they are shifted by `insert`/`erase`. It is fixed by
/// the type, never chosen per call:
///
/// - [`Moving`] (default): bitwise relocation, available for every `T`.
/// - [`Cloning`](crate::Cloning): clone-based, `T: Clone` only. Growth keeps
///   the original elements untouched until the new buffer is complete, so a
///   panicking `clone` leaves the vector unchanged.
///
/// # Failure model
///
/// - Index and position violations panic.
/// - Capacity overflow panics and allocation failure goes through
///   [`handle_alloc_error`](alloc::alloc::handle_alloc_error); the `try_*`
///   variants report both as [`Error`](crate::Error) and leave the vector
///   unchanged.
/// - An element constructor that panics during construction, growth or
///   insertion never leaks and never double-drops: values built during the
///   failed call are dropped before the panic propagates.
///
/// # Examples
///
/// ```rust
/// use raw_vector::Vector;
///
/// let mut v: Vector<i32> = Vector::new();
/// v.push(1);
/// v.push(2);
/// v.push(3);
/// assert_eq!(v.capacity(), 4);
///
/// v.insert(1, 99);
/// assert_eq!(v, [1, 99, 2, 3]);
///
/// v.erase(0);
/// v.pop_back();
/// assert_eq!(v.as_slice(), &[99, 2]);
/// ```
pub struct Vector<T, S = Moving> {
    pub(crate) buf: RawBuffer<T>,
    pub(crate) len: usize,
    pub(crate) _strategy: PhantomData<S>,
}

impl<T, S> Vector<T, S> {
    /// Returns the number of slots in the current buffer.
    #[inline]
    pub const fn capacity(&self) -> usize {
        self.buf.capacity()
    }

    /// Returns the number of live elements.
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if `len == 0`.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns `capacity - len`, the number of elements that fit without
    /// reallocating.
    #[inline]
    pub const fn spare_capacity(&self) -> usize {
        self.buf.capacity() - self.len
    }

    /// Returns `Some(&T)` if `i < len`, otherwise `None`.
    #[inline]
    pub fn get(&self, i: usize) -> Option<&T> {
        self.as_slice().get(i)
    }

    /// Returns `Some(&mut T)` if `i < len`, otherwise `None`.
    #[inline]
    pub fn get_mut(&mut self, i: usize) -> Option<&mut T> {
        self.as_mut_slice().get_mut(i)
    }

    // iterators
    /// Shorthand for `self.as_slice().iter()`.
    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    /// Shorthand for `self.as_mut_slice().iter_mut()`.
    #[inline]
    pub fn iter_mut(&mut self) -> core::slice::IterMut<'_, T> {
        self.as_mut_slice().iter_mut()
    }

    /// Returns the first element, if any.
    #[inline]
    pub fn first(&self) -> Option<&T> {
        self.as_slice().first()
    }

    /// Returns the last element, if any.
    #[inline]
    pub fn last(&self) -> Option<&T> {
        self.as_slice().last()
    }

    /// Returns the first element mutably, if any.
    #[inline]
    pub fn first_mut(&mut self) -> Option<&mut T> {
        self.as_mut_slice().first_mut()
    }

    /// Returns the last element mutably, if any.
    #[inline]
    pub fn last_mut(&mut self) -> Option<&mut T> {
        self.as_mut_slice().last_mut()
    }

    /// Returns `true` if the vector contains `x` (linear search).
    #[inline]
    pub fn contains(&self, x: &T) -> bool
    where
        T: PartialEq,
    {
        self.as_slice().contains(x)
    }

    /// Exchanges buffer and length with `other`.
    ///
    /// O(1); no element is constructed, moved or dropped.
    #[inline]
    pub fn swap(&mut self, other: &mut Self) {
        self.buf.swap(&mut other.buf);
        mem::swap(&mut self.len, &mut other.len);
    }

    /// Moves the contents out, leaving `self` empty and unallocated.
    #[inline]
    pub fn take(&mut self) -> Self {
        mem::take(self)
    }
}

impl<T, S: Transfer<T>> Vector<T, S> {
    /// The transfer family selected by `S`.
    pub const TRANSFER: TransferKind = S::KIND;

    /// Builds the replacement buffer's contents around slot `gap`.
    ///
    /// Transfers `[0, gap)` to `fresh[0, gap)` and `[gap, len)` to
    /// `fresh[gap + shift, len + shift)`.
    ///
    /// # Safety
    ///
    /// `fresh` must have room for `len + shift` slots, and the destination
    /// slots must be uninitialized. On unwind nothing transferred by this call
    /// is left live in `fresh`.
    pub(crate) unsafe fn transfer_around(&self, fresh: *mut T, gap: usize, shift: usize) {
        let src = self.buf.as_ptr();
        // SAFETY: `gap <= len`; the caller guarantees the destination range.
        unsafe {
            S::transfer(src, fresh, gap);
            let prefix = crate::slots::DropRange::covering(fresh, 0, gap);
            S::transfer(src.add(gap), fresh.add(gap + shift), self.len - gap);
            prefix.disarm();
        }
    }

    /// Installs `fresh` as the storage, with `new_len` live slots, and retires
    /// the previous buffer.
    ///
    /// # Safety
    ///
    /// `fresh[..new_len]` must be live and hold the result of a completed
    /// transfer from the current buffer.
    pub(crate) unsafe fn replace_buffer(&mut self, mut fresh: RawBuffer<T>, new_len: usize) {
        log::trace!(
            "vector storage replaced: capacity {} -> {}, {:?} transfer of {} elements",
            self.buf.capacity(),
            fresh.capacity(),
            S::KIND,
            self.len
        );
        let old_len = self.len;
        self.buf.swap(&mut fresh);
        self.len = new_len;
        // SAFETY: `fresh` now owns the old storage, whose `[0, old_len)` was
        // the source of the completed transfer.
        unsafe { S::retire(fresh.as_mut_ptr(), old_len) };
    }
}

impl<T, S> Drop for Vector<T, S> {
    fn drop(&mut self) {
        // SAFETY: `[0, len)` is live by invariant; the buffer frees the
        // storage right after.
        unsafe { destroy(self.buf.as_mut_ptr(), self.len) }
    }
}

impl<T, S> Default for Vector<T, S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug, S> fmt::Debug for Vector<T, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Vector")
            .field("len", &self.len)
            .field("capacity", &self.capacity())
            .field("elements", &self.as_slice())
            .finish()
    }
}

impl<T: PartialEq, S> PartialEq for Vector<T, S> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}
impl<T: PartialEq, S> PartialEq<[T]> for Vector<T, S> {
    fn eq(&self, other: &[T]) -> bool {
        self.as_slice() == other
    }
}
impl<T: PartialEq, S> PartialEq<&[T]> for Vector<T, S> {
    fn eq(&self, other: &&[T]) -> bool {
        self.as_slice() == *other
    }
}
impl<T: PartialEq, S, const N: usize> PartialEq<[T; N]> for Vector<T, S> {
    fn eq(&self, other: &[T; N]) -> bool {
        self.as_slice() == other
    }
}
impl<T: Eq, S> Eq for Vector<T, S> {}
impl<T: Ord, S> Ord for Vector<T, S> {
    fn cmp(&self, other: &Self) -> core::cmp::Ordering {
        self.as_slice().cmp(other.as_slice())
    }
}
impl<T: PartialOrd, S> PartialOrd for Vector<T, S> {
    fn partial_cmp(&self, other: &Self) -> Option<core::cmp::Ordering> {
        self.as_slice().partial_cmp(other.as_slice())
    }
}
impl<T: Hash, S> Hash for Vector<T, S> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state)
    }
}

impl<T, S> Deref for Vector<T, S> {
    type Target = [T];
    fn deref(&self) -> &Self::Target {
        self.as_slice()
    }
}
impl<T, S> DerefMut for Vector<T, S> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.as_mut_slice()
    }
}

impl<T, S> AsRef<[T]> for Vector<T, S> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}
impl<T, S> AsMut<[T]> for Vector<T, S> {
    fn as_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

// Borrow ergonomics (treat as a slice)
impl<T, S> Borrow<[T]> for Vector<T, S> {
    fn borrow(&self) -> &[T] {
        self.as_slice()
    }
}
impl<T, S> BorrowMut<[T]> for Vector<T, S> {
    fn borrow_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}
