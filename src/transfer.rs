// This file is part of raw-vector.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Transfer strategies: how a [`Vector`](crate::Vector) relocates its elements.
//!
//! The strategy is the second type parameter of `Vector<T, S>` and is fixed
//! for the lifetime of the type; no method branches on it at run time.
//!
//! - [`Moving`] (the default) relocates elements bitwise. A Rust move cannot
//!   fail, so growth can only fail at allocation time.
//! - [`Cloning`] (`T: Clone`) clones into the destination and keeps the source
//!   live until the new storage is complete. If a `clone` panics while the
//!   vector grows, the partial copies are dropped and the vector is left
//!   exactly as it was.
//!
//! The in-place shifts used by `insert` and `erase` follow the same split:
//! overlapping bitwise copies for `Moving`, clone-assignment chains for
//! `Cloning`. A clone that panics during an in-place shift leaves the
//! elements live, possibly duplicated, and never drops a value twice.

// Crate imports
use crate::slots::{DropRange, construct, destroy};

// Core imports
use core::ptr;

mod sealed {
    pub trait Sealed {}
}

/// Which family of element operations a strategy uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransferKind {
    /// Bitwise relocation; the source slots become uninitialized.
    Move,
    /// `Clone` into the destination; the source stays live until retired.
    Clone,
}

/// Bitwise relocation. Works for every `T`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Moving;

/// Clone-based transfer with a strong guarantee on growth. Requires `T: Clone`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Cloning;

impl sealed::Sealed for Moving {}
impl sealed::Sealed for Cloning {}

/// Element operations a [`Vector`](crate::Vector) delegates to its strategy.
///
/// This trait is sealed; [`Moving`] and [`Cloning`] are its only
/// implementors.
pub trait Transfer<T>: sealed::Sealed {
    /// The family of operations this strategy uses.
    const KIND: TransferKind;

    /// Fills `dst[..count]` from `src[..count]`.
    ///
    /// On return `dst[..count]` is live; whether `src[..count]` still is
    /// depends on the strategy and is settled by [`retire`](Self::retire).
    /// If an element operation panics, `dst[..count]` is left uninitialized
    /// and `src[..count]` untouched.
    ///
    /// # Safety
    ///
    /// `src[..count]` must be live, `dst[..count]` valid for writes and
    /// uninitialized, and the two ranges must not overlap.
    unsafe fn transfer(src: *const T, dst: *mut T, count: usize);

    /// Ends the source side of a completed [`transfer`](Self::transfer).
    ///
    /// # Safety
    ///
    /// `src[..count]` must be the source of a completed transfer and is
    /// treated as uninitialized afterwards.
    unsafe fn retire(src: *mut T, count: usize);

    /// Shifts `base[index..len]` one slot right and places `value` at `index`.
    ///
    /// Afterwards `base[..=len]` is live.
    ///
    /// # Safety
    ///
    /// `base[..len]` must be live, `base[len]` valid for writes and
    /// uninitialized, and `index < len`.
    unsafe fn open_gap(base: *mut T, index: usize, len: usize, value: T);

    /// Removes slot `index` from the live run `base[..len]`.
    ///
    /// Afterwards `base[..len - 1]` is live and the returned value must be
    /// dropped (or handed out) by the caller once its length is updated.
    ///
    /// # Safety
    ///
    /// `base[..len]` must be live and `index < len`.
    unsafe fn close_gap(base: *mut T, index: usize, len: usize) -> T;
}

impl<T> Transfer<T> for Moving {
    const KIND: TransferKind = TransferKind::Move;

    #[inline]
    unsafe fn transfer(src: *const T, dst: *mut T, count: usize) {
        // SAFETY: forwarded from the caller; ranges do not overlap.
        unsafe { ptr::copy_nonoverlapping(src, dst, count) }
    }

    #[inline]
    unsafe fn retire(_src: *mut T, _count: usize) {
        // The values now live in the destination; the source bytes are stale.
    }

    #[inline]
    unsafe fn open_gap(base: *mut T, index: usize, len: usize, value: T) {
        // SAFETY: `index < len` and `base[len]` is writable, so both the
        // overlapping copy `[index, len) -> [index + 1, len + 1)` and the
        // write into the vacated slot stay in bounds.
        unsafe {
            let hole = base.add(index);
            ptr::copy(hole, hole.add(1), len - index);
            construct(hole, value);
        }
    }

    #[inline]
    unsafe fn close_gap(base: *mut T, index: usize, len: usize) -> T {
        // SAFETY: `index < len`; the value is read out before its slot is
        // overwritten by the tail `[index + 1, len)`.
        unsafe {
            let hole = base.add(index);
            let out = hole.read();
            ptr::copy(hole.add(1), hole, len - index - 1);
            out
        }
    }
}

impl<T: Clone> Transfer<T> for Cloning {
    const KIND: TransferKind = TransferKind::Clone;

    unsafe fn transfer(src: *const T, dst: *mut T, count: usize) {
        let mut built = DropRange::new(dst, 0);
        for i in 0..count {
            // SAFETY: `i < count`; `src[i]` is live and `dst[i]` is
            // uninitialized per the caller's contract.
            unsafe {
                let value = (*src.add(i)).clone();
                construct(dst.add(i), value);
            }
            built.grow();
        }
        built.disarm();
    }

    #[inline]
    unsafe fn retire(src: *mut T, count: usize) {
        // SAFETY: the originals are still live after a clone transfer.
        unsafe { destroy(src, count) }
    }

    unsafe fn open_gap(base: *mut T, index: usize, len: usize, value: T) {
        // SAFETY: `index < len`, so `base[len - 1]` is live and `base[len]`
        // is the writable spare slot. Each assignment targets a live slot
        // distinct from its source.
        unsafe {
            let last = (*base.add(len - 1)).clone();
            construct(base.add(len), last);
            let spill = DropRange::covering(base, len, len + 1);
            for i in (index + 1..len).rev() {
                (*base.add(i)).clone_from(&*base.add(i - 1));
            }
            spill.disarm();
            *base.add(index) = value;
        }
    }

    unsafe fn close_gap(base: *mut T, index: usize, len: usize) -> T {
        // SAFETY: `index < len`; every slot in `base[..len]` is live and each
        // assignment reads the slot after the one it writes.
        unsafe {
            for i in index..len - 1 {
                (*base.add(i)).clone_from(&*base.add(i + 1));
            }
            base.add(len - 1).read()
        }
    }
}
