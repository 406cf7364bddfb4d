// This file is part of raw-vector.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Element lifetime primitives over raw slots.
//!
//! `construct` starts the lifetime of a value in an uninitialized slot and is
//! distinct from assignment (nothing is dropped first). `destroy` ends the
//! lifetime of a run of live slots. `DropRange` ties a partially built run to
//! scope exit so that an unwinding element operation never leaks the values
//! already constructed.

// Core imports
use core::{mem, ptr};

/// Writes `value` into the uninitialized slot at `slot`.
///
/// # Safety
///
/// `slot` must be valid for writes, properly aligned, and hold no live value.
#[inline]
pub(crate) unsafe fn construct<T>(slot: *mut T, value: T) {
    // SAFETY: forwarded from the caller.
    unsafe { slot.write(value) }
}

/// Drops the `count` live values starting at `base`.
///
/// # Safety
///
/// `base[..count]` must be live, and must not be used as live afterwards.
#[inline]
pub(crate) unsafe fn destroy<T>(base: *mut T, count: usize) {
    // SAFETY: forwarded from the caller.
    unsafe { ptr::drop_in_place(ptr::slice_from_raw_parts_mut(base, count)) }
}

/// Drops `base[start..end]` when it goes out of scope, unless disarmed.
///
/// The range only ever grows at its end, one slot per successful
/// construction.
pub(crate) struct DropRange<T> {
    base: *mut T,
    start: usize,
    end: usize,
}

impl<T> DropRange<T> {
    /// An empty range anchored at `base + start`.
    #[inline]
    pub(crate) fn new(base: *mut T, start: usize) -> Self {
        Self {
            base,
            start,
            end: start,
        }
    }

    /// A range already covering the live slots `base[start..end]`.
    #[inline]
    pub(crate) fn covering(base: *mut T, start: usize, end: usize) -> Self {
        Self { base, start, end }
    }

    /// Records one more live slot at the end of the range.
    #[inline]
    pub(crate) fn grow(&mut self) {
        self.end += 1;
    }

    #[inline]
    pub(crate) fn end(&self) -> usize {
        self.end
    }

    /// Hands ownership of the covered values back to the caller.
    #[inline]
    pub(crate) fn disarm(self) {
        mem::forget(self);
    }
}

impl<T> Drop for DropRange<T> {
    fn drop(&mut self) {
        let count = self.end - self.start;
        if count == 0 {
            return;
        }
        log::debug!("unwinding: dropping {count} partially built elements");
        // SAFETY: the range only covers slots whose construction completed,
        // and it is disarmed before ownership moves elsewhere.
        unsafe { destroy(self.base.add(self.start), count) }
    }
}

/// Constructs `base[start..end]` from successive calls to `f`.
///
/// The returned guard still covers the new values; the caller disarms it once
/// they are owned by something else. If `f` panics, the values built so far
/// are dropped.
///
/// # Safety
///
/// `base[start..end]` must be valid for writes and hold no live values.
pub(crate) unsafe fn fill_with<T, F: FnMut() -> T>(
    base: *mut T,
    start: usize,
    end: usize,
    mut f: F,
) -> DropRange<T> {
    let mut built = DropRange::new(base, start);
    while built.end() < end {
        let value = f();
        // SAFETY: `built.end() < end`, so the slot is in range and still
        // uninitialized.
        unsafe { construct(base.add(built.end()), value) };
        built.grow();
    }
    built
}

#[cfg(test)]
mod tests {
    // Imports
    use super::{DropRange, fill_with};
    use crate::{
        RawBuffer,
        testing::{Ledger, Tracked},
    };
    use std::panic::{AssertUnwindSafe, catch_unwind};

    #[test]
    fn test_drop_range_drops_only_covered_slots() {
        let ledger = Ledger::new();
        let mut buf: RawBuffer<Tracked<'_>> = RawBuffer::with_capacity(4);
        let base = buf.as_mut_ptr();

        // SAFETY: slots 1..3 are in bounds and uninitialized.
        let guard = unsafe { fill_with(base, 1, 3, || Tracked::new(&ledger, 1)) };
        assert_eq!(ledger.live(), 2);
        drop(guard);
        assert_eq!(ledger.live(), 0);
        assert_eq!(ledger.dropped(), 2);
    }

    #[test]
    #[cfg_attr(not(panic = "unwind"), ignore = "test requires unwinding support")]
    fn test_fill_with_cleans_up_on_panic() {
        let ledger = Ledger::new();
        let mut buf: RawBuffer<Tracked<'_>> = RawBuffer::with_capacity(5);
        let base = buf.as_mut_ptr();

        let mut calls = 0;
        let res = catch_unwind(AssertUnwindSafe(|| {
            // SAFETY: slots 0..5 are in bounds and uninitialized.
            let guard = unsafe {
                fill_with(base, 0, 5, || {
                    calls += 1;
                    if calls == 4 {
                        panic!("constructor failure");
                    }
                    Tracked::new(&ledger, calls)
                })
            };
            guard.disarm();
        }));

        assert!(res.is_err());
        assert_eq!(ledger.created(), 3);
        assert_eq!(ledger.dropped(), 3);
    }

    #[test]
    fn test_disarmed_range_leaves_values_live() {
        let ledger = Ledger::new();
        let mut buf: RawBuffer<Tracked<'_>> = RawBuffer::with_capacity(2);
        let base = buf.as_mut_ptr();

        // SAFETY: slots 0..2 are in bounds and uninitialized.
        let built = unsafe { fill_with(base, 0, 2, || Tracked::new(&ledger, 0)) };
        built.disarm();
        assert_eq!(ledger.live(), 2);

        // Hand the values to a fresh guard so the test does not leak them.
        drop(DropRange::covering(base, 0, 2));
        assert_eq!(ledger.live(), 0);
    }
}
