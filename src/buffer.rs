// This file is part of raw-vector.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The `RawBuffer` type: owned, uninitialized storage for `T` slots.
//!
//! A `RawBuffer<T>` separates *allocation* from *object lifetime*. It owns a
//! block of heap memory sized for `capacity` values of `T`, hands out slot
//! addresses, and frees the block on drop. It never constructs, reads or
//! destroys a `T`; tracking which slots are live is the owner's job.

// Crate imports
use crate::error::Error;

// Core imports
use core::{alloc::Layout, fmt, marker::PhantomData, mem, ptr::NonNull};

// Alloc imports
use alloc::alloc::{alloc, dealloc};

/// Owned, uninitialized storage for `capacity` values of `T`.
///
/// # Invariants
///
/// - If `capacity == 0` or `T` is zero-sized, no allocation is owned and the
///   base address is [`NonNull::dangling`].
/// - Otherwise the base address owns an allocation of
///   `Layout::array::<T>(capacity)`.
/// - Slot offsets handed out are always in `0..=capacity` (one-past-the-end is
///   allowed, nothing further).
///
/// `RawBuffer` is not `Clone`; it cannot know which slots hold live values.
///
/// # Examples
///
/// ```rust
/// use raw_vector::RawBuffer;
///
/// let mut buf: RawBuffer<String> = RawBuffer::with_capacity(2);
/// assert_eq!(buf.capacity(), 2);
///
/// // SAFETY: slot 0 is in bounds and uninitialized; it is read back out
/// // before the buffer is dropped, so nothing leaks.
/// unsafe {
///     buf.address_at_mut(0).write(String::from("hello"));
///     assert_eq!(buf.element_at(0), "hello");
///     drop(buf.address_at_mut(0).read());
/// }
/// ```
pub struct RawBuffer<T> {
    ptr: NonNull<T>,
    cap: usize,
    _marker: PhantomData<T>,
}

// SAFETY: `RawBuffer<T>` uniquely owns its allocation, like `Box<[T]>`.
unsafe impl<T: Send> Send for RawBuffer<T> {}
// SAFETY: shared access only hands out `*const T` / `&T`.
unsafe impl<T: Sync> Sync for RawBuffer<T> {}

impl<T> RawBuffer<T> {
    const IS_ZST: bool = mem::size_of::<T>() == 0;

    /// Creates an empty buffer. Does not allocate.
    #[inline]
    pub const fn new() -> Self {
        Self {
            ptr: NonNull::dangling(),
            cap: 0,
            _marker: PhantomData,
        }
    }

    /// Allocates uninitialized storage for `capacity` slots.
    ///
    /// # Panics
    ///
    /// Panics if the byte size overflows `isize::MAX`; aborts through
    /// [`handle_alloc_error`](alloc::alloc::handle_alloc_error) if the
    /// allocator fails.
    #[inline]
    #[track_caller]
    pub fn with_capacity(capacity: usize) -> Self {
        Self::try_with_capacity(capacity).unwrap_or_else(|e| e.raise())
    }

    /// Fallible variant of [`with_capacity`](Self::with_capacity).
    ///
    /// `capacity == 0` (and any capacity for a zero-sized `T`) succeeds
    /// without touching the allocator.
    pub fn try_with_capacity(capacity: usize) -> Result<Self, Error> {
        if capacity == 0 || Self::IS_ZST {
            return Ok(Self {
                ptr: NonNull::dangling(),
                cap: capacity,
                _marker: PhantomData,
            });
        }

        let layout = Layout::array::<T>(capacity).map_err(|_| Error::CapacityOverflow)?;

        // SAFETY: `capacity > 0` and `T` is not zero-sized, so `layout` has a
        // non-zero size.
        let raw = unsafe { alloc(layout) };
        let ptr = NonNull::new(raw.cast::<T>()).ok_or(Error::AllocFailed(layout))?;

        log::trace!(
            "raw buffer allocated: {} slots, {} bytes",
            capacity,
            layout.size()
        );
        Ok(Self {
            ptr,
            cap: capacity,
            _marker: PhantomData,
        })
    }

    /// Number of element slots owned by this buffer.
    #[inline]
    pub const fn capacity(&self) -> usize {
        self.cap
    }

    /// Base address of the storage (dangling when nothing is allocated).
    #[inline]
    pub const fn as_ptr(&self) -> *const T {
        self.ptr.as_ptr()
    }

    /// Mutable base address of the storage (dangling when nothing is allocated).
    #[inline]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.ptr.as_ptr()
    }

    /// Returns the address of slot `offset`.
    ///
    /// `offset == capacity` is allowed and yields the one-past-the-end address.
    ///
    /// # Panics
    ///
    /// Panics if `offset > capacity`.
    #[inline]
    #[track_caller]
    pub fn address_at(&self, offset: usize) -> *const T {
        assert!(
            offset <= self.cap,
            "slot offset (is {offset}) should be <= capacity (is {})",
            self.cap
        );
        // SAFETY: `offset <= cap`, so the result stays within the allocation
        // or one past its end (for a dangling base, `offset` is 0 or `T` is
        // zero-sized, and the add moves zero bytes).
        unsafe { self.ptr.as_ptr().add(offset) }
    }

    /// Mutable variant of [`address_at`](Self::address_at).
    ///
    /// # Panics
    ///
    /// Panics if `offset > capacity`.
    #[inline]
    #[track_caller]
    pub fn address_at_mut(&mut self, offset: usize) -> *mut T {
        self.address_at(offset).cast_mut()
    }

    /// Returns a reference to the value in slot `index`.
    ///
    /// # Safety
    ///
    /// Slot `index` must hold a live, initialized `T`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= capacity`.
    #[inline]
    #[track_caller]
    pub unsafe fn element_at(&self, index: usize) -> &T {
        assert!(
            index < self.cap,
            "slot index (is {index}) should be < capacity (is {})",
            self.cap
        );
        // SAFETY: in bounds per the assert; liveness is the caller's contract.
        unsafe { &*self.ptr.as_ptr().add(index) }
    }

    /// Returns a mutable reference to the value in slot `index`.
    ///
    /// # Safety
    ///
    /// Slot `index` must hold a live, initialized `T`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= capacity`.
    #[inline]
    #[track_caller]
    pub unsafe fn element_at_mut(&mut self, index: usize) -> &mut T {
        assert!(
            index < self.cap,
            "slot index (is {index}) should be < capacity (is {})",
            self.cap
        );
        // SAFETY: in bounds per the assert; liveness is the caller's contract,
        // and `&mut self` gives exclusive access.
        unsafe { &mut *self.ptr.as_ptr().add(index) }
    }

    /// Exchanges storage and capacity with `other`. Never touches elements.
    #[inline]
    pub fn swap(&mut self, other: &mut Self) {
        mem::swap(self, other);
    }

    /// Moves the storage out, leaving `self` empty (no allocation, capacity 0).
    #[inline]
    pub fn take(&mut self) -> Self {
        mem::replace(self, Self::new())
    }
}

impl<T> Default for RawBuffer<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for RawBuffer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RawBuffer")
            .field("ptr", &self.ptr)
            .field("capacity", &self.cap)
            .finish()
    }
}

impl<T> Drop for RawBuffer<T> {
    fn drop(&mut self) {
        if self.cap == 0 || Self::IS_ZST {
            return;
        }
        log::trace!("raw buffer released: {} slots", self.cap);
        // SAFETY: this is the exact layout validated by `Layout::array` when
        // the block was allocated in `try_with_capacity`.
        unsafe {
            let layout = Layout::from_size_align_unchecked(
                mem::size_of::<T>() * self.cap,
                mem::align_of::<T>(),
            );
            dealloc(self.ptr.as_ptr().cast(), layout);
        }
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use super::RawBuffer;
    use crate::{
        Error,
        testing::{Ledger, Tracked},
    };
    use core::ptr::NonNull;

    #[test]
    fn test_zero_capacity_does_not_allocate() {
        let buf: RawBuffer<u64> = RawBuffer::with_capacity(0);
        assert_eq!(buf.capacity(), 0);
        assert_eq!(buf.as_ptr(), NonNull::<u64>::dangling().as_ptr());

        let empty: RawBuffer<u64> = RawBuffer::new();
        assert_eq!(empty.capacity(), 0);
        assert_eq!(empty.address_at(0), empty.as_ptr());
    }

    #[test]
    fn test_address_arithmetic_is_in_slots() {
        let buf: RawBuffer<u32> = RawBuffer::with_capacity(4);
        let base = buf.address_at(0);
        assert_eq!(base, buf.as_ptr());
        // SAFETY: both addresses derive from the same allocation.
        let dist = unsafe { buf.address_at(3).offset_from(base) };
        assert_eq!(dist, 3);
        // one-past-the-end is allowed
        let end = buf.address_at(4);
        // SAFETY: same allocation, one past the end.
        assert_eq!(unsafe { end.offset_from(base) }, 4);
    }

    #[test]
    #[should_panic(expected = "slot offset")]
    fn test_address_past_end_panics() {
        let buf: RawBuffer<u32> = RawBuffer::with_capacity(2);
        let _ = buf.address_at(3);
    }

    #[test]
    #[should_panic(expected = "slot index")]
    fn test_element_at_capacity_panics() {
        let buf: RawBuffer<u32> = RawBuffer::with_capacity(2);
        // SAFETY: never reached, the bounds assert fires first.
        let _ = unsafe { buf.element_at(2) };
    }

    #[test]
    fn test_write_and_read_slots() {
        let mut buf: RawBuffer<i32> = RawBuffer::with_capacity(3);
        // SAFETY: slots 0..3 are in bounds; each is written before it is read.
        unsafe {
            for i in 0..3 {
                buf.address_at_mut(i).write(i as i32 * 10);
            }
            *buf.element_at_mut(1) += 5;
            assert_eq!(*buf.element_at(0), 0);
            assert_eq!(*buf.element_at(1), 15);
            assert_eq!(*buf.element_at(2), 20);
        }
    }

    #[test]
    fn test_swap_and_take_transfer_ownership() {
        let mut a: RawBuffer<u8> = RawBuffer::with_capacity(8);
        let mut b: RawBuffer<u8> = RawBuffer::new();
        let a_ptr = a.as_ptr();

        a.swap(&mut b);
        assert_eq!(a.capacity(), 0);
        assert_eq!(b.capacity(), 8);
        assert_eq!(b.as_ptr(), a_ptr);

        let c = b.take();
        assert_eq!(b.capacity(), 0);
        assert_eq!(c.capacity(), 8);
        assert_eq!(c.as_ptr(), a_ptr);
    }

    #[test]
    fn test_overflowing_capacity_is_reported() {
        let res = RawBuffer::<u32>::try_with_capacity(usize::MAX);
        assert_eq!(res.unwrap_err(), Error::CapacityOverflow);
        let res = RawBuffer::<u8>::try_with_capacity(isize::MAX as usize + 1);
        assert_eq!(res.unwrap_err(), Error::CapacityOverflow);
    }

    #[test]
    #[should_panic(expected = "capacity overflow")]
    fn test_with_capacity_overflow_panics() {
        let _ = RawBuffer::<u64>::with_capacity(usize::MAX / 4);
    }

    #[test]
    fn test_zero_sized_type_keeps_requested_capacity() {
        let buf: RawBuffer<()> = RawBuffer::with_capacity(usize::MAX);
        assert_eq!(buf.capacity(), usize::MAX);
        assert_eq!(buf.address_at(usize::MAX), buf.as_ptr());
    }

    #[test]
    fn test_drop_never_destroys_elements() {
        let ledger = Ledger::new();
        {
            let mut buf: RawBuffer<Tracked<'_>> = RawBuffer::with_capacity(2);
            // SAFETY: slot 0 is in bounds and uninitialized.
            unsafe { buf.address_at_mut(0).write(Tracked::new(&ledger, 7)) };
            // `buf` is dropped here without dropping the element it holds.
        }
        assert_eq!(ledger.created(), 1);
        assert_eq!(ledger.dropped(), 0);
    }
}
