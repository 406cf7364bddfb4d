// This file is part of raw-vector.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{buffer::RawBuffer, error::Error, slots::fill_with, vec::Vector};

// Core imports
use core::marker::PhantomData;

impl<T, S> Vector<T, S> {
    /// Constructs an empty vector without allocating.
    #[inline]
    pub const fn new() -> Self {
        Self {
            buf: RawBuffer::new(),
            len: 0,
            _strategy: PhantomData,
        }
    }

    /// Constructs an empty vector with exactly `capacity` slots.
    ///
    /// # Panics
    ///
    /// Panics on capacity overflow; allocation failure goes through
    /// [`handle_alloc_error`](alloc::alloc::handle_alloc_error).
    #[inline]
    #[track_caller]
    pub fn with_capacity(capacity: usize) -> Self {
        Self::try_with_capacity(capacity).unwrap_or_else(|e| e.raise())
    }

    /// Fallible form of [`with_capacity`](Self::with_capacity).
    pub fn try_with_capacity(capacity: usize) -> Result<Self, Error> {
        Ok(Self {
            buf: RawBuffer::try_with_capacity(capacity)?,
            len: 0,
            _strategy: PhantomData,
        })
    }

    /// Constructs `n` default values; capacity is exactly `n`.
    #[track_caller]
    pub fn with_len(n: usize) -> Self
    where
        T: Default,
    {
        Self::with_len_with(n, T::default)
    }

    /// Constructs `n` values from successive calls to `f`, in slot order.
    ///
    /// If `f` panics, the values already built are dropped and the storage is
    /// freed before the panic propagates.
    #[track_caller]
    pub fn with_len_with<F: FnMut() -> T>(n: usize, f: F) -> Self {
        let mut buf: RawBuffer<T> = RawBuffer::with_capacity(n);
        // SAFETY: the fresh buffer has exactly `n` uninitialized slots.
        let built = unsafe { fill_with(buf.as_mut_ptr(), 0, n, f) };
        built.disarm();
        Self {
            buf,
            len: n,
            _strategy: PhantomData,
        }
    }
}
