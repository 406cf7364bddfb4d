// This file is part of raw-vector.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{buffer::RawBuffer, error::Error, transfer::Transfer, vec::Vector};

impl<T, S: Transfer<T>> Vector<T, S> {
    /// Ensures `capacity() >= new_capacity`, allocating exactly
    /// `new_capacity` slots when it has to grow.
    ///
    /// A no-op when the capacity already suffices; otherwise every element is
    /// transferred to the new buffer per `S`. With [`Cloning`](crate::Cloning),
    /// a panicking clone leaves the vector unchanged.
    ///
    /// # Panics
    ///
    /// Panics on capacity overflow.
    #[inline]
    #[track_caller]
    pub fn reserve(&mut self, new_capacity: usize) {
        if let Err(e) = self.try_reserve(new_capacity) {
            e.raise()
        }
    }

    /// Fallible form of [`reserve`](Self::reserve); the vector is unchanged on
    /// error.
    pub fn try_reserve(&mut self, new_capacity: usize) -> Result<(), Error> {
        if new_capacity <= self.capacity() {
            return Ok(());
        }
        let mut fresh: RawBuffer<T> = RawBuffer::try_with_capacity(new_capacity)?;
        let len = self.len;
        // SAFETY: `fresh` has `new_capacity > len` uninitialized slots and is
        // a separate allocation from the current buffer.
        unsafe {
            S::transfer(self.buf.as_ptr(), fresh.as_mut_ptr(), len);
            self.replace_buffer(fresh, len);
        }
        Ok(())
    }

    /// Capacity after growing to fit `additional` more elements under the
    /// doubling policy: `max(len + additional, 2 * len)`.
    pub(crate) fn grown_capacity(&self, additional: usize) -> Result<usize, Error> {
        let required = self
            .len
            .checked_add(additional)
            .ok_or(Error::CapacityOverflow)?;
        Ok(required.max(self.len.saturating_mul(2)))
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use crate::{Error, Vector};

    #[test]
    fn test_grown_capacity_doubles() {
        let mut v: Vector<u8> = Vector::new();
        assert_eq!(v.grown_capacity(1), Ok(1));
        v.extend_from_slice(&[1, 2, 3]);
        assert_eq!(v.grown_capacity(1), Ok(6));
        assert_eq!(v.grown_capacity(10), Ok(13));
        assert_eq!(v.grown_capacity(usize::MAX), Err(Error::CapacityOverflow));
    }

    #[test]
    fn test_reserve_zero_on_empty_does_not_allocate() {
        let mut v: Vector<u64> = Vector::new();
        v.reserve(0);
        assert_eq!(v.capacity(), 0);
        assert_eq!(v.try_reserve(0), Ok(()));
    }

    #[test]
    fn test_try_reserve_layout_overflow() {
        let mut v: Vector<u64> = Vector::new();
        assert_eq!(v.try_reserve(usize::MAX / 4), Err(Error::CapacityOverflow));
        assert_eq!(v.capacity(), 0);
    }

    #[test]
    #[should_panic(expected = "capacity overflow")]
    fn test_reserve_overflow_panics() {
        let mut v: Vector<u32> = Vector::new();
        v.reserve(usize::MAX);
    }
}
