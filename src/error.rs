// This file is part of raw-vector.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for `Vector` and `RawBuffer`.
//!
//! These errors represent allocation and bounds conditions reported by the
//! `try_*` family of methods. They are `Copy` and implement `core::error::Error`.

// Core imports
use core::{alloc::Layout, error::Error as CoreError, fmt};

/// Errors returned by the fallible operations of [`Vector`](crate::Vector) and
/// [`RawBuffer`](crate::RawBuffer).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// The requested capacity does not fit in `isize::MAX` bytes, or the
    /// element count overflowed `usize`.
    CapacityOverflow,
    /// The global allocator returned null for the given layout.
    AllocFailed(Layout),
    /// An index or position was outside the current logical bounds.
    OutOfBounds,
}

impl Error {
    /// Turns the error into the matching panic or allocation-failure abort.
    ///
    /// Used by the infallible wrappers (`push`, `reserve`, ...).
    #[cold]
    #[track_caller]
    pub(crate) fn raise(self) -> ! {
        match self {
            Self::AllocFailed(layout) => alloc::alloc::handle_alloc_error(layout),
            other => panic!("{other}"),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CapacityOverflow => f.write_str("capacity overflow"),
            Self::AllocFailed(layout) => write!(
                f,
                "memory allocation of {} bytes (align {}) failed",
                layout.size(),
                layout.align()
            ),
            Self::OutOfBounds => f.write_str("index out of bounds"),
        }
    }
}

impl CoreError for Error {}
