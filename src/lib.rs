// This file is part of raw-vector.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # `raw-vector`
//!
//! A `no_std` + `alloc`, growable, contiguous vector built directly on raw,
//! uninitialized heap memory.
//!
//! The crate has two layers:
//!
//! - [`RawBuffer<T>`] owns an allocation of `capacity` slots. It never
//!   constructs or drops elements; it only allocates, frees, and hands out slot
//!   addresses.
//! - [`Vector<T, S>`] owns one `RawBuffer<T>` plus a logical length. Slots
//!   `[0, len)` are live, the rest are uninitialized.
//!
//! ## Transfer strategies
//!
//! When `Vector` replaces its buffer, or shifts elements for `insert`/`erase`,
//! the way elements are relocated is fixed by the strategy parameter `S`:
//!
//! - [`Moving`] (the default) relocates elements bitwise. A move can never
//!   fail, so growth cannot be interrupted by element code.
//! - [`Cloning`] relocates by `Clone` and only drops the originals once every
//!   clone succeeded. If a clone panics during growth, the vector is left
//!   exactly as it was (strong guarantee).
//!
//! ## Growth
//!
//! - Appending (`push`, `emplace_back`) and inserting into a full vector grow
//!   capacity to `max(1, 2 * len)`, which yields the sequence 1, 2, 4, 8, ...
//! - [`Vector::reserve`], [`Vector::resize`] and [`Vector::with_len`] allocate
//!   exactly the requested capacity.
//! - Capacity never shrinks implicitly.
//!
//! ## Failure model
//!
//! - Index and position violations panic (`v[i]`, `insert`, `erase`).
//! - Capacity overflow panics; allocator failure goes through
//!   [`alloc::alloc::handle_alloc_error`]. The `try_*` methods report both as
//!   [`Error`] instead and leave the vector unchanged.
//! - A panicking element constructor never leaks and never double-drops.
//!
//! ## Features
//!
//! - `serde`: `Serialize` / `Deserialize` for `Vector<T, S>` as a sequence.
//!
//! ## Logging
//!
//! Allocation, deallocation and buffer replacement are reported through the
//! [`log`](https://docs.rs/log) facade at `trace` level; cleanup of partially
//! built elements during unwinding is reported at `debug` level.
//!
//! ## Example
//!
//! ```rust
//! use raw_vector::{Cloning, Vector};
//!
//! let mut v: Vector<String, Cloning> = Vector::new();
//! v.push("b".to_string());
//! v.insert(0, "a".to_string());
//! v.emplace_back(|| "c".to_string());
//! assert_eq!(v.as_slice(), &["a", "b", "c"]);
//!
//! v.reserve(10);
//! assert_eq!(v.capacity(), 10);
//! assert_eq!(v.len(), 3);
//! ```

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_op_in_unsafe_fn)]

extern crate alloc;

// Modules
mod buffer;
mod error;
mod index;
mod iter;
#[cfg(feature = "serde")]
mod serde;
mod slots;
#[cfg(test)]
mod testing;
mod transfer;
mod vec;

// Public exports (crate API surface)
pub use buffer::RawBuffer;
pub use error::Error;
pub use iter::IntoIter;
pub use transfer::{Cloning, Moving, Transfer, TransferKind};
pub use vec::Vector;
