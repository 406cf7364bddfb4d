// This file is part of raw-vector.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Instrumented element type for lifetime accounting in unit tests.
//!
//! Every [`Tracked`] value reports its construction, clone and drop to a
//! shared [`Ledger`]. A ledger can be armed to make the n-th clone panic,
//! which drives the unwinding paths of growth and insertion.

// Core imports
use core::{cell::Cell, fmt};

#[derive(Debug, Default)]
pub(crate) struct Ledger {
    created: Cell<usize>,
    dropped: Cell<usize>,
    clones: Cell<usize>,
    fail_at: Cell<Option<usize>>,
}

impl Ledger {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Values constructed so far, clones included.
    pub(crate) fn created(&self) -> usize {
        self.created.get()
    }

    pub(crate) fn dropped(&self) -> usize {
        self.dropped.get()
    }

    pub(crate) fn clones(&self) -> usize {
        self.clones.get()
    }

    pub(crate) fn live(&self) -> usize {
        self.created() - self.dropped()
    }

    /// Makes the `nth` clone from now on panic (1-based).
    pub(crate) fn fail_on_clone(&self, nth: usize) {
        self.fail_at.set(Some(self.clones.get() + nth));
    }

    pub(crate) fn disarm(&self) {
        self.fail_at.set(None);
    }
}

pub(crate) struct Tracked<'a> {
    pub(crate) value: i32,
    ledger: &'a Ledger,
}

impl<'a> Tracked<'a> {
    pub(crate) fn new(ledger: &'a Ledger, value: i32) -> Self {
        ledger.created.set(ledger.created.get() + 1);
        Self { value, ledger }
    }
}

impl Clone for Tracked<'_> {
    fn clone(&self) -> Self {
        let n = self.ledger.clones.get() + 1;
        self.ledger.clones.set(n);
        if self.ledger.fail_at.get() == Some(n) {
            panic!("injected clone failure");
        }
        Tracked::new(self.ledger, self.value)
    }
}

impl Drop for Tracked<'_> {
    fn drop(&mut self) {
        self.ledger.dropped.set(self.ledger.dropped.get() + 1);
    }
}

impl PartialEq for Tracked<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl fmt::Debug for Tracked<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Tracked({})", self.value)
    }
}

/// Collects the payloads of a run of tracked values.
pub(crate) fn values(items: &[Tracked<'_>]) -> alloc::vec::Vec<i32> {
    items.iter().map(|t| t.value).collect()
}
