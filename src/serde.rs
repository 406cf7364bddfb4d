// This file is part of raw-vector.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `serde` support for [`Vector`](crate::Vector).
//!
//! - **Serialize**: as a sequence of elements (length `len`).
//! - **Deserialize**: from any sequence. The sequence's size hint is used to
//!   pre-reserve, capped so that an untrusted hint cannot force a large
//!   allocation up front; beyond that the vector grows by doubling.
//!
//! The transfer strategy is not part of the serialized form: a
//! `Vector<T, Moving>` and a `Vector<T, Cloning>` with the same elements
//! serialize identically.

// Crate imports
use crate::{transfer::Transfer, vec::Vector};

// Core imports
use core::{fmt, marker::PhantomData};

// External imports - serde
use serde::{Deserialize, Deserializer, Serialize, Serializer, de, ser};

/// Upper bound on the number of slots reserved from a size hint.
const MAX_PREALLOC: usize = 4096;

impl<T: Serialize, S> Serialize for Vector<T, S> {
    fn serialize<Z: Serializer>(&self, s: Z) -> Result<Z::Ok, Z::Error> {
        use ser::SerializeSeq;
        let sl = self.as_slice();
        let mut seq = s.serialize_seq(Some(sl.len()))?;
        for item in sl {
            seq.serialize_element(item)?;
        }
        seq.end()
    }
}

struct VecVisitor<T, S>(PhantomData<(T, S)>);

impl<'de, T, S> de::Visitor<'de> for VecVisitor<T, S>
where
    T: Deserialize<'de>,
    S: Transfer<T>,
{
    type Value = Vector<T, S>;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a sequence")
    }

    fn visit_seq<A: de::SeqAccess<'de>>(self, mut a: A) -> Result<Self::Value, A::Error> {
        let hint = a.size_hint().unwrap_or(0).min(MAX_PREALLOC);
        let mut out = Vector::<T, S>::try_with_capacity(hint).map_err(de::Error::custom)?;
        while let Some(elem) = a.next_element::<T>()? {
            out.try_push(elem).map_err(de::Error::custom)?;
        }
        Ok(out)
    }
}

impl<'de, T, S> Deserialize<'de> for Vector<T, S>
where
    T: Deserialize<'de>,
    S: Transfer<T>,
{
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        d.deserialize_seq(VecVisitor::<T, S>(PhantomData))
    }
}
