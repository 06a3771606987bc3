// This file is part of simple-vector.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `serde` support for [`SimpleVector`](crate::SimpleVector).
//!
//! - **Serialize**: as a sequence of the live elements (length `size`).
//! - **Deserialize**: from any sequence; spare capacity is not encoded.
//!
//! Deserializing requires `T: Default`, because the vector grows through
//! [`SimpleVector::push_back`](crate::SimpleVector::push_back).

// Crate imports
use crate::{reserve::reserve, vector::SimpleVector};

// Core imports
use core::{fmt, marker::PhantomData};

// External imports - serde
use serde::{Deserialize, Deserializer, Serialize, Serializer, de, ser};

// Upper bound on preallocation driven by an untrusted size hint.
const MAX_PREALLOC: usize = 4096;

impl<T: Serialize> Serialize for SimpleVector<T> {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        use ser::SerializeSeq;
        let sl = self.as_slice();
        let mut seq = s.serialize_seq(Some(sl.len()))?;
        for item in sl {
            seq.serialize_element(item)?;
        }
        seq.end()
    }
}

struct VecVisitor<T>(PhantomData<T>);

impl<'de, T> de::Visitor<'de> for VecVisitor<T>
where
    T: Deserialize<'de> + Default,
{
    type Value = SimpleVector<T>;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a sequence")
    }

    fn visit_seq<A: de::SeqAccess<'de>>(self, mut a: A) -> Result<Self::Value, A::Error> {
        let hint = a.size_hint().unwrap_or(0).min(MAX_PREALLOC);
        let mut out = SimpleVector::with_reserve(reserve(hint));
        while let Some(elem) = a.next_element::<T>()? {
            out.push_back(elem);
        }
        Ok(out)
    }
}

impl<'de, T> Deserialize<'de> for SimpleVector<T>
where
    T: Deserialize<'de> + Default,
{
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        d.deserialize_seq(VecVisitor(PhantomData))
    }
}
