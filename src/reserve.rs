// This file is part of simple-vector.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Capacity reservation hint for constructing a [`SimpleVector`](crate::SimpleVector).

/// A requested capacity, used to build an empty vector with storage
/// preallocated.
///
/// Produced by [`reserve`] and consumed by
/// [`SimpleVector::with_reserve`](crate::SimpleVector::with_reserve) or the
/// matching `From` impl.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ReserveProxy {
    capacity: usize,
}

impl ReserveProxy {
    /// Wraps a requested capacity.
    #[inline]
    pub const fn new(capacity: usize) -> Self {
        Self { capacity }
    }

    /// Returns the requested capacity.
    #[inline]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }
}

/// Shorthand for [`ReserveProxy::new`].
///
/// ```rust
/// use simple_vector::{SimpleVector, reserve};
///
/// let v: SimpleVector<i32> = SimpleVector::with_reserve(reserve(8));
/// assert_eq!(v.size(), 0);
/// assert_eq!(v.capacity(), 8);
/// ```
#[inline]
pub const fn reserve(capacity: usize) -> ReserveProxy {
    ReserveProxy::new(capacity)
}
