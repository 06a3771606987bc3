// This file is part of simple-vector.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{array_ptr::ArrayPtr, reserve::ReserveProxy, vector::SimpleVector};

impl<T> SimpleVector<T> {
    /// Constructs an empty vector. Does not allocate.
    #[inline]
    pub const fn new() -> Self {
        Self {
            data: ArrayPtr::empty(),
            size: 0,
        }
    }

    /// Constructs a vector of `size` clones of `value`, with capacity `size`.
    pub fn from_elem(size: usize, value: T) -> Self
    where
        T: Clone,
    {
        core::iter::repeat_n(value, size).collect()
    }
}

impl<T: Default> SimpleVector<T> {
    /// Constructs a vector of `size` default values, with capacity `size`.
    #[inline]
    pub fn with_size(size: usize) -> Self {
        Self {
            data: ArrayPtr::new(size),
            size,
        }
    }

    /// Constructs an empty vector with `proxy.capacity()` slots preallocated.
    #[inline]
    pub fn with_reserve(proxy: ReserveProxy) -> Self {
        let mut v = Self::new();
        v.reserve(proxy.capacity());
        v
    }
}

impl<T> Default for SimpleVector<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Default> From<ReserveProxy> for SimpleVector<T> {
    fn from(proxy: ReserveProxy) -> Self {
        Self::with_reserve(proxy)
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use crate::{reserve, vector::SimpleVector};
    use alloc::string::String;

    #[test]
    fn test_new_does_not_allocate() {
        let v: SimpleVector<String> = SimpleVector::new();
        assert_eq!(v.capacity(), 0);
        assert!(!v.data.is_allocated());
    }

    #[test]
    fn test_with_size_fills_defaults() {
        let v: SimpleVector<i32> = SimpleVector::with_size(3);
        assert_eq!(v, [0, 0, 0]);
        assert_eq!(v.capacity(), 3);

        let empty: SimpleVector<i32> = SimpleVector::with_size(0);
        assert!(empty.is_empty());
        assert_eq!(empty.capacity(), 0);
    }

    #[test]
    fn test_from_elem_repeats_value() {
        let v = SimpleVector::from_elem(3, String::from("x"));
        assert_eq!(v.as_slice(), &["x", "x", "x"]);
        assert_eq!(v.capacity(), 3);
    }

    #[test]
    fn test_with_reserve_and_from_proxy() {
        let v: SimpleVector<i32> = SimpleVector::with_reserve(reserve(5));
        assert_eq!(v.size(), 0);
        assert_eq!(v.capacity(), 5);

        let w: SimpleVector<i32> = reserve(2).into();
        assert!(w.is_empty());
        assert_eq!(w.capacity(), 2);

        let z: SimpleVector<i32> = SimpleVector::with_reserve(reserve(0));
        assert_eq!(z.capacity(), 0);
    }
}
