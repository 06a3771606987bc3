// This file is part of simple-vector.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{array_ptr::ArrayPtr, vector::SimpleVector};

// Alloc imports
use alloc::{boxed::Box, vec::Vec};

// Every conversion here produces a capacity-tight vector (size == capacity).

impl<T> From<Box<[T]>> for SimpleVector<T> {
    fn from(block: Box<[T]>) -> Self {
        let size = block.len();
        Self {
            data: ArrayPtr::from(block),
            size,
        }
    }
}

impl<T> From<Vec<T>> for SimpleVector<T> {
    fn from(v: Vec<T>) -> Self {
        v.into_boxed_slice().into()
    }
}

impl<T, const N: usize> From<[T; N]> for SimpleVector<T> {
    fn from(arr: [T; N]) -> Self {
        Box::<[T]>::from(arr).into()
    }
}

impl<T: Clone> From<&[T]> for SimpleVector<T> {
    fn from(src: &[T]) -> Self {
        Box::<[T]>::from(src).into()
    }
}

impl<T> FromIterator<T> for SimpleVector<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        iter.into_iter().collect::<Box<[T]>>().into()
    }
}

impl<T> From<SimpleVector<T>> for Vec<T> {
    fn from(mut v: SimpleVector<T>) -> Self {
        let mut out = v.data.release().map(<[T]>::into_vec).unwrap_or_default();
        out.truncate(v.size);
        out
    }
}

/// Creates a [`SimpleVector`] from a list of elements, like `vec!`.
///
/// The result's capacity equals the number of elements.
///
/// ```rust
/// use simple_vector::simple_vector;
///
/// let v = simple_vector![9, 2, 3];
/// assert_eq!(v.size(), 3);
/// assert_eq!(v.capacity(), 3);
/// ```
#[macro_export]
macro_rules! simple_vector {
    () => {
        $crate::SimpleVector::new()
    };
    ($($x:expr),+ $(,)?) => {
        $crate::SimpleVector::from([$($x),+])
    };
}
