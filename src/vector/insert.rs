// This file is part of simple-vector.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{error::Error, vector::SimpleVector};

impl<T: Default> SimpleVector<T> {
    /// Inserts `value` before position `index`, shifting `[index, size)` one
    /// slot towards the tail, and returns the position of the new element.
    ///
    /// A full vector grows with the same doubling policy as
    /// [`push_back`](SimpleVector::push_back), placing the value while the
    /// elements move.
    ///
    /// # Panics
    ///
    /// Panics if `index > size`. See [`try_insert`](SimpleVector::try_insert)
    /// for the checked form.
    pub fn insert(&mut self, index: usize, value: T) -> usize {
        let size = self.size;
        assert!(
            index <= size,
            "insertion index (is {index}) should be <= size (is {size})"
        );
        if size == self.capacity() {
            let new_capacity = self.grown_capacity();
            self.grow_and_place(new_capacity, index, value);
        } else {
            // Shift right: the spare slot at `size` rotates down to `index`.
            self.data.as_mut_slice()[index..=size].rotate_right(1);
            self.data[index] = value;
            self.size = size + 1;
        }
        index
    }

    /// Checked variant of [`insert`](SimpleVector::insert), returning
    /// [`Error::OutOfRange`] when `index > size` and leaving the vector
    /// unchanged.
    #[inline]
    pub fn try_insert(&mut self, index: usize, value: T) -> Result<usize, Error> {
        if index > self.size {
            return Err(Error::OutOfRange {
                index,
                size: self.size,
            });
        }
        Ok(self.insert(index, value))
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use crate::{Error, reserve, simple_vector, vector::SimpleVector};

    #[test]
    fn test_insert_at_bounds_and_shift_correctly() {
        let mut v: SimpleVector<i32> = SimpleVector::with_reserve(reserve(4));
        assert_eq!(v.insert(0, 1), 0); // front of empty
        assert_eq!(v.insert(1, 3), 1); // tail
        assert_eq!(v.insert(1, 2), 1); // middle
        assert_eq!(v, [1, 2, 3]);
        assert_eq!(v.insert(3, 4), 3); // exactly at size
        assert_eq!(v, [1, 2, 3, 4]);
        assert_eq!(v.capacity(), 4);
    }

    #[test]
    fn test_insert_when_full_doubles() {
        let mut v = simple_vector![10, 20, 30];
        assert_eq!(v.insert(0, 5), 0);
        assert_eq!(v, [5, 10, 20, 30]);
        assert_eq!(v.capacity(), 6);

        let mut e: SimpleVector<i32> = SimpleVector::new();
        e.insert(0, 1);
        assert_eq!(e.capacity(), 1);
    }

    #[test]
    fn test_insert_overwrites_spare_slot_only() {
        let mut v = simple_vector![1, 2, 3];
        v.pop_back();
        v.insert(0, 0);
        assert_eq!(v, [0, 1, 2]);
        assert_eq!(v.capacity(), 3);
    }

    #[test]
    #[should_panic]
    fn test_insert_past_size_panics() {
        let mut v = simple_vector![1, 2];
        v.insert(3, 9);
    }

    #[test]
    fn test_try_insert_err_is_noop() {
        let mut v = simple_vector![10, 20];
        assert_eq!(
            v.try_insert(3, 99),
            Err(Error::OutOfRange { index: 3, size: 2 })
        );
        assert_eq!(v, [10, 20]);
        assert_eq!(v.try_insert(2, 30), Ok(2));
        assert_eq!(v, [10, 20, 30]);
    }
}
