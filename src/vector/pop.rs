// This file is part of simple-vector.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::vector::SimpleVector;

impl<T: Default> SimpleVector<T> {
    /// Drops the last element.
    ///
    /// # Panics
    ///
    /// Panics if the vector is empty.
    #[inline]
    pub fn pop_back(&mut self) {
        assert!(self.size > 0, "pop_back on an empty SimpleVector");
        self.vacate(self.size - 1);
    }

    /// Removes and returns the last element, if any.
    #[inline]
    pub fn pop(&mut self) -> Option<T> {
        if self.size == 0 {
            None
        } else {
            self.size -= 1;
            Some(core::mem::take(&mut self.data[self.size]))
        }
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use crate::{simple_vector, vector::SimpleVector};

    #[test]
    fn test_pop_back_keeps_capacity() {
        let mut v = simple_vector![1, 2, 3];
        v.pop_back();
        assert_eq!(v, [1, 2]);
        assert_eq!(v.capacity(), 3);
    }

    #[test]
    #[should_panic]
    fn test_pop_back_on_empty_panics() {
        let mut v: SimpleVector<i32> = SimpleVector::new();
        v.pop_back();
    }

    #[test]
    fn test_pop_result_may_be_ignored() {
        let mut v = simple_vector![1, 2, 3];
        v.pop();
        assert_eq!(v, [1, 2]);
    }

    #[test]
    fn test_pop() {
        let mut v = simple_vector![1, 2];
        assert_eq!(v.pop(), Some(2));
        assert_eq!(v.pop(), Some(1));
        assert_eq!(v.pop(), None);
        assert_eq!(v.capacity(), 2);
    }
}
