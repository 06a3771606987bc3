// This file is part of simple-vector.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{error::Error, vector::SimpleVector};

impl<T: Default> SimpleVector<T> {
    /// Removes the element at `index`, shifting `[index + 1, size)` one slot
    /// towards the head, and returns `index`.
    ///
    /// The returned position now holds the element that followed the removed
    /// one, or equals `size` if the last element was removed. Capacity is
    /// unchanged and the vacated tail slot is reset to `T::default()`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= size`. See [`try_erase`](SimpleVector::try_erase)
    /// for the checked form.
    pub fn erase(&mut self, index: usize) -> usize {
        let size = self.size;
        assert!(
            index < size,
            "removal index (is {index}) should be < size (is {size})"
        );
        // Shift left: the removed element rotates to the last live slot.
        self.data.as_mut_slice()[index..size].rotate_left(1);
        self.vacate(size - 1);
        index
    }

    /// Checked variant of [`erase`](SimpleVector::erase), returning
    /// [`Error::OutOfRange`] when `index >= size`.
    #[inline]
    pub fn try_erase(&mut self, index: usize) -> Result<usize, Error> {
        if index >= self.size {
            return Err(Error::OutOfRange {
                index,
                size: self.size,
            });
        }
        Ok(self.erase(index))
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use crate::{Error, simple_vector};
    use alloc::rc::Rc;

    #[test]
    fn test_erase_front_middle_last() {
        let mut v = simple_vector![1, 2, 3, 4, 5];
        assert_eq!(v.erase(0), 0);
        assert_eq!(v, [2, 3, 4, 5]);
        assert_eq!(v.erase(1), 1);
        assert_eq!(v, [2, 4, 5]);
        let last = v.size() - 1;
        assert_eq!(v.erase(last), 2);
        assert_eq!(v, [2, 4]);
        assert_eq!(v.size(), 2);
        assert_eq!(v.capacity(), 5);
    }

    #[test]
    fn test_erase_returned_position_holds_successor() {
        let mut v = simple_vector!['a', 'b', 'c'];
        let at = v.erase(1);
        assert_eq!(v[at], 'c');
        let at = v.erase(1);
        assert_eq!(at, v.size());
    }

    #[test]
    fn test_erase_drops_removed_element() {
        let marker = Rc::new(());
        let mut v = simple_vector![Some(Rc::clone(&marker)), None];
        assert_eq!(Rc::strong_count(&marker), 2);
        v.erase(0);
        assert_eq!(Rc::strong_count(&marker), 1);
        assert_eq!(v, [None]);
    }

    #[test]
    #[should_panic]
    fn test_erase_at_size_panics() {
        let mut v = simple_vector![1];
        v.erase(1);
    }

    #[test]
    fn test_try_erase() {
        let mut v = simple_vector![1, 2];
        assert_eq!(v.try_erase(2), Err(Error::OutOfRange { index: 2, size: 2 }));
        assert_eq!(v.try_erase(0), Ok(0));
        assert_eq!(v, [2]);
    }
}
