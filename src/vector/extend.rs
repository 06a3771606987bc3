// This file is part of simple-vector.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::vector::SimpleVector;

impl<T: Default> Extend<T> for SimpleVector<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        let (lower, _) = iter.size_hint();
        self.grow_for(lower);
        for item in iter {
            self.push_back(item);
        }
    }
}

impl<'a, T: Default + Clone + 'a> Extend<&'a T> for SimpleVector<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().cloned());
    }
}

impl<T: Default + Clone> SimpleVector<T> {
    /// Appends clones of every element of `src`.
    ///
    /// Grows at most once, to the larger of the needed size and the next
    /// doubling step.
    #[inline]
    pub fn extend_from_slice(&mut self, src: &[T]) {
        self.extend(src);
    }
}
