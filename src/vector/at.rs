// This file is part of simple-vector.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{error::Error, vector::SimpleVector};

impl<T> SimpleVector<T> {
    /// Returns the element at `index`, or [`Error::OutOfRange`] if
    /// `index >= size`.
    #[inline]
    pub fn at(&self, index: usize) -> Result<&T, Error> {
        let size = self.size;
        self.as_slice()
            .get(index)
            .ok_or(Error::OutOfRange { index, size })
    }

    /// Mutable variant of [`at`](SimpleVector::at).
    #[inline]
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T, Error> {
        let size = self.size;
        self.as_mut_slice()
            .get_mut(index)
            .ok_or(Error::OutOfRange { index, size })
    }
}
