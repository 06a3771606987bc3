// This file is part of simple-vector.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::vector::SimpleVector;

impl<T: Default> SimpleVector<T> {
    /// Appends `value` at the tail.
    ///
    /// When the vector is full the capacity doubles (`max(1, 2 * capacity)`)
    /// and the value is placed while the elements move to the new block.
    /// Amortized `O(1)`.
    #[inline]
    pub fn push_back(&mut self, value: T) {
        if self.size == self.capacity() {
            let new_capacity = self.grown_capacity();
            self.grow_and_place(new_capacity, self.size, value);
        } else {
            self.data[self.size] = value;
            self.size += 1;
        }
    }
}
