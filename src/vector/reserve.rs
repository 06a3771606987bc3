// This file is part of simple-vector.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::vector::SimpleVector;

impl<T: Default> SimpleVector<T> {
    /// Grows the capacity to exactly `new_capacity` if it is larger than the
    /// current one; otherwise a no-op. The size never changes.
    pub fn reserve(&mut self, new_capacity: usize) {
        if new_capacity <= self.capacity() {
            return;
        }
        self.reallocate(new_capacity);
    }
}
