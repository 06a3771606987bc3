// This file is part of simple-vector.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::vector::SimpleVector;

impl<T: Default> SimpleVector<T> {
    /// Sets the size to `new_size`.
    ///
    /// - Within capacity, growing exposes slots holding `T::default()` and
    ///   shrinking resets the vacated slots; no reallocation happens.
    /// - Beyond capacity, the storage is reallocated to exactly `new_size`
    ///   slots (no doubling), so `size == capacity == new_size` afterwards.
    pub fn resize(&mut self, new_size: usize) {
        if new_size <= self.size {
            self.vacate(new_size);
            return;
        }
        if new_size > self.capacity() {
            self.reallocate(new_size);
        }
        // Spare slots already hold defaults: vacated slots are reset and fresh
        // blocks are default-filled.
        self.size = new_size;
    }
}
