// This file is part of simple-vector.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Invariants for every reallocation:
// - the fresh block is allocated before the old one is touched;
// - live elements are moved with `swap_with_slice`, never cloned;
// - the old block ends up in the temporary handle and is freed when it drops.

// Crate imports
use crate::{array_ptr::ArrayPtr, vector::SimpleVector};

impl<T: Default> SimpleVector<T> {
    /// Capacity after one doubling step: `max(1, 2 * capacity)`.
    pub(crate) fn grown_capacity(&self) -> usize {
        match self.capacity() {
            0 => 1,
            cap => cap.checked_mul(2).unwrap_or_else(|| capacity_overflow()),
        }
    }

    /// Makes room for `additional` more elements, growing by at least one
    /// doubling step so that repeated small batches stay amortized `O(1)`.
    pub(crate) fn grow_for(&mut self, additional: usize) {
        let needed = self
            .size
            .checked_add(additional)
            .unwrap_or_else(|| capacity_overflow());
        if needed <= self.capacity() {
            return;
        }
        let new_capacity = core::cmp::max(needed, self.grown_capacity());
        self.reallocate(new_capacity);
    }

    /// Moves into a fresh block of `new_capacity` slots and places `item` at
    /// `pos` on the way.
    ///
    /// `[0, pos)` lands at the same offsets, `item` at `pos`, and `[pos, size)`
    /// one slot further towards the tail. Callers guarantee
    /// `pos <= size < new_capacity`.
    pub(crate) fn grow_and_place(&mut self, new_capacity: usize, pos: usize, item: T) {
        debug_assert!(pos <= self.size && self.size < new_capacity);
        let size = self.size;
        let mut fresh = ArrayPtr::new(new_capacity);
        {
            let old = self.data.as_mut_slice();
            let new = fresh.as_mut_slice();
            new[..pos].swap_with_slice(&mut old[..pos]);
            new[pos] = item;
            new[pos + 1..=size].swap_with_slice(&mut old[pos..size]);
        }
        trace_growth!(
            "grow: capacity {} -> {} (insert at {})",
            self.capacity(),
            new_capacity,
            pos
        );
        self.data.swap(&mut fresh);
        self.size = size + 1;
    }

    /// Moves the live elements into a fresh block of exactly `new_capacity`
    /// slots. Callers guarantee `new_capacity >= size`.
    pub(crate) fn reallocate(&mut self, new_capacity: usize) {
        debug_assert!(new_capacity >= self.size);
        let size = self.size;
        let mut fresh = ArrayPtr::new(new_capacity);
        fresh.as_mut_slice()[..size].swap_with_slice(&mut self.data.as_mut_slice()[..size]);
        trace_growth!(
            "reallocate: capacity {} -> {}",
            self.capacity(),
            new_capacity
        );
        self.data.swap(&mut fresh);
    }
}

#[cold]
#[inline(never)]
fn capacity_overflow() -> ! {
    panic!("capacity overflow")
}

#[cfg(test)]
mod tests {
    // Imports
    use crate::vector::SimpleVector;
    use alloc::rc::Rc;

    #[test]
    fn test_grown_capacity_sequence() {
        let mut v: SimpleVector<u8> = SimpleVector::new();
        assert_eq!(v.grown_capacity(), 1);
        v.reserve(1);
        assert_eq!(v.grown_capacity(), 2);
        v.reserve(3);
        assert_eq!(v.grown_capacity(), 6);
    }

    #[test]
    fn test_grow_for_doubles_small_batches_and_fits_large_ones() {
        let mut v: SimpleVector<u8> = SimpleVector::from([1, 2, 3]);
        v.grow_for(1);
        assert_eq!(v.capacity(), 6);
        v.grow_for(3);
        assert_eq!(v.capacity(), 6);
        v.grow_for(10);
        assert_eq!(v.capacity(), 13);
        assert_eq!(v, [1, 2, 3]);
    }

    #[test]
    fn test_grow_and_place_in_middle() {
        let mut v = SimpleVector::from([1, 2, 3, 4]);
        v.grow_and_place(8, 2, 99);
        assert_eq!(v, [1, 2, 99, 3, 4]);
        assert_eq!(v.capacity(), 8);
    }

    #[test]
    fn test_relocation_moves_instead_of_cloning() {
        let marker = Rc::new(());
        let mut v = SimpleVector::new();
        for _ in 0..9 {
            v.push_back(Some(Rc::clone(&marker)));
        }
        // One reference per live element plus the marker itself: nothing was
        // cloned and every old block was freed.
        assert_eq!(Rc::strong_count(&marker), 10);
        v.reserve(100);
        assert_eq!(Rc::strong_count(&marker), 10);
        drop(v);
        assert_eq!(Rc::strong_count(&marker), 1);
    }
}
