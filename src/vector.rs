// This file is part of simple-vector.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The `SimpleVector` type and its inherent API.
//!
//! `SimpleVector<T>` is a growable, contiguous vector. Its elements live in a
//! single heap block owned by an [`ArrayPtr`]; the logical size tracks how
//! much of that block is live. Growth always allocates a fresh block, moves
//! the live elements across and swaps the new handle in, so the old block is
//! freed exactly once when the temporary handle goes out of scope.

mod at;
mod erase;
mod extend;
mod from;
mod growth;
mod insert;
mod new;
mod pop;
mod push;
mod reserve;
mod resize;
mod slice;

// Crate imports
use crate::array_ptr::ArrayPtr;

// Core imports
use core::{
    borrow::{Borrow, BorrowMut},
    fmt,
    hash::{Hash, Hasher},
    ops::{Deref, DerefMut},
};

/// A growable, heap-allocated vector.
///
/// `SimpleVector<T>` keeps `size` live elements at the front of a block of
/// `capacity` slots:
///
/// - `0 <= size <= capacity` always holds;
/// - slots `[0, size)` are live and visible through [`as_slice`], indexing
///   and iteration;
/// - slots `[size, capacity)` are spare and hold `T::default()`.
///
/// # Growth policy
///
/// - [`push_back`] and [`insert`] on a full vector double the capacity
///   (`0 → 1 → 2 → 4 → …`), giving amortized `O(1)` appends.
/// - [`reserve`] and [`resize`] grow to exactly the requested amount.
/// - Nothing ever shrinks the capacity; [`clear`], [`erase`] and [`pop_back`]
///   only reduce the size.
///
/// Relocation moves elements into the new block; it never clones them.
///
/// # Checked and unchecked access
///
/// Indexing (`v[i]`) and the cursor operations ([`insert`], [`erase`],
/// [`pop_back`]) expect the caller to stay within bounds and panic otherwise.
/// [`at`], [`try_insert`] and [`try_erase`] report
/// [`Error::OutOfRange`](crate::Error::OutOfRange) instead.
///
/// # Element bounds
///
/// Operations that create slots (`push_back`, `insert`, `resize`, `reserve`,
/// and the sized constructors) need `T: Default` to fill new storage. Clearing
/// and removal also need it, because vacated slots are reset to the default
/// value so that dropped elements release their resources immediately.
///
/// # Examples
///
/// ```rust
/// use simple_vector::{SimpleVector, simple_vector};
///
/// let mut v = SimpleVector::new();
/// v.push_back(1);
/// v.push_back(2);
/// v.push_back(3);
/// assert_eq!(v.capacity(), 4);
///
/// let at = v.insert(1, 9);
/// assert_eq!(at, 1);
/// v.erase(0);
/// assert_eq!(v, simple_vector![9, 2, 3]);
/// assert!(v.at(3).is_err());
/// ```
///
/// [`as_slice`]: SimpleVector::as_slice
/// [`push_back`]: SimpleVector::push_back
/// [`insert`]: SimpleVector::insert
/// [`reserve`]: SimpleVector::reserve
/// [`resize`]: SimpleVector::resize
/// [`clear`]: SimpleVector::clear
/// [`erase`]: SimpleVector::erase
/// [`pop_back`]: SimpleVector::pop_back
/// [`at`]: SimpleVector::at
/// [`try_insert`]: SimpleVector::try_insert
/// [`try_erase`]: SimpleVector::try_erase
pub struct SimpleVector<T> {
    pub(crate) data: ArrayPtr<T>,
    pub(crate) size: usize,
}

impl<T> SimpleVector<T> {
    /// Returns the number of live elements.
    #[inline]
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Alias for [`size`](SimpleVector::size).
    #[inline]
    pub const fn len(&self) -> usize {
        self.size
    }

    /// Returns the number of allocated slots.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if `size == 0`.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Returns `Some(&T)` if `i < size`, otherwise `None`.
    #[inline]
    pub fn get(&self, i: usize) -> Option<&T> {
        self.as_slice().get(i)
    }

    /// Returns `Some(&mut T)` if `i < size`, otherwise `None`.
    #[inline]
    pub fn get_mut(&mut self, i: usize) -> Option<&mut T> {
        self.as_mut_slice().get_mut(i)
    }

    // iterators
    /// Shorthand for `self.as_slice().iter()`.
    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    /// Shorthand for `self.as_mut_slice().iter_mut()`.
    #[inline]
    pub fn iter_mut(&mut self) -> core::slice::IterMut<'_, T> {
        self.as_mut_slice().iter_mut()
    }

    /// Exchanges storage and size with `other` in `O(1)`.
    #[inline]
    pub fn swap(&mut self, other: &mut Self) {
        self.data.swap(&mut other.data);
        core::mem::swap(&mut self.size, &mut other.size);
    }
}

impl<T: Default> SimpleVector<T> {
    /// Sets the size to `0`, keeping the allocated storage.
    ///
    /// Every live element is replaced by `T::default()`, so this is `O(size)`.
    #[inline]
    pub fn clear(&mut self) {
        self.vacate(0);
    }

    /// Shrinks the size to `new_size`, resetting the vacated slots.
    ///
    /// Callers guarantee `new_size <= size`.
    pub(crate) fn vacate(&mut self, new_size: usize) {
        let size = self.size;
        for slot in &mut self.data.as_mut_slice()[new_size..size] {
            *slot = T::default();
        }
        self.size = new_size;
    }
}

impl<T: fmt::Debug> fmt::Debug for SimpleVector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SimpleVector")
            .field("size", &self.size)
            .field("capacity", &self.capacity())
            .field("elements", &self.as_slice())
            .finish()
    }
}

impl<T: PartialEq> PartialEq for SimpleVector<T> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}
impl<T: Eq> Eq for SimpleVector<T> {}
impl<T: Ord> Ord for SimpleVector<T> {
    fn cmp(&self, other: &Self) -> core::cmp::Ordering {
        self.as_slice().cmp(other.as_slice())
    }
}
impl<T: PartialOrd> PartialOrd for SimpleVector<T> {
    fn partial_cmp(&self, other: &Self) -> Option<core::cmp::Ordering> {
        self.as_slice().partial_cmp(other.as_slice())
    }
}
impl<T: Hash> Hash for SimpleVector<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state)
    }
}

impl<T: PartialEq> PartialEq<[T]> for SimpleVector<T> {
    fn eq(&self, other: &[T]) -> bool {
        self.as_slice() == other
    }
}
impl<T: PartialEq, const N: usize> PartialEq<[T; N]> for SimpleVector<T> {
    fn eq(&self, other: &[T; N]) -> bool {
        self.as_slice() == other
    }
}

/// Deep copy. The clone's capacity equals the source's size.
impl<T: Clone> Clone for SimpleVector<T> {
    fn clone(&self) -> Self {
        Self::from(self.as_slice())
    }
}

impl<T> Deref for SimpleVector<T> {
    type Target = [T];
    fn deref(&self) -> &Self::Target {
        self.as_slice()
    }
}
impl<T> DerefMut for SimpleVector<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.as_mut_slice()
    }
}

impl<T> AsRef<[T]> for SimpleVector<T> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}
impl<T> AsMut<[T]> for SimpleVector<T> {
    fn as_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

// Borrow ergonomics (treat as a slice)
impl<T> Borrow<[T]> for SimpleVector<T> {
    fn borrow(&self) -> &[T] {
        self.as_slice()
    }
}
impl<T> BorrowMut<[T]> for SimpleVector<T> {
    fn borrow_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}
