// This file is part of simple-vector.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The [`ArrayPtr`] unique-ownership array handle.
//!
//! `ArrayPtr<T>` owns zero or one heap-allocated block of `T`. It can be moved,
//! swapped and released, but never duplicated: there is no `Clone` impl, so
//! the block behind a handle always has exactly one owner and is freed exactly
//! once.
//!
//! ```compile_fail
//! use simple_vector::ArrayPtr;
//!
//! let a: ArrayPtr<u8> = ArrayPtr::new(4);
//! let b: ArrayPtr<u8> = a.clone(); // ownership is unique
//! ```

// Crate imports
use alloc::{boxed::Box, vec::Vec};

// Core imports
use core::{
    fmt,
    ops::{Index, IndexMut},
    ptr,
};

/// Exclusive owner of a heap-allocated, fixed-length array.
///
/// The length of the owned block is fixed when it is allocated or adopted.
/// An empty handle owns nothing; a zero-length request or a zero-length
/// adopted block also yields an empty handle.
///
/// # Examples
///
/// ```rust
/// use simple_vector::ArrayPtr;
///
/// let mut a: ArrayPtr<i32> = ArrayPtr::new(3);
/// a[1] = 5;
/// assert_eq!(a.as_slice(), &[0, 5, 0]);
///
/// let mut b = ArrayPtr::empty();
/// a.swap(&mut b);
/// assert!(!a.is_allocated());
///
/// let block = b.release().unwrap();
/// assert_eq!(&*block, &[0, 5, 0]);
/// assert!(!b.is_allocated());
/// ```
pub struct ArrayPtr<T> {
    raw: Option<Box<[T]>>,
}

impl<T> ArrayPtr<T> {
    /// Constructs a handle that owns nothing.
    #[inline]
    pub const fn empty() -> Self {
        Self { raw: None }
    }

    /// Allocates `len` default-constructed elements.
    ///
    /// Returns an empty handle when `len == 0`. Allocation failure aborts via
    /// the global allocator's error handler.
    pub fn new(len: usize) -> Self
    where
        T: Default,
    {
        if len == 0 {
            return Self::empty();
        }
        let raw: Box<[T]> = core::iter::repeat_with(T::default).take(len).collect();
        Self { raw: Some(raw) }
    }

    /// Takes ownership of a caller-supplied block, or of nothing.
    ///
    /// Never allocates.
    #[inline]
    pub fn from_raw(raw: Option<Box<[T]>>) -> Self {
        Self {
            raw: raw.filter(|b| !b.is_empty()),
        }
    }

    /// Returns `true` if the handle currently owns a block.
    #[inline]
    pub const fn is_allocated(&self) -> bool {
        self.raw.is_some()
    }

    /// Returns the length of the owned block (`0` when empty).
    #[inline]
    pub fn len(&self) -> usize {
        self.raw.as_deref().map_or(0, <[T]>::len)
    }

    /// Returns `true` if the handle owns nothing.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        !self.is_allocated()
    }

    /// Non-owning view of the block, or `None` when nothing is owned.
    #[inline]
    pub fn get(&self) -> Option<&[T]> {
        self.raw.as_deref()
    }

    /// Mutable non-owning view of the block, or `None` when nothing is owned.
    #[inline]
    pub fn get_mut(&mut self) -> Option<&mut [T]> {
        self.raw.as_deref_mut()
    }

    /// The whole block as a slice; empty when nothing is owned.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        self.raw.as_deref().unwrap_or(&[])
    }

    /// The whole block as a mutable slice; empty when nothing is owned.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        match self.raw.as_deref_mut() {
            Some(block) => block,
            None => &mut [],
        }
    }

    /// Address of the owned block, or null when nothing is owned.
    ///
    /// Ownership is not transferred.
    #[inline]
    pub fn as_ptr(&self) -> *const T {
        self.raw.as_deref().map_or(ptr::null(), <[T]>::as_ptr)
    }

    /// Mutable address of the owned block, or null when nothing is owned.
    #[inline]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.raw
            .as_deref_mut()
            .map_or(ptr::null_mut(), <[T]>::as_mut_ptr)
    }

    /// Gives up ownership of the block and leaves the handle empty.
    ///
    /// The caller becomes responsible for the returned block.
    #[inline]
    #[must_use = "dropping the released block frees it"]
    pub fn release(&mut self) -> Option<Box<[T]>> {
        self.raw.take()
    }

    /// Exchanges the owned blocks of `self` and `other` without touching
    /// their contents.
    #[inline]
    pub fn swap(&mut self, other: &mut Self) {
        core::mem::swap(&mut self.raw, &mut other.raw);
    }
}

impl<T> Default for ArrayPtr<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> From<Box<[T]>> for ArrayPtr<T> {
    fn from(block: Box<[T]>) -> Self {
        Self::from_raw(Some(block))
    }
}

impl<T> From<Vec<T>> for ArrayPtr<T> {
    fn from(v: Vec<T>) -> Self {
        v.into_boxed_slice().into()
    }
}

impl<T> Index<usize> for ArrayPtr<T> {
    type Output = T;
    fn index(&self, i: usize) -> &Self::Output {
        &self.as_slice()[i]
    }
}

impl<T> IndexMut<usize> for ArrayPtr<T> {
    fn index_mut(&mut self, i: usize) -> &mut Self::Output {
        &mut self.as_mut_slice()[i]
    }
}

impl<T: fmt::Debug> fmt::Debug for ArrayPtr<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ArrayPtr").field("block", &self.get()).finish()
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use super::ArrayPtr;
    use alloc::{boxed::Box, rc::Rc, vec};

    #[test]
    fn test_new_allocates_defaults() {
        let a: ArrayPtr<u32> = ArrayPtr::new(4);
        assert!(a.is_allocated());
        assert_eq!(a.len(), 4);
        assert_eq!(a.as_slice(), &[0, 0, 0, 0]);
    }

    #[test]
    fn test_zero_length_holds_nothing() {
        let a: ArrayPtr<u32> = ArrayPtr::new(0);
        assert!(!a.is_allocated());
        assert!(a.is_empty());
        assert!(a.as_ptr().is_null());
        assert_eq!(a.get(), None);

        let adopted: ArrayPtr<u32> = ArrayPtr::from(Box::<[u32]>::from([]));
        assert!(!adopted.is_allocated());
    }

    #[test]
    fn test_adopt_and_release_round_trip() {
        let block: Box<[i32]> = vec![1, 2, 3].into_boxed_slice();
        let addr = block.as_ptr();
        let mut a = ArrayPtr::from_raw(Some(block));
        assert_eq!(a.as_ptr(), addr);

        let back = a.release().unwrap();
        assert_eq!(back.as_ptr(), addr);
        assert!(!a.is_allocated());
        assert!(a.release().is_none());
    }

    #[test]
    fn test_index_and_index_mut() {
        let mut a: ArrayPtr<i32> = ArrayPtr::new(3);
        a[0] = 10;
        a[2] = 30;
        assert_eq!(a[0], 10);
        assert_eq!(a[1], 0);
        assert_eq!(a.as_slice(), &[10, 0, 30]);
    }

    #[test]
    #[should_panic]
    fn test_index_past_block_panics() {
        let a: ArrayPtr<i32> = ArrayPtr::new(2);
        let _ = a[2];
    }

    #[test]
    fn test_swap_exchanges_blocks_not_contents() {
        let mut a = ArrayPtr::from(vec![1, 2]);
        let mut b = ArrayPtr::from(vec![7, 8, 9]);
        let (pa, pb) = (a.as_ptr(), b.as_ptr());
        a.swap(&mut b);
        assert_eq!(a.as_ptr(), pb);
        assert_eq!(b.as_ptr(), pa);
        assert_eq!(a.as_slice(), &[7, 8, 9]);
        assert_eq!(b.as_slice(), &[1, 2]);
    }

    #[test]
    fn test_move_leaves_source_empty_via_take() {
        let mut a = ArrayPtr::from(vec![1, 2, 3]);
        let b = core::mem::take(&mut a);
        assert!(!a.is_allocated());
        assert_eq!(b.as_slice(), &[1, 2, 3]);
    }

    #[test]
    fn test_drop_frees_elements_exactly_once() {
        let marker = Rc::new(());
        {
            let mut a = ArrayPtr::from(vec![Rc::clone(&marker), Rc::clone(&marker)]);
            assert_eq!(Rc::strong_count(&marker), 3);
            let mut b = ArrayPtr::empty();
            a.swap(&mut b);
            assert_eq!(Rc::strong_count(&marker), 3);
        }
        assert_eq!(Rc::strong_count(&marker), 1);
    }

    #[test]
    fn test_as_mut_ptr_matches_slice() {
        let mut a: ArrayPtr<u8> = ArrayPtr::new(2);
        let p = a.as_mut_ptr();
        assert_eq!(p, a.as_mut_slice().as_mut_ptr());
        let mut e: ArrayPtr<u8> = ArrayPtr::empty();
        assert!(e.as_mut_ptr().is_null());
        assert!(e.get_mut().is_none());
    }
}
