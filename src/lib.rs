// This file is part of simple-vector.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # `simple-vector`
//!
//! A `no_std` + `alloc`, growable, heap-backed vector, **with no `unsafe`**.
//!
//! The crate has two layers:
//!
//! - [`ArrayPtr<T>`] exclusively owns zero or one heap-allocated array. It can
//!   be moved, swapped, or released to the caller, but never cloned, so every
//!   block has exactly one owner and is freed exactly once.
//! - [`SimpleVector<T>`] holds one `ArrayPtr<T>` plus a logical size. Growth
//!   allocates a fresh, larger `ArrayPtr`, moves the live elements into it and
//!   swaps it in; the old block is freed when the temporary handle drops.
//!
//! ## High-level semantics
//!
//! - `size <= capacity`; only `[0, size)` is visible through slices,
//!   indexing and iteration.
//! - Appending to a full vector doubles its capacity (`0 → 1 → 2 → 4 → …`).
//! - [`SimpleVector::reserve`] and [`SimpleVector::resize`] grow to exactly
//!   the requested amount.
//! - Nothing shrinks the capacity; removal only reduces the size and resets
//!   the vacated slots to `T::default()`.
//! - Copies ([`Clone`]) are deep and capacity-tight; moves transfer the block.
//!
//! ## Checked and unchecked access
//!
//! Indexing, [`SimpleVector::insert`], [`SimpleVector::erase`] and
//! [`SimpleVector::pop_back`] panic when the caller breaks their bounds
//! contract, exactly like slices and `Vec`. [`SimpleVector::at`],
//! [`SimpleVector::try_insert`] and [`SimpleVector::try_erase`] report
//! [`Error::OutOfRange`] instead. Allocation failure is fatal.
//!
//! ## Features
//!
//! - `serde`: `Serialize` / `Deserialize` for `SimpleVector<T>` as a plain
//!   sequence (`T: Deserialize<'de> + Default`).
//! - `log`: emits `trace`-level records for every reallocation, with the old
//!   and new capacity.
//!
//! ## Example
//!
//! ```rust
//! use simple_vector::{SimpleVector, reserve, simple_vector};
//!
//! let mut v: SimpleVector<i32> = SimpleVector::with_reserve(reserve(2));
//! v.push_back(1);
//! v.push_back(3);
//! v.insert(1, 2);
//! assert_eq!(v.as_slice(), &[1, 2, 3]);
//! assert_eq!(v.capacity(), 4);
//! assert_eq!(v, simple_vector![1, 2, 3]);
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(not(test), no_std)]

extern crate alloc;

// Expands to a `log::trace!` record when the `log` feature is enabled and to
// nothing otherwise.
macro_rules! trace_growth {
    ($($arg:tt)*) => {
        #[cfg(feature = "log")]
        ::log::trace!(target: "simple_vector", $($arg)*);
    };
}

// Modules
mod array_ptr;
mod error;
mod index;
mod iter;
mod reserve;
#[cfg(feature = "serde")]
mod serde;
mod vector;

// Public exports (crate API surface)
pub use array_ptr::ArrayPtr;
pub use error::Error;
pub use iter::IntoIter;
pub use reserve::{ReserveProxy, reserve};
pub use vector::SimpleVector;
