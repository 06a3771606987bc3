// This file is part of simple-vector.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for `SimpleVector`.
//!
//! Only range violations are reported as values. Allocation failure is fatal
//! and handled by the global allocator.

// Core imports
use core::{error::Error as CoreError, fmt};

/// Errors returned by checked operations on [`SimpleVector`](crate::SimpleVector).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// An index or position was outside the live range of the vector.
    ///
    /// Returned by [`SimpleVector::at`](crate::SimpleVector::at),
    /// [`SimpleVector::try_insert`](crate::SimpleVector::try_insert) and
    /// [`SimpleVector::try_erase`](crate::SimpleVector::try_erase).
    OutOfRange {
        /// The offending index.
        index: usize,
        /// The vector's size at the time of the call.
        size: usize,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfRange { index, size } => {
                write!(f, "index {index} out of range for size {size}")
            }
        }
    }
}

impl CoreError for Error {}
