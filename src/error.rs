// Copyright 2015 The Rust Project Developers. See the COPYRIGHT
// file at the top-level directory of this distribution and at
// http://rust-lang.org/COPYRIGHT.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Errors shared by the heap and its cursors.

use std::collections::TryReserveError;

use thiserror::Error;

/// Convenience alias for operations that can fail with [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors reported by [`IntervalHeap`](crate::IntervalHeap) operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A capacity request that cannot be honored: zero, the representable
    /// maximum, or a resize below the current element count.
    #[error("invalid argument: {reason}")]
    InvalidArgument {
        /// What was wrong with the request.
        reason: &'static str,
    },

    /// The underlying buffer reservation failed.
    #[error("allocation failure: {0}")]
    AllocationFailure(#[from] TryReserveError),

    /// An extremum or removal operation on a heap with no elements.
    #[error("the heap is empty")]
    Empty,

    /// A position at or past the heap's element count.
    #[error("index {index} out of range for {len} elements")]
    OutOfRange {
        /// The requested position.
        index: usize,
        /// The heap's element count at the time of the request.
        len: usize,
    },
}
