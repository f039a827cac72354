//! # fastmergesort - parallel stable merge sort for fixed-width integers
//!
//! Parallel companion to the [`mergesort`] crate: the same stable,
//! recursive merge sort with the two disjoint sub-sorts executed as
//! independent rayon tasks.
//!
//! ## Quick Start
//!
//! ```rust
//! use fastmergesort::prelude::*;
//!
//! let mut data: Vec<i64> = (0..100_000).rev().collect();
//!
//! // Build the sorter with parallel execution (default)
//! let sorter = MergeSort::new()
//!     .sequential_cutoff(4096) // Fork only above this window size
//!     .build()?;
//!
//! sorter.sort(&mut data)?;
//!
//! assert!(data.windows(2).all(|w| w[0] <= w[1]));
//! # Result::<(), SortError>::Ok(())
//! ```
//!
//! ## How it parallelizes
//!
//! The scheduler splits each window at its midpoint with `split_at_mut`;
//! the two halves are statically non-overlapping and carry no shared
//! mutable state, so they are sorted by `rayon::join` with no locking. The
//! join is a barrier before the merge step, and every merge owns a private
//! scratch buffer for exactly its window.
//!
//! Sorting semantics (stability, ordering, error reporting, the numeric
//! value model) are identical to the sequential crate.

// Parallel execution engine.
mod engine;

// High-level fluent API wrapping the base builder.
mod api;

// Standard sorting prelude.
pub mod prelude {
    pub use crate::api::{
        sort, truncate, MergeSort, MergeSorter, NumericValue, Signedness, SortError, Width,
    };
}
