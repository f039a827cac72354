//! High-level API for stable fixed-width integer sorting.
//!
//! ## Purpose
//!
//! This module provides the primary user-facing entry point for the sort.
//! It implements a fluent builder for configuring execution and a sorter
//! handle that validates inputs before delegating to the engine.
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder with sensible defaults for all parameters.
//! * **Validated**: Every range-taking call checks preconditions before any
//!   element access and reports violations as [`SortError`] values.
//! * **Type-Safe**: Generic over `PrimInt` types, exactly the fixed-width
//!   integer primitives; the declared element type's ordering is the
//!   comparison order of the sort.
//!
//! ## Key concepts
//!
//! * **Configuration Flow**: `MergeSort::new()`, chained options, `.build()`.
//! * **In-place**: the caller owns the buffer before and after the call; the
//!   sorter only moves elements, it never allocates or frees the buffer.

// External dependencies
use num_traits::PrimInt;

// Internal dependencies
use crate::engine::executor::{self, SortConfig, SplitPassFn};

// Publicly re-exported types
pub use crate::primitives::errors::SortError;
pub use crate::primitives::numeric::{truncate, NumericValue, Signedness, Width};

// ============================================================================
// Builder
// ============================================================================

/// Fluent builder for configuring a [`MergeSorter`].
#[derive(Debug, Clone, Copy)]
pub struct MergeSort<T: PrimInt> {
    /// Skip the recursion when the input is already sorted.
    pub detect_presorted: Option<bool>,

    // ++++++++++++++++++++++++++++++++++++++
    // +               DEV                  +
    // ++++++++++++++++++++++++++++++++++++++
    /// Custom split pass over the two halves (enables parallel execution).
    #[doc(hidden)]
    pub split_pass: Option<SplitPassFn<T>>,

    /// Window size below which a custom split pass recurses sequentially.
    #[doc(hidden)]
    pub sequential_cutoff: Option<usize>,
}

impl<T: PrimInt> MergeSort<T> {
    /// Create a builder with default configuration.
    pub fn new() -> Self {
        Self {
            detect_presorted: None,
            split_pass: None,
            sequential_cutoff: None,
        }
    }

    /// Skip the recursion entirely when the input is already sorted
    /// (default: `true`).
    pub fn detect_presorted(mut self, enabled: bool) -> Self {
        self.detect_presorted = Some(enabled);
        self
    }

    /// Inject a custom split pass (companion-crate hook).
    #[doc(hidden)]
    pub fn split_pass(mut self, pass: SplitPassFn<T>) -> Self {
        self.split_pass = Some(pass);
        self
    }

    /// Set the sequential cutoff consumed by a custom split pass.
    #[doc(hidden)]
    pub fn sequential_cutoff(mut self, cutoff: usize) -> Self {
        self.sequential_cutoff = Some(cutoff);
        self
    }

    /// Finalize the configuration into a [`MergeSorter`].
    pub fn build(self) -> MergeSorter<T> {
        let defaults: SortConfig<T> = SortConfig::default();
        MergeSorter {
            config: SortConfig {
                detect_presorted: self.detect_presorted.unwrap_or(defaults.detect_presorted),
                split_pass: self.split_pass,
                sequential_cutoff: self.sequential_cutoff.unwrap_or(defaults.sequential_cutoff),
            },
        }
    }
}

impl<T: PrimInt> Default for MergeSort<T> {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Sorter
// ============================================================================

/// Configured sorter for slices of one fixed-width integer type.
#[derive(Debug, Clone, Copy)]
pub struct MergeSorter<T: PrimInt> {
    config: SortConfig<T>,
}

impl<T: PrimInt> MergeSorter<T> {
    /// Sort the whole buffer in place, ascending and stable.
    ///
    /// After return, `data` is sorted non-decreasing under the element
    /// type's comparison order and is a permutation of the input.
    pub fn sort(&self, data: &mut [T]) -> Result<(), SortError> {
        let len = data.len();
        executor::sort_range(data, 0, len, &self.config)
    }

    /// Sort `data[start..end)` in place, ascending and stable.
    ///
    /// The range is validated before any element access; `start > end` or
    /// `end > data.len()` reports [`SortError::RangeOutOfBounds`].
    pub fn sort_range(&self, data: &mut [T], start: usize, end: usize) -> Result<(), SortError> {
        executor::sort_range(data, start, end, &self.config)
    }
}

// ============================================================================
// Convenience Entry Point
// ============================================================================

/// Sort a buffer of fixed-width integers in place with the default
/// configuration.
///
/// ```
/// use mergesort::prelude::*;
///
/// let mut data: [i64; 5] = [4_294_967_296, -12, 123, 12, 32];
/// sort(&mut data)?;
/// assert_eq!(data, [-12, 12, 32, 123, 4_294_967_296]);
/// # Result::<(), SortError>::Ok(())
/// ```
pub fn sort<T: PrimInt>(data: &mut [T]) -> Result<(), SortError> {
    MergeSort::new().build().sort(data)
}
