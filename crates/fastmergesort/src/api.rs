//! High-level API for parallel stable sorting.
//!
//! ## Purpose
//!
//! This module provides the user-facing entry point for sorting with
//! parallel execution. It wraps the base `mergesort` builder, injecting the
//! rayon split pass, and defaults to parallel execution.
//!
//! ## Design notes
//!
//! * **Fluent Integration**: re-uses the base builder pattern.
//! * **Parallel-First**: defaults to parallel execution where beneficial;
//!   `.parallel(false)` restores the sequential scheduler.
//! * **Feature-Gated**: without the `cpu` feature the wrapper degrades to
//!   the sequential base implementation.
//!
//! ### Configuration Flow
//!
//! 1. Create a [`MergeSort`] via `MergeSort::new()`.
//! 2. Chain configuration methods (`.sequential_cutoff()`, etc.).
//! 3. Call `.build()`; cutoff validation happens here.

// Feature-gated imports
#[cfg(feature = "cpu")]
use crate::engine::executor::parallel_split_pass;

// External dependencies
use num_traits::PrimInt;

// Import the base builder for delegation
use mergesort::internals::api::MergeSort as BaseMergeSort;
use mergesort::internals::api::MergeSorter as BaseMergeSorter;

// Publicly re-exported types
pub use mergesort::internals::api::{truncate, NumericValue, Signedness, SortError, Width};

// ============================================================================
// Builder
// ============================================================================

/// Fluent builder for configuring a parallel [`MergeSorter`].
#[derive(Debug, Clone, Copy)]
pub struct MergeSort<T: PrimInt + Send> {
    /// Base configuration delegated to the core crate.
    base: BaseMergeSort<T>,

    /// Whether to inject the parallel split pass (default: `true`).
    parallel: bool,

    /// Window size below which the split pass recurses sequentially.
    sequential_cutoff: Option<usize>,
}

impl<T: PrimInt + Send> MergeSort<T> {
    /// Create a builder with default configuration (parallel execution on).
    pub fn new() -> Self {
        Self {
            base: BaseMergeSort::new(),
            parallel: true,
            sequential_cutoff: None,
        }
    }

    /// Skip the recursion entirely when the input is already sorted
    /// (default: `true`).
    pub fn detect_presorted(mut self, enabled: bool) -> Self {
        self.base = self.base.detect_presorted(enabled);
        self
    }

    /// Enable or disable parallel execution (default: enabled).
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Window size below which the two halves are sorted sequentially
    /// instead of forked. Must be at least 1; validated in [`build`].
    ///
    /// [`build`]: MergeSort::build
    pub fn sequential_cutoff(mut self, cutoff: usize) -> Self {
        self.sequential_cutoff = Some(cutoff);
        self
    }

    /// Finalize the configuration into a [`MergeSorter`].
    pub fn build(self) -> Result<MergeSorter<T>, SortError> {
        if let Some(cutoff) = self.sequential_cutoff {
            if cutoff == 0 {
                return Err(SortError::InvalidCutoff(cutoff));
            }
        }

        let mut base = self.base;
        if let Some(cutoff) = self.sequential_cutoff {
            base = base.sequential_cutoff(cutoff);
        }

        #[cfg(feature = "cpu")]
        if self.parallel {
            base = base.split_pass(parallel_split_pass::<T>);
        }

        Ok(MergeSorter {
            inner: base.build(),
        })
    }
}

impl<T: PrimInt + Send> Default for MergeSort<T> {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Sorter
// ============================================================================

/// Configured parallel sorter for slices of one fixed-width integer type.
#[derive(Debug, Clone, Copy)]
pub struct MergeSorter<T: PrimInt + Send> {
    inner: BaseMergeSorter<T>,
}

impl<T: PrimInt + Send> MergeSorter<T> {
    /// Sort the whole buffer in place, ascending and stable.
    pub fn sort(&self, data: &mut [T]) -> Result<(), SortError> {
        self.inner.sort(data)
    }

    /// Sort `data[start..end)` in place, ascending and stable.
    pub fn sort_range(&self, data: &mut [T], start: usize, end: usize) -> Result<(), SortError> {
        self.inner.sort_range(data, start, end)
    }
}

// ============================================================================
// Convenience Entry Point
// ============================================================================

/// Sort a buffer of fixed-width integers in place, in parallel, with the
/// default configuration.
pub fn sort<T: PrimInt + Send>(data: &mut [T]) -> Result<(), SortError> {
    MergeSort::new().build()?.sort(data)
}
