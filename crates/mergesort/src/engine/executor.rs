//! Recursive scheduler for stable merge sorting.
//!
//! ## Purpose
//!
//! This module provides the sort scheduler: it partitions an index range,
//! recursively sorts the two halves, and invokes the merge kernel to
//! combine them. It owns the configuration record threaded through the
//! recursion and the hook by which companion crates substitute a parallel
//! split pass.
//!
//! ## Design notes
//!
//! * **Validated entry**: range-taking entry points check preconditions
//!   before any element access; the recursion itself produces only valid
//!   sub-ranges by construction.
//! * **Disjoint halves**: the two recursive sub-sorts operate on the halves
//!   of `split_at_mut`, which are statically non-overlapping. A parallel
//!   implementation may run them as independent tasks with no locking.
//! * **Immutable configuration**: [`SortConfig`] is built once and passed by
//!   reference down the recursion; no module-level mutable state anywhere.
//! * **Hook injection**: the split pass is a plain function pointer so a
//!   companion crate can swap in a work-stealing implementation without this
//!   crate depending on any runtime.
//!
//! ## Invariants
//!
//! * Recursion depth is O(log n); total work is O(n log n).
//! * Each merge call owns a private scratch buffer sized to its window.
//! * No write ever lands outside the `[start, end)` range of its call.
//!
//! ## Non-goals
//!
//! * This module does not expose a public API (handled by `api`).
//! * This module does not schedule threads itself; parallelism arrives only
//!   through the injected split pass.

// Internal dependencies
use crate::algorithms::merge::merge_runs_with_scratch;
use crate::engine::validator::Validator;
use crate::primitives::errors::SortError;
use crate::primitives::scratch::ScratchBuffer;

// ============================================================================
// Type Definitions
// ============================================================================

/// Signature for a custom split pass over the two disjoint halves of a
/// window (enables parallel execution).
#[doc(hidden)]
pub type SplitPassFn<T> = fn(
    &mut [T],        // left half
    &mut [T],        // right half
    &SortConfig<T>,  // configuration, threaded through the recursion
) -> Result<(), SortError>;

// ============================================================================
// Configuration
// ============================================================================

/// Default window size below which an injected split pass should fall back
/// to sequential recursion.
pub const DEFAULT_SEQUENTIAL_CUTOFF: usize = 8 * 1024;

/// Configuration for sort execution.
///
/// Built once by the API layer and passed by reference down the recursion.
#[derive(Debug, Clone, Copy)]
pub struct SortConfig<T> {
    /// Skip the recursion entirely when the input is already sorted.
    pub detect_presorted: bool,

    /// Custom split pass over the two halves (enables parallel execution).
    #[doc(hidden)]
    pub split_pass: Option<SplitPassFn<T>>,

    /// Window size below which a custom split pass recurses sequentially.
    #[doc(hidden)]
    pub sequential_cutoff: usize,
}

impl<T> Default for SortConfig<T> {
    fn default() -> Self {
        Self {
            detect_presorted: true,
            split_pass: None,
            sequential_cutoff: DEFAULT_SEQUENTIAL_CUTOFF,
        }
    }
}

// ============================================================================
// Scheduler
// ============================================================================

/// Sort `data[start..end)` in place, validating the range first.
pub fn sort_range<T: Copy + Ord>(
    data: &mut [T],
    start: usize,
    end: usize,
    config: &SortConfig<T>,
) -> Result<(), SortError> {
    Validator::validate_range(data.len(), start, end)?;

    let window = &mut data[start..end];
    if config.detect_presorted && is_sorted_run(window) {
        return Ok(());
    }
    sort_slice(window, config)
}

/// Recursively sort a whole slice in place.
///
/// Base case: 0 or 1 elements are trivially sorted. Otherwise the slice is
/// split at `len / 2`, both halves are sorted (sequentially, or through the
/// configured split pass), and the halves are merged.
pub fn sort_slice<T: Copy + Ord>(data: &mut [T], config: &SortConfig<T>) -> Result<(), SortError> {
    let len = data.len();
    if len <= 1 {
        return Ok(());
    }

    let mid = len / 2;
    {
        let (left, right) = data.split_at_mut(mid);
        match config.split_pass {
            Some(pass) => pass(left, right, config)?,
            None => {
                sort_slice(left, config)?;
                sort_slice(right, config)?;
            }
        }
    }

    merge_range(data, 0, mid, len)
}

/// Merge the adjacent sorted runs `data[start..mid)` and `data[mid..end)`.
///
/// Preconditions are validated before any element access; the scratch
/// buffer is created for exactly this window and dropped on return.
pub fn merge_range<T: Copy + Ord>(
    data: &mut [T],
    start: usize,
    mid: usize,
    end: usize,
) -> Result<(), SortError> {
    Validator::validate_merge_range(data.len(), start, mid, end)?;

    // Degenerate windows short-circuit before any scratch is allocated.
    if start == mid || mid == end {
        return Ok(());
    }

    let window = end - start;
    let mut scratch = ScratchBuffer::for_window(window);
    Validator::validate_scratch_capacity(scratch.capacity(), window)?;

    merge_runs_with_scratch(&mut data[start..end], mid - start, &mut scratch);
    Ok(())
}

// ============================================================================
// Helpers
// ============================================================================

/// Whether a slice is already sorted non-decreasing.
#[inline]
pub fn is_sorted_run<T: Ord>(data: &[T]) -> bool {
    data.windows(2).all(|w| w[0] <= w[1])
}
