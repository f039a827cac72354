//! Parallel split pass for the sort scheduler.
//!
//! ## Purpose
//!
//! This module provides the split pass that is injected into the
//! `mergesort` crate's recursive scheduler. It runs the two halves of a
//! window as independent parallel tasks, joined before the merge step.
//!
//! ## Design notes
//!
//! * **Implementation**: a drop-in replacement for the sequential split.
//! * **Parallelism**: uses `rayon::join`, so idle workers steal the second
//!   half while the first is in flight.
//! * **Safety**: the halves come from `split_at_mut` and are statically
//!   non-overlapping; each merge owns a private scratch buffer, so no
//!   locking is required anywhere.
//! * **Cutoff**: windows below the configured sequential cutoff recurse
//!   sequentially; forking tiny tasks costs more than it saves.
//!
//! ## Invariants
//!
//! * No task ever writes outside its assigned half.
//! * The join is a barrier: both halves are sorted before the caller
//!   merges them.
//!
//! ## Non-goals
//!
//! * This module does not partition, merge, or validate (handled by
//!   `mergesort::engine`).

// External dependencies
use rayon::join;

// Export dependencies from the mergesort crate
use mergesort::internals::engine::executor::{sort_slice, SortConfig};
use mergesort::internals::primitives::errors::SortError;

// ============================================================================
// Parallel Split Pass
// ============================================================================

/// Sort the two disjoint halves of a window, in parallel above the
/// configured cutoff.
pub fn parallel_split_pass<T>(
    left: &mut [T],
    right: &mut [T],
    config: &SortConfig<T>,
) -> Result<(), SortError>
where
    T: Copy + Ord + Send,
{
    // Small windows: forking overhead dominates, recurse sequentially.
    if left.len().max(right.len()) < config.sequential_cutoff {
        sort_slice(left, config)?;
        return sort_slice(right, config);
    }

    let (first, second) = join(|| sort_slice(left, config), || sort_slice(right, config));
    first?;
    second
}
