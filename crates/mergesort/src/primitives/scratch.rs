//! Scratch buffer management for merge operations.
//!
//! ## Purpose
//!
//! This module provides the temporary storage a merge call uses to build its
//! result before copying it back into the target buffer.
//!
//! ## Design notes
//!
//! * **Exact sizing**: a scratch buffer is created for one merge window and
//!   holds exactly `end - start` elements; a fixed-size buffer would
//!   silently corrupt results on larger windows.
//! * **Per-call lifetime**: created at merge entry, populated, copied back,
//!   dropped at merge return. Never pooled or shared across calls; its
//!   contents belong to exactly one merge in progress.
//! * **Checked capacity**: an undersized scratch buffer is a reported
//!   error, raised before any element is written.
//!
//! ## Invariants
//!
//! * `len() <= capacity()` at all times.
//! * `capacity()` is fixed at construction.
//!
//! ## Non-goals
//!
//! * Buffer recycling across merges (forbidden by the concurrency model).
//! * Capacity validation itself (lives in `engine::validator`).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// ============================================================================
// ScratchBuffer
// ============================================================================

/// Temporary storage for one merge window.
#[derive(Debug, Clone)]
pub struct ScratchBuffer<T> {
    /// Merged elements in output order.
    items: Vec<T>,

    /// Fixed capacity declared at construction.
    capacity: usize,
}

impl<T: Copy> ScratchBuffer<T> {
    /// Create a scratch buffer sized exactly to a merge window.
    #[inline]
    pub fn for_window(window: usize) -> Self {
        Self::with_capacity(window)
    }

    /// Create a scratch buffer with an explicit capacity.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Declared capacity.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of elements appended so far.
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether no elements have been appended yet.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Append one element.
    #[inline]
    pub fn push(&mut self, item: T) {
        self.items.push(item);
    }

    /// Append a run of elements unchanged.
    #[inline]
    pub fn extend_from_slice(&mut self, run: &[T]) {
        self.items.extend_from_slice(run);
    }

    /// Copy the merged contents back into the target window.
    ///
    /// The destination must be exactly as long as the populated scratch.
    #[inline]
    pub fn copy_back(&self, dst: &mut [T]) {
        dst.copy_from_slice(&self.items);
    }
}
