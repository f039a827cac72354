//! Input validation for sort ranges and merge preconditions.
//!
//! ## Purpose
//!
//! This module provides the precondition checks for sorting and merging:
//! range ordering, buffer bounds, scratch capacity, and storage width. Each
//! violation is reported as an explicit [`SortError`] raised before any
//! buffer element is accessed, never executed.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Efficiency**: Checks are ordered from cheap to expensive; all are O(1).
//! * **Pure**: Validation never touches buffer contents, only indices and
//!   capacities.
//!
//! ## Invariants
//!
//! * A range that passes validation can be indexed without panicking.
//! * Validation logic is deterministic and side-effect free.
//!
//! ## Non-goals
//!
//! * This module does not sort, merge, or move any data.
//! * This module does not validate element values; arithmetic wraparound is
//!   defined behavior, not an error.

// Internal dependencies
use crate::primitives::errors::SortError;
use crate::primitives::numeric::Width;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for sort ranges and merge preconditions.
///
/// Provides static methods returning `Result<(), SortError>` that fail fast
/// upon identifying the first violation.
pub struct Validator;

impl Validator {
    /// Validate a sort range `[start, end)` against a buffer length.
    pub fn validate_range(len: usize, start: usize, end: usize) -> Result<(), SortError> {
        if start > end || end > len {
            return Err(SortError::RangeOutOfBounds { start, end, len });
        }
        Ok(())
    }

    /// Validate a merge triple `start <= mid <= end` against a buffer length.
    pub fn validate_merge_range(
        len: usize,
        start: usize,
        mid: usize,
        end: usize,
    ) -> Result<(), SortError> {
        if start > mid || mid > end {
            return Err(SortError::UnorderedRange { start, mid, end });
        }
        if end > len {
            return Err(SortError::RangeOutOfBounds { start, end, len });
        }
        Ok(())
    }

    /// Validate that a scratch buffer can hold a merge window.
    pub fn validate_scratch_capacity(capacity: usize, window: usize) -> Result<(), SortError> {
        if capacity < window {
            return Err(SortError::ScratchTooSmall { capacity, required: window });
        }
        Ok(())
    }

    /// Validate a raw storage width.
    pub fn validate_width(bits: u32) -> Result<(), SortError> {
        Width::from_bits(bits).map(|_| ())
    }
}
