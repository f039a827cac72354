//! Error types for sorting and numeric value operations.
//!
//! ## Purpose
//!
//! This module defines the error conditions that can occur while sorting
//! fixed-width integer buffers or constructing numeric values, including
//! range preconditions, scratch capacity violations, and unsupported widths.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors include relevant values (e.g., actual vs. expected indices).
//! * **Eager**: Every error is raised before any buffer element is accessed.
//! * **No-std**: Implements `Display` via `core::fmt`; `std::error::Error` is
//!   gated on the `std` feature.
//!
//! ## Key concepts
//!
//! 1. **Precondition violations**: Broken range ordering, out-of-bounds
//!    indices, undersized scratch buffers. These are reported, never
//!    executed.
//! 2. **Construction-time validation**: Widths outside {8, 16, 32, 64}.
//! 3. **Arithmetic overflow/truncation is not an error**: wraparound is
//!    defined, reproducible behavior and has no variant here.
//!
//! ## Invariants
//!
//! * All variants provide sufficient context for diagnosis.
//! * Numeric values in errors use the same types as the public API.
//!
//! ## Non-goals
//!
//! * This module does not perform the validation logic itself.
//! * This module does not provide recovery strategies; all reported
//!   conditions are caller bugs.

// Feature-gated imports
#[cfg(feature = "std")]
use std::error::Error;

// External dependencies
use core::fmt::{Display, Formatter, Result};

// ============================================================================
// Error Type
// ============================================================================

/// Error type for sorting and numeric value operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortError {
    /// Requested integer width is not one of 8, 16, 32, or 64 bits.
    UnsupportedWidth(u32),

    /// Range indices fall outside the buffer or are reversed.
    RangeOutOfBounds {
        /// Start index of the requested range.
        start: usize,
        /// End index (exclusive) of the requested range.
        end: usize,
        /// Length of the buffer the range was applied to.
        len: usize,
    },

    /// Merge triple violates `start <= mid <= end`.
    UnorderedRange {
        /// Start index of the merge window.
        start: usize,
        /// Split point between the two runs.
        mid: usize,
        /// End index (exclusive) of the merge window.
        end: usize,
    },

    /// Scratch buffer capacity is smaller than the merge window.
    ScratchTooSmall {
        /// Capacity the scratch buffer was created with.
        capacity: usize,
        /// Merge window size the call requires.
        required: usize,
    },

    /// Sequential cutoff for parallel execution must be at least 1.
    InvalidCutoff(usize),
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for SortError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::UnsupportedWidth(bits) => {
                write!(f, "Unsupported width: {bits} bits (must be 8, 16, 32, or 64)")
            }
            Self::RangeOutOfBounds { start, end, len } => {
                write!(
                    f,
                    "Range out of bounds: [{start}, {end}) applied to buffer of length {len}"
                )
            }
            Self::UnorderedRange { start, mid, end } => {
                write!(
                    f,
                    "Unordered merge range: start={start}, mid={mid}, end={end} (must be start <= mid <= end)"
                )
            }
            Self::ScratchTooSmall { capacity, required } => {
                write!(
                    f,
                    "Scratch buffer too small: capacity {capacity}, merge window requires {required}"
                )
            }
            Self::InvalidCutoff(cutoff) => {
                write!(f, "Invalid sequential cutoff: {cutoff} (must be at least 1)")
            }
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

#[cfg(feature = "std")]
impl Error for SortError {}
