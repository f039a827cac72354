//! # mergesort - stable merge sort for fixed-width integers
//!
//! A small numeric transform library: a stable, recursive merge sort over
//! buffers of fixed-width integers, combined with bit-exact fixed-width
//! signed/unsigned conversion and arithmetic semantics.
//!
//! ## Quick Start
//!
//! ### Typical Use
//!
//! ```rust
//! use mergesort::prelude::*;
//!
//! let mut data: Vec<i64> = vec![4_294_967_296, -12, 123, 12, 32];
//!
//! // Build the sorter
//! let sorter = MergeSort::new()
//!     .detect_presorted(true) // Skip work on already-sorted input
//!     .build();
//!
//! // Sort the buffer in place
//! sorter.sort(&mut data)?;
//!
//! assert_eq!(data, vec![-12, 12, 32, 123, 4_294_967_296]);
//! # Result::<(), SortError>::Ok(())
//! ```
//!
//! Or, with the default configuration:
//!
//! ```rust
//! use mergesort::prelude::*;
//!
//! let mut data = [200u8, 0, 13, 255, 13];
//! sort(&mut data)?;
//! assert_eq!(data, [0, 13, 13, 200, 255]);
//! # Result::<(), SortError>::Ok(())
//! ```
//!
//! ### The Numeric Value Model
//!
//! Fixed-width truncation, reinterpretation, and modular arithmetic are
//! defined transformations, never failures:
//!
//! ```rust
//! use mergesort::prelude::*;
//!
//! // The unsigned 32-bit truncation of literal -10 is bit pattern 4294967286.
//! let d = NumericValue::unsigned(-10, Width::W32);
//! assert_eq!(d.to_string(), "4294967286");
//!
//! // Reinterpreting the identical bits as signed 32-bit yields -10.
//! assert_eq!(d.reinterpret_signed().to_string(), "-10");
//!
//! // Addition wraps modulo 2^width.
//! let e = NumericValue::unsigned(100, Width::W32);
//! assert_eq!(e.add(d).to_string(), "90");
//! ```
//!
//! ### Result and Error Handling
//!
//! Range-taking operations return `Result<(), SortError>`. Precondition
//! violations (reversed ranges, out-of-bounds indices, undersized scratch
//! buffers) are reported before any buffer element is accessed:
//!
//! ```rust
//! use mergesort::prelude::*;
//!
//! let mut data = [3i32, 1, 2];
//! let sorter = MergeSort::new().build();
//!
//! match sorter.sort_range(&mut data, 1, 9) {
//!     Ok(()) => unreachable!(),
//!     Err(e) => assert!(matches!(e, SortError::RangeOutOfBounds { .. })),
//! }
//! ```
//!
//! ## Minimal Usage (no_std / Embedded)
//!
//! The crate supports `no_std` environments. Disable default features to
//! remove the standard library dependency:
//!
//! ```toml
//! [dependencies]
//! mergesort = { version = "0.1", default-features = false }
//! ```
//!
//! Sorting still allocates one scratch buffer per merge window through
//! `alloc`; the target buffer itself is never reallocated.
//!
//! ## Parallel Execution
//!
//! The two recursive sub-sorts operate on disjoint halves and carry no
//! shared mutable state. The companion crate `fastmergesort` runs them as
//! parallel tasks; this crate stays single-threaded and synchronous.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

// Layer 1: Primitives - value model, errors, scratch buffers.
mod primitives;

// Layer 2: Algorithms - the stable merge kernel.
mod algorithms;

// Layer 3: Engine - recursive scheduling and validation.
mod engine;

// High-level fluent API for sorting.
mod api;

// Standard sorting prelude.
pub mod prelude {
    pub use crate::api::{
        sort, truncate, MergeSort, MergeSorter, NumericValue, Signedness, SortError, Width,
    };
}

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing
// purposes. It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod primitives {
        pub use crate::primitives::*;
    }
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    pub mod engine {
        pub use crate::engine::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
}
