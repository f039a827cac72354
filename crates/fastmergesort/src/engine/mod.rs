//! Parallel execution engine.
//!
//! Provides the split pass that is injected into the `mergesort` crate's
//! scheduler to run the two disjoint halves of a window on separate
//! threads.

/// Parallel split pass for the sort scheduler.
#[cfg(feature = "cpu")]
pub mod executor;
