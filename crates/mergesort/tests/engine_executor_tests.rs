#![cfg(feature = "dev")]
//! Tests for the recursive sort scheduler.
//!
//! These tests verify the engine layer directly:
//! - Recursive partitioning and whole-slice sorting
//! - Ranged sorting with validated entry
//! - Stability through the full recursion
//! - The custom split-pass hook and presorted detection
//! - Validated merge entry
//!
//! ## Test Organization
//!
//! 1. **Whole-Slice Sorting** - Recursion over full buffers
//! 2. **Ranged Sorting** - Validation and sub-range behavior
//! 3. **Stability** - Tag order through the recursion
//! 4. **Configuration** - Split-pass hook, presorted detection
//! 5. **Merge Entry** - Precondition conversion

use std::sync::atomic::{AtomicUsize, Ordering};

use mergesort::internals::engine::executor::{
    is_sorted_run, merge_range, sort_range, sort_slice, SortConfig, DEFAULT_SEQUENTIAL_CUTOFF,
};
use mergesort::internals::primitives::errors::SortError;

// ============================================================================
// Helper Types
// ============================================================================

/// An element whose ordering ignores its tag, making stability observable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Tagged {
    key: i32,
    tag: u16,
}

impl PartialOrd for Tagged {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Tagged {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.key.cmp(&other.key)
    }
}

// One counter per test: the test harness runs tests concurrently.
static HOOK_CALLS: AtomicUsize = AtomicUsize::new(0);
static PRESORT_CALLS: AtomicUsize = AtomicUsize::new(0);

/// A counting split pass that otherwise recurses sequentially.
fn hook_counting_pass<T: Copy + Ord>(
    left: &mut [T],
    right: &mut [T],
    config: &SortConfig<T>,
) -> Result<(), SortError> {
    HOOK_CALLS.fetch_add(1, Ordering::Relaxed);
    sort_slice(left, config)?;
    sort_slice(right, config)
}

/// Same shape as `hook_counting_pass`, with its own counter.
fn presort_counting_pass<T: Copy + Ord>(
    left: &mut [T],
    right: &mut [T],
    config: &SortConfig<T>,
) -> Result<(), SortError> {
    PRESORT_CALLS.fetch_add(1, Ordering::Relaxed);
    sort_slice(left, config)?;
    sort_slice(right, config)
}

// ============================================================================
// Whole-Slice Sorting Tests
// ============================================================================

/// Test recursive sorting of a full buffer.
#[test]
fn test_sort_slice_full_buffer() {
    let config = SortConfig::default();
    let mut data = [9i64, -3, 5, -3, 0, 8, 1];

    sort_slice(&mut data, &config).expect("sort should succeed");
    assert_eq!(data, [-3, -3, 0, 1, 5, 8, 9]);
}

/// Test the trivial base cases.
#[test]
fn test_sort_slice_base_cases() {
    let config = SortConfig::default();

    let mut empty: [i32; 0] = [];
    sort_slice(&mut empty, &config).expect("empty slice");

    let mut single = [7i32];
    sort_slice(&mut single, &config).expect("single element");
    assert_eq!(single, [7]);

    let mut pair = [2i32, 1];
    sort_slice(&mut pair, &config).expect("two elements");
    assert_eq!(pair, [1, 2]);
}

// ============================================================================
// Ranged Sorting Tests
// ============================================================================

/// Test that ranged sorting validates before touching elements.
#[test]
fn test_sort_range_validates_first() {
    let config = SortConfig::default();
    let mut data = [3i32, 1, 2];

    let res = sort_range(&mut data, 0, 4, &config);
    assert!(matches!(res, Err(SortError::RangeOutOfBounds { .. })));
    assert_eq!(data, [3, 1, 2], "no element moves after a rejected range");
}

/// Test sorting of an interior range only.
#[test]
fn test_sort_range_interior() {
    let config = SortConfig::default();
    let mut data = [9i32, 4, 2, 8, 0];

    sort_range(&mut data, 1, 4, &config).expect("in-bounds range");
    assert_eq!(data, [9, 2, 4, 8, 0]);
}

// ============================================================================
// Stability Tests
// ============================================================================

/// Test stability through the full recursion.
///
/// Verifies equal keys preserve their input order across every merge level.
#[test]
fn test_sort_slice_stable() {
    let config = SortConfig::default();

    // Three groups of equal keys, tags record input order.
    let mut data: Vec<Tagged> = (0..64u16)
        .map(|i| Tagged {
            key: (i % 3) as i32,
            tag: i,
        })
        .collect();

    sort_slice(&mut data, &config).expect("sort should succeed");

    for pair in data.windows(2) {
        assert!(pair[0].key <= pair[1].key, "keys must be non-decreasing");
        if pair[0].key == pair[1].key {
            assert!(
                pair[0].tag < pair[1].tag,
                "equal keys must keep input order (tags {} then {})",
                pair[0].tag,
                pair[1].tag
            );
        }
    }
}

// ============================================================================
// Configuration Tests
// ============================================================================

/// Test the default configuration record.
#[test]
fn test_config_defaults() {
    let config = SortConfig::<u32>::default();
    assert!(config.detect_presorted);
    assert!(config.split_pass.is_none());
    assert_eq!(config.sequential_cutoff, DEFAULT_SEQUENTIAL_CUTOFF);
}

/// Test that a configured split pass drives the recursion.
#[test]
fn test_split_pass_hook_is_invoked() {
    let config = SortConfig {
        split_pass: Some(hook_counting_pass::<u64>),
        ..SortConfig::default()
    };

    let mut data: Vec<u64> = (0..33).rev().collect();

    sort_slice(&mut data, &config).expect("sort should succeed");

    assert!(data.windows(2).all(|w| w[0] <= w[1]));
    assert!(
        HOOK_CALLS.load(Ordering::Relaxed) > 0,
        "the injected pass must replace the sequential split"
    );
}

/// Test that presorted detection skips the recursion.
#[test]
fn test_presorted_detection_skips_recursion() {
    let config = SortConfig {
        split_pass: Some(presort_counting_pass::<u64>),
        ..SortConfig::default()
    };

    let mut data: Vec<u64> = (0..32).collect();

    sort_range(&mut data, 0, 32, &config).expect("sort should succeed");
    assert_eq!(
        PRESORT_CALLS.load(Ordering::Relaxed),
        0,
        "a sorted buffer must take the fast path"
    );

    // With detection disabled the recursion runs.
    let config = SortConfig {
        detect_presorted: false,
        ..config
    };
    sort_range(&mut data, 0, 32, &config).expect("sort should succeed");
    assert!(PRESORT_CALLS.load(Ordering::Relaxed) > 0);
}

/// Test the sorted-run predicate.
#[test]
fn test_is_sorted_run() {
    assert!(is_sorted_run::<i32>(&[]));
    assert!(is_sorted_run(&[1]));
    assert!(is_sorted_run(&[1, 1, 2, 3]));
    assert!(!is_sorted_run(&[2, 1]));
}

// ============================================================================
// Merge Entry Tests
// ============================================================================

/// Test validated merging of adjacent runs inside a larger buffer.
#[test]
fn test_merge_range_interior_window() {
    let mut data = [0i32, 2, 5, 1, 6, 0];
    merge_range(&mut data, 1, 3, 5).expect("valid window");
    assert_eq!(data, [0, 1, 2, 5, 6, 0]);
}

/// Test that an unordered triple is reported before any access.
#[test]
fn test_merge_range_rejects_unordered_triple() {
    let mut data = [3i32, 1, 2];
    let res = merge_range(&mut data, 2, 0, 3);
    assert!(matches!(
        res,
        Err(SortError::UnorderedRange {
            start: 2,
            mid: 0,
            end: 3
        })
    ));
    assert_eq!(data, [3, 1, 2]);
}

/// Test that degenerate windows are pure no-ops.
#[test]
fn test_merge_range_degenerate_windows() {
    let mut data = [4i32, 3, 2, 1];
    merge_range(&mut data, 1, 1, 3).expect("empty left run");
    merge_range(&mut data, 1, 3, 3).expect("empty right run");
    assert_eq!(data, [4, 3, 2, 1], "degenerate merges move nothing");
}
