//! Parallel sorting walkthrough.
//!
//! Demonstrates parallel and sequential execution of the same stable sort,
//! and the cutoff knob that bounds forking.

use fastmergesort::prelude::*;

fn main() -> Result<(), SortError> {
    // A large reversed buffer: worst case for presorted detection,
    // best case for parallel speedup.
    let mut data: Vec<u64> = (0..1_000_000).rev().collect();

    let sorter = MergeSort::new()
        .sequential_cutoff(16 * 1024) // Fork only above 16Ki-element windows
        .build()?;

    sorter.sort(&mut data)?;
    assert!(data.windows(2).all(|w| w[0] <= w[1]));
    println!("parallel: {} elements sorted", data.len());

    // The same builder runs sequentially on demand.
    let mut small: Vec<i32> = vec![5, -3, 7, -3, 0];
    MergeSort::new().parallel(false).build()?.sort(&mut small)?;
    println!("sequential: {small:?}");
    // sequential: [-3, -3, 0, 5, 7]

    Ok(())
}
