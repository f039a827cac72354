//! Fixed-width sorting and value-model walkthrough.
//!
//! This example demonstrates the two halves of the crate:
//! - Sorting a signed 64-bit buffer in place, stably and ascending
//! - Fixed-width truncation, reinterpretation, and wrapping addition
//!
//! Each scenario includes the expected output as comments.

use mergesort::prelude::*;

fn main() -> Result<(), SortError> {
    example_1_sort_signed_64()?;
    example_2_unsigned_truncation()?;
    example_3_wrapping_addition();

    Ok(())
}

/// Example 1: Sort a signed 64-bit buffer in place.
fn example_1_sort_signed_64() -> Result<(), SortError> {
    println!("--- Example 1: sorting signed 64-bit values ---");

    let mut data: [i64; 5] = [4_294_967_296, -12, 123, 12, 32];
    sort(&mut data)?;

    for value in data {
        println!("{value}");
    }
    // -12
    // 12
    // 32
    // 123
    // 4294967296

    println!();
    Ok(())
}

/// Example 2: Truncation and signed/unsigned reinterpretation.
fn example_2_unsigned_truncation() -> Result<(), SortError> {
    println!("--- Example 2: truncation and reinterpretation ---");

    // The unsigned 32-bit truncation of literal -10.
    let d = NumericValue::unsigned(-10, Width::W32);
    println!("{d}"); // 4294967286
    println!("{}", d.reinterpret_signed()); // -10

    // The same literal stored in 64 bits.
    let g = NumericValue::unsigned(-10, Width::W64);
    println!("{g}"); // 18446744073709551606
    println!("{}", g.reinterpret_signed()); // -10

    // A literal wider than 32 bits fits in 64-bit storage unchanged.
    let f = NumericValue::unsigned(4_294_967_296, Width::W64);
    println!("{f}"); // 4294967296

    // Widths outside {8, 16, 32, 64} are rejected at construction.
    let bad = NumericValue::new(1, 24, Signedness::Unsigned);
    assert!(matches!(bad, Err(SortError::UnsupportedWidth(24))));

    println!();
    Ok(())
}

/// Example 3: Mixed-operand addition wraps modulo 2^width.
fn example_3_wrapping_addition() {
    println!("--- Example 3: wrapping addition ---");

    let e = NumericValue::unsigned(100, Width::W32);
    let d = NumericValue::unsigned(-10, Width::W32);

    // 100 + 4294967286 = 4294967386, reduced mod 2^32.
    let h = e.add(d);
    println!("{h}"); // 90

    // A narrow operand promotes to the 32-bit minimum arithmetic width.
    let b = NumericValue::unsigned(10, Width::W8);
    let c = NumericValue::unsigned(20, Width::W16);
    println!("{}", b.add(c)); // 30

    println!();
}
