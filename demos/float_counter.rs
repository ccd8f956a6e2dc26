/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/
//! # Atomic Float Counter Example
//!
//! Demonstrates using `AtomicF64` as a thread-safe floating point
//! accumulator.

use prism3_atomic_float::AtomicF64;
use std::sync::atomic::{
    AtomicU64,
    Ordering,
};
use std::sync::Arc;
use std::thread;

const NUM_THREADS: usize = 100;
const ADDS_PER_THREAD: usize = 10_000;

fn main() {
    println!("=== Atomic Float Counter Example ===\n");

    // Example 1: Basic operations
    println!("1. Basic Operations:");
    let value = AtomicF64::default();
    println!("   Initial value: {}", value.load());

    value.store(1.25);
    println!("   After store(1.25): {}", value.load());

    value.add(1.75);
    println!("   After add(1.75): {}", value.load());

    // Example 2: Compare-and-swap
    println!("\n2. Compare-and-Swap:");
    println!(
        "   compare_and_swap(1.0, 2.0): {} (value: {})",
        value.compare_and_swap(1.0, 2.0),
        value.load()
    );
    println!(
        "   compare_and_swap(3.0, 4.0): {} (value: {})",
        value.compare_and_swap(3.0, 4.0),
        value.load()
    );

    // Example 3: Bitwise comparison
    println!("\n3. Bitwise Comparison:");
    let zero = AtomicF64::new(0.0);
    println!(
        "   compare_and_swap(-0.0, 1.0) on 0.0: {}",
        zero.compare_and_swap(-0.0, 1.0)
    );
    let nan = AtomicF64::new(f64::NAN);
    println!(
        "   compare_and_swap(NaN, 1.0) on the same NaN: {}",
        nan.compare_and_swap(f64::NAN, 1.0)
    );

    // Example 4: Multi-threaded accumulation
    println!(
        "\n4. Multi-threaded Accumulation ({} threads, {} adds each):",
        NUM_THREADS, ADDS_PER_THREAD
    );
    let mut expected = 0.0;
    for _ in 0..NUM_THREADS {
        for j in 0..ADDS_PER_THREAD {
            expected += j as f64;
        }
    }

    let sum = Arc::new(AtomicF64::default());
    let mut handles = vec![];
    for _ in 0..NUM_THREADS {
        let sum = sum.clone();
        handles.push(thread::spawn(move || {
            for j in 0..ADDS_PER_THREAD {
                sum.add(j as f64);
            }
        }));
    }
    for handle in handles {
        handle.join().unwrap();
    }
    println!("   Atomic sum:  {} (expected: {})", sum.load(), expected);

    // Example 5: The same workload without a CAS loop
    println!("\n5. Non-atomic Read-Modify-Write:");
    let racy = Arc::new(AtomicU64::new(0.0f64.to_bits()));
    let mut handles = vec![];
    for _ in 0..NUM_THREADS {
        let racy = racy.clone();
        handles.push(thread::spawn(move || {
            for j in 0..ADDS_PER_THREAD {
                let current = f64::from_bits(racy.load(Ordering::Relaxed));
                // Let other threads slip in between the load and the store
                thread::yield_now();
                racy.store((current + j as f64).to_bits(), Ordering::Relaxed);
            }
        }));
    }
    for handle in handles {
        handle.join().unwrap();
    }
    let racy = f64::from_bits(racy.load(Ordering::Relaxed));
    println!("   Racy sum:    {} (lost: {})", racy, expected - racy);

    println!("\n=== Example completed ===");
}
