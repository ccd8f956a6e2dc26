/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

use prism3_atomic_float::atomic::AtomicF64;
use proptest::prelude::*;

proptest! {
    /// Any bit pattern, NaN payloads included, survives a store and load.
    #[test]
    fn test_store_load_bit_identical(bits in any::<u64>()) {
        let atomic = AtomicF64::default();
        atomic.store(f64::from_bits(bits));
        prop_assert_eq!(atomic.load().to_bits(), bits);
    }

    /// Compare-and-swap matches on bits and nothing else.
    #[test]
    fn test_compare_and_swap_matches_bits(stored in any::<u64>(), expected in any::<u64>()) {
        let atomic = AtomicF64::new(f64::from_bits(stored));
        let swapped = atomic.compare_and_swap(f64::from_bits(expected), 1.0);
        prop_assert_eq!(swapped, stored == expected);
        if !swapped {
            prop_assert_eq!(atomic.load().to_bits(), stored);
        }
    }

    #[test]
    fn test_compare_and_swap_same_bits_succeeds(bits in any::<u64>(), new in any::<u64>()) {
        let atomic = AtomicF64::new(f64::from_bits(bits));
        prop_assert!(atomic.compare_and_swap(f64::from_bits(bits), f64::from_bits(new)));
        prop_assert_eq!(atomic.load().to_bits(), new);
    }

    /// A single-threaded add is plain IEEE-754 addition.
    #[test]
    fn test_add_matches_plain_addition(start in any::<f64>(), delta in any::<f64>()) {
        let atomic = AtomicF64::new(start);
        atomic.add(delta);
        let expected = start + delta;
        if expected.is_nan() {
            prop_assert!(atomic.load().is_nan());
        } else {
            prop_assert_eq!(atomic.load().to_bits(), expected.to_bits());
        }
    }
}
