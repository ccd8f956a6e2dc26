/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Atomic Traits
//!
//! Defines common traits for atomic cells, providing a unified interface
//! for atomic operations.
//!
//! # Author
//!
//! Haixing Hu

/// Common trait for atomic cells.
///
/// Provides the basic atomic operations: load, store and compare-and-swap.
///
/// # Author
///
/// Haixing Hu
pub trait Atomic {
    /// The value type stored in the atomic.
    type Value;

    /// Loads the current value.
    ///
    /// # Returns
    ///
    /// The current value.
    fn load(&self) -> Self::Value;

    /// Stores a new value.
    ///
    /// # Parameters
    ///
    /// * `value` - The new value to store.
    fn store(&self, value: Self::Value);

    /// Compares and sets the value atomically.
    ///
    /// If the current value matches `expected`, sets it to `new` and
    /// returns `Ok(())`. Otherwise, returns `Err(actual)` where `actual` is
    /// the value observed in the cell.
    ///
    /// # Parameters
    ///
    /// * `expected` - The expected current value.
    /// * `new` - The new value to set if the current value matches.
    ///
    /// # Returns
    ///
    /// `Ok(())` on success, or `Err(actual)` on failure.
    fn compare_set(&self, expected: Self::Value, new: Self::Value) -> Result<(), Self::Value>;

    /// Compares and swaps the value atomically.
    ///
    /// # Parameters
    ///
    /// * `expected` - The expected current value.
    /// * `new` - The new value to set if the current value matches.
    ///
    /// # Returns
    ///
    /// `true` if the swap happened, `false` if the cell was left unchanged.
    fn compare_and_swap(&self, expected: Self::Value, new: Self::Value) -> bool;
}

/// Trait for atomic cells holding numbers.
///
/// # Author
///
/// Haixing Hu
pub trait AtomicNumber: Atomic {
    /// Adds `delta` to the current value atomically.
    ///
    /// # Parameters
    ///
    /// * `delta` - The value to add.
    fn add(&self, delta: Self::Value);
}
