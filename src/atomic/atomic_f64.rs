/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Atomic 64-bit Floating Point
//!
//! Provides an atomic 64-bit floating point cell. Implemented using bit
//! conversion with `AtomicU64`.
//!
//! # Author
//!
//! Haixing Hu

use std::fmt;
#[cfg(not(loom))]
use std::mem;
use std::sync::atomic::Ordering;

#[cfg(loom)]
use loom::sync::atomic::AtomicU64;
#[cfg(not(loom))]
use std::sync::atomic::AtomicU64;

use crate::atomic::traits::Atomic;
use crate::atomic::traits::AtomicNumber;

/// The only ordering used by this cell.
const ORDERING: Ordering = Ordering::SeqCst;

/// Atomic 64-bit floating point number.
///
/// Every access goes through `AtomicU64` with `f64::to_bits()` and
/// `f64::from_bits()` conversions at the boundary, so bit patterns are
/// preserved exactly, including every NaN payload, the infinities and
/// signed zero. No reader ever observes a torn value.
///
/// # Memory Ordering
///
/// All operations use `SeqCst`. Every thread agrees on a single total order
/// of all accesses to the cell. No weaker orderings are offered.
///
/// # Storage
///
/// The cell never allocates. It can be owned directly (a struct field, an
/// `Arc`, a `static`), or laid over a plain `f64` owned by the caller with
/// [`AtomicF64::from_mut`] or [`AtomicF64::from_ptr`].
///
/// # Bitwise Comparison
///
/// [`compare_and_swap`](AtomicF64::compare_and_swap) and
/// [`compare_set`](AtomicF64::compare_set) compare raw bit patterns, not
/// floating point values:
///
/// - a NaN matches itself when the encodings are identical;
/// - two different NaN encodings never match each other;
/// - `+0.0` and `-0.0` never match each other.
///
/// # Example
///
/// ```rust
/// use prism3_atomic_float::AtomicF64;
///
/// let atomic = AtomicF64::new(1.25);
/// atomic.add(1.75);
/// assert_eq!(atomic.load(), 3.0);
/// assert!(!atomic.compare_and_swap(1.0, 2.0));
/// assert!(atomic.compare_and_swap(3.0, 4.0));
/// ```
///
/// # Author
///
/// Haixing Hu
#[repr(transparent)]
pub struct AtomicF64 {
    inner: AtomicU64,
}

impl AtomicF64 {
    /// Creates a new atomic floating point number.
    ///
    /// # Parameters
    ///
    /// * `value` - The initial value.
    #[inline]
    pub fn new(value: f64) -> Self {
        Self {
            inner: AtomicU64::new(value.to_bits()),
        }
    }

    /// Views an exclusively borrowed `f64` as an atomic cell.
    ///
    /// The returned reference can be reborrowed as `&AtomicF64` and shared
    /// between threads (for example with `std::thread::scope`); the value
    /// is written back to the caller's storage in place.
    ///
    /// # Parameters
    ///
    /// * `value` - The caller-owned storage.
    ///
    /// # Returns
    ///
    /// The atomic view, or `None` if `value` is not aligned to
    /// `align_of::<AtomicU64>()`. This only happens on targets where `f64`
    /// has a weaker alignment than `u64` atomics.
    #[cfg(not(loom))]
    #[inline]
    pub fn from_mut(value: &mut f64) -> Option<&mut Self> {
        let ptr = value as *mut f64;
        if (ptr as usize) % mem::align_of::<AtomicU64>() != 0 {
            return None;
        }
        // SAFETY: `AtomicF64` is a transparent wrapper of `AtomicU64`, which
        // has the size of `f64`; the alignment was checked above and the
        // exclusive borrow keeps all other access out for its lifetime.
        Some(unsafe { &mut *ptr.cast::<Self>() })
    }

    /// Views a raw `f64` location as an atomic cell.
    ///
    /// # Safety
    ///
    /// * `ptr` must be non-null and aligned to `align_of::<AtomicU64>()`.
    /// * `ptr` must be valid for reads and writes for the whole of `'a`.
    /// * For the whole of `'a`, the location must only be accessed through
    ///   atomic operations. Any concurrent non-atomic read or write is a
    ///   data race.
    ///
    /// # Parameters
    ///
    /// * `ptr` - Pointer to the caller-owned storage.
    ///
    /// # Returns
    ///
    /// The atomic view over `ptr`.
    #[cfg(not(loom))]
    #[inline]
    pub unsafe fn from_ptr<'a>(ptr: *mut f64) -> &'a Self {
        debug_assert!((ptr as usize) % mem::align_of::<AtomicU64>() == 0);
        // SAFETY: guaranteed by the caller, see above.
        unsafe { &*ptr.cast::<Self>() }
    }

    /// Returns a mutable reference to the value.
    ///
    /// No atomic operations are needed since `&mut self` guarantees
    /// exclusive access.
    #[cfg(not(loom))]
    #[inline]
    pub fn get_mut(&mut self) -> &mut f64 {
        let bits: *mut u64 = self.inner.get_mut();
        // SAFETY: `u64` and `f64` have the same size, every bit pattern is
        // a valid `f64`, and `f64` never needs more alignment than `u64`.
        unsafe { &mut *bits.cast::<f64>() }
    }

    /// Consumes the cell and returns the contained value.
    #[cfg(not(loom))]
    #[inline]
    pub fn into_inner(self) -> f64 {
        f64::from_bits(self.inner.into_inner())
    }

    /// Loads the current value.
    ///
    /// # Returns
    ///
    /// The value written in full by the last Store, Add or successful
    /// compare-and-swap in the total order, or the initial value.
    #[inline]
    pub fn load(&self) -> f64 {
        f64::from_bits(self.inner.load(ORDERING))
    }

    /// Stores a new value.
    ///
    /// NaN payloads, the infinities and signed zero are written
    /// bit-exactly.
    ///
    /// # Parameters
    ///
    /// * `value` - The new value to store.
    #[inline]
    pub fn store(&self, value: f64) {
        self.inner.store(value.to_bits(), ORDERING);
    }

    /// Adds `delta` to the current value atomically.
    ///
    /// Reads the current bits, adds `delta` with ordinary IEEE-754
    /// arithmetic, then tries to commit the sum with a compare-and-swap
    /// against the bits that were read. If another thread got in between,
    /// the attempt is repeated with the value it left behind. Retries are
    /// unbounded; the operation never fails.
    ///
    /// Concurrent adds are linearizable: every delta is applied exactly
    /// once.
    ///
    /// # Parameters
    ///
    /// * `delta` - The value to add.
    #[inline]
    pub fn add(&self, delta: f64) {
        let mut current = self.inner.load(ORDERING);
        loop {
            let sum = f64::from_bits(current) + delta;
            match self.inner.compare_exchange_weak(
                current,
                sum.to_bits(),
                ORDERING,
                ORDERING,
            ) {
                Ok(_) => return,
                Err(actual) => current = actual,
            }
        }
    }

    /// Compares and sets the value atomically.
    ///
    /// The comparison is done on raw bit patterns. See the type-level docs
    /// for how this differs from `==` on NaN and signed zero.
    ///
    /// # Parameters
    ///
    /// * `expected` - The expected current value.
    /// * `new` - The new value to set if the bits of the current value
    ///   equal the bits of `expected`.
    ///
    /// # Returns
    ///
    /// `Ok(())` on success, or `Err(actual)` with the value found in the
    /// cell, which is left unmodified.
    #[inline]
    pub fn compare_set(&self, expected: f64, new: f64) -> Result<(), f64> {
        self.inner
            .compare_exchange(expected.to_bits(), new.to_bits(), ORDERING, ORDERING)
            .map(|_| ())
            .map_err(f64::from_bits)
    }

    /// Compares and swaps the value atomically.
    ///
    /// Same bitwise semantics as [`compare_set`](AtomicF64::compare_set).
    ///
    /// # Parameters
    ///
    /// * `expected` - The expected current value.
    /// * `new` - The new value to set on a match.
    ///
    /// # Returns
    ///
    /// `true` if the swap happened, `false` if the cell did not hold the
    /// bit pattern of `expected`.
    #[inline]
    pub fn compare_and_swap(&self, expected: f64, new: f64) -> bool {
        self.compare_set(expected, new).is_ok()
    }
}

impl Atomic for AtomicF64 {
    type Value = f64;

    #[inline]
    fn load(&self) -> f64 {
        self.load()
    }

    #[inline]
    fn store(&self, value: f64) {
        self.store(value);
    }

    #[inline]
    fn compare_set(&self, expected: f64, new: f64) -> Result<(), f64> {
        self.compare_set(expected, new)
    }

    #[inline]
    fn compare_and_swap(&self, expected: f64, new: f64) -> bool {
        self.compare_and_swap(expected, new)
    }
}

impl AtomicNumber for AtomicF64 {
    #[inline]
    fn add(&self, delta: f64) {
        self.add(delta);
    }
}

impl Default for AtomicF64 {
    #[inline]
    fn default() -> Self {
        Self::new(0.0)
    }
}

impl From<f64> for AtomicF64 {
    #[inline]
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

impl fmt::Debug for AtomicF64 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = self.load();
        f.debug_struct("AtomicF64")
            .field("value", &value)
            .field("bits", &format_args!("{:#018x}", value.to_bits()))
            .finish()
    }
}

impl fmt::Display for AtomicF64 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.load())
    }
}
