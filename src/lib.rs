/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/
//! # prism3-rust-atomic-float
//!
//! Atomic operations on 64-bit floating point values.
//!
//! The standard library only offers atomic integers. This crate stores an
//! `f64` as its bit pattern in an `AtomicU64` and converts at the boundary
//! of every call, so loads, stores and compare-and-swap are exactly as
//! atomic as their integer counterparts. Addition, which has no native
//! float form, is a compare-and-swap retry loop.
//!
//! ## Design Goals
//!
//! - **Correctness**: No torn reads, no lost updates, linearizable adds
//! - **Simplicity**: Four operations, one ordering (`SeqCst`)
//! - **Bit Exactness**: NaN payloads and signed zero survive every operation,
//!   and compare-and-swap matches on bits
//!
//! ## Example
//!
//! ```rust
//! use prism3_atomic_float::AtomicF64;
//! use std::thread;
//!
//! let mut total = 0.0;
//! if let Some(cell) = AtomicF64::from_mut(&mut total) {
//!     let cell = &*cell;
//!     thread::scope(|s| {
//!         for _ in 0..10 {
//!             s.spawn(|| {
//!                 for j in 0..100 {
//!                     cell.add(j as f64);
//!                 }
//!             });
//!         }
//!     });
//! }
//! assert_eq!(total, 49500.0);
//! ```
//!
//! ## Author
//!
//! Haixing Hu

#![deny(missing_docs)]
#![deny(unsafe_op_in_unsafe_fn)]

pub mod atomic;

pub use atomic::{
    Atomic,
    AtomicF64,
    AtomicNumber,
};
