/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Atomic Types
//!
//! Provides an atomic `f64` cell built on `std::sync::atomic::AtomicU64`.
//! Values cross the atomic boundary as raw bit patterns, so the integer
//! primitives give the float operations their atomicity.
//!
//! # Features
//!
//! - Load, store, add and compare-and-swap, all sequentially consistent
//! - Lock-free addition through a compare-and-swap retry loop
//! - Views over caller-owned `f64` storage
//!
//! # Author
//!
//! Haixing Hu

mod atomic_f64;
mod traits;

pub use atomic_f64::AtomicF64;
pub use traits::{
    Atomic,
    AtomicNumber,
};
