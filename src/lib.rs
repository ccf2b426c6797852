// Copyright 2024 numcore developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
#![crate_name = "numcore"]
#![doc(html_root_url = "https://docs.rs/numcore/0.1/")]
#![warn(missing_debug_implementations)]
#![cfg_attr(docsrs, feature(doc_cfg))]

//! The `numcore` crate provides two small numeric building blocks:
//!
//! - [`FixedArray`], a homogeneous, shape-checked one- or two-dimensional
//!   array of integers, reals or booleans with element-wise arithmetic,
//!   equality, indexing and basic statistics.
//! - [`pixel`], grayscale and sepia color transforms over 8-bit BGR pixel
//!   buffers with saturating output, runnable with several equivalent
//!   execution [`Strategy`](pixel::Strategy)s.
//!
//! ## Highlights
//!
//! - The data type is inferred once at construction and checked for every
//!   element; booleans and integers never mix.
//! - Arrays are immutable values. Every operation returns a new array.
//! - Arithmetic between arrays of different shapes is not an error: it
//!   returns [`NotSupported`] so generic callers can try something else.
//!
//! ## Crate Feature Flags
//!
//! The following crate feature flags are available. They are configured in your
//! `Cargo.toml`.
//!
//! - `serde`
//!   - Enables serialization support for serde 1.x
//! - `rayon`
//!   - Enables parallel pixel kernels through [`pixel::Strategy::Parallel`].
//! - `approx`
//!   - Implementations of traits from the [`approx`] crate.
//!
//! ```
//! use numcore::{arr2, FixedArray, Scalar};
//!
//! let a = arr2(&[[1, 2, 3],
//!                [4, 5, 6]]);
//! let b = (&a * 2).try_add(&a).unwrap();
//! assert_eq!(b, arr2(&[[3, 6, 9], [12, 15, 18]]));
//! assert_eq!(a.mean(), 3.5);
//!
//! let bad = FixedArray::from_shape_vec([2], vec![Scalar::Int(1), Scalar::Real(1.)]);
//! assert!(bad.is_err());
//! ```

#[cfg(feature = "approx")]
pub extern crate approx;

#[macro_use]
mod macro_utils;

mod arrayformat;
mod array_approx;
#[cfg(feature = "serde")]
mod array_serde;
mod error;
mod free_functions;
mod impl_constructors;
mod impl_methods;
mod impl_ops;
mod numeric;
mod numeric_util;
mod scalar;

#[cfg(feature = "rayon")]
#[cfg_attr(docsrs, doc(cfg(feature = "rayon")))]
pub mod parallel;
pub mod pixel;
pub mod prelude;

pub use crate::error::{ArrayError, BinaryOp, ErrorKind, NotSupported, Unsupported};
pub use crate::free_functions::{arr1, arr2};
pub use crate::impl_methods::{Grid, Item};
pub use crate::impl_ops::{OpResult, Operand, ScalarOperand};
pub use crate::scalar::{DType, Scalar};

/// Array index type
pub type Ix = usize;

/// A homogeneous one- or two-dimensional array.
///
/// Elements are stored once, flat and in row-major order; the row view
/// ([`.grid()`](FixedArray::grid), [`.rows()`](FixedArray::rows)) is
/// computed from the shape on demand.
///
/// Invariants, established by every constructor:
///
/// - the shape has one or two axes, each of length at least 1;
/// - the number of elements is the product of the axis lengths;
/// - every element has the array's [`DType`].
#[derive(Clone)]
pub struct FixedArray
{
    /// Axis lengths, one or two of them.
    dim: Box<[Ix]>,
    dtype: DType,
    /// Elements in row-major order.
    data: Vec<Scalar>,
}
