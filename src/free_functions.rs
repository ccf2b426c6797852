// Copyright 2024 numcore developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use crate::{FixedArray, Scalar};

/// Create a [`FixedArray`] with one or two dimensions.
///
/// ```
/// use numcore::fixed;
///
/// let a1 = fixed![1, 2, 3, 4];
///
/// let a2 = fixed![[1, 2],
///                 [3, 4]];
///
/// assert_eq!(a1.shape(), &[4]);
/// assert_eq!(a2.shape(), &[2, 2]);
/// ```
///
/// All elements must have the same Rust type, so the result is always
/// homogeneous. **Panics** if no elements are given.
#[macro_export]
macro_rules! fixed {
    ($([$($x:expr),* $(,)*]),+ $(,)*) => {{
        $crate::arr2(&[$([$($x,)*],)*])
    }};
    ($($x:expr),* $(,)*) => {{
        $crate::arr1(&[$($x,)*])
    }};
}

/// Create a one-dimensional array with elements from `xs`.
///
/// **Panics** if `xs` is empty.
pub fn arr1<A>(xs: &[A]) -> FixedArray
where A: Copy + Into<Scalar>
{
    ncassert!(!xs.is_empty(), "arr1: an array needs at least one element");
    let data: Vec<Scalar> = xs.iter().map(|&x| x.into()).collect();
    let dtype = data[0].dtype();
    FixedArray::from_parts(vec![xs.len()], dtype, data)
}

/// Create a two-dimensional array with elements from `xs`.
///
/// ```
/// use numcore::arr2;
///
/// let a = arr2(&[[1, 2, 3],
///                [4, 5, 6]]);
/// assert!(
///     a.shape() == [2, 3]
/// );
/// ```
///
/// **Panics** if `xs` is empty or its rows are empty.
pub fn arr2<A, const N: usize>(xs: &[[A; N]]) -> FixedArray
where A: Copy + Into<Scalar>
{
    ncassert!(!xs.is_empty() && N > 0, "arr2: an array needs at least one element, got shape {:?}", (xs.len(), N));
    let data: Vec<Scalar> = xs.iter().flatten().map(|&x| x.into()).collect();
    let dtype = data[0].dtype();
    FixedArray::from_parts(vec![xs.len(), N], dtype, data)
}
