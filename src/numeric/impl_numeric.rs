// Copyright 2024 numcore developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use crate::numeric_util;
use crate::{FixedArray, Scalar};

/// # Numerical Methods for Arrays
///
/// Statistics are defined for integer and real arrays. Boolean elements are
/// counted as 0 and 1.
impl FixedArray
{
    /// Return the elements as `f64` values in row-major order.
    fn to_f64_vec(&self) -> Vec<f64>
    {
        self.iter().map(Scalar::to_f64).collect()
    }

    /// Return the sum of all elements as `f64`.
    ///
    /// ```
    /// use numcore::arr2;
    ///
    /// let a = arr2(&[[1., 2.],
    ///                [3., 4.]]);
    /// assert_eq!(a.sum(), 10.);
    /// ```
    pub fn sum(&self) -> f64
    {
        numeric_util::unrolled_sum(&self.to_f64_vec())
    }

    /// Return the arithmetic mean of all elements.
    ///
    /// ```
    /// use numcore::arr1;
    ///
    /// assert_eq!(arr1(&[2, 3, 4]).mean(), 3.);
    /// ```
    pub fn mean(&self) -> f64
    {
        self.sum() / self.len() as f64
    }

    /// Return the population variance of all elements: the mean of the
    /// squared deviations from the mean (the divisor is the element count).
    ///
    /// ```
    /// use numcore::arr1;
    ///
    /// assert_eq!(arr1(&[2, 3, 4]).variance(), 2. / 3.);
    /// ```
    pub fn variance(&self) -> f64
    {
        let xs = self.to_f64_vec();
        let n = xs.len() as f64;
        let mean = numeric_util::unrolled_sum(&xs) / n;
        let squares: Vec<f64> = xs.iter().map(|&x| (x - mean) * (x - mean)).collect();
        numeric_util::unrolled_sum(&squares) / n
    }

    /// Return the population standard deviation, the square root of
    /// [`.variance()`](Self::variance).
    pub fn std(&self) -> f64
    {
        self.variance().sqrt()
    }

    /// Return the smallest element.
    ///
    /// On ties the first occurrence wins; a NaN is never chosen over an
    /// element already seen.
    ///
    /// ```
    /// use numcore::{arr1, Scalar};
    ///
    /// assert_eq!(arr1(&[9, -10, 3, 4, 5, 6]).min_element(), Scalar::Int(-10));
    /// ```
    pub fn min_element(&self) -> Scalar
    {
        let mut min = self.data[0];
        for &x in &self.data[1..] {
            if x < min {
                min = x;
            }
        }
        min
    }
}
