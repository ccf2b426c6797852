// Copyright 2024 numcore developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
#[cfg(feature = "approx")]
mod approx_methods
{
    use crate::FixedArray;

    impl FixedArray
    {
        /// A test for equality that uses the elementwise absolute difference to compute the
        /// approximate equality of two arrays.
        ///
        /// **Requires crate feature `"approx"`**
        pub fn abs_diff_eq(&self, other: &FixedArray, epsilon: f64) -> bool
        {
            <Self as ::approx::AbsDiffEq<_>>::abs_diff_eq(self, other, epsilon)
        }

        /// A test for equality that uses an elementwise relative comparison if the values are far
        /// apart; and the absolute difference otherwise.
        ///
        /// **Requires crate feature `"approx"`**
        pub fn relative_eq(&self, other: &FixedArray, epsilon: f64, max_relative: f64) -> bool
        {
            <Self as ::approx::RelativeEq<_>>::relative_eq(self, other, epsilon, max_relative)
        }
    }
}

#[cfg(feature = "approx")]
mod approx_traits
{
    use crate::{FixedArray, Scalar};
    use approx::{AbsDiffEq, RelativeEq};

    /// Booleans only match booleans, exactly; numbers are compared as `f64`.
    fn elementwise<F>(a: &FixedArray, b: &FixedArray, close: F) -> bool
    where F: Fn(f64, f64) -> bool
    {
        if a.shape() != b.shape() {
            return false;
        }
        a.iter().zip(b.iter()).all(|(x, y)| match (*x, *y) {
            (Scalar::Bool(p), Scalar::Bool(q)) => p == q,
            (Scalar::Bool(_), _) | (_, Scalar::Bool(_)) => false,
            (x, y) => close(x.to_f64(), y.to_f64()),
        })
    }

    /// **Requires crate feature `"approx"`**
    impl AbsDiffEq<FixedArray> for FixedArray
    {
        type Epsilon = f64;

        fn default_epsilon() -> f64
        {
            f64::default_epsilon()
        }

        fn abs_diff_eq(&self, other: &FixedArray, epsilon: f64) -> bool
        {
            elementwise(self, other, |x, y| f64::abs_diff_eq(&x, &y, epsilon))
        }
    }

    /// **Requires crate feature `"approx"`**
    impl RelativeEq<FixedArray> for FixedArray
    {
        fn default_max_relative() -> f64
        {
            f64::default_max_relative()
        }

        fn relative_eq(&self, other: &FixedArray, epsilon: f64, max_relative: f64) -> bool
        {
            elementwise(self, other, |x, y| f64::relative_eq(&x, &y, epsilon, max_relative))
        }
    }

}
