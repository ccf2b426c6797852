// Copyright 2024 numcore developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use std::ops::Add;

use num_traits::Zero;

const LANES: usize = 4;

/// Fold `xs` with `f` over four independent accumulators, then combine
/// them and the leftover tail.
pub fn unrolled_fold<A, I, F>(xs: &[A], init: I, f: F) -> A
where
    A: Clone,
    I: Fn() -> A,
    F: Fn(A, A) -> A,
{
    // separate lanes let floating point sums vectorize under strict semantics
    let mut lanes = [init(), init(), init(), init()];
    let mut chunks = xs.chunks_exact(LANES);
    for chunk in &mut chunks {
        for (lane, x) in lanes.iter_mut().zip(chunk) {
            *lane = f(lane.clone(), x.clone());
        }
    }
    let [p0, p1, p2, p3] = lanes;
    let mut acc = f(f(p0, p2), f(p1, p3));
    for x in chunks.remainder() {
        acc = f(acc, x.clone());
    }
    acc
}

/// Compute the sum of the values in `xs`
pub fn unrolled_sum<A>(xs: &[A]) -> A
where A: Clone + Add<Output = A> + Zero
{
    unrolled_fold(xs, A::zero, A::add)
}

/// Compare pairwise with `eq`; slices of different lengths are unequal.
pub fn unrolled_eq_by<A, B, F>(xs: &[A], ys: &[B], eq: F) -> bool
where F: Fn(&A, &B) -> bool
{
    if xs.len() != ys.len() {
        return false;
    }
    let mut xc = xs.chunks_exact(LANES);
    let mut yc = ys.chunks_exact(LANES);
    for (x, y) in (&mut xc).zip(&mut yc) {
        // non-short-circuiting `&` keeps the block branch free
        if !(eq(&x[0], &y[0]) & eq(&x[1], &y[1]) & eq(&x[2], &y[2]) & eq(&x[3], &y[3])) {
            return false;
        }
    }
    xc.remainder().iter().zip(yc.remainder()).all(|(x, y)| eq(x, y))
}

#[cfg(test)]
mod tests
{
    use super::*;

    #[test]
    fn sum_matches_iterator_sum()
    {
        for n in [0, 1, 3, 4, 5, 8, 31] {
            let xs: Vec<i64> = (1..=n).collect();
            assert_eq!(unrolled_sum(&xs), xs.iter().sum::<i64>());
        }
    }

    #[test]
    fn eq_checks_length_and_tail()
    {
        let eq = |x: &i32, y: &i32| x == y;
        let xs: Vec<i32> = (0..19).collect();
        let mut ys = xs.clone();
        assert!(unrolled_eq_by(&xs, &ys, eq));
        ys[18] = -1;
        assert!(!unrolled_eq_by(&xs, &ys, eq));
        ys[18] = 18;
        ys[2] = -1;
        assert!(!unrolled_eq_by(&xs, &ys, eq));
        assert!(!unrolled_eq_by(&xs[..3], &xs[..4], eq));
    }
}
