// Copyright 2024 numcore developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{ColorKernel, PixelBuffer};
use crate::error::{from_kind, ArrayError, ErrorKind};

/// How a [`ColorKernel`] is run over a buffer.
///
/// All strategies evaluate every channel with the same arithmetic in the
/// same order and produce identical output; they differ only in speed.
///
/// ```
/// use numcore::pixel::Strategy;
///
/// assert_eq!("naive".parse::<Strategy>().unwrap(), Strategy::Naive);
/// assert!("numba".parse::<Strategy>().is_err());
/// ```
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Strategy
{
    /// One pixel at a time.
    Naive,
    /// One row at a time, over separate channel planes.
    #[default]
    Vectorized,
    /// Rows spread over the rayon thread pool.
    ///
    /// **Requires crate feature `"rayon"`**
    #[cfg(feature = "rayon")]
    Parallel,
}

impl Strategy
{
    /// Every strategy available with the enabled crate features.
    pub fn all() -> &'static [Strategy]
    {
        #[cfg(feature = "rayon")]
        const ALL: &[Strategy] = &[Strategy::Naive, Strategy::Vectorized, Strategy::Parallel];
        #[cfg(not(feature = "rayon"))]
        const ALL: &[Strategy] = &[Strategy::Naive, Strategy::Vectorized];
        ALL
    }

    /// The lowercase name this strategy parses from.
    pub fn name(self) -> &'static str
    {
        match self {
            Strategy::Naive => "naive",
            Strategy::Vectorized => "vectorized",
            #[cfg(feature = "rayon")]
            Strategy::Parallel => "parallel",
        }
    }

    /// Run `kernel` over `image`.
    ///
    /// **Errors** with `ShapeMismatch` unless `image` has three channels.
    pub fn apply(self, kernel: &ColorKernel, image: &PixelBuffer) -> Result<PixelBuffer, ArrayError>
    {
        if image.channels() != 3 {
            return Err(from_kind(ErrorKind::ShapeMismatch));
        }
        log::trace!("running {:?} kernel over {:?} with strategy {}", kernel, image.dim(), self);
        let out = match self {
            Strategy::Naive => apply_naive(kernel, image),
            Strategy::Vectorized => apply_rows(kernel, image),
            #[cfg(feature = "rayon")]
            Strategy::Parallel => return kernel.par_apply(image),
        };
        Ok(out)
    }
}

fn apply_naive(kernel: &ColorKernel, image: &PixelBuffer) -> PixelBuffer
{
    let (height, width, _) = image.dim();
    let n = kernel.out_channels();
    let mut out = PixelBuffer::zeroed(height, width, n);
    let data = out.as_mut_slice();
    for y in 0..height {
        for x in 0..width {
            let start = (y * width + x) * n;
            kernel.apply_pixel(image.pixel(y, x), &mut data[start..start + n]);
        }
    }
    out
}

fn apply_rows(kernel: &ColorKernel, image: &PixelBuffer) -> PixelBuffer
{
    let (height, width, _) = image.dim();
    let n = kernel.out_channels();
    let mut out = PixelBuffer::zeroed(height, width, n);
    let out_row_len = out.row_len().max(1);
    for (row, out_row) in image.rows().zip(out.as_mut_slice().chunks_exact_mut(out_row_len)) {
        kernel.apply_row(row, out_row);
    }
    out
}

impl fmt::Display for Strategy
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        f.write_str(self.name())
    }
}

impl FromStr for Strategy
{
    type Err = ArrayError;

    /// Parse a strategy name. A name that is unknown, or whose crate feature
    /// is disabled, is an `InvalidParameter` error.
    fn from_str(s: &str) -> Result<Self, Self::Err>
    {
        Strategy::all()
            .iter()
            .copied()
            .find(|strategy| strategy.name() == s)
            .ok_or_else(|| from_kind(ErrorKind::InvalidParameter))
    }
}
