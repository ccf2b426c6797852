// Copyright 2024 numcore developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
//! Parallelization features for numcore.
//!
//! Parallel kernels are based on the crate [rayon]. The output buffer is
//! split into disjoint rows which are filled independently on the rayon
//! thread pool; each row runs the same code as
//! [`Strategy::Vectorized`](crate::pixel::Strategy::Vectorized), so results
//! do not depend on the number of threads.
//!
//! This requires the crate feature `rayon` to be enabled.
//!
//! # Examples
//!
//! ```
//! use numcore::pixel::{ColorKernel, PixelBuffer, Strategy};
//!
//! let image = PixelBuffer::from_fn(64, 64, |y, x| [x as u8, y as u8, 128]);
//! let sepia = ColorKernel::SEPIA.par_apply(&image).unwrap();
//! assert_eq!(sepia, Strategy::Naive.apply(&ColorKernel::SEPIA, &image).unwrap());
//! ```

use rayon::prelude::*;

use crate::error::{from_kind, ArrayError, ErrorKind};
use crate::pixel::{ColorKernel, PixelBuffer};

/// Rows handed to one rayon task at least.
const MIN_ROWS_PER_TASK: usize = 4;

/// # Parallel methods
///
/// These methods require crate feature `rayon`.
impl ColorKernel
{
    /// Parallel version of [`Strategy::apply`](crate::pixel::Strategy::apply).
    ///
    /// Rows are visited in arbitrary order.
    ///
    /// **Errors** with `ShapeMismatch` unless `image` has three channels.
    pub fn par_apply(&self, image: &PixelBuffer) -> Result<PixelBuffer, ArrayError>
    {
        if image.channels() != 3 {
            return Err(from_kind(ErrorKind::ShapeMismatch));
        }
        let (height, width, _) = image.dim();
        let mut out = PixelBuffer::zeroed(height, width, self.out_channels());
        let out_row_len = out.row_len().max(1);
        let in_row_len = image.row_len().max(1);
        out.as_mut_slice()
            .par_chunks_mut(out_row_len)
            .zip(image.as_slice().par_chunks(in_row_len))
            .with_min_len(MIN_ROWS_PER_TASK)
            .for_each(|(out_row, row)| self.apply_row(row, out_row));
        Ok(out)
    }
}
