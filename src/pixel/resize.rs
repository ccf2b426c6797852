// Copyright 2024 numcore developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use std::mem;

use super::kernel::saturate;
use super::PixelBuffer;
use crate::error::{from_kind, ArrayError, ErrorKind};
use crate::Ix;

/// The source cells one output cell covers along an axis.
#[derive(Debug)]
struct Footprint
{
    first: usize,
    /// Fraction of the output cell taken by each covered source cell; they
    /// sum to one.
    weights: Vec<f64>,
}

fn footprints(n_in: usize, n_out: usize) -> Vec<Footprint>
{
    let ratio = n_in as f64 / n_out as f64;
    (0..n_out)
        .map(|o| {
            let lo = o as f64 * ratio;
            let hi = ((o + 1) as f64 * ratio).min(n_in as f64);
            let first = (lo.floor() as usize).min(n_in - 1);
            let last = (hi.ceil() as usize).clamp(first + 1, n_in);
            let mut weights = (first..last)
                .map(|s| (hi.min((s + 1) as f64) - lo.max(s as f64)).max(0.))
                .collect::<Vec<_>>();
            let total: f64 = weights.iter().sum();
            weights.iter_mut().for_each(|w| *w /= total);
            Footprint { first, weights }
        })
        .collect()
}

/// Scale `image` by `scale` in both directions, averaging over pixel areas.
///
/// The new size is `(⌊height · scale⌋, ⌊width · scale⌋)`. Each output sample
/// is the mean of the source samples under its footprint, weighted by how
/// much of the footprint each source pixel covers, and rounded to the
/// nearest integer. A constant image stays constant.
///
/// **Errors** with `InvalidParameter` if `scale` is not a positive finite
/// number, or if the resulting image would have no rows or columns or be
/// too large to allocate.
///
/// ```
/// use numcore::pixel::{resize_area, PixelBuffer};
///
/// let image = PixelBuffer::from_shape_vec((2, 2, 1), vec![10, 20, 30, 40]).unwrap();
/// let half = resize_area(&image, 0.5).unwrap();
/// assert_eq!(half.as_slice(), &[25]);
/// ```
pub fn resize_area(image: &PixelBuffer, scale: f64) -> Result<PixelBuffer, ArrayError>
{
    if !(scale.is_finite() && scale > 0.) {
        return Err(from_kind(ErrorKind::InvalidParameter));
    }
    let (height, width, channels) = image.dim();
    let new_height = (height as f64 * scale) as Ix;
    let new_width = (width as f64 * scale) as Ix;
    if new_height == 0 || new_width == 0 {
        return Err(from_kind(ErrorKind::InvalidParameter));
    }
    // the intermediate image is `height × new_width` samples of f64
    let max_samples = isize::MAX as usize / mem::size_of::<f64>();
    let fits = |rows: usize| {
        rows.checked_mul(new_width)
            .and_then(|n| n.checked_mul(channels))
            .filter(|&n| n <= max_samples)
            .is_some()
    };
    if !(fits(height) && fits(new_height)) {
        return Err(from_kind(ErrorKind::InvalidParameter));
    }
    log::debug!("resizing {}x{} image to {}x{}", width, height, new_width, new_height);
    if (new_height, new_width) == (height, width) {
        return Ok(image.clone());
    }

    // horizontal pass into f64, then vertical pass with rounding
    let columns = footprints(width, new_width);
    let mut wide = vec![0.; height * new_width * channels];
    for (row, out_row) in image.rows().zip(wide.chunks_exact_mut(new_width * channels)) {
        for (fp, out_px) in columns.iter().zip(out_row.chunks_exact_mut(channels)) {
            for (k, &w) in fp.weights.iter().enumerate() {
                let px = &row[(fp.first + k) * channels..][..channels];
                for (o, &v) in out_px.iter_mut().zip(px) {
                    *o += w * v as f64;
                }
            }
        }
    }

    let row_len = new_width * channels;
    let mut out = PixelBuffer::zeroed(new_height, new_width, channels);
    let mut acc = vec![0.; row_len];
    for (fp, out_row) in footprints(height, new_height)
        .iter()
        .zip(out.as_mut_slice().chunks_exact_mut(row_len))
    {
        acc.iter_mut().for_each(|a| *a = 0.);
        for (k, &w) in fp.weights.iter().enumerate() {
            let src = &wide[(fp.first + k) * row_len..][..row_len];
            for (a, &v) in acc.iter_mut().zip(src) {
                *a += w * v;
            }
        }
        for (o, &a) in out_row.iter_mut().zip(&acc) {
            *o = saturate(a.round());
        }
    }
    Ok(out)
}
