// Copyright 2024 numcore developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
//! Linear color transforms over BGR pixels.

use crate::error::{from_kind, ArrayError, ErrorKind};

/// Grayscale weights for the blue, green and red channels.
pub const GRAYSCALE_WEIGHTS: [f64; 3] = [0.07, 0.72, 0.21];

/// The full sepia transform. Row `i` produces output channel `i`, columns
/// weight the input blue, green and red channels.
pub const SEPIA_MATRIX: [[f64; 3]; 3] = [
    [0.131, 0.534, 0.272],
    [0.168, 0.686, 0.349],
    [0.189, 0.769, 0.393],
];

/// How far each sepia coefficient moves per unit of `1 - amount`; adding
/// a full step to [`SEPIA_MATRIX`] gives the identity.
const SEPIA_STEP: [[f64; 3]; 3] = [
    [0.869, -0.534, -0.272],
    [-0.168, 0.314, -0.349],
    [-0.189, -0.769, 0.607],
];

/// Convert a linear combination to a sample: values above 255 become 255,
/// negative values (and NaN) become 0, the rest are truncated toward zero.
#[inline(always)]
pub fn saturate(x: f64) -> u8
{
    // float to int `as` casts saturate, and map NaN to 0
    x as u8
}

/// A color transform mapping each BGR pixel to one (gray) or three (color)
/// output channels.
///
/// Every output channel is evaluated as `m[0] * b + m[1] * g + m[2] * r`,
/// in this order, by all execution strategies, so their results agree bit
/// for bit.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ColorKernel
{
    rows: [[f64; 3]; 3],
    out_channels: usize,
}

impl ColorKernel
{
    /// Weighted sum of the three channels into a single gray channel.
    pub const GRAYSCALE: ColorKernel = ColorKernel {
        rows: [GRAYSCALE_WEIGHTS, [0.; 3], [0.; 3]],
        out_channels: 1,
    };

    /// The full sepia effect.
    pub const SEPIA: ColorKernel = ColorKernel {
        rows: SEPIA_MATRIX,
        out_channels: 3,
    };

    /// A color transform from an explicit 3 × 3 matrix.
    pub const fn from_matrix(rows: [[f64; 3]; 3]) -> Self
    {
        ColorKernel { rows, out_channels: 3 }
    }

    /// A sepia effect of adjustable strength.
    ///
    /// `amount` 0 leaves the image untouched, `amount` 1 is
    /// [`ColorKernel::SEPIA`]; each coefficient moves linearly in between.
    /// With `k = 1 - amount` the blue row is
    /// `[0.131 + 0.869 k, 0.534 - 0.534 k, 0.272 - 0.272 k]`, and likewise
    /// for green and red.
    ///
    /// **Errors** with `InvalidParameter` if `amount` is outside `[0, 1]`
    /// or NaN.
    ///
    /// ```
    /// use numcore::pixel::ColorKernel;
    ///
    /// assert_eq!(ColorKernel::sepia(1.).unwrap(), ColorKernel::SEPIA);
    /// assert!(ColorKernel::sepia(1.5).is_err());
    /// ```
    pub fn sepia(amount: f64) -> Result<Self, ArrayError>
    {
        if !(0. ..=1.).contains(&amount) {
            return Err(from_kind(ErrorKind::InvalidParameter));
        }
        let k = 1. - amount;
        let mut rows = SEPIA_MATRIX;
        for (row, step) in rows.iter_mut().zip(&SEPIA_STEP) {
            for (m, &d) in row.iter_mut().zip(step) {
                *m += d * k;
            }
        }
        Ok(ColorKernel::from_matrix(rows))
    }

    /// Number of channels the kernel writes per pixel.
    #[inline]
    pub fn out_channels(&self) -> usize
    {
        self.out_channels
    }

    /// The coefficient rows in use, one per output channel.
    pub fn rows(&self) -> &[[f64; 3]]
    {
        &self.rows[..self.out_channels]
    }

    /// Transform one BGR pixel.
    #[inline]
    pub(crate) fn apply_pixel(&self, bgr: &[u8], out: &mut [u8])
    {
        let (b, g, r) = (bgr[0] as f64, bgr[1] as f64, bgr[2] as f64);
        for (o, m) in out.iter_mut().zip(self.rows()) {
            *o = saturate(m[0] * b + m[1] * g + m[2] * r);
        }
    }

    /// Transform one row of BGR samples, a channel plane at a time.
    ///
    /// The row is split into blue, green and red planes of `f64` so the
    /// inner loops run over contiguous, equally long slices.
    pub(crate) fn apply_row(&self, row: &[u8], out: &mut [u8])
    {
        let width = row.len() / 3;
        debug_assert_eq!(out.len(), width * self.out_channels);
        let mut planes = vec![0.; width * 4];
        let (input, acc) = planes.split_at_mut(width * 3);
        let (blue, rest) = input.split_at_mut(width);
        let (green, red) = rest.split_at_mut(width);
        for (i, px) in row.chunks_exact(3).enumerate() {
            blue[i] = px[0] as f64;
            green[i] = px[1] as f64;
            red[i] = px[2] as f64;
        }
        for (c, m) in self.rows().iter().enumerate() {
            for (((a, &b), &g), &r) in acc.iter_mut().zip(&*blue).zip(&*green).zip(&*red) {
                *a = m[0] * b + m[1] * g + m[2] * r;
            }
            for (o, &a) in out[c..].iter_mut().step_by(self.out_channels).zip(&*acc) {
                *o = saturate(a);
            }
        }
    }
}

#[cfg(test)]
mod tests
{
    use super::*;

    #[test]
    fn saturation()
    {
        assert_eq!(saturate(21.4), 21);
        assert_eq!(saturate(254.999), 254);
        assert_eq!(saturate(255.), 255);
        assert_eq!(saturate(300.7), 255);
        assert_eq!(saturate(-3.), 0);
        assert_eq!(saturate(f64::NAN), 0);
    }

    #[test]
    fn grayscale_pixel_truncates()
    {
        let mut out = [0];
        ColorKernel::GRAYSCALE.apply_pixel(&[10, 20, 30], &mut out);
        assert_eq!(out, [21]);
        ColorKernel::GRAYSCALE.apply_pixel(&[0, 0, 0], &mut out);
        assert_eq!(out, [0]);
    }

    #[test]
    fn sepia_endpoints_are_exact()
    {
        let identity = [[1., 0., 0.], [0., 1., 0.], [0., 0., 1.]];
        assert_eq!(ColorKernel::sepia(0.).unwrap(), ColorKernel::from_matrix(identity));
        assert_eq!(ColorKernel::sepia(1.).unwrap(), ColorKernel::SEPIA);
        for amount in [-0.1, 1.01, f64::NAN, f64::INFINITY] {
            assert_eq!(ColorKernel::sepia(amount).unwrap_err().kind(), ErrorKind::InvalidParameter);
        }
    }

    #[test]
    fn sepia_coefficients_follow_k()
    {
        for amount in [0.1, 0.25, 0.3, 0.5, 0.7, 0.9] {
            let k = 1. - amount;
            let expected = [
                [0.131 + 0.869 * k, 0.534 - 0.534 * k, 0.272 - 0.272 * k],
                [0.168 - 0.168 * k, 0.686 + 0.314 * k, 0.349 - 0.349 * k],
                [0.189 - 0.189 * k, 0.769 - 0.769 * k, 0.393 + 0.607 * k],
            ];
            assert_eq!(ColorKernel::sepia(amount).unwrap().rows(), &expected[..], "amount {}", amount);
        }
    }

    #[test]
    fn half_sepia_pixel()
    {
        let mut out = [0; 3];
        ColorKernel::sepia(0.5).unwrap().apply_pixel(&[5, 185, 250], &mut out);
        assert_eq!(out, [86, 200, 245]);
    }

    #[test]
    fn sepia_clamps_white()
    {
        let mut out = [0; 3];
        ColorKernel::SEPIA.apply_pixel(&[255, 255, 255], &mut out);
        // 0.131 + 0.534 + 0.272 < 1 keeps blue in range
        assert_eq!(out, [238, 255, 255]);
    }

    #[test]
    fn row_matches_pixels()
    {
        let row = [10, 20, 30, 255, 0, 128, 1, 2, 3, 200, 201, 202];
        for kernel in [ColorKernel::GRAYSCALE, ColorKernel::SEPIA, ColorKernel::sepia(0.3).unwrap()] {
            let n = kernel.out_channels();
            let mut by_row = vec![0; 4 * n];
            kernel.apply_row(&row, &mut by_row);
            let mut by_pixel = vec![0; 4 * n];
            for (px, out) in row.chunks(3).zip(by_pixel.chunks_mut(n)) {
                kernel.apply_pixel(px, out);
            }
            assert_eq!(by_row, by_pixel);
        }
    }
}
