// Copyright 2024 numcore developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use std::fmt;
use std::slice::ChunksExact;

use crate::error::{from_kind, ArrayError, ErrorKind};
use crate::{FixedArray, Ix, Scalar};

/// Shape of a pixel buffer: `(height, width, channels)`.
pub type PixelDim = (Ix, Ix, Ix);

/// An owned 8-bit image.
///
/// Pixels are stored row by row with their channels interleaved. A color
/// buffer has three channels in **blue, green, red** order; a gray buffer
/// has one.
///
/// ```
/// use numcore::pixel::PixelBuffer;
///
/// let image = PixelBuffer::from_shape_vec((1, 2, 3), vec![0, 0, 255, 255, 0, 0]).unwrap();
/// assert_eq!(image.pixel(0, 0), &[0, 0, 255]);
/// assert_eq!(image.dim(), (1, 2, 3));
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct PixelBuffer
{
    height: Ix,
    width: Ix,
    channels: Ix,
    data: Vec<u8>,
}

fn check_dim((height, width, channels): PixelDim) -> Result<usize, ArrayError>
{
    if channels != 1 && channels != 3 {
        return Err(from_kind(ErrorKind::ShapeMismatch));
    }
    height
        .checked_mul(width)
        .and_then(|n| n.checked_mul(channels))
        .ok_or_else(|| from_kind(ErrorKind::ShapeMismatch))
}

impl PixelBuffer
{
    /// Create a buffer from a shape and interleaved, row-major samples.
    ///
    /// **Errors** with `ShapeMismatch` if `channels` is neither 1 nor 3, or if
    /// `data` does not hold exactly `height * width * channels` samples.
    pub fn from_shape_vec(dim: PixelDim, data: Vec<u8>) -> Result<Self, ArrayError>
    {
        let len = check_dim(dim)?;
        if len != data.len() {
            return Err(from_kind(ErrorKind::ShapeMismatch));
        }
        let (height, width, channels) = dim;
        Ok(PixelBuffer {
            height,
            width,
            channels,
            data,
        })
    }

    /// Create a buffer with every sample set to `value`.
    pub fn from_elem(dim: PixelDim, value: u8) -> Result<Self, ArrayError>
    {
        let len = check_dim(dim)?;
        PixelBuffer::from_shape_vec(dim, vec![value; len])
    }

    /// Create a three-channel buffer from a function of the pixel
    /// coordinates `(row, column)` returning `[blue, green, red]`.
    ///
    /// **Panics** if `height * width * 3` overflows `usize`.
    pub fn from_fn<F>(height: Ix, width: Ix, mut f: F) -> Self
    where F: FnMut(Ix, Ix) -> [u8; 3]
    {
        let len = check_dim((height, width, 3))
            .unwrap_or_else(|_| panic!("PixelBuffer::from_fn: {}x{} pixels overflow usize", height, width));
        let mut data = Vec::with_capacity(len);
        for y in 0..height {
            for x in 0..width {
                data.extend_from_slice(&f(y, x));
            }
        }
        PixelBuffer {
            height,
            width,
            channels: 3,
            data,
        }
    }

    /// Allocate a buffer that a kernel fills in; every sample starts at zero.
    pub(crate) fn zeroed(height: Ix, width: Ix, channels: Ix) -> Self
    {
        PixelBuffer {
            height,
            width,
            channels,
            data: vec![0; height * width * channels],
        }
    }

    /// Return the shape as `(height, width, channels)`.
    pub fn dim(&self) -> PixelDim
    {
        (self.height, self.width, self.channels)
    }

    pub fn height(&self) -> Ix
    {
        self.height
    }

    pub fn width(&self) -> Ix
    {
        self.width
    }

    pub fn channels(&self) -> Ix
    {
        self.channels
    }

    /// Return `true` if the buffer holds no pixels.
    pub fn is_empty(&self) -> bool
    {
        self.data.is_empty()
    }

    /// Number of samples in one row.
    #[inline]
    pub fn row_len(&self) -> usize
    {
        self.width * self.channels
    }

    /// Return the interleaved samples in row-major order.
    pub fn as_slice(&self) -> &[u8]
    {
        &self.data
    }

    pub(crate) fn as_mut_slice(&mut self) -> &mut [u8]
    {
        &mut self.data
    }

    /// Consume the buffer and return its samples.
    pub fn into_raw(self) -> Vec<u8>
    {
        self.data
    }

    /// Return the channels of the pixel at `(row, column)`.
    ///
    /// **Panics** if the position is out of bounds.
    #[inline]
    pub fn pixel(&self, y: Ix, x: Ix) -> &[u8]
    {
        assert!(y < self.height && x < self.width, "pixel ({}, {}) out of bounds", y, x);
        let start = (y * self.width + x) * self.channels;
        &self.data[start..start + self.channels]
    }

    /// Return the samples of row `y`.
    ///
    /// **Panics** if `y` is out of bounds.
    pub fn row(&self, y: Ix) -> &[u8]
    {
        assert!(y < self.height, "row {} out of bounds", y);
        let len = self.row_len();
        &self.data[y * len..(y + 1) * len]
    }

    /// Iterate over the rows as sample slices.
    pub fn rows(&self) -> ChunksExact<'_, u8>
    {
        // chunk size must be non-zero
        self.data.chunks_exact(self.row_len().max(1))
    }

    /// Convert a one-channel buffer into a `height × width` integer array.
    ///
    /// **Errors** with `UnsupportedRank` for a color buffer, which would need
    /// a third axis, and with `ShapeMismatch` for an empty buffer.
    pub fn to_array(&self) -> Result<FixedArray, ArrayError>
    {
        if self.channels != 1 {
            return Err(from_kind(ErrorKind::UnsupportedRank));
        }
        if self.is_empty() {
            return Err(from_kind(ErrorKind::ShapeMismatch));
        }
        let data = self.data.iter().map(|&v| Scalar::from(v)).collect::<Vec<_>>();
        FixedArray::from_shape_vec([self.height, self.width], data)
    }
}

impl fmt::Debug for PixelBuffer
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        write!(f, "PixelBuffer {{ dim: {:?} }}", self.dim())
    }
}
