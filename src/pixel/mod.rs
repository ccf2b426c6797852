// Copyright 2024 numcore developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
//! Grayscale and sepia filters for 8-bit BGR images.
//!
//! A [`PixelBuffer`] holds the image. A [`ColorKernel`] maps every pixel to
//! new channel values through a fixed linear combination, and a
//! [`Strategy`] decides how the kernel is run. Results saturate: channel
//! values above 255 become 255, fractional values are truncated.
//!
//! [`Filter`] bundles a kernel with an optional [`resize_area`] step:
//!
//! ```
//! use numcore::pixel::{grayscale, Filter, PixelBuffer};
//!
//! let image = PixelBuffer::from_shape_vec((1, 1, 3), vec![10, 20, 30]).unwrap();
//! assert_eq!(grayscale(&image).unwrap().as_slice(), &[21]);
//!
//! let white = PixelBuffer::from_elem((2, 2, 3), 255).unwrap();
//! let sepia = Filter::sepia().apply(&white).unwrap();
//! assert_eq!(sepia.pixel(0, 0), &[238, 255, 255]);
//! ```

mod buffer;
mod filter;
mod kernel;
mod resize;
mod strategy;

pub use self::buffer::{PixelBuffer, PixelDim};
pub use self::filter::{grayscale, sepia, sepia_amount, Effect, Filter, FilterOptions};
pub use self::kernel::{saturate, ColorKernel, GRAYSCALE_WEIGHTS, SEPIA_MATRIX};
pub use self::resize::resize_area;
pub use self::strategy::Strategy;
