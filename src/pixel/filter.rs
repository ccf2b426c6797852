// Copyright 2024 numcore developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use std::borrow::Cow;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{resize_area, ColorKernel, PixelBuffer, Strategy};
use crate::error::ArrayError;

/// The color effect a [`Filter`] applies.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Effect
{
    /// One output channel, a weighted sum of blue, green and red.
    Grayscale,
    /// Three output channels, see [`ColorKernel::sepia`].
    Sepia,
}

/// Parameters of a [`Filter`] besides its effect.
///
/// Values are checked when the filter is applied, not when they are set.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FilterOptions
{
    /// Resize by this factor before the color effect.
    pub scale: Option<f64>,
    /// Strength of the sepia effect in `[0, 1]`; ignored for grayscale.
    pub sepia_amount: f64,
    pub strategy: Strategy,
}

impl Default for FilterOptions
{
    fn default() -> Self
    {
        FilterOptions {
            scale: None,
            sepia_amount: 1.,
            strategy: Strategy::default(),
        }
    }
}

/// A color filter with an optional resize step.
///
/// ```
/// use numcore::pixel::{Filter, PixelBuffer, Strategy};
///
/// let image = PixelBuffer::from_fn(4, 6, |y, x| [10 * x as u8, 20 * y as u8, 30]);
/// let out = Filter::sepia()
///     .amount(0.5)
///     .scale(0.5)
///     .strategy(Strategy::Naive)
///     .apply(&image)
///     .unwrap();
/// assert_eq!(out.dim(), (2, 3, 3));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Filter
{
    effect: Effect,
    options: FilterOptions,
}

impl Filter
{
    /// Create a filter for `effect` with default options.
    pub fn new(effect: Effect) -> Self
    {
        Filter {
            effect,
            options: FilterOptions::default(),
        }
    }

    pub fn grayscale() -> Self
    {
        Filter::new(Effect::Grayscale)
    }

    /// Full strength sepia, adjustable with [`.amount()`](Filter::amount).
    pub fn sepia() -> Self
    {
        Filter::new(Effect::Sepia)
    }

    /// Set the sepia strength.
    pub fn amount(mut self, amount: f64) -> Self
    {
        self.options.sepia_amount = amount;
        self
    }

    /// Resize by `scale` before applying the effect.
    pub fn scale(mut self, scale: f64) -> Self
    {
        self.options.scale = Some(scale);
        self
    }

    pub fn strategy(mut self, strategy: Strategy) -> Self
    {
        self.options.strategy = strategy;
        self
    }

    /// Replace all options at once.
    pub fn options(mut self, options: FilterOptions) -> Self
    {
        self.options = options;
        self
    }

    pub fn effect(&self) -> Effect
    {
        self.effect
    }

    pub fn get_options(&self) -> &FilterOptions
    {
        &self.options
    }

    /// The color kernel this filter runs.
    ///
    /// **Errors** with `InvalidParameter` for a sepia amount outside `[0, 1]`.
    pub fn kernel(&self) -> Result<ColorKernel, ArrayError>
    {
        match self.effect {
            Effect::Grayscale => Ok(ColorKernel::GRAYSCALE),
            Effect::Sepia => ColorKernel::sepia(self.options.sepia_amount),
        }
    }

    /// Resize `image` if a scale is set, then run the color kernel with the
    /// configured strategy.
    ///
    /// **Errors** with `InvalidParameter` for a bad scale (checked first) or
    /// sepia amount, and with `ShapeMismatch` unless `image` has three
    /// channels.
    pub fn apply(&self, image: &PixelBuffer) -> Result<PixelBuffer, ArrayError>
    {
        log::debug!("applying {:?} filter to {:?} with {:?}", self.effect, image.dim(), self.options);
        let image = match self.options.scale {
            Some(scale) => Cow::Owned(resize_area(image, scale)?),
            None => Cow::Borrowed(image),
        };
        let kernel = self.kernel()?;
        self.options.strategy.apply(&kernel, &image)
    }
}

/// Convert a BGR image to one-channel gray.
///
/// **Errors** with `ShapeMismatch` unless `image` has three channels.
pub fn grayscale(image: &PixelBuffer) -> Result<PixelBuffer, ArrayError>
{
    Filter::grayscale().apply(image)
}

/// Apply the full sepia effect to a BGR image.
///
/// **Errors** with `ShapeMismatch` unless `image` has three channels.
pub fn sepia(image: &PixelBuffer) -> Result<PixelBuffer, ArrayError>
{
    Filter::sepia().apply(image)
}

/// Apply a sepia effect of strength `amount` in `[0, 1]` to a BGR image.
///
/// **Errors** with `InvalidParameter` for `amount` outside `[0, 1]`, and
/// with `ShapeMismatch` unless `image` has three channels.
pub fn sepia_amount(image: &PixelBuffer, amount: f64) -> Result<PixelBuffer, ArrayError>
{
    Filter::sepia().amount(amount).apply(image)
}

#[cfg(test)]
mod tests
{
    use super::*;
    use crate::ErrorKind;

    fn image() -> PixelBuffer
    {
        PixelBuffer::from_fn(4, 4, |y, x| [(x * 60) as u8, (y * 60) as u8, 250])
    }

    #[test]
    fn grayscale_single_pixel()
    {
        let image = PixelBuffer::from_shape_vec((1, 1, 3), vec![10, 20, 30]).unwrap();
        let gray = grayscale(&image).unwrap();
        assert_eq!(gray.dim(), (1, 1, 1));
        assert_eq!(gray.as_slice(), &[21]);
    }

    #[test]
    fn sepia_amount_zero_is_identity()
    {
        let image = image();
        assert_eq!(sepia_amount(&image, 0.).unwrap(), image);
        assert_eq!(sepia_amount(&image, 1.).unwrap(), sepia(&image).unwrap());
    }

    #[test]
    fn scale_is_checked_before_amount()
    {
        let filter = Filter::sepia().amount(2.).scale(-1.);
        assert_eq!(filter.apply(&image()).unwrap_err().kind(), ErrorKind::InvalidParameter);
        let filter = Filter::sepia().amount(2.);
        assert_eq!(filter.apply(&image()).unwrap_err().kind(), ErrorKind::InvalidParameter);
    }

    #[test]
    fn amount_ignored_for_grayscale()
    {
        let out = Filter::grayscale().amount(7.).apply(&image()).unwrap();
        assert_eq!(out, grayscale(&image()).unwrap());
    }

    #[test]
    fn options_round_trip()
    {
        let options = FilterOptions {
            scale: Some(0.5),
            sepia_amount: 0.25,
            strategy: Strategy::Naive,
        };
        let filter = Filter::sepia().options(options);
        assert_eq!(filter.get_options(), &options);
        assert_eq!(filter.apply(&image()).unwrap().dim(), (2, 2, 3));
    }
}
