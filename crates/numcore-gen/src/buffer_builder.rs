// Copyright 2024 numcore developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use numcore::pixel::{PixelBuffer, PixelDim};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct BufferBuilder
{
    dim: PixelDim,
    generator: SampleGenerator,
}

/// How to generate samples
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SampleGenerator
{
    /// 0, 1, 2, ... wrapping at 256.
    Sequential,
    Constant(u8),
    /// Uniform samples from a `SmallRng` with this seed.
    Random(u64),
}

impl BufferBuilder
{
    pub fn new(dim: PixelDim) -> Self
    {
        BufferBuilder {
            dim,
            generator: SampleGenerator::Sequential,
        }
    }

    pub fn generator(mut self, generator: SampleGenerator) -> Self
    {
        self.generator = generator;
        self
    }

    /// **Panics** if the channel count is neither 1 nor 3.
    pub fn build(self) -> PixelBuffer
    {
        let (h, w, c) = self.dim;
        let size = h * w * c;
        let data = match self.generator {
            SampleGenerator::Sequential => (0..size).map(|i| i as u8).collect(),
            SampleGenerator::Constant(v) => vec![v; size],
            SampleGenerator::Random(seed) => {
                let mut rng = SmallRng::seed_from_u64(seed);
                (0..size).map(|_| rng.random::<u8>()).collect()
            }
        };
        PixelBuffer::from_shape_vec(self.dim, data).unwrap_or_else(|e| panic!("BufferBuilder {:?}: {}", self.dim, e))
    }
}

#[test]
fn test_seeded()
{
    let a = BufferBuilder::new((3, 5, 3))
        .generator(SampleGenerator::Random(7))
        .build();
    let b = BufferBuilder::new((3, 5, 3))
        .generator(SampleGenerator::Random(7))
        .build();
    assert_eq!(a, b);
    assert_eq!(BufferBuilder::new((1, 2, 1)).build().as_slice(), &[0, 1]);
}
