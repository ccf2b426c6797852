// Copyright 2024 numcore developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use numcore::{DType, FixedArray, Ix, Scalar};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArrayBuilder
{
    dim: Vec<Ix>,
    dtype: DType,
    generator: ElementGenerator,
}

/// How to generate elements
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ElementGenerator
{
    /// 0, 1, 2, ... in row-major order; booleans alternate starting at `false`.
    Sequential,
    Zero,
}

impl Default for ArrayBuilder
{
    fn default() -> Self
    {
        Self::new(&[1])
    }
}

impl ArrayBuilder
{
    pub fn new(dim: &[Ix]) -> Self
    {
        ArrayBuilder {
            dim: dim.to_vec(),
            dtype: DType::Integer,
            generator: ElementGenerator::Sequential,
        }
    }

    pub fn dtype(mut self, dtype: DType) -> Self
    {
        self.dtype = dtype;
        self
    }

    pub fn generator(mut self, generator: ElementGenerator) -> Self
    {
        self.generator = generator;
        self
    }

    /// **Panics** if the shape is not one or two non-empty axes.
    pub fn build(self) -> FixedArray
    {
        let size = self.dim.iter().product::<usize>();
        let use_zeros = self.generator == ElementGenerator::Zero;
        let dtype = self.dtype;
        let data = (0..size)
            .map(|i| {
                let i = if use_zeros { 0 } else { i as i64 };
                match dtype {
                    DType::Integer => Scalar::Int(i),
                    DType::Real => Scalar::Real(i as f64),
                    DType::Boolean => Scalar::Bool(i % 2 == 1),
                }
            })
            .collect::<Vec<_>>();
        FixedArray::from_shape_vec(&self.dim, data).unwrap_or_else(|e| panic!("ArrayBuilder {:?}: {}", self.dim, e))
    }
}

#[test]
fn test_sequential()
{
    let a = ArrayBuilder::new(&[2, 3]).build();
    assert_eq!(a, numcore::arr2(&[[0, 1, 2], [3, 4, 5]]));
    let b = ArrayBuilder::new(&[4])
        .dtype(DType::Boolean)
        .build();
    assert_eq!(b, numcore::arr1(&[false, true, false, true]));
    let z = ArrayBuilder::new(&[3])
        .dtype(DType::Real)
        .generator(ElementGenerator::Zero)
        .build();
    assert_eq!(z.dtype(), DType::Real);
    assert_eq!(z.mean(), 0.);
}
