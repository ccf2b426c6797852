// Copyright 2024 numcore developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Constructor methods for `FixedArray`.

use crate::error::{from_kind, ErrorKind};
use crate::{ArrayError, DType, FixedArray, Ix, Scalar};

/// # Constructor Methods for Fixed Arrays
impl FixedArray
{
    /// Create an array with the given shape from a vector of values in
    /// row-major order.
    ///
    /// Validation happens in this order:
    ///
    /// 1. The data type is taken from the first value; with no values there
    ///    is nothing to infer it from and the error is `TypeKind`.
    /// 2. Every value must have exactly that data type (`TypeMismatch`).
    ///    Booleans and integers are distinct.
    /// 3. The number of values must equal the product of the shape
    ///    (`ShapeMismatch`).
    /// 4. The shape must have one or two axes (`UnsupportedRank`).
    ///
    /// ```
    /// use numcore::{FixedArray, ErrorKind, Scalar};
    ///
    /// let a = FixedArray::from_shape_vec([2, 2], vec![1, 2, 3, 4]).unwrap();
    /// assert_eq!(a.shape(), &[2, 2]);
    ///
    /// let e = FixedArray::from_shape_vec([2], vec![Scalar::Int(1), Scalar::Real(1.)]);
    /// assert_eq!(e.unwrap_err().kind(), ErrorKind::TypeMismatch);
    ///
    /// let e = FixedArray::from_shape_vec([3], vec![1, 2]);
    /// assert_eq!(e.unwrap_err().kind(), ErrorKind::ShapeMismatch);
    ///
    /// let e = FixedArray::from_shape_vec([2, 2, 2], vec![0; 8]);
    /// assert_eq!(e.unwrap_err().kind(), ErrorKind::UnsupportedRank);
    /// ```
    pub fn from_shape_vec<Sh, T>(shape: Sh, values: Vec<T>) -> Result<Self, ArrayError>
    where
        Sh: AsRef<[Ix]>,
        T: Into<Scalar>,
    {
        let data: Vec<Scalar> = values.into_iter().map(Into::into).collect();
        let dtype = infer_dtype(&data)?;
        let shape = shape.as_ref();
        if size_of_shape(shape) != Some(data.len()) {
            return Err(from_kind(ErrorKind::ShapeMismatch));
        }
        if shape.is_empty() || shape.len() > 2 {
            return Err(from_kind(ErrorKind::UnsupportedRank));
        }
        Ok(FixedArray::from_parts(shape.to_vec(), dtype, data))
    }

    /// Create an array with all elements equal to `elem`.
    ///
    /// ```
    /// use numcore::{FixedArray, Scalar};
    ///
    /// let a = FixedArray::from_elem([2, 3], 0.).unwrap();
    /// assert_eq!(a.len(), 6);
    /// assert!(a.as_slice().iter().all(|x| *x == Scalar::Real(0.)));
    /// ```
    pub fn from_elem<Sh, T>(shape: Sh, elem: T) -> Result<Self, ArrayError>
    where
        Sh: AsRef<[Ix]>,
        T: Into<Scalar>,
    {
        let elem = elem.into();
        let n = size_of_shape(shape.as_ref()).ok_or_else(|| from_kind(ErrorKind::ShapeMismatch))?;
        Self::from_shape_vec(shape, vec![elem; n])
    }

    /// Assemble an array from parts the caller has already validated.
    pub(crate) fn from_parts(dim: Vec<Ix>, dtype: DType, data: Vec<Scalar>) -> Self
    {
        debug_assert!(dim.len() == 1 || dim.len() == 2);
        debug_assert_eq!(size_of_shape(&dim), Some(data.len()));
        debug_assert!(data.iter().all(|x| x.dtype() == dtype));
        FixedArray {
            dim: dim.into_boxed_slice(),
            dtype,
            data,
        }
    }

    /// Build an array of this array's shape from new elements whose data
    /// type is known to be `dtype`.
    pub(crate) fn with_data(&self, dtype: DType, data: Vec<Scalar>) -> Self
    {
        FixedArray::from_parts(self.dim.to_vec(), dtype, data)
    }
}

/// Infer the array data type from the first value and check the rest.
fn infer_dtype(values: &[Scalar]) -> Result<DType, ArrayError>
{
    let dtype = match values.first() {
        Some(first) => first.dtype(),
        None => return Err(from_kind(ErrorKind::TypeKind)),
    };
    if values.iter().all(|x| x.dtype() == dtype) {
        Ok(dtype)
    } else {
        Err(from_kind(ErrorKind::TypeMismatch))
    }
}

/// Product of the axis lengths, `None` on overflow.
///
/// The empty product is 1.
pub(crate) fn size_of_shape(shape: &[Ix]) -> Option<usize>
{
    shape.iter().try_fold(1usize, |acc, &d| acc.checked_mul(d))
}

#[cfg(test)]
mod tests
{
    use super::*;

    #[test]
    fn empty_values_have_no_dtype()
    {
        let e = FixedArray::from_shape_vec([0], Vec::<Scalar>::new());
        assert_eq!(e.unwrap_err().kind(), ErrorKind::TypeKind);
    }

    #[test]
    fn dtype_is_checked_before_shape()
    {
        let e = FixedArray::from_shape_vec([5], vec![Scalar::Bool(true), Scalar::Int(1)]);
        assert_eq!(e.unwrap_err().kind(), ErrorKind::TypeMismatch);
    }

    #[test]
    fn shape_is_checked_before_rank()
    {
        let e = FixedArray::from_shape_vec([2, 2, 2], vec![1; 7]);
        assert_eq!(e.unwrap_err().kind(), ErrorKind::ShapeMismatch);
        let e = FixedArray::from_shape_vec([], vec![1]);
        assert_eq!(e.unwrap_err().kind(), ErrorKind::UnsupportedRank);
    }

    #[test]
    fn zero_length_axis_is_a_shape_mismatch()
    {
        let e = FixedArray::from_shape_vec([0, 3], vec![1]);
        assert_eq!(e.unwrap_err().kind(), ErrorKind::ShapeMismatch);
    }

    #[test]
    fn size_overflow()
    {
        assert_eq!(size_of_shape(&[usize::MAX, 2]), None);
        assert_eq!(size_of_shape(&[]), Some(1));
    }
}
