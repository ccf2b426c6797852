// Copyright 2024 numcore developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use std::slice::ChunksExact;

use crate::error::{from_kind, ErrorKind};
use crate::numeric_util;
use crate::{ArrayError, DType, FixedArray, Ix, Operand, Scalar};

/// The row view of an array, see [`FixedArray::grid`].
#[derive(Clone, Debug)]
pub enum Grid<'a>
{
    /// A one-dimensional array: the elements themselves.
    Vector(&'a [Scalar]),
    /// A two-dimensional array: one slice per row.
    Matrix(ChunksExact<'a, Scalar>),
}

/// The result of indexing the outer axis, see [`FixedArray::get`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Item<'a>
{
    /// An element of a one-dimensional array.
    Scalar(Scalar),
    /// A row of a two-dimensional array.
    Row(&'a [Scalar]),
}

impl<'a> Item<'a>
{
    /// The element, if this is an element of a one-dimensional array.
    pub fn scalar(self) -> Option<Scalar>
    {
        match self {
            Item::Scalar(x) => Some(x),
            Item::Row(_) => None,
        }
    }

    /// The row, if this is a row of a two-dimensional array.
    pub fn row(self) -> Option<&'a [Scalar]>
    {
        match self {
            Item::Scalar(_) => None,
            Item::Row(row) => Some(row),
        }
    }
}

impl FixedArray
{
    /// Return the shape of the array as a slice.
    pub fn shape(&self) -> &[Ix]
    {
        &self.dim
    }

    /// Return the number of dimensions (axes) in the array, 1 or 2.
    pub fn ndim(&self) -> usize
    {
        self.dim.len()
    }

    /// Return the total number of elements in the array.
    pub fn len(&self) -> usize
    {
        self.data.len()
    }

    /// Always `false`: arrays hold at least one element.
    pub fn is_empty(&self) -> bool
    {
        self.data.is_empty()
    }

    /// Return the data type shared by all elements.
    pub fn dtype(&self) -> DType
    {
        self.dtype
    }

    /// Return the elements in row-major order.
    pub fn as_slice(&self) -> &[Scalar]
    {
        &self.data
    }

    /// Return the elements in row-major order, consuming the array.
    pub fn into_vec(self) -> Vec<Scalar>
    {
        self.data
    }

    /// Return an iterator over the elements in row-major order.
    pub fn iter(&self) -> std::slice::Iter<'_, Scalar>
    {
        self.data.iter()
    }

    /// Length of the rows: the whole array for one dimension, the second
    /// axis for two.
    fn row_len(&self) -> usize
    {
        self.dim[self.ndim() - 1]
    }

    /// Return the row view of the array.
    ///
    /// For a one-dimensional array this is the flat element sequence; for a
    /// two-dimensional array, `shape[0]` rows of `shape[1]` elements.
    pub fn grid(&self) -> Grid<'_>
    {
        match self.ndim() {
            1 => Grid::Vector(&self.data),
            _ => Grid::Matrix(self.rows()),
        }
    }

    /// Return an iterator over the rows. A one-dimensional array is a
    /// single row.
    ///
    /// ```
    /// use numcore::arr2;
    ///
    /// let a = arr2(&[[1, 2], [3, 4], [5, 6]]);
    /// assert_eq!(a.rows().count(), 3);
    /// ```
    pub fn rows(&self) -> ChunksExact<'_, Scalar>
    {
        self.data.chunks_exact(self.row_len())
    }

    /// Index the outer axis.
    ///
    /// The index must be an integer; negative integers count from the end.
    /// A one-dimensional array yields an element, a two-dimensional array
    /// yields a row.
    ///
    /// ***Errors*** with `InvalidIndex` if `index` is not an integer or is
    /// out of bounds.
    ///
    /// ```
    /// use numcore::{arr1, arr2, ErrorKind, Item, Scalar};
    ///
    /// let a = arr1(&[2, 3, 4]);
    /// assert_eq!(a.get(-1).unwrap(), Item::Scalar(Scalar::Int(4)));
    /// assert_eq!(a.get(1.5).unwrap_err().kind(), ErrorKind::InvalidIndex);
    ///
    /// let m = arr2(&[[1, 2], [3, 4]]);
    /// assert_eq!(m.get(1).unwrap().row(), Some(&[Scalar::Int(3), Scalar::Int(4)][..]));
    /// ```
    pub fn get<I>(&self, index: I) -> Result<Item<'_>, ArrayError>
    where I: Into<Scalar>
    {
        let index = match index.into() {
            Scalar::Int(i) => i,
            _ => return Err(from_kind(ErrorKind::InvalidIndex)),
        };
        let n = i64::try_from(self.dim[0]).map_err(|_| from_kind(ErrorKind::InvalidIndex))?;
        let i = if index < 0 { index + n } else { index };
        if i < 0 || i >= n {
            return Err(from_kind(ErrorKind::InvalidIndex));
        }
        let i = i as usize;
        Ok(match self.ndim() {
            1 => Item::Scalar(self.data[i]),
            _ => {
                let cols = self.row_len();
                Item::Row(&self.data[i * cols..(i + 1) * cols])
            }
        })
    }

    /// Return `true` if both arrays have the same shape and the same
    /// elements in the same order.
    ///
    /// Arrays of different shapes are simply not equal; this never fails.
    /// Integer and real elements compare by value, and a NaN element equals
    /// a NaN element, so an array always equals itself. Booleans never equal
    /// numbers: `[true]` is not equal to `[1]`.
    pub fn equals(&self, other: &FixedArray) -> bool
    {
        self.dim == other.dim && numeric_util::unrolled_eq_by(&self.data, &other.data, Scalar::same_value)
    }

    /// Compare element-wise, returning a boolean array of the same shape.
    ///
    /// A scalar operand is compared against every element. An array operand
    /// must have the same shape.
    ///
    /// ***Errors*** with `ShapeMismatch` if the array operand's shape
    /// differs. (Contrast with [`.equals()`](Self::equals), which returns
    /// `false` instead.)
    ///
    /// ```
    /// use numcore::{arr1, ErrorKind};
    ///
    /// let a = arr1(&[1, 2, 3]);
    /// assert_eq!(a.compare_equal(2).unwrap(), arr1(&[false, true, false]));
    /// assert_eq!(a.compare_equal(&arr1(&[1, 0, 3])).unwrap(), arr1(&[true, false, true]));
    /// assert_eq!(a.compare_equal(&arr1(&[1, 2])).unwrap_err().kind(), ErrorKind::ShapeMismatch);
    /// ```
    pub fn compare_equal<'a, O>(&self, other: O) -> Result<FixedArray, ArrayError>
    where O: Into<Operand<'a>>
    {
        let data = match other.into() {
            Operand::Scalar(s) => self.data.iter().map(|x| Scalar::Bool(*x == s)).collect(),
            Operand::Array(b) => {
                if self.dim != b.dim {
                    return Err(from_kind(ErrorKind::ShapeMismatch));
                }
                self.data
                    .iter()
                    .zip(&b.data)
                    .map(|(x, y)| Scalar::Bool(x == y))
                    .collect()
            }
        };
        Ok(self.with_data(DType::Boolean, data))
    }
}

impl PartialEq for FixedArray
{
    /// Same as [`FixedArray::equals`].
    fn eq(&self, other: &FixedArray) -> bool
    {
        self.equals(other)
    }
}

impl<'a> IntoIterator for &'a FixedArray
{
    type Item = &'a Scalar;
    type IntoIter = std::slice::Iter<'a, Scalar>;

    fn into_iter(self) -> Self::IntoIter
    {
        self.iter()
    }
}
