// Copyright 2024 numcore developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use std::error::Error;
use std::fmt;

/// An error produced while building or querying an array or pixel buffer.
#[derive(Clone)]
pub struct ArrayError
{
    // we want to be able to change this representation later
    repr: ErrorKind,
}

impl ArrayError
{
    /// Return the `ErrorKind` of this error.
    #[inline]
    pub fn kind(&self) -> ErrorKind
    {
        self.repr
    }

    /// Create a new `ArrayError`
    pub fn from_kind(error: ErrorKind) -> Self
    {
        from_kind(error)
    }
}

/// Error code for an error related to array construction, indexing or
/// filter parameters.
///
/// This enumeration is not exhaustive. The representation of the enum
/// is not guaranteed.
#[non_exhaustive]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ErrorKind
{
    /// element type cannot be stored in an array
    TypeKind,
    /// elements do not share one data type
    TypeMismatch,
    /// element count does not fit the shape, or shapes differ
    ShapeMismatch,
    /// only one- and two-dimensional shapes are supported
    UnsupportedRank,
    /// index is not an integer or is out of bounds
    InvalidIndex,
    /// parameter (scale, sepia amount, strategy) is out of range
    InvalidParameter,
}

#[inline(always)]
pub fn from_kind(k: ErrorKind) -> ArrayError
{
    ArrayError { repr: k }
}

impl PartialEq for ArrayError
{
    #[inline(always)]
    fn eq(&self, rhs: &Self) -> bool
    {
        self.repr == rhs.repr
    }
}

impl Eq for ArrayError {}

impl Error for ArrayError {}

impl fmt::Display for ArrayError
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        let description = match self.kind() {
            ErrorKind::TypeKind => "unsupported element type",
            ErrorKind::TypeMismatch => "elements must share one data type",
            ErrorKind::ShapeMismatch => "number of elements does not fit the shape",
            ErrorKind::UnsupportedRank => "only 1D and 2D arrays are supported",
            ErrorKind::InvalidIndex => "index must be an integer within bounds",
            ErrorKind::InvalidParameter => "parameter out of range",
        };
        write!(f, "ArrayError/{:?}: {}", self.kind(), description)
    }
}

impl fmt::Debug for ArrayError
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        write!(f, "{}", self)
    }
}

/// Which element-wise operator was attempted.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum BinaryOp
{
    Add,
    Sub,
    Mul,
}

/// The combination of operands an arithmetic operator declined.
///
/// This is not a failure of the array: callers are expected to check for it
/// and fall back to another operand order or representation.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct NotSupported
{
    op: BinaryOp,
    reason: Unsupported,
}

/// Why an operand combination was declined.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Unsupported
{
    /// the two arrays do not have identical shapes
    ShapeMismatch,
    /// boolean scalars are not arithmetic operands
    BooleanScalar,
}

impl NotSupported
{
    pub(crate) fn new(op: BinaryOp, reason: Unsupported) -> Self
    {
        NotSupported { op, reason }
    }

    /// The operator that was attempted.
    pub fn op(&self) -> BinaryOp
    {
        self.op
    }

    /// Why the operands were declined.
    pub fn reason(&self) -> Unsupported
    {
        self.reason
    }
}

impl Error for NotSupported {}

impl fmt::Display for NotSupported
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        let reason = match self.reason {
            Unsupported::ShapeMismatch => "operand shapes differ",
            Unsupported::BooleanScalar => "boolean scalar operand",
        };
        write!(f, "{:?} not supported: {}", self.op, reason)
    }
}
