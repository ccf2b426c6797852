// Copyright 2024 numcore developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Array elements and their data types.

use std::cmp::Ordering;
use std::fmt;

/// The data type shared by every element of a `FixedArray`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DType
{
    Integer,
    Real,
    Boolean,
}

/// A single array element.
///
/// Integers and reals compare equal by numeric value (`Int(1) == Real(1.0)`);
/// booleans are only ever equal to booleans.
#[derive(Copy, Clone, Debug)]
pub enum Scalar
{
    Int(i64),
    Real(f64),
    Bool(bool),
}

impl Scalar
{
    /// The data type of this element.
    #[inline]
    pub fn dtype(&self) -> DType
    {
        match *self {
            Scalar::Int(_) => DType::Integer,
            Scalar::Real(_) => DType::Real,
            Scalar::Bool(_) => DType::Boolean,
        }
    }

    /// Numeric value as `f64`; booleans count as 0 and 1.
    #[inline]
    pub fn to_f64(&self) -> f64
    {
        match *self {
            Scalar::Int(i) => i as f64,
            Scalar::Real(x) => x,
            Scalar::Bool(b) => b as i64 as f64,
        }
    }

    /// Integer value, if this element is an integer.
    pub fn as_int(&self) -> Option<i64>
    {
        match *self {
            Scalar::Int(i) => Some(i),
            _ => None,
        }
    }

    /// Real value, if this element is a real.
    pub fn as_real(&self) -> Option<f64>
    {
        match *self {
            Scalar::Real(x) => Some(x),
            _ => None,
        }
    }

    /// Boolean value, if this element is a boolean.
    pub fn as_bool(&self) -> Option<bool>
    {
        match *self {
            Scalar::Bool(b) => Some(b),
            _ => None,
        }
    }

    /// Arithmetic view: booleans take part in arithmetic as 0 and 1.
    #[inline]
    fn promote_bool(self) -> Scalar
    {
        match self {
            Scalar::Bool(b) => Scalar::Int(b as i64),
            other => other,
        }
    }

    /// Apply an arithmetic operator with the promotion rules of the crate:
    /// integer with integer stays integer (wrapping on overflow), anything
    /// involving a real is computed in `f64`.
    #[inline]
    pub(crate) fn combine(self, rhs: Scalar, int_op: fn(i64, i64) -> i64, real_op: fn(f64, f64) -> f64)
        -> Scalar
    {
        match (self.promote_bool(), rhs.promote_bool()) {
            (Scalar::Int(a), Scalar::Int(b)) => Scalar::Int(int_op(a, b)),
            (a, b) => Scalar::Real(real_op(a.to_f64(), b.to_f64())),
        }
    }

    /// The data type produced by combining elements of `a` and `b`.
    pub(crate) fn promoted_dtype(a: DType, b: DType) -> DType
    {
        match (a, b) {
            (DType::Real, _) | (_, DType::Real) => DType::Real,
            _ => DType::Integer,
        }
    }

    /// Like `==`, except that two NaN reals are the same value.
    #[inline]
    pub(crate) fn same_value(&self, other: &Scalar) -> bool
    {
        match (*self, *other) {
            (Scalar::Real(a), Scalar::Real(b)) if a.is_nan() && b.is_nan() => true,
            (a, b) => a == b,
        }
    }

    #[inline]
    pub(crate) fn neg(self) -> Scalar
    {
        match self {
            Scalar::Int(i) => Scalar::Int(i.wrapping_neg()),
            Scalar::Real(x) => Scalar::Real(-x),
            Scalar::Bool(b) => Scalar::Int(-(b as i64)),
        }
    }
}

impl PartialEq for Scalar
{
    fn eq(&self, other: &Scalar) -> bool
    {
        match (*self, *other) {
            (Scalar::Bool(a), Scalar::Bool(b)) => a == b,
            (Scalar::Bool(_), _) | (_, Scalar::Bool(_)) => false,
            (Scalar::Int(a), Scalar::Int(b)) => a == b,
            (a, b) => a.to_f64() == b.to_f64(),
        }
    }
}

impl PartialOrd for Scalar
{
    fn partial_cmp(&self, other: &Scalar) -> Option<Ordering>
    {
        match (*self, *other) {
            (Scalar::Int(a), Scalar::Int(b)) => Some(a.cmp(&b)),
            (Scalar::Bool(a), Scalar::Bool(b)) => Some(a.cmp(&b)),
            (a, b) => a.to_f64().partial_cmp(&b.to_f64()),
        }
    }
}

impl fmt::Display for Scalar
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        match *self {
            Scalar::Int(i) => fmt::Display::fmt(&i, f),
            // `{:?}` keeps the trailing `.0` on integral reals
            Scalar::Real(x) => fmt::Debug::fmt(&x, f),
            Scalar::Bool(b) => fmt::Display::fmt(&b, f),
        }
    }
}

macro_rules! impl_from_scalar {
    ($($t:ty => $variant:ident as $as_t:ty),* $(,)?) => {
        $(
        impl From<$t> for Scalar
        {
            #[inline]
            fn from(x: $t) -> Scalar
            {
                Scalar::$variant(x as $as_t)
            }
        }
        )*
    };
}

impl_from_scalar!(
    i8 => Int as i64,
    i16 => Int as i64,
    i32 => Int as i64,
    i64 => Int as i64,
    u8 => Int as i64,
    u16 => Int as i64,
    u32 => Int as i64,
    f32 => Real as f64,
    f64 => Real as f64,
);

impl From<bool> for Scalar
{
    #[inline]
    fn from(b: bool) -> Scalar
    {
        Scalar::Bool(b)
    }
}
