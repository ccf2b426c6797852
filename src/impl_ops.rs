// Copyright 2024 numcore developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use crate::error::{BinaryOp, NotSupported, Unsupported};
use crate::{FixedArray, Scalar};

/// The outcome of element-wise arithmetic with an arbitrary operand.
///
/// `Err(NotSupported)` means the operand combination is not defined (arrays
/// of different shapes, or a boolean scalar). It is a signal for callers
/// that dispatch over several operand kinds, not a failure of the array.
pub type OpResult = Result<FixedArray, NotSupported>;

/// The right hand side of an element-wise operation: a scalar or another
/// array.
#[derive(Copy, Clone, Debug)]
pub enum Operand<'a>
{
    Scalar(Scalar),
    Array(&'a FixedArray),
}

impl<'a> From<&'a FixedArray> for Operand<'a>
{
    fn from(a: &'a FixedArray) -> Self
    {
        Operand::Array(a)
    }
}

macro_rules! impl_operand_from_scalar {
    ($($t:ty),*) => {
        $(
        impl From<$t> for Operand<'_>
        {
            fn from(x: $t) -> Self
            {
                Operand::Scalar(Scalar::from(x))
            }
        }
        )*
    };
}

impl_operand_from_scalar!(i8, i16, i32, i64, u8, u16, u32, f32, f64, bool, Scalar);

/// Elements that can be used as direct operands in arithmetic with arrays.
///
/// For example, `f64` is a `ScalarOperand` which means that for an array `a`,
/// arithmetic like `&a + 1.0` and `&a * 2.` is defined and returns a new
/// `FixedArray` directly, since a numeric scalar always fits any array.
///
/// ***Left hand side*** scalar operands are implemented for the same types,
/// allowing `1.0 - &a` and `2 * &a`.
///
/// `bool` is not a `ScalarOperand`, see [`Unsupported::BooleanScalar`].
pub trait ScalarOperand: 'static + Copy + Into<Scalar> {}
impl ScalarOperand for i8 {}
impl ScalarOperand for u8 {}
impl ScalarOperand for i16 {}
impl ScalarOperand for u16 {}
impl ScalarOperand for i32 {}
impl ScalarOperand for u32 {}
impl ScalarOperand for i64 {}
impl ScalarOperand for f32 {}
impl ScalarOperand for f64 {}

impl BinaryOp
{
    fn int_op(self) -> fn(i64, i64) -> i64
    {
        match self {
            BinaryOp::Add => i64::wrapping_add,
            BinaryOp::Sub => i64::wrapping_sub,
            BinaryOp::Mul => i64::wrapping_mul,
        }
    }

    fn real_op(self) -> fn(f64, f64) -> f64
    {
        match self {
            BinaryOp::Add => |a, b| a + b,
            BinaryOp::Sub => |a, b| a - b,
            BinaryOp::Mul => |a, b| a * b,
        }
    }
}

/// # Element-wise Arithmetic
///
/// Integer arithmetic wraps on `i64` overflow. An operation involving a real
/// element or scalar produces a real array. Boolean elements take part as
/// 0 and 1, producing integers.
impl FixedArray
{
    /// Combine every element with the numeric scalar `x`.
    fn map_scalar(&self, x: Scalar, op: BinaryOp) -> FixedArray
    {
        let (int_op, real_op) = (op.int_op(), op.real_op());
        let dtype = Scalar::promoted_dtype(self.dtype(), x.dtype());
        let data = self.iter().map(|&a| a.combine(x, int_op, real_op)).collect();
        self.with_data(dtype, data)
    }

    fn zip_op(&self, rhs: Operand<'_>, op: BinaryOp) -> OpResult
    {
        match rhs {
            Operand::Scalar(Scalar::Bool(_)) => Err(NotSupported::new(op, Unsupported::BooleanScalar)),
            Operand::Scalar(x) => Ok(self.map_scalar(x, op)),
            Operand::Array(b) => {
                if self.shape() != b.shape() {
                    return Err(NotSupported::new(op, Unsupported::ShapeMismatch));
                }
                let (int_op, real_op) = (op.int_op(), op.real_op());
                let dtype = Scalar::promoted_dtype(self.dtype(), b.dtype());
                let data = self
                    .iter()
                    .zip(b.iter())
                    .map(|(&x, &y)| x.combine(y, int_op, real_op))
                    .collect();
                Ok(self.with_data(dtype, data))
            }
        }
    }

    /// Element-wise addition with a scalar or an array of the same shape.
    ///
    /// ```
    /// use numcore::{arr1, arr2, Unsupported};
    ///
    /// let a = arr1(&[2, 3, 4]);
    /// assert_eq!(a.try_add(2).unwrap(), arr1(&[4, 5, 6]));
    /// assert_eq!(a.try_add(&arr1(&[1, 2, 3])).unwrap(), arr1(&[3, 5, 7]));
    ///
    /// let not_supported = a.try_add(&arr2(&[[1, 2, 3]])).unwrap_err();
    /// assert_eq!(not_supported.reason(), Unsupported::ShapeMismatch);
    /// ```
    pub fn try_add<'a, O>(&self, rhs: O) -> OpResult
    where O: Into<Operand<'a>>
    {
        self.zip_op(rhs.into(), BinaryOp::Add)
    }

    /// Element-wise subtraction of a scalar or an array of the same shape.
    pub fn try_sub<'a, O>(&self, rhs: O) -> OpResult
    where O: Into<Operand<'a>>
    {
        self.zip_op(rhs.into(), BinaryOp::Sub)
    }

    /// Element-wise (Hadamard) multiplication with a scalar or an array of
    /// the same shape. This is never a matrix product.
    pub fn try_mul<'a, O>(&self, rhs: O) -> OpResult
    where O: Into<Operand<'a>>
    {
        self.zip_op(rhs.into(), BinaryOp::Mul)
    }

    /// Reflected subtraction, `lhs - self`, computed as `(-self) + lhs`.
    ///
    /// ```
    /// use numcore::arr1;
    ///
    /// let a = arr1(&[1., 2.5]);
    /// assert_eq!(a.try_rsub(10).unwrap(), arr1(&[9., 7.5]));
    /// ```
    pub fn try_rsub<'a, O>(&self, lhs: O) -> OpResult
    where O: Into<Operand<'a>>
    {
        self.neg_elements().try_add(lhs)
    }

    /// Return a new array with every element negated.
    fn neg_elements(&self) -> FixedArray
    {
        let dtype = Scalar::promoted_dtype(self.dtype(), self.dtype());
        let data = self.iter().map(|x| x.neg()).collect();
        self.with_data(dtype, data)
    }
}

macro_rules! impl_binary_op(
    ($trt:ident, $mth:ident, $op:expr, $doc:expr) => (
/// Perform elementwise
#[doc=$doc]
/// between references `self` and `rhs`.
///
/// Returns `NotSupported` if their shapes disagree.
impl<'a> $trt<&'a FixedArray> for &'a FixedArray
{
    type Output = OpResult;
    fn $mth(self, rhs: &'a FixedArray) -> OpResult
    {
        self.zip_op(Operand::Array(rhs), $op)
    }
}

/// Perform elementwise
#[doc=$doc]
/// between `self` and `rhs`.
///
/// Returns `NotSupported` if their shapes disagree.
impl $trt<FixedArray> for FixedArray
{
    type Output = OpResult;
    fn $mth(self, rhs: FixedArray) -> OpResult
    {
        self.zip_op(Operand::Array(&rhs), $op)
    }
}

/// Perform elementwise
#[doc=$doc]
/// between the reference `self` and the scalar `x`,
/// and return the result as a new `FixedArray`.
impl<'a, B> $trt<B> for &'a FixedArray
    where B: ScalarOperand,
{
    type Output = FixedArray;
    fn $mth(self, x: B) -> FixedArray
    {
        self.map_scalar(x.into(), $op)
    }
}

/// Perform elementwise
#[doc=$doc]
/// between `self` and the scalar `x`,
/// and return the result as a new `FixedArray`.
impl<B> $trt<B> for FixedArray
    where B: ScalarOperand,
{
    type Output = FixedArray;
    fn $mth(self, x: B) -> FixedArray
    {
        self.map_scalar(x.into(), $op)
    }
}
    );
);

// Pick the expression $a for commutative and $b for ordered binop
macro_rules! if_commutative {
    (Commute { $a:expr } or { $b:expr }) => {
        $a
    };
    (Ordered { $a:expr } or { $b:expr }) => {
        $b
    };
}

macro_rules! impl_scalar_lhs_op {
    // $commutative flag. Reuse the array + scalar impl if we can.
    ($scalar:ty, $commutative:ident, $trt:ident, $mth:ident) => (
// Perform elementwise
// between the scalar `self` and array `rhs`,
// and return the result as a new `FixedArray`.
impl<'a> $trt<&'a FixedArray> for $scalar
{
    type Output = FixedArray;
    fn $mth(self, rhs: &FixedArray) -> FixedArray
    {
        if_commutative!($commutative {
            rhs.$mth(self)
        } or {
            rhs.neg_elements().add(self)
        })
    }
}

impl $trt<FixedArray> for $scalar
{
    type Output = FixedArray;
    fn $mth(self, rhs: FixedArray) -> FixedArray
    {
        self.$mth(&rhs)
    }
}
    );
}

mod arithmetic_ops
{
    use super::*;

    use std::ops::*;

    impl_binary_op!(Add, add, BinaryOp::Add, "addition");
    impl_binary_op!(Sub, sub, BinaryOp::Sub, "subtraction");
    impl_binary_op!(Mul, mul, BinaryOp::Mul, "multiplication");

    macro_rules! all_scalar_ops {
        ($scalar:ty) => (
            impl_scalar_lhs_op!($scalar, Commute, Add, add);
            impl_scalar_lhs_op!($scalar, Ordered, Sub, sub);
            impl_scalar_lhs_op!($scalar, Commute, Mul, mul);
        );
    }
    all_scalar_ops!(i8);
    all_scalar_ops!(u8);
    all_scalar_ops!(i16);
    all_scalar_ops!(u16);
    all_scalar_ops!(i32);
    all_scalar_ops!(u32);
    all_scalar_ops!(i64);
    all_scalar_ops!(f32);
    all_scalar_ops!(f64);

    impl Neg for FixedArray
    {
        type Output = Self;
        /// Perform an elementwise negation of `self` and return the result.
        ///
        /// Boolean arrays negate to integers, like any other arithmetic on
        /// them.
        fn neg(self) -> Self
        {
            self.neg_elements()
        }
    }

    impl<'a> Neg for &'a FixedArray
    {
        type Output = FixedArray;
        /// Perform an elementwise negation of reference `self` and return the
        /// result as a new `FixedArray`.
        fn neg(self) -> FixedArray
        {
            self.neg_elements()
        }
    }
}
