use numcore::prelude::*;
use numcore::{BinaryOp, Unsupported};

use quickcheck::{quickcheck, TestResult};

fn test_oper(op: &str, a: &[i64], b: &[i64], c: &[i64])
{
    let aa = arr1(a);
    let bb = arr1(b);
    let cc = arr1(c);
    test_oper_arr(op, aa, bb, cc);
    let reshape = |xs: &[i64]| FixedArray::from_shape_vec([2, 2], xs.to_vec()).unwrap();
    test_oper_arr(op, reshape(a), reshape(b), reshape(c));
}

fn test_oper_arr(op: &str, aa: FixedArray, bb: FixedArray, cc: FixedArray)
{
    match op {
        "+" => {
            assert_eq!((&aa + &bb).unwrap(), cc);
            assert_eq!(aa.try_add(&bb).unwrap(), cc);
        }
        "-" => {
            assert_eq!((&aa - &bb).unwrap(), cc);
            assert_eq!(bb.try_rsub(&aa).unwrap(), cc);
        }
        "*" => {
            assert_eq!((&aa * &bb).unwrap(), cc);
            assert_eq!((aa * bb).unwrap(), cc);
        }
        "neg" => {
            assert_eq!(-&aa, cc);
            assert_eq!(-aa, cc);
        }
        _ => panic!("unknown op {}", op),
    }
}

#[test]
fn operations()
{
    test_oper("+", &[1, 2, 3, 4], &[0, 1, 2, 3], &[1, 3, 5, 7]);
    test_oper("-", &[1, 2, 3, 4], &[0, 1, 2, 3], &[1, 1, 1, 1]);
    test_oper("*", &[1, 2, 3, 4], &[0, 1, 2, 3], &[0, 2, 6, 12]);
    test_oper("neg", &[1, -2, 3, 0], &[0; 4], &[-1, 2, -3, 0]);
}

#[test]
fn scalar_operations()
{
    let a = arr2(&[[1, 2], [3, 4]]);
    assert_eq!(&a + 1, arr2(&[[2, 3], [4, 5]]));
    assert_eq!(&a - 1, arr2(&[[0, 1], [2, 3]]));
    assert_eq!(&a * 3, arr2(&[[3, 6], [9, 12]]));
    assert_eq!(10i64 - &a, arr2(&[[9, 8], [7, 6]]));
    assert_eq!(2u8 * &a, arr2(&[[2, 4], [6, 8]]));

    let r = &a * 0.5;
    assert_eq!(r.dtype(), DType::Real);
    assert_eq!(r, arr2(&[[0.5, 1.], [1.5, 2.]]));
    assert_eq!(1.5f64 - &a, arr2(&[[0.5, -0.5], [-1.5, -2.5]]));
}

#[test]
fn promotion()
{
    let ints = arr1(&[1, 2]);
    let reals = arr1(&[0.5, 0.25]);
    let bools = arr1(&[true, false]);

    assert_eq!(ints.try_add(&reals).unwrap().dtype(), DType::Real);
    assert_eq!(ints.try_add(&bools).unwrap(), arr1(&[2, 2]));
    assert_eq!(ints.try_add(&bools).unwrap().dtype(), DType::Integer);
    assert_eq!(bools.try_add(&bools).unwrap(), arr1(&[2, 0]));
    assert_eq!(bools.try_mul(&reals).unwrap(), arr1(&[0.5, 0.]));
    assert_eq!((-&bools).dtype(), DType::Integer);
}

#[test]
fn not_supported()
{
    let a = arr1(&[1, 2, 3]);
    let b = arr1(&[1, 2]);
    let err = (&a + &b).unwrap_err();
    assert_eq!(err.op(), BinaryOp::Add);
    assert_eq!(err.reason(), Unsupported::ShapeMismatch);

    // same element count, different shape
    let c = arr2(&[[1, 2, 3]]);
    assert_eq!(a.try_mul(&c).unwrap_err().reason(), Unsupported::ShapeMismatch);

    let err = a.try_sub(true).unwrap_err();
    assert_eq!(err.op(), BinaryOp::Sub);
    assert_eq!(err.reason(), Unsupported::BooleanScalar);
    assert_eq!(a.try_rsub(false).unwrap_err().reason(), Unsupported::BooleanScalar);
}

#[test]
fn integer_overflow_wraps()
{
    let a = arr1(&[i64::MAX]);
    assert_eq!(&a + 1, arr1(&[i64::MIN]));
}

fn to_array<T: Copy + Into<Scalar>>(xs: &[T]) -> Option<FixedArray>
{
    if xs.is_empty() {
        None
    } else {
        Some(arr1(xs))
    }
}

quickcheck! {
    fn add_zero_is_identity(xs: Vec<i32>) -> TestResult {
        let a = match to_array(&xs) {
            Some(a) => a,
            None => return TestResult::discard(),
        };
        TestResult::from_bool(a.try_add(0).unwrap() == a && &a + 0 == a)
    }

    fn scalar_add_commutes(xs: Vec<i32>, s: i32) -> TestResult {
        let a = match to_array(&xs) {
            Some(a) => a,
            None => return TestResult::discard(),
        };
        TestResult::from_bool(&a + s == s + &a)
    }

    fn scalar_mul_commutes(xs: Vec<f64>, s: f64) -> TestResult {
        if !s.is_finite() || xs.iter().any(|x| !x.is_finite()) {
            return TestResult::discard();
        }
        let a = match to_array(&xs) {
            Some(a) => a,
            None => return TestResult::discard(),
        };
        TestResult::from_bool(&a * s == s * &a)
    }

    fn reflected_sub_is_negated_sub(xs: Vec<f64>, s: f64) -> TestResult {
        if !s.is_finite() || xs.iter().any(|x| !x.is_finite()) {
            return TestResult::discard();
        }
        let a = match to_array(&xs) {
            Some(a) => a,
            None => return TestResult::discard(),
        };
        TestResult::from_bool(s - &a == -(&a - s) && a.try_rsub(s).unwrap() == s - &a)
    }

    fn equals_is_reflexive(xs: Vec<i64>) -> TestResult {
        let a = match to_array(&xs) {
            Some(a) => a,
            None => return TestResult::discard(),
        };
        TestResult::from_bool(a.equals(&a) && a.compare_equal(&a).unwrap().iter().all(|x| *x == Scalar::Bool(true)))
    }

    fn equals_is_reflexive_for_reals(xs: Vec<f64>, nan_at: usize) -> TestResult {
        let mut xs = xs;
        if xs.is_empty() {
            return TestResult::discard();
        }
        let i = nan_at % xs.len();
        xs[i] = f64::NAN;
        let a = arr1(&xs);
        TestResult::from_bool(a.equals(&a) && a.equals(&a.clone()))
    }
}

#[test]
fn equality()
{
    let a = arr1(&[1, 2, 3]);
    assert!(a.equals(&arr1(&[1., 2., 3.])));
    assert!(!a.equals(&arr1(&[1, 2])));
    assert!(!a.equals(&arr2(&[[1, 2, 3]])));
    assert!(!arr1(&[true]).equals(&arr1(&[1])));
    let nan = arr1(&[1.0, f64::NAN]);
    assert!(nan.equals(&nan));
    assert_eq!(nan, arr1(&[1.0, f64::NAN]));
    assert!(!nan.equals(&arr1(&[1.0, 2.0])));
    assert_eq!(nan.compare_equal(&nan).unwrap(), arr1(&[true, false]));
    assert_eq!(a.compare_equal(&arr1(&[1, 0, 3])).unwrap(), arr1(&[true, false, true]));
    assert_eq!(a.compare_equal(&arr1(&[1, 2])).unwrap_err().kind(), ErrorKind::ShapeMismatch);
}
