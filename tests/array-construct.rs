use numcore::prelude::*;
use numcore::{fixed, Item};

#[test]
fn test_from_shape_vec()
{
    let a = FixedArray::from_shape_vec([2, 3], vec![1, 2, 3, 4, 5, 6]).unwrap();
    assert_eq!(a.shape(), &[2, 3]);
    assert_eq!(a.ndim(), 2);
    assert_eq!(a.len(), 6);
    assert_eq!(a.dtype(), DType::Integer);
    assert_eq!(a, arr2(&[[1, 2, 3], [4, 5, 6]]));

    let b = FixedArray::from_shape_vec([3], vec![true, false, true]).unwrap();
    assert_eq!(b.dtype(), DType::Boolean);
}

#[test]
fn construction_round_trips_flatten()
{
    let values = vec![Scalar::Real(0.5), Scalar::Real(-1.), Scalar::Real(2.), Scalar::Real(3.25)];
    let shapes: [&[usize]; 4] = [&[4], &[2, 2], &[1, 4], &[4, 1]];
    for shape in shapes {
        let a = FixedArray::from_shape_vec(shape, values.clone()).unwrap();
        assert_eq!(a.as_slice(), &values[..]);
        assert_eq!(a.clone().into_vec(), values);
    }
}

#[test]
fn construction_errors()
{
    let mixed = FixedArray::from_shape_vec([2], vec![Scalar::Int(1), Scalar::Real(1.)]);
    assert_eq!(mixed.unwrap_err().kind(), ErrorKind::TypeMismatch);

    let bool_int = FixedArray::from_shape_vec([2], vec![Scalar::Bool(true), Scalar::Int(1)]);
    assert_eq!(bool_int.unwrap_err().kind(), ErrorKind::TypeMismatch);

    let count = FixedArray::from_shape_vec([3], vec![1, 2]);
    assert_eq!(count.unwrap_err().kind(), ErrorKind::ShapeMismatch);

    let rank3 = FixedArray::from_shape_vec([1, 1, 2], vec![1, 2]);
    assert_eq!(rank3.unwrap_err().kind(), ErrorKind::UnsupportedRank);

    let rank0 = FixedArray::from_shape_vec(Vec::<usize>::new(), vec![1]);
    assert_eq!(rank0.unwrap_err().kind(), ErrorKind::UnsupportedRank);

    let empty = FixedArray::from_shape_vec([0], Vec::<i64>::new());
    assert_eq!(empty.unwrap_err().kind(), ErrorKind::TypeKind);
}

#[test]
fn type_is_checked_before_count()
{
    // both the types and the count are wrong
    let a = FixedArray::from_shape_vec([5], vec![Scalar::Int(1), Scalar::Real(1.)]);
    assert_eq!(a.unwrap_err().kind(), ErrorKind::TypeMismatch);
    // count before rank
    let b = FixedArray::from_shape_vec([1, 1, 1], vec![1, 2]);
    assert_eq!(b.unwrap_err().kind(), ErrorKind::ShapeMismatch);
}

#[test]
fn from_elem()
{
    let a = FixedArray::from_elem([2, 2], 7.5).unwrap();
    assert_eq!(a, arr2(&[[7.5, 7.5], [7.5, 7.5]]));
    assert!(FixedArray::from_elem([2, 0], 1).is_err());
}

#[test]
fn fixed_macro()
{
    assert_eq!(fixed![1, 2, 3], arr1(&[1, 2, 3]));
    assert_eq!(fixed![[1., 2.], [3., 4.]], arr2(&[[1., 2.], [3., 4.]]));
}

#[test]
#[should_panic]
fn arr1_empty()
{
    arr1::<i32>(&[]);
}

#[test]
fn indexing()
{
    let a = arr1(&[2, 3, 4]);
    assert_eq!(a.get(0).unwrap().scalar(), Some(Scalar::Int(2)));
    assert_eq!(a.get(-3).unwrap().scalar(), Some(Scalar::Int(2)));
    assert_eq!(a.get(3).unwrap_err().kind(), ErrorKind::InvalidIndex);
    assert_eq!(a.get(-4).unwrap_err().kind(), ErrorKind::InvalidIndex);
    assert_eq!(a.get(true).unwrap_err().kind(), ErrorKind::InvalidIndex);
    assert_eq!(a.get(1.0).unwrap_err().kind(), ErrorKind::InvalidIndex);

    let m = arr2(&[[1, 2], [3, 4], [5, 6]]);
    match m.get(-1).unwrap() {
        Item::Row(row) => assert_eq!(row, &[Scalar::Int(5), Scalar::Int(6)]),
        other => panic!("expected a row, got {:?}", other),
    }
    assert_eq!(m.rows().count(), 3);
}
