use crate::matrix::Matrix;
use crate::ops::arithmetic::{div_op, div_scalar_op};
use crate::shape::Shape;
use approx::assert_relative_eq;

#[test]
fn test_div_integers_produce_reals() {
    let a = Matrix::from_rows(vec![vec![1, 7], vec![-3, 4]]).unwrap();
    let b = Matrix::from_rows(vec![vec![2, 2], vec![2, 8]]).unwrap();
    let out = div_op(&a, &b).unwrap();
    assert_eq!(out.as_slice(), &[0.5, 3.5, -1.5, 0.5]);
}

#[test]
fn test_div_broadcast_row() {
    let a = Matrix::from_rows(vec![vec![2.0, 9.0], vec![4.0, 3.0]]).unwrap();
    let row = Matrix::from_rows(vec![vec![2.0, 3.0]]).unwrap();
    let out = div_op(&a, &row).unwrap();
    assert_eq!(out.shape(), Shape::new(2, 2));
    assert_eq!(out.as_slice(), &[1.0, 3.0, 2.0, 1.0]);
}

#[test]
fn test_div_by_zero_follows_ieee() {
    let a = Matrix::from_rows(vec![vec![1.0, -1.0]]).unwrap();
    let out = div_op(&a, &Matrix::scalar(0.0)).unwrap();
    assert!(out.as_slice()[0].is_infinite() && out.as_slice()[0] > 0.0);
    assert!(out.as_slice()[1].is_infinite() && out.as_slice()[1] < 0.0);
}

#[test]
fn test_div_scalar() {
    let a = Matrix::from_rows(vec![vec![1_i64, 2, 3]]).unwrap();
    let out = div_scalar_op(&a, 3);
    assert_relative_eq!(out.as_slice()[0], 1.0 / 3.0, epsilon = 1e-12);
    assert_relative_eq!(out.as_slice()[2], 1.0, epsilon = 1e-12);
}
