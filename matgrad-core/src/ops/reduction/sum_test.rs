use crate::error::MatgradError;
use crate::matrix::Matrix;
use crate::ops::reduction::{sum_axis_op, sum_op};
use crate::shape::Shape;

fn sample() -> Matrix {
    Matrix::from_rows(vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]).unwrap()
}

#[test]
fn test_sum_all() {
    assert_eq!(sum_op(&sample()), Matrix::scalar(21.0));
    assert_eq!(sum_op(&Matrix::<i32>::zeros(Shape::new(0, 0))), Matrix::scalar(0));
}

#[test]
fn test_sum_axis_0_gives_column_sums() {
    let out = sum_axis_op(&sample(), 0).unwrap();
    assert_eq!(out.shape(), Shape::new(1, 3));
    assert_eq!(out.as_slice(), &[5.0, 7.0, 9.0]);
}

#[test]
fn test_sum_axis_1_gives_row_sums() {
    let out = sum_axis_op(&sample(), 1).unwrap();
    assert_eq!(out.shape(), Shape::new(2, 1));
    assert_eq!(out.as_slice(), &[6.0, 15.0]);
}

#[test]
fn test_sum_invalid_axis() {
    assert_eq!(
        sum_axis_op(&sample(), 2),
        Err(MatgradError::InvalidAxis { axis: 2 })
    );
}
