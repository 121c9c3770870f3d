use crate::error::MatgradError;
use crate::matrix::Matrix;
use crate::ops::arithmetic::{mul_op, mul_scalar_op};
use crate::shape::Shape;

#[test]
fn test_mul_elementwise() {
    let a = Matrix::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
    let b = Matrix::from_rows(vec![vec![5.0, 6.0], vec![7.0, 8.0]]).unwrap();
    let out = mul_op(&a, &b).unwrap();
    assert_eq!(out.as_slice(), &[5.0, 12.0, 21.0, 32.0]);
}

#[test]
fn test_mul_broadcast_column_vector() {
    let a = Matrix::from_rows(vec![vec![1, 2, 3], vec![4, 5, 6]]).unwrap();
    let col = Matrix::from_rows(vec![vec![2], vec![-1]]).unwrap();
    let out = mul_op(&a, &col).unwrap();
    assert_eq!(out.shape(), Shape::new(2, 3));
    assert_eq!(out.as_slice(), &[2, 4, 6, -4, -5, -6]);
}

#[test]
fn test_mul_not_broadcastable() {
    let a = Matrix::<f32>::ones(Shape::new(1, 3));
    let b = Matrix::<f32>::ones(Shape::new(2, 1));
    match mul_op(&a, &b) {
        Err(MatgradError::ShapeMismatch { lhs, rhs, operation }) => {
            assert_eq!(lhs, Shape::new(1, 3));
            assert_eq!(rhs, Shape::new(2, 1));
            assert_eq!(operation, "mul");
        }
        other => panic!("Expected ShapeMismatch, got {:?}", other),
    }
}

#[test]
fn test_mul_scalar() {
    let a = Matrix::from_rows(vec![vec![1.5, -2.0]]).unwrap();
    assert_eq!(mul_scalar_op(&a, 2.0).as_slice(), &[3.0, -4.0]);
}
