use crate::error::MatgradError;
use crate::matrix::broadcast_utils::broadcast_binary;
use crate::matrix::Matrix;
use crate::ops::traits::Element;

/// Performs element-wise subtraction `a - b` with broadcasting.
pub fn sub_op<T: Element>(a: &Matrix<T>, b: &Matrix<T>) -> Result<Matrix<T>, MatgradError> {
    broadcast_binary(a, b, "sub", |x, y| x - y)
}

/// Subtracts `scalar` from every element.
pub fn sub_scalar_op<T: Element>(a: &Matrix<T>, scalar: T) -> Matrix<T> {
    a.map(|x| x - scalar)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shape::Shape;

    #[test]
    fn test_sub_broadcast_column() {
        let m = Matrix::from_rows(vec![vec![5.0, 6.0], vec![7.0, 8.0]]).unwrap();
        let col = Matrix::from_rows(vec![vec![1.0], vec![2.0]]).unwrap();
        let out = sub_op(&m, &col).unwrap();
        assert_eq!(out.as_slice(), &[4.0, 5.0, 5.0, 6.0]);

        let reversed = sub_op(&col, &m).unwrap();
        assert_eq!(reversed.as_slice(), &[-4.0, -5.0, -5.0, -6.0]);
    }

    #[test]
    fn test_sub_scalar_and_mismatch() {
        let m = Matrix::from_rows(vec![vec![5, 6]]).unwrap();
        assert_eq!(sub_scalar_op(&m, 5).as_slice(), &[0, 1]);
        let other = Matrix::<i32>::zeros(Shape::new(3, 3));
        assert!(sub_op(&m, &other).is_err());
    }
}
