use crate::error::MatgradError;
use crate::matrix::broadcast_utils::broadcast_binary;
use crate::matrix::Matrix;
use crate::ops::comparison::indicator;
use crate::ops::traits::Element;

/// Elementwise `a == b` with broadcasting: `1` where `a` is equal to `b`, `0` elsewhere.
pub fn eq_op<T: Element>(a: &Matrix<T>, b: &Matrix<T>) -> Result<Matrix<T>, MatgradError> {
    broadcast_binary(a, b, "eq", |x, y| indicator(x == y))
}

/// Elementwise `a == scalar` as a 0/1 matrix of the same shape.
pub fn eq_scalar_op<T: Element>(a: &Matrix<T>, scalar: T) -> Matrix<T> {
    a.map(|x| indicator(x == scalar))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_eq() {
        let a = Matrix::from_rows(vec![vec![1.0, 2.0], vec![2.0, 0.0]]).unwrap();
        let b = Matrix::scalar(2.0);
        assert_eq!(eq_op(&a, &b).unwrap().as_slice(), &[0.0, 1.0, 1.0, 0.0]);
        assert_eq!(eq_scalar_op(&a, 0.0).as_slice(), &[0.0, 0.0, 0.0, 1.0]);
    }
}
