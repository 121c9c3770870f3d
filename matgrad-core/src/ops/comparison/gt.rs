use crate::error::MatgradError;
use crate::matrix::broadcast_utils::broadcast_binary;
use crate::matrix::Matrix;
use crate::ops::comparison::indicator;
use crate::ops::traits::Element;

/// Elementwise `a > b` with broadcasting: `1` where `a` is greater than `b`, `0` elsewhere.
pub fn gt_op<T: Element>(a: &Matrix<T>, b: &Matrix<T>) -> Result<Matrix<T>, MatgradError> {
    broadcast_binary(a, b, "gt", |x, y| indicator(x > y))
}

/// Elementwise `a > scalar` as a 0/1 matrix of the same shape.
pub fn gt_scalar_op<T: Element>(a: &Matrix<T>, scalar: T) -> Matrix<T> {
    a.map(|x| indicator(x > scalar))
}
