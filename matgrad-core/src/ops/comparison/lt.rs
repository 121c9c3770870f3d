use crate::error::MatgradError;
use crate::matrix::broadcast_utils::broadcast_binary;
use crate::matrix::Matrix;
use crate::ops::comparison::indicator;
use crate::ops::traits::Element;

/// Elementwise `a < b` with broadcasting: `1` where `a` is less than `b`, `0` elsewhere.
pub fn lt_op<T: Element>(a: &Matrix<T>, b: &Matrix<T>) -> Result<Matrix<T>, MatgradError> {
    broadcast_binary(a, b, "lt", |x, y| indicator(x < y))
}

/// Elementwise `a < scalar` as a 0/1 matrix of the same shape.
pub fn lt_scalar_op<T: Element>(a: &Matrix<T>, scalar: T) -> Matrix<T> {
    a.map(|x| indicator(x < scalar))
}

#[cfg(test)]
#[path = "lt_test.rs"]
mod tests;
