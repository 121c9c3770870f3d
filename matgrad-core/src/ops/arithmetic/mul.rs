use crate::error::MatgradError;
use crate::matrix::broadcast_utils::broadcast_binary;
use crate::matrix::Matrix;
use crate::ops::traits::Element;

/// Performs element-wise (Hadamard) multiplication with broadcasting.
pub fn mul_op<T: Element>(a: &Matrix<T>, b: &Matrix<T>) -> Result<Matrix<T>, MatgradError> {
    broadcast_binary(a, b, "mul", |x, y| x * y)
}

/// Multiplies every element by `scalar`.
pub fn mul_scalar_op<T: Element>(a: &Matrix<T>, scalar: T) -> Matrix<T> {
    a.map(|x| x * scalar)
}

#[cfg(test)]
#[path = "mul_test.rs"]
mod tests;
