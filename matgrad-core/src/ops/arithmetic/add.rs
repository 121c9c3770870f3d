// matgrad-core/src/ops/arithmetic/add.rs

use crate::error::MatgradError;
use crate::matrix::broadcast_utils::broadcast_binary;
use crate::matrix::Matrix;
use crate::ops::traits::Element;

/// Performs element-wise addition of two matrices with broadcasting.
///
/// Returns `ShapeMismatch` if neither operand broadcasts to the other's shape.
pub fn add_op<T: Element>(a: &Matrix<T>, b: &Matrix<T>) -> Result<Matrix<T>, MatgradError> {
    broadcast_binary(a, b, "add", |x, y| x + y)
}

/// Adds `scalar` to every element.
pub fn add_scalar_op<T: Element>(a: &Matrix<T>, scalar: T) -> Matrix<T> {
    a.map(|x| x + scalar)
}

#[cfg(test)]
#[path = "add_test.rs"]
mod tests;
