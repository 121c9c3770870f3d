use crate::error::MatgradError;
use crate::matrix::broadcast_utils::broadcast_binary;
use crate::matrix::Matrix;
use crate::ops::traits::Element;
use crate::types::Real;

/// Performs element-wise division `a / b` with broadcasting.
///
/// The result is always a `Matrix<Real>`, whatever the input element type, so that
/// integer operands never truncate.
pub fn div_op<T: Element>(a: &Matrix<T>, b: &Matrix<T>) -> Result<Matrix<Real>, MatgradError> {
    broadcast_binary(a, b, "div", |x, y| x.to_real() / y.to_real())
}

/// Divides every element by `scalar`, producing `Real` elements.
pub fn div_scalar_op<T: Element>(a: &Matrix<T>, scalar: T) -> Matrix<Real> {
    let divisor = scalar.to_real();
    a.map_to(|x| x.to_real() / divisor)
}

#[cfg(test)]
#[path = "div_test.rs"]
mod tests;
