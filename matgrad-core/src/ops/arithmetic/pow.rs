use crate::error::MatgradError;
use crate::matrix::broadcast_utils::broadcast_binary;
use crate::matrix::Matrix;
use crate::ops::traits::Element;
use crate::types::Real;

/// Raises every element to the scalar power `exponent`.
///
/// Computed in [`Real`] and converted back to `T`.
pub fn powf_op<T: Element>(base: &Matrix<T>, exponent: Real) -> Matrix<T> {
    base.map(|x| T::from_real(x.to_real().powf(exponent)))
}

/// Element-wise power `base ^ exponent` with broadcasting.
///
/// A `(1, 1)` exponent is the scalar power of [`powf_op`].
pub fn pow_op<T: Element>(
    base: &Matrix<T>,
    exponent: &Matrix<T>,
) -> Result<Matrix<T>, MatgradError> {
    broadcast_binary(base, exponent, "pow", |x, e| {
        T::from_real(x.to_real().powf(e.to_real()))
    })
}

#[cfg(test)]
#[path = "pow_test.rs"]
mod tests;
