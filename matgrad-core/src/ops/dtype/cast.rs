use crate::matrix::Matrix;
use crate::ops::traits::Element;

/// Converts every element to `S` through the canonical [`Real`](crate::Real) type.
///
/// Converting to an integer type rounds to the nearest integer.
pub fn cast_op<T: Element, S: Element>(a: &Matrix<T>) -> Matrix<S> {
    a.map_to(|x| S::from_real(x.to_real()))
}

impl<T: Element> Matrix<T> {
    /// Elementwise numeric cast, see [`cast_op`].
    pub fn as_type<S: Element>(&self) -> Matrix<S> {
        cast_op(self)
    }
}

#[cfg(test)]
#[path = "cast_test.rs"]
mod tests;
