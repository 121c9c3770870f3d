use crate::matrix::Matrix;
use crate::ops::traits::Element;

/// Negates every element.
pub fn neg_op<T: Element>(a: &Matrix<T>) -> Matrix<T> {
    a.map(|x| T::zero() - x)
}
