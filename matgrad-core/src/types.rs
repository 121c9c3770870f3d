/// Canonical floating-point type used for all graph arithmetic.
///
/// Leaf values of any [`Element`](crate::ops::traits::Element) type are converted to
/// `Real` when they enter a graph, and every forward value and gradient is a
/// `Matrix<Real>`.
pub type Real = f64;
