// src/matrix/ops_methods.rs
//
// Method-style entry points delegating to the free `*_op` functions.

use crate::error::MatgradError;
use crate::matrix::Matrix;
use crate::ops;
use crate::ops::traits::Element;
use crate::shape::Shape;
use crate::types::Real;

impl<T: Element> Matrix<T> {
    pub fn add(&self, other: &Matrix<T>) -> Result<Matrix<T>, MatgradError> {
        ops::arithmetic::add_op(self, other)
    }

    pub fn sub(&self, other: &Matrix<T>) -> Result<Matrix<T>, MatgradError> {
        ops::arithmetic::sub_op(self, other)
    }

    pub fn mul(&self, other: &Matrix<T>) -> Result<Matrix<T>, MatgradError> {
        ops::arithmetic::mul_op(self, other)
    }

    /// Elementwise division; the result is always `Matrix<Real>`.
    pub fn div(&self, other: &Matrix<T>) -> Result<Matrix<Real>, MatgradError> {
        ops::arithmetic::div_op(self, other)
    }

    pub fn add_scalar(&self, scalar: T) -> Matrix<T> {
        ops::arithmetic::add_scalar_op(self, scalar)
    }

    pub fn sub_scalar(&self, scalar: T) -> Matrix<T> {
        ops::arithmetic::sub_scalar_op(self, scalar)
    }

    pub fn mul_scalar(&self, scalar: T) -> Matrix<T> {
        ops::arithmetic::mul_scalar_op(self, scalar)
    }

    pub fn div_scalar(&self, scalar: T) -> Matrix<Real> {
        ops::arithmetic::div_scalar_op(self, scalar)
    }

    pub fn neg(&self) -> Matrix<T> {
        ops::arithmetic::neg_op(self)
    }

    pub fn powf(&self, exponent: Real) -> Matrix<T> {
        ops::arithmetic::powf_op(self, exponent)
    }

    pub fn pow(&self, exponent: &Matrix<T>) -> Result<Matrix<T>, MatgradError> {
        ops::arithmetic::pow_op(self, exponent)
    }

    /// Matrix product `self · other`.
    pub fn dot(&self, other: &Matrix<T>) -> Result<Matrix<T>, MatgradError> {
        ops::linalg::matmul_op(self, other)
    }

    pub fn transpose(&self) -> Matrix<T> {
        ops::linalg::transpose_op(self)
    }

    /// Sum of all elements as a `(1, 1)` matrix.
    pub fn sum(&self) -> Matrix<T> {
        ops::reduction::sum_op(self)
    }

    /// Sum along `axis`: 0 gives `(1, cols)`, 1 gives `(rows, 1)`.
    pub fn sum_axis(&self, axis: usize) -> Result<Matrix<T>, MatgradError> {
        ops::reduction::sum_axis_op(self, axis)
    }

    pub fn broadcast_to(&self, target: Shape) -> Result<Matrix<T>, MatgradError> {
        ops::view::broadcast_to_op(self, target)
    }

    pub fn lt(&self, other: &Matrix<T>) -> Result<Matrix<T>, MatgradError> {
        ops::comparison::lt_op(self, other)
    }

    pub fn gt(&self, other: &Matrix<T>) -> Result<Matrix<T>, MatgradError> {
        ops::comparison::gt_op(self, other)
    }

    pub fn equal(&self, other: &Matrix<T>) -> Result<Matrix<T>, MatgradError> {
        ops::comparison::eq_op(self, other)
    }

    pub fn lt_scalar(&self, scalar: T) -> Matrix<T> {
        ops::comparison::lt_scalar_op(self, scalar)
    }

    pub fn gt_scalar(&self, scalar: T) -> Matrix<T> {
        ops::comparison::gt_scalar_op(self, scalar)
    }

    pub fn equal_scalar(&self, scalar: T) -> Matrix<T> {
        ops::comparison::eq_scalar_op(self, scalar)
    }
}

impl Matrix<Real> {
    /// Gradient reduction back to an operand's pre-broadcast shape, see
    /// [`reduce_mean_to_op`](crate::ops::reduction::reduce_mean_to_op).
    pub fn reduce_mean_to(&self, target: Shape) -> Result<Matrix<Real>, MatgradError> {
        ops::reduction::reduce_mean_to_op(self, target)
    }
}
