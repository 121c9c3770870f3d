// src/matrix/create.rs

use crate::error::MatgradError;
use crate::matrix::Matrix;
use crate::ops::traits::Element;
use crate::shape::Shape;
use crate::types::Real;
use rand::Rng;
use rand_distr::{Distribution, StandardNormal};

impl<T: Element> Matrix<T> {
    /// Creates a matrix whose element at `(row, col)` is `generator(row, col)`.
    pub fn generated<F>(shape: Shape, mut generator: F) -> Self
    where
        F: FnMut(usize, usize) -> T,
    {
        let cols = shape.cols();
        let data = (0..shape.numel())
            .map(|i| generator(i / cols, i % cols))
            .collect();
        Matrix { data, shape }
    }

    /// Creates a matrix filled with `value`.
    pub fn full(shape: Shape, value: T) -> Self {
        Matrix {
            data: vec![value; shape.numel()],
            shape,
        }
    }

    pub fn zeros(shape: Shape) -> Self {
        Self::full(shape, T::zero())
    }

    pub fn ones(shape: Shape) -> Self {
        Self::full(shape, T::one())
    }

    /// Creates the `n x n` identity matrix.
    pub fn eye(n: usize) -> Self {
        Self::generated(Shape::new(n, n), |i, j| if i == j { T::one() } else { T::zero() })
    }

    /// Creates a matrix filled by repeatedly calling `generator`, in row-major order.
    pub fn random<F>(shape: Shape, mut generator: F) -> Self
    where
        F: FnMut() -> T,
    {
        Self::generated(shape, |_, _| generator())
    }

    pub fn zeros_like(other: &Matrix<T>) -> Self {
        Self::zeros(other.shape)
    }

    pub fn ones_like(other: &Matrix<T>) -> Self {
        Self::ones(other.shape)
    }
}

impl Matrix<Real> {
    /// Samples every element uniformly from `[low, high)`.
    pub fn rand_uniform(shape: Shape, low: Real, high: Real) -> Result<Self, MatgradError> {
        if !(low < high) {
            return Err(MatgradError::InvalidRange { low, high });
        }
        let mut rng = rand::thread_rng();
        let data: Vec<Real> = (0..shape.numel()).map(|_| rng.gen_range(low..high)).collect();
        Matrix::new(data, shape)
    }

    /// Samples every element from the standard normal distribution.
    pub fn randn(shape: Shape) -> Result<Self, MatgradError> {
        let mut rng = rand::thread_rng();
        let data: Vec<Real> = (0..shape.numel())
            .map(|_| StandardNormal.sample(&mut rng))
            .collect();
        Matrix::new(data, shape)
    }
}

#[cfg(test)]
#[path = "create_test.rs"]
mod tests;
