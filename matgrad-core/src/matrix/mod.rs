// src/matrix/mod.rs

use crate::error::MatgradError;
use crate::ops::traits::Element;
use crate::shape::Shape;
use crate::types::Real;

mod accessors;
pub(crate) mod broadcast_utils;
pub mod create;
mod debug;
mod ops_methods;

/// A dense 2-D matrix stored as a flat row-major buffer.
///
/// `Matrix` is a value type: every operation that "changes" a matrix returns a new one,
/// so there is never aliasing mutation of a buffer shared by two matrices.
/// The buffer length always equals `rows * cols`.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix<T = Real> {
    pub(crate) data: Vec<T>,
    pub(crate) shape: Shape,
}

impl<T: Element> Matrix<T> {
    /// Creates a matrix from a flat row-major buffer and a shape.
    ///
    /// Returns `MatrixCreationError` if the buffer length is not `rows * cols`.
    pub fn new(data: Vec<T>, shape: Shape) -> Result<Self, MatgradError> {
        if data.len() != shape.numel() {
            return Err(MatgradError::MatrixCreationError {
                data_len: data.len(),
                shape,
            });
        }
        Ok(Matrix { data, shape })
    }

    /// Creates a `rows x cols` matrix from a flat row-major buffer.
    pub fn from_vec(data: Vec<T>, rows: usize, cols: usize) -> Result<Self, MatgradError> {
        Self::new(data, Shape::new(rows, cols))
    }

    /// Creates a matrix from nested rows.
    ///
    /// Every row must have the same length as the first one, otherwise a
    /// `ShapeInconsistency` error names the first offending row. An empty outer
    /// vector produces a `(0, 0)` matrix.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self, MatgradError> {
        let n_rows = rows.len();
        let n_cols = rows.first().map_or(0, |r| r.len());
        let mut data = Vec::with_capacity(n_rows * n_cols);
        for (i, row) in rows.into_iter().enumerate() {
            if row.len() != n_cols {
                return Err(MatgradError::ShapeInconsistency {
                    row: i,
                    expected: n_cols,
                    actual: row.len(),
                });
            }
            data.extend(row);
        }
        Ok(Matrix {
            data,
            shape: Shape::new(n_rows, n_cols),
        })
    }

    /// Wraps a single number into a `(1, 1)` matrix.
    pub fn scalar(value: T) -> Self {
        Matrix {
            data: vec![value],
            shape: Shape::scalar(),
        }
    }

    /// Applies `f` to every element, returning a matrix of the same shape.
    pub fn map<F>(&self, f: F) -> Matrix<T>
    where
        F: Fn(T) -> T,
    {
        Matrix {
            data: self.data.iter().map(|&x| f(x)).collect(),
            shape: self.shape,
        }
    }

    /// Like [`map`](Self::map) but the output element type may differ.
    pub fn map_to<S, F>(&self, f: F) -> Matrix<S>
    where
        S: Element,
        F: Fn(T) -> S,
    {
        Matrix {
            data: self.data.iter().map(|&x| f(x)).collect(),
            shape: self.shape,
        }
    }

    /// Largest element, or `None` for an empty matrix.
    pub fn max(&self) -> Option<T> {
        self.data
            .iter()
            .copied()
            .fold(None, |acc, x| match acc {
                Some(m) if m >= x => Some(m),
                _ => Some(x),
            })
    }

    /// Smallest element, or `None` for an empty matrix.
    pub fn min(&self) -> Option<T> {
        self.data
            .iter()
            .copied()
            .fold(None, |acc, x| match acc {
                Some(m) if m <= x => Some(m),
                _ => Some(x),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_checks_length() {
        let m = Matrix::new(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0], Shape::new(2, 3)).unwrap();
        assert_eq!(m.shape(), Shape::new(2, 3));

        let err = Matrix::new(vec![1.0, 2.0, 3.0], Shape::new(2, 2)).unwrap_err();
        assert_eq!(
            err,
            MatgradError::MatrixCreationError {
                data_len: 3,
                shape: Shape::new(2, 2)
            }
        );
    }

    #[test]
    fn test_from_rows() {
        let m = Matrix::from_rows(vec![vec![1, 2, 3], vec![4, 5, 6]]).unwrap();
        assert_eq!(m.shape(), Shape::new(2, 3));
        assert_eq!(m.as_slice(), &[1, 2, 3, 4, 5, 6]);

        let empty = Matrix::<f64>::from_rows(vec![]).unwrap();
        assert_eq!(empty.shape(), Shape::new(0, 0));
    }

    #[test]
    fn test_from_rows_ragged() {
        let err = Matrix::from_rows(vec![vec![1.0, 2.0], vec![3.0]]).unwrap_err();
        assert_eq!(
            err,
            MatgradError::ShapeInconsistency {
                row: 1,
                expected: 2,
                actual: 1
            }
        );
    }

    #[test]
    fn test_map() {
        let m = Matrix::from_rows(vec![vec![1.4f64, -2.6], vec![3.5, 0.0]]).unwrap();
        let doubled = m.map(|x| x * 2.0);
        assert_eq!(doubled.as_slice(), &[2.8, -5.2, 7.0, 0.0]);

        let signs: Matrix<i32> = m.map_to(|x| if x < 0.0 { -1 } else { 1 });
        assert_eq!(signs.as_slice(), &[1, -1, 1, 1]);
    }

    #[test]
    fn test_max_min() {
        let m = Matrix::from_rows(vec![vec![3, -7], vec![9, 0]]).unwrap();
        assert_eq!(m.max(), Some(9));
        assert_eq!(m.min(), Some(-7));
        assert_eq!(Matrix::<f32>::from_rows(vec![]).unwrap().max(), None);
    }
}
