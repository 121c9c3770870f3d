// src/matrix/accessors.rs
use crate::error::MatgradError;
use crate::matrix::Matrix;
use crate::ops::traits::Element;
use crate::shape::Shape;

impl<T: Element> Matrix<T> {
    /// Returns the shape of the matrix.
    pub fn shape(&self) -> Shape {
        self.shape
    }

    pub fn rows(&self) -> usize {
        self.shape.rows()
    }

    pub fn cols(&self) -> usize {
        self.shape.cols()
    }

    /// Returns the total number of elements.
    pub fn numel(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// The row-major buffer.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Bounds-checked element access.
    pub fn get(&self, row: usize, col: usize) -> Result<T, MatgradError> {
        if row >= self.shape.rows() || col >= self.shape.cols() {
            return Err(MatgradError::IndexOutOfBounds {
                index: vec![row, col],
                shape: self.shape,
            });
        }
        Ok(self.data[row * self.shape.cols() + col])
    }

    /// Bounds-checked view of a full row.
    pub fn row(&self, row: usize) -> Result<&[T], MatgradError> {
        if row >= self.shape.rows() {
            return Err(MatgradError::IndexOutOfBounds {
                index: vec![row],
                shape: self.shape,
            });
        }
        let cols = self.shape.cols();
        Ok(&self.data[row * cols..(row + 1) * cols])
    }

    /// Extracts the value of a matrix holding exactly one element.
    pub fn item(&self) -> Result<T, MatgradError> {
        if self.data.len() != 1 {
            return Err(MatgradError::ShapeMismatch {
                lhs: self.shape,
                rhs: Shape::scalar(),
                operation: "item".to_string(),
            });
        }
        Ok(self.data[0])
    }
}
