use crate::matrix::Matrix;
use crate::ops::traits::Element;

/// Swaps rows and columns: `out[c][r] = a[r][c]`.
pub fn transpose_op<T: Element>(a: &Matrix<T>) -> Matrix<T> {
    let (rows, cols) = (a.shape.rows(), a.shape.cols());
    let mut data = Vec::with_capacity(a.data.len());
    for c in 0..cols {
        for r in 0..rows {
            data.push(a.data[r * cols + c]);
        }
    }
    Matrix {
        data,
        shape: a.shape.transposed(),
    }
}
