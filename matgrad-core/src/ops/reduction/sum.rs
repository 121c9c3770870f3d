use crate::error::MatgradError;
use crate::matrix::Matrix;
use crate::ops::traits::Element;
use crate::shape::Shape;

/// Sums every element into a `(1, 1)` matrix.
pub fn sum_op<T: Element>(a: &Matrix<T>) -> Matrix<T> {
    let total = a.data.iter().fold(T::zero(), |acc, &x| acc + x);
    Matrix::scalar(total)
}

/// Sums along one axis.
///
/// - `axis == 0` collapses the rows, giving shape `(1, cols)` (column sums).
/// - `axis == 1` collapses the columns, giving shape `(rows, 1)` (row sums).
///
/// # Errors
/// - `InvalidAxis` for any other axis.
pub fn sum_axis_op<T: Element>(a: &Matrix<T>, axis: usize) -> Result<Matrix<T>, MatgradError> {
    let (rows, cols) = (a.shape.rows(), a.shape.cols());
    match axis {
        0 => {
            let mut data = vec![T::zero(); cols];
            for row in a.data.chunks(cols.max(1)) {
                for (acc, &x) in data.iter_mut().zip(row) {
                    *acc = *acc + x;
                }
            }
            Ok(Matrix {
                data,
                shape: Shape::new(1, cols),
            })
        }
        1 => {
            let data = (0..rows)
                .map(|r| {
                    a.data[r * cols..(r + 1) * cols]
                        .iter()
                        .fold(T::zero(), |acc, &x| acc + x)
                })
                .collect();
            Ok(Matrix {
                data,
                shape: Shape::new(rows, 1),
            })
        }
        _ => Err(MatgradError::InvalidAxis { axis }),
    }
}

#[cfg(test)]
#[path = "sum_test.rs"]
mod tests;
