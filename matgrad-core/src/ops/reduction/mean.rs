use crate::error::MatgradError;
use crate::matrix::Matrix;
use crate::ops::reduction::sum::{sum_axis_op, sum_op};
use crate::shape::Shape;
use crate::types::Real;

/// Reduces a gradient-like matrix down to `target`, the shape of the operand it belongs to.
///
/// - `target == (1, 1)`: the mean of all elements, or zero when `a` is empty.
/// - `target == (1, cols)`: sums over the rows ([`sum_axis_op`] with axis 0).
/// - `target == (rows, 1)`: sums over the columns ([`sum_axis_op`] with axis 1).
/// - `target == a.shape()`: `a` unchanged.
///
/// The `(1, 1)` case is checked first, so a `(1, 1)` source is returned as is.
///
/// # Errors
/// - `InvalidReduction` when `target` is none of the above.
pub fn reduce_mean_to_op(a: &Matrix<Real>, target: Shape) -> Result<Matrix<Real>, MatgradError> {
    if target.is_scalar() {
        if a.shape.is_scalar() {
            return Ok(a.clone());
        }
        if a.shape.numel() == 0 {
            return Ok(Matrix::zeros(target));
        }
        let count = a.shape.numel() as Real;
        return Ok(Matrix::scalar(sum_op(a).data[0] / count));
    }
    if target == a.shape {
        return Ok(a.clone());
    }
    if target.rows() == 1 && target.cols() == a.shape.cols() {
        return sum_axis_op(a, 0);
    }
    if target.cols() == 1 && target.rows() == a.shape.rows() {
        return sum_axis_op(a, 1);
    }
    Err(MatgradError::InvalidReduction {
        from: a.shape,
        to: target,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn grad() -> Matrix {
        Matrix::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0], vec![5.0, 6.0]]).unwrap()
    }

    #[test]
    fn test_reduce_to_scalar_is_mean() {
        let out = reduce_mean_to_op(&grad(), Shape::scalar()).unwrap();
        assert_eq!(out.shape(), Shape::scalar());
        assert_relative_eq!(out.as_slice()[0], 3.5, epsilon = 1e-12);
    }

    #[test]
    fn test_reduce_empty_to_scalar_is_zero() {
        let empty = Matrix::<Real>::zeros(Shape::new(0, 3));
        let out = reduce_mean_to_op(&empty, Shape::scalar()).unwrap();
        assert_eq!(out, Matrix::scalar(0.0));
    }

    #[test]
    fn test_reduce_to_row_and_column_sums() {
        let row = reduce_mean_to_op(&grad(), Shape::new(1, 2)).unwrap();
        assert_eq!(row.as_slice(), &[9.0, 12.0]);
        let col = reduce_mean_to_op(&grad(), Shape::new(3, 1)).unwrap();
        assert_eq!(col.as_slice(), &[3.0, 7.0, 11.0]);
    }

    #[test]
    fn test_reduce_to_same_shape_is_identity() {
        assert_eq!(reduce_mean_to_op(&grad(), Shape::new(3, 2)).unwrap(), grad());
    }

    #[test]
    fn test_reduce_invalid_target() {
        assert_eq!(
            reduce_mean_to_op(&grad(), Shape::new(2, 2)),
            Err(MatgradError::InvalidReduction {
                from: Shape::new(3, 2),
                to: Shape::new(2, 2)
            })
        );
    }
}
