use crate::error::MatgradError;
use crate::matrix::Matrix;
use crate::ops::traits::Element;

/// Matrix product `a · b`.
///
/// Requires `a.cols() == b.rows()`; the result has shape `(a.rows(), b.cols())`.
///
/// # Errors
/// - `DimensionMismatch` if the inner dimensions differ.
///
/// # Example
/// ```
/// use matgrad_core::Matrix;
/// use matgrad_core::ops::linalg::matmul_op;
/// let a = Matrix::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
/// let b = Matrix::from_rows(vec![vec![5.0], vec![6.0]]).unwrap();
/// let c = matmul_op(&a, &b).unwrap();
/// assert_eq!(c.as_slice(), &[17.0, 39.0]);
/// ```
pub fn matmul_op<T: Element>(a: &Matrix<T>, b: &Matrix<T>) -> Result<Matrix<T>, MatgradError> {
    let out_shape = a
        .shape
        .dot(&b.shape)
        .ok_or(MatgradError::DimensionMismatch {
            lhs: a.shape,
            rhs: b.shape,
        })?;

    let (m, k, n) = (a.shape.rows(), a.shape.cols(), b.shape.cols());
    let mut data = vec![T::zero(); m * n];
    for i in 0..m {
        for p in 0..k {
            let a_ip = a.data[i * k + p];
            let b_row = &b.data[p * n..(p + 1) * n];
            let out_row = &mut data[i * n..(i + 1) * n];
            for (out, &b_pj) in out_row.iter_mut().zip(b_row) {
                *out = *out + a_ip * b_pj;
            }
        }
    }
    Ok(Matrix {
        data,
        shape: out_shape,
    })
}

#[cfg(test)]
#[path = "matmul_test.rs"]
mod tests;
