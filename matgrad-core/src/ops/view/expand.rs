use crate::error::MatgradError;
use crate::matrix::Matrix;
use crate::ops::traits::Element;
use crate::shape::Shape;

/// Explicitly expands `a` to `target` following the broadcasting rule.
///
/// Legal expansions are exactly those where broadcasting `a` against `target` yields
/// `target`: a `(1, 1)` matrix fills the target, a single row is repeated down the rows,
/// a single column is repeated across the columns. A matrix already of shape `target`
/// is returned as a copy.
///
/// # Errors
/// - `BroadcastError` if `a` cannot be expanded to `target`.
pub fn broadcast_to_op<T: Element>(a: &Matrix<T>, target: Shape) -> Result<Matrix<T>, MatgradError> {
    if a.shape.broadcast(&target) != Some(target) {
        return Err(MatgradError::BroadcastError {
            from: a.shape,
            to: target,
        });
    }
    let src_cols = a.shape.cols();
    let row_step = if a.shape.rows() == 1 { 0 } else { 1 };
    let col_step = if src_cols == 1 { 0 } else { 1 };
    Ok(Matrix::generated(target, |r, c| {
        a.data[r * row_step * src_cols + c * col_step]
    }))
}

#[cfg(test)]
#[path = "expand_test.rs"]
mod tests;
