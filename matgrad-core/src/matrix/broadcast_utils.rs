use crate::error::MatgradError;
use crate::matrix::Matrix;
use crate::ops::traits::Element;

/// Applies `op` pairwise over two matrices, broadcasting the smaller operand.
///
/// Equal shapes combine directly. Otherwise the result shape comes from
/// [`Shape::broadcast`](crate::Shape::broadcast); an axis of length 1 is read at index 0
/// for every output position along it. If the shapes are not broadcastable in either
/// direction, a `ShapeMismatch` error names `operation`.
pub(crate) fn broadcast_binary<T, S, F>(
    a: &Matrix<T>,
    b: &Matrix<T>,
    operation: &str,
    op: F,
) -> Result<Matrix<S>, MatgradError>
where
    T: Element,
    S: Element,
    F: Fn(T, T) -> S,
{
    if a.shape == b.shape {
        let data = a
            .data
            .iter()
            .zip(b.data.iter())
            .map(|(&x, &y)| op(x, y))
            .collect();
        return Ok(Matrix {
            data,
            shape: a.shape,
        });
    }

    let out_shape = a
        .shape
        .broadcast(&b.shape)
        .ok_or_else(|| MatgradError::ShapeMismatch {
            lhs: a.shape,
            rhs: b.shape,
            operation: operation.to_string(),
        })?;

    let (rows, cols) = (out_shape.rows(), out_shape.cols());
    let mut data = Vec::with_capacity(out_shape.numel());
    for r in 0..rows {
        let ar = if a.shape.rows() == 1 { 0 } else { r };
        let br = if b.shape.rows() == 1 { 0 } else { r };
        for c in 0..cols {
            let ac = if a.shape.cols() == 1 { 0 } else { c };
            let bc = if b.shape.cols() == 1 { 0 } else { c };
            let x = a.data[ar * a.shape.cols() + ac];
            let y = b.data[br * b.shape.cols() + bc];
            data.push(op(x, y));
        }
    }
    Ok(Matrix {
        data,
        shape: out_shape,
    })
}
