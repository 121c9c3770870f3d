use crate::autograd::NodeId;
use crate::shape::Shape;
use crate::types::Real;
use thiserror::Error;

/// Custom error type for the matgrad engine.
///
/// Runtime and data errors surface through this enum so a caller of
/// [`Graph::forward`](crate::Graph::forward) or [`Graph::backward`](crate::Graph::backward)
/// can report which operation or node failed. Graph construction errors are also
/// representable here for the `try_*` builders; the plain builders panic on them.
#[derive(Error, Debug, PartialEq, Clone)]
pub enum MatgradError {
    #[error("Inconsistent row lengths: row {row} has {actual} elements, expected {expected}")]
    ShapeInconsistency {
        row: usize,
        expected: usize,
        actual: usize,
    },

    #[error("Matrix creation error: data length {data_len} does not match shape {shape}")]
    MatrixCreationError { data_len: usize, shape: Shape },

    #[error("Index out of bounds: index {index:?} for shape {shape}")]
    IndexOutOfBounds { index: Vec<usize>, shape: Shape },

    #[error("Shape mismatch: {lhs} and {rhs} cannot be combined during operation {operation}")]
    ShapeMismatch {
        lhs: Shape,
        rhs: Shape,
        operation: String,
    },

    #[error("Dimension mismatch in matrix product: {lhs} · {rhs}")]
    DimensionMismatch { lhs: Shape, rhs: Shape },

    #[error("Cannot broadcast {from} to {to}")]
    BroadcastError { from: Shape, to: Shape },

    #[error("Cannot reduce gradient of shape {from} to {to}")]
    InvalidReduction { from: Shape, to: Shape },

    #[error("Invalid sampling range [{low}, {high})")]
    InvalidRange { low: Real, high: Real },

    #[error("Invalid axis {axis} for a 2-D matrix")]
    InvalidAxis { axis: usize },

    #[error("Node {node} has no forward value; call forward() before backward()")]
    ValueNotComputed { node: NodeId },

    #[error("Node {node} has no gradient during the backward pass")]
    GradientNotComputed { node: NodeId },

    #[error("Node {node} does not belong to this graph")]
    UnknownNode { node: NodeId },

    #[error("Node {node} is not a variable")]
    NotAVariable { node: NodeId },

    #[error("Function '{name}' produced shape {actual}, expected {expected}")]
    FunctionOutputShape {
        name: String,
        expected: Shape,
        actual: Shape,
    },
}
