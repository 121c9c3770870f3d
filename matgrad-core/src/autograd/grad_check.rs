use crate::autograd::{Graph, NodeId};
use crate::error::MatgradError;
use crate::matrix::Matrix;
use crate::types::Real;
use approx::relative_eq;
use log::debug;
use thiserror::Error;

/// Error type specifically for gradient checking failures.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GradCheckError {
    #[error("Gradient check failed for variable {node}, element index {element_index}: Analytical grad {analytical_grad:?} != Numerical grad {numerical_grad:?}. Difference: {difference:?}")]
    GradientMismatch {
        node: NodeId,
        element_index: usize,
        analytical_grad: Real,
        numerical_grad: Real,
        difference: Real,
    },

    #[error("Variable {node} has no gradient after the backward pass.")]
    MissingAnalyticalGrad { node: NodeId },

    #[error("Numerical gradient is NaN or infinite for variable {node}, element {element_index}. Details: Loss+: {loss_plus:?}, Loss-: {loss_minus:?}")]
    NumericalGradNaNOrInfinite {
        node: NodeId,
        element_index: usize,
        loss_plus: Real,
        loss_minus: Real,
    },

    #[error("Graph error during gradient check: {0}")]
    GraphError(MatgradError),
}

impl From<MatgradError> for GradCheckError {
    fn from(err: MatgradError) -> Self {
        GradCheckError::GraphError(err)
    }
}

/// Finite-difference settings for [`check_grad`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradCheckOptions {
    /// Perturbation applied on each side of an element.
    pub epsilon: Real,
    /// Absolute and relative tolerance between analytical and numerical gradients.
    pub tolerance: Real,
}

impl Default for GradCheckOptions {
    fn default() -> Self {
        GradCheckOptions {
            epsilon: 1e-6,
            tolerance: 1e-4,
        }
    }
}

/// Checks the analytical gradients of `root` against central finite differences.
///
/// The scalar being differentiated is the sum of all elements of `root`'s value, whose
/// gradient is exactly what [`Graph::backward`] computes from a ones seed. Every element
/// of every listed variable is perturbed by `±epsilon` through [`Graph::set_value`].
/// Variable values are restored before returning, whatever the outcome.
pub fn check_grad(
    graph: &mut Graph,
    root: NodeId,
    variables: &[NodeId],
    options: GradCheckOptions,
) -> Result<(), GradCheckError> {
    graph.forward(root)?;
    graph.backward(root)?;

    let analytical: Vec<Matrix> = variables
        .iter()
        .map(|&v| {
            graph
                .grad(v)
                .cloned()
                .ok_or(GradCheckError::MissingAnalyticalGrad { node: v })
        })
        .collect::<Result<_, _>>()?;

    for (&var, analytical) in variables.iter().zip(&analytical) {
        let original = graph.variable_value(var)?.clone();
        debug!(
            "Gradient check on variable {} ({} elements)",
            var,
            original.numel()
        );
        let outcome = check_variable(graph, root, var, &original, analytical, options);
        graph.set_value(var, original)?;
        outcome?;
    }

    // Leave caches consistent with the restored values.
    graph.forward(root)?;
    Ok(())
}

fn check_variable(
    graph: &mut Graph,
    root: NodeId,
    var: NodeId,
    original: &Matrix,
    analytical: &Matrix,
    options: GradCheckOptions,
) -> Result<(), GradCheckError> {
    let two = 2.0;
    for i in 0..original.numel() {
        let loss_plus = perturbed_loss(graph, root, var, original, i, options.epsilon)?;
        let loss_minus = perturbed_loss(graph, root, var, original, i, -options.epsilon)?;
        let numerical_grad = (loss_plus - loss_minus) / (two * options.epsilon);

        if !numerical_grad.is_finite() {
            return Err(GradCheckError::NumericalGradNaNOrInfinite {
                node: var,
                element_index: i,
                loss_plus,
                loss_minus,
            });
        }

        let analytical_grad = analytical.as_slice()[i];
        if !relative_eq!(
            analytical_grad,
            numerical_grad,
            epsilon = options.tolerance,
            max_relative = options.tolerance
        ) {
            return Err(GradCheckError::GradientMismatch {
                node: var,
                element_index: i,
                analytical_grad,
                numerical_grad,
                difference: (analytical_grad - numerical_grad).abs(),
            });
        }
    }
    Ok(())
}

fn perturbed_loss(
    graph: &mut Graph,
    root: NodeId,
    var: NodeId,
    original: &Matrix,
    index: usize,
    delta: Real,
) -> Result<Real, GradCheckError> {
    let mut data = original.as_slice().to_vec();
    data[index] += delta;
    graph.set_value(var, Matrix::new(data, original.shape())?)?;
    let output = graph.forward(root)?;
    Ok(output.sum().item()?)
}
