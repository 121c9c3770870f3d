//! Reverse-mode automatic differentiation over dense 2-D matrices.
//!
//! An expression is built as a [`Graph`] of nodes (constants, variables, broadcasting
//! elementwise arithmetic, matrix products and user-supplied elementwise functions),
//! evaluated with [`Graph::forward`] and differentiated with [`Graph::backward`].
//! The underlying [`Matrix`] type is usable on its own.

pub mod autograd;
pub mod error;
pub mod matrix;
pub mod ops;
pub mod shape;
pub mod types;
pub mod utils;

pub use autograd::grad_check::{check_grad, GradCheckError, GradCheckOptions};
pub use autograd::{Graph, Node, NodeId, NodeKind};
pub use error::MatgradError;
pub use matrix::Matrix;
pub use ops::traits::Element;
pub use shape::Shape;
pub use types::Real;
// Re-export traits required by public bounds
pub use num_traits;
