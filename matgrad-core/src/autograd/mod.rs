//! Reverse-mode differentiation over an arena of graph nodes.

pub mod grad_check;
pub mod graph;
pub mod node;

pub use graph::Graph;
pub use node::{ElementwiseFn, Node, NodeId, NodeKind, Transform};
