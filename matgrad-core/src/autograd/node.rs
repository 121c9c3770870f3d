use crate::error::MatgradError;
use crate::matrix::Matrix;
use crate::shape::Shape;
use std::fmt;

/// Handle to a node inside a [`Graph`](crate::Graph).
///
/// Ids are arena indices: unique within one graph and ordered by creation, so every
/// child id is smaller than the id of any node consuming it. Each id also carries the tag
/// of the graph that created it; any other graph rejects it with `UnknownNode`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize, pub(crate) u64);

impl NodeId {
    pub fn index(&self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A matrix-to-matrix transform held by an elementwise function node.
pub type Transform = Box<dyn Fn(&Matrix) -> Result<Matrix, MatgradError> + Send + Sync>;

/// Forward and derivative transforms of an elementwise function, plus its display name.
///
/// The derivative is evaluated at the input value, not at the output.
pub struct ElementwiseFn {
    name: String,
    forward: Transform,
    derivative: Transform,
}

impl ElementwiseFn {
    pub fn new(name: impl Into<String>, forward: Transform, derivative: Transform) -> Self {
        ElementwiseFn {
            name: name.into(),
            forward,
            derivative,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn apply(&self, input: &Matrix) -> Result<Matrix, MatgradError> {
        (self.forward)(input)
    }

    pub fn derivative_at(&self, input: &Matrix) -> Result<Matrix, MatgradError> {
        (self.derivative)(input)
    }
}

impl fmt::Debug for ElementwiseFn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ElementwiseFn")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// Closed set of node operations.
#[derive(Debug)]
pub(crate) enum Op {
    Constant(Matrix),
    Variable { name: String, value: Matrix },
    Add,
    Multiply,
    Divide,
    Power,
    MatMul,
    Function(ElementwiseFn),
}

/// Fieldless view of a node's operation, for introspection and export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Constant,
    Variable,
    Add,
    Multiply,
    Divide,
    Power,
    MatMul,
    Function,
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            NodeKind::Constant => "Constant",
            NodeKind::Variable => "Variable",
            NodeKind::Add => "Add",
            NodeKind::Multiply => "Multiply",
            NodeKind::Divide => "Divide",
            NodeKind::Power => "Power",
            NodeKind::MatMul => "MatMul",
            NodeKind::Function => "Function",
        };
        f.write_str(name)
    }
}

/// One vertex of the expression graph.
///
/// The operation, children and shape are fixed at construction. `value` is overwritten
/// by each forward pass and `grad` is cleared and recomputed by each backward pass.
#[derive(Debug)]
pub struct Node {
    pub(crate) op: Op,
    pub(crate) inputs: Vec<NodeId>,
    pub(crate) shape: Shape,
    pub(crate) value: Option<Matrix>,
    pub(crate) grad: Option<Matrix>,
}

impl Node {
    pub(crate) fn new(op: Op, inputs: Vec<NodeId>, shape: Shape) -> Self {
        Node {
            op,
            inputs,
            shape,
            value: None,
            grad: None,
        }
    }

    pub fn kind(&self) -> NodeKind {
        match &self.op {
            Op::Constant(_) => NodeKind::Constant,
            Op::Variable { .. } => NodeKind::Variable,
            Op::Add => NodeKind::Add,
            Op::Multiply => NodeKind::Multiply,
            Op::Divide => NodeKind::Divide,
            Op::Power => NodeKind::Power,
            Op::MatMul => NodeKind::MatMul,
            Op::Function(_) => NodeKind::Function,
        }
    }

    /// Declared output shape.
    pub fn shape(&self) -> Shape {
        self.shape
    }

    pub fn children(&self) -> &[NodeId] {
        &self.inputs
    }

    /// Variable name or function name, if the node has one.
    pub fn name(&self) -> Option<&str> {
        match &self.op {
            Op::Variable { name, .. } => Some(name),
            Op::Function(f) => Some(f.name()),
            _ => None,
        }
    }

    /// Human-readable description: kind, optional name and shape, e.g. `Variable 'w' (3, 2)`.
    pub fn label(&self) -> String {
        match self.name() {
            Some(name) => format!("{} '{}' {}", self.kind(), name, self.shape),
            None => format!("{} {}", self.kind(), self.shape),
        }
    }

    /// Value cached by the last forward pass that reached this node.
    pub fn value(&self) -> Option<&Matrix> {
        self.value.as_ref()
    }

    /// Gradient left by the last backward pass that reached this node.
    pub fn grad(&self) -> Option<&Matrix> {
        self.grad.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels() {
        let var = Node::new(
            Op::Variable {
                name: "w".to_string(),
                value: Matrix::zeros(Shape::new(3, 2)),
            },
            vec![],
            Shape::new(3, 2),
        );
        assert_eq!(var.label(), "Variable 'w' (3, 2)");
        assert_eq!(var.kind(), NodeKind::Variable);

        let add = Node::new(Op::Add, vec![NodeId(0, 0), NodeId(0, 0)], Shape::new(3, 2));
        assert_eq!(add.label(), "Add (3, 2)");
        assert_eq!(add.children(), &[NodeId(0, 0), NodeId(0, 0)]);
        assert!(add.value().is_none() && add.grad().is_none());
    }

    #[test]
    fn test_elementwise_fn_debug_shows_name() {
        let f = ElementwiseFn::new(
            "square",
            Box::new(|m: &Matrix| Ok(m.powf(2.0))),
            Box::new(|m: &Matrix| Ok(m.mul_scalar(2.0))),
        );
        assert!(format!("{:?}", f).contains("square"));
        let x = Matrix::scalar(3.0);
        assert_eq!(f.apply(&x).unwrap(), Matrix::scalar(9.0));
        assert_eq!(f.derivative_at(&x).unwrap(), Matrix::scalar(6.0));
        assert_eq!(NodeId(4, 0).to_string(), "#4");
    }
}
