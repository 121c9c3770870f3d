use crate::autograd::node::{ElementwiseFn, Node, NodeId, Op};
use crate::error::MatgradError;
use crate::matrix::Matrix;
use crate::ops::traits::Element;
use crate::shape::Shape;
use crate::types::Real;
use log::{debug, trace};
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_GRAPH_TAG: AtomicU64 = AtomicU64::new(1);

/// An expression DAG stored as an arena of [`Node`]s.
///
/// Nodes are only ever appended, and a node's children must already exist when it is
/// built, so the arena can never contain a cycle. The same [`NodeId`] may be used as a
/// child of several parents; gradients flowing into such a shared node are summed.
///
/// Usage follows three steps, repeated as often as needed:
/// 1. [`forward`](Graph::forward) evaluates a root and caches every intermediate value.
/// 2. [`backward`](Graph::backward) fills every reachable node's gradient with
///    `∂root/∂node`, seeded with ones at the root.
/// 3. [`set_value`](Graph::set_value) replaces a variable's value between iterations.
#[derive(Debug)]
pub struct Graph {
    nodes: Vec<Node>,
    tag: u64,
}

impl Default for Graph {
    fn default() -> Self {
        Graph::new()
    }
}

impl Graph {
    pub fn new() -> Self {
        Graph {
            nodes: Vec::new(),
            tag: NEXT_GRAPH_TAG.fetch_add(1, Ordering::Relaxed),
        }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Iterates over all nodes in creation order.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &Node)> {
        let tag = self.tag;
        self.nodes
            .iter()
            .enumerate()
            .map(move |(i, n)| (NodeId(i, tag), n))
    }

    pub fn node(&self, id: NodeId) -> Result<&Node, MatgradError> {
        if id.1 != self.tag {
            return Err(MatgradError::UnknownNode { node: id });
        }
        self.nodes
            .get(id.0)
            .ok_or(MatgradError::UnknownNode { node: id })
    }

    fn check_id(&self, id: NodeId) -> Result<(), MatgradError> {
        self.node(id).map(|_| ())
    }

    fn push(&mut self, op: Op, inputs: Vec<NodeId>, shape: Shape) -> NodeId {
        let id = NodeId(self.nodes.len(), self.tag);
        self.nodes.push(Node::new(op, inputs, shape));
        id
    }

    // --- Leaves ---

    /// Adds a constant leaf. Constants never receive gradient contributions.
    pub fn constant<T: Element>(&mut self, value: Matrix<T>) -> NodeId {
        let value = value.as_type::<Real>();
        let shape = value.shape();
        self.push(Op::Constant(value), Vec::new(), shape)
    }

    /// Adds a `(1, 1)` constant leaf.
    pub fn scalar_constant(&mut self, value: Real) -> NodeId {
        self.constant(Matrix::scalar(value))
    }

    /// Adds a named variable leaf; its value may later be replaced with
    /// [`set_value`](Graph::set_value).
    pub fn variable<T: Element>(&mut self, name: impl Into<String>, value: Matrix<T>) -> NodeId {
        let value = value.as_type::<Real>();
        let shape = value.shape();
        let name = name.into();
        trace!("New variable '{}' with shape {}", name, shape);
        self.push(Op::Variable { name, value }, Vec::new(), shape)
    }

    // --- Fallible builders ---

    fn try_elementwise(
        &mut self,
        op: Op,
        operation: &str,
        lhs: NodeId,
        rhs: NodeId,
    ) -> Result<NodeId, MatgradError> {
        let lhs_shape = self.node(lhs)?.shape;
        let rhs_shape = self.node(rhs)?.shape;
        let shape = lhs_shape
            .broadcast(&rhs_shape)
            .ok_or_else(|| MatgradError::ShapeMismatch {
                lhs: lhs_shape,
                rhs: rhs_shape,
                operation: operation.to_string(),
            })?;
        Ok(self.push(op, vec![lhs, rhs], shape))
    }

    pub fn try_add(&mut self, lhs: NodeId, rhs: NodeId) -> Result<NodeId, MatgradError> {
        self.try_elementwise(Op::Add, "add", lhs, rhs)
    }

    pub fn try_mul(&mut self, lhs: NodeId, rhs: NodeId) -> Result<NodeId, MatgradError> {
        self.try_elementwise(Op::Multiply, "mul", lhs, rhs)
    }

    pub fn try_div(&mut self, lhs: NodeId, rhs: NodeId) -> Result<NodeId, MatgradError> {
        self.try_elementwise(Op::Divide, "div", lhs, rhs)
    }

    /// Elementwise `base ^ exponent`. Only the base is differentiated; the exponent
    /// always receives a zero gradient.
    pub fn try_pow(&mut self, base: NodeId, exponent: NodeId) -> Result<NodeId, MatgradError> {
        self.try_elementwise(Op::Power, "pow", base, exponent)
    }

    pub fn try_matmul(&mut self, lhs: NodeId, rhs: NodeId) -> Result<NodeId, MatgradError> {
        let lhs_shape = self.node(lhs)?.shape;
        let rhs_shape = self.node(rhs)?.shape;
        let shape = lhs_shape
            .dot(&rhs_shape)
            .ok_or(MatgradError::DimensionMismatch {
                lhs: lhs_shape,
                rhs: rhs_shape,
            })?;
        Ok(self.push(Op::MatMul, vec![lhs, rhs], shape))
    }

    /// `lhs + (-1) * rhs`.
    pub fn try_sub(&mut self, lhs: NodeId, rhs: NodeId) -> Result<NodeId, MatgradError> {
        let lhs_shape = self.node(lhs)?.shape;
        let rhs_shape = self.node(rhs)?.shape;
        if !lhs_shape.is_broadcastable_with(&rhs_shape) {
            return Err(MatgradError::ShapeMismatch {
                lhs: lhs_shape,
                rhs: rhs_shape,
                operation: "sub".to_string(),
            });
        }
        let minus_one = self.scalar_constant(-1.0);
        let negated = self.try_mul(minus_one, rhs)?;
        self.try_add(lhs, negated)
    }

    pub fn try_function(
        &mut self,
        input: NodeId,
        function: ElementwiseFn,
    ) -> Result<NodeId, MatgradError> {
        let shape = self.node(input)?.shape;
        Ok(self.push(Op::Function(function), vec![input], shape))
    }

    // --- Panicking builders ---

    /// Elementwise `lhs + rhs` with broadcasting.
    ///
    /// # Panics
    /// Panics if the shapes are not broadcastable or an id is not from this graph.
    /// Use [`try_add`](Graph::try_add) to get the error instead.
    pub fn add(&mut self, lhs: NodeId, rhs: NodeId) -> NodeId {
        built(self.try_add(lhs, rhs))
    }

    /// Elementwise `lhs * rhs` with broadcasting.
    ///
    /// # Panics
    /// Same conditions as [`add`](Graph::add).
    pub fn mul(&mut self, lhs: NodeId, rhs: NodeId) -> NodeId {
        built(self.try_mul(lhs, rhs))
    }

    /// Elementwise `lhs / rhs` with broadcasting.
    ///
    /// # Panics
    /// Same conditions as [`add`](Graph::add).
    pub fn div(&mut self, lhs: NodeId, rhs: NodeId) -> NodeId {
        built(self.try_div(lhs, rhs))
    }

    /// Elementwise `base ^ exponent`, see [`try_pow`](Graph::try_pow).
    ///
    /// # Panics
    /// Same conditions as [`add`](Graph::add).
    pub fn pow(&mut self, base: NodeId, exponent: NodeId) -> NodeId {
        built(self.try_pow(base, exponent))
    }

    /// Matrix product `lhs · rhs`.
    ///
    /// # Panics
    /// Panics if `lhs.cols != rhs.rows` or an id is not from this graph.
    pub fn matmul(&mut self, lhs: NodeId, rhs: NodeId) -> NodeId {
        built(self.try_matmul(lhs, rhs))
    }

    /// # Panics
    /// Same conditions as [`add`](Graph::add).
    pub fn sub(&mut self, lhs: NodeId, rhs: NodeId) -> NodeId {
        built(self.try_sub(lhs, rhs))
    }

    /// `(-1) * input`.
    pub fn neg(&mut self, input: NodeId) -> NodeId {
        self.mul_scalar(input, -1.0)
    }

    pub fn add_scalar(&mut self, input: NodeId, scalar: Real) -> NodeId {
        let c = self.scalar_constant(scalar);
        self.add(input, c)
    }

    pub fn mul_scalar(&mut self, input: NodeId, scalar: Real) -> NodeId {
        let c = self.scalar_constant(scalar);
        self.mul(c, input)
    }

    pub fn div_scalar(&mut self, input: NodeId, scalar: Real) -> NodeId {
        let c = self.scalar_constant(scalar);
        self.div(input, c)
    }

    /// `input ^ exponent` with a constant scalar exponent.
    pub fn pow_scalar(&mut self, input: NodeId, exponent: Real) -> NodeId {
        let c = self.scalar_constant(exponent);
        self.pow(input, c)
    }

    /// Builds an elementwise function node from a forward transform and its derivative.
    ///
    /// Both transforms must return a matrix of the input's shape; a transform that does
    /// not fails the forward or backward pass with `FunctionOutputShape`.
    ///
    /// # Panics
    /// Panics if `input` is not from this graph.
    pub fn function<F, D>(
        &mut self,
        input: NodeId,
        name: impl Into<String>,
        forward: F,
        derivative: D,
    ) -> NodeId
    where
        F: Fn(&Matrix) -> Result<Matrix, MatgradError> + Send + Sync + 'static,
        D: Fn(&Matrix) -> Result<Matrix, MatgradError> + Send + Sync + 'static,
    {
        let function = ElementwiseFn::new(name, Box::new(forward), Box::new(derivative));
        built(self.try_function(input, function))
    }

    // --- Variable access ---

    /// Replaces the value of a variable. The new value must keep the variable's shape.
    ///
    /// # Errors
    /// - `UnknownNode` if `id` is not from this graph.
    /// - `NotAVariable` if `id` is not a variable.
    /// - `ShapeMismatch` if the shapes differ.
    pub fn set_value<T: Element>(
        &mut self,
        id: NodeId,
        new_value: Matrix<T>,
    ) -> Result<(), MatgradError> {
        self.check_id(id)?;
        let node = &mut self.nodes[id.0];
        let shape = node.shape;
        match &mut node.op {
            Op::Variable { name, value } => {
                if new_value.shape() != shape {
                    return Err(MatgradError::ShapeMismatch {
                        lhs: shape,
                        rhs: new_value.shape(),
                        operation: "set_value".to_string(),
                    });
                }
                debug!("Updating variable '{}' ({})", name, id);
                *value = new_value.as_type::<Real>();
                Ok(())
            }
            _ => Err(MatgradError::NotAVariable { node: id }),
        }
    }

    /// Panicking twin of [`set_value`](Graph::set_value), for training loops.
    ///
    /// # Panics
    /// Panics on any error `set_value` would return.
    pub fn update<T: Element>(&mut self, id: NodeId, new_value: Matrix<T>) {
        if let Err(e) = self.set_value(id, new_value) {
            panic!("invalid variable update: {}", e);
        }
    }

    /// Current value held by a variable (independent of any forward pass).
    pub fn variable_value(&self, id: NodeId) -> Result<&Matrix, MatgradError> {
        match &self.node(id)?.op {
            Op::Variable { value, .. } => Ok(value),
            _ => Err(MatgradError::NotAVariable { node: id }),
        }
    }

    /// Ids and names of all variables, in creation order.
    pub fn variables(&self) -> Vec<(NodeId, &str)> {
        self.nodes
            .iter()
            .enumerate()
            .filter_map(|(i, n)| match &n.op {
                Op::Variable { name, .. } => Some((NodeId(i, self.tag), name.as_str())),
                _ => None,
            })
            .collect()
    }

    /// Forward value cached for `id`, if a forward pass reached it.
    pub fn value(&self, id: NodeId) -> Option<&Matrix> {
        self.node(id).ok().and_then(|n| n.value.as_ref())
    }

    /// Gradient of the last backward root with respect to `id`.
    pub fn grad(&self, id: NodeId) -> Option<&Matrix> {
        self.node(id).ok().and_then(|n| n.grad.as_ref())
    }

    // --- Evaluation ---

    /// Nodes reachable from `root`, children before parents, each exactly once.
    ///
    /// Depth-first post-order, visiting children left to right, so the result only
    /// depends on the graph structure.
    pub fn topological_order(&self, root: NodeId) -> Result<Vec<NodeId>, MatgradError> {
        self.check_id(root)?;
        let mut visited = vec![false; self.nodes.len()];
        let mut order = Vec::new();
        let mut stack = vec![(root, 0usize)];
        visited[root.0] = true;

        while let Some((id, next_child)) = stack.pop() {
            let inputs = &self.nodes[id.0].inputs;
            if next_child < inputs.len() {
                stack.push((id, next_child + 1));
                let child = inputs[next_child];
                if !visited[child.0] {
                    visited[child.0] = true;
                    stack.push((child, 0));
                }
            } else {
                order.push(id);
            }
        }
        Ok(order)
    }

    /// Evaluates `root`, caching the value of every node it depends on.
    ///
    /// Each reachable node is computed once, after all of its children.
    pub fn forward(&mut self, root: NodeId) -> Result<Matrix, MatgradError> {
        let order = self.topological_order(root)?;
        for &id in &order {
            let value = self.evaluate(id)?;
            trace!("forward {} -> {}", self.nodes[id.0].label(), value.shape());
            self.nodes[id.0].value = Some(value);
        }
        self.cached_value(root).cloned()
    }

    fn cached_value(&self, id: NodeId) -> Result<&Matrix, MatgradError> {
        self.nodes[id.0]
            .value
            .as_ref()
            .ok_or(MatgradError::ValueNotComputed { node: id })
    }

    fn evaluate(&self, id: NodeId) -> Result<Matrix, MatgradError> {
        let node = &self.nodes[id.0];
        match &node.op {
            Op::Constant(value) => Ok(value.clone()),
            Op::Variable { value, .. } => Ok(value.clone()),
            Op::Add => {
                let (l, r) = self.operands(node)?;
                l.add(r)
            }
            Op::Multiply => {
                let (l, r) = self.operands(node)?;
                l.mul(r)
            }
            Op::Divide => {
                let (l, r) = self.operands(node)?;
                l.div(r)
            }
            Op::Power => {
                let (l, r) = self.operands(node)?;
                l.pow(r)
            }
            Op::MatMul => {
                let (l, r) = self.operands(node)?;
                l.dot(r)
            }
            Op::Function(function) => {
                let x = self.cached_value(node.inputs[0])?;
                let y = function.apply(x)?;
                check_function_shape(function, node.shape, &y)?;
                Ok(y)
            }
        }
    }

    fn operands(&self, node: &Node) -> Result<(&Matrix, &Matrix), MatgradError> {
        Ok((
            self.cached_value(node.inputs[0])?,
            self.cached_value(node.inputs[1])?,
        ))
    }

    /// Computes `∂root/∂node` for every node reachable from `root`.
    ///
    /// Gradients of the reachable nodes are cleared first, the root is seeded with ones,
    /// then each node hands its gradient to its children in reverse topological order.
    /// A node shared by several parents receives the sum of their contributions.
    ///
    /// Requires a prior [`forward`](Graph::forward) on `root` (or on a node depending on
    /// it) since every local step reads cached values.
    ///
    /// # Errors
    /// - `ValueNotComputed` if a needed forward value is missing.
    /// - Any matrix error raised while computing a local gradient.
    pub fn backward(&mut self, root: NodeId) -> Result<(), MatgradError> {
        let order = self.topological_order(root)?;
        debug!("Backward from {}: {} nodes in topological order", root, order.len());

        for &id in &order {
            self.nodes[id.0].grad = None;
        }
        let seed = Matrix::ones(self.nodes[root.0].shape);
        self.nodes[root.0].grad = Some(seed);

        for &id in order.iter().rev() {
            trace!("backward {}", self.nodes[id.0].label());
            self.backward_local(id)?;
        }
        debug!("Backward from {} done", root);
        Ok(())
    }

    /// Adds this node's contribution to the gradient of each of its children.
    fn backward_local(&mut self, id: NodeId) -> Result<(), MatgradError> {
        let node = &self.nodes[id.0];
        match node.op {
            Op::Variable { .. } => return Ok(()),
            Op::Constant(_) => {
                if node.grad.is_none() {
                    let zeros = Matrix::zeros(node.shape);
                    self.nodes[id.0].grad = Some(zeros);
                }
                return Ok(());
            }
            _ => {}
        }
        let grad = node
            .grad
            .as_ref()
            .ok_or(MatgradError::GradientNotComputed { node: id })?;

        let mut contributions: Vec<(NodeId, Matrix)> = Vec::with_capacity(2);
        match &node.op {
            Op::Constant(_) | Op::Variable { .. } => unreachable!("leaves handled above"),
            Op::Add => {
                let (l, r) = (node.inputs[0], node.inputs[1]);
                contributions.push((l, grad.clone()));
                contributions.push((r, grad.clone()));
            }
            Op::Multiply => {
                let (l, r) = (node.inputs[0], node.inputs[1]);
                let (lv, rv) = self.operands(node)?;
                contributions.push((l, grad.mul(rv)?));
                contributions.push((r, grad.mul(lv)?));
            }
            Op::Divide => {
                let (l, r) = (node.inputs[0], node.inputs[1]);
                let (lv, rv) = self.operands(node)?;
                // d(l/r)/dl = 1/r, d(l/r)/dr = -l/r^2
                contributions.push((l, grad.div(rv)?));
                let dr = grad.mul(lv)?.div(&rv.powf(2.0))?.neg();
                contributions.push((r, dr));
            }
            Op::Power => {
                let (base, exponent) = (node.inputs[0], node.inputs[1]);
                let (bv, ev) = self.operands(node)?;
                // d(b^e)/db = e * b^(e-1)
                let local = bv.pow(&ev.sub_scalar(1.0))?.mul(ev)?;
                contributions.push((base, grad.mul(&local)?));
                contributions.push((exponent, Matrix::zeros(ev.shape())));
            }
            Op::MatMul => {
                let (l, r) = (node.inputs[0], node.inputs[1]);
                let (lv, rv) = self.operands(node)?;
                contributions.push((l, grad.dot(&rv.transpose())?));
                contributions.push((r, lv.transpose().dot(grad)?));
            }
            Op::Function(function) => {
                let input = node.inputs[0];
                let x = self.cached_value(input)?;
                let derivative = function.derivative_at(x)?;
                check_function_shape(function, node.shape, &derivative)?;
                contributions.push((input, grad.mul(&derivative)?));
            }
        }

        for (child, contribution) in contributions {
            let child_shape = self.nodes[child.0].shape;
            let reduced = contribution.reduce_mean_to(child_shape)?;
            self.accumulate_grad(child, reduced)?;
        }
        Ok(())
    }

    /// Adds `contribution` into the gradient slot of `id`. Constants are skipped.
    fn accumulate_grad(&mut self, id: NodeId, contribution: Matrix) -> Result<(), MatgradError> {
        let node = &mut self.nodes[id.0];
        if let Op::Constant(_) = node.op {
            return Ok(());
        }
        if contribution.shape() != node.shape {
            return Err(MatgradError::ShapeMismatch {
                lhs: node.shape,
                rhs: contribution.shape(),
                operation: "accumulate_grad".to_string(),
            });
        }
        let updated = match &node.grad {
            Some(existing) => existing.add(&contribution)?,
            None => contribution,
        };
        node.grad = Some(updated);
        Ok(())
    }
}

fn check_function_shape(
    function: &ElementwiseFn,
    expected: Shape,
    output: &Matrix,
) -> Result<(), MatgradError> {
    if output.shape() != expected {
        return Err(MatgradError::FunctionOutputShape {
            name: function.name().to_string(),
            expected,
            actual: output.shape(),
        });
    }
    Ok(())
}

fn built(result: Result<NodeId, MatgradError>) -> NodeId {
    match result {
        Ok(id) => id,
        Err(e) => panic!("invalid graph node: {}", e),
    }
}

#[cfg(test)]
#[path = "graph_test.rs"]
mod tests;
