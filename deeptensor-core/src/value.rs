// src/value.rs

use crate::autograd::graph::{self, NodeId};
use crate::autograd::Op;
use crate::error::DeepTensorError;
use std::collections::HashSet;
use std::fmt;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Internal storage of a scalar computation-graph node.
///
/// `op` and `operands` are fixed when the node is built, and so is `data` for
/// every non-leaf. `grad` changes through backward accumulation, the root seed,
/// or a reset.
#[derive(Debug)]
pub struct ValueData {
    /// Forward value.
    pub(crate) data: f64,
    /// Accumulated gradient of the last backward root with respect to this node.
    pub(crate) grad: f64,
    /// Operation that produced this node (`Op::Leaf` for user-created nodes).
    pub(crate) op: Op,
    /// Operands in call order. The same node may appear twice (`a * a`).
    pub(crate) operands: Vec<Value>,
}

impl Drop for ValueData {
    // Unlinks operand chains iteratively; the default recursive drop overflows
    // the stack on long chains such as a running sum of many nodes.
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.operands);
        while let Some(operand) = pending.pop() {
            if let Ok(lock) = Arc::try_unwrap(operand.node) {
                let mut inner = lock.into_inner().unwrap_or_else(|poisoned| poisoned.into_inner());
                pending.append(&mut inner.operands);
            }
        }
    }
}

/// A scalar node of the computation graph.
///
/// `Value` is a cheap handle around `Arc<RwLock<ValueData>>`:
/// 1.  **Shared Ownership:** a node can be the operand of many descendants
///     (diamonds) and stays alive while any handle or descendant refers to it.
/// 2.  **Interior Mutability:** `grad` is accumulated through shared handles
///     during the backward pass.
///
/// Node identity is the address of the shared `RwLock`, see [`Value::node_id`].
#[derive(Clone)]
pub struct Value {
    pub(crate) node: Arc<RwLock<ValueData>>,
}

impl Value {
    /// Creates a new leaf node holding `data`, with a zero gradient.
    pub fn new(data: f64) -> Self {
        Self::from_op(data, Op::Leaf, Vec::new())
    }

    /// Builds a node produced by `op` from `operands`.
    /// Used by the operation catalog once the forward value is computed.
    pub(crate) fn from_op(data: f64, op: Op, operands: Vec<Value>) -> Self {
        debug_assert_eq!(op.arity(), operands.len(), "operand count does not match {:?}", op);
        Value {
            node: Arc::new(RwLock::new(ValueData {
                data,
                grad: 0.0,
                op,
                operands,
            })),
        }
    }

    /// Acquires a read lock on the node's data.
    /// Panics if the RwLock is poisoned.
    pub fn read_data(&self) -> RwLockReadGuard<'_, ValueData> {
        self.node.read().expect("RwLock poisoned")
    }

    /// Acquires a write lock on the node's data.
    /// Panics if the RwLock is poisoned.
    pub(crate) fn write_data(&self) -> RwLockWriteGuard<'_, ValueData> {
        self.node.write().expect("RwLock poisoned")
    }

    /// Returns the forward value.
    pub fn data(&self) -> f64 {
        self.read_data().data
    }

    /// Returns the accumulated gradient.
    pub fn grad(&self) -> f64 {
        self.read_data().grad
    }

    /// Overwrites the forward value of a leaf, e.g. for a parameter update.
    /// Nodes already computed from this one keep their old values.
    ///
    /// # Errors
    /// `UnsupportedOperation` if this node was produced by an operation.
    pub fn set_data(&self, data: f64) -> Result<(), DeepTensorError> {
        let mut guard = self.write_data();
        if guard.op != Op::Leaf {
            return Err(DeepTensorError::UnsupportedOperation(format!(
                "set_data on a non-leaf node ({})",
                guard.op
            )));
        }
        guard.data = data;
        Ok(())
    }

    /// Overwrites the gradient. Mostly useful to seed a single backward rule.
    pub fn set_grad(&self, grad: f64) {
        self.write_data().grad = grad;
    }

    /// Resets this node's gradient to zero. Does not touch other nodes.
    pub fn zero_grad(&self) {
        self.set_grad(0.0);
    }

    pub(crate) fn accumulate_grad(&self, delta: f64) {
        self.write_data().grad += delta;
    }

    /// Returns the operation tag that produced this node.
    pub fn op(&self) -> Op {
        self.read_data().op
    }

    pub fn is_leaf(&self) -> bool {
        self.op() == Op::Leaf
    }

    /// Returns the operands in call order, duplicates included.
    pub fn operands(&self) -> Vec<Value> {
        self.read_data().operands.clone()
    }

    /// Returns the distinct operand nodes (the predecessor set).
    pub fn predecessors(&self) -> Vec<Value> {
        let operands = self.operands();
        let mut seen: HashSet<NodeId> = HashSet::with_capacity(operands.len());
        operands
            .into_iter()
            .filter(|operand| seen.insert(operand.node_id()))
            .collect()
    }

    /// Stable identity of the node, valid while any handle is alive.
    pub fn node_id(&self) -> NodeId {
        Arc::as_ptr(&self.node)
    }

    /// Returns true if both handles point to the same graph node.
    pub fn same_node(&self, other: &Value) -> bool {
        Arc::ptr_eq(&self.node, &other.node)
    }

    /// Runs this node's backward rule once: reads the current `grad` and
    /// accumulates the local partial derivatives into every operand.
    ///
    /// This is a single step of the chain rule. [`Value::backward`] calls it on
    /// every reachable node in reverse topological order.
    pub fn apply_backward(&self) {
        let (op, output, grad_output, operands) = {
            let guard = self.read_data();
            if guard.op == Op::Leaf {
                return;
            }
            (guard.op, guard.data, guard.grad, guard.operands.clone())
        };

        let inputs: Vec<f64> = operands.iter().map(Value::data).collect();
        let contributions = op.backward(output, &inputs, grad_output);
        for (operand, delta) in operands.iter().zip(contributions) {
            operand.accumulate_grad(delta);
        }
    }

    /// Computes the gradient of this node with respect to every ancestor.
    ///
    /// Seeds `self.grad = 1.0` and propagates in reverse topological order.
    /// Existing gradients of ancestors are not cleared first, so repeated
    /// calls accumulate.
    pub fn backward(&self) {
        graph::backward_from(std::slice::from_ref(self));
    }

    /// Resets the gradient of this node and of every node reachable from it.
    pub fn zero_grad_graph(&self) {
        for node in graph::topological_sort(std::slice::from_ref(self)) {
            node.zero_grad();
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let guard = self.read_data();
        f.debug_struct("Value")
            .field("data", &guard.data)
            .field("grad", &guard.grad)
            .field("op", &guard.op)
            .field("operands", &guard.operands.len())
            .finish()
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let guard = self.read_data();
        write!(f, "Value(data={:.6}, grad={:.6})", guard.data, guard.grad)
    }
}

impl From<f64> for Value {
    fn from(data: f64) -> Self {
        Value::new(data)
    }
}

#[cfg(test)]
#[path = "value_test.rs"]
mod tests;
