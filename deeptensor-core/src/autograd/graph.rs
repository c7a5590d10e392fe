use crate::value::{Value, ValueData};
use log::{debug, trace};
use std::collections::HashSet;
use std::sync::RwLock;

/// Identity of a graph node: the address of its shared `RwLock<ValueData>`.
///
/// Stable for as long as any `Value` handle (or descendant node) keeps the
/// node alive, which the traversal guarantees by holding handles.
pub type NodeId = *const RwLock<ValueData>;

/// One pending node of the depth-first traversal.
struct Frame {
    node: Value,
    predecessors: Vec<Value>,
    next: usize,
}

impl Frame {
    fn new(node: Value) -> Self {
        let predecessors = node.predecessors();
        Frame {
            node,
            predecessors,
            next: 0,
        }
    }
}

/// Builds a topological order of every node reachable from `roots`.
///
/// Depth-first, post-order: a node is appended only after all of its
/// predecessors, so every node appears strictly after the nodes it depends on.
/// Visited nodes are tracked by [`NodeId`]. The traversal keeps an explicit
/// stack, long operation chains do not grow the call stack.
pub fn topological_sort(roots: &[Value]) -> Vec<Value> {
    let mut visited: HashSet<NodeId> = HashSet::new();
    let mut sorted_list: Vec<Value> = Vec::new();

    for root in roots {
        if !visited.insert(root.node_id()) {
            continue;
        }
        let mut stack = vec![Frame::new(root.clone())];

        loop {
            let next_child = match stack.last_mut() {
                None => break,
                Some(frame) if frame.next < frame.predecessors.len() => {
                    frame.next += 1;
                    Some(frame.predecessors[frame.next - 1].clone())
                }
                Some(_) => None,
            };

            match next_child {
                Some(child) => {
                    if visited.insert(child.node_id()) {
                        stack.push(Frame::new(child));
                    }
                }
                None => {
                    if let Some(frame) = stack.pop() {
                        sorted_list.push(frame.node);
                    }
                }
            }
        }
    }

    sorted_list
}

/// Reverse-mode propagation from one or more roots.
///
/// 1. Sort the union of the reachable graph topologically.
/// 2. Seed every root with `grad = 1.0`.
/// 3. Walk the order in reverse and apply each node's backward rule.
///
/// Since the order is topological, every consumer has added its contribution
/// to a node's `grad` before that node propagates further. With several roots
/// this is the gradient of their sum. Gradients are never cleared here.
pub fn backward_from(roots: &[Value]) {
    let sorted_nodes = topological_sort(roots);
    debug!(
        "backward: {} root(s), {} node(s) in topological order",
        roots.len(),
        sorted_nodes.len()
    );

    for root in roots {
        root.set_grad(1.0);
    }

    for node in sorted_nodes.iter().rev() {
        trace!("backward: applying rule of {:?}", node);
        node.apply_backward();
    }
}

#[cfg(test)]
#[path = "graph_test.rs"]
mod tests;
