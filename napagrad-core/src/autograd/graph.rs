use crate::error::NapagradError;
use crate::value::{NodeId, Value};
use std::collections::{HashMap, HashSet};

#[derive(Clone, Copy, PartialEq, Eq)]
enum Mark {
    /// On the current DFS path.
    InProgress,
    Done,
}

/// Returns every node reachable from `root` in topological order: each node
/// appears after all of its operands, and `root` comes last.
///
/// Depth-first post-order with an explicit stack, so deep graphs (long
/// training sums) do not overflow the call stack. Each node is emitted once
/// no matter how many parents reference it. Identity is per traversal; no
/// global registry of nodes exists.
///
/// # Errors
/// [`NapagradError::CycleDetected`] if an operand edge leads back to a node
/// on the current path. The public API cannot build such a graph.
pub fn topological_sort(root: &Value) -> Result<Vec<Value>, NapagradError> {
    let mut marks: HashMap<NodeId, Mark> = HashMap::new();
    let mut sorted = Vec::new();
    // (node, index of the next operand to visit)
    let mut stack: Vec<(Value, usize)> = vec![(root.clone(), 0)];
    marks.insert(root.id(), Mark::InProgress);

    while let Some((node, next)) = stack.pop() {
        let operand = node.read().operands.get(next).cloned();
        match operand {
            Some(operand) => {
                stack.push((node, next + 1));
                match marks.get(&operand.id()) {
                    Some(Mark::Done) => {}
                    Some(Mark::InProgress) => {
                        log::trace!("topological_sort: back edge to {}", operand.id());
                        return Err(NapagradError::CycleDetected);
                    }
                    None => {
                        marks.insert(operand.id(), Mark::InProgress);
                        stack.push((operand, 0));
                    }
                }
            }
            None => {
                log::trace!("topological_sort: emit {} ({:?})", node.id(), node.op());
                marks.insert(node.id(), Mark::Done);
                sorted.push(node);
            }
        }
    }
    Ok(sorted)
}

/// Collects every distinct node reachable from `root`, in no particular order.
///
/// Unlike [`topological_sort`] this never fails; it is what `zero_grad` and
/// the visualizer use.
pub fn reachable(root: &Value) -> Vec<Value> {
    let mut seen: HashSet<NodeId> = HashSet::new();
    let mut nodes = Vec::new();
    let mut stack = vec![root.clone()];
    seen.insert(root.id());

    while let Some(node) = stack.pop() {
        for operand in node.read().operands.iter() {
            if seen.insert(operand.id()) {
                stack.push(operand.clone());
            }
        }
        nodes.push(node);
    }
    nodes
}

#[cfg(test)]
#[path = "graph_test.rs"]
mod tests;
