use super::Value;
use crate::autograd::graph::{reachable, topological_sort};
use crate::error::NapagradError;

impl Value {
    /// Performs the backward pass starting from this node.
    ///
    /// Seeds this node's gradient with `1.0` and walks every reachable node in
    /// reverse topological order, adding each node's contribution into its
    /// operands' gradients. Gradients of other nodes are **not** reset first:
    /// call [`Value::zero_grad`] before every fresh pass, otherwise gradients
    /// from previous passes keep accumulating.
    ///
    /// Calling this on a leaf simply sets the leaf's gradient to `1.0`.
    ///
    /// # Errors
    /// * [`NapagradError::MalformedNode`] if a node's operand count does not
    ///   match its operation.
    /// * [`NapagradError::CycleDetected`] if the graph is not a DAG.
    pub fn backward(&self) -> Result<(), NapagradError> {
        let sorted = topological_sort(self)?;
        log::debug!("backward: {} node(s) reachable from {}", sorted.len(), self.id());

        self.set_gradient(1.0);

        for node in sorted.iter().rev() {
            let data = node.read();
            if data.op.is_leaf() {
                continue;
            }
            log::trace!("backward: {:?} at {} (grad {})", data.op, node.id(), data.gradient);
            data.op
                .backward(data.value, data.gradient, &data.operands)?;
        }
        Ok(())
    }

    /// Resets the gradient of every node reachable from this one to `0.0`.
    ///
    /// Shared nodes are visited once; calling it repeatedly is harmless.
    pub fn zero_grad(&self) {
        let nodes = reachable(self);
        log::debug!("zero_grad: resetting {} node(s)", nodes.len());
        for node in &nodes {
            node.set_gradient(0.0);
        }
    }
}

#[cfg(test)]
#[path = "autograd_methods_test.rs"]
mod tests;
