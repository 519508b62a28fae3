use crate::error::NapagradError;
use crate::value::Value;

/// The base trait for all neural network modules (neurons, layers, networks).
pub trait Module: std::fmt::Debug {
    /// Performs a forward pass, extending the computation graph of `inputs`.
    ///
    /// # Errors
    /// [`NapagradError::InputSizeMismatch`] when `inputs` does not have the
    /// length the module was built for.
    fn forward(&self, inputs: &[Value]) -> Result<Vec<Value>, NapagradError>;

    /// Returns all learnable parameters, in a fixed order.
    ///
    /// The handles are shared with the module: updating their values updates
    /// the module.
    fn parameters(&self) -> Vec<Value>;

    /// Returns all learnable parameters along with hierarchical names
    /// (e.g. `"layers.0.neurons.1.weights.0"`), in the same order as
    /// [`Module::parameters`].
    fn named_parameters(&self) -> Vec<(String, Value)>;

    /// Number of learnable parameters.
    fn num_parameters(&self) -> usize {
        self.parameters().len()
    }

    /// Resets the gradient of every parameter to zero.
    ///
    /// Only the parameters are touched. Intermediate nodes of an old graph
    /// keep their gradients; use [`Value::zero_grad`] on a loss for those.
    fn zero_grad(&self) {
        for param in self.parameters() {
            param.set_gradient(0.0);
        }
    }
}

/// Prefixes every name of a child's `named_parameters`.
pub(crate) fn prefixed(prefix: &str, named: Vec<(String, Value)>) -> Vec<(String, Value)> {
    named
        .into_iter()
        .map(|(name, value)| (format!("{}.{}", prefix, name), value))
        .collect()
}

/// Checks that a forward pass got the number of inputs it expects.
pub(crate) fn check_inputs(operation: &str, expected: usize, inputs: &[Value]) -> Result<(), NapagradError> {
    if inputs.len() != expected {
        return Err(NapagradError::InputSizeMismatch {
            operation: operation.to_string(),
            expected,
            actual: inputs.len(),
        });
    }
    Ok(())
}
