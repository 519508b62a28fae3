use crate::error::NapagradError;
use crate::nn::activation::Activation;
use crate::nn::layers::neuron::Neuron;
use crate::nn::module::{check_inputs, prefixed, Module};
use crate::value::Value;
use rand::Rng;

/// A layer of neurons sharing the same inputs, followed by an activation.
#[derive(Debug, Clone)]
pub struct Layer {
    pub(crate) neurons: Vec<Neuron>,
    activation: Activation,
    num_inputs: usize,
}

impl Layer {
    /// Creates a layer of `num_outputs` randomly initialised neurons.
    pub fn new<R: Rng + ?Sized>(
        num_inputs: usize,
        num_outputs: usize,
        activation: Activation,
        rng: &mut R,
    ) -> Self {
        let neurons = (0..num_outputs).map(|_| Neuron::new(num_inputs, &mut *rng)).collect();
        Layer {
            neurons,
            activation,
            num_inputs,
        }
    }

    /// Builds a layer from existing neurons.
    ///
    /// # Errors
    /// [`NapagradError::InputSizeMismatch`] if the neurons disagree on their input count.
    pub fn from_neurons(neurons: Vec<Neuron>, activation: Activation) -> Result<Self, NapagradError> {
        let num_inputs = neurons.first().map_or(0, Neuron::num_inputs);
        if let Some(bad) = neurons.iter().find(|n| n.num_inputs() != num_inputs) {
            return Err(NapagradError::InputSizeMismatch {
                operation: "Layer::from_neurons".to_string(),
                expected: num_inputs,
                actual: bad.num_inputs(),
            });
        }
        Ok(Layer {
            neurons,
            activation,
            num_inputs,
        })
    }

    pub fn neurons(&self) -> &[Neuron] {
        &self.neurons
    }

    pub fn activation(&self) -> Activation {
        self.activation
    }

    pub fn num_inputs(&self) -> usize {
        self.num_inputs
    }

    pub fn num_outputs(&self) -> usize {
        self.neurons.len()
    }
}

impl Module for Layer {
    fn forward(&self, inputs: &[Value]) -> Result<Vec<Value>, NapagradError> {
        check_inputs("Layer::forward", self.num_inputs, inputs)?;
        self.neurons
            .iter()
            .map(|n| n.activate(inputs).map(|out| self.activation.apply(out)))
            .collect()
    }

    fn parameters(&self) -> Vec<Value> {
        self.neurons.iter().flat_map(|n| n.parameters()).collect()
    }

    fn named_parameters(&self) -> Vec<(String, Value)> {
        self.neurons
            .iter()
            .enumerate()
            .flat_map(|(i, n)| prefixed(&format!("neurons.{}", i), n.named_parameters()))
            .collect()
    }
}

#[cfg(test)]
#[path = "layer_test.rs"]
mod tests;
