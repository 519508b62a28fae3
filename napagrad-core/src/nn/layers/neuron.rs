use crate::error::NapagradError;
use crate::nn::module::{check_inputs, Module};
use crate::value::Value;
use rand::Rng;

/// A single neuron: `w1*x1 + ... + wn*xn + b`.
///
/// No activation is applied here; [`Layer`](crate::nn::Layer) does that.
#[derive(Debug, Clone)]
pub struct Neuron {
    pub(crate) weights: Vec<Value>,
    pub(crate) bias: Value,
}

impl Neuron {
    /// Creates a neuron with weights and bias drawn from `U(-1, 1)`.
    pub fn new<R: Rng + ?Sized>(num_inputs: usize, rng: &mut R) -> Self {
        let weights = (0..num_inputs)
            .map(|_| Value::new(rng.gen_range(-1.0..=1.0)))
            .collect();
        let bias = Value::new(rng.gen_range(-1.0..=1.0));
        Neuron { weights, bias }
    }

    /// Creates a neuron from explicit parameter values.
    pub fn from_values(weights: &[f64], bias: f64) -> Self {
        Neuron {
            weights: weights.iter().map(|&w| Value::new(w)).collect(),
            bias: Value::new(bias),
        }
    }

    pub fn num_inputs(&self) -> usize {
        self.weights.len()
    }

    pub fn weights(&self) -> &[Value] {
        &self.weights
    }

    pub fn bias(&self) -> &Value {
        &self.bias
    }

    /// Weighted sum of `inputs` plus bias, as a single node.
    pub fn activate(&self, inputs: &[Value]) -> Result<Value, NapagradError> {
        check_inputs("Neuron::activate", self.weights.len(), inputs)?;
        let sum = self
            .weights
            .iter()
            .zip(inputs)
            .fold(self.bias.clone(), |acc, (w, x)| &acc + &(w * x));
        Ok(sum)
    }
}

impl Module for Neuron {
    fn forward(&self, inputs: &[Value]) -> Result<Vec<Value>, NapagradError> {
        Ok(vec![self.activate(inputs)?])
    }

    fn parameters(&self) -> Vec<Value> {
        let mut params = self.weights.clone();
        params.push(self.bias.clone());
        params
    }

    fn named_parameters(&self) -> Vec<(String, Value)> {
        let mut named: Vec<(String, Value)> = self
            .weights
            .iter()
            .enumerate()
            .map(|(i, w)| (format!("weights.{}", i), w.clone()))
            .collect();
        named.push(("bias".to_string(), self.bias.clone()));
        named
    }
}

#[cfg(test)]
#[path = "neuron_test.rs"]
mod tests;
