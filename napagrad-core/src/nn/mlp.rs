use crate::error::NapagradError;
use crate::nn::activation::Activation;
use crate::nn::layers::Layer;
use crate::nn::module::{check_inputs, prefixed, Module};
use crate::value::Value;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Multi-layer perceptron.
///
/// Built from a list of sizes, e.g. `[3, 4, 4, 1]` for 3 inputs, two hidden
/// layers of 4 neurons and a single output. Hidden layers apply the hidden
/// activation (tanh by default); the last layer is linear.
#[derive(Debug, Clone)]
pub struct Mlp {
    layers: Vec<Layer>,
}

impl Mlp {
    /// Creates a network with tanh hidden layers and a linear output layer.
    ///
    /// # Errors
    /// [`NapagradError::InvalidArgument`] if fewer than two sizes are given.
    pub fn new<R: Rng + ?Sized>(sizes: &[usize], rng: &mut R) -> Result<Self, NapagradError> {
        Mlp::with_activation(sizes, Activation::Tanh, rng)
    }

    /// Same as [`Mlp::new`] with a reproducible `StdRng` seeded from `seed`.
    pub fn seeded(sizes: &[usize], seed: u64) -> Result<Self, NapagradError> {
        let mut rng = StdRng::seed_from_u64(seed);
        Mlp::new(sizes, &mut rng)
    }

    pub fn with_activation<R: Rng + ?Sized>(
        sizes: &[usize],
        hidden_activation: Activation,
        rng: &mut R,
    ) -> Result<Self, NapagradError> {
        if sizes.len() < 2 {
            return Err(NapagradError::InvalidArgument {
                name: "sizes".to_string(),
                reason: format!("an MLP needs at least an input and an output size, got {:?}", sizes),
            });
        }
        let last = sizes.len() - 2;
        let layers = sizes
            .windows(2)
            .enumerate()
            .map(|(i, pair)| {
                let activation = if i == last { Activation::Identity } else { hidden_activation };
                Layer::new(pair[0], pair[1], activation, &mut *rng)
            })
            .collect();
        Ok(Mlp { layers })
    }

    /// Builds a network from existing layers.
    ///
    /// # Errors
    /// [`NapagradError::InputSizeMismatch`] if consecutive layers do not connect.
    pub fn from_layers(layers: Vec<Layer>) -> Result<Self, NapagradError> {
        for pair in layers.windows(2) {
            if pair[0].num_outputs() != pair[1].num_inputs() {
                return Err(NapagradError::InputSizeMismatch {
                    operation: "Mlp::from_layers".to_string(),
                    expected: pair[0].num_outputs(),
                    actual: pair[1].num_inputs(),
                });
            }
        }
        Ok(Mlp { layers })
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    pub fn num_inputs(&self) -> usize {
        self.layers.first().map_or(0, Layer::num_inputs)
    }

    pub fn num_outputs(&self) -> usize {
        self.layers.last().map_or(0, Layer::num_outputs)
    }

    /// Forward pass for a network with exactly one output.
    ///
    /// # Errors
    /// [`NapagradError::NonScalarOutput`] if the last layer has several neurons.
    pub fn forward_scalar(&self, inputs: &[Value]) -> Result<Value, NapagradError> {
        let mut outputs = self.forward(inputs)?;
        if outputs.len() != 1 {
            return Err(NapagradError::NonScalarOutput {
                outputs: outputs.len(),
            });
        }
        Ok(outputs.remove(0))
    }

    /// Forward pass on raw numbers, each wrapped in a fresh leaf.
    pub fn predict(&self, inputs: &[f64]) -> Result<Value, NapagradError> {
        let inputs: Vec<Value> = inputs.iter().map(|&x| Value::new(x)).collect();
        self.forward_scalar(&inputs)
    }

    /// Parameter values by name, in [`Module::named_parameters`] order.
    pub fn state_dict(&self) -> Vec<(String, f64)> {
        self.named_parameters()
            .into_iter()
            .map(|(name, param)| (name, param.value()))
            .collect()
    }

    /// Loads parameter values saved by [`Mlp::state_dict`].
    ///
    /// Every parameter must be present; entries for unknown names are ignored.
    /// Nothing is written unless all parameters are found.
    pub fn load_state_dict(&self, state: &[(String, f64)]) -> Result<(), NapagradError> {
        let named = self.named_parameters();
        let mut updates = Vec::with_capacity(named.len());
        for (name, param) in named {
            let value = state
                .iter()
                .find(|(key, _)| *key == name)
                .map(|(_, v)| *v)
                .ok_or_else(|| NapagradError::MissingParameter(name.clone()))?;
            updates.push((param, value));
        }
        for (param, value) in updates {
            param.set_value(value);
        }
        Ok(())
    }

    /// Loads parameter values in [`Module::parameters`] order.
    pub fn load_parameter_values(&self, values: &[f64]) -> Result<(), NapagradError> {
        let params = self.parameters();
        if values.len() != params.len() {
            return Err(NapagradError::InputSizeMismatch {
                operation: "Mlp::load_parameter_values".to_string(),
                expected: params.len(),
                actual: values.len(),
            });
        }
        for (param, &value) in params.iter().zip(values) {
            param.set_value(value);
        }
        Ok(())
    }
}

impl Module for Mlp {
    fn forward(&self, inputs: &[Value]) -> Result<Vec<Value>, NapagradError> {
        check_inputs("Mlp::forward", self.num_inputs(), inputs)?;
        let mut x = inputs.to_vec();
        for layer in &self.layers {
            x = layer.forward(&x)?;
        }
        Ok(x)
    }

    fn parameters(&self) -> Vec<Value> {
        self.layers.iter().flat_map(|l| l.parameters()).collect()
    }

    fn named_parameters(&self) -> Vec<(String, Value)> {
        self.layers
            .iter()
            .enumerate()
            .flat_map(|(i, l)| prefixed(&format!("layers.{}", i), l.named_parameters()))
            .collect()
    }
}

#[cfg(test)]
#[path = "mlp_test.rs"]
mod tests;
