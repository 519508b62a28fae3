use crate::error::NapagradError;
use crate::optim::optimizer_trait::Optimizer;
use crate::optim::param_group::ParamGroup;
use crate::value::{NodeId, Value};
use std::collections::{HashMap, HashSet};

/// Implements the Stochastic Gradient Descent (SGD) optimizer.
///
/// Supports momentum, weight decay, and Nesterov momentum. With the defaults
/// (no momentum, no weight decay) a step is exactly
/// `value -= lr * gradient` for every parameter.
#[derive(Debug)]
pub struct SgdOptimizer {
    param_groups: Vec<ParamGroup>,
    lr: f64,
    momentum: f64,
    weight_decay: f64,
    nesterov: bool,
    /// Keyed by node identity. The entry holds a handle to its parameter so
    /// the id cannot be reused by another node while the buffer exists.
    momentum_buffers: HashMap<NodeId, (Value, f64)>,
}

impl SgdOptimizer {
    /// Creates a new `SgdOptimizer`.
    ///
    /// # Arguments
    ///
    /// * `params`: The parameters to optimize, placed into a default group.
    /// * `lr`: The learning rate.
    /// * `momentum`: Momentum factor (`0.0` disables momentum).
    /// * `weight_decay`: Weight decay (L2 penalty) factor.
    /// * `nesterov`: Enables Nesterov momentum. Requires `momentum > 0`.
    ///
    /// Groups added later through [`Optimizer::add_param_group`] use these
    /// values for any option they leave unset.
    pub fn new(
        params: impl IntoIterator<Item = Value>,
        lr: f64,
        momentum: f64,
        weight_decay: f64,
        nesterov: bool,
    ) -> Result<Self, NapagradError> {
        check_non_negative("lr", lr)?;
        check_non_negative("momentum", momentum)?;
        check_non_negative("weight_decay", weight_decay)?;
        if nesterov && momentum == 0.0 {
            return Err(NapagradError::InvalidArgument {
                name: "nesterov".to_string(),
                reason: "Nesterov momentum requires a positive momentum".to_string(),
            });
        }

        let default_param_group = ParamGroup::new(params.into_iter().collect());
        Ok(SgdOptimizer {
            param_groups: vec![default_param_group],
            lr,
            momentum,
            weight_decay,
            nesterov,
            momentum_buffers: HashMap::new(),
        })
    }

    /// Momentum buffer of a parameter, if a momentum step has touched it.
    pub fn momentum_buffer(&self, param: &Value) -> Option<f64> {
        self.momentum_buffers
            .get(&param.id())
            .map(|(_, buffer)| *buffer)
    }

    /// Drops buffers of parameters that are no longer in any group.
    fn prune_momentum_buffers(&mut self) {
        if self.momentum_buffers.is_empty() {
            return;
        }
        let live: HashSet<NodeId> = self
            .param_groups
            .iter()
            .flat_map(|group| group.params.iter().map(Value::id))
            .collect();
        let before = self.momentum_buffers.len();
        self.momentum_buffers.retain(|id, _| live.contains(id));
        let pruned = before - self.momentum_buffers.len();
        if pruned > 0 {
            log::debug!("SgdOptimizer: dropped {} stale momentum buffer(s)", pruned);
        }
    }
}

fn check_non_negative(name: &str, value: f64) -> Result<(), NapagradError> {
    if value.is_nan() || value < 0.0 {
        return Err(NapagradError::InvalidArgument {
            name: name.to_string(),
            reason: format!("must be non-negative, got {}", value),
        });
    }
    Ok(())
}

impl Optimizer for SgdOptimizer {
    fn step(&mut self) -> Result<(), NapagradError> {
        self.prune_momentum_buffers();
        let mut updated = 0usize;
        for group in self.param_groups.iter() {
            let lr = group.options.lr.unwrap_or(self.lr);
            let weight_decay = group.options.weight_decay.unwrap_or(self.weight_decay);
            let momentum = group.options.momentum.unwrap_or(self.momentum);
            check_non_negative("lr", lr)?;
            check_non_negative("weight_decay", weight_decay)?;
            check_non_negative("momentum", momentum)?;

            for param in group.params.iter() {
                let value = param.value();
                let mut d_p = param.gradient();
                if weight_decay != 0.0 {
                    d_p += weight_decay * value;
                }

                let update = if momentum != 0.0 {
                    let (_, buffer) = self
                        .momentum_buffers
                        .entry(param.id())
                        .and_modify(|(_, b)| *b = momentum * *b + d_p)
                        .or_insert_with(|| (param.clone(), d_p));
                    if self.nesterov {
                        d_p + momentum * *buffer
                    } else {
                        *buffer
                    }
                } else {
                    d_p
                };

                param.set_value(value - lr * update);
                updated += 1;
            }
        }
        log::debug!(
            "SgdOptimizer::step: updated {} parameters in {} group(s)",
            updated,
            self.param_groups.len()
        );
        Ok(())
    }

    fn zero_grad(&mut self) {
        for group in self.param_groups.iter() {
            for param in group.params.iter() {
                param.set_gradient(0.0);
            }
        }
    }

    fn add_param_group(&mut self, param_group: ParamGroup) {
        self.param_groups.push(param_group);
    }

    fn param_groups(&self) -> &[ParamGroup] {
        &self.param_groups
    }

    fn param_groups_mut(&mut self) -> &mut [ParamGroup] {
        &mut self.param_groups
    }
}

#[cfg(test)]
#[path = "sgd_test.rs"]
mod tests;
