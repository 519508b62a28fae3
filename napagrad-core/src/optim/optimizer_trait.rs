use super::param_group::ParamGroup;
use crate::error::NapagradError;

/// Trait defining the common interface for all optimizers.
///
/// Optimizers are responsible for updating model parameters based on their gradients.
pub trait Optimizer {
    /// Performs a single optimization step.
    ///
    /// Applies the update rule to every parameter of every group, using the
    /// gradients accumulated by the last backward pass.
    fn step(&mut self) -> Result<(), NapagradError>;

    /// Clears the gradients of all parameters managed by the optimizer.
    ///
    /// Call it before each backward pass; gradients accumulate otherwise.
    fn zero_grad(&mut self);

    /// Adds a new parameter group with its own hyperparameters.
    fn add_param_group(&mut self, param_group: ParamGroup);

    fn param_groups(&self) -> &[ParamGroup];

    /// Mutable access to the groups, e.g. to change a learning rate between epochs.
    fn param_groups_mut(&mut self) -> &mut [ParamGroup];
}
