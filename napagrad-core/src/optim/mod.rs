//! Optimizers for training networks built from [`Value`](crate::Value) parameters.
//!
//! The engine only computes gradients. Everything here reads them after a
//! backward pass and writes new parameter values through
//! [`Value::set_value`](crate::Value::set_value).

pub mod grad_clipping;
pub mod optimizer_trait;
pub mod param_group;
pub mod sgd;

pub use grad_clipping::{clip_grad_norm_, clip_grad_value_};
pub use optimizer_trait::Optimizer;
pub use param_group::{ParamGroup, ParamGroupOptions};
pub use sgd::SgdOptimizer;
