// src/nn/mod.rs
//! Neural-network building blocks composed from scalar [`Value`](crate::Value)s.
//!
//! Parameters are plain leaf values held by the modules; the engine knows
//! nothing about them. Training code reads their gradients after
//! `backward` and updates them, directly or through [`crate::optim`].

pub mod activation;
pub mod init;
pub mod layers;
pub mod losses;
pub mod mlp;
pub mod module;

// Re-export common items
pub use activation::Activation;
pub use layers::{Layer, Neuron};
pub use losses::{MseLoss, Reduction};
pub use mlp::Mlp;
pub use module::Module;
