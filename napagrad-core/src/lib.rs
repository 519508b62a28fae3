//! # napagrad-core
//!
//! A reverse-mode automatic differentiation engine over scalar values, and a
//! small multi-layer perceptron built on top of it.
//!
//! The graph is built during the forward pass: every arithmetic or activation
//! call on a [`Value`] returns a fresh node that remembers its operands and the
//! [`Op`] that produced it. [`Value::backward`] then walks the graph in reverse
//! topological order and accumulates gradients into every reachable node.
//!
//! ```
//! use napagrad_core::Value;
//!
//! let a = Value::new(2.0);
//! let b = Value::new(3.0);
//! let d = Value::new(4.0);
//! let c = (&a + &b) * &d;
//! c.zero_grad();
//! c.backward().unwrap();
//! assert_eq!(c.value(), 20.0);
//! assert_eq!(a.gradient(), 4.0);
//! assert_eq!(d.gradient(), 5.0);
//! ```

pub mod autograd;
pub mod error;
pub mod nn;
pub mod optim;
pub mod value;
pub mod visualization;

pub use autograd::Op;
pub use error::NapagradError;
pub use value::{NodeId, Value};
