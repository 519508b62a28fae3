//! Autograd: operation tags, per-operation backward rules and graph traversal.
//!
//! The forward pass lives on [`Value`](crate::Value) itself; this module holds
//! what the backward pass needs: the closed [`Op`] set with its rule table
//! ([`backward_op`]), topological ordering ([`graph`]) and finite-difference
//! gradient checking ([`grad_check`]).

pub mod backward_op;
pub mod grad_check;
pub mod graph;
pub mod op;

pub use op::Op;
