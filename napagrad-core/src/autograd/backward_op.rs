//! Per-operation backward rules.
//!
//! Each rule receives the node's own forward value, its finalized incoming
//! gradient `g` and its operand edges, and *adds* the local chain-rule
//! contribution into every operand:
//!
//! | Op   | Contribution                                   |
//! |------|------------------------------------------------|
//! | Add  | `a += g`, `b += g`                             |
//! | Sub  | `a += g`, `b -= g`                             |
//! | Mul  | `a += b.value * g`, `b += a.value * g`         |
//! | Pow  | `a += b.value * a.value^(b.value - 1) * g`     |
//! | Exp  | `a += out * g`                                 |
//! | Tanh | `a += (1 - out^2) * g`                         |
//! | Relu | `a += g` if `a.value > 0`                      |
//!
//! Rules run once per edge, so an operand appearing twice (`x * x`) receives
//! both contributions.

use super::Op;
use crate::error::NapagradError;
use crate::value::Value;

impl Op {
    /// Applies this operation's backward rule.
    ///
    /// # Arguments
    /// * `out`: forward value of the node being processed.
    /// * `grad`: gradient of the backward root with respect to that node.
    /// * `operands`: the node's operand edges.
    ///
    /// # Errors
    /// Returns [`NapagradError::MalformedNode`] if `operands` does not match
    /// [`Op::arity`]. Nothing is accumulated in that case.
    pub(crate) fn backward(self, out: f64, grad: f64, operands: &[Value]) -> Result<(), NapagradError> {
        match (self, operands) {
            (Op::Leaf, []) => {}
            (Op::Add, [a, b]) => {
                a.accumulate_gradient(grad);
                b.accumulate_gradient(grad);
            }
            (Op::Sub, [a, b]) => {
                a.accumulate_gradient(grad);
                b.accumulate_gradient(-grad);
            }
            (Op::Mul, [a, b]) => {
                // Read both values before writing either; `a` and `b` may be the same node.
                let (av, bv) = (a.value(), b.value());
                a.accumulate_gradient(bv * grad);
                b.accumulate_gradient(av * grad);
            }
            (Op::Pow, [base, exponent]) => {
                let (x, n) = (base.value(), exponent.value());
                base.accumulate_gradient(n * x.powf(n - 1.0) * grad);
            }
            (Op::Exp, [a]) => a.accumulate_gradient(out * grad),
            (Op::Tanh, [a]) => a.accumulate_gradient((1.0 - out * out) * grad),
            (Op::Relu, [a]) => {
                if a.value() > 0.0 {
                    a.accumulate_gradient(grad);
                }
            }
            (op, operands) => {
                return Err(NapagradError::MalformedNode {
                    op,
                    expected: op.arity(),
                    actual: operands.len(),
                })
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "backward_op_test.rs"]
mod tests;
