//! Forward operations on [`Value`]s.
//!
//! Every operation reads its operands' values, computes the result and returns
//! a brand-new node recording the operands and the [`Op`] tag. Operands are
//! never mutated. Bare `f64`s are wrapped in fresh leaf nodes first.

use super::Value;
use crate::autograd::Op;
use std::iter::Sum;
use std::ops::{Add, Div, Mul, Neg, Sub};

impl Value {
    fn binary(&self, rhs: &Value, op: Op, value: f64) -> Value {
        Value::from_op(value, vec![self.clone(), rhs.clone()], op)
    }

    fn unary(&self, op: Op, value: f64) -> Value {
        Value::from_op(value, vec![self.clone()], op)
    }

    /// `self ^ exponent`. The exponent becomes an operand node, but is treated
    /// as a constant by the backward pass: no gradient flows into it.
    ///
    /// A negative base with a non-integer exponent yields NaN.
    pub fn pow(&self, exponent: impl Into<Value>) -> Value {
        let exponent = exponent.into();
        let value = self.value().powf(exponent.value());
        self.binary(&exponent, Op::Pow, value)
    }

    /// `e ^ self`. Overflows to infinity for large inputs.
    pub fn exp(&self) -> Value {
        self.unary(Op::Exp, self.value().exp())
    }

    pub fn tanh(&self) -> Value {
        self.unary(Op::Tanh, self.value().tanh())
    }

    /// `max(0, self)`. NaN stays NaN.
    pub fn relu(&self) -> Value {
        let x = self.value();
        let out = if x > 0.0 || x.is_nan() { x } else { 0.0 };
        self.unary(Op::Relu, out)
    }
}

// -----------------------------------------------------------------------------
// std::ops: &Value (op) &Value is the real implementation. Every other
// combination of Value / &Value / f64 forwards to it.
// -----------------------------------------------------------------------------

impl Add for &Value {
    type Output = Value;

    fn add(self, rhs: &Value) -> Value {
        self.binary(rhs, Op::Add, self.value() + rhs.value())
    }
}

impl Sub for &Value {
    type Output = Value;

    fn sub(self, rhs: &Value) -> Value {
        self.binary(rhs, Op::Sub, self.value() - rhs.value())
    }
}

impl Mul for &Value {
    type Output = Value;

    fn mul(self, rhs: &Value) -> Value {
        self.binary(rhs, Op::Mul, self.value() * rhs.value())
    }
}

impl Div for &Value {
    type Output = Value;

    /// `self * rhs^-1`
    fn div(self, rhs: &Value) -> Value {
        self * &rhs.pow(-1.0)
    }
}

impl Neg for &Value {
    type Output = Value;

    /// `self * -1`
    fn neg(self) -> Value {
        self * &Value::new(-1.0)
    }
}

impl Neg for Value {
    type Output = Value;

    fn neg(self) -> Value {
        -&self
    }
}

macro_rules! forward_binop {
    ($imp:ident, $method:ident) => {
        impl $imp<Value> for Value {
            type Output = Value;
            fn $method(self, rhs: Value) -> Value {
                (&self).$method(&rhs)
            }
        }

        impl $imp<&Value> for Value {
            type Output = Value;
            fn $method(self, rhs: &Value) -> Value {
                (&self).$method(rhs)
            }
        }

        impl $imp<Value> for &Value {
            type Output = Value;
            fn $method(self, rhs: Value) -> Value {
                self.$method(&rhs)
            }
        }

        impl $imp<f64> for &Value {
            type Output = Value;
            fn $method(self, rhs: f64) -> Value {
                self.$method(&Value::new(rhs))
            }
        }

        impl $imp<f64> for Value {
            type Output = Value;
            fn $method(self, rhs: f64) -> Value {
                (&self).$method(&Value::new(rhs))
            }
        }

        impl $imp<&Value> for f64 {
            type Output = Value;
            fn $method(self, rhs: &Value) -> Value {
                (&Value::new(self)).$method(rhs)
            }
        }

        impl $imp<Value> for f64 {
            type Output = Value;
            fn $method(self, rhs: Value) -> Value {
                (&Value::new(self)).$method(&rhs)
            }
        }
    };
}

forward_binop!(Add, add);
forward_binop!(Sub, sub);
forward_binop!(Mul, mul);
forward_binop!(Div, div);

impl Sum for Value {
    /// Left fold with ADD nodes, seeded with a `0.0` leaf.
    fn sum<I: Iterator<Item = Value>>(iter: I) -> Value {
        iter.fold(Value::new(0.0), |acc, v| &acc + &v)
    }
}

impl<'a> Sum<&'a Value> for Value {
    fn sum<I: Iterator<Item = &'a Value>>(iter: I) -> Value {
        iter.fold(Value::new(0.0), |acc, v| &acc + v)
    }
}

#[cfg(test)]
#[path = "arithmetic_test.rs"]
mod tests;
