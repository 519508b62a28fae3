use std::fmt;

/// The operation that produced a node. `Leaf` for inputs, parameters and constants.
///
/// The set is closed: composite operations (division, negation) are expressed
/// through these tags rather than adding new ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Op {
    Leaf,
    Add,
    Sub,
    Mul,
    /// Base and exponent are both operands; the exponent gets no gradient.
    Pow,
    Exp,
    Tanh,
    Relu,
}

impl Op {
    /// Number of operand edges a node with this tag must have.
    pub fn arity(self) -> usize {
        match self {
            Op::Leaf => 0,
            Op::Exp | Op::Tanh | Op::Relu => 1,
            Op::Add | Op::Sub | Op::Mul | Op::Pow => 2,
        }
    }

    pub fn is_leaf(self) -> bool {
        self == Op::Leaf
    }

    /// Short symbol used when rendering graphs. Empty for leaves.
    pub fn symbol(self) -> &'static str {
        match self {
            Op::Leaf => "",
            Op::Add => "+",
            Op::Sub => "-",
            Op::Mul => "*",
            Op::Pow => "pow",
            Op::Exp => "exp",
            Op::Tanh => "tanh",
            Op::Relu => "relu",
        }
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Op::Leaf => f.write_str("leaf"),
            other => f.write_str(other.symbol()),
        }
    }
}
