use crate::error::NapagradError;
use crate::value::Value;
use std::fmt;
use std::str::FromStr;

/// Non-linearity applied to the outputs of a [`Layer`](crate::nn::Layer).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Activation {
    /// No activation; the output node is the neuron's sum itself.
    Identity,
    #[default]
    Tanh,
    Relu,
}

impl Activation {
    pub fn apply(self, x: Value) -> Value {
        match self {
            Activation::Identity => x,
            Activation::Tanh => x.tanh(),
            Activation::Relu => x.relu(),
        }
    }
}

impl FromStr for Activation {
    type Err = NapagradError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "identity" | "linear" | "none" => Ok(Activation::Identity),
            "tanh" => Ok(Activation::Tanh),
            "relu" => Ok(Activation::Relu),
            _ => Err(NapagradError::UnsupportedOperation(format!(
                "Unsupported activation: {}",
                s
            ))),
        }
    }
}

impl fmt::Display for Activation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Activation::Identity => "identity",
            Activation::Tanh => "tanh",
            Activation::Relu => "relu",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::autograd::Op;

    #[test]
    fn test_apply() {
        let x = Value::new(-0.5);
        assert!(Activation::Identity.apply(x.clone()).ptr_eq(&x));
        assert_eq!(Activation::Tanh.apply(x.clone()).op(), Op::Tanh);
        assert_eq!(Activation::Relu.apply(x.clone()).value(), 0.0);
    }

    #[test]
    fn test_from_str_round_trip() -> Result<(), NapagradError> {
        for act in [Activation::Identity, Activation::Tanh, Activation::Relu] {
            assert_eq!(act.to_string().parse::<Activation>()?, act);
        }
        assert_eq!("ReLU".parse::<Activation>()?, Activation::Relu);
        assert!(matches!(
            "sigmoid".parse::<Activation>(),
            Err(NapagradError::UnsupportedOperation(_))
        ));
        Ok(())
    }
}
