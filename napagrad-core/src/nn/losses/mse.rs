use crate::error::NapagradError;
use crate::value::Value;
use std::fmt;
use std::str::FromStr;

/// Specifies the reduction to apply to the summed squared errors:
/// `"mean"` or `"sum"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Reduction {
    #[default]
    Mean,
    Sum,
}

impl FromStr for Reduction {
    type Err = NapagradError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "mean" => Ok(Reduction::Mean),
            "sum" => Ok(Reduction::Sum),
            _ => Err(NapagradError::UnsupportedOperation(format!(
                "Unsupported reduction type: {}",
                s
            ))),
        }
    }
}

impl fmt::Display for Reduction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reduction::Mean => write!(f, "mean"),
            Reduction::Sum => write!(f, "sum"),
        }
    }
}

/// Mean squared error between predictions and targets.
///
/// The loss is an ordinary graph expression built from `Sub`, `Pow` and `Add`
/// (and a `Mul` by `1/n` for [`Reduction::Mean`]), so calling `backward` on it
/// reaches the predictions and anything they were computed from.
#[derive(Debug, Clone, Default)]
pub struct MseLoss {
    reduction: Reduction,
}

impl MseLoss {
    pub fn new(reduction: Reduction) -> Self {
        MseLoss { reduction }
    }

    pub fn reduction(&self) -> Reduction {
        self.reduction
    }

    /// # Errors
    /// * [`NapagradError::InputSizeMismatch`] if the slices differ in length.
    /// * [`NapagradError::InvalidArgument`] if they are empty.
    pub fn calculate(&self, predictions: &[Value], targets: &[Value]) -> Result<Value, NapagradError> {
        if predictions.len() != targets.len() {
            return Err(NapagradError::InputSizeMismatch {
                operation: "MseLoss calculate".to_string(),
                expected: targets.len(),
                actual: predictions.len(),
            });
        }
        if predictions.is_empty() {
            return Err(NapagradError::InvalidArgument {
                name: "predictions".to_string(),
                reason: "cannot compute a loss over zero samples".to_string(),
            });
        }

        let total: Value = predictions
            .iter()
            .zip(targets)
            .map(|(p, t)| (p - t).pow(2.0))
            .sum();

        let loss = match self.reduction {
            Reduction::Mean => total * (1.0 / predictions.len() as f64),
            Reduction::Sum => total,
        };
        log::trace!("MseLoss({}): {} samples, loss {}", self.reduction, predictions.len(), loss.value());
        Ok(loss)
    }
}

#[cfg(test)]
#[path = "mse_test.rs"]
mod tests;
