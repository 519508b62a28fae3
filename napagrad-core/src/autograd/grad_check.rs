use crate::error::NapagradError;
use crate::value::Value;
use approx::relative_eq;
use thiserror::Error;

/// Error type specifically for gradient checking failures.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GradCheckError {
    #[error("Gradient check failed for input {input_index}: analytical grad {analytical_grad} != numerical grad {numerical_grad} (difference {difference})")]
    GradientMismatch {
        input_index: usize,
        analytical_grad: f64,
        numerical_grad: f64,
        difference: f64,
    },

    #[error("Backward pass execution failed during gradient check: {0}")]
    BackwardPassError(NapagradError),

    #[error("Numerical gradient is NaN or infinite for input {input_index}. Loss+: {loss_plus}, Loss-: {loss_minus}")]
    NumericalGradNaNOrInfinite {
        input_index: usize,
        loss_plus: f64,
        loss_minus: f64,
    },

    #[error("Analytical gradient is NaN or infinite for input {input_index}. Value: {value}")]
    AnalyticalGradNaNOrInfinite { input_index: usize, value: f64 },

    #[error("Invalid epsilon for gradient check: {0}")]
    InvalidEpsilon(f64),
}

impl From<NapagradError> for GradCheckError {
    fn from(err: NapagradError) -> Self {
        GradCheckError::BackwardPassError(err)
    }
}

/// Checks analytical gradients against numerical gradients using central differences.
///
/// `func` builds a scalar expression from leaf nodes. It is called once on
/// fresh leaves holding `inputs` to obtain analytical gradients through
/// [`Value::backward`], then twice per input with that input shifted by
/// `±epsilon`.
///
/// Gradients are accepted when they agree within `tolerance`, absolute or relative.
pub fn check_grad<F>(func: F, inputs: &[f64], epsilon: f64, tolerance: f64) -> Result<(), GradCheckError>
where
    F: Fn(&[Value]) -> Value,
{
    if !(epsilon > 0.0 && epsilon.is_finite()) {
        return Err(GradCheckError::InvalidEpsilon(epsilon));
    }

    // --- 1. Analytical gradients ---
    let leaves: Vec<Value> = inputs.iter().map(|&x| Value::new(x)).collect();
    let output = func(&leaves);
    output.zero_grad();
    output.backward()?;
    let analytical: Vec<f64> = leaves.iter().map(Value::gradient).collect();

    let evaluate = |values: &[f64]| -> f64 {
        let leaves: Vec<Value> = values.iter().map(|&x| Value::new(x)).collect();
        func(&leaves).value()
    };

    // --- 2. Numerical gradients, one input at a time ---
    for (i, &analytical_grad) in analytical.iter().enumerate() {
        let mut shifted = inputs.to_vec();
        shifted[i] = inputs[i] + epsilon;
        let loss_plus = evaluate(&shifted);
        shifted[i] = inputs[i] - epsilon;
        let loss_minus = evaluate(&shifted);

        let numerical_grad = (loss_plus - loss_minus) / (2.0 * epsilon);

        if !numerical_grad.is_finite() {
            return Err(GradCheckError::NumericalGradNaNOrInfinite {
                input_index: i,
                loss_plus,
                loss_minus,
            });
        }
        if !analytical_grad.is_finite() {
            return Err(GradCheckError::AnalyticalGradNaNOrInfinite {
                input_index: i,
                value: analytical_grad,
            });
        }

        let close = relative_eq!(
            analytical_grad,
            numerical_grad,
            epsilon = tolerance,
            max_relative = tolerance
        );
        if !close {
            return Err(GradCheckError::GradientMismatch {
                input_index: i,
                analytical_grad,
                numerical_grad,
                difference: (analytical_grad - numerical_grad).abs(),
            });
        }
        log::trace!(
            "check_grad: input {} ok (analytical {}, numerical {})",
            i,
            analytical_grad,
            numerical_grad
        );
    }

    Ok(())
}

#[cfg(test)]
#[path = "grad_check_test.rs"]
mod tests;
