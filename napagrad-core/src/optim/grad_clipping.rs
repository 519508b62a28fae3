use crate::error::NapagradError;
use crate::value::Value;

/// Clips the gradient of each parameter in place to `[-clip_value, clip_value]`.
///
/// # Errors
///
/// Returns `NapagradError::InvalidArgument` if `clip_value` is negative or NaN.
pub fn clip_grad_value_(parameters: &[Value], clip_value: f64) -> Result<(), NapagradError> {
    if clip_value.is_nan() || clip_value < 0.0 {
        return Err(NapagradError::InvalidArgument {
            name: "clip_value".to_string(),
            reason: "must be non-negative".to_string(),
        });
    }
    for param in parameters {
        let grad = param.gradient();
        if !grad.is_nan() {
            param.set_gradient(grad.clamp(-clip_value, clip_value));
        }
    }
    Ok(())
}

/// Clips the global L2 norm of the gradients of `parameters` in place.
///
/// The gradients are viewed as a single vector. If its norm exceeds
/// `max_norm`, every gradient is scaled by `max_norm / (norm + 1e-6)`.
/// A parameter listed twice counts twice in the norm but is scaled once.
///
/// Returns the norm measured before clipping. A NaN or infinite norm is
/// returned as-is and the gradients are left alone.
///
/// # Errors
///
/// Returns `NapagradError::InvalidArgument` if `max_norm` is negative or NaN.
pub fn clip_grad_norm_(parameters: &[Value], max_norm: f64) -> Result<f64, NapagradError> {
    if max_norm.is_nan() || max_norm < 0.0 {
        return Err(NapagradError::InvalidArgument {
            name: "max_norm".to_string(),
            reason: "must be non-negative".to_string(),
        });
    }

    let total_norm = parameters
        .iter()
        .map(|p| p.gradient().powi(2))
        .sum::<f64>()
        .sqrt();

    if !total_norm.is_finite() {
        log::warn!(
            "clip_grad_norm_: total gradient norm is {}, gradients left unclipped",
            total_norm
        );
        return Ok(total_norm);
    }

    if total_norm > max_norm {
        let clip_coef = max_norm / (total_norm + 1e-6);
        let mut seen = std::collections::HashSet::new();
        for param in parameters {
            if seen.insert(param.id()) {
                param.set_gradient(param.gradient() * clip_coef);
            }
        }
        log::debug!(
            "clip_grad_norm_: norm {} clipped to {} (coefficient {})",
            total_norm,
            max_norm,
            clip_coef
        );
    }
    Ok(total_norm)
}

#[cfg(test)]
#[path = "grad_clipping_test.rs"]
mod tests;
