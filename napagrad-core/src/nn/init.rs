//! In-place initialisation of parameter values.
//!
//! Every function overwrites the `value` of each given leaf and leaves its
//! gradient untouched.

use crate::error::NapagradError;
use crate::value::Value;
use rand::distributions::{Distribution, Uniform};
use rand::Rng;
use rand_distr::Normal;

/// Fills every parameter with `value`.
pub fn fill_(params: &[Value], value: f64) {
    for param in params {
        param.set_value(value);
    }
}

/// Fills every parameter with 0.
pub fn zeros_(params: &[Value]) {
    fill_(params, 0.0)
}

/// Fills every parameter with 1.
pub fn ones_(params: &[Value]) {
    fill_(params, 1.0)
}

/// Draws every parameter from `U(low, high)`.
///
/// # Errors
/// [`NapagradError::InvalidArgument`] unless `low < high` and both are finite.
pub fn uniform_<R: Rng + ?Sized>(
    params: &[Value],
    low: f64,
    high: f64,
    rng: &mut R,
) -> Result<(), NapagradError> {
    if !(low.is_finite() && high.is_finite() && low < high) {
        return Err(NapagradError::InvalidArgument {
            name: "low/high".to_string(),
            reason: format!("uniform_ needs finite low < high, got [{}, {})", low, high),
        });
    }
    let dist = Uniform::new(low, high);
    for param in params {
        param.set_value(dist.sample(rng));
    }
    Ok(())
}

/// Draws every parameter from `N(mean, std^2)`.
///
/// # Errors
/// [`NapagradError::InvalidArgument`] if `std` is negative or not finite.
pub fn normal_<R: Rng + ?Sized>(
    params: &[Value],
    mean: f64,
    std: f64,
    rng: &mut R,
) -> Result<(), NapagradError> {
    if !(std >= 0.0 && std.is_finite()) {
        return Err(NapagradError::InvalidArgument {
            name: "std".to_string(),
            reason: format!("normal_ needs a finite, non-negative std, got {}", std),
        });
    }
    let dist = Normal::new(mean, std).map_err(|e| NapagradError::InvalidArgument {
        name: "mean".to_string(),
        reason: e.to_string(),
    })?;
    for param in params {
        param.set_value(dist.sample(rng));
    }
    Ok(())
}

#[cfg(test)]
#[path = "init_test.rs"]
mod tests;
