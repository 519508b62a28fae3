use napagrad_core::Value;

/// Wraps raw numbers in fresh leaves.
#[allow(dead_code)]
pub fn leaves(xs: &[f64]) -> Vec<Value> {
    xs.iter().map(|&x| Value::new(x)).collect()
}

/// Squared error of a single prediction against a raw target.
#[allow(dead_code)]
pub fn squared_error(prediction: &Value, target: f64) -> Value {
    (prediction - target).pow(2.0)
}
