use super::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn test_neuron_creation() {
    let mut rng = StdRng::seed_from_u64(0);
    let neuron = Neuron::new(3, &mut rng);
    assert_eq!(neuron.weights().len(), 3);
    assert!(neuron.bias().is_leaf());
    for p in neuron.parameters() {
        assert!((-1.0..1.0).contains(&p.value()));
        assert_eq!(p.gradient(), 0.0);
    }
}

#[test]
fn test_neuron_forward() -> Result<(), NapagradError> {
    let neuron = Neuron::from_values(&[0.5, -1.0], 0.25);
    let out = neuron.activate(&[Value::new(1.0), Value::new(2.0)])?;
    assert_eq!(out.value(), 0.5 - 2.0 + 0.25);

    let via_module = neuron.forward(&[Value::new(1.0), Value::new(2.0)])?;
    assert_eq!(via_module.len(), 1);
    assert_eq!(via_module[0].value(), out.value());
    Ok(())
}

#[test]
fn test_neuron_gradients() -> Result<(), NapagradError> {
    let neuron = Neuron::from_values(&[0.5, -1.0], 0.25);
    let x = [Value::new(3.0), Value::new(-2.0)];
    let out = neuron.activate(&x)?;
    out.backward()?;
    assert_eq!(neuron.weights()[0].gradient(), 3.0);
    assert_eq!(neuron.weights()[1].gradient(), -2.0);
    assert_eq!(neuron.bias().gradient(), 1.0);
    assert_eq!(x[0].gradient(), 0.5);
    assert_eq!(x[1].gradient(), -1.0);
    Ok(())
}

#[test]
fn test_neuron_wrong_input_count() {
    let neuron = Neuron::from_values(&[1.0, 1.0, 1.0], 0.0);
    let err = neuron.activate(&[Value::new(1.0)]).unwrap_err();
    assert_eq!(
        err,
        NapagradError::InputSizeMismatch {
            operation: "Neuron::activate".to_string(),
            expected: 3,
            actual: 1,
        }
    );
}

#[test]
fn test_neuron_parameters() {
    let neuron = Neuron::from_values(&[1.0, 2.0, 3.0], 4.0);
    let params = neuron.parameters();
    assert_eq!(params.len(), 4);
    assert!(params[3].ptr_eq(neuron.bias()));
    let names: Vec<String> = neuron.named_parameters().into_iter().map(|(n, _)| n).collect();
    assert_eq!(names, vec!["weights.0", "weights.1", "weights.2", "bias"]);
}

#[test]
fn test_zero_input_neuron_is_bias() -> Result<(), NapagradError> {
    let neuron = Neuron::from_values(&[], 1.5);
    let out = neuron.activate(&[])?;
    assert!(out.ptr_eq(neuron.bias()));
    Ok(())
}
