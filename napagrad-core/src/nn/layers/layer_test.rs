use super::*;
use approx::assert_relative_eq;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn test_layer_creation() {
    let mut rng = StdRng::seed_from_u64(1);
    let layer = Layer::new(2, 3, Activation::Tanh, &mut rng);
    assert_eq!(layer.neurons().len(), 3);
    assert_eq!(layer.num_inputs(), 2);
    assert_eq!(layer.num_outputs(), 3);
    assert!(layer.neurons().iter().all(|n| n.num_inputs() == 2));
}

#[test]
fn test_layer_forward_applies_activation() -> Result<(), NapagradError> {
    let neurons = vec![
        Neuron::from_values(&[1.0, 1.0], 0.0),
        Neuron::from_values(&[-1.0, 0.0], 0.0),
    ];
    let inputs = [Value::new(0.25), Value::new(0.5)];

    let tanh_layer = Layer::from_neurons(neurons.clone(), Activation::Tanh)?;
    let out = tanh_layer.forward(&inputs)?;
    assert_eq!(out.len(), 2);
    assert_relative_eq!(out[0].value(), 0.75f64.tanh());
    assert_relative_eq!(out[1].value(), (-0.25f64).tanh());

    let relu_layer = Layer::from_neurons(neurons, Activation::Relu)?;
    let out = relu_layer.forward(&inputs)?;
    assert_eq!(out[0].value(), 0.75);
    assert_eq!(out[1].value(), 0.0);
    Ok(())
}

#[test]
fn test_layer_parameters() {
    let mut rng = StdRng::seed_from_u64(2);
    let layer = Layer::new(2, 3, Activation::Identity, &mut rng);
    assert_eq!(layer.parameters().len(), 3 * 3);
    let named = layer.named_parameters();
    assert_eq!(named[0].0, "neurons.0.weights.0");
    assert_eq!(named[2].0, "neurons.0.bias");
    assert_eq!(named[8].0, "neurons.2.bias");
    for ((_, a), b) in named.iter().zip(layer.parameters()) {
        assert!(a.ptr_eq(&b));
    }
}

#[test]
fn test_layer_rejects_wrong_input_count() {
    let mut rng = StdRng::seed_from_u64(3);
    let layer = Layer::new(4, 2, Activation::Tanh, &mut rng);
    let err = layer.forward(&[Value::new(1.0)]).unwrap_err();
    assert!(matches!(err, NapagradError::InputSizeMismatch { expected: 4, actual: 1, .. }));
}

#[test]
fn test_from_neurons_rejects_ragged() {
    let neurons = vec![
        Neuron::from_values(&[1.0, 1.0], 0.0),
        Neuron::from_values(&[1.0], 0.0),
    ];
    assert!(Layer::from_neurons(neurons, Activation::Tanh).is_err());
}

#[test]
fn test_module_zero_grad_resets_parameters() -> Result<(), NapagradError> {
    let mut rng = StdRng::seed_from_u64(4);
    let layer = Layer::new(2, 2, Activation::Tanh, &mut rng);
    let out = layer.forward(&[Value::new(1.0), Value::new(-1.0)])?;
    let total: Value = out.iter().sum();
    total.backward()?;
    assert!(layer.parameters().iter().any(|p| p.gradient() != 0.0));
    layer.zero_grad();
    assert!(layer.parameters().iter().all(|p| p.gradient() == 0.0));
    Ok(())
}
