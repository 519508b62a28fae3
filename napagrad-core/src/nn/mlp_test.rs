use super::*;
use crate::nn::losses::MseLoss;
use crate::nn::Neuron;

#[test]
fn test_mlp_creation() -> Result<(), NapagradError> {
    let mlp = Mlp::seeded(&[2, 3, 1], 0)?;
    assert_eq!(mlp.layers().len(), 2);
    assert_eq!(mlp.layers()[0].neurons().len(), 3);
    assert_eq!(mlp.layers()[0].neurons()[0].weights().len(), 2);
    assert_eq!(mlp.layers()[1].neurons().len(), 1);
    assert_eq!(mlp.layers()[1].neurons()[0].weights().len(), 3);
    assert_eq!(mlp.layers()[0].activation(), Activation::Tanh);
    assert_eq!(mlp.layers()[1].activation(), Activation::Identity);
    assert_eq!(mlp.num_inputs(), 2);
    assert_eq!(mlp.num_outputs(), 1);
    Ok(())
}

#[test]
fn test_mlp_rejects_too_few_sizes() {
    assert!(matches!(
        Mlp::seeded(&[3], 0),
        Err(NapagradError::InvalidArgument { .. })
    ));
    assert!(Mlp::seeded(&[], 0).is_err());
}

#[test]
fn test_mlp_parameters() -> Result<(), NapagradError> {
    let mlp = Mlp::seeded(&[2, 3, 1], 0)?;
    // (2*3 + 3) + (3*1 + 1)
    assert_eq!(mlp.parameters().len(), 13);
    assert_eq!(mlp.num_parameters(), 13);
    let names: Vec<String> = mlp.named_parameters().into_iter().map(|(n, _)| n).collect();
    assert_eq!(names[0], "layers.0.neurons.0.weights.0");
    assert_eq!(names[12], "layers.1.neurons.0.bias");
    Ok(())
}

#[test]
fn test_seeded_networks_are_identical() -> Result<(), NapagradError> {
    let a = Mlp::seeded(&[2, 4, 1], 11)?;
    let b = Mlp::seeded(&[2, 4, 1], 11)?;
    let c = Mlp::seeded(&[2, 4, 1], 12)?;
    assert_eq!(a.state_dict(), b.state_dict());
    assert_ne!(a.state_dict(), c.state_dict());
    Ok(())
}

#[test]
fn test_mlp_forward() -> Result<(), NapagradError> {
    let mlp = Mlp::seeded(&[2, 3, 1], 5)?;
    let out = mlp.forward(&[Value::new(1.0), Value::new(2.0)])?;
    assert_eq!(out.len(), 1);
    let scalar = mlp.predict(&[1.0, 2.0])?;
    assert_eq!(scalar.value(), out[0].value());
    Ok(())
}

#[test]
fn test_mlp_forward_matches_hand_computation() -> Result<(), NapagradError> {
    let hidden = Layer::from_neurons(
        vec![Neuron::from_values(&[1.0, -1.0], 0.5), Neuron::from_values(&[0.5, 0.5], 0.0)],
        Activation::Tanh,
    )?;
    let output = Layer::from_neurons(vec![Neuron::from_values(&[2.0, -3.0], 1.0)], Activation::Identity)?;
    let mlp = Mlp::from_layers(vec![hidden, output])?;

    let (x1, x2): (f64, f64) = (0.3, -0.6);
    let h1 = (x1 - x2 + 0.5).tanh();
    let h2 = (0.5 * x1 + 0.5 * x2).tanh();
    let expected = 2.0 * h1 - 3.0 * h2 + 1.0;
    assert!((mlp.predict(&[x1, x2])?.value() - expected).abs() < 1e-12);
    Ok(())
}

#[test]
fn test_from_layers_rejects_disconnected() -> Result<(), NapagradError> {
    let mut rng = StdRng::seed_from_u64(0);
    let a = Layer::new(2, 3, Activation::Tanh, &mut rng);
    let b = Layer::new(4, 1, Activation::Identity, &mut rng);
    let err = Mlp::from_layers(vec![a, b]).unwrap_err();
    assert!(matches!(err, NapagradError::InputSizeMismatch { expected: 3, actual: 4, .. }));
    Ok(())
}

#[test]
fn test_forward_scalar_on_multi_output() -> Result<(), NapagradError> {
    let mlp = Mlp::seeded(&[2, 2], 0)?;
    let err = mlp.predict(&[1.0, 1.0]).unwrap_err();
    assert_eq!(err, NapagradError::NonScalarOutput { outputs: 2 });
    Ok(())
}

#[test]
fn test_mlp_wrong_input_count() -> Result<(), NapagradError> {
    let mlp = Mlp::seeded(&[3, 2, 1], 0)?;
    assert!(matches!(
        mlp.predict(&[1.0, 2.0]),
        Err(NapagradError::InputSizeMismatch { expected: 3, actual: 2, .. })
    ));
    Ok(())
}

#[test]
fn test_mlp_training_step() -> Result<(), NapagradError> {
    let mlp = Mlp::seeded(&[2, 3, 1], 1)?;
    let inputs = [Value::new(1.0), Value::new(2.0)];
    let target = Value::new(3.0);

    let output = mlp.forward_scalar(&inputs)?;
    let loss = (&output - &target).pow(2.0);
    loss.zero_grad();
    loss.backward()?;
    assert_eq!(loss.gradient(), 1.0);

    let old: Vec<f64> = mlp.parameters().iter().map(Value::value).collect();
    for param in mlp.parameters() {
        param.set_value(param.value() - 0.1 * param.gradient());
    }
    let new: Vec<f64> = mlp.parameters().iter().map(Value::value).collect();
    assert!(old.iter().zip(&new).any(|(o, n)| o != n));
    Ok(())
}

#[test]
fn test_state_dict_round_trip() -> Result<(), NapagradError> {
    let trained = Mlp::seeded(&[2, 3, 1], 1)?;
    let fresh = Mlp::seeded(&[2, 3, 1], 2)?;
    let x = [0.7, -0.2];
    assert_ne!(trained.predict(&x)?.value(), fresh.predict(&x)?.value());

    fresh.load_state_dict(&trained.state_dict())?;
    assert_eq!(trained.predict(&x)?.value(), fresh.predict(&x)?.value());
    Ok(())
}

#[test]
fn test_load_state_dict_missing_key_writes_nothing() -> Result<(), NapagradError> {
    let mlp = Mlp::seeded(&[1, 1], 3)?;
    let before = mlp.state_dict();
    let partial = vec![("layers.0.neurons.0.weights.0".to_string(), 9.0)];
    let err = mlp.load_state_dict(&partial).unwrap_err();
    assert_eq!(err, NapagradError::MissingParameter("layers.0.neurons.0.bias".to_string()));
    assert_eq!(mlp.state_dict(), before);
    Ok(())
}

#[test]
fn test_load_parameter_values() -> Result<(), NapagradError> {
    let mlp = Mlp::seeded(&[1, 1], 3)?;
    mlp.load_parameter_values(&[2.0, -1.0])?;
    assert_eq!(mlp.predict(&[3.0])?.value(), 5.0);
    assert!(mlp.load_parameter_values(&[1.0]).is_err());
    Ok(())
}

#[test]
fn test_squared_error_loss_with_mse_module() -> Result<(), NapagradError> {
    let mlp = Mlp::seeded(&[2, 3, 1], 9)?;
    let out = mlp.predict(&[1.0, 2.0])?;
    let manual = (&out - 3.0).pow(2.0);
    let via_module = MseLoss::default().calculate(&[out], &[Value::new(3.0)])?;
    assert!((manual.value() - via_module.value()).abs() < 1e-12);
    Ok(())
}
