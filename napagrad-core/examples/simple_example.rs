// examples/simple_example.rs
//!
//! One forward pass, one backward pass and one manual gradient step on a
//! 2 -> 4 -> 1 network.

use napagrad_core::nn::{Mlp, Module};
use napagrad_core::Value;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let model = Mlp::seeded(&[2, 4, 1], 0)?;
    let x = [Value::new(1.0), Value::new(2.0)];

    let output = model.forward_scalar(&x)?;
    println!("Network output: {}", output.value());

    let target = Value::new(3.0);
    let loss = (&output - &target).pow(2.0);
    println!("Loss: {}", loss.value());

    loss.zero_grad();
    loss.backward()?;

    let first = &model.layers()[0].neurons()[0];
    println!("Gradient of first weight in first neuron: {}", first.weights()[0].gradient());
    println!("Gradient of bias in first neuron: {}", first.bias().gradient());

    let learning_rate = 0.01;
    for param in model.parameters() {
        param.set_value(param.value() - learning_rate * param.gradient());
    }

    // The old graph keeps the values it was computed with; run a new forward pass.
    let new_output = model.forward_scalar(&x)?;
    let new_loss = (&new_output - &target).pow(2.0);
    println!("After one gradient step - Loss: {}", new_loss.value());
    println!("Network output after update: {}", new_output.value());
    Ok(())
}
