// examples/house_price_prediction.rs
//!
//! Predicts a house price from size and age with a 2 -> 3 -> 1 network,
//! writes the computation graph before and after backpropagation as
//! Graphviz DOT files, then trains with SGD using a separate learning rate
//! for the biases.
//!
//! Render the graphs with e.g. `dot -Tsvg house_price_after_backprop.dot`.

use napagrad_core::nn::{Mlp, Module};
use napagrad_core::optim::{Optimizer, ParamGroup, ParamGroupOptions, SgdOptimizer};
use napagrad_core::visualization::{write_dot, RankDir};
use napagrad_core::Value;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Creating neural network: 2 inputs -> 3 hidden neurons -> 1 output");
    let model = Mlp::seeded(&[2, 3, 1], 2024)?;

    let size = Value::with_label(2.0, "house_size"); // 1000 sq ft
    let age = Value::with_label(0.5, "house_age"); // decades
    let inputs = [size, age];
    let target = Value::with_label(1.8, "actual_price"); // $100k

    let output = model.forward_scalar(&inputs)?;
    output.set_label("prediction");
    let loss = (&output - &target).pow(2.0);
    loss.set_label("loss");
    println!("Network prediction: ${:.2} (in $100k)", output.value());
    println!("Loss (squared error): {:.4}", loss.value());

    write_dot(&loss, RankDir::LeftRight, "house_price_before_backprop.dot")?;
    println!("Graph saved as 'house_price_before_backprop.dot'");

    loss.zero_grad();
    loss.backward()?;
    let first = &model.layers()[0].neurons()[0];
    println!("First weight gradient: {:.6}", first.weights()[0].gradient());
    println!("First bias gradient: {:.6}", first.bias().gradient());

    write_dot(&loss, RankDir::LeftRight, "house_price_after_backprop.dot")?;
    println!("Graph saved as 'house_price_after_backprop.dot'");

    // Weights and biases in separate groups.
    let mut weights = Vec::new();
    let mut biases = Vec::new();
    for (name, param) in model.named_parameters() {
        if name.ends_with(".bias") {
            biases.push(param);
        } else {
            weights.push(param);
        }
    }
    let base_lr = 0.1;
    let mut optimizer = SgdOptimizer::new(weights, base_lr, 0.0, 0.0, false)?;
    optimizer.add_param_group(ParamGroup::with_options(
        biases,
        ParamGroupOptions {
            lr: Some(base_lr * 0.5),
            ..Default::default()
        },
    ));

    let mut last = loss;
    for step in 0..5 {
        let prediction = model.forward_scalar(&inputs)?;
        let step_loss = (&prediction - &target).pow(2.0);
        optimizer.zero_grad();
        step_loss.backward()?;
        optimizer.step()?;
        println!(
            "Step {}: Loss = {:.4}, Prediction = ${:.2}",
            step + 1,
            step_loss.value(),
            prediction.value()
        );
        last = step_loss;
    }

    write_dot(&last, RankDir::TopBottom, "house_price_final.dot")?;
    println!("Final graph saved as 'house_price_final.dot'");
    Ok(())
}
