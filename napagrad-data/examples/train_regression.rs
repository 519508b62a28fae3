// examples/train_regression.rs
//!
//! Fits a 1 -> 8 -> 1 network to `y = sin(x)` with shuffled mini-batches,
//! SGD with momentum and gradient norm clipping.

use napagrad_core::nn::{init, Mlp, Module, MseLoss};
use napagrad_core::optim::{clip_grad_norm_, Optimizer, SgdOptimizer};
use napagrad_core::Value;
use napagrad_data::{DataLoader, RandomSampler, VecDataset};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let samples: Vec<(f64, f64)> = (0..64)
        .map(|i| {
            let x = -3.0 + 6.0 * i as f64 / 63.0;
            (x, x.sin())
        })
        .collect();
    let dataset = VecDataset::new(samples);

    let model = Mlp::seeded(&[1, 8, 1], 7)?;
    let (biases, weights): (Vec<_>, Vec<_>) = model
        .named_parameters()
        .into_iter()
        .partition(|(name, _)| name.ends_with("bias"));
    let weights: Vec<Value> = weights.into_iter().map(|(_, p)| p).collect();
    let biases: Vec<Value> = biases.into_iter().map(|(_, p)| p).collect();
    let mut rng = StdRng::seed_from_u64(7);
    init::normal_(&weights, 0.0, 0.5, &mut rng)?;
    init::zeros_(&biases);

    let params = model.parameters();
    let mut optimizer = SgdOptimizer::new(params.clone(), 0.05, 0.9, 0.0, false)?;
    let loss_fn = MseLoss::default();
    let mut loader = DataLoader::new(dataset, 16, RandomSampler::seeded(false, None, 7), false)?;

    let epochs = 100;
    for epoch in 0..epochs {
        let mut epoch_loss = 0.0;
        let mut batches = 0;
        for batch in &mut loader {
            let mut preds = Vec::new();
            let mut targets = Vec::new();
            for (x, y) in batch? {
                preds.push(model.predict(&[x])?);
                targets.push(Value::new(y));
            }
            let loss = loss_fn.calculate(&preds, &targets)?;
            optimizer.zero_grad();
            loss.backward()?;
            clip_grad_norm_(&params, 5.0)?;
            optimizer.step()?;

            epoch_loss += loss.value();
            batches += 1;
        }
        loader.reset();
        if (epoch + 1) % 10 == 0 {
            println!(
                "Epoch [{}/{}], Loss: {:.4}",
                epoch + 1,
                epochs,
                epoch_loss / batches as f64
            );
        }
    }

    for x in [-2.0, 0.0, 1.5] {
        let pred = model.predict(&[x])?;
        println!("sin({:>4}) = {:.4}, predicted {:.4}", x, f64::sin(x), pred.value());
    }
    Ok(())
}
