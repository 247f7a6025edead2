//! Forward pass of a tiny two-layer network built only from `Matrix` ops.
//!
//! Run with `REDEEM_LOG=trace cargo run --example dense_forward` to see the
//! product shapes logged by the library.

use anyhow::{Context, Result};
use log::LevelFilter;

use redeem_matrix::{InitConfig, InitType, Matrix};

fn sigmoid(m: &Matrix<f64>) -> Matrix<f64> {
    m.map(|&v, _, _| 1.0 / (1.0 + (-v).exp()))
}

fn dense(weights: &Matrix<f64>, bias: &Matrix<f64>, input: &Matrix<f64>) -> Result<Matrix<f64>> {
    let z = weights
        .product(input)
        .context("weights and input are not compatible")?;
    z.add(bias).context("bias does not match layer output")
}

fn main() -> Result<()> {
    env_logger::Builder::default()
        .filter_level(LevelFilter::Error)
        .parse_env(env_logger::Env::default().filter_or("REDEEM_LOG", "error,redeem_matrix=info"))
        .init();

    let init = InitConfig::new(Some(42), InitType::Float { min: -1.0, max: 1.0 });

    // 3 inputs -> 4 hidden -> 2 outputs
    let w1 = Matrix::<f64>::new(3, 4)?.randomize_from_config(&init)?;
    let b1 = Matrix::<f64>::new(1, 4)?.fill(0.1);
    let w2 = Matrix::<f64>::new(4, 2)?.randomize_from_config(&init)?;
    let b2 = Matrix::<f64>::new(1, 2)?;

    let input = Matrix::from_array(&[0.5, -1.5, 2.0])?;

    let hidden = sigmoid(&dense(&w1, &b1, &input)?);
    let output = sigmoid(&dense(&w2, &b2, &hidden)?);

    log::info!("hidden activations: {:?}", hidden.to_array());
    println!("output:");
    output.display();

    // Row-vector form of the same first layer via transposes.
    let hidden_t = input.transpose().product(&w1.transpose())?;
    let hidden_t = sigmoid(&hidden_t.add(&b1.transpose())?);
    println!("first layer agrees with transposed form: {}", hidden_t.transpose() == hidden);

    // Shape errors surface as regular errors.
    if let Err(e) = dense(&w2, &b2, &input) {
        println!("expected failure: {:#}", e);
    }

    Ok(())
}
