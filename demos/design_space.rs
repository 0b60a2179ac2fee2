//! Builds two design variables, runs every operator form over them and
//! prints the resulting value/gradient/Hessian triples.
//!
//! Run with `cargo run --example design_space`.

use hessdual::{AdError, HessDual32};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::DEBUG)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let a = HessDual32::leaf(2.0, 2, 0, "a")?;
    let b = HessDual32::leaf(3.0, 2, 1, "b")?;
    println!("{a}\n");
    println!("{b}\n");

    let results = [
        ("a + b", a.try_add(&b)?),
        ("a - b", a.try_sub(&b)?),
        ("a * b", a.try_mul(&b)?),
        ("a / b", a.try_div(&b)?),
        ("a + 1", &a + 1.0),
        ("a - 1", &a - 1.0),
        ("a * 1", &a * 1.0),
        ("a / 1", a.try_div_scalar(1.0)?),
        ("1 + a", 1.0 + &a),
        ("1 - a", 1.0 - &a),
        ("1 * a", 1.0 * &a),
        ("1 / a", HessDual32::try_scalar_div(1.0, &a)?),
    ];
    for (label, r) in results {
        println!("{}\n", r.with_name(label));
    }

    // Rejected operations report which operator failed.
    let c = HessDual32::leaf(1.0, 3, 0, "c")?;
    match a.try_add(&c) {
        Err(e @ AdError::DimensionMismatch { .. }) => println!("a + c rejected: {e}"),
        other => println!("unexpected: {other:?}"),
    }
    if let Err(e) = a.try_div_scalar(0.0) {
        println!("a / 0 rejected: {e}");
    }

    Ok(())
}
