//! Bottleneck Demo: Distance Between Random H₀ Diagrams
//!
//! Samples two degenerate persistence diagrams of 100 and 200 death times
//! uniformly in [0, 1000) and reports their bottleneck distance.
//!
//! ## Usage
//!
//! ```text
//! bottleneck_demo [SEED]
//! RUST_LOG=tda_bottleneck=trace bottleneck_demo 42
//! ```

use std::process::ExitCode;

use tda_bottleneck::{BottleneckDistance, SamplingConfig};
use tracing::{error, info};
use tracing_subscriber::{filter::LevelFilter, fmt, prelude::*, EnvFilter};

fn init_subscriber() {
    let fmt_layer = fmt::layer().with_target(true);

    let filter_layer = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy();

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .init();
}

fn main() -> ExitCode {
    init_subscriber();

    let mut config = SamplingConfig::default();
    if let Some(arg) = std::env::args().nth(1) {
        match arg.parse::<u64>() {
            Ok(seed) => config.seed = Some(seed),
            Err(e) => {
                error!("invalid seed {:?}: {}", arg, e);
                return ExitCode::FAILURE;
            }
        }
    }

    println!("═══════════════════════════════════════════════════════════════");
    println!("  H₀ Bottleneck Distance: Random Diagrams");
    println!("═══════════════════════════════════════════════════════════════\n");

    println!("Sampling Parameters:");
    println!("  |X| = {} death times", config.n_points_first);
    println!("  |Y| = {} death times", config.n_points_second);
    println!("  Range = [{:.1}, {:.1})", config.low, config.high);
    match config.seed {
        Some(seed) => println!("  Seed = {}", seed),
        None => println!("  Seed = (from OS)"),
    }
    println!();

    let mut rng = config.rng();
    let (x, y) = match config.sample_pair(&mut rng) {
        Ok(pair) => pair,
        Err(e) => {
            error!("sampling failed: {}", e);
            return ExitCode::FAILURE;
        }
    };
    info!(n_first = x.len(), n_second = y.len(), "diagrams sampled");

    let result = BottleneckDistance::compute_detailed(&x, &y);

    println!("Diagram Summary:");
    println!("  max death (X) = {:.4}", x.max_death());
    println!("  max death (Y) = {:.4}", y.max_death());
    println!();

    println!("══════════════════════════════════════════════════════════════");
    println!("  Results");
    println!("══════════════════════════════════════════════════════════════\n");

    println!("  d_B(X, Y)        = {:.6}", result.distance);
    println!("  resolved by      = {:?}", result.resolution);
    println!("  refinement steps = {}", result.iterations);
    println!("  working length   = {}", result.working_len);

    let reverse = BottleneckDistance::compute(&y, &x);
    if reverse == result.distance {
        println!("\n  ✓ Symmetric: d_B(Y, X) = {:.6}", reverse);
    } else {
        println!("\n  × Asymmetric: d_B(Y, X) = {:.6}", reverse);
    }

    println!("\n═══════════════════════════════════════════════════════════════");
    println!("  Analysis Complete");
    println!("═══════════════════════════════════════════════════════════════");

    ExitCode::SUCCESS
}
