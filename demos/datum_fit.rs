//! Fit a 2-D similarity transform between two point sets.
//!
//! Control points measured in a local survey frame are matched to the same
//! points in a map frame. The transform is parameterized by scale, rotation
//! and translation, and fitted by minimizing the sum of squared residuals.
//!
//! Run with `cargo run --example datum_fit`.

use log::info;
use ndarray::{Array1, Array2};
use simplelog::{ColorChoice, CombinedLogger, Config, LevelFilter, TermLogger, TerminalMode};
use simplexopt_rs::{Objective, SimplexMinimizer, SumOfSquares, ValuedVertex};

/// Apply `[scale, rotation, tx, ty]` to a point.
fn transform(params: &[f64; 4], x: f64, y: f64) -> (f64, f64) {
    let [scale, rotation, tx, ty] = *params;
    let (sin, cos) = rotation.sin_cos();
    (
        scale * (cos * x - sin * y) + tx,
        scale * (sin * x + cos * y) + ty,
    )
}

fn main() -> simplexopt_rs::Result<()> {
    let _ = CombinedLogger::init(vec![TermLogger::new(
        LevelFilter::Info,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )]);

    let local = Array2::from_shape_vec(
        (6, 2),
        vec![
            0.0, 0.0, 120.0, 5.0, 240.0, -12.0, 35.0, 180.0, 150.0, 210.0, 260.0, 160.0,
        ],
    )
    .map_err(|e| simplexopt_rs::SimplexError::Other(e.to_string()))?;

    // Map coordinates generated from a known transform plus small survey noise
    let truth = [1.0004, 0.0523, 5120.3, -880.7];
    let noise = [0.02, -0.01, 0.015, 0.0, -0.02, 0.01, 0.005, -0.015, 0.0, 0.02, -0.01, 0.0];
    let mut map = Array2::zeros((6, 2));
    for (i, point) in local.outer_iter().enumerate() {
        let (x, y) = transform(&truth, point[0], point[1]);
        map[[i, 0]] = x + noise[2 * i];
        map[[i, 1]] = y + noise[2 * i + 1];
    }

    let objective = SumOfSquares::new(4, |params: &[f64; 4]| {
        let mut residuals = Array1::zeros(2 * local.nrows());
        for (i, point) in local.outer_iter().enumerate() {
            let (x, y) = transform(params, point[0], point[1]);
            residuals[2 * i] = x - map[[i, 0]];
            residuals[2 * i + 1] = y - map[[i, 1]];
        }
        Ok(residuals)
    });

    // Start from the first control point's offset with no scale or rotation
    let initial = [1.0, 0.0, map[[0, 0]], map[[0, 1]]];
    info!("initial cost: {:.6}", objective.eval(&initial)?);

    let mut minimizer = SimplexMinimizer::new()
        .with_max_steps(5000)
        .with_progress_callback(100, |best: &ValuedVertex<[f64; 4], f64>| {
            info!("best cost so far: {:.6e}", best.value())
        });

    let result = minimizer.minimize_objective(&objective, initial, 0.01)?;

    println!("{}", result);
    let [scale, rotation, tx, ty] = *result.best.vertex();
    println!("Fitted transform:");
    println!("  scale     = {:.6} (true {:.6})", scale, truth[0]);
    println!("  rotation  = {:.6} rad (true {:.6})", rotation, truth[1]);
    println!("  translate = ({:.3}, {:.3}) (true ({:.3}, {:.3}))", tx, ty, truth[2], truth[3]);

    Ok(())
}
