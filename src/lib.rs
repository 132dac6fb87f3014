//! # simplexopt-rs
//!
//! `simplexopt-rs` is a Rust implementation of the downhill-simplex
//! (Nelder-Mead family) algorithm for derivative-free minimization, meant to be
//! embedded in geometric fitting and calibration pipelines where the objective
//! is expensive or not differentiable.
//!
//! The library provides:
//! - A [`SimplexMinimizer`] with configurable step budget, expansion and
//!   contraction factors, and a progress observer
//! - A [`Vertex`] trait with implementations for `f64`, `[f64; N]`, `Vec<f64>`,
//!   `ndarray::Array1<f64>` and (feature `nalgebra`) nalgebra vectors
//! - An [`Objective`] trait for fitting problems written as types
//! - JSON persistence for [`SimplexConfig`]
//!
//! ## Basic Usage
//!
//! ```
//! use simplexopt_rs::SimplexMinimizer;
//!
//! let mut minimizer = SimplexMinimizer::new();
//! let best = minimizer.minimize(
//!     |v: &[f64; 2]| (v[0] - 1.0).powi(2) + (v[1] + 2.0).powi(2),
//!     [0.0, 0.0],
//!     0.5,
//! );
//!
//! assert!((best.vertex()[0] - 1.0).abs() < 1e-6);
//! assert!((best.vertex()[1] + 2.0).abs() < 1e-6);
//! ```

// Public modules
pub mod error;
pub mod objective;
pub mod simplex;
pub mod vertex;

// Re-exports for convenience
pub use error::{Result, SimplexError};
pub use objective::{Objective, SumOfSquares};
pub use simplex::{
    ProgressObserver, SimplexConfig, SimplexMinimizer, SimplexResult, Termination, ValuedVertex,
};
pub use vertex::Vertex;

/// Version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
