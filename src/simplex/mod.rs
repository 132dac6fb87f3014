//! Downhill-simplex (Nelder-Mead family) minimization.
//!
//! This module provides a derivative-free minimizer for scalar objectives over
//! an N-dimensional search space. The simplex holds `D + 1` vertex/value
//! pairs; every step replaces the worst vertex by reflecting it through the
//! opposite face, expanding that reflection, or contracting toward or past the
//! face. The vertex picked as worst on one step is never picked again on the
//! next, which keeps a freshly moved vertex from bouncing back and forth.

pub mod algorithm;
pub mod config;
pub mod progress;
mod state;
pub mod step;
pub mod termination;

// Re-export key types
pub use algorithm::{SimplexMinimizer, SimplexResult};
pub use config::SimplexConfig;
pub use progress::{ProgressObserver, ValuedVertex};
pub use step::{MoveCounts, SimplexMove};
pub use termination::Termination;
