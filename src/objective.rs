//! Objective definition trait and adapters.
//!
//! This module defines the `Objective` trait, which represents a scalar cost
//! over a parameter vector, for fitting problems that are easier to write as a
//! type than as a closure. It also provides `SumOfSquares`, which turns a
//! residual function into an objective.

use ndarray::Array1;
use std::marker::PhantomData;

use crate::error::{Result, SimplexError};
use crate::simplex::{SimplexMinimizer, SimplexResult};
use crate::vertex::Vertex;

/// A scalar objective to be minimized.
pub trait Objective<V> {
    /// Evaluate the objective at the given parameters.
    ///
    /// # Arguments
    ///
    /// * `params` - The parameter values at which to evaluate the objective
    ///
    /// # Returns
    ///
    /// * The cost, or an error if the evaluation fails
    fn eval(&self, params: &V) -> Result<f64>;

    /// Get the number of parameters the objective expects.
    fn parameter_count(&self) -> usize;
}

/// Adapter that minimizes the sum of squared residuals of a residual function.
pub struct SumOfSquares<V, F> {
    residuals: F,
    parameter_count: usize,
    _vertex: PhantomData<fn(&V)>,
}

impl<V, F> SumOfSquares<V, F>
where
    F: Fn(&V) -> Result<Array1<f64>>,
{
    /// Wrap a residual function over `parameter_count` parameters.
    pub fn new(parameter_count: usize, residuals: F) -> Self {
        Self {
            residuals,
            parameter_count,
            _vertex: PhantomData,
        }
    }
}

impl<V, F> Objective<V> for SumOfSquares<V, F>
where
    F: Fn(&V) -> Result<Array1<f64>>,
{
    fn eval(&self, params: &V) -> Result<f64> {
        let residuals = (self.residuals)(params)?;
        Ok(residuals.iter().map(|r| r.powi(2)).sum())
    }

    fn parameter_count(&self) -> usize {
        self.parameter_count
    }
}

impl<V: Vertex> SimplexMinimizer<V, f64> {
    /// Minimize an [`Objective`].
    ///
    /// # Arguments
    ///
    /// * `objective` - The objective to minimize
    /// * `initial_params` - Initial guess for the parameter values
    /// * `initial_simplex_size` - Edge length of the initial simplex
    ///
    /// # Returns
    ///
    /// * The minimization report, `DimensionMismatch` if the initial guess does
    ///   not have `parameter_count()` coordinates, or the first evaluation error
    pub fn minimize_objective<O: Objective<V>>(
        &mut self,
        objective: &O,
        initial_params: V,
        initial_simplex_size: f64,
    ) -> Result<SimplexResult<V, f64>> {
        let n_params = objective.parameter_count();
        if initial_params.dimension() != n_params {
            return Err(SimplexError::DimensionMismatch(format!(
                "Expected {} parameters, got {}",
                n_params,
                initial_params.dimension()
            )));
        }

        self.try_minimize_with_report(
            |params: &V| objective.eval(params),
            initial_params,
            initial_simplex_size,
        )
    }
}
