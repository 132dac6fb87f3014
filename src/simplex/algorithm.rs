//! Implementation of the downhill-simplex minimizer.
//!
//! This module contains the minimization loop: it builds the initial simplex,
//! applies one shape transformation per step, stops on the size test or the
//! step budget, and reports progress to an optional observer.

use log::{debug, trace};
use std::convert::Infallible;
use std::fmt;

use crate::vertex::Vertex;

use super::config::SimplexConfig;
use super::progress::{ProgressObserver, ValuedVertex};
use super::state::Simplex;
use super::step::MoveCounts;
use super::termination::Termination;

/// Result of a simplex minimization run.
#[derive(Debug, Clone)]
pub struct SimplexResult<V, T = f64> {
    /// Best vertex found and its value
    pub best: ValuedVertex<V, T>,

    /// Every vertex/value pair of the simplex when the run stopped
    pub final_simplex: Vec<ValuedVertex<V, T>>,

    /// Number of steps performed
    pub iterations: usize,

    /// Number of objective evaluations, including the initial simplex
    pub func_evals: usize,

    /// Why the run stopped
    pub termination: Termination,

    /// How many steps ended in each kind of transformation
    pub moves: MoveCounts,
}

impl<V, T> SimplexResult<V, T> {
    /// Whether the run stopped on the size test rather than the step budget.
    pub fn converged(&self) -> bool {
        self.termination.is_converged()
    }
}

impl<V: fmt::Debug, T: fmt::Debug> fmt::Display for SimplexResult<V, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Simplex Minimization Result:")?;
        writeln!(f, "  Converged: {}", self.converged())?;
        writeln!(f, "  Message: {}", self.termination)?;
        writeln!(f, "  Value: {:?}", self.best.value())?;
        writeln!(f, "  Iterations: {}", self.iterations)?;
        writeln!(f, "  Function evaluations: {}", self.func_evals)?;
        writeln!(
            f,
            "  Moves: {} reflections, {} expansions, {} inside / {} outside contractions",
            self.moves.reflections,
            self.moves.expansions,
            self.moves.inside_contractions,
            self.moves.outside_contractions
        )?;
        writeln!(f, "  Vertex: {:?}", self.best.vertex())?;
        Ok(())
    }
}

/// The downhill-simplex minimizer.
///
/// The configuration and the progress observer belong to the minimizer and
/// persist across calls; the simplex itself is rebuilt by every call.
pub struct SimplexMinimizer<V, T = f64> {
    /// Configuration options
    config: SimplexConfig,

    /// Registered progress observer, if any
    observer: Option<Box<dyn ProgressObserver<V, T>>>,
}

impl<V, T> fmt::Debug for SimplexMinimizer<V, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SimplexMinimizer")
            .field("config", &self.config)
            .field("has_observer", &self.observer.is_some())
            .finish()
    }
}

impl<V, T> Default for SimplexMinimizer<V, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V, T> SimplexMinimizer<V, T> {
    /// Create a new minimizer with default configuration.
    pub fn new() -> Self {
        Self {
            config: SimplexConfig::default(),
            observer: None,
        }
    }

    /// Create a new minimizer with the given configuration.
    pub fn with_config(config: SimplexConfig) -> Self {
        Self {
            config,
            observer: None,
        }
    }

    /// Set the maximum number of steps.
    pub fn with_max_steps(mut self, max_steps: usize) -> Self {
        self.config.max_steps = max_steps;
        self
    }

    /// Set the expansion factor.
    pub fn with_expansion_factor(mut self, factor: f64) -> Self {
        self.config.expansion_factor = factor;
        self
    }

    /// Set the contraction factor.
    pub fn with_contraction_factor(mut self, factor: f64) -> Self {
        self.config.contraction_factor = factor;
        self
    }

    /// Set the tolerance handed to the size-convergence test.
    pub fn with_size_tolerance(mut self, tolerance: f64) -> Self {
        self.config.size_tolerance = tolerance;
        self
    }

    /// Register a progress observer, see [`set_progress_callback`](Self::set_progress_callback).
    pub fn with_progress_callback<O>(mut self, frequency: usize, observer: O) -> Self
    where
        O: ProgressObserver<V, T> + 'static,
    {
        self.set_progress_callback(frequency, observer);
        self
    }

    /// Get the current configuration.
    pub fn config(&self) -> &SimplexConfig {
        &self.config
    }

    /// Replace the configuration.
    ///
    /// A registered observer is kept unless the new `progress_frequency` is
    /// zero, in which case it is dropped.
    pub fn set_config(&mut self, config: SimplexConfig) {
        if config.progress_frequency == 0 {
            self.observer = None;
        }
        self.config = config;
    }

    /// Replace the progress observer and notify it every `frequency` steps.
    ///
    /// The previous observer is dropped. A `frequency` of zero disables
    /// notifications and drops `observer` as well.
    pub fn set_progress_callback<O>(&mut self, frequency: usize, observer: O)
    where
        O: ProgressObserver<V, T> + 'static,
    {
        self.config.progress_frequency = frequency;
        self.observer = if frequency == 0 {
            None
        } else {
            Some(Box::new(observer))
        };
    }

    /// Drop the progress observer and disable notifications.
    pub fn clear_progress_callback(&mut self) {
        self.config.progress_frequency = 0;
        self.observer = None;
    }

    /// Whether a progress observer is registered.
    pub fn has_progress_callback(&self) -> bool {
        self.observer.is_some()
    }
}

impl<V, T> SimplexMinimizer<V, T>
where
    V: Vertex,
    T: PartialOrd + Clone,
{
    /// Minimize `function` starting from a simplex around `initial_vertex`.
    ///
    /// # Arguments
    ///
    /// * `function` - The objective, called once per trial vertex
    /// * `initial_vertex` - Initial guess, also fixes the dimension
    /// * `initial_simplex_size` - Edge length of the initial simplex
    ///
    /// # Returns
    ///
    /// * The best vertex of the final simplex and its value. Running out of
    ///   steps is not an error.
    pub fn minimize<F>(
        &mut self,
        function: F,
        initial_vertex: V,
        initial_simplex_size: f64,
    ) -> ValuedVertex<V, T>
    where
        F: FnMut(&V) -> T,
    {
        self.minimize_with_report(function, initial_vertex, initial_simplex_size)
            .best
    }

    /// Like [`minimize`](Self::minimize), returning the full [`SimplexResult`].
    pub fn minimize_with_report<F>(
        &mut self,
        mut function: F,
        initial_vertex: V,
        initial_simplex_size: f64,
    ) -> SimplexResult<V, T>
    where
        F: FnMut(&V) -> T,
    {
        let infallible = |vertex: &V| Ok::<T, Infallible>(function(vertex));
        match self.run(infallible, initial_vertex, initial_simplex_size) {
            Ok(result) => result,
            Err(never) => match never {},
        }
    }

    /// Minimize an objective that can fail.
    ///
    /// The first error returned by `function` stops the run and is returned
    /// unchanged.
    pub fn try_minimize<F, E>(
        &mut self,
        function: F,
        initial_vertex: V,
        initial_simplex_size: f64,
    ) -> Result<ValuedVertex<V, T>, E>
    where
        F: FnMut(&V) -> Result<T, E>,
    {
        self.run(function, initial_vertex, initial_simplex_size)
            .map(|result| result.best)
    }

    /// Like [`try_minimize`](Self::try_minimize), returning the full [`SimplexResult`].
    pub fn try_minimize_with_report<F, E>(
        &mut self,
        function: F,
        initial_vertex: V,
        initial_simplex_size: f64,
    ) -> Result<SimplexResult<V, T>, E>
    where
        F: FnMut(&V) -> Result<T, E>,
    {
        self.run(function, initial_vertex, initial_simplex_size)
    }

    fn run<F, E>(
        &mut self,
        mut function: F,
        initial_vertex: V,
        initial_simplex_size: f64,
    ) -> Result<SimplexResult<V, T>, E>
    where
        F: FnMut(&V) -> Result<T, E>,
    {
        let dimension = initial_vertex.dimension();
        debug!(
            "simplex minimization: dimension {}, initial size {}, max steps {}",
            dimension, initial_simplex_size, self.config.max_steps
        );

        let mut simplex = Simplex::build(initial_vertex, initial_simplex_size, &mut function)?;
        let mut func_evals = dimension + 1;
        let mut iterations = 0;
        let mut moves = MoveCounts::default();

        if dimension == 0 {
            debug!("simplex minimization: zero-dimensional vertex, nothing to do");
            return Ok(Self::finish(simplex, 0, func_evals, Termination::Degenerate, moves));
        }

        let frequency = self.config.progress_frequency;
        let mut countdown = frequency;
        let mut termination = Termination::MaxStepsReached;

        while iterations < self.config.max_steps {
            let outcome = simplex.step(
                &mut function,
                self.config.expansion_factor,
                self.config.contraction_factor,
            )?;
            iterations += 1;
            func_evals += outcome.evaluations;
            moves.record(outcome.movement);
            trace!(
                "step {}: worst {}, rank {}/{}, {:?}",
                iterations,
                outcome.worst,
                outcome.rank,
                dimension + 1,
                outcome.movement
            );

            if simplex.is_too_small(self.config.size_tolerance) {
                termination = Termination::SimplexTooSmall;
                break;
            }

            if let Some(observer) = self.observer.as_mut() {
                if frequency > 0 {
                    countdown -= 1;
                    if countdown == 0 {
                        observer.on_progress(&simplex.best());
                        countdown = frequency;
                    }
                }
            }
        }

        debug!(
            "simplex minimization finished after {} steps ({} evaluations): {}",
            iterations, func_evals, termination
        );

        Ok(Self::finish(simplex, iterations, func_evals, termination, moves))
    }

    fn finish(
        simplex: Simplex<V, T>,
        iterations: usize,
        func_evals: usize,
        termination: Termination,
        moves: MoveCounts,
    ) -> SimplexResult<V, T> {
        let best = simplex.best();
        SimplexResult {
            best,
            final_simplex: simplex.into_pairs(),
            iterations,
            func_evals,
            termination,
            moves,
        }
    }
}
