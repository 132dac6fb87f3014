//! Result pairs and progress notifications.

use serde::{Deserialize, Serialize};

/// A vertex together with the objective value evaluated at it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValuedVertex<V, T = f64> {
    vertex: V,
    value: T,
}

impl<V, T> ValuedVertex<V, T> {
    /// Pair a vertex with its objective value.
    pub fn new(vertex: V, value: T) -> Self {
        Self { vertex, value }
    }

    pub fn vertex(&self) -> &V {
        &self.vertex
    }

    pub fn value(&self) -> &T {
        &self.value
    }

    /// Split the pair back into its vertex and value.
    pub fn into_parts(self) -> (V, T) {
        (self.vertex, self.value)
    }
}

/// Receives the best pair found so far at the configured cadence.
///
/// Any `FnMut(&ValuedVertex<V, T>)` closure is an observer.
pub trait ProgressObserver<V, T> {
    fn on_progress(&mut self, best: &ValuedVertex<V, T>);
}

impl<V, T, F> ProgressObserver<V, T> for F
where
    F: FnMut(&ValuedVertex<V, T>),
{
    fn on_progress(&mut self, best: &ValuedVertex<V, T>) {
        self(best)
    }
}
