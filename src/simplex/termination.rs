//! Termination reasons for the simplex minimizer.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Why a minimization run stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Termination {
    /// The vertex size test reported the simplex too small to continue.
    SimplexTooSmall,

    /// The configured step budget was used up.
    MaxStepsReached,

    /// The vertex has no coordinates, so there was nothing to move.
    Degenerate,
}

impl Termination {
    /// Returns true if the run stopped because the simplex collapsed.
    pub fn is_converged(&self) -> bool {
        matches!(self, Termination::SimplexTooSmall)
    }

    /// Returns a description of the termination reason.
    pub fn description(&self) -> String {
        match self {
            Termination::SimplexTooSmall => "Converged: simplex below size tolerance".to_string(),
            Termination::MaxStepsReached => "Terminated: maximum number of steps reached".to_string(),
            Termination::Degenerate => "Terminated: zero-dimensional vertex".to_string(),
        }
    }
}

impl fmt::Display for Termination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.description())
    }
}
