//! Shape transformations applied to the simplex, one per step.

use serde::{Deserialize, Serialize};

/// The transformation that replaced the worst vertex on one step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SimplexMove {
    /// The worst vertex was reflected through the opposite face.
    Reflection,

    /// The reflection was pushed further out by the expansion factor.
    Expansion,

    /// The worst vertex was pulled toward the face centre.
    InsideContraction,

    /// The worst vertex was moved past the face centre, short of the reflection.
    OutsideContraction,
}

/// How many steps ended in each [`SimplexMove`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveCounts {
    pub reflections: usize,
    pub expansions: usize,
    pub inside_contractions: usize,
    pub outside_contractions: usize,
}

impl MoveCounts {
    /// Count one more step of the given kind.
    pub fn record(&mut self, movement: SimplexMove) {
        match movement {
            SimplexMove::Reflection => self.reflections += 1,
            SimplexMove::Expansion => self.expansions += 1,
            SimplexMove::InsideContraction => self.inside_contractions += 1,
            SimplexMove::OutsideContraction => self.outside_contractions += 1,
        }
    }

    /// Total number of recorded steps.
    pub fn total(&self) -> usize {
        self.reflections + self.expansions + self.inside_contractions + self.outside_contractions
    }
}
