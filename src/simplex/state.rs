//! Simplex state owned by a single minimization run.
//!
//! `vertices[i]` and `values[i]` are only ever replaced together, so between
//! steps every value is the objective evaluated at its vertex.

use super::progress::ValuedVertex;
use super::step::SimplexMove;
use crate::vertex::Vertex;

/// What one call to [`Simplex::step`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct StepOutcome {
    /// Index that was selected as worst and replaced.
    pub worst: usize,

    /// Number of current values at least as large as the reflected value.
    pub rank: usize,

    /// The accepted transformation.
    pub movement: SimplexMove,

    /// Objective evaluations spent on this step.
    pub evaluations: usize,
}

pub(crate) struct Simplex<V, T> {
    vertices: Vec<V>,
    values: Vec<T>,
    last_worst: Option<usize>,
}

impl<V, T> Simplex<V, T>
where
    V: Vertex,
    T: PartialOrd + Clone,
{
    /// Build the initial simplex around `initial_vertex` and evaluate every vertex.
    ///
    /// Vertex 0 is the initial vertex shifted by `-size / (D + 1)` on every
    /// axis; vertex `i` is vertex 0 shifted by `+size` along axis `i - 1`.
    pub fn build<F, E>(initial_vertex: V, size: f64, function: &mut F) -> Result<Self, E>
    where
        F: FnMut(&V) -> Result<T, E>,
    {
        let dimension = initial_vertex.dimension();
        let centering = -size / (dimension + 1) as f64;

        let mut origin = initial_vertex;
        for axis in 0..dimension {
            origin.offset_axis(axis, centering);
        }

        let mut vertices = Vec::with_capacity(dimension + 1);
        vertices.push(origin);
        for axis in 0..dimension {
            let mut vertex = vertices[0].clone();
            vertex.offset_axis(axis, size);
            vertices.push(vertex);
        }

        let values = vertices
            .iter()
            .map(|vertex| function(vertex))
            .collect::<Result<Vec<T>, E>>()?;

        Ok(Self {
            vertices,
            values,
            last_worst: None,
        })
    }

    pub fn dimension(&self) -> usize {
        self.vertices.len() - 1
    }

    #[cfg(test)]
    pub fn vertices(&self) -> &[V] {
        &self.vertices
    }

    #[cfg(test)]
    pub fn values(&self) -> &[T] {
        &self.values
    }

    /// Pick the vertex with the largest value, skipping the one picked last time.
    ///
    /// Ties go to the earliest index.
    pub fn select_worst(&mut self) -> usize {
        debug_assert!(self.values.len() >= 2, "worst-vertex scan needs two vertices");

        let excluded = self.last_worst;
        let mut worst = if excluded == Some(0) { 1 } else { 0 };
        for i in worst + 1..self.values.len() {
            if Some(i) == excluded {
                continue;
            }
            if self.values[worst] < self.values[i] {
                worst = i;
            }
        }

        self.last_worst = Some(worst);
        worst
    }

    /// Number of current values that are `>= value`.
    pub fn rank(&self, value: &T) -> usize {
        self.values.iter().filter(|current| value <= *current).count()
    }

    /// Index of the smallest value, earliest index on ties.
    pub fn best_index(&self) -> usize {
        let mut best = 0;
        for i in 1..self.values.len() {
            if self.values[i] < self.values[best] {
                best = i;
            }
        }
        best
    }

    pub fn best(&self) -> ValuedVertex<V, T> {
        let best = self.best_index();
        ValuedVertex::new(self.vertices[best].clone(), self.values[best].clone())
    }

    pub fn is_too_small(&self, tolerance: f64) -> bool {
        V::simplex_too_small(&self.vertices, tolerance)
    }

    /// All vertex/value pairs in index order.
    pub fn into_pairs(self) -> Vec<ValuedVertex<V, T>> {
        self.vertices
            .into_iter()
            .zip(self.values)
            .map(|(vertex, value)| ValuedVertex::new(vertex, value))
            .collect()
    }

    /// Replace the worst vertex with a reflected, expanded or contracted point.
    ///
    /// The reflected point is ranked against the current values:
    /// * better than all of them: try the expansion, keep it only if it is
    ///   also better than all of them, otherwise keep the reflection
    /// * rank at least `(D + 2) / 2`: keep the reflection
    /// * rank at least `(D + 2) / 4`: contract toward the face centre
    /// * otherwise: contract past the face centre
    pub fn step<F, E>(
        &mut self,
        function: &mut F,
        expansion_factor: f64,
        contraction_factor: f64,
    ) -> Result<StepOutcome, E>
    where
        F: FnMut(&V) -> Result<T, E>,
    {
        let dimension = self.dimension();
        let worst = self.select_worst();
        let face = V::face_center(&self.vertices, worst);

        let reflected = self.vertices[worst].reflect_through(&face, 1.0);
        let reflected_value = function(&reflected)?;
        let mut evaluations = 1;
        let rank = self.rank(&reflected_value);

        let (movement, vertex, value) = if rank == dimension + 1 {
            let expanded = self.vertices[worst].reflect_through(&face, expansion_factor);
            let expanded_value = function(&expanded)?;
            evaluations += 1;

            if self.rank(&expanded_value) == dimension + 1 {
                (SimplexMove::Expansion, expanded, expanded_value)
            } else {
                (SimplexMove::Reflection, reflected, reflected_value)
            }
        } else if rank >= (dimension + 2) / 2 {
            (SimplexMove::Reflection, reflected, reflected_value)
        } else {
            // Integer thresholds: for D = 1 the quarter bound is 0 and this
            // branch always contracts toward the face.
            let (movement, factor) = if rank >= (dimension + 2) / 4 {
                (SimplexMove::InsideContraction, -contraction_factor)
            } else {
                (SimplexMove::OutsideContraction, contraction_factor)
            };
            let contracted = self.vertices[worst].reflect_through(&face, factor);
            let contracted_value = function(&contracted)?;
            evaluations += 1;
            (movement, contracted, contracted_value)
        };

        self.vertices[worst] = vertex;
        self.values[worst] = value;

        Ok(StepOutcome {
            worst,
            rank,
            movement,
            evaluations,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::convert::Infallible;

    fn quadratic(v: &Vec<f64>) -> Result<f64, Infallible> {
        Ok((v[0] - 1.0).powi(2) + (v[1] + 2.0).powi(2))
    }

    #[test]
    fn test_initial_simplex_layout() {
        let simplex = Simplex::build(vec![0.0, 0.0], 0.75, &mut quadratic).unwrap();

        assert_eq!(simplex.dimension(), 2);
        assert_eq!(simplex.vertices()[0], vec![-0.25, -0.25]);
        assert_eq!(simplex.vertices()[1], vec![0.5, -0.25]);
        assert_eq!(simplex.vertices()[2], vec![-0.25, 0.5]);

        for (vertex, value) in simplex.vertices().iter().zip(simplex.values()) {
            assert_eq!(quadratic(vertex).unwrap(), *value);
        }
    }

    #[test]
    fn test_select_worst_excludes_previous_pick() {
        let mut simplex: Simplex<f64, f64> = Simplex {
            vertices: vec![0.0, 1.0, 2.0],
            values: vec![1.0, 5.0, 3.0],
            last_worst: None,
        };

        assert_eq!(simplex.select_worst(), 1);
        // Index 1 is still the largest but was picked last time
        assert_eq!(simplex.select_worst(), 2);
        assert_eq!(simplex.select_worst(), 1);
    }

    #[test]
    fn test_select_worst_ties_go_to_earliest_index() {
        let mut simplex: Simplex<f64, f64> = Simplex {
            vertices: vec![0.0, 1.0, 2.0, 3.0],
            values: vec![4.0, 4.0, 1.0, 4.0],
            last_worst: None,
        };
        assert_eq!(simplex.select_worst(), 0);
        assert_eq!(simplex.select_worst(), 1);

        simplex.last_worst = Some(0);
        assert_eq!(simplex.select_worst(), 1);
    }

    #[test]
    fn test_rank_and_best() {
        let simplex: Simplex<f64, f64> = Simplex {
            vertices: vec![0.0, 1.0, 2.0],
            values: vec![3.0, 1.0, 1.0],
            last_worst: None,
        };

        assert_eq!(simplex.rank(&0.5), 3);
        assert_eq!(simplex.rank(&1.0), 3);
        assert_eq!(simplex.rank(&2.0), 1);
        assert_eq!(simplex.rank(&4.0), 0);
        assert_eq!(simplex.best_index(), 1);
    }

    #[test]
    fn test_first_step_expands_downhill() {
        // D = 1, f(x) = (x - 3)^2 from x = 0 with size 1: vertices -0.5 and 0.5
        let mut f = |x: &f64| Ok::<f64, Infallible>((x - 3.0).powi(2));
        let mut simplex = Simplex::build(0.0, 1.0, &mut f).unwrap();

        let outcome = simplex.step(&mut f, 1.2, 0.8).unwrap();
        assert_eq!(outcome.worst, 0);
        assert_eq!(outcome.rank, 2);
        assert_eq!(outcome.movement, SimplexMove::Expansion);
        assert_eq!(outcome.evaluations, 2);
        assert!((simplex.vertices()[0] - 1.7).abs() < 1e-12);
    }

    #[test]
    fn test_contraction_branches() {
        // D = 2: half threshold (D + 2) / 2 = 2, quarter threshold (D + 2) / 4 = 1
        let mut f = |v: &[f64; 2]| Ok::<f64, Infallible>(v[0] + 10.0 * v[1] * v[1]);
        let mut simplex: Simplex<[f64; 2], f64> = Simplex {
            vertices: vec![[0.0, 0.0], [1.0, 0.0], [0.0, 1.0]],
            values: vec![0.0, 1.0, 10.0],
            last_worst: None,
        };

        // Worst is index 2, face centre (0.5, 0), reflection (1, -1) has value 11:
        // worse than every vertex, so the worst moves past the face centre
        let outcome = simplex.step(&mut f, 1.2, 0.5).unwrap();
        assert_eq!(outcome.worst, 2);
        assert_eq!(outcome.rank, 0);
        assert_eq!(outcome.movement, SimplexMove::OutsideContraction);
        assert_eq!(simplex.vertices()[2], [0.75, -0.5]);
        assert_eq!(simplex.values()[2], 0.75 + 2.5);

        // Index 2 is excluded now; the worst is index 1 at (1, 0) with value 1.
        // Face centre (0.375, -0.25), reflection (-0.25, -0.5) has value 2.25,
        // at least as good as one vertex: contract toward the face centre
        let outcome = simplex.step(&mut f, 1.2, 0.5).unwrap();
        assert_eq!(outcome.worst, 1);
        assert_eq!(outcome.rank, 1);
        assert_eq!(outcome.movement, SimplexMove::InsideContraction);
        assert_eq!(simplex.vertices()[1], [0.6875, -0.125]);
    }

    #[test]
    fn test_steps_keep_values_paired_and_alternate_worst() {
        let mut evaluated = 0;
        let mut f = |v: &Vec<f64>| {
            evaluated += 1;
            quadratic(v)
        };
        let mut simplex = Simplex::build(vec![0.0, 0.0], 0.5, &mut f).unwrap();

        let mut previous_worst = None;
        for _ in 0..100 {
            let outcome = simplex.step(&mut f, 1.2, 0.8).unwrap();
            assert_ne!(Some(outcome.worst), previous_worst);
            assert!((1..=2).contains(&outcome.evaluations));
            previous_worst = Some(outcome.worst);

            for (vertex, value) in simplex.vertices().iter().zip(simplex.values()) {
                assert_eq!(quadratic(vertex).unwrap(), *value);
            }
        }
        assert!(evaluated >= 3 + 100);
    }

    #[test]
    fn test_evaluation_error_aborts_step() {
        let mut calls = 0;
        let mut f = |x: &f64| {
            calls += 1;
            if calls > 2 {
                Err("objective failed")
            } else {
                Ok(x * x)
            }
        };
        let mut simplex = Simplex::build(1.0, 1.0, &mut f).unwrap();
        let before = simplex.values().to_vec();

        assert_eq!(simplex.step(&mut f, 1.2, 0.8), Err("objective failed"));
        assert_eq!(simplex.values(), before.as_slice());
    }
}
