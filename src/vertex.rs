//! Vertex abstraction for the downhill-simplex minimizer.
//!
//! The minimizer never touches coordinates directly. Everything it needs from a
//! point in the search space goes through the [`Vertex`] trait: moving along an
//! axis, averaging a face of the simplex, stepping through a face centre, and
//! deciding whether the whole simplex has collapsed.
//!
//! Implementations are provided for `f64` (one-dimensional problems),
//! `[f64; N]`, `Vec<f64>` and `ndarray::Array1<f64>`. With the `nalgebra`
//! feature, `SVector<f64, N>` and `DVector<f64>` are supported as well.

use ndarray::Array1;

/// A point in an N-dimensional search space.
pub trait Vertex: Clone {
    /// Number of coordinates.
    fn dimension(&self) -> usize;

    /// Move the vertex along `axis` by `delta`.
    fn offset_axis(&mut self, axis: usize, delta: f64);

    /// Centroid of all `vertices` except the one at index `excluded`.
    ///
    /// `vertices` must hold at least two entries.
    fn face_center(vertices: &[Self], excluded: usize) -> Self;

    /// Step from this vertex through `center` by `factor`:
    /// `center + factor * (center - self)`.
    ///
    /// * `factor == 1` reflects the vertex through the centre
    /// * `factor > 1` expands past the reflected point
    /// * `0 < factor < 1` lands between the centre and the reflected point
    /// * `factor < 0` lands between the centre and this vertex
    fn reflect_through(&self, center: &Self, factor: f64) -> Self;

    /// Whether the simplex spanned by `vertices` is too small to keep iterating.
    ///
    /// The provided implementations compare, per axis, the spread of the
    /// coordinates against `tolerance * max(1, max |coordinate|)`.
    fn simplex_too_small(vertices: &[Self], tolerance: f64) -> bool;
}

/// Mean of `coord(i)` over `0..count`, skipping `excluded`.
fn mean_excluding(count: usize, excluded: usize, coord: impl Fn(usize) -> f64) -> f64 {
    let sum: f64 = (0..count).filter(|&i| i != excluded).map(coord).sum();
    sum / (count - 1) as f64
}

/// Per-axis spread test shared by every provided implementation.
fn spans_within(
    count: usize,
    dimension: usize,
    tolerance: f64,
    coord: impl Fn(usize, usize) -> f64,
) -> bool {
    (0..dimension).all(|axis| {
        let mut lo = f64::INFINITY;
        let mut hi = f64::NEG_INFINITY;
        let mut scale = 1.0_f64;
        for i in 0..count {
            let x = coord(i, axis);
            lo = lo.min(x);
            hi = hi.max(x);
            scale = scale.max(x.abs());
        }
        hi - lo <= tolerance * scale
    })
}

impl Vertex for f64 {
    fn dimension(&self) -> usize {
        1
    }

    fn offset_axis(&mut self, axis: usize, delta: f64) {
        debug_assert_eq!(axis, 0, "a scalar vertex has a single axis");
        *self += delta;
    }

    fn face_center(vertices: &[Self], excluded: usize) -> Self {
        mean_excluding(vertices.len(), excluded, |i| vertices[i])
    }

    fn reflect_through(&self, center: &Self, factor: f64) -> Self {
        center + factor * (center - self)
    }

    fn simplex_too_small(vertices: &[Self], tolerance: f64) -> bool {
        spans_within(vertices.len(), 1, tolerance, |i, _| vertices[i])
    }
}

impl<const N: usize> Vertex for [f64; N] {
    fn dimension(&self) -> usize {
        N
    }

    fn offset_axis(&mut self, axis: usize, delta: f64) {
        self[axis] += delta;
    }

    fn face_center(vertices: &[Self], excluded: usize) -> Self {
        std::array::from_fn(|axis| mean_excluding(vertices.len(), excluded, |i| vertices[i][axis]))
    }

    fn reflect_through(&self, center: &Self, factor: f64) -> Self {
        std::array::from_fn(|axis| center[axis] + factor * (center[axis] - self[axis]))
    }

    fn simplex_too_small(vertices: &[Self], tolerance: f64) -> bool {
        spans_within(vertices.len(), N, tolerance, |i, axis| vertices[i][axis])
    }
}

impl Vertex for Vec<f64> {
    fn dimension(&self) -> usize {
        self.len()
    }

    fn offset_axis(&mut self, axis: usize, delta: f64) {
        self[axis] += delta;
    }

    fn face_center(vertices: &[Self], excluded: usize) -> Self {
        (0..vertices[0].len())
            .map(|axis| mean_excluding(vertices.len(), excluded, |i| vertices[i][axis]))
            .collect()
    }

    fn reflect_through(&self, center: &Self, factor: f64) -> Self {
        self.iter()
            .zip(center.iter())
            .map(|(x, c)| c + factor * (c - x))
            .collect()
    }

    fn simplex_too_small(vertices: &[Self], tolerance: f64) -> bool {
        let dimension = vertices.first().map_or(0, Vec::len);
        spans_within(vertices.len(), dimension, tolerance, |i, axis| vertices[i][axis])
    }
}

impl Vertex for Array1<f64> {
    fn dimension(&self) -> usize {
        self.len()
    }

    fn offset_axis(&mut self, axis: usize, delta: f64) {
        self[axis] += delta;
    }

    fn face_center(vertices: &[Self], excluded: usize) -> Self {
        let mut center = Array1::zeros(vertices[0].len());
        for (i, vertex) in vertices.iter().enumerate() {
            if i != excluded {
                center += vertex;
            }
        }
        center / (vertices.len() - 1) as f64
    }

    fn reflect_through(&self, center: &Self, factor: f64) -> Self {
        let step = (center - self) * factor;
        center + &step
    }

    fn simplex_too_small(vertices: &[Self], tolerance: f64) -> bool {
        let dimension = vertices.first().map_or(0, |v| v.len());
        spans_within(vertices.len(), dimension, tolerance, |i, axis| vertices[i][axis])
    }
}

#[cfg(feature = "nalgebra")]
mod nalgebra_impls {
    use super::{mean_excluding, spans_within, Vertex};
    use nalgebra::{DVector, SVector};

    impl<const N: usize> Vertex for SVector<f64, N> {
        fn dimension(&self) -> usize {
            N
        }

        fn offset_axis(&mut self, axis: usize, delta: f64) {
            self[axis] += delta;
        }

        fn face_center(vertices: &[Self], excluded: usize) -> Self {
            SVector::from_fn(|axis, _| {
                mean_excluding(vertices.len(), excluded, |i| vertices[i][axis])
            })
        }

        fn reflect_through(&self, center: &Self, factor: f64) -> Self {
            center + (center - self) * factor
        }

        fn simplex_too_small(vertices: &[Self], tolerance: f64) -> bool {
            spans_within(vertices.len(), N, tolerance, |i, axis| vertices[i][axis])
        }
    }

    impl Vertex for DVector<f64> {
        fn dimension(&self) -> usize {
            self.len()
        }

        fn offset_axis(&mut self, axis: usize, delta: f64) {
            self[axis] += delta;
        }

        fn face_center(vertices: &[Self], excluded: usize) -> Self {
            DVector::from_fn(vertices[0].len(), |axis, _| {
                mean_excluding(vertices.len(), excluded, |i| vertices[i][axis])
            })
        }

        fn reflect_through(&self, center: &Self, factor: f64) -> Self {
            center + (center - self) * factor
        }

        fn simplex_too_small(vertices: &[Self], tolerance: f64) -> bool {
            let dimension = vertices.first().map_or(0, |v| v.len());
            spans_within(vertices.len(), dimension, tolerance, |i, axis| vertices[i][axis])
        }
    }
}
