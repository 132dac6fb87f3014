//! Tests that the minimizer behaves the same for every provided vertex type.

use approx::assert_relative_eq;
use ndarray::{array, Array1};
use simplexopt_rs::{SimplexMinimizer, Vertex};

fn bowl(x: f64, y: f64) -> f64 {
    (x - 1.0).powi(2) + 3.0 * (y + 2.0).powi(2) + 0.5 * x * y
}

/// Run the same problem and return the best vertex, value and step count.
fn run<V: Vertex>(start: V, coords: impl Fn(&V) -> (f64, f64)) -> (f64, f64, f64, usize) {
    let mut minimizer = SimplexMinimizer::new().with_max_steps(2000);
    let result = minimizer.minimize_with_report(
        |v: &V| {
            let (x, y) = coords(v);
            bowl(x, y)
        },
        start,
        0.5,
    );
    let (x, y) = coords(result.best.vertex());
    (x, y, *result.best.value(), result.iterations)
}

#[test]
fn test_vertex_types_agree() {
    let fixed = run([0.0, 0.0], |v: &[f64; 2]| (v[0], v[1]));
    let vec = run(vec![0.0, 0.0], |v: &Vec<f64>| (v[0], v[1]));
    let array = run(array![0.0, 0.0], |v: &Array1<f64>| (v[0], v[1]));

    for other in [vec, array] {
        assert_relative_eq!(fixed.0, other.0, epsilon = 1e-6);
        assert_relative_eq!(fixed.1, other.1, epsilon = 1e-6);
        assert_relative_eq!(fixed.2, other.2, epsilon = 1e-10);
    }
}

#[test]
fn test_scalar_and_single_element_vertices() {
    let f = |x: f64| (x + 1.5).powi(2) + 2.0;

    let mut scalar = SimplexMinimizer::new();
    let a = scalar.minimize(|x: &f64| f(*x), 2.0, 1.0);

    let mut single = SimplexMinimizer::new();
    let b = single.minimize(|v: &[f64; 1]| f(v[0]), [2.0], 1.0);

    assert_relative_eq!(*a.vertex(), -1.5, epsilon = 1e-6);
    assert_relative_eq!(b.vertex()[0], -1.5, epsilon = 1e-6);
    assert_relative_eq!(*a.value(), 2.0, epsilon = 1e-10);
}

#[test]
fn test_dimension_follows_initial_vertex() {
    let mut evaluations = Vec::new();
    let mut minimizer = SimplexMinimizer::new().with_max_steps(0);
    minimizer.minimize(
        |v: &Vec<f64>| {
            evaluations.push(v.len());
            v.iter().sum::<f64>()
        },
        vec![0.0; 5],
        1.0,
    );

    // Initial simplex of D + 1 vertices, all of dimension D
    assert_eq!(evaluations, vec![5; 6]);
}

#[cfg(feature = "nalgebra")]
#[test]
fn test_nalgebra_vertices() {
    use nalgebra::{DVector, Vector2};

    let fixed = run([0.0, 0.0], |v: &[f64; 2]| (v[0], v[1]));
    let static_vec = run(Vector2::new(0.0, 0.0), |v: &Vector2<f64>| (v[0], v[1]));
    let dynamic = run(DVector::from_vec(vec![0.0, 0.0]), |v: &DVector<f64>| (v[0], v[1]));

    for other in [static_vec, dynamic] {
        assert_relative_eq!(fixed.0, other.0, epsilon = 1e-6);
        assert_relative_eq!(fixed.1, other.1, epsilon = 1e-6);
    }
}
