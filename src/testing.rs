//! Known optima and standard starting points of the provided functions,
//! useful for benchmarking, debugging and smoke testing of step strategies.
//!
//! [`Sphere`] and [`NarrowValley`] are recommended for first tests. The
//! multiple minima of [`FourWell`] can be used to check that a method settles
//! in one of them.
//!
//! # References
//!
//! \[1\] [A Literature Survey of Benchmark Functions For Global Optimization
//! Problems](https://arxiv.org/abs/1308.4008)
//!
//! \[2\] [Numerical Methods for Unconstrained Optimization and Nonlinear
//! Equations](https://epubs.siam.org/doi/book/10.1137/1.9781611971200)

#![allow(unused)]

use crate::core::{Function, Vector};
use crate::functions::{FourWell, NarrowValley, Parabola, Sphere};

/// Extension of the [`Function`] trait that provides additional information
/// that is useful for testing step strategies.
pub trait TestFunction<const DIM: usize>: Function<DIM> {
    /// Standard initial points for the function. Using the same initial
    /// points is essential for fair comparison of methods.
    fn initials(&self) -> Vec<Vector<DIM>>;

    /// A set of global optima (if known and finite). This is mostly just for
    /// information, for example to know how close a method got even if it
    /// failed. For testing if a given point is an optimum,
    /// [`TestFunction::is_optimum`] should be used.
    fn optima(&self) -> Vec<Vector<DIM>> {
        Vec::new()
    }

    /// Tests if given point is a global optimum, given the tolerance `eps`
    /// on the function value.
    fn is_optimum(&self, x: &Vector<DIM>, eps: f64) -> bool;
}

impl TestFunction<1> for Parabola {
    fn initials(&self) -> Vec<Vector<1>> {
        vec![Vector::new([-3.0]), Vector::new([2.5])]
    }

    fn optima(&self) -> Vec<Vector<1>> {
        vec![Vector::zeros()]
    }

    fn is_optimum(&self, x: &Vector<1>, eps: f64) -> bool {
        self.apply(x).abs() <= eps
    }
}

impl<const DIM: usize> TestFunction<DIM> for Sphere<DIM> {
    fn initials(&self) -> Vec<Vector<DIM>> {
        let init = Vector::from_fn(|i| if i % 2 == 0 { 10.0 } else { -10.0 });
        vec![init]
    }

    fn optima(&self) -> Vec<Vector<DIM>> {
        vec![Vector::zeros()]
    }

    fn is_optimum(&self, x: &Vector<DIM>, eps: f64) -> bool {
        self.apply(x).abs() <= eps
    }
}

impl TestFunction<2> for FourWell {
    fn initials(&self) -> Vec<Vector<2>> {
        vec![Vector::new([0.5, 2.0]), Vector::new([0.7, -1.6])]
    }

    fn optima(&self) -> Vec<Vector<2>> {
        vec![
            Vector::new([1.0, 1.0]),
            Vector::new([-1.0, 1.0]),
            Vector::new([1.0, -1.0]),
            Vector::new([-1.0, -1.0]),
        ]
    }

    fn is_optimum(&self, x: &Vector<2>, eps: f64) -> bool {
        self.apply(x).abs() <= eps
    }
}

impl TestFunction<2> for NarrowValley {
    fn initials(&self) -> Vec<Vector<2>> {
        vec![Vector::new([-1.2, 1.0]), Vector::new([1.2, 1.2])]
    }

    fn optima(&self) -> Vec<Vector<2>> {
        vec![Vector::new([1.0, 1.0])]
    }

    fn is_optimum(&self, x: &Vector<2>, eps: f64) -> bool {
        self.apply(x).abs() <= eps
    }
}
