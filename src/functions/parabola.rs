use crate::core::{CandidateSet, Function, Gradient, Hessian, Vector, WithGradient, WithHessian};

/// One-dimensional parabola `f(x) = x^2`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Parabola(());

impl Parabola {
    /// Initializes the function.
    pub fn new() -> Self {
        Self(())
    }
}

impl Function<1> for Parabola {
    fn apply(&self, x: &Vector<1>) -> f64 {
        x[0] * x[0]
    }
}

impl WithGradient<1> for Parabola {
    fn gradient(&self, x: &Vector<1>) -> Gradient<1> {
        Vector::new([2.0 * x[0]])
    }
}

impl WithHessian<1> for Parabola {
    fn hessian(&self, _x: &Vector<1>) -> Hessian<1> {
        CandidateSet::new([Vector::new([2.0])])
    }
}

/// [Sphere
/// function](https://en.wikipedia.org/wiki/Test_functions_for_optimization),
/// `f(x) = sum x_i^2`.
///
/// It provides only values, so it can be used only with derivative-free
/// strategies.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sphere<const DIM: usize>(());

impl<const DIM: usize> Sphere<DIM> {
    /// Initializes the function.
    pub fn new() -> Self {
        Self(())
    }
}

impl<const DIM: usize> Function<DIM> for Sphere<DIM> {
    fn apply(&self, x: &Vector<DIM>) -> f64 {
        x.dot(x)
    }
}
