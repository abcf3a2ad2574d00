use log::debug;

use crate::core::{CandidateSet, Function, Gradient, Hessian, Vector, WithGradient, WithHessian};

/// Quadratic form `f(x) = x^T A x` in `DIM` dimensions.
///
/// The coefficient matrix does not need to be symmetric. The constructor
/// stores its symmetric part `(A + A^T) / 2`, which defines the same form,
/// and the Hessian `A + A^T`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quadratic<const DIM: usize> {
    coefficients: Hessian<DIM>,
    hessian: Hessian<DIM>,
}

impl<const DIM: usize> Quadratic<DIM> {
    /// Initializes the form from the rows of a coefficient matrix.
    pub fn new(rows: [[f64; DIM]; DIM]) -> Self {
        Self::from_coefficients(CandidateSet::from_fn(|i| Vector::new(rows[i])))
    }

    /// Initializes the form from a coefficient matrix.
    pub fn from_coefficients(a: Hessian<DIM>) -> Self {
        let hessian = CandidateSet::from_fn(|i| {
            Vector::from_fn(|j| if i == j { 2.0 * a[i][i] } else { a[i][j] + a[j][i] })
        });
        let coefficients = CandidateSet::from_fn(|i| hessian[i] * 0.5);

        debug!("quadratic form with Hessian {:?}", hessian);

        Self {
            coefficients,
            hessian,
        }
    }

    /// The symmetric coefficient matrix.
    pub fn coefficients(&self) -> &Hessian<DIM> {
        &self.coefficients
    }
}

impl<const DIM: usize> Function<DIM> for Quadratic<DIM> {
    fn apply(&self, x: &Vector<DIM>) -> f64 {
        x.dot(&(&self.coefficients * *x))
    }
}

impl<const DIM: usize> WithGradient<DIM> for Quadratic<DIM> {
    fn gradient(&self, x: &Vector<DIM>) -> Gradient<DIM> {
        &self.hessian * *x
    }
}

impl<const DIM: usize> WithHessian<DIM> for Quadratic<DIM> {
    fn hessian(&self, _x: &Vector<DIM>) -> Hessian<DIM> {
        self.hessian
    }
}
