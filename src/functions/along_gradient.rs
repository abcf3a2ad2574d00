use crate::core::{CandidateSet, Function, Gradient, Hessian, Vector, WithGradient, WithHessian};

/// Restriction of a function to the ray of steepest descent.
///
/// For a function `f` with gradient `g0` at `x0`, this is the one-dimensional
/// function `phi(gamma) = f(x0 - gamma * g0)` of the step length. Minimizing
/// `phi` is the line search of descent methods. The restriction has a
/// derivative if `f` has a gradient and a second derivative if `f` has a
/// Hessian.
#[derive(Debug, Clone, Copy)]
pub struct AlongGradient<'a, F, const DIM: usize> {
    f: &'a F,
    origin: Vector<DIM>,
    direction: Gradient<DIM>,
}

impl<'a, F: WithGradient<DIM>, const DIM: usize> AlongGradient<'a, F, DIM> {
    /// Restricts `f` to the steepest descent ray from `origin`.
    pub fn new(f: &'a F, origin: Vector<DIM>) -> Self {
        let direction = f.gradient(&origin);
        Self::with_direction(f, origin, direction)
    }
}

impl<'a, F, const DIM: usize> AlongGradient<'a, F, DIM> {
    /// Restricts `f` to the ray `origin - gamma * direction`.
    pub fn with_direction(f: &'a F, origin: Vector<DIM>, direction: Gradient<DIM>) -> Self {
        Self {
            f,
            origin,
            direction,
        }
    }

    /// The point at step length `gamma`.
    pub fn point(&self, gamma: f64) -> Vector<DIM> {
        self.origin - self.direction * gamma
    }

    /// The gradient the ray follows.
    pub fn direction(&self) -> &Gradient<DIM> {
        &self.direction
    }
}

impl<'a, F: Function<DIM>, const DIM: usize> Function<1> for AlongGradient<'a, F, DIM> {
    fn apply(&self, gamma: &Vector<1>) -> f64 {
        self.f.apply(&self.point(gamma[0]))
    }
}

impl<'a, F: WithGradient<DIM>, const DIM: usize> WithGradient<1> for AlongGradient<'a, F, DIM> {
    fn gradient(&self, gamma: &Vector<1>) -> Gradient<1> {
        let g = self.f.gradient(&self.point(gamma[0]));
        Vector::new([-g.dot(&self.direction)])
    }
}

impl<'a, F: WithHessian<DIM>, const DIM: usize> WithHessian<1> for AlongGradient<'a, F, DIM> {
    fn hessian(&self, gamma: &Vector<1>) -> Hessian<1> {
        let h = self.f.hessian(&self.point(gamma[0]));
        let curvature = self.direction.dot(&(&h * self.direction));
        CandidateSet::new([Vector::new([curvature])])
    }
}
