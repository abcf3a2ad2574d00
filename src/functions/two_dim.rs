use crate::core::{CandidateSet, Function, Gradient, Hessian, Vector, WithGradient, WithHessian};

/// Four-well function `f(x, y) = (x^2 - 1)^2 + (y^2 - 1)^2`.
///
/// It has four global minima with zero value at `(+-1, +-1)` and a local
/// maximum at the origin. Which minimum a method ends in depends on the
/// initial domain.
#[derive(Debug, Clone, Copy, Default)]
pub struct FourWell(());

impl FourWell {
    /// Initializes the function.
    pub fn new() -> Self {
        Self(())
    }
}

impl Function<2> for FourWell {
    fn apply(&self, x: &Vector<2>) -> f64 {
        (x[0] * x[0] - 1.0).powi(2) + (x[1] * x[1] - 1.0).powi(2)
    }
}

impl WithGradient<2> for FourWell {
    fn gradient(&self, x: &Vector<2>) -> Gradient<2> {
        Vector::from_fn(|i| 4.0 * x[i] * (x[i] * x[i] - 1.0))
    }
}

impl WithHessian<2> for FourWell {
    fn hessian(&self, x: &Vector<2>) -> Hessian<2> {
        Hessian::diagonal([12.0 * x[0] * x[0] - 4.0, 12.0 * x[1] * x[1] - 4.0])
    }
}

/// [Rosenbrock function](https://en.wikipedia.org/wiki/Rosenbrock_function),
/// `f(x, y) = (1 - x)^2 + 100 (y - x^2)^2`.
///
/// The global minimum `(1, 1)` is inside a long, narrow, parabolic shaped flat
/// valley. Getting into the valley is easy, moving along it to the minimum is
/// the challenge.
#[derive(Debug, Clone, Copy, Default)]
pub struct NarrowValley(());

impl NarrowValley {
    /// Initializes the function.
    pub fn new() -> Self {
        Self(())
    }
}

impl Function<2> for NarrowValley {
    fn apply(&self, x: &Vector<2>) -> f64 {
        (1.0 - x[0]).powi(2) + 100.0 * (x[1] - x[0] * x[0]).powi(2)
    }
}

impl WithGradient<2> for NarrowValley {
    fn gradient(&self, x: &Vector<2>) -> Gradient<2> {
        let valley = x[1] - x[0] * x[0];
        Vector::new([-2.0 * (1.0 - x[0]) - 400.0 * x[0] * valley, 200.0 * valley])
    }
}

impl WithHessian<2> for NarrowValley {
    fn hessian(&self, x: &Vector<2>) -> Hessian<2> {
        let dxy = -400.0 * x[0];
        CandidateSet::new([
            Vector::new([2.0 - 400.0 * x[1] + 1200.0 * x[0] * x[0], dxy]),
            Vector::new([dxy, 200.0]),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_abs_diff_eq;

    fn numeric_gradient<F: Function<2>>(f: &F, x: Vector<2>) -> Vector<2> {
        let h = 1e-6;
        Vector::from_fn(|j| {
            let e = Vector::unit(j) * h;
            (f.apply(&(x + e)) - f.apply(&(x - e))) / (2.0 * h)
        })
    }

    fn numeric_hessian<F: WithGradient<2>>(f: &F, x: Vector<2>) -> Hessian<2> {
        let h = 1e-6;
        Hessian::from_fn(|j| {
            let e = Vector::unit(j) * h;
            (f.gradient(&(x + e)) - f.gradient(&(x - e))) * (1.0 / (2.0 * h))
        })
    }

    #[test]
    fn four_well_minima() {
        let f = FourWell::new();

        for (x, y) in [(1.0, 1.0), (-1.0, 1.0), (1.0, -1.0), (-1.0, -1.0)] {
            let x = Vector::new([x, y]);
            assert_eq!(f.apply(&x), 0.0);
            assert_eq!(f.gradient(&x), Vector::zeros());
        }

        assert_eq!(f.apply(&Vector::zeros()), 2.0);
    }

    #[test]
    fn four_well_derivatives() {
        let f = FourWell::new();
        let x = Vector::new([0.4, -1.3]);

        assert_abs_diff_eq!(f.gradient(&x), numeric_gradient(&f, x), epsilon = 1e-5);

        let (analytic, numeric) = (f.hessian(&x), numeric_hessian(&f, x));
        for i in 0..2 {
            assert_abs_diff_eq!(analytic[i], numeric[i], epsilon = 1e-4);
        }
    }

    #[test]
    fn narrow_valley_minimum() {
        let f = NarrowValley::new();
        let x = Vector::new([1.0, 1.0]);

        assert_eq!(f.apply(&x), 0.0);
        assert_eq!(f.gradient(&x), Vector::zeros());
    }

    #[test]
    fn narrow_valley_derivatives() {
        let f = NarrowValley::new();
        let x = Vector::new([-0.7, 0.2]);

        assert_abs_diff_eq!(f.gradient(&x), numeric_gradient(&f, x), epsilon = 1e-4);

        let (analytic, numeric) = (f.hessian(&x), numeric_hessian(&f, x));
        for i in 0..2 {
            assert_abs_diff_eq!(analytic[i], numeric[i], epsilon = 1e-3);
        }
    }
}
