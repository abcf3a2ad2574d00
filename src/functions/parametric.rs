use crate::core::{CandidateSet, Function, Gradient, Vector, WithGradient};

/// A function of a point and a vector of parameters.
///
/// Binding the parameters with [`WithParams`] gives an ordinary
/// [`Function`] of the point. Gradients of parametric functions are taken with
/// respect to the parameters, which is what fitting the parameters to data
/// needs.
pub trait ParametricFunction<const DIMX: usize, const DIMP: usize> {
    /// Calculates the function value at `x` for parameters `params`.
    fn apply_with(&self, x: &Vector<DIMX>, params: &Vector<DIMP>) -> f64;

    /// Calculates the function values at all points of `xs`.
    fn apply_many<const N: usize>(
        &self,
        xs: &CandidateSet<N, Vector<DIMX>>,
        params: &Vector<DIMP>,
    ) -> Vector<N> {
        Vector::from_fn(|i| self.apply_with(&xs[i], params))
    }
}

/// Parametric functions that can compute the gradient with respect to the
/// parameters.
pub trait ParametricWithGradient<const DIMX: usize, const DIMP: usize>:
    ParametricFunction<DIMX, DIMP>
{
    /// Calculates the gradient with respect to the parameters.
    fn params_gradient(&self, x: &Vector<DIMX>, params: &Vector<DIMP>) -> Gradient<DIMP>;
}

/// A parametric function with fixed parameters.
#[derive(Debug, Clone, Copy)]
pub struct WithParams<F, const DIMP: usize> {
    f: F,
    params: Vector<DIMP>,
}

impl<F, const DIMP: usize> WithParams<F, DIMP> {
    /// Binds `params` to `f`.
    pub fn new(f: F, params: Vector<DIMP>) -> Self {
        Self { f, params }
    }

    /// The bound parameters.
    pub fn params(&self) -> &Vector<DIMP> {
        &self.params
    }

    /// Replaces the bound parameters.
    pub fn set_params(&mut self, params: Vector<DIMP>) {
        self.params = params;
    }
}

impl<F, const DIMX: usize, const DIMP: usize> Function<DIMX> for WithParams<F, DIMP>
where
    F: ParametricFunction<DIMX, DIMP>,
{
    fn apply(&self, x: &Vector<DIMX>) -> f64 {
        self.f.apply_with(x, &self.params)
    }
}

/// Polynomial `p(x) = sum a_k x^k` of degree `DIMP - 1` with the coefficients
/// `a` as parameters.
#[derive(Debug, Clone, Copy, Default)]
pub struct Polynomial<const DIMP: usize>(());

impl<const DIMP: usize> Polynomial<DIMP> {
    /// Initializes the function.
    pub fn new() -> Self {
        Self(())
    }
}

impl<const DIMP: usize> ParametricFunction<1, DIMP> for Polynomial<DIMP> {
    fn apply_with(&self, x: &Vector<1>, params: &Vector<DIMP>) -> f64 {
        // Horner's scheme.
        params.as_slice().iter().rev().fold(0.0, |acc, a| acc * x[0] + a)
    }
}

impl<const DIMP: usize> ParametricWithGradient<1, DIMP> for Polynomial<DIMP> {
    fn params_gradient(&self, x: &Vector<1>, _params: &Vector<DIMP>) -> Gradient<DIMP> {
        let mut power = 1.0;
        Vector::from_fn(|_| {
            let current = power;
            power *= x[0];
            current
        })
    }
}

/// Bound polynomials have the derivative `sum k a_k x^(k - 1)`.
impl<const DIMP: usize> WithGradient<1> for WithParams<Polynomial<DIMP>, DIMP> {
    fn gradient(&self, x: &Vector<1>) -> Gradient<1> {
        let derivative = (1..DIMP)
            .rev()
            .fold(0.0, |acc, k| acc * x[0] + k as f64 * self.params[k]);
        Vector::new([derivative])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn polynomial_values() {
        let p = Polynomial::<3>::new();
        let params = Vector::new([1.0, -2.0, 0.5]);

        assert_eq!(p.apply_with(&Vector::new([2.0]), &params), -1.0);
        assert_eq!(
            p.apply_many(&CandidateSet::new([Vector::new([0.0]), Vector::new([4.0])]), &params),
            Vector::new([1.0, 1.0])
        );
        assert_eq!(
            p.params_gradient(&Vector::new([3.0]), &params),
            Vector::new([1.0, 3.0, 9.0])
        );
    }

    #[test]
    fn bound_parameters() {
        let mut f = WithParams::new(Polynomial::<3>::new(), Vector::new([1.0, -2.0, 0.5]));
        let x = Vector::new([2.0]);

        assert_eq!(f.apply(&x), -1.0);
        // p'(x) = -2 + x
        assert_eq!(f.gradient(&x), Vector::new([0.0]));

        f.set_params(Vector::new([0.0, 0.0, 1.0]));
        assert_eq!(f.apply(&x), 4.0);
        assert_eq!(f.gradient(&x), Vector::new([4.0]));
    }
}
