use super::{
    candidate_set::{Gradient, Hessian},
    vector::Vector,
};

/// The trait for defining objective functions.
///
/// ## Defining a function
///
/// A function is any type that implements [`Function`] for a fixed dimension.
/// The only required method is [`apply`](Function::apply). Strategies that
/// need derivatives additionally require [`WithGradient`] or
/// [`WithHessian`], so a function advertises exactly what it can compute.
///
/// ```rust
/// use optlib::*;
///
/// // A problem is represented by a type.
/// struct Rosenbrock {
///     a: f64,
///     b: f64,
/// }
///
/// impl Function<2> for Rosenbrock {
///     // Apply trial values of variables to the function.
///     fn apply(&self, x: &Vector<2>) -> f64 {
///         (self.a - x[0]).powi(2) + self.b * (x[1] - x[0].powi(2)).powi(2)
///     }
/// }
///
/// let f = Rosenbrock { a: 1.0, b: 100.0 };
/// assert_eq!(f.apply(&Vector::new([1.0, 1.0])), 0.0);
/// ```
pub trait Function<const DIM: usize> {
    /// Calculates the function value at `x`.
    fn apply(&self, x: &Vector<DIM>) -> f64;
}

/// Functions that can compute their gradient.
pub trait WithGradient<const DIM: usize>: Function<DIM> {
    /// Calculates the gradient at `x`.
    fn gradient(&self, x: &Vector<DIM>) -> Gradient<DIM>;
}

/// Functions that can compute their Hessian matrix.
pub trait WithHessian<const DIM: usize>: WithGradient<DIM> {
    /// Calculates the Hessian matrix at `x`, stored by rows.
    fn hessian(&self, x: &Vector<DIM>) -> Hessian<DIM>;
}

impl<F, const DIM: usize> Function<DIM> for &F
where
    F: Function<DIM> + ?Sized,
{
    fn apply(&self, x: &Vector<DIM>) -> f64 {
        F::apply(*self, x)
    }
}

impl<F, const DIM: usize> WithGradient<DIM> for &F
where
    F: WithGradient<DIM> + ?Sized,
{
    fn gradient(&self, x: &Vector<DIM>) -> Gradient<DIM> {
        F::gradient(*self, x)
    }
}

impl<F, const DIM: usize> WithHessian<DIM> for &F
where
    F: WithHessian<DIM> + ?Sized,
{
    fn hessian(&self, x: &Vector<DIM>) -> Hessian<DIM> {
        F::hessian(*self, x)
    }
}
