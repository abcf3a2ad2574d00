//! Newton's method for minimization.
//!
//! [Newton's
//! method](https://en.wikipedia.org/wiki/Newton%27s_method_in_optimization)
//! jumps to the stationary point of the local quadratic model given by the
//! gradient and the Hessian. Near a minimum with positive definite Hessian it
//! converges quadratically; a quadratic function is minimized in one step.
//!
//! The domain of the state is the segment `[previous, current]` of the last
//! two iterates, so the state converges once the iterates stop moving. The
//! initial segment must hold the starting point second and any other point
//! first.
//!
//! # References
//!
//! \[1\] [Numerical
//! Optimization](https://link.springer.com/book/10.1007/978-0-387-40065-5)

use log::debug;
use nalgebra::{Const, DimMin};
use thiserror::Error;

use crate::core::{CandidateSet, PointState, PointValue, Step, Vector, WithHessian};

/// Newton step. See [module](self) documentation for more details.
#[derive(Debug, Clone, Default)]
pub struct Newton(());

impl Newton {
    /// Initializes Newton's method.
    pub fn new() -> Self {
        Self(())
    }
}

/// Error returned from [`Newton`] step.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum NewtonError {
    /// The Hessian matrix is singular so the Newton direction is not defined.
    #[error("singular Hessian")]
    SingularHessian,
    /// Arithmetic error.
    #[error("{0}")]
    Core(#[from] crate::core::Error),
}

impl<F: WithHessian<DIM>, const DIM: usize> Step<PointState<DIM>, F> for Newton
where
    Const<DIM>: DimMin<Const<DIM>, Output = Const<DIM>>,
{
    const NAME: &'static str = "Newton";

    type Error = NewtonError;

    fn next_domain(
        &mut self,
        state: &PointState<DIM>,
        f: &F,
    ) -> Result<CandidateSet<2, PointValue<DIM>>, Self::Error> {
        let current = *state.current();
        let x = current.vector();

        let g = f.gradient(&x);
        let h = f.hessian(&x);

        let direction = h
            .to_matrix()
            .lu()
            .solve(g.as_inner())
            .filter(|d| d.iter().all(|di| di.is_finite()))
            .ok_or(NewtonError::SingularHessian)?;

        let next = x - Vector::from_inner(direction);

        debug!("newton step: {:?} -> {:?}", x.as_slice(), next.as_slice());

        Ok(CandidateSet::new([current, PointValue::evaluate(next, f)]))
    }
}
