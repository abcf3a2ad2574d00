//! Steepest descent with exact line search.
//!
//! [Gradient descent](https://en.wikipedia.org/wiki/Gradient_descent) moves
//! from the current iterate along the negative gradient. The step length is
//! found by minimizing the restriction of the function to that ray (see
//! [`AlongGradient`]) with [`Bisection`] over `[0, max_step]`, which is itself
//! an optimization run driven by [`Optimizer`].
//!
//! As in [Newton's method](super::newton), the domain of the state is the
//! segment `[previous, current]` of the last two iterates.

use getset::{CopyGetters, Setters};
use log::debug;
use thiserror::Error;

use crate::algo::Bisection;
use crate::core::{CandidateSet, PointState, PointValue, Segment, Step, Vector, WithGradient};
use crate::driver::{Optimizer, OptimizerParams, ParamsError};
use crate::functions::AlongGradient;

/// Options for [`GradientDescent`] step.
#[derive(Debug, Clone, CopyGetters, Setters)]
#[getset(get_copy = "pub", set = "pub")]
pub struct GradientDescentOptions {
    /// Upper end of the step length segment searched along the gradient.
    /// Default: `1`.
    max_step: f64,
    /// Absolute and relative tolerance of the line search. Default: `1e-10`.
    line_tolerance: f64,
    /// Iteration budget of the line search. Default: `100`.
    line_iterations: usize,
}

impl Default for GradientDescentOptions {
    fn default() -> Self {
        Self {
            max_step: 1.0,
            line_tolerance: 1e-10,
            line_iterations: 100,
        }
    }
}

/// Error returned from [`GradientDescent`] step.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum GradientDescentError {
    /// Options do not form valid line search parameters.
    #[error("invalid line search options: {0}")]
    InvalidOptions(#[from] ParamsError),
    /// Arithmetic error, in the line search or in the descent itself.
    #[error("{0}")]
    Core(#[from] crate::core::Error),
}

/// Gradient descent step. See [module](self) documentation for more details.
#[derive(Debug, Clone, Default)]
pub struct GradientDescent {
    options: GradientDescentOptions,
}

impl GradientDescent {
    /// Initializes gradient descent with default options.
    pub fn new() -> Self {
        Self::with_options(GradientDescentOptions::default())
    }

    /// Initializes gradient descent with given options.
    pub fn with_options(options: GradientDescentOptions) -> Self {
        Self { options }
    }
}

impl<F: WithGradient<DIM>, const DIM: usize> Step<PointState<DIM>, F> for GradientDescent {
    const NAME: &'static str = "Gradient descent";

    type Error = GradientDescentError;

    fn next_domain(
        &mut self,
        state: &PointState<DIM>,
        f: &F,
    ) -> Result<CandidateSet<2, PointValue<DIM>>, Self::Error> {
        let GradientDescentOptions {
            max_step,
            line_tolerance,
            line_iterations,
        } = self.options;

        let current = *state.current();
        let line = AlongGradient::new(f, current.vector());

        if line.direction().norm() == 0.0 {
            debug!("stationary point reached");
            return Ok(CandidateSet::new([current, current]));
        }

        let mut line_state = PointState::new(
            Segment::new([Vector::new([0.0]), Vector::new([max_step])]),
            &line,
        );
        let params = OptimizerParams::new(line_tolerance, line_tolerance, line_iterations)?;

        let outcome = Optimizer::with_observer(&mut line_state, &line, params, ())
            .optimize(&mut Bisection::new())?;
        let gamma = outcome.guess().vector()[0];

        debug!(
            "line search {} after {} iterations: step length = {}",
            if outcome.converged() {
                "converged"
            } else {
                "exhausted"
            },
            outcome.iterations(),
            gamma
        );

        let next = PointValue::evaluate(line.point(gamma), f);
        Ok(CandidateSet::new([current, next]))
    }
}
