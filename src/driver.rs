//! High-level API for running an optimization.
//!
//! The [`Optimizer`] borrows a [state](crate::State) and a
//! [function](crate::Function) and runs a [step
//! strategy](crate::Step) until the state converges or the iteration
//! budget is exhausted:
//!
//! ```rust
//! use optlib::*;
//! use optlib::algo::Bisection;
//! use optlib::functions::Parabola;
//!
//! let f = Parabola::new();
//! let mut state = PointState::new(Segment::new([Vector::new([-2.0]), Vector::new([3.0])]), &f);
//! let params = OptimizerParams::new(1e-5, 1e-5, 300).expect("valid params");
//!
//! let mut optimizer = Optimizer::new(&mut state, &f, params);
//! let outcome = optimizer.optimize(&mut Bisection::new()).expect("no step error");
//!
//! assert!(outcome.converged());
//! assert!(outcome.guess().vector()[0].abs() < 1e-4);
//! ```
//!
//! Running out of the budget is not an error. The returned [`Outcome`] is
//! then flagged as not converged and carries the best guess so far.
//!
//! If you need more control over the iteration process, you can do the
//! iterations manually:
//!
//! ```rust
//! # use optlib::*;
//! # use optlib::algo::Bisection;
//! # use optlib::functions::Parabola;
//! #
//! # let f = Parabola::new();
//! # let mut state = PointState::new(Segment::new([Vector::new([-2.0]), Vector::new([3.0])]), &f);
//! # let params = OptimizerParams::new(1e-5, 1e-5, 300).expect("valid params");
//! #
//! let mut optimizer = Optimizer::new(&mut state, &f, params);
//! let mut bisection = Bisection::new();
//!
//! loop {
//!     let guess = optimizer.next(&mut bisection).expect("no step error");
//!     // ...
//! #   break;
//! }
//! ```

use std::fmt::Debug;

use getset::{CopyGetters, Getters};
use log::debug;
use thiserror::Error;

use crate::core::{State, Step};

/// Error of invalid [`OptimizerParams`].
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ParamsError {
    /// Absolute tolerance is negative or NaN.
    #[error("absolute tolerance must be non-negative, got {0}")]
    AbsoluteTolerance(f64),
    /// Relative tolerance is negative or NaN.
    #[error("relative tolerance must be non-negative, got {0}")]
    RelativeTolerance(f64),
}

/// Tolerances and iteration budget of a run.
///
/// All three values are required. There are no defaults.
#[derive(Debug, Clone, Copy, PartialEq, CopyGetters)]
#[getset(get_copy = "pub")]
pub struct OptimizerParams {
    /// Bound on the standard deviation of every component of the domain.
    absolute_tolerance: f64,
    /// Bound on the coefficient of variation of every component of the
    /// domain.
    relative_tolerance: f64,
    /// Maximum number of steps.
    max_iterations: usize,
}

impl OptimizerParams {
    /// Validates and creates the parameters.
    pub fn new(
        absolute_tolerance: f64,
        relative_tolerance: f64,
        max_iterations: usize,
    ) -> Result<Self, ParamsError> {
        // Negated comparisons reject NaN as well.
        if !(absolute_tolerance >= 0.0) {
            return Err(ParamsError::AbsoluteTolerance(absolute_tolerance));
        }

        if !(relative_tolerance >= 0.0) {
            return Err(ParamsError::RelativeTolerance(relative_tolerance));
        }

        Ok(Self {
            absolute_tolerance,
            relative_tolerance,
            max_iterations,
        })
    }
}

/// Result of [`Optimizer::optimize`].
#[derive(Debug, Clone, Copy, PartialEq, Getters, CopyGetters)]
pub struct Outcome<P> {
    /// Whether the state converged within the budget.
    #[getset(get_copy = "pub")]
    converged: bool,
    /// The final guess, the best one so far if the run did not converge.
    #[getset(get = "pub")]
    guess: P,
    /// Number of steps taken.
    #[getset(get_copy = "pub")]
    iterations: usize,
}

impl<P> Outcome<P> {
    /// Unwraps the final guess.
    pub fn into_guess(self) -> P {
        self.guess
    }
}

/// Receives progress of a run.
///
/// All hooks do nothing by default. The unit type is a silent observer.
pub trait Observer<P> {
    /// Called once before the first convergence check.
    fn start(&mut self, _name: &'static str, _guess: &P) {}

    /// Called after every step with the number of steps taken so far.
    fn iteration(&mut self, _iteration: usize, _guess: &P) {}

    /// Called once with the result.
    fn finish(&mut self, _outcome: &Outcome<P>) {}
}

impl<P> Observer<P> for () {}

impl<P, O: Observer<P> + ?Sized> Observer<P> for &mut O {
    fn start(&mut self, name: &'static str, guess: &P) {
        (**self).start(name, guess);
    }

    fn iteration(&mut self, iteration: usize, guess: &P) {
        (**self).iteration(iteration, guess);
    }

    fn finish(&mut self, outcome: &Outcome<P>) {
        (**self).finish(outcome);
    }
}

/// Observer writing the progress to the [`log`] facade at debug level.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogObserver;

impl<P: Debug> Observer<P> for LogObserver {
    fn start(&mut self, name: &'static str, guess: &P) {
        debug!("{}: initial guess = {:?}", name, guess);
    }

    fn iteration(&mut self, iteration: usize, guess: &P) {
        debug!("iteration {}: guess = {:?}", iteration, guess);
    }

    fn finish(&mut self, outcome: &Outcome<P>) {
        if outcome.converged {
            debug!(
                "converged after {} iterations: {:?}",
                outcome.iterations, outcome.guess
            );
        } else {
            debug!(
                "budget of {} iterations exhausted: {:?}",
                outcome.iterations, outcome.guess
            );
        }
    }
}

/// The driver of an optimization run.
///
/// For logging through the [`log`] facade, use [`Optimizer::new`]. For a
/// custom observer, use [`Optimizer::with_observer`]. For the usage of the
/// driver, see [module](self) documentation.
pub struct Optimizer<'a, S, F, O = LogObserver> {
    state: &'a mut S,
    f: &'a F,
    params: OptimizerParams,
    observer: O,
}

impl<'a, S: State, F> Optimizer<'a, S, F> {
    /// Initializes the driver with the logging observer.
    pub fn new(state: &'a mut S, f: &'a F, params: OptimizerParams) -> Self {
        Self::with_observer(state, f, params, LogObserver)
    }
}

impl<'a, S: State, F, O: Observer<S::Candidate>> Optimizer<'a, S, F, O> {
    /// Initializes the driver with given observer.
    pub fn with_observer(state: &'a mut S, f: &'a F, params: OptimizerParams, observer: O) -> Self {
        Self {
            state,
            f,
            params,
            observer,
        }
    }

    /// Returns the parameters of the run.
    pub fn params(&self) -> &OptimizerParams {
        &self.params
    }

    /// Returns reference to the state.
    pub fn state(&self) -> &S {
        &*self.state
    }

    /// Does one step regardless of convergence and budget, returning the new
    /// guess in case of no error.
    #[allow(clippy::should_implement_trait)]
    pub fn next<St>(&mut self, step: &mut St) -> Result<S::Candidate, St::Error>
    where
        St: Step<S, F>,
    {
        let domain = step.next_domain(self.state, self.f)?;
        self.state.set_domain(domain);
        Ok(self.state.guess())
    }

    /// Runs steps of `step` until the state converges or the budget is
    /// exhausted.
    ///
    /// Convergence is checked before every step, so a state that is converged
    /// from the start yields zero iterations. Any error of the convergence
    /// test or of the step aborts the run.
    pub fn optimize<St>(&mut self, step: &mut St) -> Result<Outcome<S::Candidate>, St::Error>
    where
        St: Step<S, F>,
    {
        self.observer.start(St::NAME, &self.state.guess());

        let mut iterations = 0;

        let converged = loop {
            if self
                .state
                .is_converged(self.params.absolute_tolerance, self.params.relative_tolerance)?
            {
                break true;
            }

            if iterations == self.params.max_iterations {
                break false;
            }

            let guess = self.next(step)?;
            iterations += 1;
            self.observer.iteration(iterations, &guess);
        };

        let outcome = Outcome {
            converged,
            guess: self.state.guess(),
            iterations,
        };

        self.observer.finish(&outcome);
        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::algo::Bisection;
    use crate::core::{CandidateSet, Error, PointState, PointValue, Segment, Vector};
    use crate::functions::Parabola;

    fn segment(a: f64, b: f64) -> Segment<1> {
        Segment::new([Vector::new([a]), Vector::new([b])])
    }

    #[derive(Default)]
    struct Recorder {
        name: &'static str,
        iterations: Vec<usize>,
        finished: bool,
    }

    impl<P> Observer<P> for Recorder {
        fn start(&mut self, name: &'static str, _guess: &P) {
            self.name = name;
        }

        fn iteration(&mut self, iteration: usize, _guess: &P) {
            self.iterations.push(iteration);
        }

        fn finish(&mut self, _outcome: &Outcome<P>) {
            self.finished = true;
        }
    }

    struct Failing;

    impl Step<PointState<1>, Parabola> for Failing {
        const NAME: &'static str = "Failing";
        type Error = Error;

        fn next_domain(
            &mut self,
            _state: &PointState<1>,
            _f: &Parabola,
        ) -> Result<CandidateSet<2, PointValue<1>>, Error> {
            Err(Error::InvalidValue)
        }
    }

    #[test]
    fn params_validation() {
        assert!(OptimizerParams::new(0.0, 0.0, 0).is_ok());
        assert_eq!(
            OptimizerParams::new(-1.0, 1e-5, 10),
            Err(ParamsError::AbsoluteTolerance(-1.0))
        );
        assert!(matches!(
            OptimizerParams::new(1e-5, f64::NAN, 10),
            Err(ParamsError::RelativeTolerance(_))
        ));
    }

    #[test]
    fn bisection_on_parabola() {
        let f = Parabola::new();
        let mut state = PointState::new(segment(-2.0, 2.0), &f);
        let params = OptimizerParams::new(1e-5, 1e-5, 300).unwrap();

        let outcome = Optimizer::new(&mut state, &f, params)
            .optimize(&mut Bisection::new())
            .unwrap();

        assert!(outcome.converged());
        assert!(outcome.iterations() <= 300);
        assert!(outcome.guess().vector()[0].abs() < 1e-4);
    }

    #[test]
    fn bisection_on_asymmetric_segment() {
        let f = Parabola::new();
        let mut state = PointState::new(segment(-2.0, 3.0), &f);
        let params = OptimizerParams::new(1e-5, 1e-5, 300).unwrap();

        let outcome = Optimizer::new(&mut state, &f, params)
            .optimize(&mut Bisection::new())
            .unwrap();

        assert!(outcome.converged());
        assert!(outcome.iterations() > 1);
        assert!(outcome.guess().vector()[0].abs() < 1e-4);
    }

    #[test]
    fn zero_budget_returns_initial_guess() {
        let f = Parabola::new();
        let mut state = PointState::new(segment(-2.0, 3.0), &f);
        let initial = state.guess();
        let params = OptimizerParams::new(1e-5, 1e-5, 0).unwrap();

        let outcome = Optimizer::new(&mut state, &f, params)
            .optimize(&mut Bisection::new())
            .unwrap();

        assert!(!outcome.converged());
        assert_eq!(outcome.iterations(), 0);
        assert_eq!(*outcome.guess(), initial);
    }

    #[test]
    fn exhausted_budget_is_not_an_error() {
        let f = Parabola::new();
        let mut state = PointState::new(segment(-2.0, 3.0), &f);
        let params = OptimizerParams::new(1e-12, 1e-12, 3).unwrap();

        let outcome = Optimizer::new(&mut state, &f, params)
            .optimize(&mut Bisection::new())
            .unwrap();

        assert!(!outcome.converged());
        assert_eq!(outcome.iterations(), 3);
        assert_eq!(*outcome.guess(), state.guess());
    }

    #[test]
    fn converged_state_takes_no_step() {
        let f = Parabola::new();
        let mut state = PointState::new(segment(1.0, 1.0), &f);
        let params = OptimizerParams::new(1e-5, 1e-5, 10).unwrap();

        let outcome = Optimizer::with_observer(&mut state, &f, params, ())
            .optimize(&mut Failing)
            .unwrap();

        assert!(outcome.converged());
        assert_eq!(outcome.iterations(), 0);
    }

    #[test]
    fn step_error_propagates() {
        let f = Parabola::new();
        let mut state = PointState::new(segment(-2.0, 3.0), &f);
        let params = OptimizerParams::new(1e-5, 1e-5, 10).unwrap();

        let result = Optimizer::with_observer(&mut state, &f, params, ()).optimize(&mut Failing);

        assert_eq!(result, Err(Error::InvalidValue));
    }

    #[test]
    fn observer_sees_every_iteration() {
        let f = Parabola::new();
        let mut state = PointState::new(segment(-2.0, 3.0), &f);
        let params = OptimizerParams::new(1e-12, 1e-12, 5).unwrap();
        let mut recorder = Recorder::default();

        let outcome = Optimizer::with_observer(&mut state, &f, params, &mut recorder)
            .optimize(&mut Bisection::new())
            .unwrap();

        assert_eq!(outcome.iterations(), 5);
        assert_eq!(recorder.name, "Bisection");
        assert_eq!(recorder.iterations, vec![1, 2, 3, 4, 5]);
        assert!(recorder.finished);
    }
}
