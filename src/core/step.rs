use super::{base::Error, state::State};

/// Common interface for all step strategies.
///
/// A step strategy proposes a new evaluated domain from the current state and
/// the function. It is the only part of the optimization process that varies
/// between methods; checking convergence and counting iterations is done by
/// the [`Optimizer`](crate::driver::Optimizer).
///
/// The capability a strategy needs is a bound on `F` in its implementation.
/// Bisection, for example, implements `Step<PointState<1>, F>` only for
/// `F: WithGradient<1>`, so using it with a value-only function does not
/// compile.
///
/// ## Implementing a step strategy
///
/// Here is a strategy that shrinks a segment towards its better end, which
/// is a minimization method only in a very generous sense.
///
/// ```rust
/// use optlib::*;
///
/// struct Shrink;
///
/// impl<F: Function<1>> Step<PointState<1>, F> for Shrink {
///     const NAME: &'static str = "Shrink";
///     type Error = optlib::Error;
///
///     fn next_domain(
///         &mut self,
///         state: &PointState<1>,
///         f: &F,
///     ) -> Result<CandidateSet<2, PointValue<1>>, Self::Error> {
///         let [a, b] = state.domain().into_inner();
///         let (better, worse) = if a.value() <= b.value() { (a, b) } else { (b, a) };
///         let mid = (better.vector() + worse.vector()) * 0.5;
///
///         Ok(CandidateSet::new([better, PointValue::evaluate(mid, f)]))
///     }
/// }
/// ```
pub trait Step<S: State, F> {
    /// Name of the strategy.
    const NAME: &'static str;

    /// Error type of the step. Arithmetic errors of the core are always
    /// convertible into it.
    type Error: From<Error>;

    /// Computes the next domain.
    fn next_domain(&mut self, state: &S, f: &F) -> Result<S::Domain, Self::Error>;
}
