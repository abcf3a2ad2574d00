//! Bisection method.
//!
//! [Bisection](https://en.wikipedia.org/wiki/Bisection_method) halves a
//! bracketing segment in every step, keeping the half which contains the
//! minimum as indicated by the sign of the derivative. The segment length
//! decreases geometrically, so the method always converges to a stationary
//! point inside the initial segment, although slowly compared to methods
//! using second derivatives.
//!
//! **Important:** Only one-dimensional functions with a derivative are
//! supported. A value-only function is rejected at compile time:
//!
//! ```rust,compile_fail
//! use optlib::*;
//! use optlib::algo::Bisection;
//! use optlib::functions::Sphere;
//!
//! let f = Sphere::<1>::new();
//! let mut state = PointState::new(Segment::new([Vector::new([-1.0]), Vector::new([1.0])]), &f);
//! let params = OptimizerParams::new(1e-6, 1e-6, 100).unwrap();
//!
//! Optimizer::new(&mut state, &f, params).optimize(&mut Bisection::new());
//! ```

use getset::{CopyGetters, Setters};
use log::debug;

use crate::core::{CandidateSet, Error, PointState, PointValue, State, Step, WithGradient};

/// Variant of the bisection method.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum BisectionVariant {
    /// Keeps the half towards which the function decreases at the midpoint.
    Midpoint,
    /// Keeps the half on whose ends the derivative has opposite signs. Needs
    /// one more derivative evaluation per step, but does not assume that the
    /// derivative at the ends of the initial segment points inwards.
    SignChange,
}

/// Options for [`Bisection`] step.
#[derive(Debug, Clone, CopyGetters, Setters)]
#[getset(get_copy = "pub", set = "pub")]
pub struct BisectionOptions {
    /// Variant of the bisection method. Default: midpoint (see
    /// [`BisectionVariant`]).
    variant: BisectionVariant,
}

impl Default for BisectionOptions {
    fn default() -> Self {
        Self {
            variant: BisectionVariant::Midpoint,
        }
    }
}

/// Bisection step. See [module](self) documentation for more details.
#[derive(Debug, Clone, Default)]
pub struct Bisection {
    options: BisectionOptions,
}

impl Bisection {
    /// Initializes bisection with default options.
    pub fn new() -> Self {
        Self::with_options(BisectionOptions::default())
    }

    /// Initializes bisection with given options.
    pub fn with_options(options: BisectionOptions) -> Self {
        Self { options }
    }
}

fn derivative<F: WithGradient<1>>(f: &F, x: &PointValue<1>) -> Result<f64, Error> {
    let d = f.gradient(&x.vector())[0];

    if d.is_nan() {
        Err(Error::InvalidValue)
    } else {
        Ok(d)
    }
}

impl<F: WithGradient<1>> Step<PointState<1>, F> for Bisection {
    const NAME: &'static str = "Bisection";

    type Error = Error;

    fn next_domain(
        &mut self,
        state: &PointState<1>,
        f: &F,
    ) -> Result<<PointState<1> as State>::Domain, Self::Error> {
        let BisectionOptions { variant } = self.options;

        let [a, b] = state.domain().into_inner();
        let mid = PointValue::evaluate((a.vector() + b.vector()) * 0.5, f);
        let d_mid = derivative(f, &mid)?;

        debug!("derivative at midpoint {} = {}", mid.vector()[0], d_mid);

        if d_mid == 0.0 {
            // Stationary point hit exactly.
            return Ok(CandidateSet::new([mid, mid]));
        }

        let keep_a = match variant {
            BisectionVariant::Midpoint => {
                // The function decreases towards lower x iff the derivative is
                // positive.
                let a_is_lower = a.vector()[0] <= b.vector()[0];
                a_is_lower == (d_mid > 0.0)
            }
            BisectionVariant::SignChange => {
                let d_a = derivative(f, &a)?;
                d_a * d_mid <= 0.0
            }
        };

        if keep_a {
            Ok(CandidateSet::new([a, mid]))
        } else {
            Ok(CandidateSet::new([mid, b]))
        }
    }
}
