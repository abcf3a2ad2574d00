//! Nelder-Mead (simplex) optimization method.
//!
//! [Nelder-Mead](https://en.wikipedia.org/wiki/Nelder%E2%80%93Mead_method)
//! simplex-reflection method is a popular derivative-free optimization
//! algorithm. It keeps a [simplex](https://en.wikipedia.org/wiki/Simplex) of
//! _n + 1_ points and the simplex is reflected, expanded or contracted based on
//! the function values comparison.
//!
//! # References
//!
//! \[1\] [Numerical
//! Optimization](https://link.springer.com/book/10.1007/978-0-387-40065-5)
//!
//! \[2\] [Implementing the Nelder-Mead simplex algorithm with adaptive
//! parameters](https://link.springer.com/article/10.1007/s10589-010-9329-3)
//!
//! \[3\] [Less is more: Simplified Nelder-Mead method for large unconstrained
//! optimization](https://api.semanticscholar.org/CorpusID:59403095)
//!
//! \[4\] [Gilding the Lily: A Variant of the Nelder-Mead Algorithm Based on
//! Golden-Section
//! Search](https://link.springer.com/article/10.1023/A:1014842520519)

use getset::{CopyGetters, Setters};
use log::debug;
use thiserror::Error;

use crate::core::{
    CandidateSet, Elementwise, Function, PointValue, SimplexState, Step, Vector,
};

/// Family of coefficients for reflection, expansion and contractions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoefficientsFamily {
    /// Standard ("textbook") choice.
    Standard,
    /// The coefficients are adjusted compared to standard by taking function
    /// dimension into account to avoid diminishing of expansion and
    /// contraction steps in higher dimensions.
    Balanced,
    /// The coefficients are chosen such that the algorithm becomes a
    /// golden-section search.
    GoldenSection,
    /// The coefficients are left unchanged so it is the responsibility of the
    /// user to set them through [`NelderMeadOptions`].
    Fixed,
}

/// Options for [`NelderMead`] step.
#[derive(Debug, Clone, CopyGetters, Setters)]
#[getset(get_copy = "pub", set = "pub")]
pub struct NelderMeadOptions {
    /// Family for coefficients adaptation or fixed coefficients. Default:
    /// standard (see [`CoefficientsFamily`]).
    family: CoefficientsFamily,
    /// Coefficient for reflection operation. Default: `-1`.
    reflection_coeff: f64,
    /// Coefficient for expansion operation. Default: `-2`.
    expansion_coeff: f64,
    /// Coefficient for outer contraction operation. Default: `-0.5`.
    outer_contraction_coeff: f64,
    /// Coefficient for inner contraction operation. Default: `0.5`.
    inner_contraction_coeff: f64,
    /// Coefficient for shrinking operation. Default: `0.5`.
    shrink_coeff: f64,
}

impl Default for NelderMeadOptions {
    fn default() -> Self {
        Self {
            family: CoefficientsFamily::Standard,
            reflection_coeff: -1.0,
            expansion_coeff: -2.0,
            outer_contraction_coeff: -0.5,
            inner_contraction_coeff: 0.5,
            shrink_coeff: 0.5,
        }
    }
}

impl NelderMeadOptions {
    fn overwrite_coeffs(&mut self, dim: usize) {
        let Self {
            family,
            reflection_coeff,
            expansion_coeff,
            outer_contraction_coeff,
            inner_contraction_coeff,
            shrink_coeff,
        } = self;

        match family {
            CoefficientsFamily::Standard => {
                *reflection_coeff = -1.0;
                *expansion_coeff = -2.0;
                *outer_contraction_coeff = -0.5;
                *inner_contraction_coeff = -*outer_contraction_coeff;
                *shrink_coeff = 0.5;
            }
            CoefficientsFamily::Balanced => {
                let n_inv = 1.0 / dim as f64;

                *reflection_coeff = -1.0;
                *expansion_coeff = -(n_inv * 2.0 + 1.0);
                *outer_contraction_coeff = -(1.0 - n_inv);
                *inner_contraction_coeff = -*outer_contraction_coeff;
                *shrink_coeff = 1.0 - n_inv;
            }
            CoefficientsFamily::GoldenSection => {
                let alpha = 1.0 / (0.5 * (5f64.sqrt() + 1.0));
                *reflection_coeff = -1.0;
                *expansion_coeff = -1.0 / alpha;
                *outer_contraction_coeff = -alpha;
                *inner_contraction_coeff = alpha.powi(2);
                *shrink_coeff = alpha.powi(2);
            }
            CoefficientsFamily::Fixed => {
                // Leave unchanged.
            }
        }
    }
}

/// Nelder-Mead step.
///
/// See [module](self) documentation for more details.
#[derive(Debug, Clone)]
pub struct NelderMead {
    options: NelderMeadOptions,
}

impl NelderMead {
    /// Initializes Nelder-Mead with default options.
    pub fn new() -> Self {
        Self::with_options(NelderMeadOptions::default())
    }

    /// Initializes Nelder-Mead with given options.
    ///
    /// Coefficients of the options are overwritten according to the family,
    /// unless it is [`CoefficientsFamily::Fixed`]. The balanced family needs
    /// the dimension, which is known only when the step runs, so its
    /// coefficients are computed then.
    pub fn with_options(options: NelderMeadOptions) -> Self {
        Self { options }
    }
}

impl Default for NelderMead {
    fn default() -> Self {
        Self::new()
    }
}

/// Error returned from [`NelderMead`] step.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum NelderMeadError {
    /// Simplex collapsed so it is impossible to make any progress.
    #[error("simplex collapsed")]
    SimplexCollapsed,
    /// Simplex contains too many invalid values (NaN, infinity).
    #[error("simplex contains too many invalid values")]
    SimplexInvalid,
    /// Arithmetic error.
    #[error("{0}")]
    Core(#[from] crate::core::Error),
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Transformation {
    Reflection,
    Expansion,
    OuterContraction,
    InnerContraction,
    Shrinkage,
}

impl Transformation {
    fn as_str(&self) -> &str {
        match self {
            Transformation::Reflection => "reflection",
            Transformation::Expansion => "expansion",
            Transformation::OuterContraction => "outer contraction",
            Transformation::InnerContraction => "inner contraction",
            Transformation::Shrinkage => "shrinkage",
        }
    }
}

/// Point `from + t * (to - from)`.
fn on_line<const DIM: usize>(from: &Vector<DIM>, to: &Vector<DIM>, t: f64) -> Vector<DIM> {
    *from + (*to - *from) * t
}

fn nan_to_inf(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        // Not finite also covers NaN and negative infinity.
        f64::INFINITY
    }
}

fn evaluate<F: Function<DIM>, const DIM: usize>(x: Vector<DIM>, f: &F) -> PointValue<DIM> {
    PointValue::new(x, nan_to_inf(f.apply(&x)))
}

impl<F: Function<DIM>, const N: usize, const DIM: usize> Step<SimplexState<N, DIM>, F>
    for NelderMead
{
    const NAME: &'static str = "Nelder-Mead";

    type Error = NelderMeadError;

    fn next_domain(
        &mut self,
        state: &SimplexState<N, DIM>,
        f: &F,
    ) -> Result<CandidateSet<N, PointValue<DIM>>, Self::Error> {
        #[allow(clippy::let_unit_value)]
        let () = CandidateSet::<N, Vector<DIM>>::SIMPLEX;

        let mut options = self.options.clone();
        options.overwrite_coeffs(DIM);

        let NelderMeadOptions {
            reflection_coeff,
            expansion_coeff,
            outer_contraction_coeff,
            inner_contraction_coeff,
            shrink_coeff,
            ..
        } = options;

        // Sorted by value, the best vertex first.
        let mut simplex = state.domain().into_inner();
        let n = DIM;

        let error_count = simplex.iter().filter(|p| !p.value().is_finite()).count();

        if error_count >= N / 2 + N % 2 && error_count > 0 {
            // The simplex is too degenerate.
            debug!(
                "{} out of {} points in simplex have invalid value, returning error",
                error_count, N
            );
            return Err(NelderMeadError::SimplexInvalid);
        }

        // Calculate the centroid of all vertices but the worst.
        let centroid = simplex.as_slice()[..n]
            .iter()
            .fold(Vector::zeros(), |acc, p| acc + p.vector())
            .try_div_scalar(n as f64)?;

        debug!("centroid of simplex: {:?}", centroid.as_slice());

        let best = simplex[0];
        let second_worst = simplex[n - 1];
        let worst = simplex[n];

        // Perform one of possible simplex transformations.
        let reflection = evaluate(on_line(&centroid, &worst.vector(), reflection_coeff), f);

        #[allow(clippy::suspicious_else_formatting)]
        let transformation = if best.value() <= reflection.value()
            && reflection.value() < second_worst.value()
        {
            // Reflected point is neither best nor worst in the new simplex.
            // Just replace the worst point.
            simplex[n] = reflection;
            Transformation::Reflection
        } else if reflection.value() < best.value() {
            // Reflected point is better than the current best. Try to go
            // farther along this direction.
            let expansion = evaluate(on_line(&centroid, &worst.vector(), expansion_coeff), f);

            if expansion.value() < reflection.value() {
                // Expansion indeed helped, replace the worst point.
                simplex[n] = expansion;
                Transformation::Expansion
            } else {
                // Expansion didn't help, replace the worst point with the
                // reflected point.
                simplex[n] = reflection;
                Transformation::Reflection
            }
        } else
        /* reflection >= second worst */
        {
            // Reflected point is still worse than the second to last point. Try
            // to do a contraction.
            let transformation = if reflection.value() < worst.value() {
                // Try to perform outer contraction.
                let contraction =
                    evaluate(on_line(&centroid, &worst.vector(), outer_contraction_coeff), f);

                if contraction.value() <= reflection.value() {
                    // Use the contracted point instead of the reflected point
                    // because it's better.
                    simplex[n] = contraction;
                    Some(Transformation::OuterContraction)
                } else {
                    None
                }
            } else {
                // Try to perform inner contraction.
                let contraction =
                    evaluate(on_line(&centroid, &worst.vector(), inner_contraction_coeff), f);

                if contraction.value() <= worst.value() {
                    // The contracted point is better than the worst point.
                    simplex[n] = contraction;
                    Some(Transformation::InnerContraction)
                } else {
                    None
                }
            };

            match transformation {
                Some(transformation) => transformation,
                None => {
                    // Neither outside nor inside contraction was acceptable.
                    // Shrink the simplex towards the best point.
                    for i in 1..=n {
                        let xi = on_line(&best.vector(), &simplex[i].vector(), shrink_coeff);
                        simplex[i] = evaluate(xi, f);
                    }

                    Transformation::Shrinkage
                }
            }
        };

        // Establish the ordering of simplex points.
        simplex.sort_by_value();

        let best = simplex[0].value();
        let worst = simplex[n].value();

        debug!(
            "performed {},\tfx = {} - {}",
            transformation.as_str(),
            best,
            worst
        );

        if transformation == Transformation::Shrinkage
            || transformation == Transformation::InnerContraction
        {
            // Check whether the simplex collapsed or not. It can happen only
            // when shrinkage or, when n = 1 inner contraction, is performed,
            // because otherwise an error reduction was achieved. This
            // criterion is taken from "Less is more: Simplified Nelder-Mead
            // method for large unconstrained optimization".
            let eps = f64::EPSILON.sqrt();

            let numer = (worst - best) * 2.0;
            let denom = worst.abs() + best.abs() + eps;

            if numer / denom <= eps {
                debug!("simplex collapsed: {} / {} <= {}", numer, denom, eps);
                return Err(NelderMeadError::SimplexCollapsed);
            }
        }

        Ok(simplex)
    }
}
