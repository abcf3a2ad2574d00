//! Golden-section search.
//!
//! [Golden-section search](https://en.wikipedia.org/wiki/Golden-section_search)
//! narrows a bracketing segment using function values only. Two interior
//! points divide the segment in the golden ratio and the part beyond the worse
//! of them is discarded. One of the interior points stays interior in the new
//! segment and is reused, so after the first step every step costs one
//! function evaluation.
//!
//! **Important:** Only one-dimensional unimodal functions are supported. For
//! other functions, the method finds some local minimum inside the segment.

use log::debug;

use crate::core::{CandidateSet, Error, Function, PointState, PointValue, Segment, Step, Vector};

/// The inverse golden ratio.
const INV_PHI: f64 = 0.618_033_988_749_895;

/// Golden-section step. See [module](self) documentation for more details.
#[derive(Debug, Clone, Default)]
pub struct GoldenSection {
    retained: Option<(Segment<1>, PointValue<1>)>,
}

impl GoldenSection {
    /// Initializes golden-section search.
    pub fn new() -> Self {
        Self { retained: None }
    }

    /// Resets the internal state of the step.
    pub fn reset(&mut self) {
        self.retained = None;
    }
}

fn checked<F: Function<1>>(x: f64, f: &F) -> Result<PointValue<1>, Error> {
    let p = PointValue::evaluate(Vector::new([x]), f);

    if p.value().is_nan() {
        Err(Error::InvalidValue)
    } else {
        Ok(p)
    }
}

impl<F: Function<1>> Step<PointState<1>, F> for GoldenSection {
    const NAME: &'static str = "Golden-section";

    type Error = Error;

    fn next_domain(
        &mut self,
        state: &PointState<1>,
        f: &F,
    ) -> Result<CandidateSet<2, PointValue<1>>, Self::Error> {
        let [a, b] = state.domain().into_inner();
        let (lower, upper) = if a.vector()[0] <= b.vector()[0] {
            (a, b)
        } else {
            (b, a)
        };

        let lo = lower.vector()[0];
        let width = upper.vector()[0] - lo;
        let x1 = lo + (1.0 - INV_PHI) * width;
        let x2 = lo + INV_PHI * width;

        // The interior point from the previous step is valid only if the
        // domain is the one that step returned.
        let retained = self
            .retained
            .take()
            .filter(|(segment, _)| *segment == state.segment())
            .map(|(_, p)| p);

        let (inner_left, inner_right) = match retained {
            Some(p) if (p.vector()[0] - x1).abs() <= (p.vector()[0] - x2).abs() => {
                (p, checked(x2, f)?)
            }
            Some(p) => (checked(x1, f)?, p),
            None => (checked(x1, f)?, checked(x2, f)?),
        };

        let (domain, keep) = if inner_left.value() <= inner_right.value() {
            (CandidateSet::new([lower, inner_right]), inner_left)
        } else {
            (CandidateSet::new([inner_left, upper]), inner_right)
        };

        debug!(
            "golden section: f({}) = {}, f({}) = {}",
            inner_left.vector()[0],
            inner_left.value(),
            inner_right.vector()[0],
            inner_right.value()
        );

        self.retained = Some((domain.points(), keep));
        Ok(domain)
    }
}
