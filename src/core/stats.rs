//! Statistics over sets of candidates and the convergence test built on them.

use super::{
    base::Error,
    elementwise::{Arithmetic, Elementwise},
};

/// Elementwise average of `items`.
///
/// Accumulated as offsets from the first item, so the mean of identical
/// items is exactly that item.
///
/// The slice must not be empty, which [`CandidateSet`](super::CandidateSet)
/// guarantees at compile time.
pub(crate) fn mean<T: Arithmetic>(items: &[T]) -> T {
    debug_assert!(!items.is_empty(), "mean of an empty set");
    let first = items[0];
    let offset = items.iter().fold(T::zero(), |acc, x| acc + (*x - first));
    first + offset * (1.0 / items.len() as f64)
}

/// Returns `(mean, variance)` where `variance = (1/n) sum (x_i - mean)^2`,
/// computed elementwise.
pub(crate) fn dispersion<T: Arithmetic>(items: &[T]) -> (T, T) {
    let avg = mean(items);
    let sum = items.iter().fold(T::zero(), |acc, x| {
        let d = *x - avg;
        acc + d * d
    });
    (avg, sum * (1.0 / items.len() as f64))
}

/// Returns `(coefficient_of_variation, standard_deviation)`.
///
/// The standard deviation is the elementwise square root of `variance` and
/// the coefficient of variation is the standard deviation divided by the
/// elementwise absolute value of `mean`. A component whose mean is exactly
/// zero has an infinite coefficient, so only the absolute tolerance can be
/// met there.
pub fn variance_coefficient<T: Elementwise>(mean: &T, variance: &T) -> Result<(T, T), Error> {
    let std = variance.sqrt_elementwise()?;
    let magnitude = mean.abs_elementwise();
    let coefficient = std.zip_components(&magnitude, |s, m| {
        if m == 0.0 {
            f64::INFINITY
        } else {
            s / m
        }
    });
    Ok((coefficient, std))
}

/// The convergence test of a set of candidates.
///
/// Converged iff every component (each spatial coordinate and, for
/// point-values, the objective value) satisfies `std < abs_tol` or
/// `coefficient_of_variation < rel_tol`.
pub fn is_converged<T: Arithmetic>(items: &[T], abs_tol: f64, rel_tol: f64) -> Result<bool, Error> {
    let (avg, variance) = dispersion(items);
    let (coefficient, std) = variance_coefficient(&avg, &variance)?;

    Ok((0..std.n_components())
        .all(|i| std.component(i) < abs_tol || coefficient.component(i) < rel_tol))
}

#[cfg(test)]
mod tests {
    use super::*;

    use num_traits::Zero;

    use crate::core::{PointValue, Vector};

    fn segment(a: f64, b: f64) -> [PointValue<1>; 2] {
        [
            PointValue::new(Vector::new([a]), a * a),
            PointValue::new(Vector::new([b]), b * b),
        ]
    }

    #[test]
    fn constant_set_has_zero_variance() {
        let v = Vector::new([1.5, -2.0, 3.25]);
        let items = [v; 5];

        assert_eq!(mean(&items), v);
        assert_eq!(dispersion(&items).1, Vector::zeros());
    }

    #[test]
    fn mean_of_identical_items_is_exact() {
        for v in [0.1, 0.7, 1.1, 2.3, 3.3] {
            let p = PointValue::new(Vector::new([v, -v]), 3.0 * v);

            let (avg, variance) = dispersion(&[p; 3]);
            assert_eq!(avg, p);
            assert_eq!(variance, PointValue::zero());

            let (avg, variance) = dispersion(&[p; 7]);
            assert_eq!(avg, p);
            assert_eq!(variance, PointValue::zero());
        }
    }

    #[test]
    fn dispersion_of_two_points() {
        let items = [Vector::new([0.0, 2.0]), Vector::new([2.0, 2.0])];
        let (avg, variance) = dispersion(&items);

        assert_eq!(avg, Vector::new([1.0, 2.0]));
        assert_eq!(variance, Vector::new([1.0, 0.0]));
    }

    #[test]
    fn coefficient_is_infinite_for_zero_mean() {
        let (coefficient, std) =
            variance_coefficient(&Vector::new([0.0, 2.0]), &Vector::new([4.0, 4.0])).unwrap();

        assert_eq!(std, Vector::new([2.0, 2.0]));
        assert_eq!(coefficient[0], f64::INFINITY);
        assert_eq!(coefficient[1], 1.0);
    }

    #[test]
    fn negative_variance_is_error() {
        assert_eq!(
            variance_coefficient(&Vector::new([1.0]), &Vector::new([-1.0])),
            Err(Error::NegativeRadicand(-1.0))
        );
    }

    #[test]
    fn absolute_or_relative_per_component() {
        // Spread of 1e-3 around 1000 is small relative to the mean.
        let items = [Vector::new([1000.0]), Vector::new([1000.002])];
        assert!(!is_converged(&items, 1e-6, 1e-9).unwrap());
        assert!(is_converged(&items, 1e-6, 1e-5).unwrap());
        assert!(is_converged(&items, 1e-2, 0.0).unwrap());
    }

    #[test]
    fn value_component_must_converge_too() {
        // Points are close, but the values are far apart.
        let items = [
            PointValue::new(Vector::new([1.0]), 0.0),
            PointValue::new(Vector::new([1.0 + 1e-9]), 10.0),
        ];
        assert!(!is_converged(&items, 1e-6, 1e-6).unwrap());
    }

    #[test]
    fn monotone_in_tolerances() {
        let items = segment(-0.5, 0.75);
        let tolerances = [0.0, 1e-6, 1e-3, 0.1, 0.5, 1.0, 10.0];

        for abs_tol in tolerances {
            for (k, rel_tol) in tolerances.iter().copied().enumerate() {
                let narrow = is_converged(&items, abs_tol, rel_tol).unwrap();

                for wider in tolerances[k..].iter().copied() {
                    assert!(!narrow || is_converged(&items, abs_tol, wider).unwrap());
                    assert!(!narrow || is_converged(&items, abs_tol.max(wider), rel_tol).unwrap());
                }
            }
        }
    }
}
