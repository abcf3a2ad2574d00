use std::cmp::Ordering;
use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use approx::{AbsDiffEq, RelativeEq};
use getset::CopyGetters;
use num_traits::Zero;

use super::{elementwise::Elementwise, function::Function, vector::Vector};

/// A point together with the objective value at that point.
///
/// Arithmetic applies to the point and the value in parallel, so that
/// statistics of a set of point-values describe both the spread in space and
/// the spread of the objective. Point-values are ordered by value only, see
/// [`cmp_by_value`](PointValue::cmp_by_value).
#[derive(Debug, Clone, Copy, PartialEq, Default, CopyGetters)]
#[getset(get_copy = "pub")]
pub struct PointValue<const DIM: usize> {
    /// The point.
    vector: Vector<DIM>,
    /// The objective value associated with the point.
    value: f64,
}

impl<const DIM: usize> PointValue<DIM> {
    /// Pairs a point with a value.
    pub fn new(vector: Vector<DIM>, value: f64) -> Self {
        Self { vector, value }
    }

    /// Evaluates `f` at `vector`.
    pub fn evaluate<F>(vector: Vector<DIM>, f: &F) -> Self
    where
        F: Function<DIM> + ?Sized,
    {
        Self::new(vector, f.apply(&vector))
    }

    /// Compares by value only. NaN of either sign ranks as positive infinity,
    /// so invalid values sort last.
    pub fn cmp_by_value(&self, other: &Self) -> Ordering {
        rank(self.value).total_cmp(&rank(other.value))
    }
}

fn rank(value: f64) -> f64 {
    if value.is_nan() {
        f64::INFINITY
    } else {
        value
    }
}

impl<const DIM: usize> Elementwise for PointValue<DIM> {
    fn n_components(&self) -> usize {
        DIM + 1
    }

    fn component(&self, i: usize) -> f64 {
        if i < DIM {
            self.vector[i]
        } else {
            self.value
        }
    }

    fn map_components<M>(&self, mut f: M) -> Self
    where
        M: FnMut(f64) -> f64,
    {
        Self::new(self.vector.map_components(&mut f), f(self.value))
    }

    fn zip_components<M>(&self, other: &Self, mut f: M) -> Self
    where
        M: FnMut(f64, f64) -> f64,
    {
        Self::new(
            self.vector.zip_components(&other.vector, &mut f),
            f(self.value, other.value),
        )
    }
}

impl<const DIM: usize> Zero for PointValue<DIM> {
    fn zero() -> Self {
        Self::new(Vector::zeros(), 0.0)
    }

    fn is_zero(&self) -> bool {
        self.vector.is_zero() && self.value == 0.0
    }
}

impl<const DIM: usize> Add for PointValue<DIM> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.vector + rhs.vector, self.value + rhs.value)
    }
}

impl<const DIM: usize> Sub for PointValue<DIM> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.vector - rhs.vector, self.value - rhs.value)
    }
}

impl<const DIM: usize> Mul for PointValue<DIM> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Self::new(self.vector * rhs.vector, self.value * rhs.value)
    }
}

impl<const DIM: usize> Mul<f64> for PointValue<DIM> {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self {
        Self::new(self.vector * rhs, self.value * rhs)
    }
}

impl<const DIM: usize> Add<f64> for PointValue<DIM> {
    type Output = Self;

    fn add(self, rhs: f64) -> Self {
        Self::new(self.vector + rhs, self.value + rhs)
    }
}

impl<const DIM: usize> Sub<f64> for PointValue<DIM> {
    type Output = Self;

    fn sub(self, rhs: f64) -> Self {
        Self::new(self.vector - rhs, self.value - rhs)
    }
}

impl<const DIM: usize> Neg for PointValue<DIM> {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.vector, -self.value)
    }
}

impl<const DIM: usize> AddAssign for PointValue<DIM> {
    fn add_assign(&mut self, rhs: Self) {
        self.vector += rhs.vector;
        self.value += rhs.value;
    }
}

impl<const DIM: usize> SubAssign for PointValue<DIM> {
    fn sub_assign(&mut self, rhs: Self) {
        self.vector -= rhs.vector;
        self.value -= rhs.value;
    }
}

impl<const DIM: usize> MulAssign for PointValue<DIM> {
    fn mul_assign(&mut self, rhs: Self) {
        self.vector *= rhs.vector;
        self.value *= rhs.value;
    }
}

impl<const DIM: usize> AddAssign<f64> for PointValue<DIM> {
    fn add_assign(&mut self, rhs: f64) {
        self.vector += rhs;
        self.value += rhs;
    }
}

impl<const DIM: usize> SubAssign<f64> for PointValue<DIM> {
    fn sub_assign(&mut self, rhs: f64) {
        self.vector -= rhs;
        self.value -= rhs;
    }
}

impl<const DIM: usize> MulAssign<f64> for PointValue<DIM> {
    fn mul_assign(&mut self, rhs: f64) {
        self.vector *= rhs;
        self.value *= rhs;
    }
}

impl<const DIM: usize> AbsDiffEq for PointValue<DIM> {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        f64::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.vector.abs_diff_eq(&other.vector, epsilon)
            && self.value.abs_diff_eq(&other.value, epsilon)
    }
}

impl<const DIM: usize> RelativeEq for PointValue<DIM> {
    fn default_max_relative() -> f64 {
        f64::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: f64, max_relative: f64) -> bool {
        self.vector.relative_eq(&other.vector, epsilon, max_relative)
            && self.value.relative_eq(&other.value, epsilon, max_relative)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_abs_diff_eq;

    use crate::functions::Quadratic;

    #[test]
    fn arithmetic_applies_in_parallel() {
        let mut p = PointValue::new(Vector::new([2.0, 1.0, 3.0]), 7.8);
        p += 3.0;
        p -= 3.0;
        assert_abs_diff_eq!(p, PointValue::new(Vector::new([2.0, 1.0, 3.0]), 7.8));

        let p = PointValue::new(Vector::new([2.0, 1.0, 3.0]), 7.75);
        let q = PointValue::new(Vector::new([1.0, 1.0, 1.0]), 2.0);
        assert_eq!(p + q, PointValue::new(Vector::new([3.0, 2.0, 4.0]), 9.75));
        assert_eq!(
            p * q * 0.5,
            PointValue::new(Vector::new([1.0, 0.5, 1.5]), 7.75)
        );
    }

    #[test]
    fn ordered_by_value_only() {
        let a = PointValue::new(Vector::new([100.0]), 1.0);
        let b = PointValue::new(Vector::new([-100.0]), 2.0);

        assert_eq!(a.cmp_by_value(&b), Ordering::Less);
        assert_eq!(b.cmp_by_value(&a), Ordering::Greater);
        assert_eq!(
            a.cmp_by_value(&PointValue::new(Vector::new([0.0]), 1.0)),
            Ordering::Equal
        );
    }

    #[test]
    fn compound_assignment() {
        let original = PointValue::new(Vector::new([2.0, 1.0, 3.0]), 7.5);
        let other = PointValue::new(Vector::new([1.0, -1.0, 0.5]), 2.0);
        let mut p = original;

        p += other;
        assert_eq!(p, original + other);
        p -= other;
        assert_eq!(p, original);

        p *= other;
        assert_eq!(p, original * other);
        p *= 2.0;
        assert_eq!(p, original * other * 2.0);
    }

    #[test]
    fn nan_sorts_last_regardless_of_sign() {
        let zero = std::hint::black_box(0.0);
        let runtime_nan = zero / zero;
        let finite = PointValue::new(Vector::new([0.0]), 1.0);
        let infinite = PointValue::new(Vector::new([0.0]), f64::INFINITY);

        for nan in [runtime_nan, f64::NAN, -f64::NAN] {
            let p = PointValue::new(Vector::new([0.0]), nan);

            assert_eq!(p.cmp_by_value(&finite), Ordering::Greater);
            assert_eq!(finite.cmp_by_value(&p), Ordering::Less);
            assert_eq!(p.cmp_by_value(&infinite), Ordering::Equal);
        }
    }

    #[test]
    fn components_include_value_last() {
        let p = PointValue::new(Vector::new([4.0, 9.0]), 16.0);

        assert_eq!(p.n_components(), 3);
        assert_eq!(p.component(2), 16.0);
        assert_eq!(
            p.sqrt_elementwise().unwrap(),
            PointValue::new(Vector::new([2.0, 3.0]), 4.0)
        );
    }

    #[test]
    fn evaluate() {
        let f = Quadratic::new([[1.0, 0.0], [0.0, 1.0]]);
        let p = PointValue::evaluate(Vector::new([1.0, 1.0]), &f);
        assert_eq!(p.value(), 2.0);
    }
}
