//! Fixed-dimension real vectors.

use std::ops::{Add, AddAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign};

use approx::{AbsDiffEq, RelativeEq};
use nalgebra::SVector;
use num_traits::Zero;

use super::elementwise::Elementwise;

/// A point in `DIM`-dimensional real space.
///
/// The storage is an owned, stack-allocated [`SVector`]. Operations between
/// vectors of different dimensions do not type-check. Division is not
/// available as an operator because it can fail; use
/// [`try_div`](Elementwise::try_div) and
/// [`try_div_scalar`](Elementwise::try_div_scalar).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vector<const DIM: usize> {
    data: SVector<f64, DIM>,
}

impl<const DIM: usize> Vector<DIM> {
    const NOT_EMPTY: () = assert!(DIM > 0, "vector dimension must be positive");

    /// Creates a vector from its components.
    pub fn new(components: [f64; DIM]) -> Self {
        Self::from_inner(SVector::from(components))
    }

    /// Creates a vector by calling `f` for every index.
    pub fn from_fn<F>(mut f: F) -> Self
    where
        F: FnMut(usize) -> f64,
    {
        Self::from_inner(SVector::from_fn(|i, _| f(i)))
    }

    /// Creates a vector with all components equal to `value`.
    pub fn repeat(value: f64) -> Self {
        Self::from_inner(SVector::repeat(value))
    }

    /// Creates the zero vector.
    pub fn zeros() -> Self {
        Self::repeat(0.0)
    }

    /// Creates the unit vector along axis `j`.
    pub fn unit(j: usize) -> Self {
        Self::from_fn(|i| if i == j { 1.0 } else { 0.0 })
    }

    /// Wraps an nalgebra vector.
    pub fn from_inner(data: SVector<f64, DIM>) -> Self {
        #[allow(clippy::let_unit_value)]
        let () = Self::NOT_EMPTY;
        Self { data }
    }

    /// Returns the underlying nalgebra vector.
    pub fn as_inner(&self) -> &SVector<f64, DIM> {
        &self.data
    }

    /// Unwraps the underlying nalgebra vector.
    pub fn into_inner(self) -> SVector<f64, DIM> {
        self.data
    }

    /// Dimension of the space.
    pub fn dim(&self) -> usize {
        DIM
    }

    /// Components as a slice.
    pub fn as_slice(&self) -> &[f64] {
        self.data.as_slice()
    }

    /// Iterator over the components.
    pub fn iter(&self) -> impl Iterator<Item = &f64> {
        self.data.iter()
    }

    /// Mutable iterator over the components.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut f64> {
        self.data.iter_mut()
    }

    /// Scalar product.
    pub fn dot(&self, other: &Self) -> f64 {
        self.data.dot(&other.data)
    }

    /// Euclidean length, `sqrt(dot(a, a))`.
    pub fn norm(&self) -> f64 {
        self.dot(self).sqrt()
    }

    /// Euclidean distance to `other`.
    pub fn distance(&self, other: &Self) -> f64 {
        (*self - *other).norm()
    }
}

/// Scalar product of two vectors of the same dimension.
pub fn dot_product<const DIM: usize>(a: &Vector<DIM>, b: &Vector<DIM>) -> f64 {
    a.dot(b)
}

impl<const DIM: usize> Default for Vector<DIM> {
    fn default() -> Self {
        Self::zeros()
    }
}

impl<const DIM: usize> From<[f64; DIM]> for Vector<DIM> {
    fn from(components: [f64; DIM]) -> Self {
        Self::new(components)
    }
}

impl<const DIM: usize> From<SVector<f64, DIM>> for Vector<DIM> {
    fn from(data: SVector<f64, DIM>) -> Self {
        Self::from_inner(data)
    }
}

impl<const DIM: usize> Index<usize> for Vector<DIM> {
    type Output = f64;

    fn index(&self, i: usize) -> &f64 {
        &self.data[i]
    }
}

impl<const DIM: usize> IndexMut<usize> for Vector<DIM> {
    fn index_mut(&mut self, i: usize) -> &mut f64 {
        &mut self.data[i]
    }
}

impl<const DIM: usize> Elementwise for Vector<DIM> {
    fn n_components(&self) -> usize {
        DIM
    }

    fn component(&self, i: usize) -> f64 {
        self.data[i]
    }

    fn map_components<M>(&self, f: M) -> Self
    where
        M: FnMut(f64) -> f64,
    {
        Self::from_inner(self.data.map(f))
    }

    fn zip_components<M>(&self, other: &Self, mut f: M) -> Self
    where
        M: FnMut(f64, f64) -> f64,
    {
        Self::from_inner(self.data.zip_map(&other.data, |a, b| f(a, b)))
    }
}

impl<const DIM: usize> Zero for Vector<DIM> {
    fn zero() -> Self {
        Self::zeros()
    }

    fn is_zero(&self) -> bool {
        self.data.iter().all(|c| *c == 0.0)
    }
}

impl<const DIM: usize> Add for Vector<DIM> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::from_inner(self.data + rhs.data)
    }
}

impl<const DIM: usize> Sub for Vector<DIM> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::from_inner(self.data - rhs.data)
    }
}

impl<const DIM: usize> Mul for Vector<DIM> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Self::from_inner(self.data.component_mul(&rhs.data))
    }
}

impl<const DIM: usize> Neg for Vector<DIM> {
    type Output = Self;

    fn neg(self) -> Self {
        Self::from_inner(-self.data)
    }
}

impl<const DIM: usize> Add<f64> for Vector<DIM> {
    type Output = Self;

    fn add(self, rhs: f64) -> Self {
        self.map_components(|a| a + rhs)
    }
}

impl<const DIM: usize> Sub<f64> for Vector<DIM> {
    type Output = Self;

    fn sub(self, rhs: f64) -> Self {
        self.map_components(|a| a - rhs)
    }
}

impl<const DIM: usize> Mul<f64> for Vector<DIM> {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self {
        Self::from_inner(self.data * rhs)
    }
}

impl<const DIM: usize> Add<Vector<DIM>> for f64 {
    type Output = Vector<DIM>;

    fn add(self, rhs: Vector<DIM>) -> Vector<DIM> {
        rhs + self
    }
}

impl<const DIM: usize> Sub<Vector<DIM>> for f64 {
    type Output = Vector<DIM>;

    fn sub(self, rhs: Vector<DIM>) -> Vector<DIM> {
        rhs.map_components(|b| self - b)
    }
}

impl<const DIM: usize> Mul<Vector<DIM>> for f64 {
    type Output = Vector<DIM>;

    fn mul(self, rhs: Vector<DIM>) -> Vector<DIM> {
        rhs * self
    }
}

impl<const DIM: usize> AddAssign for Vector<DIM> {
    fn add_assign(&mut self, rhs: Self) {
        self.data += rhs.data;
    }
}

impl<const DIM: usize> SubAssign for Vector<DIM> {
    fn sub_assign(&mut self, rhs: Self) {
        self.data -= rhs.data;
    }
}

impl<const DIM: usize> MulAssign for Vector<DIM> {
    fn mul_assign(&mut self, rhs: Self) {
        self.data.component_mul_assign(&rhs.data);
    }
}

impl<const DIM: usize> AddAssign<f64> for Vector<DIM> {
    fn add_assign(&mut self, rhs: f64) {
        self.data.iter_mut().for_each(|a| *a += rhs);
    }
}

impl<const DIM: usize> SubAssign<f64> for Vector<DIM> {
    fn sub_assign(&mut self, rhs: f64) {
        self.data.iter_mut().for_each(|a| *a -= rhs);
    }
}

impl<const DIM: usize> MulAssign<f64> for Vector<DIM> {
    fn mul_assign(&mut self, rhs: f64) {
        self.data *= rhs;
    }
}

impl<const DIM: usize> AbsDiffEq for Vector<DIM> {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        f64::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.data.abs_diff_eq(&other.data, epsilon)
    }
}

impl<const DIM: usize> RelativeEq for Vector<DIM> {
    fn default_max_relative() -> f64 {
        f64::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: f64, max_relative: f64) -> bool {
        self.data.relative_eq(&other.data, epsilon, max_relative)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_abs_diff_eq;
    use rand::Rng;

    use crate::core::Error;

    fn random<const DIM: usize, R: Rng>(rng: &mut R) -> Vector<DIM> {
        Vector::from_fn(|_| rng.gen_range(-100.0..100.0))
    }

    #[test]
    fn add_then_sub_restores() {
        let mut rng = rand::thread_rng();

        for _ in 0..100 {
            let a: Vector<4> = random(&mut rng);
            let b = random(&mut rng);
            assert_abs_diff_eq!(a + b - b, a, epsilon = 1e-9);
        }
    }

    #[test]
    fn dot_product_is_symmetric() {
        let mut rng = rand::thread_rng();

        for _ in 0..100 {
            let a: Vector<3> = random(&mut rng);
            let b = random(&mut rng);
            assert_eq!(dot_product(&a, &b), dot_product(&b, &a));
        }
    }

    #[test]
    fn norm_is_zero_only_for_zero_vector() {
        assert_eq!(Vector::<3>::zeros().norm(), 0.0);
        assert!(Vector::new([0.0, 1e-10, 0.0]).norm() > 0.0);
        assert!(Vector::new([-3.0, 4.0]).norm() >= 0.0);
        assert_eq!(Vector::new([-3.0, 4.0]).norm(), 5.0);
    }

    #[test]
    fn scalar_broadcasting() {
        let v = Vector::new([2.0, 1.0, 3.0]);

        assert_eq!(v + 1.0, Vector::new([3.0, 2.0, 4.0]));
        assert_eq!(v - 1.0, Vector::new([1.0, 0.0, 2.0]));
        assert_eq!(v * 2.0, Vector::new([4.0, 2.0, 6.0]));
        assert_eq!(2.0 * v, v * 2.0);
        assert_eq!(1.0 + v, v + 1.0);
        assert_eq!(1.0 - v, Vector::new([-1.0, 0.0, -2.0]));
    }

    #[test]
    fn compound_assignment() {
        let original = Vector::new([2.0, 1.0, 3.0]);
        let mut v = original;

        v += 3.0;
        v -= 3.0;
        v *= 2.5;
        v = v.try_div_scalar(2.5).unwrap();
        assert_abs_diff_eq!(v, original, epsilon = 1e-12);

        v += original;
        v -= original;
        v *= Vector::repeat(2.0);
        assert_abs_diff_eq!(v, original * 2.0, epsilon = 1e-12);
    }

    #[test]
    fn elementwise_division_by_zero_is_error() {
        let v = Vector::new([1.0, 2.0]);

        assert_eq!(v.try_div(&Vector::new([1.0, 0.0])), Err(Error::DivisionByZero));
        assert_eq!(v.try_div_scalar(0.0), Err(Error::DivisionByZero));
        assert_eq!(v.try_div(&Vector::new([2.0, 4.0])), Ok(Vector::new([0.5, 0.5])));
    }

    #[test]
    fn sqrt_of_negative_component_is_error() {
        assert_eq!(
            Vector::new([4.0, -1.0]).sqrt_elementwise(),
            Err(Error::NegativeRadicand(-1.0))
        );
        assert_eq!(
            Vector::new([4.0, 9.0]).sqrt_elementwise(),
            Ok(Vector::new([2.0, 3.0]))
        );
    }

    #[test]
    fn abs_elementwise_differs_from_norm() {
        let v = Vector::new([-3.0, 4.0]);

        assert_eq!(v.abs_elementwise(), Vector::new([3.0, 4.0]));
        assert_eq!(v.norm(), 5.0);
    }

    #[test]
    fn distance() {
        let a = Vector::new([1.0, 1.0]);
        let b = Vector::new([4.0, 5.0]);
        assert_eq!(a.distance(&b), 5.0);
    }
}
