//! Componentwise operations shared by [`Vector`](super::Vector) and
//! [`PointValue`](super::PointValue).
//!
//! Statistics over candidate sets (mean, dispersion, coefficient of variation)
//! are written once against these traits and work for both plain vectors and
//! vectors carrying the function value.

use std::fmt::Debug;
use std::ops::{Add, Mul, Sub};

use num_traits::Zero;

use super::base::Error;

/// Access to the scalar components of a value and componentwise mapping.
///
/// The checked operations ([`sqrt_elementwise`](Elementwise::sqrt_elementwise),
/// [`try_div`](Elementwise::try_div), ...) are provided on top of the four
/// required methods.
pub trait Elementwise: Copy {
    /// Number of scalar components.
    fn n_components(&self) -> usize;

    /// Scalar component at index `i`.
    fn component(&self, i: usize) -> f64;

    /// Applies `f` to every component.
    fn map_components<M>(&self, f: M) -> Self
    where
        M: FnMut(f64) -> f64;

    /// Applies `f` to every pair of corresponding components.
    fn zip_components<M>(&self, other: &Self, f: M) -> Self
    where
        M: FnMut(f64, f64) -> f64;

    /// Returns true if `pred` holds for every component.
    fn all_components<P>(&self, mut pred: P) -> bool
    where
        P: FnMut(f64) -> bool,
    {
        (0..self.n_components()).all(|i| pred(self.component(i)))
    }

    /// Componentwise absolute value.
    ///
    /// Not to be confused with the Euclidean norm, which is
    /// [`Vector::norm`](super::Vector::norm).
    fn abs_elementwise(&self) -> Self {
        self.map_components(f64::abs)
    }

    /// Componentwise square root.
    fn sqrt_elementwise(&self) -> Result<Self, Error> {
        match (0..self.n_components())
            .map(|i| self.component(i))
            .find(|c| *c < 0.0)
        {
            Some(negative) => Err(Error::NegativeRadicand(negative)),
            None => Ok(self.map_components(f64::sqrt)),
        }
    }

    /// Componentwise division.
    fn try_div(&self, rhs: &Self) -> Result<Self, Error> {
        if rhs.all_components(|c| c != 0.0) {
            Ok(self.zip_components(rhs, |a, b| a / b))
        } else {
            Err(Error::DivisionByZero)
        }
    }

    /// Division of every component by a scalar.
    fn try_div_scalar(&self, rhs: f64) -> Result<Self, Error> {
        if rhs != 0.0 {
            Ok(self.map_components(|a| a / rhs))
        } else {
            Err(Error::DivisionByZero)
        }
    }
}

/// The arithmetic capability set needed by the candidate-set statistics.
pub trait Arithmetic:
    Elementwise
    + Zero
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Mul<f64, Output = Self>
    + Debug
{
}

impl<T> Arithmetic for T where
    T: Elementwise
        + Zero
        + Add<Output = T>
        + Sub<Output = T>
        + Mul<Output = T>
        + Mul<f64, Output = T>
        + Debug
{
}
