//! Concrete objective functions.
//!
//! * [`Quadratic`] -- Quadratic form of an arbitrary coefficient matrix with
//!   gradient and Hessian.
//! * [`Parabola`] -- One-dimensional `x^2` with gradient and Hessian.
//! * [`Sphere`] -- Value-only sum of squares.
//! * [`FourWell`] and [`NarrowValley`] -- Two-dimensional test functions with
//!   several minima and with an ill-conditioned valley, respectively.
//! * [`AlongGradient`] -- The line-search restriction of a function to its
//!   steepest descent ray.
//! * [`WithParams`] -- Binds the parameters of a [`ParametricFunction`].

mod along_gradient;
mod parabola;
mod parametric;
mod quadratic;
mod two_dim;

pub use along_gradient::*;
pub use parabola::*;
pub use parametric::*;
pub use quadratic::*;
pub use two_dim::*;
