//! The collection of implemented step strategies.
//!
//! | Strategy | State | Function |
//! | --- | --- | --- |
//! | [`Bisection`] | [`PointState<1>`](crate::PointState) | [`WithGradient<1>`](crate::WithGradient) |
//! | [`GoldenSection`] | [`PointState<1>`](crate::PointState) | [`Function<1>`](crate::Function) |
//! | [`Newton`] | [`PointState<DIM>`](crate::PointState) | [`WithHessian<DIM>`](crate::WithHessian) |
//! | [`GradientDescent`] | [`PointState<DIM>`](crate::PointState) | [`WithGradient<DIM>`](crate::WithGradient) |
//! | [`NelderMead`] | [`SimplexState<N, DIM>`](crate::SimplexState) | [`Function<DIM>`](crate::Function) |

pub mod bisection;
pub mod golden_section;
pub mod gradient_descent;
pub mod nelder_mead;
pub mod newton;

pub use bisection::Bisection;
pub use golden_section::GoldenSection;
pub use gradient_descent::GradientDescent;
pub use nelder_mead::NelderMead;
pub use newton::Newton;
