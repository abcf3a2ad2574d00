use thiserror::Error;

/// Error of the arithmetic and evaluation primitives.
///
/// None of these are recovered inside the library. They propagate out of
/// [`Optimizer::optimize`](crate::Optimizer::optimize) to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum Error {
    /// Division by a zero scalar or by a vector with a zero component.
    #[error("division by zero")]
    DivisionByZero,
    /// Elementwise square root of a negative component.
    #[error("square root of negative component {0}")]
    NegativeRadicand(f64),
    /// An invalid value (NaN) was produced where a strategy needs to compare
    /// or take a sign.
    #[error("invalid value encountered")]
    InvalidValue,
}
