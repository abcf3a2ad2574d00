//! Core abstractions and types for optlib.
//!
//! *Users* are mainly interested in implementing the [`Function`] trait and,
//! if they can, its [`WithGradient`] and [`WithHessian`] extensions.
//!
//! Algorithms *developers* are interested in implementing the [`Step`] trait
//! over one of the [states](State) and using the arithmetic of [`Vector`],
//! [`PointValue`] and [`CandidateSet`] together with the [statistics](stats)
//! of candidate sets.

mod base;
mod candidate_set;
mod elementwise;
mod function;
mod point_value;
mod state;
pub mod stats;
mod step;
mod vector;

pub use base::*;
pub use candidate_set::*;
pub use elementwise::*;
pub use function::*;
pub use point_value::*;
pub use state::*;
pub use step::*;
pub use vector::*;
