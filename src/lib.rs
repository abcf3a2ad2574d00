#![allow(clippy::many_single_char_names)]
#![warn(missing_docs)]

//! # Optlib
//!
//! A pure Rust framework for iterative minimization of scalar functions over
//! fixed-dimension real vector spaces.
//!
//! The iteration machinery (the state of the optimization, the convergence
//! test and the driving loop) is written once and is generic over the
//! objective function and over the step strategy. Authors of numerical methods
//! plug in a new function or a new strategy without touching the rest.
//!
//! ## Algorithms
//!
//! * [Bisection](algo::bisection) -- One-dimensional search using the sign of
//!   the derivative.
//! * [Golden-section](algo::golden_section) -- One-dimensional derivative-free
//!   search, one function evaluation per step.
//! * [Newton](algo::newton) -- Fast local convergence for functions with
//!   Hessian.
//! * [Gradient descent](algo::gradient_descent) -- Steepest descent with an
//!   exact line search along the gradient.
//! * [Nelder-Mead](algo::nelder_mead) -- Derivative-free simplex method, useful
//!   for low-dimensionality problems.
//!
//! ## Problem
//!
//! Mathematically, the problem is formulated as
//!
//! ```text
//! minimize f(x),
//!
//! where x = { x1, ..., xn }
//! ```
//!
//! The dimension `n` is a const generic parameter, so mixing vectors of
//! different dimension is a type error. A function is any type implementing
//! [`Function`]. Methods that need derivatives require [`WithGradient`] or
//! [`WithHessian`], and a function lacking the capability is rejected at
//! compile time.
//!
//! ```rust
//! use optlib::*;
//!
//! // A function is represented by a type.
//! struct Rosenbrock {
//!     a: f64,
//!     b: f64,
//! }
//!
//! impl Function<2> for Rosenbrock {
//!     fn apply(&self, x: &Vector<2>) -> f64 {
//!         (self.a - x[0]).powi(2) + self.b * (x[1] - x[0].powi(2)).powi(2)
//!     }
//! }
//! ```
//!
//! ## Optimizing
//!
//! A [state](State) holds the current domain (a segment or a simplex) and the
//! guess derived from it. The [`Optimizer`] drives a [step strategy](Step)
//! until the state converges or the iteration budget is exhausted.
//!
//! ```rust
//! use optlib::algo::NelderMead;
//! # use optlib::*;
//! #
//! # struct Rosenbrock {
//! #     a: f64,
//! #     b: f64,
//! # }
//! #
//! # impl Function<2> for Rosenbrock {
//! #     fn apply(&self, x: &Vector<2>) -> f64 {
//! #         (self.a - x[0]).powi(2) + self.b * (x[1] - x[0].powi(2)).powi(2)
//! #     }
//! # }
//!
//! let f = Rosenbrock { a: 1.0, b: 100.0 };
//! let simplex = CandidateSet::<3, Vector<2>>::simplex_around(Vector::new([-1.2, 1.0]), 0.5);
//! let mut state = SimplexState::new(simplex, &f);
//! let params = OptimizerParams::new(1e-5, 1e-5, 2000).expect("valid params");
//!
//! let outcome = Optimizer::new(&mut state, &f, params)
//!     .optimize(&mut NelderMead::new())
//!     .expect("optimizer encountered an error");
//!
//! if outcome.converged() {
//!     println!("minimum at {:?}", outcome.guess().vector());
//! } else {
//!     println!("maximum number of iterations exceeded");
//! }
//! ```
//!
//! ## Convergence
//!
//! A state has converged when its candidates agree: for every component of
//! the candidates (each coordinate and the function value), either the
//! standard deviation is below the absolute tolerance or the coefficient of
//! variation is below the relative tolerance. See [`stats`].
//!
//! ## License
//!
//! Licensed under MIT.

pub mod algo;
mod core;
pub mod driver;
pub mod functions;

pub use core::*;
pub use driver::{LogObserver, Observer, Optimizer, OptimizerParams, Outcome, ParamsError};

#[cfg(feature = "testing")]
pub mod testing;

#[cfg(not(feature = "testing"))]
pub(crate) mod testing;

pub use nalgebra;
