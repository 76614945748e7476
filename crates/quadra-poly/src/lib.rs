//! # quadra-poly
//!
//! Degree-2 polynomials for quadra.
//!
//! This crate provides:
//! - `Poly2`, an immutable exponent-keyed polynomial value
//! - Coefficient-merging addition and subtraction
//! - Conventional algebraic rendering via `Display`
//! - A quadratic-formula solver returning real or complex roots
//! - Scalar and vectorised evaluation
//!
//! ## Two Views
//!
//! A `Poly2` is stored as an exponent → coefficient map. Rendering and
//! arithmetic read that map directly. Solving and evaluation read the
//! [`Positional`] view instead: the coefficients in construction order,
//! taken as `(a, b, c)` of `a·x² + b·x + c`.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod display;
pub mod error;
pub mod eval;
pub mod poly2;
pub mod solve;

#[cfg(test)]
mod proptests;

pub use error::{PolyError, PolyResult};
pub use poly2::{Poly2, Positional};
pub use solve::Roots;
