//! # quadra-rings
//!
//! Coefficient algebra for quadra polynomials.
//!
//! This crate provides:
//! - The `Ring` trait every polynomial coefficient implements
//! - The `RealRing` refinement used by the quadratic solver
//! - Implementations for `IBig`, `f64` and `Complex64`
//!
//! ## Trait Hierarchy
//!
//! ```text
//! Ring
//!  └── RealRing
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod complex;
pub mod integer;
pub mod primitive;
pub mod traits;

pub use dashu::integer::IBig;
pub use num_complex::Complex64;
pub use traits::{CoeffDisplay, RealRing, Ring};
