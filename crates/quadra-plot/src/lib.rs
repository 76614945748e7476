//! # quadra-plot
//!
//! Sampling polynomials for display.
//!
//! Drawing evaluates a polynomial over an integer domain and hands the
//! `(x, y)` pairs to a [`PointSink`]. The crate does not render anything
//! itself; a sink is whatever the caller plugs in.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod domain;
pub mod draw;
pub mod error;
pub mod sink;

pub use domain::SampleDomain;
pub use draw::{draw, draw_over, Draw};
pub use error::PlotError;
pub use sink::{PointSink, RecordingSink, TableSink};
