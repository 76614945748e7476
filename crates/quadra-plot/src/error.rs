//! Error types for drawing.

use quadra_poly::PolyError;
use thiserror::Error;

/// Errors raised while sampling or displaying a polynomial.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum PlotError {
    /// The sampling domain is empty or has a non-positive step.
    #[error("invalid domain {start}..={end} step {step}")]
    InvalidDomain {
        /// First x value.
        start: i64,
        /// Last x value (inclusive).
        end: i64,
        /// Distance between consecutive x values.
        step: i64,
    },

    /// Evaluating the polynomial failed.
    #[error(transparent)]
    Poly(#[from] PolyError),

    /// The sink could not display the points.
    #[error("sink error: {0}")]
    Sink(String),
}
