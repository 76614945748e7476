//! Error types for polynomial operations.

use thiserror::Error;

/// Errors raised by `Poly2` operations.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum PolyError {
    /// The right-hand operand of a checked operation was not a `Poly2` of
    /// the same coefficient type.
    #[error("type mismatch: expected {expected}, found {found}")]
    TypeMismatch {
        /// Type the operation accepts.
        expected: &'static str,
        /// Type that was supplied.
        found: &'static str,
    },

    /// The polynomial has no positional reading (it has no coefficients).
    #[error("invalid degree: cannot read a quadratic from {0} coefficients")]
    InvalidDegree(usize),

    /// The quadratic formula was applied with a zero leading coefficient.
    #[error("division by zero: leading coefficient is zero")]
    DivisionByZero,

    /// A coefficient has no real value, so real root finding is undefined.
    #[error("coefficient {0} is not real")]
    NonRealCoefficient(String),
}

/// Result alias for polynomial operations.
pub type PolyResult<T> = Result<T, PolyError>;
