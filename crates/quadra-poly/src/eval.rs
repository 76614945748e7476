//! Point evaluation.

use quadra_rings::{RealRing, Ring};

use crate::error::{PolyError, PolyResult};
use crate::poly2::Poly2;

impl<R: Ring> Poly2<R> {
    /// Evaluates the positional reading at `x`.
    ///
    /// One coefficient gives `a·x²`, two give `a·x² + b·x`, three give
    /// `a·x² + b·x + c`. More than three evaluate to zero.
    ///
    /// # Errors
    ///
    /// Returns [`PolyError::InvalidDegree`] if there are no coefficients.
    pub fn evaluate(&self, x: &R) -> PolyResult<R> {
        Ok(self.positional()?.eval(x))
    }

    /// Evaluates at every point of `xs`.
    ///
    /// # Errors
    ///
    /// Returns [`PolyError::InvalidDegree`] if there are no coefficients.
    pub fn evaluate_many(&self, xs: &[R]) -> PolyResult<Vec<R>> {
        let positional = self.positional()?;
        Ok(xs.iter().map(|x| positional.eval(x)).collect())
    }
}

impl<R: RealRing> Poly2<R> {
    /// Evaluates at a real `x`, whatever the coefficient ring.
    ///
    /// Coefficients are converted to `f64` first, so an integer polynomial
    /// can be evaluated between its integer points.
    ///
    /// # Errors
    ///
    /// - [`PolyError::InvalidDegree`] if there are no coefficients
    /// - [`PolyError::NonRealCoefficient`] if a coefficient is not real
    pub fn evaluate_real(&self, x: f64) -> PolyResult<f64> {
        let positional = self.positional()?.try_map(|c| {
            c.to_real()
                .ok_or_else(|| PolyError::NonRealCoefficient(c.to_string()))
        })?;
        Ok(positional.eval(&x))
    }
}
