//! Quadratic root finding.
//!
//! Roots of `a·x² + b·x + c` come from the quadratic formula, classified by
//! the sign of the discriminant `Δ = b² − 4ac`:
//!
//! - Δ > 0: two real roots `(−b − √Δ)/2a`, `(−b + √Δ)/2a`, in that order
//! - Δ < 0: a complex conjugate pair, positive imaginary part first
//! - Δ = 0: one repeated real root `−b/2a`, reported once

use std::fmt;

use num_complex::Complex64;
use quadra_rings::RealRing;
use tracing::{debug, trace};

use crate::error::{PolyError, PolyResult};
use crate::poly2::Poly2;

/// The roots of a quadratic.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Roots {
    /// Two distinct real roots.
    Real([f64; 2]),
    /// A single repeated real root.
    Repeated(f64),
    /// A complex conjugate pair.
    Complex([Complex64; 2]),
}

impl Roots {
    /// Returns the number of reported roots (a repeated root counts once).
    #[must_use]
    pub fn count(&self) -> usize {
        match self {
            Self::Real(_) | Self::Complex(_) => 2,
            Self::Repeated(_) => 1,
        }
    }

    /// Returns true if all roots are real.
    #[must_use]
    pub fn is_real(&self) -> bool {
        !matches!(self, Self::Complex(_))
    }

    /// Returns the real roots, or `None` for a complex pair.
    #[must_use]
    pub fn real(&self) -> Option<Vec<f64>> {
        match self {
            Self::Real(roots) => Some(roots.to_vec()),
            Self::Repeated(root) => Some(vec![*root]),
            Self::Complex(_) => None,
        }
    }

    /// Returns every root as a complex number.
    #[must_use]
    pub fn to_vec(&self) -> Vec<Complex64> {
        match self {
            Self::Real([r1, r2]) => vec![Complex64::new(*r1, 0.0), Complex64::new(*r2, 0.0)],
            Self::Repeated(root) => vec![Complex64::new(*root, 0.0)],
            Self::Complex(roots) => roots.to_vec(),
        }
    }
}

impl fmt::Display for Roots {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Real([r1, r2]) => write!(f, "[{r1}, {r2}]"),
            Self::Repeated(root) => write!(f, "[{root}]"),
            Self::Complex([z1, z2]) => write!(f, "[{z1}, {z2}]"),
        }
    }
}

impl<R: RealRing> Poly2<R> {
    /// Solves `a·x² + b·x + c = 0` over the positional reading.
    ///
    /// A single coefficient reads as `a·x²`, two as `a·x² + b·x`. More than
    /// three coefficients read as the zero quadratic and therefore fail with
    /// [`PolyError::DivisionByZero`].
    ///
    /// # Errors
    ///
    /// - [`PolyError::InvalidDegree`] if there are no coefficients
    /// - [`PolyError::NonRealCoefficient`] if a coefficient is not real
    /// - [`PolyError::DivisionByZero`] if `a` is zero
    pub fn solve(&self) -> PolyResult<Roots> {
        let (a, b, c) = self.positional()?.abc();
        let (a, b, c) = (real(&a)?, real(&b)?, real(&c)?);

        if a == 0.0 {
            return Err(PolyError::DivisionByZero);
        }

        let delta = b * b - 4.0 * a * c;
        let two_a = 2.0 * a;
        debug!(a, b, c, delta, "solving quadratic");

        if delta > 0.0 {
            trace!("two real roots");
            let sqrt_delta = delta.sqrt();
            Ok(Roots::Real([
                (-b - sqrt_delta) / two_a,
                (-b + sqrt_delta) / two_a,
            ]))
        } else if delta < 0.0 {
            trace!("complex conjugate roots");
            let re = -b / two_a;
            let im = (-delta).sqrt() / two_a;
            Ok(Roots::Complex([
                Complex64::new(re, im),
                Complex64::new(re, -im),
            ]))
        } else {
            trace!("repeated real root");
            // Adding zero folds -0.0 into 0.0
            Ok(Roots::Repeated(-b / two_a + 0.0))
        }
    }
}

fn real<R: RealRing>(coeff: &R) -> PolyResult<f64> {
    coeff
        .to_real()
        .ok_or_else(|| PolyError::NonRealCoefficient(coeff.to_string()))
}

#[cfg(test)]
mod tests {
    use quadra_rings::IBig;

    use super::*;

    fn int_poly(coeffs: &[i64]) -> Poly2<IBig> {
        coeffs.iter().map(|&c| IBig::from(c)).collect()
    }

    const EPS: f64 = 1e-12;

    #[test]
    fn test_complex_pair() {
        // x^2 + x + 1
        let roots = int_poly(&[1, 1, 1]).solve().unwrap();

        let Roots::Complex([z1, z2]) = roots else {
            panic!("expected complex roots, got {roots:?}");
        };
        assert!((z1.re + 0.5).abs() < EPS);
        assert!((z1.im - 0.866_025_403_784_438_6).abs() < EPS);
        assert!((z2.re + 0.5).abs() < EPS);
        assert!((z2.im + 0.866_025_403_784_438_6).abs() < EPS);
        assert!(!roots.is_real());
        assert_eq!(roots.real(), None);
    }

    #[test]
    fn test_distinct_real_roots_ascending() {
        // x^2 - 3x + 2 = (x - 1)(x - 2)
        let roots = Poly2::new(vec![1.0f64, -3.0, 2.0]).solve().unwrap();
        assert_eq!(roots, Roots::Real([1.0, 2.0]));
        assert_eq!(roots.count(), 2);
    }

    #[test]
    fn test_negative_leading_coefficient_keeps_formula_order() {
        // -x^2 + 3x - 2: (-b - √Δ)/2a comes first and is the larger root
        let roots = int_poly(&[-1, 3, -2]).solve().unwrap();
        assert_eq!(roots, Roots::Real([2.0, 1.0]));
    }

    #[test]
    fn test_repeated_root_reported_once() {
        // x^2 - 2x + 1 = (x - 1)^2
        let roots = int_poly(&[1, -2, 1]).solve().unwrap();
        assert_eq!(roots, Roots::Repeated(1.0));
        assert_eq!(roots.real(), Some(vec![1.0]));
        assert_eq!(roots.count(), 1);
    }

    #[test]
    fn test_single_coefficient_reads_as_square() {
        // 5x^2
        let roots = int_poly(&[5]).solve().unwrap();
        assert_eq!(roots.real(), Some(vec![0.0]));
        assert!(matches!(roots, Roots::Repeated(r) if r.is_sign_positive()));
    }

    #[test]
    fn test_two_coefficients_read_without_constant() {
        // 2x^2 - 4x: roots 0 and 2
        let roots = int_poly(&[2, -4]).solve().unwrap();
        assert_eq!(roots, Roots::Real([0.0, 2.0]));
    }

    #[test]
    fn test_empty_is_invalid_degree() {
        let p: Poly2<f64> = Poly2::new(Vec::new());
        assert_eq!(p.solve(), Err(PolyError::InvalidDegree(0)));
    }

    #[test]
    fn test_zero_leading_coefficient_divides_by_zero() {
        assert_eq!(
            int_poly(&[0, 1, 1]).solve(),
            Err(PolyError::DivisionByZero)
        );
    }

    #[test]
    fn test_overfull_divides_by_zero() {
        assert_eq!(
            int_poly(&[1, 2, 3, 4]).solve(),
            Err(PolyError::DivisionByZero)
        );
    }

    #[test]
    fn test_non_real_coefficient() {
        let p = Poly2::new(vec![Complex64::new(1.0, 1.0), Complex64::new(0.0, 0.0)]);
        assert!(matches!(p.solve(), Err(PolyError::NonRealCoefficient(_))));

        // Complex values with no imaginary part are accepted
        let q = Poly2::new(vec![Complex64::new(1.0, 0.0), Complex64::new(-2.0, 0.0)]);
        assert_eq!(q.solve(), Ok(Roots::Real([0.0, 2.0])));
    }

    #[test]
    fn test_to_vec_and_display() {
        let roots = Roots::Real([1.0, 2.0]);
        assert_eq!(
            roots.to_vec(),
            vec![Complex64::new(1.0, 0.0), Complex64::new(2.0, 0.0)]
        );
        assert_eq!(roots.to_string(), "[1, 2]");
        assert_eq!(Roots::Repeated(0.5).to_string(), "[0.5]");
    }
}
