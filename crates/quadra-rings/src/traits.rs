//! Algebraic structure traits.
//!
//! This module defines the traits polynomial coefficients must satisfy.
//! Polynomials never inspect a coefficient beyond what is declared here.

use std::fmt::{self, Debug, Display};
use std::ops::{Add, Mul, Sub};

/// A ring is a set with addition and multiplication operations.
///
/// # Laws
///
/// - Addition is associative and commutative with identity `zero()`
/// - Multiplication is associative and distributes over addition
///
/// Floating point implementations satisfy these laws only up to rounding.
pub trait Ring:
    Clone + PartialEq + Debug + Display + Add<Output = Self> + Sub<Output = Self> + Mul<Output = Self>
{
    /// The additive identity.
    fn zero() -> Self;

    /// Returns true if this is the additive identity.
    fn is_zero(&self) -> bool;

    /// Embeds an integer into the ring.
    fn from_i64(n: i64) -> Self;

    /// Writes the coefficient as it appears inside a rendered term.
    ///
    /// A leading `-` is read as the sign of the term by the polynomial
    /// formatter, so implementations whose `Display` output can contain
    /// an inner sign should override this.
    fn fmt_coeff(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(self, f)
    }

    /// Returns a `Display` adapter that writes via [`Ring::fmt_coeff`].
    fn coeff_display(&self) -> CoeffDisplay<'_, Self> {
        CoeffDisplay(self)
    }
}

/// A ring whose elements may be viewed as real numbers.
///
/// Root finding works over `f64`; this is the bridge.
pub trait RealRing: Ring {
    /// Returns the value as an `f64`, or `None` if it has no real value.
    fn to_real(&self) -> Option<f64>;
}

/// Display adapter returned by [`Ring::coeff_display`].
#[derive(Clone, Copy, Debug)]
pub struct CoeffDisplay<'a, R: ?Sized>(&'a R);

impl<R: Ring> Display for CoeffDisplay<'_, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt_coeff(f)
    }
}
