//! Ring implementation for complex coefficients.

use std::fmt;

use num_complex::Complex64;

use crate::traits::{RealRing, Ring};

impl Ring for Complex64 {
    fn zero() -> Self {
        Complex64::new(0.0, 0.0)
    }

    fn is_zero(&self) -> bool {
        use num_traits::Zero;
        Zero::is_zero(self)
    }

    #[allow(clippy::cast_precision_loss)]
    fn from_i64(n: i64) -> Self {
        Complex64::new(n as f64, 0.0)
    }

    // `1+2i` carries an inner sign, so the whole value is bracketed.
    fn fmt_coeff(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({self})")
    }
}

impl RealRing for Complex64 {
    fn to_real(&self) -> Option<f64> {
        if self.im == 0.0 {
            Some(self.re)
        } else {
            None
        }
    }
}
