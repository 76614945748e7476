//! Ring implementation for arbitrary-precision integers.
//!
//! Integer coefficients never overflow: sums, products and evaluations
//! grow as needed.

use dashu::integer::IBig;

use crate::traits::{RealRing, Ring};

impl Ring for IBig {
    fn zero() -> Self {
        IBig::ZERO
    }

    fn is_zero(&self) -> bool {
        *self == IBig::ZERO
    }

    fn from_i64(n: i64) -> Self {
        IBig::from(n)
    }
}

impl RealRing for IBig {
    /// Rounds to the nearest `f64`; values beyond its range become infinite.
    fn to_real(&self) -> Option<f64> {
        Some(self.to_f64().value())
    }
}
