//! Ring implementations for primitive numeric types.

use crate::traits::{RealRing, Ring};

impl Ring for f64 {
    fn zero() -> Self {
        0.0
    }

    fn is_zero(&self) -> bool {
        use num_traits::Zero;
        Zero::is_zero(self)
    }

    #[allow(clippy::cast_precision_loss)]
    fn from_i64(n: i64) -> Self {
        n as f64
    }
}

impl RealRing for f64 {
    fn to_real(&self) -> Option<f64> {
        Some(*self)
    }
}
