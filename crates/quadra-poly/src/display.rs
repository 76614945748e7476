//! Conventional algebraic rendering.
//!
//! Terms are written highest exponent first. Zero coefficients are skipped,
//! a unit coefficient in front of `x` is elided, `x^0` is dropped and `x^1`
//! is written `x`. The sign of a term is taken from the leading `-` of its
//! written coefficient, so only the first term carries an unspaced sign.
//! Any `+` or `-` inside the rest of a coefficient (a complex value such as
//! `(1-2i)`) is spaced like a term separator: `(1 - 2i)`.

use std::fmt;

use quadra_rings::Ring;

use crate::poly2::Poly2;

impl<R: Ring> fmt::Display for Poly2<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;

        for (exp, coeff) in self.terms().rev() {
            if coeff.is_zero() {
                continue;
            }

            let written = coeff.coeff_display().to_string();
            let (negative, magnitude) = match written.strip_prefix('-') {
                Some(rest) => (true, rest),
                None => (false, written.as_str()),
            };

            match (first, negative) {
                (true, true) => f.write_str("-")?,
                (true, false) => {}
                (false, true) => f.write_str(" - ")?,
                (false, false) => f.write_str(" + ")?,
            }

            write_term(f, &space_signs(magnitude), exp)?;
            first = false;
        }

        Ok(())
    }
}

fn space_signs(magnitude: &str) -> String {
    magnitude.replace('+', " + ").replace('-', " - ")
}

fn write_term(f: &mut fmt::Formatter<'_>, magnitude: &str, exp: usize) -> fmt::Result {
    match exp {
        0 => f.write_str(magnitude),
        1 if magnitude == "1" => f.write_str("x"),
        1 => write!(f, "{magnitude}x"),
        _ if magnitude == "1" => write!(f, "x^{exp}"),
        _ => write!(f, "{magnitude}x^{exp}"),
    }
}
