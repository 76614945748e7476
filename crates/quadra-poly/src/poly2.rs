//! The `Poly2` value type.
//!
//! Coefficients are stored keyed by exponent. Construction takes them
//! highest degree first, so `Poly2::new(vec![1, -4, 3])` is `x^2 - 4x + 3`.

use std::any::{type_name, Any};
use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::ops::{Add, Sub};

use quadra_rings::Ring;
use smallvec::SmallVec;

use crate::error::{PolyError, PolyResult};

/// A polynomial of degree at most two.
///
/// The exponent map is the only storage. [`Poly2::positional`] derives the
/// `(a, b, c)` reading used by solving and evaluation.
#[derive(Clone, PartialEq, Debug)]
pub struct Poly2<R: Ring> {
    /// Coefficients keyed by exponent.
    coeffs: BTreeMap<usize, R>,
}

/// The positional reading of a polynomial's coefficients.
///
/// Coefficients are taken in construction order (descending exponent) and
/// read as `a`, `b`, `c` of `a·x² + b·x + c`, whatever their exponents.
#[derive(Clone, PartialEq, Debug)]
pub enum Positional<R> {
    /// One coefficient: `a·x²`.
    Square(R),
    /// Two coefficients: `a·x² + b·x`.
    NoConstant(R, R),
    /// Three coefficients: `a·x² + b·x + c`.
    Full(R, R, R),
    /// More than three coefficients; reads as the zero quadratic.
    Overfull(usize),
}

impl<R: Ring> Positional<R> {
    /// Returns `(a, b, c)`, filling absent positions with zero.
    #[must_use]
    pub fn abc(&self) -> (R, R, R) {
        match self {
            Self::Square(a) => (a.clone(), R::zero(), R::zero()),
            Self::NoConstant(a, b) => (a.clone(), b.clone(), R::zero()),
            Self::Full(a, b, c) => (a.clone(), b.clone(), c.clone()),
            Self::Overfull(_) => (R::zero(), R::zero(), R::zero()),
        }
    }

    /// Converts every coefficient with `f`, stopping at the first error.
    ///
    /// # Errors
    ///
    /// Returns the first error produced by `f`.
    pub fn try_map<T, E>(
        &self,
        mut f: impl FnMut(&R) -> Result<T, E>,
    ) -> Result<Positional<T>, E> {
        Ok(match self {
            Self::Square(a) => Positional::Square(f(a)?),
            Self::NoConstant(a, b) => Positional::NoConstant(f(a)?, f(b)?),
            Self::Full(a, b, c) => Positional::Full(f(a)?, f(b)?, f(c)?),
            Self::Overfull(n) => Positional::Overfull(*n),
        })
    }

    /// Evaluates the reading at `x`.
    #[must_use]
    pub fn eval(&self, x: &R) -> R {
        let square = x.clone() * x.clone();
        match self {
            Self::Square(a) => a.clone() * square,
            Self::NoConstant(a, b) => a.clone() * square + b.clone() * x.clone(),
            Self::Full(a, b, c) => a.clone() * square + b.clone() * x.clone() + c.clone(),
            Self::Overfull(_) => R::zero(),
        }
    }
}

impl<R: Ring> Poly2<R> {
    /// Creates a polynomial from coefficients, highest degree first.
    ///
    /// The last coefficient gets exponent 0. No validation is performed;
    /// an empty vector gives a polynomial with no coefficients.
    #[must_use]
    pub fn new(coeffs: Vec<R>) -> Self {
        Self {
            coeffs: coeffs.into_iter().rev().enumerate().collect(),
        }
    }

    /// Returns the number of stored coefficients, zeros included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.coeffs.len()
    }

    /// Returns true if no coefficients are stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.coeffs.is_empty()
    }

    /// Returns the coefficient stored at `exponent`.
    #[must_use]
    pub fn coeff(&self, exponent: usize) -> Option<&R> {
        self.coeffs.get(&exponent)
    }

    /// Iterates over `(exponent, coefficient)` in ascending exponent order.
    pub fn terms(&self) -> impl DoubleEndedIterator<Item = (usize, &R)> + '_ {
        self.coeffs.iter().map(|(&e, c)| (e, c))
    }

    /// Returns the positional `(a, b, c)` reading.
    ///
    /// # Errors
    ///
    /// Returns [`PolyError::InvalidDegree`] when there are no coefficients.
    pub fn positional(&self) -> PolyResult<Positional<R>> {
        let leading: SmallVec<[&R; 3]> = self.coeffs.values().rev().take(3).collect();

        match leading.as_slice() {
            _ if self.coeffs.len() > 3 => Ok(Positional::Overfull(self.coeffs.len())),
            [] => Err(PolyError::InvalidDegree(0)),
            [a] => Ok(Positional::Square((*a).clone())),
            [a, b] => Ok(Positional::NoConstant((*a).clone(), (*b).clone())),
            [a, b, c, ..] => Ok(Positional::Full((*a).clone(), (*b).clone(), (*c).clone())),
        }
    }

    /// Adds two polynomials exponent by exponent.
    #[must_use]
    pub fn add_poly(&self, other: &Self) -> Self {
        self.merge(other, |acc, c| acc + c.clone())
    }

    /// Subtracts `other` exponent by exponent.
    #[must_use]
    pub fn sub_poly(&self, other: &Self) -> Self {
        self.merge(other, |acc, c| acc - c.clone())
    }

    /// Starts from a copy of `self` and folds every term of `other` into the
    /// entry at the same exponent, a missing entry counting as zero.
    fn merge(&self, other: &Self, op: impl Fn(R, &R) -> R) -> Self {
        let mut coeffs = self.coeffs.clone();

        for (&exp, c) in &other.coeffs {
            let current = coeffs.remove(&exp).unwrap_or_else(R::zero);
            coeffs.insert(exp, op(current, c));
        }

        Self { coeffs }
    }
}

impl<R: Ring + PartialOrd> Poly2<R> {
    /// Returns `Poly2(c1, c2, ...)` with the coefficients in ascending value
    /// order. Unordered values (NaN) keep their relative position.
    #[must_use]
    pub fn repr(&self) -> String {
        let mut values: Vec<&R> = self.coeffs.values().collect();
        values.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));

        let listed: Vec<String> = values.into_iter().map(ToString::to_string).collect();
        format!("Poly2({})", listed.join(", "))
    }
}

impl<R: Ring + 'static> Poly2<R> {
    /// Adds an operand whose type is only known at run time.
    ///
    /// # Errors
    ///
    /// Returns [`PolyError::TypeMismatch`] unless `other` is a `Poly2<R>`.
    pub fn checked_add<T: Any>(&self, other: &T) -> PolyResult<Self> {
        Ok(self.add_poly(Self::downcast(other)?))
    }

    /// Subtracts an operand whose type is only known at run time.
    ///
    /// # Errors
    ///
    /// Returns [`PolyError::TypeMismatch`] unless `other` is a `Poly2<R>`.
    pub fn checked_sub<T: Any>(&self, other: &T) -> PolyResult<Self> {
        Ok(self.sub_poly(Self::downcast(other)?))
    }

    fn downcast<T: Any>(other: &T) -> PolyResult<&Self> {
        (other as &dyn Any)
            .downcast_ref::<Self>()
            .ok_or(PolyError::TypeMismatch {
                expected: type_name::<Self>(),
                found: type_name::<T>(),
            })
    }
}

impl<R: Ring> From<Vec<R>> for Poly2<R> {
    fn from(coeffs: Vec<R>) -> Self {
        Self::new(coeffs)
    }
}

impl<R: Ring> FromIterator<R> for Poly2<R> {
    fn from_iter<I: IntoIterator<Item = R>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<R: Ring> Add for Poly2<R> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        self.add_poly(&rhs)
    }
}

impl<R: Ring> Add for &Poly2<R> {
    type Output = Poly2<R>;

    fn add(self, rhs: Self) -> Poly2<R> {
        self.add_poly(rhs)
    }
}

impl<R: Ring> Sub for Poly2<R> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        self.sub_poly(&rhs)
    }
}

impl<R: Ring> Sub for &Poly2<R> {
    type Output = Poly2<R>;

    fn sub(self, rhs: Self) -> Poly2<R> {
        self.sub_poly(rhs)
    }
}
