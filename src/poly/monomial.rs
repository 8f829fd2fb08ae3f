use num_traits::{Pow, Zero};
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Div, DivAssign, Mul, MulAssign, Neg, Sub};

/// A single term `coef * x^exp`.
///
/// Equality compares both the coefficient and the exponent. The order used to
/// sort terms inside a polynomial only looks at the exponent, see
/// `cmp_exponent`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Monomial<R, E> {
    pub coef: R,
    pub exp: E,
}

impl<R, E> Monomial<R, E> {
    #[inline]
    pub fn new(coef: R, exp: E) -> Monomial<R, E> {
        Monomial { coef, exp }
    }

    /// Orders monomials by descending exponent: the monomial with the higher
    /// exponent comes first. Incomparable exponents are treated as equal.
    #[inline]
    pub fn cmp_exponent(&self, other: &Self) -> Ordering
    where
        E: PartialOrd,
    {
        other
            .exp
            .partial_cmp(&self.exp)
            .unwrap_or(Ordering::Equal)
    }

    /// Returns true if the coefficient is zero.
    #[inline]
    pub fn is_zero(&self) -> bool
    where
        R: Zero,
    {
        self.coef.is_zero()
    }

    /// Computes `coef * value^exp`.
    pub fn evaluate<V, W, O>(&self, value: V) -> O
    where
        V: Pow<E, Output = W>,
        R: Clone + Mul<W, Output = O>,
        E: Clone,
    {
        self.coef.clone() * Pow::pow(value, self.exp.clone())
    }
}

impl<R, E: Zero> Monomial<R, E> {
    /// Constructs the constant term `coef * x^0`.
    #[inline]
    pub fn constant(coef: R) -> Monomial<R, E> {
        Monomial::new(coef, E::zero())
    }
}

impl<R: Mul<Output = R>, E: Add<Output = E>> Mul for Monomial<R, E> {
    type Output = Self;

    fn mul(self, other: Self) -> Self::Output {
        Monomial {
            coef: self.coef * other.coef,
            exp: self.exp + other.exp,
        }
    }
}

impl<R: Mul<Output = R>, E> Mul<R> for Monomial<R, E> {
    type Output = Self;

    fn mul(self, coef: R) -> Self::Output {
        Monomial {
            coef: self.coef * coef,
            exp: self.exp,
        }
    }
}

impl<R: Div<Output = R>, E: Sub<Output = E>> Div for Monomial<R, E> {
    type Output = Self;

    fn div(self, other: Self) -> Self::Output {
        Monomial {
            coef: self.coef / other.coef,
            exp: self.exp - other.exp,
        }
    }
}

impl<R: Div<Output = R>, E> Div<R> for Monomial<R, E> {
    type Output = Self;

    fn div(self, coef: R) -> Self::Output {
        Monomial {
            coef: self.coef / coef,
            exp: self.exp,
        }
    }
}

impl<R: Mul<Output = R> + Clone, E: Add<Output = E> + Clone> MulAssign for Monomial<R, E> {
    fn mul_assign(&mut self, other: Self) {
        *self = self.clone() * other;
    }
}

impl<R: Div<Output = R> + Clone, E: Sub<Output = E> + Clone> DivAssign for Monomial<R, E> {
    fn div_assign(&mut self, other: Self) {
        *self = self.clone() / other;
    }
}

impl<R: Neg<Output = R>, E> Neg for Monomial<R, E> {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Monomial {
            coef: -self.coef,
            exp: self.exp,
        }
    }
}

impl<R: fmt::Display, E: fmt::Display + Zero> fmt::Display for Monomial<R, E> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.coef)?;
        if !self.exp.is_zero() {
            write!(f, "x^{}", self.exp)?;
        }
        Ok(())
    }
}
