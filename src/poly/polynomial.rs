use itertools::Itertools;
use num_traits::{One, Pow, Zero};
use std::fmt;
use std::iter::FromIterator;
use std::mem;
use std::ops::Mul;
use std::slice;
use std::vec;

use poly::coefficient::Coefficient;
use poly::exponent::Exponent;
use poly::monomial::Monomial;
use poly::normalize::{is_canonical, merge_insert, normalize};

/// A univariate polynomial, stored as a list of terms ordered by strictly
/// decreasing exponent. Terms with a zero coefficient are never stored, so
/// the zero polynomial has no terms at all.
#[derive(Clone, Debug, PartialEq)]
pub struct Polynomial<R, E> {
    monomials: Vec<Monomial<R, E>>,
}

impl<R, E> Polynomial<R, E> {
    /// Constructs the zero polynomial.
    #[inline]
    pub fn new() -> Polynomial<R, E> {
        Polynomial {
            monomials: Vec::new(),
        }
    }

    /// The number of terms.
    #[inline]
    pub fn len(&self) -> usize {
        self.monomials.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.monomials.is_empty()
    }

    #[inline]
    pub fn monomials(&self) -> &[Monomial<R, E>] {
        &self.monomials
    }

    #[inline]
    pub fn iter(&self) -> slice::Iter<Monomial<R, E>> {
        self.monomials.iter()
    }

    #[inline]
    pub fn into_monomials(self) -> Vec<Monomial<R, E>> {
        self.monomials
    }

    /// Returns the term with the highest exponent, or `None` for the zero
    /// polynomial.
    #[inline]
    pub fn leading_term(&self) -> Option<&Monomial<R, E>> {
        self.monomials.first()
    }

    /// Moves the terms out, leaving `self` as the zero polynomial.
    #[inline]
    pub fn take(&mut self) -> Polynomial<R, E> {
        mem::replace(self, Polynomial::new())
    }

    /// Removes all terms.
    #[inline]
    pub fn clear(&mut self) {
        self.monomials.clear();
    }
}

impl<R: Coefficient, E: Exponent> Polynomial<R, E> {
    /// Constructs a polynomial from terms in any order.
    pub fn from_monomials(mut monomials: Vec<Monomial<R, E>>) -> Polynomial<R, E> {
        normalize(&mut monomials);
        Polynomial { monomials }
    }

    /// Returns the exponent of the leading term.
    ///
    /// The zero polynomial has degree `E::zero()`, the same as a non-zero
    /// constant. Use `leading_term` to tell the two apart.
    pub fn degree(&self) -> E {
        self.monomials
            .first()
            .map_or_else(E::zero, |m| m.exp.clone())
    }

    pub fn add_polynomial(&mut self, other: Polynomial<R, E>) {
        if other.is_empty() {
            return;
        }
        self.monomials.extend(other.monomials);
        normalize(&mut self.monomials);
    }

    #[inline]
    pub fn add_monomial(&mut self, m: Monomial<R, E>) {
        merge_insert(&mut self.monomials, m);
    }

    #[inline]
    pub fn sub_monomial(&mut self, m: Monomial<R, E>) {
        merge_insert(&mut self.monomials, -m);
    }

    /// Multiplies every term of `self` with every term of `other`.
    pub fn mul_polynomial(&mut self, other: &Polynomial<R, E>) {
        if self.is_empty() {
            return;
        }

        let mut product = Vec::with_capacity(self.len() * other.len());
        for a in &self.monomials {
            for b in &other.monomials {
                product.push(Monomial::new(
                    a.coef.clone() * b.coef.clone(),
                    a.exp.clone() + b.exp.clone(),
                ));
            }
        }

        normalize(&mut product);
        self.monomials = product;
    }

    /// Multiplies every term by `m`. A zero coefficient clears the polynomial.
    pub fn mul_monomial(&mut self, m: Monomial<R, E>) {
        if m.is_zero() {
            self.clear();
            return;
        }

        for t in &mut self.monomials {
            t.coef = t.coef.clone() * m.coef.clone();
            t.exp = t.exp.clone() + m.exp.clone();
        }

        // Rounded exponents may collide and rounded coefficients may vanish.
        if !is_canonical(&self.monomials) {
            normalize(&mut self.monomials);
        }
    }

    /// Multiplies every coefficient by `c`.
    pub fn scale(&mut self, c: R) {
        if c.is_zero() {
            self.clear();
            return;
        }

        for t in &mut self.monomials {
            t.coef = t.coef.clone() * c.clone();
        }
        self.monomials.retain(|t| !t.is_zero());
    }

    /// Negates every coefficient.
    pub fn negate(&mut self) {
        for t in &mut self.monomials {
            t.coef = -t.coef.clone();
        }
    }

    /// Computes the sum of `coef * value^exp` over all terms.
    pub fn evaluate<V, W, O>(&self, value: V) -> O
    where
        V: Clone + Pow<E, Output = W>,
        R: Mul<W, Output = O>,
        O: Zero,
    {
        self.monomials
            .iter()
            .fold(O::zero(), |acc, m| acc + m.evaluate(value.clone()))
    }

    /// Raises `self` to `power`, see `pow`.
    #[inline]
    pub fn pow(&self, power: u32) -> Polynomial<R, E> {
        pow(self, power)
    }
}

/// Multiplies `p` with itself `power - 1` times.
///
/// A power of zero returns `p` unchanged rather than the constant one.
pub fn pow<R: Coefficient, E: Exponent>(p: &Polynomial<R, E>, power: u32) -> Polynomial<R, E> {
    let mut result = p.clone();
    for _ in 1..power {
        result.mul_polynomial(p);
    }
    result
}

impl<R, E> Default for Polynomial<R, E> {
    #[inline]
    fn default() -> Self {
        Polynomial::new()
    }
}

impl<R: Coefficient, E: Exponent> From<Monomial<R, E>> for Polynomial<R, E> {
    fn from(m: Monomial<R, E>) -> Self {
        if m.is_zero() {
            return Polynomial::new();
        }
        Polynomial { monomials: vec![m] }
    }
}

impl<R: Coefficient, E: Exponent> FromIterator<Monomial<R, E>> for Polynomial<R, E> {
    fn from_iter<I: IntoIterator<Item = Monomial<R, E>>>(iter: I) -> Self {
        Polynomial::from_monomials(iter.into_iter().collect())
    }
}

impl<R, E> IntoIterator for Polynomial<R, E> {
    type Item = Monomial<R, E>;
    type IntoIter = vec::IntoIter<Monomial<R, E>>;

    fn into_iter(self) -> Self::IntoIter {
        self.monomials.into_iter()
    }
}

impl<'a, R, E> IntoIterator for &'a Polynomial<R, E> {
    type Item = &'a Monomial<R, E>;
    type IntoIter = slice::Iter<'a, Monomial<R, E>>;

    fn into_iter(self) -> Self::IntoIter {
        self.monomials.iter()
    }
}

impl<R: Coefficient, E: Exponent> Zero for Polynomial<R, E> {
    #[inline]
    fn zero() -> Self {
        Polynomial::new()
    }

    #[inline]
    fn is_zero(&self) -> bool {
        self.is_empty()
    }
}

impl<R: Coefficient + One, E: Exponent> One for Polynomial<R, E> {
    #[inline]
    fn one() -> Self {
        Polynomial::from(Monomial::constant(R::one()))
    }
}

impl<R: fmt::Display, E: fmt::Display + Zero> fmt::Display for Polynomial<R, E> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({})", self.monomials.iter().join(", "))
    }
}
