//! Operators on polynomials and monomials.
//!
//! Sums and differences involving a monomial produce a `Polynomial`, products
//! of two monomials stay a `Monomial`.

use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use poly::coefficient::Coefficient;
use poly::exponent::Exponent;
use poly::monomial::Monomial;
use poly::polynomial::Polynomial;

impl<R: Coefficient, E: Exponent> Neg for Polynomial<R, E> {
    type Output = Self;

    fn neg(mut self) -> Self::Output {
        self.negate();
        self
    }
}

impl<'a, R: Coefficient, E: Exponent> Neg for &'a Polynomial<R, E> {
    type Output = Polynomial<R, E>;

    #[inline]
    fn neg(self) -> Self::Output {
        -self.clone()
    }
}

impl<R: Coefficient, E: Exponent> AddAssign for Polynomial<R, E> {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.add_polynomial(other);
    }
}

impl<'a, R: Coefficient, E: Exponent> AddAssign<&'a Polynomial<R, E>> for Polynomial<R, E> {
    #[inline]
    fn add_assign(&mut self, other: &'a Polynomial<R, E>) {
        self.add_polynomial(other.clone());
    }
}

impl<R: Coefficient, E: Exponent> AddAssign<Monomial<R, E>> for Polynomial<R, E> {
    #[inline]
    fn add_assign(&mut self, other: Monomial<R, E>) {
        self.add_monomial(other);
    }
}

impl<R: Coefficient, E: Exponent> SubAssign for Polynomial<R, E> {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.add_polynomial(-other);
    }
}

impl<'a, R: Coefficient, E: Exponent> SubAssign<&'a Polynomial<R, E>> for Polynomial<R, E> {
    #[inline]
    fn sub_assign(&mut self, other: &'a Polynomial<R, E>) {
        self.add_polynomial(-other);
    }
}

impl<R: Coefficient, E: Exponent> SubAssign<Monomial<R, E>> for Polynomial<R, E> {
    #[inline]
    fn sub_assign(&mut self, other: Monomial<R, E>) {
        self.sub_monomial(other);
    }
}

impl<R: Coefficient, E: Exponent> MulAssign for Polynomial<R, E> {
    #[inline]
    fn mul_assign(&mut self, other: Self) {
        self.mul_polynomial(&other);
    }
}

impl<'a, R: Coefficient, E: Exponent> MulAssign<&'a Polynomial<R, E>> for Polynomial<R, E> {
    #[inline]
    fn mul_assign(&mut self, other: &'a Polynomial<R, E>) {
        self.mul_polynomial(other);
    }
}

impl<R: Coefficient, E: Exponent> MulAssign<Monomial<R, E>> for Polynomial<R, E> {
    #[inline]
    fn mul_assign(&mut self, other: Monomial<R, E>) {
        self.mul_monomial(other);
    }
}

impl<R: Coefficient, E: Exponent> MulAssign<R> for Polynomial<R, E> {
    #[inline]
    fn mul_assign(&mut self, other: R) {
        self.scale(other);
    }
}

// Binary operators on polynomials forward to the compound assignments.
macro_rules! impl_poly_binop {
    ($trt:ident, $mth:ident, $assign_mth:ident) => {
        impl<R: Coefficient, E: Exponent> $trt for Polynomial<R, E> {
            type Output = Self;

            fn $mth(mut self, other: Self) -> Self::Output {
                self.$assign_mth(other);
                self
            }
        }

        impl<'a, R: Coefficient, E: Exponent> $trt<&'a Polynomial<R, E>> for Polynomial<R, E> {
            type Output = Self;

            fn $mth(mut self, other: &'a Polynomial<R, E>) -> Self::Output {
                self.$assign_mth(other);
                self
            }
        }

        impl<'a, 'b, R: Coefficient, E: Exponent> $trt<&'b Polynomial<R, E>>
            for &'a Polynomial<R, E>
        {
            type Output = Polynomial<R, E>;

            fn $mth(self, other: &'b Polynomial<R, E>) -> Self::Output {
                let mut result = self.clone();
                result.$assign_mth(other);
                result
            }
        }

        impl<R: Coefficient, E: Exponent> $trt<Monomial<R, E>> for Polynomial<R, E> {
            type Output = Self;

            fn $mth(mut self, other: Monomial<R, E>) -> Self::Output {
                self.$assign_mth(other);
                self
            }
        }
    };
}

impl_poly_binop!(Add, add, add_assign);
impl_poly_binop!(Sub, sub, sub_assign);
impl_poly_binop!(Mul, mul, mul_assign);

impl<R: Coefficient, E: Exponent> Mul<R> for Polynomial<R, E> {
    type Output = Self;

    fn mul(mut self, other: R) -> Self::Output {
        self.scale(other);
        self
    }
}

impl<R: Coefficient, E: Exponent> Add for Monomial<R, E> {
    type Output = Polynomial<R, E>;

    fn add(self, other: Self) -> Self::Output {
        let mut result = Polynomial::from(self);
        result.add_monomial(other);
        result
    }
}

impl<R: Coefficient, E: Exponent> Sub for Monomial<R, E> {
    type Output = Polynomial<R, E>;

    fn sub(self, other: Self) -> Self::Output {
        let mut result = Polynomial::from(self);
        result.sub_monomial(other);
        result
    }
}

impl<R: Coefficient, E: Exponent> Add<R> for Monomial<R, E> {
    type Output = Polynomial<R, E>;

    #[inline]
    fn add(self, other: R) -> Self::Output {
        self + Monomial::constant(other)
    }
}

impl<R: Coefficient, E: Exponent> Sub<R> for Monomial<R, E> {
    type Output = Polynomial<R, E>;

    #[inline]
    fn sub(self, other: R) -> Self::Output {
        self - Monomial::constant(other)
    }
}

impl<R: Coefficient, E: Exponent> Add<Polynomial<R, E>> for Monomial<R, E> {
    type Output = Polynomial<R, E>;

    fn add(self, mut other: Polynomial<R, E>) -> Self::Output {
        other.add_monomial(self);
        other
    }
}

impl<R: Coefficient, E: Exponent> Sub<Polynomial<R, E>> for Monomial<R, E> {
    type Output = Polynomial<R, E>;

    fn sub(self, other: Polynomial<R, E>) -> Self::Output {
        let mut result = -other;
        result.add_monomial(self);
        result
    }
}

impl<R: Coefficient, E: Exponent> Mul<Polynomial<R, E>> for Monomial<R, E> {
    type Output = Polynomial<R, E>;

    fn mul(self, mut other: Polynomial<R, E>) -> Self::Output {
        other.mul_monomial(self);
        other
    }
}

// A coefficient on the left of a monomial, for the primitive coefficient types.
macro_rules! impl_coefficient_lhs {
    ($($t:ty),*) => {$(
        impl<E: Exponent> Add<Monomial<$t, E>> for $t {
            type Output = Polynomial<$t, E>;

            #[inline]
            fn add(self, other: Monomial<$t, E>) -> Self::Output {
                Monomial::constant(self) + other
            }
        }

        impl<E: Exponent> Sub<Monomial<$t, E>> for $t {
            type Output = Polynomial<$t, E>;

            #[inline]
            fn sub(self, other: Monomial<$t, E>) -> Self::Output {
                Monomial::constant(self) - other
            }
        }

        impl<E> Mul<Monomial<$t, E>> for $t {
            type Output = Monomial<$t, E>;

            #[inline]
            fn mul(self, other: Monomial<$t, E>) -> Self::Output {
                Monomial::new(self * other.coef, other.exp)
            }
        }
    )*};
}

impl_coefficient_lhs!(i8, i16, i32, i64, i128, isize, f32, f64);

#[cfg(test)]
mod tests {
    use poly::monomial::Monomial;
    use poly::polynomial::Polynomial;

    fn poly(t: &[(i64, i32)]) -> Polynomial<i64, i32> {
        t.iter().map(|&(c, e)| Monomial::new(c, e)).collect()
    }

    fn m(c: i64, e: i32) -> Monomial<i64, i32> {
        Monomial::new(c, e)
    }

    #[test]
    fn monomial_sums() {
        assert_eq!(m(1, 2) + m(2, 2), poly(&[(3, 2)]));
        assert_eq!(m(1, 2) + m(2, 3), poly(&[(2, 3), (1, 2)]));
        assert!((m(4, 1) - m(4, 1)).is_empty());
        assert_eq!(m(3, 1) + 5i64, poly(&[(3, 1), (5, 0)]));
        assert_eq!(m(3, 1) - 5i64, poly(&[(3, 1), (-5, 0)]));
        assert_eq!(2i64 - m(1, 1), poly(&[(-1, 1), (2, 0)]));
        assert_eq!(2i64 + m(0, 1), poly(&[(2, 0)]));
        assert_eq!(3i64 * m(2, 4), m(6, 4));
        assert_eq!(0.5f64 * Monomial::new(3.0f64, 1i32), Monomial::new(1.5, 1));
    }

    #[test]
    fn polynomial_sums() {
        let p = poly(&[(3, 2), (9, -4)]);
        let q = poly(&[(-3, 2), (1, 1)]);
        assert_eq!(p.clone() + q.clone(), poly(&[(1, 1), (9, -4)]));
        assert_eq!(&p + &q, poly(&[(1, 1), (9, -4)]));
        assert_eq!(p.clone() - &q, poly(&[(6, 2), (-1, 1), (9, -4)]));
        assert!((&p - &p).is_empty());
        assert_eq!(p.clone() + m(1, 0), poly(&[(3, 2), (1, 0), (9, -4)]));
        assert_eq!(p.clone() - m(9, -4), poly(&[(3, 2)]));
        assert_eq!(m(1, 0) + p.clone(), p.clone() + m(1, 0));
        assert_eq!(m(1, 0) - p.clone(), poly(&[(-3, 2), (1, 0), (-9, -4)]));
    }

    #[test]
    fn compound_assignment() {
        let mut p = poly(&[(3, 2)]);
        p += m(9, -4);
        p += &poly(&[(1, 0)]);
        assert_eq!(p, poly(&[(3, 2), (1, 0), (9, -4)]));
        p -= m(3, 2);
        p -= poly(&[(1, 0)]);
        assert_eq!(p, poly(&[(9, -4)]));

        p *= m(2, 4);
        assert_eq!(p, poly(&[(18, 0)]));
        p *= 0i64;
        assert!(p.is_empty());
    }

    #[test]
    fn products() {
        let p = poly(&[(1, 1), (1, 0)]);
        let q = poly(&[(1, 1), (-1, 0)]);
        assert_eq!(p.clone() * q.clone(), poly(&[(1, 2), (-1, 0)]));
        assert_eq!(&p * &q, &q * &p);
        assert_eq!(p.clone() * m(2, -1), poly(&[(2, 0), (2, -1)]));
        assert_eq!(m(2, -1) * p.clone(), p.clone() * m(2, -1));
        assert_eq!(p.clone() * 3i64, poly(&[(3, 1), (3, 0)]));

        let mut r = p.clone();
        r *= &q;
        r *= poly(&[(1, 0)]);
        assert_eq!(r, poly(&[(1, 2), (-1, 0)]));
    }

    #[test]
    fn negation() {
        let p = poly(&[(3, 2), (-9, -4)]);
        assert_eq!(-&p, poly(&[(-3, 2), (9, -4)]));
        assert_eq!(-(-p.clone()), p);
    }
}
