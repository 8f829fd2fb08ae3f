//! Canonical form of a list of terms.
//!
//! A list is canonical when its exponents are strictly decreasing and no
//! coefficient is zero. Every `Polynomial` keeps its terms in this form.

use itertools::Itertools;
use std::cmp::Ordering;

use poly::coefficient::Coefficient;
use poly::exponent::Exponent;
use poly::monomial::Monomial;

/// Brings `terms` into canonical form: terms are sorted by descending
/// exponent, terms with equal exponents are summed and zero terms are dropped.
pub fn normalize<R: Coefficient, E: Exponent>(terms: &mut Vec<Monomial<R, E>>) {
    let before = terms.len();

    terms.sort_by(|a, b| a.cmp_exponent(b));

    let merged: Vec<_> = terms
        .drain(..)
        .coalesce(|a, b| {
            if a.exp == b.exp {
                Ok(Monomial::new(a.coef + b.coef, a.exp))
            } else {
                Err((a, b))
            }
        })
        .filter(|m| !m.is_zero())
        .collect();
    *terms = merged;

    trace!("Normalized {} terms into {}", before, terms.len());
    debug_assert!(is_canonical(terms));
}

/// Inserts a single term into a canonical list, keeping it canonical.
///
/// If a term with the same exponent is present the coefficients are added
/// and the term is removed when the sum is zero. A zero term is ignored.
pub fn merge_insert<R: Coefficient, E: Exponent>(terms: &mut Vec<Monomial<R, E>>, m: Monomial<R, E>) {
    if m.is_zero() {
        return;
    }

    match terms.iter().position(|t| t.exp <= m.exp) {
        Some(i) if terms[i].exp == m.exp => {
            let coef = terms[i].coef.clone() + m.coef;
            if coef.is_zero() {
                terms.remove(i);
            } else {
                terms[i].coef = coef;
            }
        }
        Some(i) => terms.insert(i, m),
        None => terms.push(m),
    }

    debug_assert!(is_canonical(terms));
}

/// Returns true if the exponents are strictly decreasing and no coefficient
/// is zero.
pub fn is_canonical<R: Coefficient, E: Exponent>(terms: &[Monomial<R, E>]) -> bool {
    terms.iter().all(|m| !m.is_zero())
        && terms
            .windows(2)
            .all(|w| w[0].exp.partial_cmp(&w[1].exp) == Some(Ordering::Greater))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn terms(t: &[(i64, i32)]) -> Vec<Monomial<i64, i32>> {
        t.iter().map(|&(c, e)| Monomial::new(c, e)).collect()
    }

    #[test]
    fn sorts_descending() {
        let mut t = terms(&[(1, -2), (4, 3), (2, 0), (3, 1)]);
        normalize(&mut t);
        assert_eq!(t, terms(&[(4, 3), (3, 1), (2, 0), (1, -2)]));
    }

    #[test]
    fn combines_equal_exponents() {
        let mut t = terms(&[(1, 2), (9, -4), (2, 2), (5, 2)]);
        normalize(&mut t);
        assert_eq!(t, terms(&[(8, 2), (9, -4)]));
    }

    #[test]
    fn drops_cancelled_and_zero_terms() {
        let mut t = terms(&[(3, 1), (0, 5), (-3, 1), (7, 0)]);
        normalize(&mut t);
        assert_eq!(t, terms(&[(7, 0)]));

        let mut t = terms(&[(2, 4), (-2, 4)]);
        normalize(&mut t);
        assert!(t.is_empty());
    }

    #[test]
    fn merge_insert_positions() {
        let mut t = terms(&[(3, 2), (9, -4)]);
        merge_insert(&mut t, Monomial::new(1, 5));
        merge_insert(&mut t, Monomial::new(1, 0));
        merge_insert(&mut t, Monomial::new(1, -7));
        assert_eq!(t, terms(&[(1, 5), (3, 2), (1, 0), (9, -4), (1, -7)]));
    }

    #[test]
    fn merge_insert_combines_and_cancels() {
        let mut t = terms(&[(3, 2), (9, -4)]);
        merge_insert(&mut t, Monomial::new(4, -4));
        assert_eq!(t, terms(&[(3, 2), (13, -4)]));
        merge_insert(&mut t, Monomial::new(-3, 2));
        assert_eq!(t, terms(&[(13, -4)]));
        merge_insert(&mut t, Monomial::new(0, 8));
        assert_eq!(t, terms(&[(13, -4)]));
    }

    #[test]
    fn merge_insert_into_empty() {
        let mut t = Vec::new();
        merge_insert(&mut t, Monomial::new(2.5f64, 0.5f64));
        assert_eq!(t, vec![Monomial::new(2.5, 0.5)]);
    }

    #[test]
    fn canonical_check() {
        assert!(is_canonical(&terms(&[(1, 3), (2, 1)])));
        assert!(is_canonical::<i64, i32>(&[]));
        assert!(!is_canonical(&terms(&[(1, 1), (2, 3)])));
        assert!(!is_canonical(&terms(&[(1, 1), (2, 1)])));
        assert!(!is_canonical(&terms(&[(0, 1)])));
    }
}
