#![cfg_attr(feature = "nightly", feature(test))]
#![cfg(feature = "nightly")]
extern crate test;

extern crate fancy_matrix;

use test::Bencher;

use fancy_matrix::poly::normalize::normalize;
use fancy_matrix::poly::{pow, Monomial, Polynomial};

fn scrambled_terms(n: i64) -> Vec<Monomial<i64, i64>> {
    (0..n)
        .map(|i| Monomial::new(i % 7 - 3, (i * 7919) % (n / 4 + 1)))
        .collect()
}

#[bench]
fn normalize_1000(b: &mut Bencher) {
    let terms = scrambled_terms(1000);
    b.iter(|| {
        let mut t = terms.clone();
        normalize(&mut t);
        t
    });
}

#[bench]
fn merge_insert_500(b: &mut Bencher) {
    let terms = scrambled_terms(500);
    b.iter(|| {
        let mut p: Polynomial<i64, i64> = Polynomial::new();
        for m in &terms {
            p += m.clone();
        }
        p
    });
}

#[bench]
fn poly_mul_dense(b: &mut Bencher) {
    let p: Polynomial<i64, i64> = (0..60).map(|i| Monomial::new(i + 1, i)).collect();
    let q: Polynomial<i64, i64> = (0..60).map(|i| Monomial::new(1 - i, -i)).collect();
    b.iter(|| p.clone() * &q);
}

#[bench]
fn poly_pow8(b: &mut Bencher) {
    let p: Polynomial<f64, i32> = vec![
        Monomial::new(1.0, 1),
        Monomial::new(-2.0, 0),
        Monomial::new(0.5, -1),
    ]
    .into_iter()
    .collect();
    b.iter(|| pow(&p, 8));
}
