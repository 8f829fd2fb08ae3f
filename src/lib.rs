extern crate itertools;
extern crate ndarray;
extern crate num_traits;

#[macro_use]
extern crate log;

#[cfg(test)]
#[macro_use]
extern crate approx;
#[cfg(test)]
extern crate env_logger;

#[macro_use]
pub mod matrix;
pub mod poly;

pub use matrix::Matrix;
pub use poly::monomial::Monomial;
pub use poly::polynomial::Polynomial;
