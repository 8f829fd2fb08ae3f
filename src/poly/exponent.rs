use num_traits::Zero;
use std::fmt::Debug;

/// Trait for exponents in polynomials.
///
/// Exponents only have to be ordered and closed under addition, so integer
/// as well as floating-point exponents are accepted. NaN is not a valid
/// exponent.
pub trait Exponent: Zero + PartialOrd + Debug + Clone {}

impl<T: Zero + PartialOrd + Debug + Clone> Exponent for T {}
