use num_traits::Zero;
use std::fmt::Debug;
use std::ops::{Mul, Neg};

/// Trait for polynomial coefficients.
pub trait Coefficient:
    Zero + Mul<Output = Self> + Neg<Output = Self> + PartialEq + Debug + Clone
{
}

impl<T: Zero + Mul<Output = Self> + Neg<Output = Self> + PartialEq + Debug + Clone> Coefficient
    for T
{
}
