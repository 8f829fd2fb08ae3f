pub mod coefficient;
pub mod exponent;
pub mod monomial;
pub mod normalize;
pub mod ops;
pub mod polynomial;

pub use self::coefficient::Coefficient;
pub use self::exponent::Exponent;
pub use self::monomial::Monomial;
pub use self::polynomial::{pow, Polynomial};
