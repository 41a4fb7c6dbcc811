//! # Number types
//!
//! The tableau is generic over the scalar it computes with; only an ordered field with exact
//! arithmetic keeps every classification exact. The default choice is `num::BigRational`, an
//! arbitrary precision rational, so no intermediate value can overflow.
pub mod traits;

pub use traits::{Field, FieldRef, OrderedField, OrderedFieldRef};

/// An arbitrary precision rational number.
///
/// The binary and the tests instantiate the solver with this type.
pub type RationalBig = num::BigRational;

/// Shorthand for creating a rational number in tests.
#[macro_export]
macro_rules! RB {
    ($value:expr) => {
        RationalBig::from_f64($value as f64).unwrap()
    };
    ($numer:expr, $denom:expr) => {
        RationalBig::new(num::BigInt::from($numer), num::BigInt::from($denom))
    };
}
