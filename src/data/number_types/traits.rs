//! # Traits
//!
//! The simplex algorithm is defined over the ordered fields. All methods containing algorithmic
//! logic are generic over an ordered field, so that the scalar implementation can be swapped out
//! without touching the algorithm. The traits below are satisfied by `num::BigRational` and the
//! fixed-size `num::rational` types through the blanket implementations.
use std::fmt::{Debug, Display};
use std::iter::Sum;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use num::{One, Zero};

/// Basic field operations with `Self` and with references to `Self`.
pub trait Field:
    PartialEq +
    Eq +
    PartialOrd +
    Zero +
    One +
    Neg<Output = Self> +
    Add<Self, Output = Self> +
    for<'r> Add<&'r Self, Output = Self> +
    AddAssign<Self> +
    for<'r> AddAssign<&'r Self> +
    Sub<Self, Output = Self> +
    for<'r> Sub<&'r Self, Output = Self> +
    SubAssign<Self> +
    for<'r> SubAssign<&'r Self> +
    Mul<Self, Output = Self> +
    for<'r> Mul<&'r Self, Output = Self> +
    MulAssign<Self> +
    for<'r> MulAssign<&'r Self> +
    Div<Self, Output = Self> +
    for<'r> Div<&'r Self, Output = Self> +
    DivAssign<Self> +
    for<'r> DivAssign<&'r Self> +
    Sum +
    Clone +
    Display +
    Debug
{
}

impl<T> Field for T
where
    T: PartialEq + Eq + PartialOrd + Zero + One + Neg<Output = Self>
        + Add<Self, Output = Self> + for<'r> Add<&'r Self, Output = Self>
        + AddAssign<Self> + for<'r> AddAssign<&'r Self>
        + Sub<Self, Output = Self> + for<'r> Sub<&'r Self, Output = Self>
        + SubAssign<Self> + for<'r> SubAssign<&'r Self>
        + Mul<Self, Output = Self> + for<'r> Mul<&'r Self, Output = Self>
        + MulAssign<Self> + for<'r> MulAssign<&'r Self>
        + Div<Self, Output = Self> + for<'r> Div<&'r Self, Output = Self>
        + DivAssign<Self> + for<'r> DivAssign<&'r Self>
        + Sum + Clone + Display + Debug,
{
}

/// The field operations combined with a total order.
pub trait OrderedField: Ord + Field {}

impl<T: Ord + Field> OrderedField for T {}

/// A reference to a variable that is in a [`Field`].
///
/// The tableau operations avoid cloning scalars where a by-reference operation exists; this trait
/// names the operations available on `&'r OF`.
pub trait FieldRef<Deref>:
    Neg<Output = Deref> +
    Add<Self, Output = Deref> +
    Add<Deref, Output = Deref> +
    Sub<Self, Output = Deref> +
    Sub<Deref, Output = Deref> +
    Mul<Self, Output = Deref> +
    Mul<Deref, Output = Deref> +
    Div<Self, Output = Deref> +
    Div<Deref, Output = Deref> +
    Copy +
    Sized
{
}

impl<Deref, R> FieldRef<Deref> for R
where
    R: Neg<Output = Deref>
        + Add<R, Output = Deref> + Add<Deref, Output = Deref>
        + Sub<R, Output = Deref> + Sub<Deref, Output = Deref>
        + Mul<R, Output = Deref> + Mul<Deref, Output = Deref>
        + Div<R, Output = Deref> + Div<Deref, Output = Deref>
        + Copy + Sized,
{
}

/// A reference to an ordered field element.
pub trait OrderedFieldRef<Deref>: Ord + FieldRef<Deref> {}

impl<Deref, R: Ord + FieldRef<Deref>> OrderedFieldRef<Deref> for R {}

#[cfg(test)]
mod test {
    use crate::data::number_types::RationalBig;
    use crate::data::number_types::traits::{OrderedField, OrderedFieldRef};

    /// Exercise the trait bounds on the scalar the binary is instantiated with.
    fn ordered_field_arithmetic<OF: OrderedField>(x: OF, y: OF) -> OF
    where
        for<'r> &'r OF: OrderedFieldRef<OF>,
    {
        let product = &x * &y;
        let ratio = &x / &y;
        let negated = -&x;
        product + ratio + negated + &y
    }

    #[test]
    fn big_rational_is_an_ordered_field() {
        let x = RationalBig::new(3.into(), 2.into());
        let y = RationalBig::new(1.into(), 2.into());
        assert_eq!(
            ordered_field_arithmetic(x, y),
            RationalBig::new(11.into(), 4.into()),
        );
    }
}
