//! # Linear algebra
//!
//! Dense vectors and matrices, together with the row operations the simplex pivot is made of.
//! Rows live in a flat row-major buffer and are manipulated as slices, so a pivot does not
//! allocate per row.
use crate::data::number_types::{Field, FieldRef};

pub mod matrix;
pub mod vector;

/// Divide a row elementwise by a nonzero scalar.
pub(crate) fn divide_row<OF: Field>(row: &mut [OF], divisor: &OF) {
    debug_assert!(!divisor.is_zero());

    for value in row {
        if !value.is_zero() {
            *value /= divisor;
        }
    }
}

/// Subtract `factor` times `source` from `target` elementwise.
pub(crate) fn subtract_multiple_of_row<OF>(target: &mut [OF], factor: &OF, source: &[OF])
where
    OF: Field,
    for<'r> &'r OF: FieldRef<OF>,
{
    debug_assert_eq!(target.len(), source.len());

    for (value, rhs) in target.iter_mut().zip(source) {
        if !rhs.is_zero() {
            *value -= factor * rhs;
        }
    }
}

/// Add `source` to `target` elementwise.
pub(crate) fn add_row<OF: Field>(target: &mut [OF], source: &[OF]) {
    debug_assert_eq!(target.len(), source.len());

    for (value, rhs) in target.iter_mut().zip(source) {
        if !rhs.is_zero() {
            *value += rhs;
        }
    }
}

/// Negate a row elementwise.
pub(crate) fn negate_row<OF>(row: &mut [OF])
where
    OF: Field,
    for<'r> &'r OF: FieldRef<OF>,
{
    for value in row {
        if !value.is_zero() {
            *value = -&*value;
        }
    }
}

/// The inner product of two equally long slices.
pub(crate) fn inner_product<OF>(left: &[OF], right: &[OF]) -> OF
where
    OF: Field,
    for<'r> &'r OF: FieldRef<OF>,
{
    debug_assert_eq!(left.len(), right.len());

    left.iter()
        .zip(right)
        .filter(|(x, y)| !x.is_zero() && !y.is_zero())
        .map(|(x, y)| x * y)
        .sum()
}
