//! # Canonical form
//!
//! A linear program as the user states it:
//!
//! ```text
//! max   c^T x
//! s.t.  A x <= b
//!       x >= 0
//! ```
//!
//! The tableau constructor turns this into the standard form with equality constraints by
//! appending slack variables.
use std::fmt::{Debug, Display};

use crate::data::linear_algebra::matrix::RowMajor;
use crate::data::linear_algebra::vector::Dense;

/// A validated maximization problem with `<=` constraints over nonnegative variables.
#[derive(Eq, PartialEq, Debug, Clone)]
pub struct CanonicalForm<OF> {
    /// Coefficients of the objective function, one per variable.
    cost: Dense<OF>,
    /// Constraint coefficients, one row per constraint.
    constraints: RowMajor<OF>,
    /// Right-hand sides of the constraints, possibly negative.
    rhs: Dense<OF>,
}

impl<OF: PartialEq + Display + Debug> CanonicalForm<OF> {
    /// Combine the problem data, checking that the dimensions agree.
    pub fn new(cost: Dense<OF>, constraints: RowMajor<OF>, rhs: Dense<OF>) -> Self {
        debug_assert!(!cost.is_empty());
        debug_assert!(!rhs.is_empty());
        debug_assert_eq!(constraints.nr_columns(), cost.len());
        debug_assert_eq!(constraints.nr_rows(), rhs.len());

        Self { cost, constraints, rhs, }
    }

    /// Number of decision variables, before any slacks are added.
    pub fn nr_variables(&self) -> usize {
        self.cost.len()
    }

    /// Number of constraints.
    pub fn nr_constraints(&self) -> usize {
        self.rhs.len()
    }

    /// Decompose into `(cost, constraints, rhs)`.
    pub(crate) fn into_parts(self) -> (Dense<OF>, RowMajor<OF>, Dense<OF>) {
        (self.cost, self.constraints, self.rhs)
    }
}
