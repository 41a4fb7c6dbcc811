//! # Algorithms
use crate::data::linear_program::solution::Solution;

pub mod two_phase;

/// A linear program is either infeasible, unbounded or has a finite optimum.
///
/// This is determined as the result of an algorithm.
#[derive(Debug, Eq, PartialEq)]
pub enum OptimizationResult<OF> {
    /// There is no feasible solution at all.
    Infeasible,
    /// An optimal vertex was found.
    FiniteOptimum(Solution<OF>),
    /// The objective can be increased without bound.
    Unbounded,
}
