//! # The two-phase simplex method
//!
//! This module contains the driver of the simplex algorithm, implemented as described in the
//! book Combinatorial Optimization by Christos H. Papadimitriou and Kenneth Steiglitz. A first
//! phase over artificial variables finds a basic feasible solution when the origin is not one;
//! the second phase optimizes the objective from there.
use crate::algorithm::OptimizationResult;
use crate::algorithm::two_phase::strategy::pivot_rule::{PivotRule, PivotSelection};
use crate::algorithm::two_phase::tableau::{is_in_basic_feasible_solution_state, Tableau};
use crate::data::linear_program::solution::Solution;
use crate::data::number_types::{OrderedField, OrderedFieldRef};

pub mod strategy;
pub mod tableau;

/// How much progress information is written to standard output while solving.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Verbosity {
    /// Only the final result.
    Concise,
    /// Every basis change and the tableau it produces.
    Verbose,
}

/// Outcome of a single simplex phase.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum PhaseResult {
    /// The phase objective reached its optimum.
    FeasibleBounded,
    /// The phase objective can be increased without bound.
    FeasibleUnbounded,
}

/// Drives a tableau to a terminal classification with a pivot rule.
///
/// Owns the pivot counter, so the number of basis changes over both phases can be reported
/// afterwards.
pub struct Solver<PR> {
    rule: PR,
    verbosity: Verbosity,
    nr_pivots: usize,
}

impl<PR: PivotRule> Solver<PR> {
    /// Create a solver that only reports the final result.
    pub fn new(rule: PR) -> Self {
        Self::with_verbosity(rule, Verbosity::Concise)
    }

    /// Create a solver, choosing how much it reports while running.
    pub fn with_verbosity(rule: PR, verbosity: Verbosity) -> Self {
        Self { rule, verbosity, nr_pivots: 0, }
    }

    /// The number of pivots applied so far.
    pub fn nr_pivots(&self) -> usize {
        self.nr_pivots
    }

    /// The two-phase simplex method.
    ///
    /// The first phase is entered only if the origin is not feasible. When the first phase ends
    /// with a nonzero objective no feasible point exists at all and the second phase is skipped.
    pub fn solve<OF: OrderedField>(&mut self, tableau: &mut Tableau<OF>) -> OptimizationResult<OF>
    where
        for<'r> &'r OF: OrderedFieldRef<OF>,
    {
        if self.verbosity == Verbosity::Verbose {
            println!("The initial tableau is:");
            println!("{}", tableau);
        }

        if !tableau.is_feasible() {
            tableau.add_artificial_variables();
            match self.solve_one_phase(tableau) {
                PhaseResult::FeasibleBounded => {},
                PhaseResult::FeasibleUnbounded => {
                    panic!("the artificial objective cannot be unbounded");
                },
            }

            if !tableau.remove_artificial_variables() {
                return OptimizationResult::Infeasible;
            }
        }

        match self.solve_one_phase(tableau) {
            PhaseResult::FeasibleBounded => OptimizationResult::FiniteOptimum(Solution::new(
                tableau.objective_function_value(),
                tableau.current_solution().iter_values().cloned().collect(),
            )),
            PhaseResult::FeasibleUnbounded => OptimizationResult::Unbounded,
        }
    }

    /// Repeatedly apply the pivot rule until it no longer finds a basis change.
    fn solve_one_phase<OF: OrderedField>(&mut self, tableau: &mut Tableau<OF>) -> PhaseResult
    where
        for<'r> &'r OF: OrderedFieldRef<OF>,
    {
        loop {
            debug_assert!(is_in_basic_feasible_solution_state(tableau));

            match self.rule.select_pivot(tableau) {
                PivotSelection::Found { leaving, entering, } => {
                    if self.verbosity == Verbosity::Verbose {
                        println!("The entering variable is x{}", entering + 1);
                        println!("The leaving variable is x{}", leaving + 1);
                    }

                    tableau.pivot(leaving, entering);
                    self.nr_pivots += 1;

                    if self.verbosity == Verbosity::Verbose {
                        println!("{}", tableau);
                    }
                },
                PivotSelection::NotFound => break PhaseResult::FeasibleBounded,
                PivotSelection::Unbounded => break PhaseResult::FeasibleUnbounded,
            }
        }
    }
}

#[cfg(test)]
mod test {
    use num::FromPrimitive;

    use crate::algorithm::OptimizationResult;
    use crate::algorithm::two_phase::{Solver, Verbosity};
    use crate::algorithm::two_phase::strategy::pivot_rule::{Bland, MaxCoef, MaxIncrease, PivotRule};
    use crate::algorithm::two_phase::tableau::{is_in_basic_feasible_solution_state, Tableau};
    use crate::data::linear_algebra::matrix::RowMajor;
    use crate::data::linear_algebra::vector::Dense;
    use crate::data::linear_program::canonical_form::CanonicalForm;
    use crate::data::linear_program::solution::Solution;
    use crate::data::number_types::RationalBig;
    use crate::RB;

    /// max x1 + x2 s.t. x1 + 2 x2 <= 4, 3 x1 + 2 x2 <= 6.
    fn bounded_canonical() -> CanonicalForm<RationalBig> {
        CanonicalForm::new(
            Dense::new(vec![RB!(1), RB!(1)]),
            RowMajor::from_rows(
                vec![
                    vec![RB!(1), RB!(2)],
                    vec![RB!(3), RB!(2)],
                ],
                2,
            ),
            Dense::new(vec![RB!(4), RB!(6)]),
        )
    }

    fn solve_bounded<PR: PivotRule>() -> (OptimizationResult<RationalBig>, usize) {
        let mut tableau = Tableau::new(bounded_canonical());
        let mut solver = Solver::new(PR::new());
        let result = solver.solve(&mut tableau);
        assert!(is_in_basic_feasible_solution_state(&tableau));
        (result, solver.nr_pivots())
    }

    #[test]
    fn test_solve_bounded() {
        let expected = Solution::new(RB!(5, 2), vec![RB!(1), RB!(3, 2), RB!(0), RB!(0)]);

        let (result, nr_pivots) = solve_bounded::<Bland>();
        assert_eq!(result, OptimizationResult::FiniteOptimum(expected.clone()));
        assert!(nr_pivots > 0);

        let (result, _) = solve_bounded::<MaxCoef>();
        assert_eq!(result, OptimizationResult::FiniteOptimum(expected.clone()));

        let (result, _) = solve_bounded::<MaxIncrease>();
        assert_eq!(result, OptimizationResult::FiniteOptimum(expected));
    }

    #[test]
    fn test_solve_unbounded() {
        // max x1 s.t. -x1 + x2 <= 1.
        let mut tableau = Tableau::new(CanonicalForm::new(
            Dense::new(vec![RB!(1), RB!(0)]),
            RowMajor::from_rows(vec![vec![RB!(-1), RB!(1)]], 2),
            Dense::new(vec![RB!(1)]),
        ));
        let result = Solver::new(Bland::new()).solve(&mut tableau);
        assert_eq!(result, OptimizationResult::Unbounded);
    }

    #[test]
    fn test_solve_infeasible() {
        // max x1 s.t. x1 <= -1 forces a first phase that cannot zero its objective.
        let mut tableau = Tableau::new(CanonicalForm::new(
            Dense::new(vec![RB!(1)]),
            RowMajor::from_rows(vec![vec![RB!(1)]], 1),
            Dense::new(vec![RB!(-1)]),
        ));
        let result = Solver::new(Bland::new()).solve(&mut tableau);
        assert_eq!(result, OptimizationResult::Infeasible);
    }

    #[test]
    fn test_feasible_origin_takes_zero_pivots() {
        // max -x1 s.t. x1 <= 1 is optimal at the origin.
        let mut tableau = Tableau::new(CanonicalForm::new(
            Dense::new(vec![RB!(-1)]),
            RowMajor::from_rows(vec![vec![RB!(1)]], 1),
            Dense::new(vec![RB!(1)]),
        ));
        let mut solver = Solver::with_verbosity(Bland::new(), Verbosity::Concise);
        let result = solver.solve(&mut tableau);
        assert_eq!(
            result,
            OptimizationResult::FiniteOptimum(Solution::new(RB!(0), vec![RB!(0), RB!(1)])),
        );
        assert_eq!(solver.nr_pivots(), 0);
    }

    #[test]
    fn test_first_phase_round_trip_preserves_the_optimum() {
        // Force a feasible problem through the first phase anyway; the optimum it reaches from
        // the recovered basis is the same as the one found directly.
        let mut tableau = Tableau::new(bounded_canonical());
        tableau.add_artificial_variables();

        let mut solver = Solver::new(Bland::new());
        solver.solve_one_phase(&mut tableau);
        assert!(tableau.remove_artificial_variables());
        assert!(is_in_basic_feasible_solution_state(&tableau));

        let result = solver.solve(&mut tableau);
        match result {
            OptimizationResult::FiniteOptimum(solution) => {
                assert_eq!(solution.objective_value(), &RB!(5, 2));
            },
            _ => panic!("the problem has a finite optimum"),
        }
    }
}
