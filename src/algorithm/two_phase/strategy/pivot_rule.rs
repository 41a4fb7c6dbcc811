//! # Pivot rules
//!
//! Strategies for moving from basis to basis. A rule only decides which variable enters the
//! basis and which one leaves; applying the pivot is the driver's job, so rules borrow the
//! tableau read-only.
//!
//! Only Bland's rule is guaranteed to terminate on degenerate problems. The other rules may
//! cycle; using them is a choice of the caller.
use rand::Rng;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::algorithm::two_phase::tableau::Tableau;
use crate::data::number_types::{OrderedField, OrderedFieldRef};

/// Outcome of asking a pivot rule for the next basis change.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PivotSelection {
    /// A pivot that makes `entering` basic in the row where `leaving` is currently basic.
    Found {
        /// Column index of the variable leaving the basis.
        leaving: usize,
        /// Column index of the variable entering the basis.
        entering: usize,
    },
    /// There is no entering candidate left: the current basis is optimal.
    NotFound,
    /// Some entering candidate has no leaving candidate: the objective is unbounded.
    Unbounded,
}

/// Deciding how to pivot.
///
/// During the simplex method, one needs to decide how to move from basic solution to basic
/// solution. The pivot rule describes that behavior.
pub trait PivotRule {
    /// Create a new instance.
    fn new() -> Self;

    /// Select the next basis change, or report that none exists.
    fn select_pivot<OF: OrderedField>(&mut self, tableau: &Tableau<OF>) -> PivotSelection
    where
        for<'r> &'r OF: OrderedFieldRef<OF>;
}

/// All columns that would improve the objective when entering the basis.
fn entering_candidates<OF: OrderedField>(tableau: &Tableau<OF>) -> Vec<usize>
where
    for<'r> &'r OF: OrderedFieldRef<OF>,
{
    let zero = OF::zero();
    (0..tableau.nr_columns())
        .filter(|&column| tableau.relative_cost(column) > &zero)
        .collect()
}

/// The basic variables of all rows that attain the minimum ratio for an entering column.
///
/// An empty result means the entering column can be increased without bound.
fn leaving_candidates<OF: OrderedField>(tableau: &Tableau<OF>, entering: usize) -> Vec<usize>
where
    for<'r> &'r OF: OrderedFieldRef<OF>,
{
    let zero = OF::zero();
    let mut best_ratio: Option<OF> = None;
    let mut candidates = Vec::new();

    for row in 0..tableau.nr_rows() {
        let coefficient = tableau.constraint(row, entering);
        if coefficient > &zero {
            let ratio = tableau.rhs_value(row) / coefficient;
            match &best_ratio {
                Some(smallest) if &ratio > smallest => {},
                Some(smallest) if &ratio == smallest => candidates.push(tableau.basis_column(row)),
                _ => {
                    best_ratio = Some(ratio);
                    candidates = vec![tableau.basis_column(row)];
                },
            }
        }
    }

    candidates
}

/// Bland's rule: the smallest index among the candidates, both entering and leaving.
///
/// The only rule here that cannot cycle.
pub struct Bland;

impl PivotRule for Bland {
    fn new() -> Self {
        Self
    }

    fn select_pivot<OF: OrderedField>(&mut self, tableau: &Tableau<OF>) -> PivotSelection
    where
        for<'r> &'r OF: OrderedFieldRef<OF>,
    {
        let entering_candidates = entering_candidates(tableau);
        if entering_candidates.is_empty() {
            return PivotSelection::NotFound;
        }
        let entering = entering_candidates[0];

        let leaving_candidates = leaving_candidates(tableau, entering);
        match leaving_candidates.iter().min() {
            Some(&leaving) => PivotSelection::Found { leaving, entering, },
            None => PivotSelection::Unbounded,
        }
    }
}

/// A uniform random choice among the candidates, both entering and leaving.
///
/// Seeded from the operating system's entropy source, unless a fixed seed is supplied for
/// reproducible runs.
pub struct Random {
    rng: StdRng,
}

impl Random {
    /// A rule that makes the same choices on every run with the same seed.
    pub fn with_seed(seed: u64) -> Self {
        Self { rng: StdRng::seed_from_u64(seed), }
    }
}

impl PivotRule for Random {
    fn new() -> Self {
        Self { rng: StdRng::from_entropy(), }
    }

    fn select_pivot<OF: OrderedField>(&mut self, tableau: &Tableau<OF>) -> PivotSelection
    where
        for<'r> &'r OF: OrderedFieldRef<OF>,
    {
        let entering_candidates = entering_candidates(tableau);
        if entering_candidates.is_empty() {
            return PivotSelection::NotFound;
        }
        let entering = entering_candidates[self.rng.gen_range(0..entering_candidates.len())];

        let leaving_candidates = leaving_candidates(tableau, entering);
        if leaving_candidates.is_empty() {
            return PivotSelection::Unbounded;
        }
        let leaving = leaving_candidates[self.rng.gen_range(0..leaving_candidates.len())];

        PivotSelection::Found { leaving, entering, }
    }
}

/// The entering variable with the largest reduced cost; ties go to the smallest index.
pub struct MaxCoef;

impl PivotRule for MaxCoef {
    fn new() -> Self {
        Self
    }

    fn select_pivot<OF: OrderedField>(&mut self, tableau: &Tableau<OF>) -> PivotSelection
    where
        for<'r> &'r OF: OrderedFieldRef<OF>,
    {
        let entering_candidates = entering_candidates(tableau);
        if entering_candidates.is_empty() {
            return PivotSelection::NotFound;
        }

        let mut entering = entering_candidates[0];
        for &candidate in &entering_candidates[1..] {
            if tableau.relative_cost(candidate) > tableau.relative_cost(entering) {
                entering = candidate;
            }
        }

        let leaving_candidates = leaving_candidates(tableau, entering);
        match leaving_candidates.iter().min() {
            Some(&leaving) => PivotSelection::Found { leaving, entering, },
            None => PivotSelection::Unbounded,
        }
    }
}

/// The entering variable whose pivot increases the objective the most.
///
/// The increase of a candidate is its reduced cost times the minimum ratio of its column; ties
/// go to the smallest index. Candidates without a leaving candidate make the problem unbounded.
pub struct MaxIncrease;

impl PivotRule for MaxIncrease {
    fn new() -> Self {
        Self
    }

    fn select_pivot<OF: OrderedField>(&mut self, tableau: &Tableau<OF>) -> PivotSelection
    where
        for<'r> &'r OF: OrderedFieldRef<OF>,
    {
        let entering_candidates = entering_candidates(tableau);
        if entering_candidates.is_empty() {
            return PivotSelection::NotFound;
        }

        let mut best: Option<(OF, usize, usize)> = None;
        for &entering in &entering_candidates {
            let leaving_candidates = leaving_candidates(tableau, entering);
            let leaving = match leaving_candidates.iter().min() {
                Some(&leaving) => leaving,
                None => return PivotSelection::Unbounded,
            };

            let row = tableau.row_of_basis_column(leaving).unwrap();
            let ratio = tableau.rhs_value(row) / tableau.constraint(row, entering);
            let increase = tableau.relative_cost(entering) * ratio;
            match &best {
                Some((best_increase, _, _)) if &increase <= best_increase => {},
                _ => best = Some((increase, leaving, entering)),
            }
        }

        let (_, leaving, entering) = best.unwrap();
        PivotSelection::Found { leaving, entering, }
    }
}

#[cfg(test)]
mod test {
    use num::FromPrimitive;

    use crate::algorithm::two_phase::tableau::Tableau;
    use crate::data::linear_algebra::matrix::RowMajor;
    use crate::data::linear_algebra::vector::Dense;
    use crate::data::linear_program::canonical_form::CanonicalForm;
    use crate::data::number_types::RationalBig;
    use crate::RB;

    use super::*;

    /// max c^T x s.t. x1 + 2 x2 <= 4, 3 x1 + 2 x2 <= 6.
    fn tableau(cost: Vec<RationalBig>) -> Tableau<RationalBig> {
        Tableau::new(CanonicalForm::new(
            Dense::new(cost),
            RowMajor::from_rows(
                vec![
                    vec![RB!(1), RB!(2)],
                    vec![RB!(3), RB!(2)],
                ],
                2,
            ),
            Dense::new(vec![RB!(4), RB!(6)]),
        ))
    }

    /// max x1 + x2 s.t. -x1 + x2 <= 1.
    fn unbounded_tableau() -> Tableau<RationalBig> {
        Tableau::new(CanonicalForm::new(
            Dense::new(vec![RB!(1), RB!(1)]),
            RowMajor::from_rows(vec![vec![RB!(-1), RB!(1)]], 2),
            Dense::new(vec![RB!(1)]),
        ))
    }

    #[test]
    fn test_candidates() {
        let tab = tableau(vec![RB!(1), RB!(1)]);
        assert_eq!(entering_candidates(&tab), vec![0, 1]);
        // The minimum ratio for x1 is 6 / 3 = 2 in the second row.
        assert_eq!(leaving_candidates(&tab, 0), vec![3]);
        assert_eq!(leaving_candidates(&tab, 1), vec![2]);

        let optimal = tableau(vec![RB!(-1), RB!(-1)]);
        assert!(entering_candidates(&optimal).is_empty());

        assert!(leaving_candidates(&unbounded_tableau(), 0).is_empty());
    }

    #[test]
    fn test_bland() {
        let tab = tableau(vec![RB!(1), RB!(1)]);
        assert_eq!(
            Bland::new().select_pivot(&tab),
            PivotSelection::Found { leaving: 3, entering: 0, },
        );

        let optimal = tableau(vec![RB!(-1), RB!(0)]);
        assert_eq!(Bland::new().select_pivot(&optimal), PivotSelection::NotFound);

        assert_eq!(Bland::new().select_pivot(&unbounded_tableau()), PivotSelection::Unbounded);
    }

    #[test]
    fn test_max_coef() {
        let tab = tableau(vec![RB!(1), RB!(2)]);
        assert_eq!(
            MaxCoef::new().select_pivot(&tab),
            PivotSelection::Found { leaving: 2, entering: 1, },
        );

        // A tie in the reduced costs goes to the smallest column index.
        let tied = tableau(vec![RB!(2), RB!(2)]);
        assert_eq!(
            MaxCoef::new().select_pivot(&tied),
            PivotSelection::Found { leaving: 3, entering: 0, },
        );
    }

    #[test]
    fn test_max_increase() {
        // x1 increases the objective by 1 * 6/3 = 2, x2 by 3 * 4/2 = 6.
        let tab = tableau(vec![RB!(1), RB!(3)]);
        assert_eq!(
            MaxIncrease::new().select_pivot(&tab),
            PivotSelection::Found { leaving: 2, entering: 1, },
        );

        // Equal increases of 2 each; the first candidate wins.
        let tied = tableau(vec![RB!(1), RB!(1)]);
        assert_eq!(
            MaxIncrease::new().select_pivot(&tied),
            PivotSelection::Found { leaving: 3, entering: 0, },
        );

        assert_eq!(
            MaxIncrease::new().select_pivot(&unbounded_tableau()),
            PivotSelection::Unbounded,
        );
    }

    #[test]
    fn test_random_is_reproducible_and_valid() {
        let tableau = tableau(vec![RB!(1), RB!(1)]);

        let selection = Random::with_seed(17).select_pivot(&tableau);
        assert_eq!(selection, Random::with_seed(17).select_pivot(&tableau));

        match selection {
            PivotSelection::Found { leaving, entering, } => {
                assert!(entering < 2);
                assert_eq!(leaving, if entering == 0 { 3 } else { 2 });
            },
            _ => panic!("there is a pivot for this tableau"),
        }
    }
}
