//! # Simplex tableau
//!
//! The tableau is the mutable state of the simplex method: the constraint matrix in standard
//! form, the right-hand side, the reduced cost vector and the current basis. It is mutated only
//! through the pivot operation and the transitions into and out of the first phase, so the basis
//! invariants can be checked at every quiescent point.
use std::collections::HashSet;
use std::fmt;
use std::fmt::Display;

use num::{One, Zero};

use crate::data::linear_algebra::{add_row, divide_row, inner_product, negate_row, subtract_multiple_of_row};
use crate::data::linear_algebra::matrix::RowMajor;
use crate::data::linear_algebra::vector::Dense;
use crate::data::linear_program::canonical_form::CanonicalForm;
use crate::data::number_types::{OrderedField, OrderedFieldRef};

/// Holds all information necessary to execute the simplex algorithm.
///
/// The problem is stored in standard form: the constraint matrix got an identity block of slack
/// columns appended and the constraints are equalities. During the first phase the trailing
/// columns are the artificial variables; they are gone again once the second phase starts.
#[derive(Eq, PartialEq, Debug)]
pub struct Tableau<OF> {
    /// Current number of variables, slack and artificial variables included.
    nr_columns: usize,
    /// Number of constraints.
    nr_rows: usize,

    /// Constraint coefficients, `nr_rows` x `nr_columns`.
    constraints: RowMajor<OF>,
    /// Constraint right-hand side.
    rhs: Dense<OF>,
    /// Reduced cost vector, updated by each pivot.
    relative_costs: Dense<OF>,
    /// Current basic solution.
    solution: Dense<OF>,
    /// Negation of the objective value of the current solution.
    negated_objective: OF,

    /// For each row, the column index of the basic variable in that row.
    basis_columns: Vec<usize>,
    /// The cost vector of the problem itself, saved while the first phase overwrites it.
    cost_backup: Option<Dense<OF>>,
}

impl<OF: OrderedField> Tableau<OF>
where
    for<'r> &'r OF: OrderedFieldRef<OF>,
{
    /// Bring a canonical form problem into standard form.
    ///
    /// A slack variable is appended for each constraint; together they form the initial basis,
    /// so the initial solution is the origin of the decision variables.
    pub fn new(canonical: CanonicalForm<OF>) -> Self {
        let nr_original = canonical.nr_variables();
        let nr_rows = canonical.nr_constraints();
        let nr_columns = nr_original + nr_rows;
        let (cost, constraints, rhs) = canonical.into_parts();

        let mut relative_costs = cost;
        relative_costs.extend_with_values(vec![OF::zero(); nr_rows]);

        let mut constraints = constraints;
        constraints.extend_columns(nr_rows);
        for row in 0..nr_rows {
            constraints[(row, nr_original + row)] = OF::one();
        }

        let mut solution = Dense::constant(OF::zero(), nr_columns);
        for row in 0..nr_rows {
            solution[nr_original + row] = rhs[row].clone();
        }

        Self {
            nr_columns,
            nr_rows,
            constraints,
            rhs,
            relative_costs,
            solution,
            negated_objective: OF::zero(),
            basis_columns: (nr_original..nr_columns).collect(),
            cost_backup: None,
        }
    }

    /// Number of variables, including slack and artificial variables.
    pub fn nr_columns(&self) -> usize {
        self.nr_columns
    }

    /// Number of constraints.
    pub fn nr_rows(&self) -> usize {
        self.nr_rows
    }

    /// A coefficient of the constraint matrix in its current form.
    pub fn constraint(&self, row: usize, column: usize) -> &OF {
        &self.constraints[(row, column)]
    }

    /// A value of the constraint right-hand side in its current form.
    pub fn rhs_value(&self, row: usize) -> &OF {
        &self.rhs[row]
    }

    /// The reduced cost of a column.
    pub fn relative_cost(&self, column: usize) -> &OF {
        &self.relative_costs[column]
    }

    /// The column index of the variable that is basic in a row.
    pub fn basis_column(&self, row: usize) -> usize {
        debug_assert!(row < self.nr_rows);

        self.basis_columns[row]
    }

    /// The row in which a column is basic, if it is.
    pub fn row_of_basis_column(&self, column: usize) -> Option<usize> {
        self.basis_columns.iter().position(|&basic| basic == column)
    }

    /// The current basic solution.
    pub fn current_solution(&self) -> &Dense<OF> {
        &self.solution
    }

    /// The objective value of the current solution.
    pub fn objective_function_value(&self) -> OF {
        -&self.negated_objective
    }

    /// Whether the current solution is feasible: `x >= 0` and `Ax = b`.
    ///
    /// Decides whether a first phase is needed before any pivoting starts.
    pub fn is_feasible(&self) -> bool {
        let zero = OF::zero();
        if self.solution.iter_values().any(|value| value < &zero) {
            return false;
        }

        (0..self.nr_rows).all(|row| {
            inner_product(self.constraints.row(row), self.solution.as_slice()) == self.rhs[row]
        })
    }

    /// Bring `entering` into the basis in the row where `leaving` is basic.
    ///
    /// One Gauss-Jordan step: the pivot row is normalized, the entering column is eliminated
    /// from every other row and from the cost vector, and the solution is recomputed.
    pub fn pivot(&mut self, leaving: usize, entering: usize) {
        debug_assert!(entering < self.nr_columns);
        debug_assert!(!self.basis_columns.contains(&entering));

        let leaving_row = self.row_of_basis_column(leaving)
            .expect("the leaving variable is not in the basis");
        self.basis_columns[leaving_row] = entering;

        let pivot_element = self.constraints[(leaving_row, entering)].clone();
        assert!(!pivot_element.is_zero(), "pivot on a zero coefficient");
        divide_row(self.constraints.row_mut(leaving_row), &pivot_element);
        self.rhs[leaving_row] /= &pivot_element;

        for row in 0..self.nr_rows {
            if row == leaving_row || self.constraints[(row, entering)].is_zero() {
                continue;
            }

            let factor = self.constraints[(row, entering)].clone();
            let (target, source) = self.constraints.target_and_source_row(row, leaving_row);
            subtract_multiple_of_row(target, &factor, source);
            let correction = &factor * &self.rhs[leaving_row];
            self.rhs[row] -= correction;
        }

        let cost = self.relative_costs[entering].clone();
        self.negated_objective -= &cost * &self.rhs[leaving_row];
        subtract_multiple_of_row(
            self.relative_costs.as_mut_slice(),
            &cost,
            self.constraints.row(leaving_row),
        );

        self.recompute_solution();
    }

    /// Enter the first phase.
    ///
    /// An artificial variable is appended for each constraint and made basic, after rows with a
    /// negative right-hand side are negated so the artificial basis is feasible. The cost vector
    /// is replaced by the sum of the constraint rows: that is the first phase objective, already
    /// expressed in nonbasic form because the artificial columns of that sum are zero.
    pub fn add_artificial_variables(&mut self) {
        debug_assert!(self.cost_backup.is_none());

        self.cost_backup = Some(self.relative_costs.clone());
        let nr_artificial = self.nr_rows;

        for row in 0..self.nr_rows {
            if self.rhs[row] < OF::zero() {
                negate_row(self.constraints.row_mut(row));
                self.rhs[row] = -&self.rhs[row];
            }
        }

        self.constraints.extend_columns(nr_artificial);
        let mut phase_one_costs = Dense::constant(OF::zero(), self.nr_columns + nr_artificial);
        for row in 0..self.nr_rows {
            add_row(phase_one_costs.as_mut_slice(), self.constraints.row(row));
        }
        self.relative_costs = phase_one_costs;

        for row in 0..self.nr_rows {
            self.constraints[(row, self.nr_columns + row)] = OF::one();
            self.basis_columns[row] = self.nr_columns + row;
        }

        self.solution.extend_with_values(vec![OF::zero(); nr_artificial]);
        self.nr_columns += nr_artificial;
        self.recompute_solution();
        self.negated_objective = self.rhs.iter_values().cloned().sum();
    }

    /// Leave the first phase, dropping the artificial variables again.
    ///
    /// Returns `false` if the first phase objective is nonzero: some artificial variable could
    /// not be driven to zero, so the problem is infeasible. Otherwise artificial variables that
    /// linger in the basis at value zero are pivoted out where possible; a row that offers no
    /// pivot is a redundant constraint and is removed. The original cost vector is restored and
    /// reduced against the final first phase basis.
    pub fn remove_artificial_variables(&mut self) -> bool {
        debug_assert!(self.cost_backup.is_some());

        if !self.negated_objective.is_zero() {
            return false;
        }

        let nr_artificial = self.nr_rows;
        let nr_non_artificial = self.nr_columns - nr_artificial;

        for row in 0..self.nr_rows {
            if self.basis_columns[row] >= nr_non_artificial {
                let pivotable = (0..nr_non_artificial)
                    .find(|&column| !self.constraints[(row, column)].is_zero());
                if let Some(entering) = pivotable {
                    let leaving = self.basis_columns[row];
                    self.pivot(leaving, entering);
                }
            }
        }

        let redundant = (0..self.nr_rows)
            .filter(|&row| self.basis_columns[row] >= nr_non_artificial)
            .collect::<Vec<_>>();
        for &row in redundant.iter().rev() {
            debug_assert!(self.rhs[row].is_zero());

            self.constraints.remove_row(row);
            self.rhs.remove(row);
            self.basis_columns.remove(row);
            self.nr_rows -= 1;
        }

        self.nr_columns = nr_non_artificial;
        self.constraints.truncate_columns(nr_non_artificial);
        self.solution.truncate(nr_non_artificial);
        self.relative_costs = self.cost_backup.take()
            .expect("the first phase was never entered");

        for row in 0..self.nr_rows {
            let cost = self.relative_costs[self.basis_columns[row]].clone();
            self.negated_objective -= &cost * &self.rhs[row];
            subtract_multiple_of_row(
                self.relative_costs.as_mut_slice(),
                &cost,
                self.constraints.row(row),
            );
        }

        self.recompute_solution();
        true
    }

    /// The canonical statement of the problem, for display to the user.
    pub fn statement(&self) -> Statement<OF> {
        Statement(self)
    }

    /// Zero the solution, then set the value of every basic variable.
    fn recompute_solution(&mut self) {
        self.solution.set_to_zero();
        for row in 0..self.nr_rows {
            self.solution[self.basis_columns[row]] = self.rhs[row].clone();
        }
    }
}

/// Check all basis invariants that should hold between pivots.
///
/// For debug assertions and tests only; this is quadratic in the problem size.
pub fn is_in_basic_feasible_solution_state<OF: OrderedField>(tableau: &Tableau<OF>) -> bool
where
    for<'r> &'r OF: OrderedFieldRef<OF>,
{
    let zero = OF::zero();
    let one = OF::one();

    let mut seen = HashSet::new();
    for row in 0..tableau.nr_rows {
        let basic = tableau.basis_columns[row];
        if basic >= tableau.nr_columns || !seen.insert(basic) {
            return false;
        }
    }

    for row in 0..tableau.nr_rows {
        let basic = tableau.basis_columns[row];
        for other_row in 0..tableau.nr_rows {
            let expected = if other_row == row { &one } else { &zero };
            if &tableau.constraints[(other_row, basic)] != expected {
                return false;
            }
        }

        if !tableau.relative_costs[basic].is_zero()
            || tableau.rhs[row] < zero
            || tableau.solution[basic] != tableau.rhs[row]
        {
            return false;
        }
    }

    (0..tableau.nr_columns)
        .filter(|column| !seen.contains(column))
        .all(|column| tableau.solution[column].is_zero())
}

/// The problem statement the way the user posed it, with slack variables made explicit.
pub struct Statement<'a, OF>(&'a Tableau<OF>);

impl<OF: OrderedField> Display for Statement<'_, OF>
where
    for<'r> &'r OF: OrderedFieldRef<OF>,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Maximize")?;
        write_linear_combination(f, self.0.relative_costs.as_slice())?;
        writeln!(f)?;

        writeln!(f, "Subject to")?;
        for row in 0..self.0.nr_rows {
            write_linear_combination(f, self.0.constraints.row(row))?;
            writeln!(f, "<= {}", self.0.rhs[row])?;
        }

        for column in 0..self.0.nr_columns {
            if column > 0 {
                write!(f, ", ")?;
            }
            write!(f, "x{}", column + 1)?;
        }
        writeln!(f, " are non-negative")
    }
}

/// Write the nonzero terms of a linear combination, numbering the variables from one.
fn write_linear_combination<OF: OrderedField>(
    f: &mut fmt::Formatter,
    coefficients: &[OF],
) -> fmt::Result {
    let zero = OF::zero();
    for (column, coefficient) in coefficients.iter().enumerate() {
        if coefficient.is_zero() {
            continue;
        }
        if column > 0 && coefficient > &zero {
            write!(f, "+")?;
        }
        write!(f, "{}x{} ", coefficient, column + 1)?;
    }

    Ok(())
}

impl<OF: OrderedField> Display for Tableau<OF>
where
    for<'r> &'r OF: OrderedFieldRef<OF>,
{
    /// All rows of the tableau with aligned columns: the cost row and objective first, then each
    /// constraint row and its right-hand side.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut rows = Vec::with_capacity(1 + self.nr_rows);
        let mut cost_row = self.relative_costs.iter_values()
            .map(ToString::to_string)
            .collect::<Vec<_>>();
        cost_row.push(self.negated_objective.to_string());
        rows.push(cost_row);
        for row in 0..self.nr_rows {
            let mut values = self.constraints.row(row).iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>();
            values.push(self.rhs[row].to_string());
            rows.push(values);
        }

        let widths = (0..=self.nr_columns)
            .map(|column| 1 + rows.iter().map(|row| row[column].len()).max().unwrap())
            .collect::<Vec<_>>();

        for (index, row) in rows.iter().enumerate() {
            for column in 0..self.nr_columns {
                write!(f, "{:>width$} ", row[column], width = widths[column])?;
            }
            writeln!(f, "|{:>width$}", row[self.nr_columns], width = widths[self.nr_columns])?;

            if index == 0 {
                let total = widths.iter().sum::<usize>() + self.nr_columns + 1;
                writeln!(f, "{}", "-".repeat(total))?;
            }
        }

        Ok(())
    }
}
