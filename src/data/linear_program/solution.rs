//! # Representation of optimal solutions
//!
//! Once a linear program is fully solved, a solution is derived from the final tableau. It lists
//! a value for every variable of the standard form, slack variables included, so the user can
//! read off the slack of every constraint as well.
use std::fmt;
use std::fmt::Display;

use itertools::Itertools;

/// An optimal vertex together with the objective value attained there.
#[derive(Eq, PartialEq, Debug, Clone)]
pub struct Solution<OF> {
    /// Value of the objective function for this solution.
    objective_value: OF,
    /// One value per variable of the standard form, in variable order.
    variable_values: Vec<OF>,
}

impl<OF> Solution<OF> {
    /// Create a new `Solution` instance.
    pub fn new(objective_value: OF, variable_values: Vec<OF>) -> Self {
        Self { objective_value, variable_values, }
    }

    /// The objective value at this vertex.
    pub fn objective_value(&self) -> &OF {
        &self.objective_value
    }

    /// The value of a variable, 0-based.
    pub fn value(&self, variable: usize) -> &OF {
        &self.variable_values[variable]
    }
}

impl<OF: Display> Display for Solution<OF> {
    /// Variable assignments separated by commas, numbered from one as in all output for the user.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}",
            self.variable_values.iter()
                .enumerate()
                .map(|(j, value)| format!("x{} = {}", j + 1, value))
                .join(", "),
        )
    }
}

#[cfg(test)]
mod test {
    use num::FromPrimitive;

    use crate::data::number_types::RationalBig;
    use crate::RB;

    use super::Solution;

    #[test]
    fn test_display() {
        let solution = Solution::new(RB!(5, 2), vec![RB!(1), RB!(3, 2), RB!(0)]);
        assert_eq!(solution.to_string(), "x1 = 1, x2 = 3/2, x3 = 0");
        assert_eq!(solution.objective_value(), &RB!(5, 2));
    }
}
