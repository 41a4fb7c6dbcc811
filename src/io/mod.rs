//! # Reading of linear programs
//!
//! A problem file is a whitespace separated list of tokens:
//!
//! ```text
//! n m
//! c_1 ... c_n
//! b_1 ... b_m
//! A_11 ... A_1n
//! ...
//! A_m1 ... A_mn
//! ```
//!
//! with `n` the number of decision variables and `m` the number of constraints. Each numeric
//! token is an exact rational: an integer, a `p/q` fraction or a decimal number.
use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::str::SplitWhitespace;

use crate::data::linear_algebra::matrix::RowMajor;
use crate::data::linear_algebra::vector::Dense;
use crate::data::linear_program::canonical_form::CanonicalForm;
use crate::data::number_types::Field;
use crate::io::error::{Import, Parse as ParseError, ParseResult};
use crate::io::number::Parse;

pub mod error;
pub mod number;

/// Import a problem from a file.
///
/// # Errors
///
/// When the file cannot be found or read, or when its contents do not describe a linear program,
/// an error type is returned.
pub fn import<OF: Field + Parse>(file_path: &Path) -> Result<CanonicalForm<OF>, Import> {
    let mut program = String::new();
    File::open(file_path)
        .map_err(Import::IO)?
        .read_to_string(&mut program)
        .map_err(Import::IO)?;

    parse(&program).map_err(Import::Parse)
}

/// Parse a problem description into a canonical form linear program.
///
/// Tokens beyond the last matrix coefficient are ignored.
pub fn parse<OF: Field + Parse>(program: &str) -> ParseResult<CanonicalForm<OF>> {
    let mut tokens = program.split_whitespace();

    let nr_variables = parse_count(tokens.next(), "the number of variables")?;
    let nr_constraints = parse_count(tokens.next(), "the number of constraints")?;
    if nr_variables == 0 || nr_constraints == 0 {
        return Err(ParseError::new(
            "a problem needs at least one variable and one constraint",
        ));
    }

    let cost = Dense::new(parse_values(&mut tokens, nr_variables, "the cost vector")?);
    let rhs = Dense::new(parse_values(&mut tokens, nr_constraints, "the right-hand side")?);
    let rows = (0..nr_constraints)
        .map(|_| parse_values(&mut tokens, nr_variables, "a constraint row"))
        .collect::<ParseResult<Vec<_>>>()?;

    Ok(CanonicalForm::new(cost, RowMajor::from_rows(rows, nr_variables), rhs))
}

fn parse_count(token: Option<&str>, description: &str) -> ParseResult<usize> {
    match token {
        Some(text) => text.parse().map_err(|error| ParseError::wrap_other(
            error,
            format!("failed to parse {} \"{}\"", description, text),
        )),
        None => Err(ParseError::new(format!("missing {}", description))),
    }
}

fn parse_values<OF: Parse>(
    tokens: &mut SplitWhitespace,
    count: usize,
    description: &str,
) -> ParseResult<Vec<OF>> {
    (0..count)
        .map(|_| match tokens.next() {
            Some(token) => OF::parse(token),
            None => Err(ParseError::new(format!("ran out of input reading {}", description))),
        })
        .collect()
}

#[cfg(test)]
mod test {
    use num::FromPrimitive;

    use crate::data::linear_algebra::matrix::RowMajor;
    use crate::data::linear_algebra::vector::Dense;
    use crate::data::linear_program::canonical_form::CanonicalForm;
    use crate::data::number_types::RationalBig;
    use crate::RB;

    use super::parse;

    #[test]
    fn test_parse() {
        let program = "2 2
            1 1
            4 6
            1 2
            3 2";
        let expected = CanonicalForm::new(
            Dense::new(vec![RB!(1), RB!(1)]),
            RowMajor::from_rows(
                vec![
                    vec![RB!(1), RB!(2)],
                    vec![RB!(3), RB!(2)],
                ],
                2,
            ),
            Dense::new(vec![RB!(4), RB!(6)]),
        );
        assert_eq!(parse::<RationalBig>(program), Ok(expected));
    }

    #[test]
    fn test_parse_mixed_number_notations() {
        let program = "1 1\n1/3\n0.5\n-2";
        let expected = CanonicalForm::new(
            Dense::new(vec![RB!(1, 3)]),
            RowMajor::from_rows(vec![vec![RB!(-2)]], 1),
            Dense::new(vec![RB!(1, 2)]),
        );
        assert_eq!(parse::<RationalBig>(program), Ok(expected));
    }

    #[test]
    fn test_parse_rejects_empty_problems() {
        assert!(parse::<RationalBig>("0 2").is_err());
        assert!(parse::<RationalBig>("2 0").is_err());
        assert!(parse::<RationalBig>("").is_err());
    }

    #[test]
    fn test_parse_rejects_malformed_input() {
        // A token that is not a number where the matrix should be.
        assert!(parse::<RationalBig>("1 1\n1\n1\nx").is_err());
        // Not enough tokens for the matrix.
        assert!(parse::<RationalBig>("2 1\n1 1\n1\n1").is_err());
    }
}
