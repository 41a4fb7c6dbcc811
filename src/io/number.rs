//! # Number parsing
//!
//! Reading exact rational numbers from strings. Decimal notation is turned into a fraction over
//! a power of ten, so nothing is rounded.
use std::str::FromStr;

use num::{BigInt, Zero};

use crate::data::number_types::RationalBig;
use crate::io::error::{Parse as ParseError, ParseResult};

/// Parsing a number read from a problem file.
pub trait Parse: Sized {
    /// Read a value from its text representation: an integer, a `p/q` fraction or a decimal
    /// (`abc.xyz`) number.
    ///
    /// # Errors
    ///
    /// When the number could not be parsed, or when it has a zero denominator.
    fn parse(text: &str) -> ParseResult<Self>;
}

impl Parse for RationalBig {
    fn parse(text: &str) -> ParseResult<Self> {
        match text.find('/') {
            Some(index) => {
                let numerator = parse_integer(&text[..index])?;
                let denominator = parse_integer(&text[(index + 1)..])?;
                if denominator.is_zero() {
                    return Err(ParseError::new(format!("zero denominator in \"{}\"", text)));
                }

                Ok(Self::new(numerator, denominator))
            },
            None => match text.find('.') {
                Some(_) => parse_decimal(text),
                None => parse_integer(text).map(Self::from),
            },
        }
    }
}

fn parse_integer(text: &str) -> ParseResult<BigInt> {
    BigInt::from_str(text).map_err(|error| ParseError::wrap_other(
        error,
        format!("failed to parse \"{}\" as an integer", text),
    ))
}

fn parse_decimal(text: &str) -> ParseResult<RationalBig> {
    let (negative, unsigned) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text),
    };

    let malformed = || ParseError::new(format!("failed to parse \"{}\" as a decimal", text));
    let index = match unsigned.find('.') {
        Some(index) => index,
        None => return Err(malformed()),
    };
    let whole = &unsigned[..index];
    let fraction = &unsigned[(index + 1)..];
    let all_digits = |part: &str| part.chars().all(|character| character.is_ascii_digit());
    if (whole.is_empty() && fraction.is_empty()) || !all_digits(whole) || !all_digits(fraction) {
        return Err(malformed());
    }

    let numerator = parse_integer(&format!("0{}{}", whole, fraction))?;
    let denominator = num::pow(BigInt::from(10), fraction.len());
    let value = RationalBig::new(numerator, denominator);

    Ok(if negative { -value } else { value })
}
