//! # Error reporting for reading of linear program files
//!
//! A collection of types describing any problems encountered during reading and parsing.
use std::error::Error;
use std::fmt;
use std::fmt::Display;
use std::io;

/// An `Import` error is created when an error was encountered during IO or parsing.
///
/// It is the highest error in the io error hierarchy.
#[derive(Debug)]
pub enum Import {
    /// The file to read isn't found, or the reading of the file couldn't start or was
    /// interrupted.
    IO(io::Error),
    /// Contents of the file could not be parsed into a linear program.
    Parse(Parse),
}

impl Display for Import {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Import::IO(error) => error.fmt(f),
            Import::Parse(error) => error.fmt(f),
        }
    }
}

impl Error for Import {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Import::IO(error) => Some(error),
            Import::Parse(error) => Some(error),
        }
    }
}

/// A `Parse` error represents all errors encountered during parsing.
#[derive(Debug, Eq, PartialEq)]
pub struct Parse {
    description: String,
}

impl Parse {
    /// Create a new `Parse` error with only a description.
    pub fn new(description: impl Into<String>) -> Self {
        Self { description: description.into(), }
    }

    /// Wrap an error from outside this module, keeping its message.
    pub fn wrap_other(error: impl Display, description: impl Into<String>) -> Self {
        Self { description: format!("{}: {}", description.into(), error), }
    }
}

impl Display for Parse {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "ParseError: {}", self.description)
    }
}

impl Error for Parse {
}

/// Shorthand for results of fallible parsing steps.
pub type ParseResult<T> = Result<T, Parse>;
