//! Error types

use std::fmt;

/// Errors that originate when constructing the shaping tables from external
/// data. The shaping pass itself does not fail.
#[derive(Clone, Eq, PartialEq, Debug)]
pub enum ParseError {
    BadValue,
    MissingValue,
}

impl From<std::num::ParseIntError> for ParseError {
    fn from(_error: std::num::ParseIntError) -> Self {
        ParseError::BadValue
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::BadValue => write!(f, "invalid value"),
            ParseError::MissingValue => write!(f, "an expected data value was missing"),
        }
    }
}

impl std::error::Error for ParseError {}
