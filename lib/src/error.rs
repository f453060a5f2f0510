//! All kinds of errors in this crate.

use ca_rules::ParseRuleError;
use displaydoc::Display;
use std::convert::Infallible;
use thiserror::Error;

/// All kinds of errors in this crate.
#[derive(Clone, Debug, PartialEq, Display, Error)]
pub enum Error {
    /// Invalid cell state: {0:?}.
    InvalidCellState(String),
    /// Invalid rule: {0:?}.
    ParseRuleError(#[from] ParseRuleError),
    /// Width / height should be positive.
    NonPositiveError,
    /// The world is too large: {0}x{1}.
    SizeError(usize, usize),
    /// Density should be between 0 and 1, got {0}.
    DensityError(f64),
}

/// Converting a [`State`](crate::State) into itself never fails.
impl From<Infallible> for Error {
    fn from(e: Infallible) -> Self {
        match e {}
    }
}
