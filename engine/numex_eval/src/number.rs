//! Numeric literal leaf.

use std::str::FromStr;

use crate::errors::{parse_error, NodeError, NodeResult};
use crate::node::Evaluate;

/// An immutable numeric constant.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Number(f64);

impl Number {
    /// A constant holding `value` exactly.
    #[inline]
    pub const fn new(value: f64) -> Self {
        Number(value)
    }

    /// Parse a numeric literal.
    ///
    /// Surrounding whitespace is ignored. Accepts everything `f64`'s
    /// `FromStr` accepts, including exponents (`1e-3`), `inf` and `NaN`.
    pub fn parse(text: &str) -> NodeResult<Self> {
        match text.trim().parse::<f64>() {
            Ok(value) => Ok(Number(value)),
            Err(source) => {
                tracing::debug!(literal = text, "rejected numeric literal");
                Err(parse_error(text, source))
            }
        }
    }

    /// The stored constant.
    #[inline]
    pub const fn value(self) -> f64 {
        self.0
    }
}

impl FromStr for Number {
    type Err = NodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Number::parse(s)
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Number(value)
    }
}

impl Evaluate for Number {
    #[inline]
    fn evaluate(&self) -> f64 {
        self.0
    }
}
