//! Standard binary operators.
//!
//! Provides the arithmetic, comparison, and logical operations a parser
//! typically maps infix symbols onto. Every operation works on `f64` and
//! returns `f64`: comparisons and logical operators yield `1.0` for true and
//! `0.0` for false, and read their operands with [`truthy`].

use crate::operator::{BinaryFn, OperatorBuilder};

/// Boolean reading of a number: exactly zero (either sign) is false,
/// anything else, NaN included, is true.
#[inline]
pub fn truthy(value: f64) -> bool {
    value != 0.0
}

#[inline]
fn from_bool(value: bool) -> f64 {
    if value {
        1.0
    } else {
        0.0
    }
}

/// Standard binary operators.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    /// Remainder with the sign of the dividend (`%` on `f64`).
    Rem,
    Pow,
    Lt,
    Le,
    Gt,
    Ge,
    Eq,
    NotEq,
    And,
    Or,
}

impl BinaryOp {
    pub const ALL: [BinaryOp; 14] = [
        BinaryOp::Add,
        BinaryOp::Sub,
        BinaryOp::Mul,
        BinaryOp::Div,
        BinaryOp::Rem,
        BinaryOp::Pow,
        BinaryOp::Lt,
        BinaryOp::Le,
        BinaryOp::Gt,
        BinaryOp::Ge,
        BinaryOp::Eq,
        BinaryOp::NotEq,
        BinaryOp::And,
        BinaryOp::Or,
    ];

    /// The function an [`Operator`](crate::Operator) applies for this op.
    #[allow(clippy::float_cmp, reason = "Eq and NotEq are exact comparisons")]
    pub fn function(self) -> BinaryFn {
        match self {
            BinaryOp::Add => |a, b| a + b,
            BinaryOp::Sub => |a, b| a - b,
            BinaryOp::Mul => |a, b| a * b,
            BinaryOp::Div => |a, b| a / b,
            BinaryOp::Rem => |a, b| a % b,
            BinaryOp::Pow => f64::powf,
            BinaryOp::Lt => |a, b| from_bool(a < b),
            BinaryOp::Le => |a, b| from_bool(a <= b),
            BinaryOp::Gt => |a, b| from_bool(a > b),
            BinaryOp::Ge => |a, b| from_bool(a >= b),
            BinaryOp::Eq => |a, b| from_bool(a == b),
            BinaryOp::NotEq => |a, b| from_bool(a != b),
            BinaryOp::And => |a, b| from_bool(truthy(a) && truthy(b)),
            BinaryOp::Or => |a, b| from_bool(truthy(a) || truthy(b)),
        }
    }

    /// Source spelling, e.g. `"<="`.
    pub fn symbol(self) -> &'static str {
        match self {
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
            BinaryOp::Rem => "%",
            BinaryOp::Pow => "^",
            BinaryOp::Lt => "<",
            BinaryOp::Le => "<=",
            BinaryOp::Gt => ">",
            BinaryOp::Ge => ">=",
            BinaryOp::Eq => "==",
            BinaryOp::NotEq => "!=",
            BinaryOp::And => "&&",
            BinaryOp::Or => "||",
        }
    }

    /// Inverse of [`symbol`](Self::symbol).
    pub fn from_symbol(symbol: &str) -> Option<BinaryOp> {
        BinaryOp::ALL.into_iter().find(|op| op.symbol() == symbol)
    }

    /// An operator builder applying this op.
    #[inline]
    pub fn builder(self) -> OperatorBuilder {
        OperatorBuilder::new(self.function())
    }
}

impl std::fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}
