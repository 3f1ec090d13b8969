//! Unary negation node.

use crate::node::{Evaluate, Node};

/// Flips the sign of its single child.
#[derive(Debug)]
pub struct Negation {
    pub(crate) operand: Box<Node>,
}

impl Negation {
    /// Negate `operand`, taking ownership of it.
    pub fn new(operand: impl Into<Node>) -> Self {
        Negation {
            operand: Box::new(operand.into()),
        }
    }

    /// The negated child.
    pub fn operand(&self) -> &Node {
        &self.operand
    }
}

impl Evaluate for Negation {
    #[inline]
    fn evaluate(&self) -> f64 {
        -self.operand.evaluate()
    }
}

#[cfg(test)]
mod tests;
