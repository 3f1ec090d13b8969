//! Binary operator node.
//!
//! Built in two phases: an [`OperatorBuilder`] holds the arithmetic function,
//! and [`OperatorBuilder::set_parameters`] consumes it to produce a ready
//! [`Operator`]. The builder is not evaluable and a ready operator has no
//! setter, so an operator can neither be evaluated without operands nor
//! have its operands reassigned.

use crate::node::{Evaluate, Node};

/// Binary arithmetic on two evaluated operands.
pub type BinaryFn = fn(f64, f64) -> f64;

/// An operator waiting for its operands.
#[derive(Copy, Clone, Debug)]
pub struct OperatorBuilder {
    op: BinaryFn,
}

impl OperatorBuilder {
    /// Wrap an arithmetic function; operands come later.
    pub const fn new(op: BinaryFn) -> Self {
        OperatorBuilder { op }
    }

    /// Assign both operands and produce the evaluable operator.
    pub fn set_parameters(self, left: impl Into<Node>, right: impl Into<Node>) -> Operator {
        Operator {
            op: self.op,
            left: Box::new(left.into()),
            right: Box::new(right.into()),
        }
    }
}

impl From<BinaryFn> for OperatorBuilder {
    fn from(op: BinaryFn) -> Self {
        OperatorBuilder::new(op)
    }
}

/// A binary operation over two owned operands.
#[derive(Debug)]
pub struct Operator {
    op: BinaryFn,
    pub(crate) left: Box<Node>,
    pub(crate) right: Box<Node>,
}

impl Operator {
    /// The operand evaluated first.
    pub fn left(&self) -> &Node {
        &self.left
    }

    /// The operand evaluated second.
    pub fn right(&self) -> &Node {
        &self.right
    }

    /// Apply the operation to already evaluated operands.
    #[inline]
    pub fn apply(&self, left: f64, right: f64) -> f64 {
        (self.op)(left, right)
    }
}

impl Evaluate for Operator {
    /// Evaluates the left operand, then the right, then combines them.
    #[inline]
    fn evaluate(&self) -> f64 {
        let left = self.left.evaluate();
        let right = self.right.evaluate();
        self.apply(left, right)
    }
}
