//! The evaluation capability and the closed node type.
//!
//! Each node kind implements [`Evaluate`] on its own, and [`Node`] ties them
//! together as a sum type so a tree can be stored and walked without trait
//! objects. Dispatch is an exhaustive `match`; adding a node kind is a
//! compile error until every walker handles it.

use std::mem;

use crate::eval_strategy::EvalStrategy;
use crate::function::Function;
use crate::negation::Negation;
use crate::number::Number;
use crate::operator::Operator;
use crate::stack::ensure_sufficient_stack;
use crate::variable::Variable;

/// Anything that produces a number.
///
/// Evaluation has no side effects on the tree and cannot fail: every
/// contract check happens while the tree is assembled.
pub trait Evaluate {
    fn evaluate(&self) -> f64;
}

/// An expression tree node.
///
/// Each child is owned by exactly one parent. Dropping a node tears its
/// subtree down iteratively, so arbitrarily deep trees are safe to drop.
#[derive(Debug)]
pub enum Node {
    /// Numeric constant.
    Number(Number),
    /// Reference to an externally settable slot.
    Variable(Variable),
    /// Unary minus over one child.
    Negation(Negation),
    /// Binary arithmetic over two children.
    Operator(Operator),
    /// Named function of arity 1, 2, or 3. Boxed to keep `Node` small.
    Function(Box<Function>),
}

impl Node {
    /// Evaluate using the given strategy.
    pub fn evaluate_with(&self, strategy: EvalStrategy) -> f64 {
        match strategy {
            EvalStrategy::Recursive => self.evaluate(),
            EvalStrategy::Worklist => self.evaluate_iterative(),
        }
    }

    /// Numbers and variables; everything else has children.
    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Number(_) | Node::Variable(_))
    }

    /// Number of nodes in this subtree, including `self`.
    pub fn node_count(&self) -> usize {
        let mut count = 0;
        self.walk(|_, _| count += 1);
        count
    }

    /// Longest root-to-leaf path, counted in nodes. A leaf has depth 1.
    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        self.walk(|_, depth| deepest = deepest.max(depth));
        deepest
    }

    /// Visit every node with its 1-based depth, parents before children.
    fn walk(&self, mut visit: impl FnMut(&Node, usize)) {
        let mut pending = vec![(self, 1)];
        while let Some((node, depth)) = pending.pop() {
            visit(node, depth);
            match node {
                Node::Number(_) | Node::Variable(_) => {}
                Node::Negation(neg) => pending.push((neg.operand(), depth + 1)),
                Node::Operator(op) => {
                    pending.push((op.right(), depth + 1));
                    pending.push((op.left(), depth + 1));
                }
                Node::Function(func) => {
                    pending.extend(func.arguments().iter().rev().map(|arg| (arg, depth + 1)));
                }
            }
        }
    }

    /// Move this node's children into `out`, leaving leaves in their place.
    fn detach_children(&mut self, out: &mut Vec<Node>) {
        match self {
            Node::Number(_) | Node::Variable(_) => {}
            Node::Negation(neg) => out.push(mem::replace(&mut *neg.operand, Node::hollow())),
            Node::Operator(op) => {
                out.push(mem::replace(&mut *op.left, Node::hollow()));
                out.push(mem::replace(&mut *op.right, Node::hollow()));
            }
            Node::Function(func) => {
                out.extend(func.arguments_mut().iter_mut().map(|arg| mem::replace(arg, Node::hollow())));
            }
        }
    }

    /// Placeholder left behind by `detach_children`.
    #[inline]
    fn hollow() -> Node {
        Node::Number(Number::new(0.0))
    }
}

impl Evaluate for Node {
    fn evaluate(&self) -> f64 {
        ensure_sufficient_stack(|| match self {
            Node::Number(n) => n.evaluate(),
            Node::Variable(v) => v.evaluate(),
            Node::Negation(neg) => neg.evaluate(),
            Node::Operator(op) => op.evaluate(),
            Node::Function(func) => func.evaluate(),
        })
    }
}

impl Drop for Node {
    fn drop(&mut self) {
        if self.is_leaf() {
            return;
        }
        let mut detached = Vec::new();
        self.detach_children(&mut detached);
        while let Some(mut node) = detached.pop() {
            node.detach_children(&mut detached);
        }
    }
}

impl From<Number> for Node {
    fn from(n: Number) -> Self {
        Node::Number(n)
    }
}

impl From<f64> for Node {
    fn from(value: f64) -> Self {
        Node::Number(Number::new(value))
    }
}

impl From<Variable> for Node {
    fn from(v: Variable) -> Self {
        Node::Variable(v)
    }
}

impl From<Negation> for Node {
    fn from(neg: Negation) -> Self {
        Node::Negation(neg)
    }
}

impl From<Operator> for Node {
    fn from(op: Operator) -> Self {
        Node::Operator(op)
    }
}

impl From<Function> for Node {
    fn from(func: Function) -> Self {
        Node::Function(Box::new(func))
    }
}
