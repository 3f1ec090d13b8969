//! Iterative evaluation with explicit stacks.
//!
//! The recursive evaluator needs one native frame per nesting level. This
//! walker keeps pending work in a heap-allocated task stack and results in a
//! value stack instead, so depth is limited only by memory.
//!
//! Children are scheduled in reverse so they are visited left to right,
//! matching the recursive evaluator's order exactly.
//!
//! Every combining task is pushed beneath the visits of its operands, so by
//! the time it runs exactly its operand count sits on top of the value
//! stack. The value stack never runs short for any tree.

use crate::function::Function;
use crate::node::{Evaluate, Node};
use crate::operator::Operator;

enum Task<'a> {
    /// Schedule a node (leaves evaluate immediately).
    Visit(&'a Node),
    /// Negate the top value.
    Negate,
    /// Combine the top two values.
    Combine(&'a Operator),
    /// Call a function on the top `arity` values.
    Call(&'a Function),
}

impl Node {
    /// Evaluate without native recursion.
    pub fn evaluate_iterative(&self) -> f64 {
        let mut tasks = vec![Task::Visit(self)];
        let mut values: Vec<f64> = Vec::new();
        let mut peak_tasks = 0;
        let mut peak_values = 0;

        while let Some(task) = tasks.pop() {
            match task {
                Task::Visit(node) => schedule(node, &mut tasks, &mut values),
                Task::Negate => {
                    let [operand] = pop_values(&mut values);
                    values.push(-operand);
                }
                Task::Combine(op) => {
                    let [left, right] = pop_values(&mut values);
                    values.push(op.apply(left, right));
                }
                Task::Call(func) => {
                    let result = func.apply_from_stack(&mut values);
                    values.push(result);
                }
            }
            peak_tasks = peak_tasks.max(tasks.len());
            peak_values = peak_values.max(values.len());
        }

        tracing::trace!(peak_tasks, peak_values, "worklist evaluation complete");
        let [result] = pop_values(&mut values);
        result
    }
}

/// Pop the top `N` values, preserving their order.
///
/// Panics if fewer than `N` values are stacked, which the task ordering
/// rules out.
pub(crate) fn pop_values<const N: usize>(values: &mut Vec<f64>) -> [f64; N] {
    assert!(
        values.len() >= N,
        "value stack holds {} values, task needs {N}",
        values.len()
    );
    let start = values.len() - N;
    let mut out = [0.0; N];
    out.copy_from_slice(&values[start..]);
    values.truncate(start);
    out
}

fn schedule<'a>(node: &'a Node, tasks: &mut Vec<Task<'a>>, values: &mut Vec<f64>) {
    match node {
        Node::Number(n) => values.push(n.evaluate()),
        Node::Variable(v) => values.push(v.evaluate()),
        Node::Negation(neg) => {
            tasks.push(Task::Negate);
            tasks.push(Task::Visit(neg.operand()));
        }
        Node::Operator(op) => {
            tasks.push(Task::Combine(op));
            tasks.push(Task::Visit(op.right()));
            tasks.push(Task::Visit(op.left()));
        }
        Node::Function(func) => {
            tasks.push(Task::Call(func));
            tasks.extend(func.arguments().iter().rev().map(Task::Visit));
        }
    }
}

#[cfg(test)]
mod tests;
