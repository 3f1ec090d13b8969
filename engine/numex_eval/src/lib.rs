//! Numex Eval - expression tree representation and evaluator.
//!
//! An expression is a tree of nodes, each of which evaluates to a single
//! `f64`. The tree is assembled bottom-up by a parser (not part of this
//! crate) and evaluated any number of times. Variables are handles whose
//! value can be changed between evaluations without rebuilding the tree.
//!
//! # Architecture
//!
//! - [`Evaluate`]: the single capability every node kind implements
//! - [`Node`]: closed sum type over all node kinds, with exhaustive dispatch
//! - [`Number`], [`Variable`]: leaves
//! - [`Negation`]: unary sign flip
//! - [`OperatorBuilder`] → [`Operator`]: binary node, parameterized once
//! - [`FunctionBuilder`] → [`Function`]: named node of arity 1, 2, or 3,
//!   validated when its parameters are assigned
//! - [`BinaryOp`], [`library`]: standard operators and functions
//!
//! Operators and functions are built in two phases. A builder holds the
//! callable; `set_parameters` consumes it and returns the ready node, so an
//! evaluable node with missing children cannot exist.
//!
//! # Stack Depth
//!
//! [`Node::evaluate`] recurses once per nesting level and grows the stack on
//! demand (see [`ensure_sufficient_stack`]). [`Node::evaluate_iterative`]
//! walks the tree with explicit stacks instead and is selected with
//! [`EvalStrategy::Worklist`].
//!
//! # Tracing
//!
//! Call [`init_tracing`] and set `RUST_LOG=numex_eval=trace` to see
//! parameter assignment and rejected input.

mod errors;
mod eval_strategy;
mod function;
pub mod library;
mod negation;
mod node;
mod number;
mod operator;
mod ops;
mod stack;
mod tracing_init;
mod variable;
mod worklist;

pub use errors::{arity_mismatch, null_argument, parse_error, NodeError, NodeResult};
pub use eval_strategy::EvalStrategy;
pub use function::{BinaryCallable, Callable, Function, FunctionBuilder, TernaryCallable, UnaryCallable};
pub use negation::Negation;
pub use node::{Evaluate, Node};
pub use number::Number;
pub use operator::{BinaryFn, Operator, OperatorBuilder};
pub use ops::{truthy, BinaryOp};
pub use stack::ensure_sufficient_stack;
pub use tracing_init::init_tracing;
pub use variable::Variable;
