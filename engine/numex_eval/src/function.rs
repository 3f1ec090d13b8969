//! Named function node of arity 1, 2, or 3.
//!
//! Functions are the user-extensible part of the tree: any closure of the
//! right shape can be wrapped. The shape is carried by [`Callable`], whose
//! variant *is* the arity, so a function's declared arity and its callable
//! can never disagree.
//!
//! # Two-phase construction
//!
//! A [`FunctionBuilder`] holds the name and callable. Assigning parameters
//! with [`FunctionBuilder::set_parameters`] validates them and consumes the
//! builder, producing a [`Function`] whose arguments live in a fixed-size
//! array matching the arity.
//!
//! ```text
//! builder (unparameterized) --set_parameters--> Function (ready) --evaluate--> f64
//! ```
//!
//! # Ternary functions
//!
//! The first argument of a ternary function is read as a boolean before the
//! callable sees it (see [`truthy`]). All three arguments are evaluated,
//! left to right, whichever way the condition goes.

use std::fmt;

use crate::errors::{arity_mismatch, null_argument, NodeResult};
use crate::node::{Evaluate, Node};
use crate::ops::truthy;
use crate::worklist::pop_values;

/// Body of a one-argument function.
pub type UnaryCallable = Box<dyn Fn(f64) -> f64>;
/// Body of a two-argument function.
pub type BinaryCallable = Box<dyn Fn(f64, f64) -> f64>;
/// Body of a three-argument function; the condition arrives as a `bool`.
pub type TernaryCallable = Box<dyn Fn(bool, f64, f64) -> f64>;

/// A function body, tagged by arity.
pub enum Callable {
    /// `f(x)`.
    Unary(UnaryCallable),
    /// `f(a, b)`.
    Binary(BinaryCallable),
    /// Conditional-style: `(condition, a, b)`.
    Ternary(TernaryCallable),
}

impl Callable {
    /// Number of arguments the body takes.
    #[inline]
    pub const fn arity(&self) -> usize {
        match self {
            Callable::Unary(_) => 1,
            Callable::Binary(_) => 2,
            Callable::Ternary(_) => 3,
        }
    }
}

impl fmt::Debug for Callable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let shape = match self {
            Callable::Unary(_) => "Unary",
            Callable::Binary(_) => "Binary",
            Callable::Ternary(_) => "Ternary",
        };
        write!(f, "Callable::{shape}")
    }
}

/// A function waiting for its arguments.
#[derive(Debug)]
pub struct FunctionBuilder {
    name: String,
    callable: Callable,
}

impl FunctionBuilder {
    /// A builder for `callable` under `name`. The arity follows the callable.
    pub fn new(name: impl Into<String>, callable: Callable) -> Self {
        FunctionBuilder {
            name: name.into(),
            callable,
        }
    }

    /// Shorthand for [`FunctionBuilder::new`] with [`Callable::Unary`].
    pub fn unary(name: impl Into<String>, f: impl Fn(f64) -> f64 + 'static) -> Self {
        Self::new(name, Callable::Unary(Box::new(f)))
    }

    /// Shorthand for [`FunctionBuilder::new`] with [`Callable::Binary`].
    pub fn binary(name: impl Into<String>, f: impl Fn(f64, f64) -> f64 + 'static) -> Self {
        Self::new(name, Callable::Binary(Box::new(f)))
    }

    /// Shorthand for [`FunctionBuilder::new`] with [`Callable::Ternary`].
    pub fn ternary(name: impl Into<String>, f: impl Fn(bool, f64, f64) -> f64 + 'static) -> Self {
        Self::new(name, Callable::Ternary(Box::new(f)))
    }

    /// Name used in error messages.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of parameters [`set_parameters`](Self::set_parameters) expects.
    #[inline]
    pub fn arity(&self) -> usize {
        self.callable.arity()
    }

    /// Validate and assign the arguments, producing the evaluable function.
    ///
    /// The count is checked first: a list whose length differs from the
    /// arity fails with [`NodeError::ArityMismatch`](crate::NodeError)
    /// carrying the supplied length. Then the first `None` slot fails with
    /// [`NodeError::NullArgument`](crate::NodeError) at its 1-based position.
    #[tracing::instrument(
        level = "trace",
        skip_all,
        fields(function = %self.name, arity = self.arity(), supplied = params.len())
    )]
    pub fn set_parameters(self, params: Vec<Option<Node>>) -> NodeResult<Function> {
        let expected = self.arity();
        if params.len() != expected {
            tracing::debug!("rejected parameter list: wrong argument count");
            return Err(arity_mismatch(&self.name, expected, params.len()));
        }

        let mut args = Vec::with_capacity(expected);
        for (index, param) in params.into_iter().enumerate() {
            match param {
                Some(node) => args.push(node),
                None => {
                    tracing::debug!(position = index + 1, "rejected parameter list: missing argument");
                    return Err(null_argument(&self.name, index + 1));
                }
            }
        }

        let FunctionBuilder { name, callable } = self;
        let application = match callable {
            Callable::Unary(f) => Application::Unary(f, fixed_args(&name, args)?),
            Callable::Binary(f) => Application::Binary(f, fixed_args(&name, args)?),
            Callable::Ternary(f) => Application::Ternary(f, fixed_args(&name, args)?),
        };
        Ok(Function { name, application })
    }
}

/// Convert the checked argument list into the array the arity calls for.
///
/// The length was already checked against the arity, so failure here means
/// the builder itself is inconsistent; it is still reported, not panicked on.
fn fixed_args<const N: usize>(name: &str, args: Vec<Node>) -> NodeResult<[Node; N]> {
    let got = args.len();
    <[Node; N]>::try_from(args).map_err(|_| arity_mismatch(name, N, got))
}

enum Application {
    Unary(UnaryCallable, [Node; 1]),
    Binary(BinaryCallable, [Node; 2]),
    Ternary(TernaryCallable, [Node; 3]),
}

/// A named function with its validated arguments.
pub struct Function {
    name: String,
    application: Application,
}

impl Function {
    /// Name the function was built with.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of arguments, fixed at construction.
    pub fn arity(&self) -> usize {
        self.arguments().len()
    }

    /// Arguments in call order.
    pub fn arguments(&self) -> &[Node] {
        match &self.application {
            Application::Unary(_, args) => args,
            Application::Binary(_, args) => args,
            Application::Ternary(_, args) => args,
        }
    }

    pub(crate) fn arguments_mut(&mut self) -> &mut [Node] {
        match &mut self.application {
            Application::Unary(_, args) => args,
            Application::Binary(_, args) => args,
            Application::Ternary(_, args) => args,
        }
    }

    /// Apply the callable to arguments already evaluated onto `values`,
    /// the last argument on top. Consumes exactly `arity` values.
    pub(crate) fn apply_from_stack(&self, values: &mut Vec<f64>) -> f64 {
        match &self.application {
            Application::Unary(f, _) => {
                let [x] = pop_values(values);
                f(x)
            }
            Application::Binary(f, _) => {
                let [a, b] = pop_values(values);
                f(a, b)
            }
            Application::Ternary(f, _) => {
                let [condition, a, b] = pop_values(values);
                f(truthy(condition), a, b)
            }
        }
    }
}

impl Evaluate for Function {
    fn evaluate(&self) -> f64 {
        match &self.application {
            Application::Unary(f, [x]) => f(x.evaluate()),
            Application::Binary(f, [a, b]) => {
                let a = a.evaluate();
                let b = b.evaluate();
                f(a, b)
            }
            Application::Ternary(f, [condition, a, b]) => {
                let condition = condition.evaluate();
                let a = a.evaluate();
                let b = b.evaluate();
                f(truthy(condition), a, b)
            }
        }
    }
}

impl fmt::Debug for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Function")
            .field("name", &self.name)
            .field("arguments", &self.arguments())
            .finish()
    }
}
