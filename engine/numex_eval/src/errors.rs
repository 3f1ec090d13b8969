//! Error types for tree assembly.
//!
//! Every error here is raised while a tree is being put together: parsing a
//! numeric literal, or assigning parameters to a function. Evaluation of an
//! assembled tree cannot fail.
//!
//! Factory functions build each variant and are the preferred way to
//! construct errors, mirroring how the assembly layer reports them.

use std::num::ParseFloatError;

/// Result of a tree assembly step.
pub type NodeResult<T> = Result<T, NodeError>;

/// Assembly-time contract violation.
///
/// The variants carry structured data so the assembly layer can match on
/// the kind and translate it into a user-facing syntax error.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum NodeError {
    /// Text could not be converted to an `f64`.
    #[error("invalid numeric literal `{literal}`")]
    Parse {
        literal: String,
        #[source]
        source: ParseFloatError,
    },

    /// Supplied parameter count differs from the declared arity.
    ///
    /// `got` is the number of parameters actually supplied.
    #[error("function `{name}` takes {expected} argument(s) but {got} were supplied")]
    ArityMismatch {
        name: String,
        expected: usize,
        got: usize,
    },

    /// A parameter slot was left empty.
    ///
    /// `position` is 1-based.
    #[error("argument {position} of function `{name}` is missing")]
    NullArgument { name: String, position: usize },
}

impl NodeError {
    /// Whether this error came from a malformed literal rather than from
    /// parameter assignment.
    #[inline]
    pub fn is_parse(&self) -> bool {
        matches!(self, Self::Parse { .. })
    }
}

/// A literal that is not a valid `f64`.
#[cold]
pub fn parse_error(literal: &str, source: ParseFloatError) -> NodeError {
    NodeError::Parse {
        literal: literal.to_string(),
        source,
    }
}

/// A parameter list whose length differs from the arity.
#[cold]
pub fn arity_mismatch(name: &str, expected: usize, got: usize) -> NodeError {
    NodeError::ArityMismatch {
        name: name.to_string(),
        expected,
        got,
    }
}

/// A missing argument at 1-based `position`.
#[cold]
pub fn null_argument(name: &str, position: usize) -> NodeError {
    NodeError::NullArgument {
        name: name.to_string(),
        position,
    }
}

#[cfg(test)]
mod tests;
