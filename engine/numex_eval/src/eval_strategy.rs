//! Evaluation strategies.
//!
//! Both strategies visit children in the same order and produce
//! bit-identical results; they differ only in how they use the stack.

/// How a tree is walked during evaluation.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum EvalStrategy {
    /// Depth-first recursion, one native frame per nesting level. The stack
    /// is grown on demand on native targets.
    #[default]
    Recursive,
    /// Explicit task and value stacks on the heap. No native recursion, so
    /// depth is bounded only by memory.
    Worklist,
}

impl EvalStrategy {
    /// Whether evaluation depth is bounded by the native stack.
    ///
    /// On wasm32 there is no stack growth, so the recursive strategy is
    /// limited by the engine's fixed stack.
    #[inline]
    pub fn uses_native_stack(self) -> bool {
        matches!(self, Self::Recursive)
    }
}

#[cfg(test)]
mod tests;
