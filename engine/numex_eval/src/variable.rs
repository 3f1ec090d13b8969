//! Variable leaf.
//!
//! A `Variable` is a handle to a single mutable slot. The registry that owns
//! the variable namespace keeps one handle; the expression tree holds
//! clones of it. Setting the value through any handle is seen by the next
//! evaluation of every tree that references the slot.
//!
//! The slot is an `Rc<Cell<f64>>`, so variables are neither `Send` nor
//! `Sync`. Evaluating on several threads means building a tree (and a set
//! of bindings) per thread.

use std::cell::Cell;
use std::rc::Rc;

use crate::node::Evaluate;

/// A named, externally settable value. Defaults to `0.0`.
#[derive(Clone, Debug, Default)]
pub struct Variable {
    slot: Rc<Cell<f64>>,
}

impl Variable {
    /// A fresh slot holding `0.0`.
    pub fn new() -> Self {
        Self::default()
    }

    /// A fresh slot holding `value`.
    pub fn with_value(value: f64) -> Self {
        Variable {
            slot: Rc::new(Cell::new(value)),
        }
    }

    /// Overwrite the stored value for subsequent evaluations.
    #[inline]
    pub fn set_value(&self, value: f64) {
        self.slot.set(value);
    }

    /// Current value of the slot.
    #[inline]
    pub fn value(&self) -> f64 {
        self.slot.get()
    }

    /// Whether two handles refer to the same slot.
    pub fn shares_slot(&self, other: &Variable) -> bool {
        Rc::ptr_eq(&self.slot, &other.slot)
    }
}

impl Evaluate for Variable {
    #[inline]
    fn evaluate(&self) -> f64 {
        self.slot.get()
    }
}

#[cfg(test)]
mod tests;
