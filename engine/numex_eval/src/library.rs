//! Standard function library.
//!
//! Builders for the functions a parser usually recognises by name. Each
//! call returns a fresh [`FunctionBuilder`], ready for `set_parameters`.
//! Applications with their own functions build them directly with
//! [`FunctionBuilder::unary`] and friends.

use crate::function::FunctionBuilder;

const UNARY: &[(&str, fn(f64) -> f64)] = &[
    ("abs", f64::abs),
    ("sqrt", f64::sqrt),
    ("cbrt", f64::cbrt),
    ("exp", f64::exp),
    ("ln", f64::ln),
    ("log10", f64::log10),
    ("log2", f64::log2),
    ("sin", f64::sin),
    ("cos", f64::cos),
    ("tan", f64::tan),
    ("asin", f64::asin),
    ("acos", f64::acos),
    ("atan", f64::atan),
    ("sinh", f64::sinh),
    ("cosh", f64::cosh),
    ("tanh", f64::tanh),
    ("floor", f64::floor),
    ("ceil", f64::ceil),
    ("round", f64::round),
    ("trunc", f64::trunc),
    ("sign", sign),
];

const BINARY: &[(&str, fn(f64, f64) -> f64)] = &[
    ("min", f64::min),
    ("max", f64::max),
    ("pow", f64::powf),
    ("atan2", f64::atan2),
    ("hypot", f64::hypot),
    ("log", f64::log),
];

const TERNARY: &[(&str, fn(bool, f64, f64) -> f64)] = &[("if", choose)];

/// `-1`, `0` or `1`; zero keeps its sign and NaN stays NaN.
fn sign(x: f64) -> f64 {
    if x == 0.0 || x.is_nan() {
        x
    } else {
        x.signum()
    }
}

fn choose(condition: bool, then: f64, otherwise: f64) -> f64 {
    if condition {
        then
    } else {
        otherwise
    }
}

/// A builder for the named standard function, if there is one.
pub fn builtin(name: &str) -> Option<FunctionBuilder> {
    if let Some(&(found, f)) = UNARY.iter().find(|(n, _)| *n == name) {
        return Some(FunctionBuilder::unary(found, f));
    }
    if let Some(&(found, f)) = BINARY.iter().find(|(n, _)| *n == name) {
        return Some(FunctionBuilder::binary(found, f));
    }
    TERNARY
        .iter()
        .find(|(n, _)| *n == name)
        .map(|&(found, f)| FunctionBuilder::ternary(found, f))
}

/// Names of every standard function, unary first, then binary, then ternary.
pub fn names() -> impl Iterator<Item = &'static str> {
    UNARY
        .iter()
        .map(|(n, _)| *n)
        .chain(BINARY.iter().map(|(n, _)| *n))
        .chain(TERNARY.iter().map(|(n, _)| *n))
}

/// Arity of the named standard function.
pub fn arity_of(name: &str) -> Option<usize> {
    builtin(name).map(|builder| builder.arity())
}
