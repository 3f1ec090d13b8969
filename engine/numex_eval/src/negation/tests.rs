#![allow(clippy::float_cmp, reason = "Sign flips are exact")]

use super::*;
use crate::{Number, Variable};

#[test]
fn negates_positive() {
    assert_eq!(Negation::new(Number::new(5.0)).evaluate(), -5.0);
}

#[test]
fn negates_negative() {
    assert_eq!(Negation::new(Number::new(-5.0)).evaluate(), 5.0);
}

#[test]
fn zero_becomes_negative_zero() {
    let result = Negation::new(Number::new(0.0)).evaluate();
    assert!(result == 0.0);
    assert!(result.is_sign_negative());
}

#[test]
fn infinity_flips() {
    assert_eq!(
        Negation::new(Number::new(f64::INFINITY)).evaluate(),
        f64::NEG_INFINITY
    );
}

#[test]
fn nan_stays_nan() {
    assert!(Negation::new(Number::new(f64::NAN)).evaluate().is_nan());
}

#[test]
fn double_negation_is_identity() {
    let inner = Negation::new(Number::new(3.25));
    assert_eq!(Negation::new(inner).evaluate(), 3.25);
}

#[test]
fn tracks_variable_changes() {
    let x = Variable::with_value(2.0);
    let neg = Negation::new(x.clone());
    assert_eq!(neg.evaluate(), -2.0);
    x.set_value(-8.0);
    assert_eq!(neg.evaluate(), 8.0);
}

#[test]
fn exposes_operand() {
    let neg = Negation::new(Number::new(1.0));
    assert_eq!(neg.operand().evaluate(), 1.0);
}
