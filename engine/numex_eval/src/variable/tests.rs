#![allow(clippy::float_cmp, reason = "Tests compare exact stored values")]

use super::*;

#[test]
fn default_is_zero() {
    assert_eq!(Variable::new().evaluate(), 0.0);
    assert_eq!(Variable::default().value(), 0.0);
}

#[test]
fn with_value_sets_initial() {
    assert_eq!(Variable::with_value(-1.5).evaluate(), -1.5);
}

#[test]
fn set_value_is_stable_until_next_set() {
    let x = Variable::new();
    x.set_value(4.0);
    assert_eq!(x.evaluate(), 4.0);
    assert_eq!(x.evaluate(), 4.0);
    x.set_value(9.0);
    assert_eq!(x.evaluate(), 9.0);
}

#[test]
fn clones_share_the_slot() {
    let registry_handle = Variable::with_value(1.0);
    let tree_handle = registry_handle.clone();
    assert!(tree_handle.shares_slot(&registry_handle));

    registry_handle.set_value(2.0);
    assert_eq!(tree_handle.evaluate(), 2.0);
}

#[test]
fn separate_variables_are_independent() {
    let a = Variable::with_value(1.0);
    let b = Variable::with_value(1.0);
    assert!(!a.shares_slot(&b));
    a.set_value(5.0);
    assert_eq!(b.evaluate(), 1.0);
}
