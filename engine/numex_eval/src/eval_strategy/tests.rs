use super::*;

#[test]
fn recursive_is_default() {
    assert_eq!(EvalStrategy::default(), EvalStrategy::Recursive);
}

#[test]
fn only_recursive_uses_native_stack() {
    assert!(EvalStrategy::Recursive.uses_native_stack());
    assert!(!EvalStrategy::Worklist.uses_native_stack());
}
