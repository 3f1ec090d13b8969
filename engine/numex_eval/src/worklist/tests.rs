#![allow(clippy::unwrap_used, clippy::float_cmp, reason = "Tests compare exact results")]

use std::cell::RefCell;
use std::rc::Rc;

use pretty_assertions::assert_eq;

use super::*;
use crate::{library, BinaryOp, FunctionBuilder, Negation, Number, Variable};

fn recorder(seen: &Rc<RefCell<Vec<f64>>>, tag: f64) -> Node {
    let seen = Rc::clone(seen);
    FunctionBuilder::unary("record", move |x| {
        seen.borrow_mut().push(x);
        x
    })
    .set_parameters(vec![Some(Number::new(tag).into())])
    .unwrap()
    .into()
}

#[test]
fn leaf_root() {
    assert_eq!(Node::from(4.0).evaluate_iterative(), 4.0);
    assert_eq!(Node::from(Variable::with_value(-1.0)).evaluate_iterative(), -1.0);
}

#[test]
fn operator_keeps_operand_order() {
    let tree: Node = BinaryOp::Div
        .builder()
        .set_parameters(Number::new(1.0), Number::new(4.0))
        .into();
    assert_eq!(tree.evaluate_iterative(), 0.25);
}

#[test]
fn visits_children_in_recursive_order() {
    let recursive_seen = Rc::new(RefCell::new(Vec::new()));
    let worklist_seen = Rc::new(RefCell::new(Vec::new()));

    let build = |seen: &Rc<RefCell<Vec<f64>>>| -> Node {
        let max = library::builtin("max")
            .unwrap()
            .set_parameters(vec![Some(recorder(seen, 1.0)), Some(recorder(seen, 2.0))])
            .unwrap();
        let cond = library::builtin("if")
            .unwrap()
            .set_parameters(vec![
                Some(recorder(seen, 0.0)),
                Some(max.into()),
                Some(Negation::new(recorder(seen, 3.0)).into()),
            ])
            .unwrap();
        BinaryOp::Sub
            .builder()
            .set_parameters(cond, recorder(seen, 4.0))
            .into()
    };

    let recursive = build(&recursive_seen).evaluate();
    let iterative = build(&worklist_seen).evaluate_iterative();

    assert_eq!(recursive, -7.0);
    assert_eq!(iterative, recursive);
    assert_eq!(*worklist_seen.borrow(), vec![0.0, 1.0, 2.0, 3.0, 4.0]);
    assert_eq!(*worklist_seen.borrow(), *recursive_seen.borrow());
}

#[test]
fn deep_chain_without_native_recursion() {
    let mut node = Node::from(0.5);
    for _ in 0..1_000_001 {
        node = Negation::new(node).into();
    }
    assert_eq!(node.evaluate_iterative(), -0.5);
}

#[test]
fn deep_left_spine() {
    let mut node = Node::from(0.0);
    for _ in 0..100_000 {
        node = BinaryOp::Add
            .builder()
            .set_parameters(node, Number::new(1.0))
            .into();
    }
    assert_eq!(node.evaluate_iterative(), 100_000.0);
}

#[test]
fn pop_values_takes_top_in_order() {
    let mut values = vec![1.0, 2.0, 3.0, 4.0];
    let [a, b] = pop_values(&mut values);
    assert_eq!((a, b), (3.0, 4.0));
    assert_eq!(values, vec![1.0, 2.0]);
}

#[test]
#[should_panic(expected = "task needs 2")]
fn short_value_stack_is_a_bug_not_nan() {
    let mut values = vec![1.0];
    let _: [f64; 2] = pop_values(&mut values);
}

#[test]
fn negation_inside_function_arguments() {
    // max(-x, -(-2))
    let x = Variable::with_value(5.0);
    let tree: Node = library::builtin("max")
        .unwrap()
        .set_parameters(vec![
            Some(Negation::new(x.clone()).into()),
            Some(Negation::new(Negation::new(Number::new(-2.0))).into()),
        ])
        .unwrap()
        .into();
    assert_eq!(tree.evaluate_iterative(), -2.0);
    x.set_value(-7.0);
    assert_eq!(tree.evaluate_iterative(), 7.0);
}
