#![allow(clippy::float_cmp, reason = "Tests compare exact results")]

use super::*;
use crate::{Evaluate, FunctionBuilder, Number};

#[test]
fn repeated_calls_report_first_outcome() {
    let first = init_tracing();
    assert_eq!(init_tracing(), first);
    assert_eq!(init_tracing(), first);
}

#[test]
fn events_after_init_do_not_disturb_evaluation() {
    init_tracing();
    tracing::debug!(target: "numex_eval", "subscriber check");

    assert!(Number::parse("bogus").is_err());
    assert!(FunctionBuilder::unary("neg", |x| -x)
        .set_parameters(vec![None])
        .is_err());

    let tree = crate::Node::from(Number::new(2.0));
    assert_eq!(tree.evaluate(), 2.0);
    assert_eq!(tree.evaluate_iterative(), 2.0);
}
