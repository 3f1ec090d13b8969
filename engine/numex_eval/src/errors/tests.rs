use super::*;
use pretty_assertions::assert_eq;

fn float_error(text: &str) -> ParseFloatError {
    match text.parse::<f64>() {
        Ok(v) => panic!("`{text}` unexpectedly parsed as {v}"),
        Err(e) => e,
    }
}

#[test]
fn arity_mismatch_reports_supplied_count() {
    let err = arity_mismatch("sqrt", 1, 2);
    assert_eq!(
        err,
        NodeError::ArityMismatch {
            name: "sqrt".to_string(),
            expected: 1,
            got: 2,
        }
    );
    assert_eq!(
        err.to_string(),
        "function `sqrt` takes 1 argument(s) but 2 were supplied"
    );
}

#[test]
fn null_argument_names_position() {
    let err = null_argument("if", 3);
    assert_eq!(err.to_string(), "argument 3 of function `if` is missing");
    assert!(!err.is_parse());
}

#[test]
fn parse_error_keeps_source() {
    let err = parse_error("1.2.3", float_error("1.2.3"));
    assert!(err.is_parse());
    assert_eq!(err.to_string(), "invalid numeric literal `1.2.3`");
    assert!(std::error::Error::source(&err).is_some());
}
