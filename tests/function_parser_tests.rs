// Integration tests for function call parsing

#[macro_use]
mod common;
mod parser {
    pub mod function_tests;
}

use parser::function_tests::{INVALID_FUNCTION_CALLS, VALID_FUNCTION_CALLS};
use promql_series::parser::function::FUNCTIONS;
use promql_series::{AggregateOp, Expr, is_known_function};

#[test]
fn test_valid_function_calls() {
    for (input, name, args) in VALID_FUNCTION_CALLS {
        match assert_parses!(input) {
            Expr::Call(call) => {
                assert_eq!(call.name, *name, "Wrong name for '{}'", input);
                assert_eq!(call.args.len(), *args, "Wrong argument count for '{}'", input);
            }
            other => panic!("Expected function call for '{}', got {:?}", input, other),
        }
    }
}

#[test]
fn test_invalid_function_calls() {
    for (input, error) in INVALID_FUNCTION_CALLS {
        assert_parse_error!(input, error);
    }
}

#[test]
fn test_function_table() {
    assert!(is_known_function("rate"));
    assert!(is_known_function("histogram_quantile"));
    assert!(!is_known_function("http_requests_total"));
    // aggregations are operators, not functions
    for op in AggregateOp::ALL {
        assert!(!is_known_function(op.as_str()), "{} listed as function", op);
    }
}

#[test]
fn test_function_table_has_no_duplicates() {
    let mut names = FUNCTIONS.to_vec();
    names.sort_unstable();
    names.dedup();
    assert_eq!(names.len(), FUNCTIONS.len());
}

#[test]
fn test_every_known_function_parses_as_call() {
    for name in FUNCTIONS {
        let input = format!("{}(x)", name);
        assert!(
            matches!(assert_parses!(&input), Expr::Call(_)),
            "'{}' did not parse as a call",
            input
        );
    }
}
