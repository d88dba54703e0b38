// Test helper macros shared by the integration tests.
// Each test crate pulls them in with `#[macro_use] mod common;`.
#![allow(unused_macros)]

/// Assert that input parses, returning the tree
macro_rules! assert_parses {
    ($input:expr) => {{
        match ::promql_series::parse($input) {
            Ok(expr) => expr,
            Err(err) => panic!("Expected '{}' to parse successfully, got error: {}", $input, err),
        }
    }};
}

/// Assert that input fails to parse, optionally checking the message
macro_rules! assert_parse_error {
    ($input:expr) => {{
        match ::promql_series::parse($input) {
            Ok(expr) => panic!("Expected '{}' to fail parsing, but got: {:?}", $input, expr),
            Err(err) => err,
        }
    }};
    ($input:expr, $error_contains:expr) => {{
        let err = assert_parse_error!($input);
        let message = err.to_string();
        assert!(
            message.contains($error_contains),
            "Expected error for '{}' to contain '{}', got: {}",
            $input,
            $error_contains,
            message
        );
        err
    }};
}

/// Assert that printing the parsed tree and parsing it again gives the same tree
macro_rules! assert_roundtrip {
    ($input:expr) => {{
        let expr = assert_parses!($input);
        let printed = expr.to_string();
        match ::promql_series::parse(&printed) {
            Ok(reparsed) => assert_eq!(
                reparsed, expr,
                "Roundtrip changed the tree: '{}' -> '{}'",
                $input, printed
            ),
            Err(err) => panic!(
                "Roundtrip failed: '{}' -> '{}' failed to parse: {}",
                $input, printed, err
            ),
        }
        printed
    }};
}

/// Assert the series extracted from a query
macro_rules! assert_series {
    ($input:expr, $expected:expr) => {{
        let expr = assert_parses!($input);
        let series = ::promql_series::extract_series(&expr);
        let expected: Vec<&str> = $expected.iter().copied().collect();
        assert_eq!(series, expected, "Wrong series for '{}'", $input);
    }};
}
