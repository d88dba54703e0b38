// Function call cases. Calls are parsed without a signature table, so
// argument counts and types are not checked here.

/// Valid function calls
/// Format: (input, function name, number of arguments)
pub const VALID_FUNCTION_CALLS: &[(&str, &str, usize)] = &[
    ("time()", "time", 0),
    ("pi()", "pi", 0),
    ("abs(some_metric)", "abs", 1),
    (r#"floor(some_metric{foo!="bar"})"#, "floor", 1),
    ("rate(some_metric[5m])", "rate", 1),
    ("increase(some_metric[1h] offset 1d)", "increase", 1),
    ("round(some_metric, 5)", "round", 2),
    ("clamp(some_metric, 0, 100)", "clamp", 3),
    ("clamp(some_metric, 0, 100,)", "clamp", 3),
    ("predict_linear(disk_free[1h], 4 * 3600)", "predict_linear", 2),
    (
        "histogram_quantile(0.9, rate(latency_bucket[5m]))",
        "histogram_quantile",
        2,
    ),
    (
        r#"label_replace(up, "dst", "$1", "src", "(.*)")"#,
        "label_replace",
        5,
    ),
    (r#"label_join(up, "dst", ",", "a", "b", "c")"#, "label_join", 6),
    ("vector(time())", "vector", 1),
    ("scalar(sum(up))", "scalar", 1),
    ("absent_over_time(up[5m])", "absent_over_time", 1),
    ("quantile_over_time(0.5, x[1h:1m])", "quantile_over_time", 2),
    ("sort_by_label(up, \"instance\")", "sort_by_label", 2),
    // unknown names are still calls
    ("my_custom_function(x)", "my_custom_function", 1),
    // case is preserved
    ("RATE(x[1m])", "RATE", 1),
    // whitespace between name and parenthesis
    ("rate (x[1m])", "rate", 1),
];

/// Invalid function calls
/// Format: (input, fragment of the error message)
pub const INVALID_FUNCTION_CALLS: &[(&str, &str)] = &[
    ("rate(", "expected expression"),
    ("rate(x", "expected \")\""),
    ("rate(x y)", "expected \")\""),
    ("rate(,)", "expected expression"),
    ("rate(x,,)", "expected expression"),
    ("rate x[5m])", "expected end of input"),
    ("time())", "expected end of input"),
];
